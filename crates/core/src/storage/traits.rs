use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::event::AlertEvent;

/// Durable alert collection, append-only from the core's point of view.
///
/// Clients are constructed explicitly and handed to whoever needs them.
/// Until [`AlertStore::open`] succeeds (and after [`AlertStore::close`]),
/// reads and writes fail with [`CoreError::StoreUnavailable`].
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AlertStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    fn is_open(&self) -> bool;

    /// Connect to / load the backing store.
    async fn open(&mut self) -> Result<(), CoreError>;

    /// Release the backing store. Closing a closed store is a no-op.
    async fn close(&mut self) -> Result<(), CoreError>;

    /// Every persisted alert, with the store's record id as `id`.
    /// Order is unspecified.
    async fn list_alerts(&self) -> Result<Vec<AlertEvent>, CoreError>;

    /// Persist one alert and return the record id assigned to it.
    async fn append_alert(&mut self, event: &AlertEvent) -> Result<String, CoreError>;
}
