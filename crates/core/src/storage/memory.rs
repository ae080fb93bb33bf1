use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::event::AlertEvent;

use super::format::StoredAlert;
use super::traits::AlertStore;

/// Session-only alert store. Contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryAlertStore {
    records: Vec<StoredAlert>,
    open: bool,
}

impl MemoryAlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted records, regardless of open state.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AlertStore for MemoryAlertStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn is_open(&self) -> bool {
        self.open
    }

    async fn open(&mut self) -> Result<(), CoreError> {
        self.open = true;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), CoreError> {
        self.open = false;
        Ok(())
    }

    async fn list_alerts(&self) -> Result<Vec<AlertEvent>, CoreError> {
        if !self.open {
            return Err(CoreError::StoreUnavailable("memory store is closed".into()));
        }
        Ok(self.records.iter().cloned().map(StoredAlert::into_event).collect())
    }

    async fn append_alert(&mut self, event: &AlertEvent) -> Result<String, CoreError> {
        if !self.open {
            return Err(CoreError::StoreUnavailable("memory store is closed".into()));
        }
        let record_id = Uuid::new_v4().to_string();
        self.records.push(StoredAlert::new(record_id.clone(), event.clone()));
        Ok(record_id)
    }
}
