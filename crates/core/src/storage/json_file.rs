use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::event::AlertEvent;

use super::format::{self, StoredAlert};
use super::traits::AlertStore;

/// Alert store persisted as a single JSON document on disk (native only).
///
/// `open` loads the file (a missing file starts an empty store); every
/// append rewrites the whole document. A store built without a path is
/// "not configured" and refuses to open.
#[derive(Debug)]
pub struct JsonFileAlertStore {
    path: Option<PathBuf>,
    records: Vec<StoredAlert>,
    open: bool,
}

impl JsonFileAlertStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            records: Vec::new(),
            open: false,
        }
    }

    /// A store with no backing file; `open` fails with `StoreUnavailable`.
    pub fn unconfigured() -> Self {
        Self {
            path: None,
            records: Vec::new(),
            open: false,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn configured_path(&self) -> Result<&Path, CoreError> {
        self.path
            .as_deref()
            .ok_or_else(|| CoreError::StoreUnavailable("no store path configured".into()))
    }

    fn ensure_open(&self) -> Result<(), CoreError> {
        if self.open {
            Ok(())
        } else {
            Err(CoreError::StoreUnavailable("file store is not open".into()))
        }
    }

    fn flush(&self, records: &[StoredAlert]) -> Result<(), CoreError> {
        let path = self.configured_path()?;
        let bytes = format::write_document(records)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

#[async_trait]
impl AlertStore for JsonFileAlertStore {
    fn name(&self) -> &str {
        "json-file"
    }

    fn is_open(&self) -> bool {
        self.open
    }

    async fn open(&mut self) -> Result<(), CoreError> {
        let path = self.configured_path()?;
        let records = if path.exists() {
            let bytes = std::fs::read(path)?;
            format::read_document(&bytes)?
        } else {
            Vec::new()
        };
        log::debug!("Opened alert store {} ({} records)", path.display(), records.len());
        self.records = records;
        self.open = true;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), CoreError> {
        self.records.clear();
        self.open = false;
        Ok(())
    }

    async fn list_alerts(&self) -> Result<Vec<AlertEvent>, CoreError> {
        self.ensure_open()?;
        Ok(self.records.iter().cloned().map(StoredAlert::into_event).collect())
    }

    async fn append_alert(&mut self, event: &AlertEvent) -> Result<String, CoreError> {
        self.ensure_open()?;
        let record_id = Uuid::new_v4().to_string();

        let mut records = self.records.clone();
        records.push(StoredAlert::new(record_id.clone(), event.clone()));
        // Only keep the record in memory once it is on disk.
        self.flush(&records)?;
        self.records = records;

        Ok(record_id)
    }
}
