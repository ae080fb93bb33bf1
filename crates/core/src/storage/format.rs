use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::event::AlertEvent;

/// Current store document version.
pub const CURRENT_VERSION: u16 = 1;

/// One persisted alert plus the id the store assigned to it.
///
/// The event keeps whatever `id` it was created with; readers see the
/// record id substituted instead (see [`StoredAlert::into_event`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAlert {
    pub record_id: String,
    pub event: AlertEvent,
}

impl StoredAlert {
    pub fn new(record_id: impl Into<String>, event: AlertEvent) -> Self {
        Self {
            record_id: record_id.into(),
            event,
        }
    }

    /// The event as the store returns it: `id` replaced by the record id.
    pub fn into_event(self) -> AlertEvent {
        AlertEvent {
            id: self.record_id,
            ..self.event
        }
    }
}

/// On-disk layout of the JSON store file.
///
/// ```text
/// { "version": 1, "alerts": [ { "recordId": "...", "event": { ... } }, ... ] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    pub version: u16,
    #[serde(default)]
    pub alerts: Vec<StoredAlert>,
}

/// Serialize records into a store document.
pub fn write_document(alerts: &[StoredAlert]) -> Result<Vec<u8>, CoreError> {
    let doc = StoreDocument {
        version: CURRENT_VERSION,
        alerts: alerts.to_vec(),
    };
    serde_json::to_vec_pretty(&doc)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize alert store: {e}")))
}

/// Parse a store document, rejecting versions this build does not know.
pub fn read_document(data: &[u8]) -> Result<Vec<StoredAlert>, CoreError> {
    let doc: StoreDocument = serde_json::from_slice(data)
        .map_err(|e| CoreError::Deserialization(format!("Failed to parse alert store: {e}")))?;

    if doc.version == 0 || doc.version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(doc.version));
    }

    Ok(doc.alerts)
}
