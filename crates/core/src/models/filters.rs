use serde::{Deserialize, Serialize};

use super::event::{AlertEvent, Chain, EventType, Severity};

/// Transient view state for the alert list. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    pub chains: Vec<Chain>,
    pub event_types: Vec<EventType>,
    pub severities: Vec<Severity>,
    /// Free text matched against token symbol and contract
    pub search: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            chains: Chain::ALL.to_vec(),
            event_types: EventType::ALL.to_vec(),
            severities: Severity::ALL.to_vec(),
            search: String::new(),
        }
    }
}

impl Filters {
    /// Whether an alert passes every selected set and the search text.
    ///
    /// Search is trimmed and case-insensitive; blank search matches all.
    pub fn matches(&self, event: &AlertEvent) -> bool {
        if !self.chains.contains(&event.chain)
            || !self.event_types.contains(&event.event_type)
            || !self.severities.contains(&event.severity)
        {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        event.token_symbol.to_lowercase().contains(&needle)
            || event
                .token_contract
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle))
    }
}
