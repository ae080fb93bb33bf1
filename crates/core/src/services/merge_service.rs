use std::collections::HashSet;

use crate::models::event::AlertEvent;
use crate::models::filters::Filters;

/// Merge alert sequences into one de-duplicated, newest-first collection.
///
/// Sources are consumed in order and the first occurrence of an `id` wins;
/// later duplicates are dropped along with their field values. The final
/// sort is stable, so ties on `timestamp` keep their merged order.
/// Merging an already-merged collection with itself is a no-op.
pub fn merge<I, S>(sources: I) -> Vec<AlertEvent>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = AlertEvent>,
{
    let mut merged = unique_by_id(sources.into_iter().flatten());
    merged.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    merged
}

/// Keep the first event for each `id`, preserving input order.
pub fn unique_by_id<I>(events: I) -> Vec<AlertEvent>
where
    I: IntoIterator<Item = AlertEvent>,
{
    let mut seen = HashSet::new();
    events
        .into_iter()
        .filter(|e| seen.insert(e.id.clone()))
        .collect()
}

/// The alert list as the UI shows it: unique, filtered, newest first.
pub fn apply_filters<'a>(events: &'a [AlertEvent], filters: &Filters) -> Vec<&'a AlertEvent> {
    let mut seen = HashSet::new();
    let mut visible: Vec<&AlertEvent> = events
        .iter()
        .filter(|e| seen.insert(e.id.as_str()))
        .filter(|e| filters.matches(e))
        .collect();
    visible.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    visible
}
