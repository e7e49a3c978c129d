//! Month grouping for the adoption history timeline.

use chrono::{Locale, NaiveDate};
use serde::Serialize;

use crate::models::AdoptionRequest;

/// Counts shown on the history screen's stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HistoryStats {
    /// Requests that ended in `completed`.
    pub completed: usize,
    /// Requests that ended in `rejected`.
    pub rejected: usize,
}

/// One month bucket of the history timeline.
#[derive(Debug)]
pub struct MonthGroup<'a> {
    /// Localized "month de year" heading ("outubro de 2025").
    pub label: String,
    /// Requests whose date falls in this month, in input order.
    pub requests: Vec<&'a AdoptionRequest>,
}

/// Localized month heading for a date ("outubro de 2025").
#[must_use]
pub fn month_label(date: NaiveDate) -> String {
    date.format_localized("%B de %Y", Locale::pt_BR).to_string()
}

/// Partition requests into per-month groups.
///
/// Group order is first-encounter order during a single left-to-right pass:
/// it mirrors however the underlying collection is stored and is NOT sorted
/// chronologically. Within each group the input order is preserved, and every
/// request lands in exactly one group.
pub fn group_by_month<'a, I>(requests: I) -> Vec<MonthGroup<'a>>
where
    I: IntoIterator<Item = &'a AdoptionRequest>,
{
    let mut groups: Vec<MonthGroup<'a>> = Vec::new();
    for request in requests {
        let label = month_label(request.request_date);
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.requests.push(request),
            None => groups.push(MonthGroup {
                label,
                requests: vec![request],
            }),
        }
    }
    groups
}
