use chrono::NaiveDate;

use crate::journal::Entry;

/// Transient user constraints narrowing the displayed and summarized set.
///
/// Rebuilt from the UI control values on every render pass; never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub category: String,
    pub search: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.from.is_none()
            && self.to.is_none()
            && self.category.trim().is_empty()
            && self.search.trim().is_empty()
    }
}

/// Returns the entries satisfying every criterion, in their input order.
///
/// All four predicates are AND-ed: date within the `from`/`to` bounds when
/// present (calendar-day comparison), category containing the criterion
/// substring, and description or notes containing the search substring, both
/// case-insensitive. Empty criteria is the identity. Sorting for display is
/// a later render step, never done here.
pub fn apply(entries: &[Entry], criteria: &FilterCriteria) -> Vec<Entry> {
    let category = criteria.category.trim().to_lowercase();
    let search = criteria.search.trim().to_lowercase();

    entries
        .iter()
        .filter(|entry| {
            let within_from = criteria.from.map_or(true, |from| entry.date >= from);
            let within_to = criteria.to.map_or(true, |to| entry.date <= to);
            let matches_category =
                category.is_empty() || entry.category.to_lowercase().contains(&category);
            let matches_search = search.is_empty()
                || entry.description.to_lowercase().contains(&search)
                || entry.notes.to_lowercase().contains(&search);
            within_from && within_to && matches_category && matches_search
        })
        .cloned()
        .collect()
}
