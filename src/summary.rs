use chrono::{Datelike, NaiveDate};

use crate::journal::Entry;

/// Aggregate statistics over an already-filtered entry sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub total: f64,
    pub count: usize,
    pub average_per_day: f64,
    pub month_total: f64,
    pub top_category: Option<(String, f64)>,
}

/// Summarizes the filtered set as of `today`.
///
/// `today` only determines which `YYYY-MM` bucket counts as the current
/// month; production call sites pass `Local::now().date_naive()`. The top
/// category uses insertion-ordered grouping, so on a tied sum the first
/// category encountered wins.
pub fn summarize(entries: &[Entry], today: NaiveDate) -> Stats {
    let total: f64 = entries.iter().map(|entry| entry.amount).sum();
    let count = entries.len();

    let current_month = month_key(today);
    let mut month_total = 0.0;
    let mut categories: Vec<(String, f64)> = Vec::new();

    for entry in entries {
        if month_key(entry.date) == current_month {
            month_total += entry.amount;
        }
        match categories.iter_mut().find(|(name, _)| *name == entry.category) {
            Some((_, sum)) => *sum += entry.amount,
            None => categories.push((entry.category.clone(), entry.amount)),
        }
    }

    let top_category = categories
        .into_iter()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best });

    let earliest = entries.iter().map(|entry| entry.date).min();
    let latest = entries.iter().map(|entry| entry.date).max();
    let days_active = match (earliest, latest) {
        (Some(earliest), Some(latest)) => ((latest - earliest).num_days() + 1).max(1),
        _ => 0,
    };
    let average_per_day = if days_active > 0 {
        total / days_active as f64
    } else {
        0.0
    };

    Stats {
        total,
        count,
        average_per_day,
        month_total,
        top_category,
    }
}

fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}
