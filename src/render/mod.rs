pub mod format;
pub mod html;
pub mod table;

use crate::journal::Entry;
use crate::summary::Stats;

use format::format_currency;

/// One stat card: label, headline value, and a small detail line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub detail: String,
}

/// Orders entries for display: date descending. Stable, so entries sharing
/// a date keep their newest-first insertion order.
pub fn sort_for_display(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

/// The four stat cards shown above the table.
pub fn stat_cards(stats: &Stats, symbol: &str) -> Vec<StatCard> {
    let top_category = stats
        .top_category
        .as_ref()
        .map(|(name, sum)| format!("{} \u{2022} {}", name, format_currency(symbol, *sum)));

    vec![
        StatCard {
            label: "Filtered total".into(),
            value: format_currency(symbol, stats.total),
            detail: entry_count_phrase(stats.count),
        },
        StatCard {
            label: "Average per day".into(),
            value: format_currency(symbol, stats.average_per_day),
            detail: if stats.count > 0 {
                "Across active days".into()
            } else {
                "No data yet".into()
            },
        },
        StatCard {
            label: "This month".into(),
            value: format_currency(symbol, stats.month_total),
            detail: "Month-to-date total".into(),
        },
        StatCard {
            label: "Top category".into(),
            value: top_category.unwrap_or_else(|| "\u{2014}".into()),
            detail: if stats.top_category.is_some() {
                "Highest spend".into()
            } else {
                "Add expenses to see insights".into()
            },
        },
    ]
}

/// Entry-count caption under the table, with correct pluralization.
pub fn entry_count_caption(count: usize) -> String {
    format!("{} shown", entry_count_phrase(count))
}

fn entry_count_phrase(count: usize) -> String {
    if count == 1 {
        "1 entry".into()
    } else {
        format!("{} entries", count)
    }
}

/// Merges the preset categories with every distinct category from history.
/// Preset first, then any additional categories in encounter order;
/// duplicates removed with a case-sensitive match.
pub fn merge_suggestions(preset: &[String], history: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = preset.to_vec();
    for category in history {
        if !merged.contains(category) {
            merged.push(category.clone());
        }
    }
    merged
}
