//! Markup fragments for the expense table, stat cards, and suggestion list.
//!
//! Everything here is a pure string transform; user-supplied text is escaped
//! before it is embedded anywhere.

use crate::journal::Entry;

use super::format::{format_currency, format_date};
use super::StatCard;

/// Escapes the five HTML-significant characters so entry content can never
/// inject markup or script.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Table body rows for already display-sorted entries, or the empty-state
/// placeholder row. Each row carries its entry id on the delete control.
pub fn table_body(rows: &[Entry], symbol: &str) -> String {
    if rows.is_empty() {
        return "<tr class=\"empty\"><td colspan=\"6\">No expenses match your filters.</td></tr>"
            .to_string();
    }

    rows.iter()
        .map(|entry| {
            let note = if entry.notes.is_empty() {
                String::new()
            } else {
                format!("<p class=\"note-text\">{}</p>", escape_html(&entry.notes))
            };
            format!(
                "<tr>\
                 <td>{date}</td>\
                 <td><div>{description}</div>{note}</td>\
                 <td><span class=\"badge-pill\">{category}</span></td>\
                 <td>{payment}</td>\
                 <td class=\"num\">{amount}</td>\
                 <td class=\"actions\"><button class=\"delete\" data-delete=\"{id}\">Delete</button></td>\
                 </tr>",
                date = format_date(entry.date),
                description = escape_html(&entry.description),
                note = note,
                category = escape_html(&entry.category),
                payment = escape_html(&entry.payment),
                amount = format_currency(symbol, entry.amount),
                id = entry.id,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stat cards as markup.
pub fn stat_cards_markup(cards: &[StatCard]) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                "<div class=\"stat-card\">\
                 <p class=\"stat-label\">{label}</p>\
                 <p class=\"stat-value\">{value}</p>\
                 <p class=\"stat-trend\">{detail}</p>\
                 </div>",
                label = escape_html(&card.label),
                value = escape_html(&card.value),
                detail = escape_html(&card.detail),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Datalist options for the category suggestion list.
pub fn datalist_options(suggestions: &[String]) -> String {
    suggestions
        .iter()
        .map(|category| format!("<option value=\"{}\"></option>", escape_html(category)))
        .collect::<Vec<_>>()
        .join("")
}

/// A complete static page snapshot, used by the CLI export command.
pub fn render_page(
    rows: &[Entry],
    cards: &[StatCard],
    caption: &str,
    suggestions: &[String],
    symbol: &str,
) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Daily Expense Tracker</title>\n</head>\n<body>\n\
         <section class=\"stats\">\n{cards}\n</section>\n\
         <p id=\"entry-count\">{caption}</p>\n\
         <table>\n<thead><tr>\
         <th>Date</th><th>Description</th><th>Category</th>\
         <th>Payment</th><th>Amount</th><th></th>\
         </tr></thead>\n<tbody>\n{body}\n</tbody>\n</table>\n\
         <datalist id=\"category-options\">{options}</datalist>\n\
         </body>\n</html>\n",
        cards = stat_cards_markup(cards),
        caption = escape_html(caption),
        body = table_body(rows, symbol),
        options = datalist_options(suggestions),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_the_five_significant_characters() {
        assert_eq!(
            escape_html("a & b < c > d \"e\" 'f'"),
            "a &amp; b &lt; c &gt; d &quot;e&quot; &#039;f&#039;"
        );
    }

    #[test]
    fn empty_rows_render_the_placeholder() {
        let body = table_body(&[], "$");
        assert!(body.contains("No expenses match your filters."));
        assert!(body.starts_with("<tr class=\"empty\">"));
    }
}
