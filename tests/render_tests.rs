use chrono::NaiveDate;

use expense_core::journal::{Entry, EntryDraft};
use expense_core::render::html::{datalist_options, render_page, table_body};
use expense_core::render::{sort_for_display, stat_cards};
use expense_core::summary::summarize;

fn entry(date: &str, amount: &str, category: &str, description: &str, notes: &str) -> Entry {
    let draft = EntryDraft {
        date: date.into(),
        amount: amount.into(),
        category: category.into(),
        description: description.into(),
        notes: notes.into(),
        ..EntryDraft::default()
    };
    Entry::from_draft(&draft, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).unwrap()
}

#[test]
fn script_description_renders_as_literal_text() {
    let rows = vec![entry(
        "2024-01-02",
        "5",
        "Food",
        "<script>alert('x')</script>",
        "",
    )];
    let body = table_body(&rows, "$");
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
}

#[test]
fn rows_render_in_date_descending_order() {
    let rows = sort_for_display(vec![
        entry("2024-01-01", "10", "Food", "first", ""),
        entry("2024-02-01", "5", "Transport", "last", ""),
        entry("2024-01-15", "7", "Food", "middle", ""),
    ]);
    let body = table_body(&rows, "$");
    let last_pos = body.find("last").unwrap();
    let middle_pos = body.find("middle").unwrap();
    let first_pos = body.find("first").unwrap();
    assert!(last_pos < middle_pos && middle_pos < first_pos);
}

#[test]
fn notes_get_their_own_paragraph_only_when_present() {
    let rows = vec![
        entry("2024-01-02", "5", "Food", "with note", "remember this"),
        entry("2024-01-02", "5", "Food", "without note", ""),
    ];
    let body = table_body(&rows, "$");
    assert_eq!(body.matches("note-text").count(), 1);
    assert!(body.contains("remember this"));
}

#[test]
fn delete_control_carries_the_entry_id() {
    let rows = vec![entry("2024-01-02", "5", "Food", "x", "")];
    let body = table_body(&rows, "$");
    assert!(body.contains(&format!("data-delete=\"{}\"", rows[0].id)));
}

#[test]
fn stat_cards_show_totals_and_top_category() {
    let entries = vec![
        entry("2024-01-01", "10", "Food", "", ""),
        entry("2024-01-31", "20", "Food", "", ""),
        entry("2024-02-01", "5", "Transport", "", ""),
    ];
    let stats = summarize(&entries, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
    let cards = stat_cards(&stats, "$");

    assert_eq!(cards[0].value, "$35.00");
    assert_eq!(cards[0].detail, "3 entries");
    assert_eq!(cards[1].value, "$1.09");
    assert_eq!(cards[2].value, "$30.00");
    assert_eq!(cards[3].value, "Food \u{2022} $30.00");
}

#[test]
fn datalist_escapes_category_values() {
    let options = datalist_options(&["A&B".to_string(), "Food".to_string()]);
    assert_eq!(
        options,
        "<option value=\"A&amp;B\"></option><option value=\"Food\"></option>"
    );
}

#[test]
fn page_snapshot_contains_every_section() {
    let rows = vec![entry("2024-01-02", "5", "Food", "coffee", "")];
    let stats = summarize(&rows, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
    let cards = stat_cards(&stats, "$");
    let page = render_page(&rows, &cards, "1 entry shown", &["Food".to_string()], "$");

    assert!(page.contains("<!DOCTYPE html>"));
    assert!(page.contains("stat-card"));
    assert!(page.contains("1 entry shown"));
    assert!(page.contains("coffee"));
    assert!(page.contains("category-options"));
}
