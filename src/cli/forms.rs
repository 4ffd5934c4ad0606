//! Interactive data entry prompts for the add-expense form and the
//! clear-all confirmation dialog.

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::controller::ConfirmDialog;
use crate::journal::EntryDraft;

use super::CommandError;

/// Runs the six-field expense form. The date field starts at today and the
/// category field re-populates with the last-used category.
pub fn entry_form(
    theme: &ColorfulTheme,
    today: NaiveDate,
    last_category: Option<&str>,
) -> Result<EntryDraft, CommandError> {
    let date = Input::<String>::with_theme(theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(today.to_string())
        .interact_text()?;

    let description = Input::<String>::with_theme(theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;

    let category = match last_category {
        Some(last) => Input::<String>::with_theme(theme)
            .with_prompt("Category")
            .allow_empty(true)
            .with_initial_text(last)
            .interact_text()?,
        None => Input::<String>::with_theme(theme)
            .with_prompt("Category")
            .allow_empty(true)
            .interact_text()?,
    };

    let payment = Input::<String>::with_theme(theme)
        .with_prompt("Payment method")
        .allow_empty(true)
        .interact_text()?;

    let amount = Input::<String>::with_theme(theme)
        .with_prompt("Amount")
        .interact_text()?;

    let notes = Input::<String>::with_theme(theme)
        .with_prompt("Notes")
        .allow_empty(true)
        .interact_text()?;

    Ok(EntryDraft {
        date,
        description,
        category,
        payment,
        amount,
        notes,
    })
}

/// Confirmation dialog backed by dialoguer, used in interactive mode.
pub struct TerminalConfirm<'a> {
    theme: &'a ColorfulTheme,
}

impl<'a> TerminalConfirm<'a> {
    pub fn new(theme: &'a ColorfulTheme) -> Self {
        Self { theme }
    }
}

impl ConfirmDialog for TerminalConfirm<'_> {
    fn confirm(&mut self, prompt: &str) -> bool {
        Confirm::with_theme(self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Script mode has no terminal to ask on, so destructive commands proceed.
pub struct AutoConfirm;

impl ConfirmDialog for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
