use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category assigned when the user leaves the field blank.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// One recorded expense.
///
/// `created_at` is informational only; it is never displayed and never enters
/// any computation. `id` exists solely so rows can be deleted later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub payment: String,
    pub amount: f64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// Raw form values as read off the UI surface, prior to validation.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub date: String,
    pub description: String,
    pub category: String,
    pub payment: String,
    pub amount: String,
    pub notes: String,
}

/// Which form field caused a draft to be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    Amount,
    Date,
}

impl Entry {
    /// Validates a draft and builds the entry, or names the offending field.
    ///
    /// The amount must parse as a finite number strictly greater than zero;
    /// it is stored rounded to two fractional digits. A blank date falls back
    /// to `today`; a blank category becomes [`DEFAULT_CATEGORY`].
    pub fn from_draft(draft: &EntryDraft, today: NaiveDate) -> Result<Self, DraftError> {
        let amount: f64 = draft
            .amount
            .trim()
            .parse()
            .map_err(|_| DraftError::Amount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DraftError::Amount);
        }

        let date = match draft.date.trim() {
            "" => today,
            raw => raw.parse().map_err(|_| DraftError::Date)?,
        };

        let category = match draft.category.trim() {
            "" => DEFAULT_CATEGORY.to_string(),
            trimmed => trimmed.to_string(),
        };

        Ok(Self {
            id: Uuid::new_v4(),
            date,
            description: draft.description.trim().to_string(),
            category,
            payment: draft.payment.clone(),
            amount: round_amount(amount),
            notes: draft.notes.trim().to_string(),
            created_at: Utc::now(),
        })
    }
}

fn round_amount(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
