//! Event-level glue between the UI surface and the engines.
//!
//! The session owns the only side effects (journal mutations, which persist
//! through the storage adapter); filtering, summarizing, and rendering stay
//! pure and are recomputed on every view pass.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::ExpenseError;
use crate::filter::{self, FilterCriteria};
use crate::journal::{DraftError, Entry, EntryDraft, ExpenseJournal};
use crate::render::{self, StatCard};
use crate::summary::{self, Stats};

/// External confirmation dialog collaborator gating destructive actions.
pub trait ConfirmDialog {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Outcome of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(Uuid),
    /// Silent rejection; the UI refocuses the named field, nothing else.
    Rejected(DraftError),
}

/// Everything the UI redraws after an event: display-sorted rows, stats and
/// cards, the count caption, and the merged category suggestions.
#[derive(Debug, Clone)]
pub struct View {
    pub rows: Vec<Entry>,
    pub stats: Stats,
    pub cards: Vec<StatCard>,
    pub caption: String,
    pub suggestions: Vec<String>,
}

pub struct Session {
    journal: ExpenseJournal,
    criteria: FilterCriteria,
    config: Config,
    last_category: Option<String>,
}

impl Session {
    pub fn new(journal: ExpenseJournal, config: Config) -> Self {
        Self {
            journal,
            criteria: FilterCriteria::default(),
            config,
            last_category: None,
        }
    }

    /// Validates and stores a submitted draft. Invalid drafts are rejected
    /// without creating an entry or surfacing an error message. The category
    /// of an accepted entry is remembered so the form can re-populate it.
    pub fn submit(
        &mut self,
        draft: &EntryDraft,
        today: NaiveDate,
    ) -> Result<SubmitOutcome, ExpenseError> {
        let entry = match Entry::from_draft(draft, today) {
            Ok(entry) => entry,
            Err(field) => return Ok(SubmitOutcome::Rejected(field)),
        };
        self.last_category = Some(entry.category.clone());
        let id = self.journal.add(entry)?;
        Ok(SubmitOutcome::Added(id))
    }

    /// Replaces the filter criteria. No repository mutation.
    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Clears every entry, but only if the dialog collaborator affirms.
    /// Returns whether the journal was cleared. An already-empty journal is
    /// left alone without prompting.
    pub fn clear_all(&mut self, dialog: &mut dyn ConfirmDialog) -> Result<bool, ExpenseError> {
        if self.journal.is_empty() {
            return Ok(false);
        }
        if !dialog.confirm("Remove all saved expenses?") {
            return Ok(false);
        }
        self.journal.clear()?;
        Ok(true)
    }

    /// Deletes by id; unknown ids are a quiet no-op.
    pub fn delete(&mut self, id: Uuid) -> Result<bool, ExpenseError> {
        self.journal.remove(id)
    }

    /// Runs the filter, summary, and render steps against the current
    /// criteria.
    pub fn view(&self, today: NaiveDate) -> View {
        let filtered = filter::apply(self.journal.entries(), &self.criteria);
        let stats = summary::summarize(&filtered, today);
        let cards = render::stat_cards(&stats, &self.config.currency_symbol);
        let caption = render::entry_count_caption(filtered.len());
        let suggestions = render::merge_suggestions(
            &self.config.preset_categories,
            &self.journal.distinct_categories(),
        );
        View {
            rows: render::sort_for_display(filtered),
            stats,
            cards,
            caption,
            suggestions,
        }
    }

    pub fn journal(&self) -> &ExpenseJournal {
        &self.journal
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn last_category(&self) -> Option<&str> {
        self.last_category.as_deref()
    }
}
