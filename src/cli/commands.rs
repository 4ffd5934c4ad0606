//! Command dispatch for the expense shell.

use std::fs;

use chrono::{Local, NaiveDate};
use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use uuid::Uuid;

use crate::config::ConfigManager;
use crate::controller::{Session, SubmitOutcome, View};
use crate::journal::{DraftError, EntryDraft, ExpenseJournal};
use crate::render::format::{format_currency, format_date};
use crate::render::html;
use crate::render::table::{Alignment, Table, TableColumn};
use crate::storage::JsonStorage;

use super::forms::{self, AutoConfirm, TerminalConfirm};
use super::{output, CliError, CommandError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

const COMMANDS: &[(&str, &str)] = &[
    ("add", "Record an expense (interactive form, or `add <amount> [key=value ...]`)"),
    ("list", "Show the filtered expense table"),
    ("stats", "Show summary statistics for the filtered set"),
    ("filter", "Set a filter: `filter from|to|category|search [value]`"),
    ("reset", "Clear all filters"),
    ("delete", "Delete an entry: `delete <id prefix>`"),
    ("clear", "Remove all saved expenses (asks for confirmation)"),
    ("categories", "Show the category suggestion list"),
    ("export", "Write an HTML snapshot: `export <path>`"),
    ("help", "Show this help"),
    ("exit", "Leave the shell"),
];

pub struct ShellContext {
    session: Session,
    theme: ColorfulTheme,
    mode: CliMode,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let storage = JsonStorage::new_default()?;
        let journal = ExpenseJournal::open(Box::new(storage));
        let config = ConfigManager::new()?.load()?;
        Ok(Self {
            session: Session::new(journal, config),
            theme: ColorfulTheme::default(),
            mode,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn command_names(&self) -> Vec<String> {
        COMMANDS.iter().map(|(name, _)| name.to_string()).collect()
    }

    pub fn report_error(&self, err: CommandError) {
        output::error(err.message);
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        match command {
            "add" => self.cmd_add(args)?,
            "list" => self.cmd_list(),
            "stats" => self.cmd_stats(),
            "filter" => self.cmd_filter(args)?,
            "reset" => self.cmd_reset(),
            "delete" => self.cmd_delete(args)?,
            "clear" => self.cmd_clear()?,
            "categories" => self.cmd_categories(),
            "export" => self.cmd_export(args)?,
            "help" => self.cmd_help(),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            unknown => self.report_unknown(unknown),
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_add(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let draft = if args.is_empty() {
            if self.mode != CliMode::Interactive {
                return Err(CommandError::new(
                    "add needs arguments in script mode: add <amount> [key=value ...]",
                ));
            }
            forms::entry_form(&self.theme, today(), self.session.last_category())?
        } else {
            draft_from_args(args)?
        };

        match self.session.submit(&draft, today())? {
            SubmitOutcome::Added(_) => {
                let entry = &self.session.journal().entries()[0];
                output::success(format!(
                    "Recorded {} for {}.",
                    format_currency(&self.session.config().currency_symbol, entry.amount),
                    entry.category
                ));
            }
            SubmitOutcome::Rejected(DraftError::Amount) => {
                output::warning("Amount must be a positive number; nothing was recorded.");
            }
            SubmitOutcome::Rejected(DraftError::Date) => {
                output::warning("Date must look like YYYY-MM-DD; nothing was recorded.");
            }
        }
        Ok(())
    }

    fn cmd_list(&self) {
        let view = self.session.view(today());
        if view.rows.is_empty() {
            output::info("No expenses match your filters.");
        } else {
            output::plain(self.render_entry_table(&view));
        }
        output::plain(&view.caption);
    }

    fn cmd_stats(&self) {
        let view = self.session.view(today());
        output::section("Summary");
        for card in &view.cards {
            output::plain(format!("{}: {} ({})", card.label, card.value, card.detail));
        }
    }

    fn cmd_filter(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let Some((field, rest)) = args.split_first() else {
            return Err(CommandError::new(
                "usage: filter from|to|category|search [value]",
            ));
        };
        let value = rest.join(" ");
        let mut criteria = self.session.criteria().clone();
        match *field {
            "from" => criteria.from = parse_filter_date(&value)?,
            "to" => criteria.to = parse_filter_date(&value)?,
            "category" => criteria.category = value,
            "search" => criteria.search = value,
            other => {
                return Err(CommandError::new(format!(
                    "unknown filter field `{other}`; expected from, to, category, or search"
                )))
            }
        }
        self.session.set_filter(criteria);
        self.cmd_list();
        Ok(())
    }

    fn cmd_reset(&mut self) {
        self.session.reset_filters();
        output::success("Filters cleared.");
        self.cmd_list();
    }

    fn cmd_delete(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let Some(prefix) = args.first() else {
            return Err(CommandError::new("usage: delete <id prefix>"));
        };
        let matches: Vec<Uuid> = self
            .session
            .journal()
            .entries()
            .iter()
            .map(|entry| entry.id)
            .filter(|id| id.to_string().starts_with(&prefix.to_lowercase()))
            .collect();
        match matches.as_slice() {
            [] => output::warning(format!("No entry matches id `{prefix}`.")),
            [id] => {
                self.session.delete(*id)?;
                output::success("Entry deleted.");
            }
            _ => output::warning(format!(
                "{} entries match `{prefix}`; give more of the id.",
                matches.len()
            )),
        }
        Ok(())
    }

    fn cmd_clear(&mut self) -> Result<(), CommandError> {
        let cleared = match self.mode {
            CliMode::Interactive => {
                let mut dialog = TerminalConfirm::new(&self.theme);
                self.session.clear_all(&mut dialog)?
            }
            CliMode::Script => self.session.clear_all(&mut AutoConfirm)?,
        };
        if cleared {
            output::success("All expenses removed.");
        } else {
            output::info("Nothing was removed.");
        }
        Ok(())
    }

    fn cmd_categories(&self) {
        let view = self.session.view(today());
        output::section("Category suggestions");
        for category in &view.suggestions {
            output::plain(category);
        }
    }

    fn cmd_export(&self, args: &[&str]) -> Result<(), CommandError> {
        let Some(path) = args.first() else {
            return Err(CommandError::new("usage: export <path>"));
        };
        let view = self.session.view(today());
        let page = html::render_page(
            &view.rows,
            &view.cards,
            &view.caption,
            &view.suggestions,
            &self.session.config().currency_symbol,
        );
        fs::write(path, page)?;
        output::success(format!("Snapshot written to {path}."));
        Ok(())
    }

    fn cmd_help(&self) {
        output::section("Commands");
        for (name, description) in COMMANDS {
            output::plain(format!("  {name:<12} {description}"));
        }
    }

    fn report_unknown(&self, command: &str) {
        let suggestion = COMMANDS
            .iter()
            .map(|(name, _)| (*name, levenshtein(command, name)))
            .min_by_key(|(_, distance)| *distance)
            .filter(|(_, distance)| *distance <= 2);
        match suggestion {
            Some((name, _)) => {
                output::warning(format!("Unknown command `{command}`. Did you mean `{name}`?"))
            }
            None => output::warning(format!(
                "Unknown command `{command}`. Type `help` for the command list."
            )),
        }
    }

    fn render_entry_table(&self, view: &View) -> String {
        let symbol = &self.session.config().currency_symbol;
        let columns = vec![
            TableColumn::new("Date", Alignment::Left),
            TableColumn::new("Description", Alignment::Left).capped(32),
            TableColumn::new("Category", Alignment::Left).capped(18),
            TableColumn::new("Payment", Alignment::Left).capped(14),
            TableColumn::new("Amount", Alignment::Right),
            TableColumn::new("Id", Alignment::Left),
        ];
        let rows = view
            .rows
            .iter()
            .map(|entry| {
                vec![
                    format_date(entry.date),
                    entry.description.clone(),
                    entry.category.clone(),
                    entry.payment.clone(),
                    format_currency(symbol, entry.amount),
                    entry.id.to_string()[..8].to_string(),
                ]
            })
            .collect();
        Table { columns, rows }.render()
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_filter_date(value: &str) -> Result<Option<NaiveDate>, CommandError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| CommandError::new(format!("`{value}` is not a YYYY-MM-DD date")))
}

fn draft_from_args(args: &[&str]) -> Result<EntryDraft, CommandError> {
    let mut draft = EntryDraft {
        amount: args[0].to_string(),
        ..EntryDraft::default()
    };
    for pair in &args[1..] {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(CommandError::new(format!(
                "expected key=value, got `{pair}`"
            )));
        };
        match key {
            "date" => draft.date = value.to_string(),
            "description" | "desc" => draft.description = value.to_string(),
            "category" => draft.category = value.to_string(),
            "payment" => draft.payment = value.to_string(),
            "notes" => draft.notes = value.to_string(),
            other => {
                return Err(CommandError::new(format!(
                    "unknown field `{other}`; expected date, description, category, payment, or notes"
                )))
            }
        }
    }
    Ok(draft)
}
