use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::db::Database;
use crate::ledger;
use crate::models::*;
use crate::ui::form::{self, EntryError};
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Kind,
    Description,
    Amount,
    List,
}

impl Focus {
    pub(crate) fn all() -> &'static [Focus] {
        &[Self::Kind, Self::Description, Self::Amount, Self::List]
    }

    pub(crate) fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub(crate) fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        if idx == 0 {
            all[all.len() - 1]
        } else {
            all[idx - 1]
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeLevel {
    Warning,
    Error,
}

impl NoticeLevel {
    pub(crate) fn title(&self) -> &'static str {
        match self {
            Self::Warning => "Aviso",
            Self::Error => "Erro",
        }
    }
}

/// A modal message; it blocks input until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    pub(crate) level: NoticeLevel,
    pub(crate) message: String,
}

impl From<EntryError> for Notice {
    fn from(err: EntryError) -> Self {
        let level = match err {
            EntryError::InvalidAmount => NoticeLevel::Error,
            EntryError::MissingDescription => NoticeLevel::Warning,
        };
        Self {
            level,
            message: err.to_string(),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) focus: Focus,
    pub(crate) status_message: String,
    pub(crate) notice: Option<Notice>,

    // Form
    pub(crate) kind: TransactionKind,
    pub(crate) description_input: String,
    pub(crate) amount_input: String,

    // List, exactly as returned by the last refresh
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) selected: Option<usize>,
    pub(crate) scroll: usize,
    pub(crate) balance: Decimal,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            focus: Focus::Description,
            status_message: String::new(),
            notice: None,

            kind: TransactionKind::Expense,
            description_input: String::new(),
            amount_input: String::new(),

            transactions: Vec::new(),
            selected: None,
            scroll: 0,
            balance: Decimal::ZERO,

            visible_rows: 10,
        }
    }

    /// Reload the list from the store and recompute the balance.
    /// The previous selection does not survive a refresh.
    pub(crate) fn refresh(&mut self, db: &Database) -> Result<()> {
        let transactions = db.list_transactions_desc()?;
        self.balance = ledger::balance(&transactions)?;
        self.transactions = transactions;
        self.selected = None;
        self.scroll = 0;
        debug!(
            count = self.transactions.len(),
            balance = %self.balance,
            "transactions refreshed"
        );
        Ok(())
    }

    /// Validate the form and store a new transaction dated `today`.
    /// Validation failures are reported through `notice` and leave the store alone.
    pub(crate) fn add_transaction(&mut self, db: &Database, today: NaiveDate) -> Result<()> {
        let validated =
            form::validate_entry(self.kind, &self.description_input, &self.amount_input);
        let entry = match validated {
            Ok(entry) => entry,
            Err(err) => {
                warn!(reason = %err, "transaction rejected");
                self.notice = Some(err.into());
                return Ok(());
            }
        };

        let txn = Transaction::new(entry.kind, entry.description, entry.amount, today);
        let id = db.insert_transaction(&txn)?;
        info!(id, kind = %txn.kind, amount = %txn.amount, "transaction added");

        self.description_input.clear();
        self.amount_input.clear();
        self.refresh(db)?;
        self.set_status(format!("Adicionado: {}", txn.description));
        Ok(())
    }

    /// Delete the selected row. Without a selection this does nothing.
    pub(crate) fn delete_selected(&mut self, db: &Database) -> Result<()> {
        let Some((id, description)) = self
            .selected_transaction()
            .and_then(|t| t.id.map(|id| (id, t.description.clone())))
        else {
            return Ok(());
        };

        db.delete_transaction(id)?;
        info!(id, "transaction deleted");
        self.refresh(db)?;
        self.set_status(format!("Excluído: {description}"));
        Ok(())
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.selected.and_then(|i| self.transactions.get(i))
    }

    pub(crate) fn move_down(&mut self) {
        match self.selected {
            None if !self.transactions.is_empty() => self.selected = Some(0),
            None => {}
            Some(mut index) => {
                scroll_down(
                    &mut index,
                    &mut self.scroll,
                    self.transactions.len(),
                    self.visible_rows.max(1),
                );
                self.selected = Some(index);
            }
        }
    }

    pub(crate) fn move_up(&mut self) {
        if let Some(mut index) = self.selected {
            scroll_up(&mut index, &mut self.scroll);
            self.selected = Some(index);
        } else if !self.transactions.is_empty() {
            self.selected = Some(0);
        }
    }

    pub(crate) fn goto_top(&mut self) {
        if self.transactions.is_empty() {
            return;
        }
        let mut index = 0;
        scroll_to_top(&mut index, &mut self.scroll);
        self.selected = Some(index);
    }

    pub(crate) fn goto_bottom(&mut self) {
        let mut index = 0;
        scroll_to_bottom(
            &mut index,
            &mut self.scroll,
            self.transactions.len(),
            self.visible_rows.max(1),
        );
        if !self.transactions.is_empty() {
            self.selected = Some(index);
        }
    }

    /// The text field that has focus, if any.
    pub(crate) fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Description => Some(&mut self.description_input),
            Focus::Amount => Some(&mut self.amount_input),
            Focus::Kind | Focus::List => None,
        }
    }

    pub(crate) fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
    }

    pub(crate) fn show_error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
