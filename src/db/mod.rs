mod schema;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::models::*;

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let db = Self { conn };
        db.ensure_schema().context("Failed to create schema")?;
        debug!(path = %path.display(), "database opened");
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Creates the backing table if absent. Safe to call any number of times.
    pub(crate) fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(schema::SCHEMA)?;
        Ok(())
    }

    // ── Transactions ──────────────────────────────────────────

    /// Appends `txn` (its `id` is ignored) and returns the id the store assigned.
    pub(crate) fn insert_transaction(&self, txn: &Transaction) -> Result<i64> {
        let amount = txn
            .amount
            .to_f64()
            .with_context(|| format!("Amount out of range: {}", txn.amount))?;
        self.conn
            .execute(
                "INSERT INTO transactions (kind, description, amount, occurred_on)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    txn.kind.as_str(),
                    txn.description,
                    amount,
                    txn.date_label(),
                ],
            )
            .context("Failed to insert transaction")?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Removes the row with `id`. Deleting an id that is not stored is a no-op.
    pub(crate) fn delete_transaction(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM transactions WHERE id = ?1", params![id])
            .with_context(|| format!("Failed to delete transaction {id}"))?;
        Ok(())
    }

    /// Every stored transaction, newest id first.
    pub(crate) fn list_transactions_desc(&self) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, kind, description, amount, occurred_on
             FROM transactions ORDER BY id DESC",
        )?;
        let rows = stmt
            .query_map([], StoredRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read transactions")?;
        rows.into_iter()
            .map(StoredRow::into_transaction)
            .collect::<Result<Vec<_>>>()
            .context("Failed to read transactions")
    }

    #[cfg(test)]
    pub(crate) fn transaction_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?)
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Raw column values of one `transactions` row.
struct StoredRow {
    id: i64,
    kind: String,
    description: String,
    amount: f64,
    occurred_on: String,
}

impl StoredRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            kind: row.get(1)?,
            description: row.get(2)?,
            amount: row.get(3)?,
            occurred_on: row.get(4)?,
        })
    }

    fn into_transaction(self) -> Result<Transaction> {
        let id = self.id;
        let kind = TransactionKind::parse(&self.kind)
            .with_context(|| format!("Transaction {id}: unknown kind '{}'", self.kind))?;

        // Shortest round-trip text of the float, so 100.5 reads back as exactly 100.5
        let amount = Decimal::from_str(&self.amount.to_string())
            .with_context(|| format!("Transaction {id}: invalid amount {}", self.amount))?;

        let occurred_on = NaiveDate::parse_from_str(&self.occurred_on, DATE_FORMAT)
            .with_context(|| format!("Transaction {id}: invalid date '{}'", self.occurred_on))?;

        Ok(Transaction {
            id: Some(id),
            kind,
            description: self.description,
            amount,
            occurred_on,
        })
    }
}
