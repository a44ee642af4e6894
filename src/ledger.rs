use anyhow::{anyhow, Result};
use rust_decimal::Decimal;

use crate::models::Transaction;

/// Sum of income amounts minus sum of expense amounts.
/// Fails instead of wrapping when the total leaves `Decimal`'s range.
pub(crate) fn balance(transactions: &[Transaction]) -> Result<Decimal> {
    transactions.iter().try_fold(Decimal::ZERO, |acc, txn| {
        acc.checked_add(txn.signed_amount()).ok_or_else(|| {
            let id = txn.id.map(|id| id.to_string()).unwrap_or_default();
            anyhow!("Balance out of range at transaction {id}")
        })
    })
}
