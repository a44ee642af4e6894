use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::TransactionKind;

/// Rejections raised by the add form. The messages are shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub(crate) enum EntryError {
    #[error("Valor inválido!")]
    InvalidAmount,
    #[error("Descrição obrigatória!")]
    MissingDescription,
}

/// A form submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry {
    pub(crate) kind: TransactionKind,
    pub(crate) description: String,
    pub(crate) amount: Decimal,
}

/// Largest amount the form accepts. The store keeps amounts as REAL, and
/// values in this range read back into a `Decimal` without overflow.
pub(crate) const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Most digits accepted after the decimal separator, trailing zeros excluded.
pub(crate) const MAX_FRACTION_DIGITS: u32 = 8;

/// Parse a user-typed amount. Either `.` or `,` may be the decimal separator.
pub(crate) fn parse_amount(raw: &str) -> Result<Decimal, EntryError> {
    let normalized = raw.trim().replace(',', ".");
    let amount = Decimal::from_str(&normalized).map_err(|_| EntryError::InvalidAmount)?;
    if amount < Decimal::ZERO
        || amount > Decimal::from(MAX_AMOUNT)
        || amount.normalize().scale() > MAX_FRACTION_DIGITS
    {
        return Err(EntryError::InvalidAmount);
    }
    Ok(amount)
}

/// Amount is checked before description, so a form with both problems
/// reports the amount.
pub(crate) fn validate_entry(
    kind: TransactionKind,
    description: &str,
    raw_amount: &str,
) -> Result<Entry, EntryError> {
    let amount = parse_amount(raw_amount)?;
    let description = description.trim();
    if description.is_empty() {
        return Err(EntryError::MissingDescription);
    }
    Ok(Entry {
        kind,
        description: description.to_string(),
        amount,
    })
}
