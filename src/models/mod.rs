mod transaction;

pub use transaction::{Transaction, TransactionKind, DATE_FORMAT};
