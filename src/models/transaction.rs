use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Storage and display format of `Transaction::occurred_on`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Label written to the `kind` column and shown in the list.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Receita",
            Self::Expense => "Despesa",
        }
    }

    /// Parses a stored label. Only the two exact labels are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Receita" => Some(Self::Income),
            "Despesa" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn all() -> &'static [TransactionKind] {
        &[Self::Income, Self::Expense]
    }

    /// The other kind, used by the form's selector toggle.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    /// Contribution of `amount` to the balance.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Option<i64>,
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Decimal,
    pub occurred_on: NaiveDate,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        description: String,
        amount: Decimal,
        occurred_on: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            kind,
            description,
            amount,
            occurred_on,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }

    pub fn date_label(&self) -> String {
        self.occurred_on.format(DATE_FORMAT).to_string()
    }
}
