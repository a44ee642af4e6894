pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS transactions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    kind        TEXT NOT NULL,
    description TEXT NOT NULL,
    amount      REAL NOT NULL,
    occurred_on TEXT NOT NULL
);
"#;
