use std::path::PathBuf;

pub(crate) const DB_FILE: &str = "despesas.db";
pub(crate) const LOG_FILE: &str = "ledgertui.log";

/// File locations. Both are fixed and resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
    pub(crate) log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_FILE),
            log_path: PathBuf::from(LOG_FILE),
        }
    }
}
