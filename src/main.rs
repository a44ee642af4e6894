mod config;
mod db;
mod ledger;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;
use tracing::info;

fn main() -> Result<()> {
    let config = config::Config::default();
    logging::init_logger(&config.log_path)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let db = db::Database::open(&config.db_path)?;
    let result = run::as_tui(&db);

    info!(ok = result.is_ok(), "exiting");
    result
}
