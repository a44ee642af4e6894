mod keys;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::error;

use crate::db::Database;
use crate::ui::app::App;
use crate::ui::render::CHROME_HEIGHT;

pub(crate) use keys::handle_key;

pub(crate) fn as_tui(db: &Database) -> Result<()> {
    let mut app = load_app(db);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, db);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

/// Initial state. A store that cannot be read opens with an error notice
/// instead of refusing to start.
fn load_app(db: &Database) -> App {
    let mut app = App::new();
    if let Err(e) = app.refresh(db) {
        error!("initial load failed: {e:#}");
        app.show_error(format!("{e:#}"));
    }
    app
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    db: &Database,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(CHROME_HEIGHT) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            // Windows also reports key releases
            if key.kind != KeyEventKind::Press {
                continue;
            }
            // A failed statement aborts the action, not the session
            if let Err(e) = handle_key(key, app, db) {
                error!("action failed: {e:#}");
                app.show_error(format!("{e:#}"));
            }
        }
    }
    Ok(())
}
