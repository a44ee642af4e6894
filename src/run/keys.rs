use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::db::Database;
use crate::ui::app::{App, Focus};

/// Apply one key press to `app`. Store failures are returned to the caller.
pub(crate) fn handle_key(key: KeyEvent, app: &mut App, db: &Database) -> Result<()> {
    // Any key dismisses an open notice
    if app.notice.is_some() {
        app.notice = None;
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => app.running = false,
            KeyCode::Char('a') => submit(app, db)?,
            KeyCode::Char('d') => app.delete_selected(db)?,
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Esc => app.running = false,
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        _ => match app.focus {
            Focus::Kind => handle_kind_input(key, app, db)?,
            Focus::Description | Focus::Amount => handle_field_input(key, app, db)?,
            Focus::List => handle_list_input(key, app, db)?,
        },
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_kind_input(key: KeyEvent, app: &mut App, db: &Database) -> Result<()> {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Char(' ') => {
            app.toggle_kind();
        }
        KeyCode::Enter => submit(app, db)?,
        _ => {}
    }
    Ok(())
}

fn handle_field_input(key: KeyEvent, app: &mut App, db: &Database) -> Result<()> {
    match key.code {
        KeyCode::Enter => submit(app, db)?,
        KeyCode::Backspace => {
            if let Some(input) = app.focused_input() {
                input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.focused_input() {
                input.push(c);
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_list_input(key: KeyEvent, app: &mut App, db: &Database) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.goto_top(),
        KeyCode::Char('G') | KeyCode::End => app.goto_bottom(),
        KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('x') => app.delete_selected(db)?,
        _ => {}
    }
    Ok(())
}

fn submit(app: &mut App, db: &Database) -> Result<()> {
    app.add_transaction(db, Local::now().date_naive())
}
