#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::app::*;
use crate::db::Database;
use crate::models::TransactionKind;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
}

fn setup() -> (App, Database) {
    let db = Database::open_in_memory().unwrap();
    let mut app = App::new();
    app.refresh(&db).unwrap();
    (app, db)
}

fn add(app: &mut App, db: &Database, kind: TransactionKind, description: &str, amount: &str) {
    app.kind = kind;
    app.description_input = description.into();
    app.amount_input = amount.into();
    app.add_transaction(db, today()).unwrap();
}

fn select_by_description(app: &mut App, description: &str) {
    app.selected = app
        .transactions
        .iter()
        .position(|t| t.description == description);
    assert!(app.selected.is_some(), "no row '{description}'");
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn test_new_app_defaults() {
    let app = App::new();
    assert!(app.running);
    assert_eq!(app.kind, TransactionKind::Expense);
    assert_eq!(app.focus, Focus::Description);
    assert!(app.notice.is_none());
    assert!(app.selected.is_none());
}

#[test]
fn test_fresh_store_shows_nothing() {
    let (app, _db) = setup();
    assert!(app.transactions.is_empty());
    assert_eq!(app.balance, Decimal::ZERO);
}

// ── Add ───────────────────────────────────────────────────────

#[test]
fn test_add_persists_and_clears_fields() {
    let (mut app, db) = setup();
    add(&mut app, &db, TransactionKind::Income, "  Salary ", "1000");

    assert!(app.notice.is_none());
    assert!(app.description_input.is_empty());
    assert!(app.amount_input.is_empty());
    assert_eq!(app.kind, TransactionKind::Income);

    let stored = db.list_transactions_desc().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].description, "Salary");
    assert_eq!(stored[0].occurred_on, today());
    assert_eq!(app.transactions, stored);
    assert_eq!(app.balance, dec!(1000));
}

#[test]
fn test_add_accepts_comma_decimal() {
    let (mut app, db) = setup();
    add(&mut app, &db, TransactionKind::Income, "Freela", "100,50");

    let stored = db.list_transactions_desc().unwrap();
    assert_eq!(stored.len(), 1);
    assert!((stored[0].amount - dec!(100.50)).abs() < dec!(0.000001));
}

#[test]
fn test_add_rejects_bad_amount() {
    let (mut app, db) = setup();
    add(&mut app, &db, TransactionKind::Income, "Salary", "abc");

    assert_eq!(db.transaction_count().unwrap(), 0);
    let notice = app.notice.clone().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Valor inválido!");
    // The form keeps what the user typed
    assert_eq!(app.description_input, "Salary");
    assert_eq!(app.amount_input, "abc");
}

#[test]
fn test_add_rejects_amounts_beyond_range() {
    let (mut app, db) = setup();
    for raw in [
        "50000000000000000000000000000",
        "79228162514264337593543950335",
    ] {
        add(&mut app, &db, TransactionKind::Income, "Loteria", raw);
        assert_eq!(app.notice.take().unwrap().level, NoticeLevel::Error);
    }
    assert_eq!(db.transaction_count().unwrap(), 0);
    assert!(app.refresh(&db).is_ok());
}

#[test]
fn test_repeated_largest_amount_keeps_working() {
    let (mut app, db) = setup();
    add(&mut app, &db, TransactionKind::Income, "a", "1000000000000");
    add(&mut app, &db, TransactionKind::Income, "b", "1000000000000");
    assert!(app.notice.is_none());
    assert_eq!(app.transactions.len(), 2);
    assert_eq!(app.balance, dec!(2000000000000));
}

#[test]
fn test_add_rejects_empty_description() {
    let (mut app, db) = setup();
    add(&mut app, &db, TransactionKind::Expense, "   ", "10");

    assert_eq!(db.transaction_count().unwrap(), 0);
    let notice = app.notice.clone().unwrap();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.message, "Descrição obrigatória!");
}

#[test]
fn test_newest_entry_is_listed_first() {
    let (mut app, db) = setup();
    add(&mut app, &db, TransactionKind::Income, "first", "1");
    add(&mut app, &db, TransactionKind::Income, "second", "2");
    add(&mut app, &db, TransactionKind::Expense, "third", "3");

    let names: Vec<&str> = app
        .transactions
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(names, vec!["third", "second", "first"]);
}

// ── Delete ────────────────────────────────────────────────────

#[test]
fn test_delete_without_selection_is_noop() {
    let (mut app, db) = setup();
    add(&mut app, &db, TransactionKind::Income, "Salary", "1000");
    assert!(app.selected.is_none());

    app.delete_selected(&db).unwrap();
    assert_eq!(db.transaction_count().unwrap(), 1);
    assert!(app.notice.is_none());
}

#[test]
fn test_delete_selected_row() {
    let (mut app, db) = setup();
    add(&mut app, &db, TransactionKind::Income, "keep", "1");
    add(&mut app, &db, TransactionKind::Income, "drop", "2");

    select_by_description(&mut app, "drop");
    app.delete_selected(&db).unwrap();

    assert_eq!(app.transactions.len(), 1);
    assert_eq!(app.transactions[0].description, "keep");
    assert!(app.selected.is_none());
    assert_eq!(app.status_message, "Excluído: drop");
}

#[test]
fn test_salary_rent_scenario() {
    let (mut app, db) = setup();

    add(&mut app, &db, TransactionKind::Income, "Salary", "1000.00");
    assert_eq!(app.balance, dec!(1000.00));

    add(&mut app, &db, TransactionKind::Expense, "Rent", "400.00");
    assert_eq!(app.balance, dec!(600.00));

    select_by_description(&mut app, "Salary");
    app.delete_selected(&db).unwrap();
    assert_eq!(app.balance, dec!(-400.00));

    let before = db.list_transactions_desc().unwrap();
    db.delete_transaction(9999).unwrap();
    app.refresh(&db).unwrap();
    assert_eq!(app.transactions, before);
    assert_eq!(app.balance, dec!(-400.00));
}

// ── Refresh / navigation ──────────────────────────────────────

#[test]
fn test_refresh_clears_selection() {
    let (mut app, db) = setup();
    add(&mut app, &db, TransactionKind::Income, "a", "1");
    app.selected = Some(0);
    app.refresh(&db).unwrap();
    assert!(app.selected.is_none());
}

#[test]
fn test_refresh_picks_up_external_rows() {
    let (mut app, db) = setup();
    db.insert_transaction(&crate::models::Transaction::new(
        TransactionKind::Expense,
        "Mercado".into(),
        dec!(55.10),
        today(),
    ))
    .unwrap();
    assert!(app.transactions.is_empty());

    app.refresh(&db).unwrap();
    assert_eq!(app.transactions.len(), 1);
    assert_eq!(app.balance, dec!(-55.10));
}

#[test]
fn test_move_selects_first_row_from_nothing() {
    let (mut app, db) = setup();
    add(&mut app, &db, TransactionKind::Income, "a", "1");
    add(&mut app, &db, TransactionKind::Income, "b", "1");

    app.move_down();
    assert_eq!(app.selected, Some(0));
    app.move_down();
    assert_eq!(app.selected, Some(1));
    app.move_down();
    assert_eq!(app.selected, Some(1));
    app.move_up();
    assert_eq!(app.selected, Some(0));
}

#[test]
fn test_move_on_empty_list_selects_nothing() {
    let (mut app, _db) = setup();
    app.move_down();
    app.move_up();
    app.goto_top();
    app.goto_bottom();
    assert!(app.selected.is_none());
}

#[test]
fn test_goto_bottom_scrolls() {
    let (mut app, db) = setup();
    for i in 0..8 {
        add(&mut app, &db, TransactionKind::Income, &format!("t{i}"), "1");
    }
    app.visible_rows = 3;

    app.goto_bottom();
    assert_eq!(app.selected, Some(7));
    assert_eq!(app.scroll, 5);

    app.goto_top();
    assert_eq!(app.selected, Some(0));
    assert_eq!(app.scroll, 0);
}

// ── Focus ─────────────────────────────────────────────────────

#[test]
fn test_focus_cycles() {
    let mut focus = Focus::Kind;
    for _ in 0..Focus::all().len() {
        focus = focus.next();
    }
    assert_eq!(focus, Focus::Kind);
    assert_eq!(Focus::Kind.prev(), Focus::List);
    assert_eq!(Focus::List.next(), Focus::Kind);
}

#[test]
fn test_focused_input() {
    let mut app = App::new();
    app.focus = Focus::Amount;
    app.focused_input().unwrap().push('5');
    assert_eq!(app.amount_input, "5");

    app.focus = Focus::Kind;
    assert!(app.focused_input().is_none());
}
