use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use rust_decimal::Decimal;

use super::app::{App, Focus, NoticeLevel};
use super::theme;
use super::util::{format_amount, format_magnitude, truncate};
use crate::models::TransactionKind;

pub(crate) const TITLE: &str = "Gerenciador de Despesas";

/// Rows taken by everything except the table body:
/// title, form, balance, action bar, help bar, table borders and header.
pub(crate) const CHROME_HEIGHT: u16 = 1 + 3 + 1 + 1 + 1 + 3;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(3), // Input row
            Constraint::Length(1), // Balance
            Constraint::Min(5),    // Transaction list
            Constraint::Length(1), // Delete button + status
            Constraint::Length(1), // Key help
        ])
        .split(f.area());

    render_title_bar(f, chunks[0]);
    render_form(f, chunks[1], app);
    render_balance(f, chunks[2], app);
    render_transactions(f, chunks[3], app);
    render_action_bar(f, chunks[4], app);
    render_help_bar(f, chunks[5]);

    if app.notice.is_some() {
        render_notice(f, f.area(), app);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {TITLE} "),
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(title, area);
}

// ── Input row ────────────────────────────────────────────────

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(21), // Kind selector
            Constraint::Min(16),    // Description
            Constraint::Length(22), // Amount
            Constraint::Length(15), // Add button
        ])
        .split(area);

    render_kind_selector(f, cols[0], app);
    render_text_field(
        f,
        cols[1],
        " Descrição ",
        &app.description_input,
        "Descrição",
        app.focus == Focus::Description && app.notice.is_none(),
    );
    render_text_field(
        f,
        cols[2],
        " Valor ",
        &app.amount_input,
        "ex: 100.50",
        app.focus == Focus::Amount && app.notice.is_none(),
    );

    let button = Paragraph::new(Line::from(Span::styled(
        " Adicionar ",
        theme::button_style(theme::ACCENT),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(false)),
    );
    f.render_widget(button, cols[3]);
}

fn render_kind_selector(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for kind in TransactionKind::all() {
        let style = if *kind == app.kind {
            theme::selected_style().add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        };
        spans.push(Span::styled(format!(" {kind} "), style));
        spans.push(Span::raw(" "));
    }
    spans.pop();

    let selector = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(app.focus == Focus::Kind))
            .title(" Tipo "),
    );
    f.render_widget(selector, area);
}

fn render_text_field(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let inner_width = area.width.saturating_sub(2) as usize;
    // Keep the end of long input visible, leaving a column for the cursor
    let shown: String = {
        let count = value.chars().count();
        let keep = inner_width.saturating_sub(1);
        value.chars().skip(count.saturating_sub(keep)).collect()
    };

    let line = if value.is_empty() {
        Line::from(Span::styled(placeholder, theme::dim_style()))
    } else {
        Line::from(Span::styled(shown.as_str(), theme::normal_style()))
    };

    let field = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(focused))
            .title(title),
    );
    f.render_widget(field, area);

    if focused {
        let offset = if value.is_empty() {
            0
        } else {
            shown.chars().count() as u16
        };
        f.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

fn render_balance(f: &mut Frame, area: Rect, app: &App) {
    let text = format!("Saldo: {}", format_amount(app.balance));
    let balance = Paragraph::new(Line::from(Span::styled(
        text,
        theme::balance_style(app.balance < Decimal::ZERO),
    )))
    .alignment(Alignment::Center);
    f.render_widget(balance, area);
}

// ── Transaction list ─────────────────────────────────────────

fn render_transactions(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::List;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused))
        .title(Span::styled(
            format!(" Transações ({}) ", app.transactions.len()),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if app.transactions.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Nenhuma transação registrada",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Id", "Tipo", "Descrição", "Valor", "Data"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .transactions
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let amount_style = if txn.is_income() {
                theme::income_style()
            } else {
                theme::expense_style()
            };

            let style = if app.selected == Some(i) {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let id = txn.id.map(|id| id.to_string()).unwrap_or_default();

            Row::new(vec![
                Cell::from(id),
                Cell::from(txn.kind.as_str()),
                Cell::from(truncate(&txn.description, 48)),
                Cell::from(
                    Line::from(Span::styled(format_magnitude(txn.amount), amount_style))
                        .alignment(Alignment::Right),
                ),
                Cell::from(txn.date_label()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Min(20),
        Constraint::Length(14),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

fn render_action_bar(f: &mut Frame, area: Rect, app: &App) {
    let bar = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            " Excluir Selecionado ",
            theme::button_style(theme::RED),
        ),
        Span::raw("  "),
        Span::styled(&app.status_message, theme::normal_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_help_bar(f: &mut Frame, area: Rect) {
    let help = " Tab campo | ←/→ tipo | Enter adicionar | ↑/↓ selecionar | Del excluir | Esc sair ";
    let bar = Paragraph::new(Line::from(Span::styled(help, theme::status_bar_style())))
        .style(theme::status_bar_style());
    f.render_widget(bar, area);
}

// ── Modal ────────────────────────────────────────────────────

fn render_notice(f: &mut Frame, area: Rect, app: &App) {
    let Some(notice) = &app.notice else {
        return;
    };

    let color = match notice.level {
        NoticeLevel::Warning => theme::YELLOW,
        NoticeLevel::Error => theme::RED,
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            notice.message.as_str(),
            theme::normal_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Pressione qualquer tecla",
            theme::dim_style(),
        )),
    ];

    let popup_width = (notice.message.chars().count() as u16 + 6)
        .max(32)
        .min(area.width.saturating_sub(4));
    let popup_height = (text.len() as u16 + 2).min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let popup = Paragraph::new(text).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", notice.level.title()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(popup, popup_area);
}
