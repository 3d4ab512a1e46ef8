//! Monthly breakdown view
//!
//! The twelve projected months side by side, with the net row colored by sign.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::reports::{BreakdownRow, MonthlyBreakdown, RowKind};
use crate::tui::app::App;

use super::main_block;

/// Render the monthly breakdown view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = main_block(app, " Monthly Breakdown ");

    let breakdown = match MonthlyBreakdown::from_session(&*app.session) {
        Ok(breakdown) => breakdown,
        Err(e) => {
            let text = Paragraph::new(e.to_string())
                .block(block)
                .style(Style::default().fg(Color::Red));
            frame.render_widget(text, area);
            return;
        }
    };

    let settings = app.session.settings();
    let currency = settings.currency_symbol.as_str();
    let whole = settings.whole_currency_tables;
    let cell_width: u16 = if whole { 9 } else { 12 };

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(
        breakdown
            .header()
            .into_iter()
            .map(|label| Cell::from(label).style(bold)),
    )
    .style(Style::default().fg(Color::Yellow))
    .bottom_margin(1);

    let rows: Vec<Row> = breakdown
        .rows
        .iter()
        .map(|row| table_row(row, currency, whole, cell_width))
        .collect();

    let widths = std::iter::once(Constraint::Min(16))
        .chain(breakdown.months.iter().map(|_| Constraint::Length(cell_width)));

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}

fn table_row<'a>(row: &BreakdownRow, currency: &str, whole: bool, width: u16) -> Row<'a> {
    let label_style = match row.kind {
        RowKind::Income => Style::default().fg(Color::Green),
        RowKind::TotalExpenses | RowKind::TotalSavings | RowKind::Net => {
            Style::default().add_modifier(Modifier::BOLD)
        }
        RowKind::Expense | RowKind::Savings => Style::default().fg(Color::White),
    };

    let values = row.values.iter().map(|amount| {
        let text = MonthlyBreakdown::format_cell(*amount, currency, whole);
        let style = match row.kind {
            RowKind::Net if amount.is_negative() => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            RowKind::Net => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            _ => label_style,
        };
        Cell::from(format!("{:>w$}", text, w = width as usize)).style(style)
    });

    let cells = std::iter::once(Cell::from(row.label.clone()).style(label_style)).chain(values);

    let row_widget = Row::new(cells.collect::<Vec<_>>());
    if row.kind == RowKind::TotalExpenses {
        // Separate the category rows from the totals
        row_widget.top_margin(1)
    } else {
        row_widget
    }
}
