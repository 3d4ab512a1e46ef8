//! Income view
//!
//! Lists every salary with its tax rate and net income.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::App;

use super::main_block;

/// Render the income view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = main_block(app, " Income ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    let currency = app.session.settings().currency_symbol.clone();
    let incomes = app.session.incomes().unwrap_or_default();

    if incomes.is_empty() {
        let text = Paragraph::new("No income added. Press 'a' to add a salary.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, chunks[0]);
    } else {
        let widths = [
            Constraint::Length(10), // ID
            Constraint::Min(16),    // Gross
            Constraint::Length(10), // Tax
            Constraint::Min(16),    // Annual net
            Constraint::Min(16),    // Monthly net
        ];

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let header = Row::new(vec![
            Cell::from("ID").style(bold),
            Cell::from("Gross Annual").style(bold),
            Cell::from("Tax").style(bold),
            Cell::from("Annual Net").style(bold),
            Cell::from("Monthly Net").style(bold),
        ])
        .style(Style::default().fg(Color::Yellow))
        .bottom_margin(1);

        let rows: Vec<Row> = incomes
            .iter()
            .map(|income| {
                Row::new(vec![
                    Cell::from(income.id.to_string()),
                    Cell::from(income.gross_annual.format_with_symbol(&currency)),
                    Cell::from(income.tax_rate.to_string()),
                    Cell::from(income.annual_net().format_with_symbol(&currency)),
                    Cell::from(income.monthly_net().format_with_symbol(&currency))
                        .style(Style::default().fg(Color::Green)),
                ])
            })
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(Some(app.selected_income_index));
        frame.render_stateful_widget(table, chunks[0], &mut state);
    }

    let totals = app.session.totals();
    let footer = Line::from(vec![
        Span::styled("Total monthly income: ", Style::default().fg(Color::White)),
        Span::styled(
            totals.total_monthly_income.format_with_symbol(&currency),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Annual: ", Style::default().fg(Color::White)),
        Span::styled(
            totals.total_annual_income.format_with_symbol(&currency),
            Style::default().fg(Color::Green),
        ),
    ]);
    frame.render_widget(Paragraph::new(vec![Line::from(""), footer]), chunks[1]);
}
