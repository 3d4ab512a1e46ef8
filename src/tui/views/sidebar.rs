//! Sidebar view
//!
//! Shows the view switcher and the monthly totals

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_view_switcher(frame, app, layout.view_switcher);
    render_totals(frame, app, layout.totals);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Budget Planner ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render view switcher
fn render_view_switcher(frame: &mut Frame, app: &mut App, area: Rect) {
    let border_color = if app.focused_panel == FocusedPanel::Sidebar {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Views ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = ActiveView::ALL
        .iter()
        .enumerate()
        .map(|(index, view)| {
            let active = app.active_view == *view;
            let style = if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let indicator = if active { "▶" } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(
                    format!("[{}] ", index + 1),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(view.title(), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the monthly headline figures
fn render_totals(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" This Month ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let totals = *app.session.totals();
    let currency = &app.session.settings().currency_symbol;

    let row = |label: &'static str, amount: Money, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<11}", label), Style::default().fg(Color::White)),
            Span::styled(
                format!("{:>14}", amount.format_with_symbol(currency)),
                Style::default().fg(color),
            ),
        ])
    };

    let remaining_color = if totals.remaining_monthly_budget.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        row("Income", totals.total_monthly_income, Color::White),
        row("Expenses", totals.total_monthly_expenses, Color::White),
        row("Savings", totals.total_monthly_savings, Color::White),
        row("Remaining", totals.remaining_monthly_budget, remaining_color),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
