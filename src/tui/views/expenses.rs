//! Expenses view
//!
//! Three lists on one screen, switched with `[` and `]`: monthly expenses,
//! one-time expenses and savings.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs},
    Frame,
};

use crate::models::Money;
use crate::tui::app::{App, ExpensePanel};
use crate::tui::layout::ExpensesLayout;

use super::main_block;

const PANELS: [ExpensePanel; 3] = [
    ExpensePanel::Recurring,
    ExpensePanel::OneTime,
    ExpensePanel::Savings,
];

/// Render the expenses view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = main_block(app, " Expenses ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = ExpensesLayout::new(inner);
    render_tabs(frame, app, layout.tabs);

    let currency = app.session.settings().currency_symbol.clone();
    let (table_rows, selected, total) = match app.expense_panel {
        ExpensePanel::Recurring => {
            let expenses = app.session.expenses().unwrap_or_default();
            let rows = expenses
                .iter()
                .map(|e| {
                    [
                        e.id.to_string(),
                        e.category.clone(),
                        e.monthly_amount.format_with_symbol(&currency),
                        e.annual_amount().format_with_symbol(&currency),
                    ]
                })
                .collect::<Vec<_>>();
            let total = app.session.totals().total_monthly_expenses;
            (rows, app.selected_expense_index, total)
        }
        ExpensePanel::OneTime => {
            let expenses = app.session.one_time_expenses().unwrap_or_default();
            let rows = expenses
                .iter()
                .map(|e| {
                    [
                        e.id.to_string(),
                        e.category.clone(),
                        e.amount.format_with_symbol(&currency),
                        e.month.full_name().to_string(),
                    ]
                })
                .collect::<Vec<_>>();
            let total: Money = expenses.iter().map(|e| e.amount).sum();
            (rows, app.selected_one_time_index, total)
        }
        ExpensePanel::Savings => {
            let savings = app.session.savings().unwrap_or_default();
            let rows = savings
                .iter()
                .map(|s| {
                    [
                        s.id.to_string(),
                        s.category.clone(),
                        s.monthly_amount.format_with_symbol(&currency),
                        s.annual_amount().format_with_symbol(&currency),
                    ]
                })
                .collect::<Vec<_>>();
            let total = app.session.totals().total_monthly_savings;
            (rows, app.selected_savings_index, total)
        }
    };

    let list_block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title_bottom(total_line(app.expense_panel, total, &currency));

    if table_rows.is_empty() {
        let text = Paragraph::new("Nothing here yet. Press 'a' to add an entry.")
            .block(list_block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, layout.list);
        return;
    }

    let headers = match app.expense_panel {
        ExpensePanel::OneTime => ["ID", "Category", "Amount", "Month"],
        _ => ["ID", "Category", "Monthly", "Annual"],
    };
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(headers.map(|h| Cell::from(h).style(bold)))
        .style(Style::default().fg(Color::Yellow))
        .bottom_margin(1);

    let widths = [
        Constraint::Length(10),
        Constraint::Min(20),
        Constraint::Min(14),
        Constraint::Min(14),
    ];

    let rows: Vec<Row> = table_rows.into_iter().map(Row::new).collect();
    let table = Table::new(rows, widths)
        .header(header)
        .block(list_block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(table, layout.list, &mut state);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = PANELS
        .iter()
        .map(|panel| panel.record_kind().name().to_string())
        .collect();
    let selected = PANELS
        .iter()
        .position(|p| *p == app.expense_panel)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" [ / ] "),
        )
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn total_line(panel: ExpensePanel, total: Money, currency: &str) -> Line<'static> {
    let label = match panel {
        ExpensePanel::Recurring => " Total per month: ",
        ExpensePanel::OneTime => " Total this year: ",
        ExpensePanel::Savings => " Saved per month: ",
    };
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::White)),
        Span::styled(
            format!("{} ", total.format_with_symbol(currency)),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
