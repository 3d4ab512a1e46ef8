//! Dashboard view
//!
//! Monthly and annual summaries with their percentage shares, and the
//! stacked expenses-per-month chart against the monthly budget.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};

use crate::display::report::format_percentage;
use crate::models::Money;
use crate::reports::{BudgetSummary, ChartBar, DashboardReport, ExpenseChart};
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

use super::main_block;

/// Colors cycled through for successive chart categories
const SEGMENT_COLORS: [Color; 8] = [
    Color::Cyan,
    Color::Magenta,
    Color::Blue,
    Color::Yellow,
    Color::LightGreen,
    Color::LightRed,
    Color::LightBlue,
    Color::Gray,
];

/// Render the dashboard view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = main_block(app, " Dashboard ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = DashboardLayout::new(inner);
    let report = DashboardReport::generate(app.session.totals());
    let currency = app.session.settings().currency_symbol.clone();

    render_summary(frame, &report.monthly, &currency, layout.monthly);
    render_summary(frame, &report.annual, &currency, layout.annual);

    match ExpenseChart::from_session(&*app.session) {
        Ok(chart) => render_chart(frame, &chart, &currency, layout.chart),
        Err(e) => frame.render_widget(
            Paragraph::new(e.to_string()).style(Style::default().fg(Color::Red)),
            layout.chart,
        ),
    }
}

/// One summary block: figures on top, share gauges below
fn render_summary(frame: &mut Frame, summary: &BudgetSummary, currency: &str, area: Rect) {
    let block = Block::default()
        .title(format!(" {} Budget ", summary.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Figures
            Constraint::Length(1), // Available
            Constraint::Length(1), // Spent
            Constraint::Length(1), // Saved
            Constraint::Min(0),
        ])
        .split(inner);

    let remaining_color = if summary.is_over_budget() {
        Color::Red
    } else {
        Color::Green
    };
    let figure = |label: &'static str, amount: Money, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), Style::default().fg(Color::White)),
            Span::styled(
                format!("{:>16}", amount.format_with_symbol(currency)),
                Style::default().fg(color),
            ),
        ])
    };
    let figures = vec![
        figure("Budget", summary.budget, Color::White),
        figure("Expenses", summary.expenses, Color::White),
        figure("Savings", summary.savings, Color::White),
        figure("Remaining", summary.remaining, remaining_color),
    ];
    frame.render_widget(Paragraph::new(figures), rows[0]);

    let shares = [
        ("Available", summary.available_pct, Color::Green),
        ("Spent", summary.expense_pct, Color::Yellow),
        ("Saved", summary.savings_pct, Color::Cyan),
    ];
    for ((label, pct, color), row) in shares.into_iter().zip(rows[1..4].iter()) {
        let gauge = LineGauge::default()
            .filled_style(Style::default().fg(color))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .line_set(symbols::line::THICK)
            .label(format!("{:<9} {:>5}", label, format_percentage(pct)))
            .ratio((pct / 100.0).clamp(0.0, 1.0));
        frame.render_widget(gauge, *row);
    }
}

/// Stacked horizontal bars, one per projected month
fn render_chart(frame: &mut Frame, chart: &ExpenseChart, currency: &str, area: Rect) {
    let block = Block::default()
        .title(" Expenses vs Budget Target ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Month label and total take 22 cells
    let width = (inner.width as usize).saturating_sub(22);
    let marker = chart
        .cell_span(chart.monthly_budget, width)
        .min(width.saturating_sub(1));

    let mut lines: Vec<Line> = chart
        .bars
        .iter()
        .map(|bar| bar_line(chart, bar, currency, width, marker))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("│ ", Style::default().fg(Color::Red)),
        Span::raw(format!(
            "Monthly budget {}",
            chart.monthly_budget.format_whole(currency)
        )),
    ]));
    let legend: Vec<Span> = chart
        .categories
        .iter()
        .enumerate()
        .flat_map(|(index, category)| {
            [
                Span::styled(
                    "■ ",
                    Style::default().fg(SEGMENT_COLORS[index % SEGMENT_COLORS.len()]),
                ),
                Span::raw(format!("{}  ", category)),
            ]
        })
        .collect();
    lines.push(Line::from(legend));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn bar_line<'a>(
    chart: &ExpenseChart,
    bar: &ChartBar,
    currency: &str,
    width: usize,
    marker: usize,
) -> Line<'a> {
    // One (glyph, color) per cell, then merged into spans
    let mut cells: Vec<(char, Color)> = Vec::with_capacity(width);
    let mut running = Money::zero();
    for (index, amount) in bar.segments.iter().enumerate() {
        let start = chart.cell_span(running, width);
        running += *amount;
        let end = chart.cell_span(running, width);
        let color = SEGMENT_COLORS[index % SEGMENT_COLORS.len()];
        cells.extend(std::iter::repeat(('█', color)).take(end.saturating_sub(start)));
    }
    cells.resize(width, (' ', Color::Reset));
    if width > 0 && chart.monthly_budget.is_positive() && cells[marker].0 == ' ' {
        cells[marker] = ('│', Color::Red);
    }

    let mut spans = vec![Span::styled(
        format!("{:<4} ", bar.month.label()),
        Style::default().fg(Color::White),
    )];
    let mut runs: Vec<(String, Color)> = Vec::new();
    for (glyph, color) in cells {
        match runs.last_mut() {
            Some((text, run_color)) if *run_color == color => text.push(glyph),
            _ => runs.push((glyph.to_string(), color)),
        }
    }
    spans.extend(
        runs.into_iter()
            .map(|(text, color)| Span::styled(text, Style::default().fg(color))),
    );

    let total_style = if bar.exceeds(chart.monthly_budget) {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    spans.push(Span::styled(
        format!(" {:>15}", bar.total.format_whole(currency)),
        total_style,
    ));

    Line::from(spans)
}
