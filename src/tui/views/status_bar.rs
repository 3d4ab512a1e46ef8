//! Status bar view
//!
//! Shows the remaining monthly budget, the projection start and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let remaining = app.session.totals().remaining_monthly_budget;
    let currency = &app.session.settings().currency_symbol;

    let remaining_color = if remaining.is_negative() {
        Color::Red
    } else if remaining.is_zero() {
        Color::Yellow
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(" Remaining: ", Style::default().fg(Color::White)),
        Span::styled(
            remaining.format_with_symbol(currency),
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("From {}", app.session.start_month().full_name()),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = " q:Quit  ?:Help  1-4:Views ";
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
