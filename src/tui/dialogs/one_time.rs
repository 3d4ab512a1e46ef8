//! One-time expense entry dialog
//!
//! Category picker, amount and the month the expense falls in.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Month, RecordKind};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

use super::category::CategoryPicker;
use super::income::form_hints;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OneTimeField {
    #[default]
    Category,
    Amount,
    Month,
}

impl OneTimeField {
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Month,
            Self::Month => Self::Category,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Category => Self::Month,
            Self::Amount => Self::Category,
            Self::Month => Self::Amount,
        }
    }
}

/// State for the one-time expense dialog
#[derive(Debug, Clone)]
pub struct OneTimeFormState {
    pub focused_field: OneTimeField,
    pub picker: CategoryPicker,
    pub amount_input: TextInput,
    pub month: Month,
    pub error_message: Option<String>,
}

impl Default for OneTimeFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl OneTimeFormState {
    pub fn new() -> Self {
        Self::with_month(Month::Jan)
    }

    /// Form with the month picker starting on `month`
    pub fn with_month(month: Month) -> Self {
        Self {
            focused_field: OneTimeField::Category,
            picker: CategoryPicker::new(RecordKind::OneTimeExpense),
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 1200"),
            month,
            error_message: None,
        }
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the one-time expense dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let form = &app.one_time_form;
    let entry_count = form.picker.entries().len() as u16;
    let area = centered_rect_fixed(52, entry_count + 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add One-Time Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(entry_count + 2), // Picker
            Constraint::Length(1),               // Custom name
            Constraint::Length(1),               // Amount
            Constraint::Length(1),               // Month
            Constraint::Length(1),               // Spacer
            Constraint::Length(1),               // Error
            Constraint::Length(1),               // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    form.picker.render(
        frame,
        chunks[0],
        chunks[1],
        form.focused_field == OneTimeField::Category,
    );
    frame.render_widget(
        form.amount_input
            .clone()
            .focused(form.focused_field == OneTimeField::Amount),
        chunks[2],
    );

    let month_focused = form.focused_field == OneTimeField::Month;
    let label_style = if month_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let mut month_line = vec![
        Span::styled("Month: ", label_style),
        Span::styled(
            format!("◀ {} ▶", form.month.full_name()),
            Style::default().fg(Color::White),
        ),
    ];
    if month_focused {
        month_line.push(Span::styled(
            "  (←/→ to change)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(month_line)), chunks[3]);

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[5],
        );
    }

    frame.render_widget(Paragraph::new(form_hints()), chunks[6]);
}

/// Handle key input for the one-time expense dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab => {
            let form = &mut app.one_time_form;
            form.focused_field = form.focused_field.next();
        }
        KeyCode::BackTab => {
            let form = &mut app.one_time_form;
            form.focused_field = form.focused_field.prev();
        }
        KeyCode::Enter => save(app),
        code => {
            let form = &mut app.one_time_form;
            return match form.focused_field {
                OneTimeField::Category => form.picker.handle_key(code),
                OneTimeField::Amount => form.amount_input.handle_key(code),
                OneTimeField::Month => match code {
                    KeyCode::Left | KeyCode::Up => {
                        form.month = form.month.prev();
                        true
                    }
                    KeyCode::Right | KeyCode::Down => {
                        form.month = form.month.next();
                        true
                    }
                    _ => false,
                },
            };
        }
    }
    true
}

fn save(app: &mut App) {
    let category = app.one_time_form.picker.selected();
    let amount = app.one_time_form.amount_input.value().trim().to_string();
    let month = app.one_time_form.month;

    match app
        .session
        .add_one_time_from_input(&category, &amount, Some(month))
    {
        Ok(expense) => {
            app.close_dialog();
            let currency = app.session.settings().currency_symbol.clone();
            app.set_status(format!(
                "Added one-time expense: {} {} in {}",
                expense.category,
                expense.amount.format_with_symbol(&currency),
                expense.month.full_name()
            ));
        }
        Err(e) => {
            app.set_status(e.to_string());
            app.one_time_form.set_error(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::session::BudgetSession;
    use crate::tui::app::ActiveDialog;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_month_picker_starts_at_window_start() {
        let mut session = BudgetSession::new(Month::Nov);
        let mut app = App::new(&mut session);
        app.open_dialog(ActiveDialog::AddOneTime);
        assert_eq!(app.one_time_form.month, Month::Nov);
    }

    #[test]
    fn test_add_one_time_expense() {
        let mut session = BudgetSession::new(Month::Nov);
        let mut app = App::new(&mut session);
        app.open_dialog(ActiveDialog::AddOneTime);

        // Gifts
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Tab);
        for c in "300".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        let expenses = app.session.one_time_expenses().unwrap();
        assert_eq!(expenses[0].category, "Gifts");
        assert_eq!(expenses[0].month, Month::Dec);

        let december = &app.session.projection()[1];
        assert_eq!(december.month, Month::Dec);
        assert_eq!(december.total_expenses(), Money::from_dollars(300));
        assert!(app.session.totals().total_monthly_expenses.is_zero());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut session = BudgetSession::new(Month::Jan);
        let mut app = App::new(&mut session);
        app.open_dialog(ActiveDialog::AddOneTime);

        press(&mut app, KeyCode::Tab);
        for c in "-50".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::AddOneTime);
        assert!(app.session.one_time_expenses().unwrap().is_empty());
    }
}
