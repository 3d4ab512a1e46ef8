//! Salary entry dialog
//!
//! Modal dialog for adding a salary: gross annual amount and tax rate.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the salary form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncomeField {
    #[default]
    Gross,
    TaxRate,
}

impl IncomeField {
    pub fn next(self) -> Self {
        match self {
            Self::Gross => Self::TaxRate,
            Self::TaxRate => Self::Gross,
        }
    }
}

/// State for the salary form dialog
#[derive(Debug, Clone)]
pub struct IncomeFormState {
    pub focused_field: IncomeField,
    pub gross_input: TextInput,
    pub tax_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for IncomeFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl IncomeFormState {
    pub fn new() -> Self {
        Self {
            focused_field: IncomeField::Gross,
            gross_input: TextInput::new()
                .label("Gross annual")
                .placeholder("e.g. 85000"),
            tax_input: TextInput::new().label("Tax rate %").placeholder("e.g. 22.5"),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            IncomeField::Gross => &mut self.gross_input,
            IncomeField::TaxRate => &mut self.tax_input,
        }
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the salary dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Salary ")
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
            Constraint::Length(1), // Gross
            Constraint::Length(1), // Tax
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.income_form;
    frame.render_widget(
        form.gross_input
            .clone()
            .focused(form.focused_field == IncomeField::Gross),
        chunks[0],
    );
    frame.render_widget(
        form.tax_input
            .clone()
            .focused(form.focused_field == IncomeField::TaxRate),
        chunks[1],
    );

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[3],
        );
    }

    frame.render_widget(Paragraph::new(form_hints()), chunks[5]);
}

/// Key hints shared by the add dialogs
pub fn form_hints() -> Line<'static> {
    Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ])
}

/// Handle key input for the salary dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::BackTab => app.income_form.next_field(),
        KeyCode::Enter => save_income(app),
        code => return app.income_form.focused_input().handle_key(code),
    }
    true
}

/// Add the salary; a rejected entry keeps the dialog open and the records unchanged
fn save_income(app: &mut App) {
    let gross = app.income_form.gross_input.value().trim().to_string();
    let tax = app.income_form.tax_input.value().trim().to_string();
    let tax = if tax.is_empty() { "0".to_string() } else { tax };

    match app.session.add_income_from_input(&gross, &tax) {
        Ok(record) => {
            app.close_dialog();
            let currency = app.session.settings().currency_symbol.clone();
            app.set_status(format!(
                "Added salary: {} net per month",
                record.monthly_net().format_with_symbol(&currency)
            ));
        }
        Err(e) => {
            app.set_status(e.to_string());
            app.income_form.set_error(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Month};
    use crate::session::BudgetSession;
    use crate::tui::app::ActiveDialog;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_salary() {
        let mut session = BudgetSession::new(Month::Jan);
        let mut app = App::new(&mut session);
        app.open_dialog(ActiveDialog::AddIncome);

        type_text(&mut app, "60000");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "20");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(
            app.session.totals().total_monthly_income,
            Money::from_dollars(4000)
        );
    }

    #[test]
    fn test_invalid_salary_keeps_dialog_open() {
        let mut session = BudgetSession::new(Month::Jan);
        let mut app = App::new(&mut session);
        app.open_dialog(ActiveDialog::AddIncome);

        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::AddIncome);
        assert!(app.income_form.error_message.is_some());
        assert!(app.session.incomes().unwrap().is_empty());
    }
}
