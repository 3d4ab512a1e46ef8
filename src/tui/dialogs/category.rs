//! Recurring expense and savings entry dialog
//!
//! Both records are a category plus a monthly amount. The category comes
//! from the standard list for the record kind, or from free text when the
//! last "Custom" entry is picked.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::RecordKind;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

use super::income::form_hints;

/// Label of the free-text entry at the end of every picker
const CUSTOM_ENTRY: &str = "Custom…";

/// Category list with a trailing free-text option
#[derive(Debug, Clone)]
pub struct CategoryPicker {
    pub kind: RecordKind,
    pub index: usize,
    pub custom_input: TextInput,
}

impl CategoryPicker {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            index: 0,
            custom_input: TextInput::new()
                .label("Custom")
                .placeholder("Category name"),
        }
    }

    /// Standard categories plus the custom entry
    pub fn entries(&self) -> Vec<&'static str> {
        let mut entries = self.kind.standard_categories().to_vec();
        entries.push(CUSTOM_ENTRY);
        entries
    }

    pub fn is_custom(&self) -> bool {
        self.index + 1 >= self.entries().len()
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.entries().len();
    }

    pub fn prev(&mut self) {
        let len = self.entries().len();
        self.index = (self.index + len - 1) % len;
    }

    /// The chosen category name (may be blank for an empty custom entry)
    pub fn selected(&self) -> String {
        if self.is_custom() {
            self.custom_input.value().trim().to_string()
        } else {
            self.entries()[self.index].to_string()
        }
    }

    /// Keys while the picker has focus; typing goes to the custom field
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up => self.prev(),
            KeyCode::Down => self.next(),
            code if self.is_custom() => return self.custom_input.handle_key(code),
            _ => return false,
        }
        true
    }

    /// Render the list and, for the custom entry, the text field below it
    pub fn render(&self, frame: &mut Frame, list_area: Rect, custom_area: Rect, focused: bool) {
        let items: Vec<ListItem> = self
            .entries()
            .iter()
            .map(|name| ListItem::new(Line::from(format!("  {}", name))))
            .collect();

        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Category (↑/↓) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(self.index));
        frame.render_stateful_widget(list, list_area, &mut state);

        if self.is_custom() {
            frame.render_widget(self.custom_input.clone().focused(focused), custom_area);
        }
    }
}

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryField {
    #[default]
    Category,
    Amount,
}

/// State for the recurring expense / savings dialog
#[derive(Debug, Clone)]
pub struct CategoryFormState {
    pub focused_field: CategoryField,
    pub picker: CategoryPicker,
    pub amount_input: TextInput,
    pub error_message: Option<String>,
}

impl CategoryFormState {
    /// Form for `RecordKind::RecurringExpense` or `RecordKind::Savings`
    pub fn new(kind: RecordKind) -> Self {
        Self {
            focused_field: CategoryField::Category,
            picker: CategoryPicker::new(kind),
            amount_input: TextInput::new()
                .label("Monthly amount")
                .placeholder("e.g. 450"),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = match self.focused_field {
            CategoryField::Category => CategoryField::Amount,
            CategoryField::Amount => CategoryField::Category,
        };
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the recurring expense / savings dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let form = &app.category_form;
    let entry_count = form.picker.entries().len() as u16;
    let area = centered_rect_fixed(52, entry_count + 10, frame.area());
    frame.render_widget(Clear, area);

    let title = match form.picker.kind {
        RecordKind::Savings => " Add Savings ",
        _ => " Add Monthly Expense ",
    };
    let block = Block::default()
        .title(title)
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
        form.focused_field == CategoryField::Category,
    );
    frame.render_widget(
        form.amount_input
            .clone()
            .focused(form.focused_field == CategoryField::Amount),
        chunks[2],
    );

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[4],
        );
    }

    frame.render_widget(Paragraph::new(form_hints()), chunks[5]);
}

/// Handle key input for the recurring expense / savings dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::BackTab => app.category_form.next_field(),
        KeyCode::Enter => save(app),
        code => {
            let form = &mut app.category_form;
            return match form.focused_field {
                CategoryField::Category => form.picker.handle_key(code),
                CategoryField::Amount => form.amount_input.handle_key(code),
            };
        }
    }
    true
}

fn save(app: &mut App) {
    let category = app.category_form.picker.selected();
    let amount = app.category_form.amount_input.value().trim().to_string();
    let currency = app.session.settings().currency_symbol.clone();

    let result = match app.category_form.picker.kind {
        RecordKind::Savings => app
            .session
            .add_savings_from_input(&category, &amount)
            .map(|s| (s.category, s.monthly_amount, "savings")),
        _ => app
            .session
            .add_expense_from_input(&category, &amount)
            .map(|e| (e.category, e.monthly_amount, "expense")),
    };

    match result {
        Ok((category, amount, noun)) => {
            app.close_dialog();
            app.set_status(format!(
                "Added {}: {} {}",
                noun,
                category,
                amount.format_with_symbol(&currency)
            ));
        }
        Err(e) => {
            app.set_status(e.to_string());
            app.category_form.set_error(e.to_string());
        }
    }
}
