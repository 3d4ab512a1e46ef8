//! Event handler for the TUI
//!
//! Routes keyboard events to the active dialog, the sidebar or the main view.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, ActiveView, App, ExpensePanel, FocusedPanel};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.switch_view(ActiveView::ALL[index]);
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_main_panel_key(app, key),
    }

    Ok(())
}

/// Handle keys when the sidebar is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    let index = app.active_view.index();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let next = (index + 1).min(ActiveView::ALL.len() - 1);
            app.switch_view(ActiveView::ALL[next]);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.switch_view(ActiveView::ALL[index.saturating_sub(1)]);
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            app.focused_panel = FocusedPanel::Main;
        }
        _ => {}
    }
}

/// Handle keys when the main panel is focused
fn handle_main_panel_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('h') | KeyCode::Left => app.focused_panel = FocusedPanel::Sidebar,
        _ => match app.active_view {
            ActiveView::Income => handle_income_view_key(app, key),
            ActiveView::Expenses => handle_expenses_view_key(app, key),
            ActiveView::Dashboard | ActiveView::Breakdown => {}
        },
    }
}

/// Handle keys in the income view
fn handle_income_view_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddIncome),
        KeyCode::Char('d') | KeyCode::Delete => request_removal(app),
        _ => {}
    }
}

/// Handle keys in the expenses view
fn handle_expenses_view_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(']') => app.expense_panel = app.expense_panel.next(),
        KeyCode::Char('[') => app.expense_panel = app.expense_panel.prev(),
        KeyCode::Char('a') | KeyCode::Char('n') => {
            let dialog = match app.expense_panel {
                ExpensePanel::Recurring => ActiveDialog::AddExpense,
                ExpensePanel::OneTime => ActiveDialog::AddOneTime,
                ExpensePanel::Savings => ActiveDialog::AddSavings,
            };
            app.open_dialog(dialog);
        }
        KeyCode::Char('d') | KeyCode::Delete => request_removal(app),
        _ => {}
    }
}

/// Ask for confirmation before removing the selected record
fn request_removal(app: &mut App) {
    match app.selected_removal() {
        Some(removal) => app.open_dialog(ActiveDialog::Confirm(removal)),
        None => app.set_status("Nothing selected"),
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Confirm(_) => {
            dialogs::confirm::handle_key(app, key);
        }
        ActiveDialog::AddIncome => {
            dialogs::income::handle_key(app, key);
        }
        ActiveDialog::AddExpense | ActiveDialog::AddSavings => {
            dialogs::category::handle_key(app, key);
        }
        ActiveDialog::AddOneTime => {
            dialogs::one_time::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Month};
    use crate::session::BudgetSession;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(app, Event::Key(key)).unwrap();
    }

    #[test]
    fn test_number_keys_switch_views() {
        let mut session = BudgetSession::new(Month::Jan);
        let mut app = App::new(&mut session);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_view, ActiveView::Expenses);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.active_view, ActiveView::Breakdown);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_view, ActiveView::Dashboard);
    }

    #[test]
    fn test_sidebar_navigation() {
        let mut session = BudgetSession::new(Month::Jan);
        let mut app = App::new(&mut session);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_panel, FocusedPanel::Sidebar);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.active_view, ActiveView::Income);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focused_panel, FocusedPanel::Main);
    }

    #[test]
    fn test_remove_requires_confirmation() {
        let mut session = BudgetSession::new(Month::Jan);
        session.add_savings("Crypto", Money::from_dollars(100)).unwrap();
        let mut app = App::new(&mut session);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.expense_panel, ExpensePanel::Savings);

        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.active_dialog, ActiveDialog::Confirm(_)));

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.has_dialog());
        assert_eq!(app.session.savings().unwrap().len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.session.savings().unwrap().is_empty());
        assert!(app.session.totals().total_monthly_savings.is_zero());
    }

    #[test]
    fn test_remove_on_empty_list() {
        let mut session = BudgetSession::new(Month::Jan);
        let mut app = App::new(&mut session);

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('d'));
        assert!(!app.has_dialog());
        assert_eq!(app.status_message.as_deref(), Some("Nothing selected"));
    }

    #[test]
    fn test_add_dialog_follows_panel() {
        let mut session = BudgetSession::new(Month::Jan);
        let mut app = App::new(&mut session);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddOneTime);

        // Typing 'q' in a dialog does not quit
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut session = BudgetSession::new(Month::Jan);
        let mut app = App::new(&mut session);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());
    }
}
