//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Budget data itself lives in the borrowed [`BudgetSession`]; every mutation
//! goes through it so the snapshot shown on screen is always current.

use crate::models::{ExpenseId, IncomeId, OneTimeExpenseId, RecordKind, SavingsId};
use crate::session::BudgetSession;

use super::dialogs::category::CategoryFormState;
use super::dialogs::income::IncomeFormState;
use super::dialogs::one_time::OneTimeFormState;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Income,
    Expenses,
    Breakdown,
}

impl ActiveView {
    /// Views in sidebar order
    pub const ALL: [ActiveView; 4] = [
        ActiveView::Dashboard,
        ActiveView::Income,
        ActiveView::Expenses,
        ActiveView::Breakdown,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Income => "Income",
            Self::Expenses => "Expenses",
            Self::Breakdown => "Monthly Breakdown",
        }
    }

    /// Position in the sidebar
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    Sidebar,
    #[default]
    Main,
}

/// The three lists on the expenses view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpensePanel {
    #[default]
    Recurring,
    OneTime,
    Savings,
}

impl ExpensePanel {
    pub fn next(self) -> Self {
        match self {
            Self::Recurring => Self::OneTime,
            Self::OneTime => Self::Savings,
            Self::Savings => Self::Recurring,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Recurring => Self::Savings,
            Self::OneTime => Self::Recurring,
            Self::Savings => Self::OneTime,
        }
    }

    /// Record kind listed on this panel
    pub fn record_kind(self) -> RecordKind {
        match self {
            Self::Recurring => RecordKind::RecurringExpense,
            Self::OneTime => RecordKind::OneTimeExpense,
            Self::Savings => RecordKind::Savings,
        }
    }
}

/// Record selected for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalTarget {
    Income(IncomeId),
    Expense(ExpenseId),
    OneTime(OneTimeExpenseId),
    Savings(SavingsId),
}

/// A removal waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    pub target: RemovalTarget,
    /// Shown in the confirm dialog
    pub label: String,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Confirm(PendingRemoval),
    AddIncome,
    AddExpense,
    AddOneTime,
    AddSavings,
}

/// Main application state
pub struct App<'a> {
    /// The budget being edited
    pub session: &'a mut BudgetSession,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Active list on the expenses view
    pub expense_panel: ExpensePanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in each list
    pub selected_income_index: usize,
    pub selected_expense_index: usize,
    pub selected_one_time_index: usize,
    pub selected_savings_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Salary form state
    pub income_form: IncomeFormState,

    /// Recurring expense / savings form state
    pub category_form: CategoryFormState,

    /// One-time expense form state
    pub one_time_form: OneTimeFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(session: &'a mut BudgetSession) -> Self {
        Self {
            session,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            expense_panel: ExpensePanel::default(),
            active_dialog: ActiveDialog::None,
            selected_income_index: 0,
            selected_expense_index: 0,
            selected_one_time_index: 0,
            selected_savings_index: 0,
            status_message: None,
            income_form: IncomeFormState::new(),
            category_form: CategoryFormState::new(RecordKind::RecurringExpense),
            one_time_form: OneTimeFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.clear_status();
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Open a dialog, resetting the form it uses
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::AddIncome => self.income_form = IncomeFormState::new(),
            ActiveDialog::AddExpense => {
                self.category_form = CategoryFormState::new(RecordKind::RecurringExpense)
            }
            ActiveDialog::AddSavings => {
                self.category_form = CategoryFormState::new(RecordKind::Savings)
            }
            ActiveDialog::AddOneTime => {
                self.one_time_form = OneTimeFormState::with_month(self.session.start_month())
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Number of rows in the list that currently takes j/k
    pub fn active_list_len(&self) -> usize {
        let storage = self.session.storage();
        match (self.active_view, self.expense_panel) {
            (ActiveView::Income, _) => storage.incomes.count(),
            (ActiveView::Expenses, ExpensePanel::Recurring) => storage.expenses.count(),
            (ActiveView::Expenses, ExpensePanel::OneTime) => storage.one_time.count(),
            (ActiveView::Expenses, ExpensePanel::Savings) => storage.savings.count(),
            _ => Ok(0),
        }
        .unwrap_or(0)
    }

    fn active_index_mut(&mut self) -> Option<&mut usize> {
        match (self.active_view, self.expense_panel) {
            (ActiveView::Income, _) => Some(&mut self.selected_income_index),
            (ActiveView::Expenses, ExpensePanel::Recurring) => {
                Some(&mut self.selected_expense_index)
            }
            (ActiveView::Expenses, ExpensePanel::OneTime) => Some(&mut self.selected_one_time_index),
            (ActiveView::Expenses, ExpensePanel::Savings) => Some(&mut self.selected_savings_index),
            _ => None,
        }
    }

    /// Move selection up in the active list
    pub fn move_up(&mut self) {
        if let Some(index) = self.active_index_mut() {
            *index = index.saturating_sub(1);
        }
    }

    /// Move selection down in the active list
    pub fn move_down(&mut self) {
        let len = self.active_list_len();
        if let Some(index) = self.active_index_mut() {
            if *index + 1 < len {
                *index += 1;
            }
        }
    }

    /// Keep every selection inside its list after a removal
    pub fn clamp_selections(&mut self) {
        let storage = self.session.storage();
        let clamp = |index: usize, len: usize| index.min(len.saturating_sub(1));
        let incomes = storage.incomes.count().unwrap_or(0);
        let expenses = storage.expenses.count().unwrap_or(0);
        let one_time = storage.one_time.count().unwrap_or(0);
        let savings = storage.savings.count().unwrap_or(0);

        self.selected_income_index = clamp(self.selected_income_index, incomes);
        self.selected_expense_index = clamp(self.selected_expense_index, expenses);
        self.selected_one_time_index = clamp(self.selected_one_time_index, one_time);
        self.selected_savings_index = clamp(self.selected_savings_index, savings);
    }

    /// The record under the cursor in the active list, ready to confirm
    pub fn selected_removal(&self) -> Option<PendingRemoval> {
        let currency = &self.session.settings().currency_symbol;
        match (self.active_view, self.expense_panel) {
            (ActiveView::Income, _) => {
                let incomes = self.session.incomes().ok()?;
                let income = incomes.get(self.selected_income_index)?;
                Some(PendingRemoval {
                    target: RemovalTarget::Income(income.id),
                    label: format!(
                        "salary of {}",
                        income.gross_annual.format_with_symbol(currency)
                    ),
                })
            }
            (ActiveView::Expenses, ExpensePanel::Recurring) => {
                let expenses = self.session.expenses().ok()?;
                let expense = expenses.get(self.selected_expense_index)?;
                Some(PendingRemoval {
                    target: RemovalTarget::Expense(expense.id),
                    label: format!(
                        "{} ({} per month)",
                        expense.category,
                        expense.monthly_amount.format_with_symbol(currency)
                    ),
                })
            }
            (ActiveView::Expenses, ExpensePanel::OneTime) => {
                let expenses = self.session.one_time_expenses().ok()?;
                let expense = expenses.get(self.selected_one_time_index)?;
                Some(PendingRemoval {
                    target: RemovalTarget::OneTime(expense.id),
                    label: format!(
                        "{} in {} ({})",
                        expense.category,
                        expense.month.full_name(),
                        expense.amount.format_with_symbol(currency)
                    ),
                })
            }
            (ActiveView::Expenses, ExpensePanel::Savings) => {
                let savings = self.session.savings().ok()?;
                let allocation = savings.get(self.selected_savings_index)?;
                Some(PendingRemoval {
                    target: RemovalTarget::Savings(allocation.id),
                    label: format!(
                        "{} ({} per month)",
                        allocation.category,
                        allocation.monthly_amount.format_with_symbol(currency)
                    ),
                })
            }
            _ => None,
        }
    }

    /// Remove a confirmed record through the session
    pub fn apply_removal(&mut self, removal: &PendingRemoval) {
        let result = match removal.target {
            RemovalTarget::Income(id) => self.session.remove_income(id),
            RemovalTarget::Expense(id) => self.session.remove_expense(id),
            RemovalTarget::OneTime(id) => self.session.remove_one_time(id),
            RemovalTarget::Savings(id) => self.session.remove_savings(id),
        };

        match result {
            Ok(true) => self.set_status(format!("Removed {}", removal.label)),
            Ok(false) => self.set_status("Nothing to remove"),
            Err(e) => self.set_status(e.to_string()),
        }
        self.clamp_selections();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Month, TaxRate};

    fn sample_session() -> BudgetSession {
        let mut session = BudgetSession::new(Month::Jan);
        session
            .add_income(Money::from_dollars(60_000), TaxRate::from_percent(20).unwrap())
            .unwrap();
        session.add_expense("Housing", Money::from_dollars(1500)).unwrap();
        session.add_expense("Groceries", Money::from_dollars(400)).unwrap();
        session
    }

    #[test]
    fn test_move_selection_stays_in_bounds() {
        let mut session = sample_session();
        let mut app = App::new(&mut session);
        app.switch_view(ActiveView::Expenses);

        app.move_down();
        app.move_down();
        assert_eq!(app.selected_expense_index, 1);

        app.move_up();
        app.move_up();
        assert_eq!(app.selected_expense_index, 0);
    }

    #[test]
    fn test_panels_cycle() {
        assert_eq!(ExpensePanel::Recurring.next(), ExpensePanel::OneTime);
        assert_eq!(ExpensePanel::Savings.next(), ExpensePanel::Recurring);
        assert_eq!(ExpensePanel::Recurring.prev(), ExpensePanel::Savings);
    }

    #[test]
    fn test_remove_selected_expense() {
        let mut session = sample_session();
        let mut app = App::new(&mut session);
        app.switch_view(ActiveView::Expenses);
        app.move_down();

        let removal = app.selected_removal().unwrap();
        assert!(removal.label.starts_with("Groceries"));
        app.apply_removal(&removal);

        assert_eq!(app.selected_expense_index, 0);
        assert_eq!(
            app.session.totals().total_monthly_expenses,
            Money::from_dollars(1500)
        );
        assert_eq!(
            app.status_message.as_deref(),
            Some("Removed Groceries ($400.00 per month)")
        );
    }

    #[test]
    fn test_removing_twice_is_noop() {
        let mut session = sample_session();
        let mut app = App::new(&mut session);
        app.switch_view(ActiveView::Income);

        let removal = app.selected_removal().unwrap();
        app.apply_removal(&removal);
        app.apply_removal(&removal);

        assert_eq!(app.status_message.as_deref(), Some("Nothing to remove"));
        assert!(app.session.totals().total_monthly_income.is_zero());
    }

    #[test]
    fn test_no_removal_on_dashboard() {
        let mut session = sample_session();
        let app = App::new(&mut session);
        assert!(app.selected_removal().is_none());
    }
}
