//! TUI Views module
//!
//! Contains the four main views (dashboard, income, expenses, monthly
//! breakdown) as well as the sidebar and status bar.

pub mod breakdown;
pub mod dashboard;
pub mod expenses;
pub mod income;
pub mod sidebar;
pub mod status_bar;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_view {
        ActiveView::Dashboard => dashboard::render(frame, app, layout.main),
        ActiveView::Income => income::render(frame, app, layout.main),
        ActiveView::Expenses => expenses::render(frame, app, layout.main),
        ActiveView::Breakdown => breakdown::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::Confirm(removal) => dialogs::confirm::render(frame, removal),
        ActiveDialog::AddIncome => dialogs::income::render(frame, app),
        ActiveDialog::AddExpense | ActiveDialog::AddSavings => {
            dialogs::category::render(frame, app)
        }
        ActiveDialog::AddOneTime => dialogs::one_time::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Bordered block for the main panel, highlighted when it has focus
pub(crate) fn main_block<'b>(app: &App, title: &'b str) -> Block<'b> {
    let border_color = if app.focused_panel == FocusedPanel::Main {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}
