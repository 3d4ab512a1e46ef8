//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::session::BudgetSession;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive planner on a session
///
/// Records live in the session for as long as the UI is open.
pub fn run_tui(session: &mut BudgetSession) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, session);
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, session: &mut BudgetSession) -> Result<()> {
    let mut app = App::new(session);
    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| super::views::render(frame, &mut app))?;

        match events.next()? {
            Event::Key(key) => handle_event(&mut app, Event::Key(key))?,
            // Terminal will redraw on the next pass
            Event::Resize(_, _) | Event::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
