//! Keybinding definitions
//!
//! Every shortcut the planner understands, grouped by where it applies.
//! The help dialog is generated from this table.

use crossterm::event::KeyCode;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Alternative key shown alongside the primary one
    pub alt: Option<KeyCode>,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active on the income view
    Income,
    /// Active on the expenses view
    Expenses,
    /// Active in add dialogs
    Dialog,
}

impl KeyContext {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::Income => "Income View",
            Self::Expenses => "Expenses View",
            Self::Dialog => "Add Dialogs",
        }
    }
}

const fn binding(
    key: KeyCode,
    alt: Option<KeyCode>,
    description: &'static str,
    context: KeyContext,
) -> Keybinding {
    Keybinding {
        key,
        alt,
        description,
        context,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    binding(KeyCode::Char('q'), Some(KeyCode::Esc), "Quit", KeyContext::Global),
    binding(KeyCode::Char('?'), None, "Show/hide help", KeyContext::Global),
    binding(KeyCode::Char('1'), None, "Dashboard", KeyContext::Global),
    binding(KeyCode::Char('2'), None, "Income", KeyContext::Global),
    binding(KeyCode::Char('3'), None, "Expenses", KeyContext::Global),
    binding(KeyCode::Char('4'), None, "Monthly breakdown", KeyContext::Global),
    binding(KeyCode::Tab, None, "Switch sidebar/main focus", KeyContext::Global),
    binding(
        KeyCode::Char('j'),
        Some(KeyCode::Down),
        "Move down",
        KeyContext::Global,
    ),
    binding(KeyCode::Char('k'), Some(KeyCode::Up), "Move up", KeyContext::Global),
    // Income
    binding(
        KeyCode::Char('a'),
        Some(KeyCode::Char('n')),
        "Add salary",
        KeyContext::Income,
    ),
    binding(
        KeyCode::Char('d'),
        Some(KeyCode::Delete),
        "Remove selected salary",
        KeyContext::Income,
    ),
    // Expenses
    binding(KeyCode::Char(']'), None, "Next list", KeyContext::Expenses),
    binding(KeyCode::Char('['), None, "Previous list", KeyContext::Expenses),
    binding(
        KeyCode::Char('a'),
        Some(KeyCode::Char('n')),
        "Add to the active list",
        KeyContext::Expenses,
    ),
    binding(
        KeyCode::Char('d'),
        Some(KeyCode::Delete),
        "Remove selected entry",
        KeyContext::Expenses,
    ),
    // Dialog
    binding(KeyCode::Tab, None, "Next field", KeyContext::Dialog),
    binding(KeyCode::Up, Some(KeyCode::Down), "Pick category", KeyContext::Dialog),
    binding(KeyCode::Left, Some(KeyCode::Right), "Pick month", KeyContext::Dialog),
    binding(KeyCode::Enter, None, "Save", KeyContext::Dialog),
    binding(KeyCode::Esc, None, "Cancel", KeyContext::Dialog),
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

fn format_key(key: KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        other => format!("{:?}", other),
    }
}

/// Format a keybinding for display, e.g. "q/Esc"
pub fn format_keybinding(kb: &Keybinding) -> String {
    match kb.alt {
        Some(alt) => format!("{}/{}", format_key(kb.key), format_key(alt)),
        None => format_key(kb.key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keybinding() {
        let quit = &get_keybindings(KeyContext::Global)[0];
        assert_eq!(format_keybinding(quit), "q/Esc");

        let next = &get_keybindings(KeyContext::Expenses)[0];
        assert_eq!(format_keybinding(next), "]");
    }

    #[test]
    fn test_every_view_switch_bound() {
        for key in ['1', '2', '3', '4'] {
            assert!(KEYBINDINGS
                .iter()
                .any(|kb| kb.key == KeyCode::Char(key) && kb.context == KeyContext::Global));
        }
    }
}
