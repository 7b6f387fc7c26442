//! Semantic actions the focus lists screen understands

use serde::{Deserialize, Serialize};

/// All user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Focus navigation ============
    /// Move focus to the row above
    MoveUp,
    /// Move focus to the row below
    MoveDown,
    /// Move focus to the column on the left
    MoveLeft,
    /// Move focus to the column on the right
    MoveRight,
    /// Cycle focus to the next column
    NextColumn,
    /// Cycle focus to the previous column
    PrevColumn,

    // ============ Rows ============
    /// Activate the focused row
    Press,

    // ============ Global ============
    /// Switch between dark and light schemes
    ToggleTheme,
    /// Quit the application
    Quit,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Focus previous row",
            Action::MoveDown => "Focus next row",
            Action::MoveLeft => "Focus left column",
            Action::MoveRight => "Focus right column",
            Action::NextColumn => "Next column",
            Action::PrevColumn => "Previous column",
            Action::Press => "Press row",
            Action::ToggleTheme => "Toggle theme",
            Action::Quit => "Quit",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::NextColumn
            | Action::PrevColumn => "Navigation",

            Action::Press => "Rows",

            Action::ToggleTheme | Action::Quit => "Global",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_description() {
        assert_eq!(Action::MoveUp.description(), "Focus previous row");
        assert_eq!(Action::Quit.description(), "Quit");
    }

    #[test]
    fn test_action_category() {
        assert_eq!(Action::NextColumn.category(), "Navigation");
        assert_eq!(Action::Press.category(), "Rows");
        assert_eq!(Action::ToggleTheme.category(), "Global");
    }

    #[test]
    fn test_action_serde_names() {
        let json = serde_json::to_string(&Action::ToggleTheme).unwrap();
        assert_eq!(json, "\"toggle_theme\"");

        let action: Action = serde_json::from_str("\"move_down\"").unwrap();
        assert_eq!(action, Action::MoveDown);
    }
}
