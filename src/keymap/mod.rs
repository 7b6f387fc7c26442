//! Keymap configuration module
//!
//! Preset keymaps (standard, vim, emacs) plus user overrides from the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        // Terminals report Shift+Tab as BackTab with SHIFT held
        let modifiers = if code == KeyCode::BackTab {
            modifiers - KeyModifiers::SHIFT
        } else {
            modifiers
        };

        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Overrides followed by preset bindings for actions not overridden
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset| !self.overrides.iter().any(|o| o.action == preset.action)),
        );
        bindings
    }

    /// Overrides whose key string cannot be parsed
    pub fn invalid_bindings(&self) -> Vec<(&KeyBinding, String)> {
        self.overrides
            .iter()
            .filter_map(|binding| binding.parse().err().map(|err| (binding, err)))
            .collect()
    }

    /// Display string for the first key bound to `action`
    pub fn key_display(&self, action: Action) -> String {
        self.all_bindings()
            .into_iter()
            .find(|b| b.action == action)
            .map(|b| b.display())
            .unwrap_or_else(|| "-".to_string())
    }

    /// Footer hint text for the focus lists screen
    pub fn footer_hints(&self) -> String {
        format!(
            "Rows: {}/{} | Columns: {}/{} | Theme: {} | Quit: {}",
            self.key_display(Action::MoveUp),
            self.key_display(Action::MoveDown),
            self.key_display(Action::MoveLeft),
            self.key_display(Action::MoveRight),
            self.key_display(Action::ToggleTheme),
            self.key_display(Action::Quit),
        )
    }
}
