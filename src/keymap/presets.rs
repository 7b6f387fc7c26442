//! Preset keymaps: Standard, Vim, Emacs

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrow keys, Tab, Enter
    #[default]
    Standard,
    /// hjkl navigation
    Vim,
    /// Ctrl+N/P/B/F navigation
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        };
        bindings.extend(shared_bindings());
        bindings
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

impl FromStr for KeymapPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(KeymapPreset::Standard),
            "vim" => Ok(KeymapPreset::Vim),
            "emacs" => Ok(KeymapPreset::Emacs),
            other => Err(format!("Unknown keymap preset: {}", other)),
        }
    }
}

fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("space", Action::Press),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("esc", Action::Quit),
    ]
}

fn vim_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        // Arrows still work in vim mode
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("q", Action::Quit),
    ]
}

fn emacs_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("ctrl+g", Action::Quit),
        KeyBinding::new("ctrl+x", Action::Quit),
    ]
}

/// Bindings every preset shares
fn shared_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("tab", Action::NextColumn),
        KeyBinding::new("backtab", Action::PrevColumn),
        KeyBinding::new("enter", Action::Press),
        KeyBinding::new("t", Action::ToggleTheme),
        KeyBinding::new("ctrl+c", Action::Quit),
    ]
}
