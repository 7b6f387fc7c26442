//! KeyBinding struct for mapping keys to actions
//!
//! Key strings look like "j", "down", "ctrl+n" or "backtab".

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "j", "down", "ctrl+n")
    pub key: String,

    /// The action this key triggers
    pub action: Action,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
        }
    }

    /// Check if this binding matches the given key event
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.parse()
            .is_ok_and(|parsed| parsed.code == code && parsed.modifiers == modifiers)
    }

    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Get the display string for this binding (e.g., "Ctrl+N")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }
}

/// Parse a key string like "ctrl+n" into KeyCode and KeyModifiers
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    let (modifier_parts, key_part) = match key.rsplit_once('+') {
        // "+" on its own or "ctrl++" binds the plus key
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, last)) => (mods, last),
        None => ("", key.as_str()),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_parts.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return Err(format!("Unknown modifier: {}", part)),
        }
    }

    let code = parse_key_code(key_part)?;
    Ok(ParsedKey { code, modifiers })
}

/// Parse a single key name into KeyCode
fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let code = match key.trim() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("Unknown key: {}", other)),
            }
        }
    };
    Ok(code)
}

/// Format a key string for display (e.g., "ctrl+n" -> "Ctrl+N")
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "up" => "↑".to_string(),
                "down" => "↓".to_string(),
                "left" => "←".to_string(),
                "right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "backtab" => "Shift+Tab".to_string(),
                single if single.chars().count() == 1 => single.to_uppercase(),
                other => other.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}
