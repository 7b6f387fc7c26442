//! scrollfocus - compare list scrolling and focus navigation strategies
//!
//! Renders the same 100 items three ways side by side: a scroll container
//! that mounts every row, a virtualized list that scrolls itself, and a
//! virtualized list with scrolling disabled that is moved by explicit
//! centered `scroll_to_index` requests from its rows' focus handlers.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod items;
pub mod keymap;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use items::{demo_items, Item, ITEM_COUNT};
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
pub use styles::{ColorScheme, ScreenStyles};
