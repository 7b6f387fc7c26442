//! Screen trait and associated types.
//!
//! Screens own their state, render themselves, and turn input events into a
//! [`ScreenAction`] for the app to carry out. Shared resources come in
//! through read-only context objects.

use crate::keymap::Keymap;
use crate::styles::ScreenStyles;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Styles resolved for the current color scheme.
    pub styles: &'a ScreenStyles,
    /// Active keymap, for footer hints.
    pub keymap: &'a Keymap,
}

impl<'a> RenderContext<'a> {
    pub fn new(styles: &'a ScreenStyles, keymap: &'a Keymap) -> Self {
        Self { styles, keymap }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    /// Active keymap used to translate keys into actions.
    pub keymap: &'a Keymap,
}

impl<'a> ScreenContext<'a> {
    pub fn new(keymap: &'a Keymap) -> Self {
        Self { keymap }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Switch between the dark and light color schemes.
    ToggleTheme,
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::None)
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and report what the app should do next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Called once per event loop iteration, after any event was handled.
    ///
    /// Returns true if the screen changed and should be redrawn.
    fn on_tick(&mut self) -> bool {
        false
    }
}
