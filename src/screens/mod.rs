//! Screen controllers for the application.
//!
//! Each screen controller implements the [`Screen`] trait, owns its state,
//! and handles both rendering and events.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! │   poll event ─► screen.handle_event(...)     │
//! │                  └─► ScreenAction            │
//! │   tick       ─► screen.on_tick()             │
//! │   draw       ─► screen.render(frame, ctx)    │
//! └──────────────────────────────────────────────┘
//! ```

pub mod focus_lists;
pub mod screen_trait;

pub use focus_lists::{ColumnId, FocusListsScreen, FocusTarget};
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
