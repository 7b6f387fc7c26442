use crate::styles::ScreenStyles;
use ratatui::symbols::line;
use ratatui::text::{Line, Span, Text};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info};

/// Callback a parent hands to a row, invoked with the row's index on focus
pub type FocusHandler = Rc<dyn Fn(usize)>;

/// A focusable row cell
///
/// Rows own their focus flag. The flag only lives as long as the row is
/// mounted, so a virtualized list that drops a row also drops its state.
pub struct RowItem {
    index: usize,
    title: String,
    focused: bool,
    on_focus: Option<FocusHandler>,
}

impl RowItem {
    pub fn new(index: usize, title: impl Into<String>) -> Self {
        Self {
            index,
            title: title.into(),
            focused: false,
            on_focus: None,
        }
    }

    /// Attach a parent callback run after the row takes focus
    pub fn with_on_focus(mut self, handler: FocusHandler) -> Self {
        self.on_focus = Some(handler);
        self
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn handle_focus(&mut self) {
        info!("handleFocus {}", self.index);
        self.focused = true;

        if let Some(handler) = &self.on_focus {
            handler(self.index);
        }
    }

    pub fn handle_blur(&mut self) {
        self.focused = false;
    }

    /// Activation has no visual feedback; only focus changes the border
    pub fn handle_press(&self) {
        debug!("Row {} pressed", self.index);
    }

    /// Lines for this row at the given width (gap lines included)
    pub fn text(&self, width: u16, styles: &ScreenStyles) -> Text<'static> {
        row_text(&self.title, self.focused, width, styles)
    }
}

impl fmt::Debug for RowItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowItem")
            .field("index", &self.index)
            .field("title", &self.title)
            .field("focused", &self.focused)
            .field("on_focus", &self.on_focus.is_some())
            .finish()
    }
}

/// Draw a row box as plain lines so both the scroll container and the
/// virtualized list can lay it out as text.
///
/// The box is `styles.item.height` lines tall with the title centered on
/// the middle line, followed by `styles.content_gap` blank lines.
pub fn row_text(title: &str, focused: bool, width: u16, styles: &ScreenStyles) -> Text<'static> {
    let border = styles.item_border(focused);
    let inner = usize::from(width.saturating_sub(2));
    let height = styles.item.height.max(3);
    let title_line = (height - 1) / 2;

    let mut lines = Vec::with_capacity(usize::from(height + styles.content_gap));

    let horizontal = line::HORIZONTAL.repeat(inner);
    lines.push(Line::styled(
        format!("{}{}{}", line::TOP_LEFT, horizontal, line::TOP_RIGHT),
        border,
    ));

    for content_line in 1..height - 1 {
        let body = if content_line == title_line {
            Span::styled(center(title, inner), styles.item.title)
        } else {
            Span::raw(" ".repeat(inner))
        };
        lines.push(Line::from(vec![
            Span::styled(line::VERTICAL, border),
            body,
            Span::styled(line::VERTICAL, border),
        ]));
    }

    lines.push(Line::styled(
        format!("{}{}{}", line::BOTTOM_LEFT, horizontal, line::BOTTOM_RIGHT),
        border,
    ));

    for _ in 0..styles.content_gap {
        lines.push(Line::default());
    }

    Text::from(lines)
}

/// Center `s` in a field of `width` characters, truncating when it does not fit
fn center(s: &str, width: usize) -> String {
    let truncated: String = s.chars().take(width).collect();
    let len = truncated.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), truncated, " ".repeat(right))
}
