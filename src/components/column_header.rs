use crate::styles::ScreenStyles;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

/// Describes the strategy a column demonstrates
pub struct ColumnHeader;

impl ColumnHeader {
    /// Render `text` wrapped into `area`
    pub fn render(frame: &mut Frame, area: Rect, text: &str, styles: &ScreenStyles) {
        let header = Paragraph::new(text)
            .style(styles.column_header_text)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });

        frame.render_widget(header, area);
    }
}
