use crate::styles::ScreenStyles;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer component
pub struct Footer;

impl Footer {
    /// Render a footer with the given text
    ///
    /// `text` is a list of `Label: keys` hints separated by `" | "`. The
    /// area should be 2 lines tall: 1 for the border, 1 for the text.
    pub fn render(frame: &mut Frame, area: Rect, text: &str, styles: &ScreenStyles) {
        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles.footer_separator_style())
            .border_type(BorderType::Rounded);

        let footer_inner = footer_block.inner(area);
        let footer = Paragraph::new(Self::hint_line(text, styles)).alignment(Alignment::Center);

        frame.render_widget(footer_block, area);
        frame.render_widget(footer, footer_inner);
    }

    /// Color key hints: labels in the text color, keys in the accent color
    pub fn hint_line(text: &str, styles: &ScreenStyles) -> Line<'static> {
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", styles.footer_separator_style()));
            }

            if let Some((label, keys)) = part.split_once(": ") {
                spans.push(Span::styled(
                    format!("{}: ", label),
                    styles.footer_label_style(),
                ));
                spans.push(Span::styled(keys.to_string(), styles.footer_key_style()));
            } else {
                spans.push(Span::styled(part.to_string(), styles.column_header_text));
            }
        }

        Line::from(spans)
    }
}
