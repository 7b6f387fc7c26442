use crate::components::row_item::RowItem;
use crate::items::Item;
use crate::styles::ScreenStyles;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Non-virtualized scroll container
///
/// Every row is mounted up front and drawn into a single `Paragraph` that
/// is scrolled by line offset. Focusing a row scrolls just far enough to
/// reveal it.
#[derive(Debug)]
pub struct EagerColumn {
    rows: Vec<RowItem>,
    scroll: u16,
}

impl EagerColumn {
    pub fn new(items: &[Item]) -> Self {
        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| RowItem::new(index, item.title.clone()))
            .collect();
        Self { rows, scroll: 0 }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Current line offset of the viewport
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn mounted_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.rows.get(index).is_some_and(RowItem::is_focused)
    }

    pub fn focus(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            row.handle_focus();
        }
    }

    pub fn blur(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            row.handle_blur();
        }
    }

    pub fn press(&self, index: usize) {
        if let Some(row) = self.rows.get(index) {
            row.handle_press();
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, styles: &ScreenStyles) {
        self.reveal_focused(area.height, styles);

        let mut lines = Vec::with_capacity(self.rows.len() * usize::from(styles.row_stride()));
        for row in &self.rows {
            lines.extend(row.text(area.width, styles).lines);
        }

        let paragraph = Paragraph::new(Text::from(lines)).scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn reveal_focused(&mut self, viewport: u16, styles: &ScreenStyles) {
        let stride = usize::from(styles.row_stride());
        let content_height = clamp_u16(self.rows.len() * stride);
        let max_scroll = content_height.saturating_sub(viewport);

        if let Some(index) = self.rows.iter().position(RowItem::is_focused) {
            let top = clamp_u16(index * stride);
            let bottom = top.saturating_add(styles.item.height.max(3));
            if top < self.scroll {
                self.scroll = top;
            } else if bottom > self.scroll.saturating_add(viewport) {
                self.scroll = bottom.saturating_sub(viewport);
            }
        }

        self.scroll = self.scroll.min(max_scroll);
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::demo_items;
    use crate::styles::ColorScheme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(column: &mut EagerColumn) -> Terminal<TestBackend> {
        let styles = ScreenStyles::for_scheme(ColorScheme::Dark);
        let mut terminal = Terminal::new(TestBackend::new(16, 12)).unwrap();
        terminal
            .draw(|frame| column.render(frame, frame.area(), &styles))
            .unwrap();
        terminal
    }

    #[test]
    fn test_all_rows_mounted() {
        let column = EagerColumn::new(&demo_items());
        assert_eq!(column.mounted_count(), 100);
    }

    #[test]
    fn test_focus_is_exclusive_per_row() {
        let mut column = EagerColumn::new(&demo_items());
        column.focus(10);
        assert!(column.is_focused(10));
        assert_eq!((0..column.len()).filter(|&i| column.is_focused(i)).count(), 1);

        column.blur(10);
        assert!(!column.is_focused(10));
        // Out of range is ignored
        column.focus(500);
        assert_eq!((0..column.len()).filter(|&i| column.is_focused(i)).count(), 0);
    }

    #[test]
    fn test_scrolls_to_reveal_focused_row() {
        let mut column = EagerColumn::new(&demo_items());
        column.focus(0);
        draw(&mut column);
        assert_eq!(column.scroll(), 0);

        column.blur(0);
        column.focus(5);
        draw(&mut column);
        // Row 5 spans lines 20..23, viewport is 12 lines tall
        assert_eq!(column.scroll(), 11);

        column.blur(5);
        column.focus(1);
        draw(&mut column);
        assert_eq!(column.scroll(), 4);
    }

    #[test]
    fn test_renders_first_rows() {
        let mut column = EagerColumn::new(&demo_items());
        let terminal = draw(&mut column);
        let buffer = terminal.backend().buffer();
        let second_line: String = (0..16u16)
            .map(|x| buffer[(x, 1u16)].symbol().to_string())
            .collect();
        assert!(second_line.contains("Item 0"));
    }
}
