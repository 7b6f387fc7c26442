//! Virtualized list column backed by ratatui's `List`.
//!
//! `List` only draws the rows inside its viewport. On top of that this
//! column keeps [`RowItem`]s mounted for the visible window plus one screen
//! of overscan on each side, recycling the rest after every render. The
//! focused row is never recycled.

use crate::components::row_item::{row_text, FocusHandler, RowItem};
use crate::components::scroll_controller::ScrollController;
use crate::items::Item;
use crate::styles::ScreenStyles;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState};
use std::collections::BTreeMap;
use std::ops::Range;
use std::rc::Rc;

/// Who moves the viewport
#[derive(Debug)]
pub enum ScrollMode {
    /// The list keeps the selected row in view on its own
    Builtin,
    /// Built-in scrolling is off; the controller decides the offset
    Manual(Rc<ScrollController>),
}

pub struct VirtualList {
    items: Rc<[Item]>,
    mounted: BTreeMap<usize, RowItem>,
    state: ListState,
    mode: ScrollMode,
    on_focus: Option<FocusHandler>,
}

impl VirtualList {
    /// A list with standard scrolling
    pub fn builtin(items: Rc<[Item]>) -> Self {
        Self {
            items,
            mounted: BTreeMap::new(),
            state: ListState::default(),
            mode: ScrollMode::Builtin,
            on_focus: None,
        }
    }

    /// A list with scrolling disabled, driven by `controller`
    ///
    /// `on_focus` is handed to every row this list mounts.
    pub fn manual(
        items: Rc<[Item]>,
        controller: Rc<ScrollController>,
        on_focus: FocusHandler,
    ) -> Self {
        Self {
            items,
            mounted: BTreeMap::new(),
            state: ListState::default(),
            mode: ScrollMode::Manual(controller),
            on_focus: Some(on_focus),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn scroll_enabled(&self) -> bool {
        matches!(self.mode, ScrollMode::Builtin)
    }

    /// First row drawn on the last render
    pub fn offset(&self) -> usize {
        self.state.offset()
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.mounted.get(&index).is_some_and(RowItem::is_focused)
    }

    pub fn is_mounted(&self, index: usize) -> bool {
        self.mounted.contains_key(&index)
    }

    pub fn mounted_count(&self) -> usize {
        self.mounted.len()
    }

    pub fn focus(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.mount(index).handle_focus();
        if self.scroll_enabled() {
            self.state.select(Some(index));
        }
    }

    pub fn blur(&mut self, index: usize) {
        if let Some(row) = self.mounted.get_mut(&index) {
            row.handle_blur();
        }
    }

    pub fn press(&self, index: usize) {
        if let Some(row) = self.mounted.get(&index) {
            row.handle_press();
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, styles: &ScreenStyles) {
        let visible = usize::from((area.height / styles.row_stride()).max(1));

        if let ScrollMode::Manual(controller) = &self.mode {
            controller.set_visible_rows(visible);
            *self.state.offset_mut() = controller.offset();
        }

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let focused = self.is_focused(index);
                ListItem::new(row_text(&item.title, focused, area.width, styles))
            })
            .collect();

        frame.render_stateful_widget(List::new(rows), area, &mut self.state);

        let window = self.window(visible);
        self.recycle(window);
    }

    /// Rows that should stay mounted around the current offset
    fn window(&self, visible: usize) -> Range<usize> {
        let offset = self.state.offset();
        let start = offset.saturating_sub(visible);
        let end = (offset + visible * 2).min(self.items.len());
        start..end
    }

    fn recycle(&mut self, window: Range<usize>) {
        self.mounted
            .retain(|index, row| window.contains(index) || row.is_focused());
        for index in window {
            self.mount(index);
        }
    }

    fn mount(&mut self, index: usize) -> &mut RowItem {
        let items = &self.items;
        let on_focus = &self.on_focus;
        self.mounted.entry(index).or_insert_with(|| {
            let row = RowItem::new(index, items[index].title.clone());
            match on_focus {
                Some(handler) => row.with_on_focus(Rc::clone(handler)),
                None => row,
            }
        })
    }
}
