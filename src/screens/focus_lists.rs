//! The three-column focus lists screen.
//!
//! Column A mounts every row in a plain scroll container, column B is a
//! virtualized list that scrolls itself, and column C is the same list with
//! scrolling disabled, moved only by `scroll_to_index` requests issued from
//! its rows' focus handlers.

use crate::components::{
    ColumnHeader, EagerColumn, FocusHandler, Footer, ScrollController, ScrollOptions,
    ScrollToIndex, VirtualList,
};
use crate::items::Item;
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Padding};
use std::rc::Rc;
use tracing::debug;

/// One of the three demo columns, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    /// Non-virtualized scroll container
    Eager,
    /// Virtualized list with built-in scrolling
    Virtualized,
    /// Virtualized list scrolled by explicit requests
    ManualScroll,
}

impl ColumnId {
    pub const ALL: [ColumnId; 3] = [
        ColumnId::Eager,
        ColumnId::Virtualized,
        ColumnId::ManualScroll,
    ];

    /// Position from the left, starting at 0
    pub fn position(self) -> usize {
        match self {
            ColumnId::Eager => 0,
            ColumnId::Virtualized => 1,
            ColumnId::ManualScroll => 2,
        }
    }

    pub fn left(self) -> Option<Self> {
        self.position().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn right(self) -> Option<Self> {
        Self::ALL.get(self.position() + 1).copied()
    }

    /// Next column, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous column, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Header text describing the column's behaviour
    pub fn header(self) -> &'static str {
        match self {
            ColumnId::Eager => {
                "ScrollView. This one acts as expected, but renders all items all at once"
            }
            ColumnId::Virtualized => {
                "FlatList. At the edge of the Flatlist it will scroll the Flatlist, but not select the next item."
            }
            ColumnId::ManualScroll => {
                "FlatList, manual scroll. Works as expected but if you press up/down too fast it will focus outside of the flatlist eventually."
            }
        }
    }
}

/// The row that currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTarget {
    pub column: ColumnId,
    pub row: usize,
}

/// Screen root: three columns, a focus engine, and the column C scroll controller
pub struct FocusListsScreen {
    items: Rc<[Item]>,
    eager: EagerColumn,
    virtualized: VirtualList,
    manual: VirtualList,
    scroller: Rc<ScrollController>,
    focus: Option<FocusTarget>,
    /// Row last focused in each column, restored when focus returns
    last_rows: [usize; 3],
}

impl FocusListsScreen {
    /// Build the screen over `items` and focus the first row of column A
    pub fn new(items: Rc<[Item]>) -> Self {
        let scroller = Rc::new(ScrollController::new(items.len()));

        let handle = Rc::clone(&scroller);
        let manual_scroll: FocusHandler =
            Rc::new(move |index| handle.scroll_to_index(index, ScrollOptions::CENTERED));

        let mut screen = Self {
            eager: EagerColumn::new(&items),
            virtualized: VirtualList::builtin(Rc::clone(&items)),
            manual: VirtualList::manual(Rc::clone(&items), Rc::clone(&scroller), manual_scroll),
            items,
            scroller,
            focus: None,
            last_rows: [0; 3],
        };

        screen.focus_row(ColumnId::Eager, 0);
        screen
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus
    }

    /// The scroll controller behind column C
    pub fn scroller(&self) -> &ScrollController {
        &self.scroller
    }

    pub fn is_row_focused(&self, column: ColumnId, row: usize) -> bool {
        match column {
            ColumnId::Eager => self.eager.is_focused(row),
            ColumnId::Virtualized => self.virtualized.is_focused(row),
            ColumnId::ManualScroll => self.manual.is_focused(row),
        }
    }

    /// Count of rows showing focus across all columns
    pub fn focused_row_count(&self) -> usize {
        ColumnId::ALL
            .iter()
            .map(|&column| {
                (0..self.items.len())
                    .filter(|&row| self.is_row_focused(column, row))
                    .count()
            })
            .sum()
    }

    /// First visible row (or line, for column A) of a column
    pub fn scroll_position(&self, column: ColumnId) -> usize {
        match column {
            ColumnId::Eager => usize::from(self.eager.scroll()),
            ColumnId::Virtualized => self.virtualized.offset(),
            ColumnId::ManualScroll => self.manual.offset(),
        }
    }

    /// Move focus to `row` of `column`, blurring the previous row first
    ///
    /// Rows past the end are clamped to the last row.
    pub fn focus_row(&mut self, column: ColumnId, row: usize) {
        if self.items.is_empty() {
            return;
        }
        let target = FocusTarget {
            column,
            row: row.min(self.items.len() - 1),
        };
        if self.focus == Some(target) {
            return;
        }

        if let Some(current) = self.focus {
            self.blur_at(current);
        }
        self.focus = Some(target);
        self.last_rows[column.position()] = target.row;
        self.focus_at(target);
    }

    /// Blur the focused row without focusing another
    pub fn clear_focus(&mut self) {
        if let Some(current) = self.focus.take() {
            self.blur_at(current);
        }
    }

    pub fn handle_action(&mut self, action: Action) -> ScreenAction {
        debug!("Focus lists action: {:?}", action);
        match action {
            Action::MoveUp => self.move_vertical(false),
            Action::MoveDown => self.move_vertical(true),
            Action::MoveLeft => self.move_to_column(ColumnId::left),
            Action::MoveRight => self.move_to_column(ColumnId::right),
            Action::NextColumn => self.move_to_column(|c| Some(c.next())),
            Action::PrevColumn => self.move_to_column(|c| Some(c.prev())),
            Action::Press => self.press_focused(),
            Action::ToggleTheme => return ScreenAction::ToggleTheme,
            Action::Quit => return ScreenAction::Quit,
        }
        ScreenAction::None
    }

    fn move_vertical(&mut self, down: bool) {
        let Some(current) = self.focus else {
            self.focus_row(ColumnId::Eager, 0);
            return;
        };
        let row = if down {
            current.row + 1
        } else {
            current.row.saturating_sub(1)
        };
        self.focus_row(current.column, row);
    }

    fn move_to_column(&mut self, step: impl Fn(ColumnId) -> Option<ColumnId>) {
        let current = self.focus.map_or(ColumnId::Eager, |f| f.column);
        if let Some(column) = step(current) {
            self.focus_row(column, self.last_rows[column.position()]);
        }
    }

    fn press_focused(&self) {
        let Some(target) = self.focus else {
            return;
        };
        match target.column {
            ColumnId::Eager => self.eager.press(target.row),
            ColumnId::Virtualized => self.virtualized.press(target.row),
            ColumnId::ManualScroll => self.manual.press(target.row),
        }
    }

    fn focus_at(&mut self, target: FocusTarget) {
        match target.column {
            ColumnId::Eager => self.eager.focus(target.row),
            ColumnId::Virtualized => self.virtualized.focus(target.row),
            ColumnId::ManualScroll => self.manual.focus(target.row),
        }
    }

    fn blur_at(&mut self, target: FocusTarget) {
        match target.column {
            ColumnId::Eager => self.eager.blur(target.row),
            ColumnId::Virtualized => self.virtualized.blur(target.row),
            ColumnId::ManualScroll => self.manual.blur(target.row),
        }
    }

    fn footer_text(&self, ctx: &RenderContext) -> String {
        format!(
            "{} | Scroll requests: {}",
            ctx.keymap.footer_hints(),
            self.scroller.request_count()
        )
    }
}

impl Screen for FocusListsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let styles = ctx.styles;

        let container = Block::default()
            .style(styles.container.background)
            .padding(Padding::uniform(styles.container.padding));
        let inner = container.inner(area);
        frame.render_widget(container, area);

        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(inner);
        let columns: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(styles.container.gap)
            .areas(body);

        for (column, column_area) in ColumnId::ALL.into_iter().zip(columns) {
            let [header, list] = Layout::vertical([
                Constraint::Length(styles.column.header_height),
                Constraint::Min(0),
            ])
            .areas(column_area);

            ColumnHeader::render(frame, header, column.header(), styles);
            match column {
                ColumnId::Eager => self.eager.render(frame, list, styles),
                ColumnId::Virtualized => self.virtualized.render(frame, list, styles),
                ColumnId::ManualScroll => self.manual.render(frame, list, styles),
            }
        }

        Footer::render(frame, footer, &self.footer_text(ctx), styles);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        Ok(ctx
            .keymap
            .get_action(key.code, key.modifiers)
            .map_or(ScreenAction::None, |action| self.handle_action(action)))
    }

    fn on_tick(&mut self) -> bool {
        self.scroller.tick()
    }
}
