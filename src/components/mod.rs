// Component-based building blocks for the focus lists screen

pub mod column_header;
pub mod eager_column;
pub mod footer;
pub mod row_item;
pub mod scroll_controller;
pub mod virtual_list;

pub use column_header::ColumnHeader;
pub use eager_column::EagerColumn;
pub use footer::Footer;
pub use row_item::{FocusHandler, RowItem};
pub use scroll_controller::{ScrollController, ScrollOptions, ScrollRequest, ScrollToIndex};
pub use virtual_list::{ScrollMode, VirtualList};
