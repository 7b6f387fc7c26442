//! The fixed item sequence every column renders.

use std::rc::Rc;

/// Number of items shown in each column
pub const ITEM_COUNT: usize = 100;

/// A single list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub title: String,
}

impl Item {
    /// Stable key used to identify the item across renders
    pub fn key(&self) -> &str {
        &self.title
    }
}

/// Build `count` items titled "Item 0" .. "Item {count - 1}"
pub fn build_items(count: usize) -> Rc<[Item]> {
    (0..count)
        .map(|index| Item {
            title: format!("Item {}", index),
        })
        .collect()
}

/// The demo's item sequence
pub fn demo_items() -> Rc<[Item]> {
    build_items(ITEM_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_items_shape() {
        let items = demo_items();
        assert_eq!(items.len(), 100);
        assert_eq!(items[0].title, "Item 0");
        assert_eq!(items[99].title, "Item 99");
    }

    #[test]
    fn test_titles_are_unique_and_stable() {
        let first = demo_items();
        let second = demo_items();
        assert_eq!(&*first, &*second);

        let keys: HashSet<&str> = first.iter().map(Item::key).collect();
        assert_eq!(keys.len(), ITEM_COUNT);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(build_items(0).is_empty());
    }
}
