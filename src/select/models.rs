use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Live collection shared between the host that owns the items and the
/// selection store that borrows them. Items are identified by position.
///
/// The host may push or remove items between handled events. Nothing in
/// this crate caches the length.
pub type Collection<T> = Rc<RefCell<Vec<T>>>;

pub fn shared<T>(items: Vec<T>) -> Collection<T> {
    Rc::new(RefCell::new(items))
}

pub trait Tickable {
    fn is_ticked(&self) -> bool;
    fn set_ticked(&mut self, ticked: bool);

    fn toggle(&mut self) {
        let ticked = self.is_ticked();
        self.set_ticked(!ticked);
    }
}

/// Default display field used when no custom template is configured.
pub trait Labeled {
    fn label(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub ticked: bool,
}

impl Item {
    pub fn new(name: impl Into<String>, ticked: bool) -> Self {
        Self {
            name: name.into(),
            ticked,
        }
    }
}

impl Tickable for Item {
    fn is_ticked(&self) -> bool {
        self.ticked
    }

    fn set_ticked(&mut self, ticked: bool) {
        self.ticked = ticked;
    }
}

impl Labeled for Item {
    fn label(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_ticked() {
        let mut item = Item::new("item 1", false);
        item.toggle();
        assert!(item.is_ticked());
        item.toggle();
        assert!(!item.is_ticked());
    }

    #[test]
    fn test_shared_collection_sees_external_pushes() {
        let collection = shared(vec![Item::new("item 1", false)]);
        let handle = Rc::clone(&collection);

        handle.borrow_mut().push(Item::new("item 2", true));

        assert_eq!(collection.borrow().len(), 2);
        assert_eq!(collection.borrow()[1].label(), "item 2");
    }

    #[test]
    fn test_item_deserializes_without_ticked() {
        let item: Item = toml::from_str("name = \"item 1\"").unwrap();
        assert_eq!(item, Item::new("item 1", false));
    }
}
