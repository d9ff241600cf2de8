use super::models::{Collection, Tickable};
use std::rc::Rc;
use tracing::trace;

/// Ticked state of a borrowed collection plus its derived "ticked all" flag.
///
/// The flag is recomputed from the items after every single-item change.
/// `set_all` is the one place that writes it directly, since assigning the
/// same value to every item establishes it by construction.
///
/// The host may add or remove items behind the store's back. `ticked_all`
/// reports the flag as of the last store operation; call
/// `recompute_aggregate` after such changes before reading it.
#[derive(Debug)]
pub struct SelectionStore<T> {
    collection: Collection<T>,
    ticked_all: bool,
}

impl<T: Tickable> SelectionStore<T> {
    pub fn new(collection: Collection<T>) -> Self {
        let mut store = Self {
            collection,
            ticked_all: false,
        };
        store.recompute_aggregate();
        store
    }

    /// Flips the item at `index`. Returns `false` without touching anything
    /// when the index no longer points into the collection.
    pub fn toggle_item(&mut self, index: usize) -> bool {
        let toggled = match self.collection.borrow_mut().get_mut(index) {
            Some(item) => {
                item.toggle();
                true
            }
            None => false,
        };

        if toggled {
            self.recompute_aggregate();
        } else {
            trace!(index, "ignoring toggle for item outside the collection");
        }
        toggled
    }

    pub fn set_all(&mut self, value: bool) {
        let mut items = self.collection.borrow_mut();
        for item in items.iter_mut() {
            item.set_ticked(value);
        }
        // An empty collection is never "all ticked".
        self.ticked_all = value && !items.is_empty();
    }

    /// Negates the current aggregate. A partially ticked collection has an
    /// aggregate of `false`, so this ticks everything.
    pub fn toggle_all(&mut self) {
        // Items may have been added or removed since the last event.
        self.recompute_aggregate();
        let value = !self.ticked_all;
        self.set_all(value);
    }

    pub fn recompute_aggregate(&mut self) {
        let items = self.collection.borrow();
        self.ticked_all = !items.is_empty() && items.iter().all(Tickable::is_ticked);
    }

    pub fn ticked_all(&self) -> bool {
        self.ticked_all
    }

    pub fn is_ticked(&self, index: usize) -> Option<bool> {
        self.collection.borrow().get(index).map(Tickable::is_ticked)
    }

    pub fn len(&self) -> usize {
        self.collection.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.borrow().is_empty()
    }

    pub fn ticked_count(&self) -> usize {
        self.collection
            .borrow()
            .iter()
            .filter(|item| item.is_ticked())
            .count()
    }

    pub fn collection(&self) -> Collection<T> {
        Rc::clone(&self.collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::models::{shared, Item};

    fn create_test_store(ticks: &[bool]) -> SelectionStore<Item> {
        let items = ticks
            .iter()
            .enumerate()
            .map(|(i, ticked)| Item::new(format!("item {}", i + 1), *ticked))
            .collect();
        SelectionStore::new(shared(items))
    }

    fn ticks(store: &SelectionStore<Item>) -> Vec<bool> {
        store.collection().borrow().iter().map(|item| item.ticked).collect()
    }

    #[test]
    fn test_toggle_item_only_flips_that_item() {
        let mut store = create_test_store(&[false, true, false]);

        assert!(store.toggle_item(0));
        assert_eq!(ticks(&store), vec![true, true, false]);

        assert!(store.toggle_item(1));
        assert_eq!(ticks(&store), vec![true, false, false]);
    }

    #[test]
    fn test_toggle_item_out_of_range_is_noop() {
        let mut store = create_test_store(&[true, true]);

        assert!(!store.toggle_item(2));
        assert!(!store.toggle_item(usize::MAX));

        assert_eq!(ticks(&store), vec![true, true]);
        assert!(store.ticked_all());
    }

    #[test]
    fn test_toggling_every_item_ticks_aggregate() {
        let mut store = create_test_store(&[false, false]);

        store.toggle_item(0);
        assert_eq!(ticks(&store), vec![true, false]);
        assert!(!store.ticked_all());

        store.toggle_item(1);
        assert_eq!(ticks(&store), vec![true, true]);
        assert!(store.ticked_all());

        store.toggle_item(0);
        assert!(!store.ticked_all());
    }

    #[test]
    fn test_new_derives_aggregate_from_items() {
        assert!(create_test_store(&[true, true]).ticked_all());
        assert!(!create_test_store(&[true, false]).ticked_all());
        assert!(!create_test_store(&[]).ticked_all());
    }

    #[test]
    fn test_recompute_aggregate_matches_items_and_is_idempotent() {
        for case in [vec![], vec![false], vec![true], vec![true, false], vec![true, true, true]] {
            let mut store = create_test_store(&case);
            let expected = !case.is_empty() && case.iter().all(|t| *t);

            store.recompute_aggregate();
            assert_eq!(store.ticked_all(), expected, "case {:?}", case);
            store.recompute_aggregate();
            assert_eq!(store.ticked_all(), expected, "case {:?}", case);
        }
    }

    #[test]
    fn test_set_all_assigns_every_item_and_aggregate() {
        let mut store = create_test_store(&[false, true, false]);

        store.set_all(true);
        assert_eq!(ticks(&store), vec![true, true, true]);
        assert!(store.ticked_all());

        store.set_all(false);
        assert_eq!(ticks(&store), vec![false, false, false]);
        assert!(!store.ticked_all());
    }

    #[test]
    fn test_toggle_all_round_trips_uniform_collection() {
        let mut store = create_test_store(&[false, false]);

        store.toggle_all();
        assert_eq!(ticks(&store), vec![true, true]);
        assert!(store.ticked_all());

        store.toggle_all();
        assert_eq!(ticks(&store), vec![false, false]);
        assert!(!store.ticked_all());
    }

    #[test]
    fn test_toggle_all_on_partial_selection_ticks_everything() {
        let mut store = create_test_store(&[true, false, true]);

        store.toggle_all();
        assert_eq!(ticks(&store), vec![true, true, true]);

        // Second toggle goes to fully unticked, not back to the mixed state.
        store.toggle_all();
        assert_eq!(ticks(&store), vec![false, false, false]);
    }

    #[test]
    fn test_toggle_all_on_empty_collection_keeps_aggregate_false() {
        let mut store = create_test_store(&[]);

        store.toggle_all();
        assert!(!store.ticked_all());
        assert!(store.is_empty());

        store.toggle_all();
        assert!(!store.ticked_all());
    }

    #[test]
    fn test_external_mutation_is_seen_on_next_recompute() {
        let mut store = create_test_store(&[true]);
        assert!(store.ticked_all());

        let collection = store.collection();
        collection.borrow_mut().push(Item::new("late", false));
        assert_eq!(store.len(), 2);

        store.recompute_aggregate();
        assert!(!store.ticked_all());

        collection.borrow_mut().pop();
        store.toggle_item(5);
        store.recompute_aggregate();
        assert!(store.ticked_all());
    }

    #[test]
    fn test_toggle_all_after_external_push_ticks_new_item() {
        let mut store = create_test_store(&[true, true]);
        assert!(store.ticked_all());

        store.collection().borrow_mut().push(Item::new("late", false));
        store.toggle_all();

        assert_eq!(ticks(&store), vec![true, true, true]);
        assert!(store.ticked_all());
    }

    #[test]
    fn test_toggle_all_after_external_removal_of_unticked_item() {
        let mut store = create_test_store(&[true, false]);
        assert!(!store.ticked_all());

        store.collection().borrow_mut().pop();
        store.toggle_all();

        assert_eq!(ticks(&store), vec![false]);
        assert!(!store.ticked_all());
    }

    #[test]
    fn test_read_accessors() {
        let store = create_test_store(&[true, false, true]);

        assert_eq!(store.len(), 3);
        assert_eq!(store.ticked_count(), 2);
        assert_eq!(store.is_ticked(1), Some(false));
        assert_eq!(store.is_ticked(3), None);
    }
}
