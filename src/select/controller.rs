use super::models::{Collection, Tickable};
use super::store::SelectionStore;
use anyhow::Result;
use tracing::debug;

pub type ItemDelegate<T> = Box<dyn FnMut(&T) -> Result<()>>;
pub type TickAllDelegate = Box<dyn FnMut() -> Result<()>>;

/// Optional notification hooks supplied by the host.
///
/// `None` means "not provided", which is different from a closure that does
/// nothing.
pub struct Delegates<T> {
    pub on_item_click: Option<ItemDelegate<T>>,
    pub on_tick_all: Option<TickAllDelegate>,
}

impl<T> Default for Delegates<T> {
    fn default() -> Self {
        Self {
            on_item_click: None,
            on_tick_all: None,
        }
    }
}

impl<T> Delegates<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_item_click(mut self, delegate: impl FnMut(&T) -> Result<()> + 'static) -> Self {
        self.on_item_click = Some(Box::new(delegate));
        self
    }

    pub fn on_tick_all(mut self, delegate: impl FnMut() -> Result<()> + 'static) -> Self {
        self.on_tick_all = Some(Box::new(delegate));
        self
    }
}

impl<T> std::fmt::Debug for Delegates<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Delegates")
            .field("on_item_click", &self.on_item_click.is_some())
            .field("on_tick_all", &self.on_tick_all.is_some())
            .finish()
    }
}

/// Entry points for the render layer.
///
/// Each handler finishes its mutation before any delegate runs, so a
/// delegate always observes the post-click state. Delegate errors are
/// returned to the caller untouched.
///
/// The item delegate receives a copy of the clicked item taken after the
/// toggle, with no borrow of the collection held, so it may read or mutate
/// the shared collection.
#[derive(Debug)]
pub struct SelectionController<T> {
    store: SelectionStore<T>,
    delegates: Delegates<T>,
}

impl<T: Tickable + Clone> SelectionController<T> {
    pub fn new(collection: Collection<T>, delegates: Delegates<T>) -> Self {
        Self {
            store: SelectionStore::new(collection),
            delegates,
        }
    }

    /// Re-derives the aggregate after the host changed the collection.
    pub fn refresh(&mut self) {
        self.store.recompute_aggregate();
    }

    pub fn handle_item_click(&mut self, index: usize) -> Result<()> {
        if !self.store.toggle_item(index) {
            debug!(index, "item click on stale row ignored");
            return Ok(());
        }
        debug!(
            index,
            ticked = self.store.is_ticked(index),
            ticked_all = self.store.ticked_all(),
            "item clicked"
        );

        if let Some(delegate) = self.delegates.on_item_click.as_mut() {
            let clicked = self.store.collection().borrow().get(index).cloned();
            if let Some(item) = clicked {
                delegate(&item)?;
            }
        }
        Ok(())
    }

    pub fn handle_tick_all_click(&mut self) -> Result<()> {
        self.store.toggle_all();
        debug!(ticked_all = self.store.ticked_all(), "tick all clicked");

        if let Some(delegate) = self.delegates.on_tick_all.as_mut() {
            delegate()?;
        }
        Ok(())
    }

    pub fn has_on_item_click(&self) -> bool {
        self.delegates.on_item_click.is_some()
    }

    pub fn has_on_tick_all(&self) -> bool {
        self.delegates.on_tick_all.is_some()
    }

    pub fn set_on_item_click(&mut self, delegate: impl FnMut(&T) -> Result<()> + 'static) {
        self.delegates.on_item_click = Some(Box::new(delegate));
    }

    pub fn set_on_tick_all(&mut self, delegate: impl FnMut() -> Result<()> + 'static) {
        self.delegates.on_tick_all = Some(Box::new(delegate));
    }

    pub fn clear_on_item_click(&mut self) {
        self.delegates.on_item_click = None;
    }

    pub fn clear_on_tick_all(&mut self) {
        self.delegates.on_tick_all = None;
    }

    pub fn store(&self) -> &SelectionStore<T> {
        &self.store
    }

    pub fn ticked_all(&self) -> bool {
        self.store.ticked_all()
    }
}
