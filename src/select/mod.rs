pub mod controller;
pub mod models;
pub mod source;
pub mod store;

pub use controller::{Delegates, SelectionController};
pub use models::{shared, Collection, Item, Labeled, Tickable};
pub use store::SelectionStore;
