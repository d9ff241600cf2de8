pub mod config;
pub mod logging;
pub mod select;
pub mod tui;
