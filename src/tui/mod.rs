pub mod app;
pub mod handlers;
pub mod template;
pub mod ui;
