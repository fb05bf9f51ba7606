pub mod app;
pub mod clipboard;
pub mod contentviewer;
pub mod model;
pub mod tabbar;
pub mod ui;
#[allow(clippy::module_inception)]
pub mod viewer;
