pub mod app;
pub mod ui;
pub mod helpers;
pub mod options_window;

pub use app::RosterApp;
