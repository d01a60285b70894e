pub mod app;
pub mod logging;
pub mod ui;

pub use app::{App, AppState};
