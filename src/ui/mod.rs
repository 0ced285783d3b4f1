mod app;
mod panels;
mod state;
mod widgets;
mod services;

pub use app::RvarApp;
pub use services::{BackendService, Completed, FetchRunner};
pub use state::{AppState, Tab, UiEvents};
