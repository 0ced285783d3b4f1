use crate::browser::{BrowserEvent, DetailEvent, GridEvent};
use chrono::{DateTime, Local};

/// Central application state for the UI
pub struct AppState {
    pub active_tab: Tab,
    pub status_message: String,
    pub last_loaded: Option<DateTime<Local>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_tab: Tab::Health,
            status_message: "Ready".to_string(),
            last_loaded: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_loaded(&mut self, what: &str) {
        let now = Local::now();
        self.status_message = format!("Loaded {} at {}", what, now.format("%H:%M:%S"));
        self.last_loaded = Some(now);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Health,
    Variations,
    Detail,
    Personal,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Health, Tab::Variations, Tab::Detail, Tab::Personal];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Health => "Health",
            Tab::Variations => "Variations",
            Tab::Detail => "Variation Detail",
            Tab::Personal => "Personal",
        }
    }
}

/// Interactions collected while drawing a frame, dispatched once afterwards
#[derive(Debug, Default)]
pub struct UiEvents {
    pub browser: Vec<BrowserEvent>,
    pub grid: Vec<GridEvent>,
    pub detail: Vec<DetailEvent>,
    pub refresh_personal: bool,
}

impl UiEvents {
    pub fn is_empty(&self) -> bool {
        self.browser.is_empty()
            && self.grid.is_empty()
            && self.detail.is_empty()
            && !self.refresh_personal
    }
}
