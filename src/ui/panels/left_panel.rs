use crate::browser::TraitBrowser;
use crate::ui::state::{AppState, Tab, UiEvents};
use crate::ui::widgets::PhenotypeSelector;

pub struct LeftPanel;

impl LeftPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut AppState,
        browser: &TraitBrowser,
        events: &mut UiEvents,
    ) {
        ui.heading("Health Areas");
        ui.separator();

        let before = events.browser.len();
        PhenotypeSelector::show(ui, browser, &mut events.browser);

        // Picking a trait brings its variation list into view
        if events.browser.len() > before {
            state.active_tab = Tab::Health;
        }
    }
}
