use crate::browser::{DetailView, PersonalPage, TraitBrowser, VariationGrid};
use crate::ui::state::{AppState, Tab, UiEvents};
use crate::ui::widgets::{DetailPanel, VariationGridTable, VariationList};

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        browser: &TraitBrowser,
        grid: &VariationGrid,
        detail: &DetailView,
        personal: &PersonalPage,
        events: &mut UiEvents,
    ) {
        match state.active_tab {
            Tab::Health => VariationList::show(ui, browser, &mut events.browser),
            Tab::Variations => VariationGridTable::show(ui, grid, &mut events.grid),
            Tab::Detail => DetailPanel::show(ui, detail, personal, &mut events.detail),
            Tab::Personal => Self::show_personal(ui, personal, events),
        }
    }

    fn show_personal(ui: &mut egui::Ui, personal: &PersonalPage, events: &mut UiEvents) {
        if !personal.title().is_empty() {
            ui.heading(personal.title());
        }
        if let Some(user) = personal.user() {
            ui.horizontal(|ui| {
                ui.label(format!("Signed in as {}", user));
                if ui.button("Refresh").clicked() {
                    events.refresh_personal = true;
                }
            });
        }
        ui.separator();

        if personal.is_loading() {
            ui.spinner();
        } else {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.label(personal.details());
            });
        }
    }
}
