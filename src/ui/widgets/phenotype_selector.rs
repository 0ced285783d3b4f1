use crate::browser::{BrowserEvent, TraitBrowser};

pub struct PhenotypeSelector;

impl PhenotypeSelector {
    pub fn show(ui: &mut egui::Ui, browser: &TraitBrowser, events: &mut Vec<BrowserEvent>) {
        let phenotypes = browser.phenotypes();
        if phenotypes.is_empty() {
            ui.label("No health areas configured");
            return;
        }

        for (idx, term) in phenotypes.items().iter().enumerate() {
            if ui.selectable_label(phenotypes.is_selected(idx), term).clicked() {
                events.push(BrowserEvent::SelectPhenotype(idx));
            }
        }
    }
}
