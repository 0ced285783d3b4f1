use crate::browser::{BrowserEvent, PagingControls};
use crate::types::PageDirection;

pub struct PagingBar;

impl PagingBar {
    pub fn show(ui: &mut egui::Ui, controls: PagingControls, events: &mut Vec<BrowserEvent>) {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(controls.back_enabled, egui::Button::new("◀ Previous"))
                .clicked()
            {
                events.push(BrowserEvent::Page(PageDirection::Back));
            }
            if ui
                .add_enabled(controls.forward_enabled, egui::Button::new("Next ▶"))
                .clicked()
            {
                events.push(BrowserEvent::Page(PageDirection::Forward));
            }
            if ui.button("⟳").on_hover_text("Reload this page").clicked() {
                events.push(BrowserEvent::Page(PageDirection::Reload));
            }
        });
    }
}
