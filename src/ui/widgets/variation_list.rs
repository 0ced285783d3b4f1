use super::paging_controls::PagingBar;
use crate::browser::{BrowserEvent, ListStatus, TraitBrowser};

pub struct VariationList;

impl VariationList {
    pub fn show(ui: &mut egui::Ui, browser: &TraitBrowser, events: &mut Vec<BrowserEvent>) {
        if browser.state().is_none() {
            ui.centered_and_justified(|ui| {
                ui.label("Select a health area to see associated variations");
            });
            return;
        }

        ui.heading(browser.header());
        if let Some(state) = browser.state() {
            ui.weak(format!("Showing from {} ({} per page)", state.start + 1, state.limit));
        }
        ui.separator();

        let rendered = browser.rendered();
        match &rendered.status {
            ListStatus::Idle => {}
            ListStatus::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading variations...");
                });
            }
            ListStatus::Failed(reason) => {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    format!("Unable to load variations: {}", reason),
                );
            }
            ListStatus::Loaded if rendered.items.is_empty() => {
                ui.label("No variations found");
            }
            ListStatus::Loaded => {}
        }

        let mut hovered = None;
        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - 40.0).max(0.0))
            .show(ui, |ui| {
                for (idx, item) in rendered.items.iter().enumerate() {
                    let response = ui
                        .selectable_label(browser.hovered() == Some(idx), &item.display)
                        .on_hover_text(format!("{}\nOpen variation details", item.label));
                    if response.hovered() {
                        hovered = Some(idx);
                    }
                    if response.clicked() {
                        events.push(BrowserEvent::ItemClicked(idx));
                    }
                }
            });

        if hovered != browser.hovered() {
            events.push(BrowserEvent::Hover(hovered));
        }

        ui.separator();
        PagingBar::show(ui, rendered.paging, events);
    }
}
