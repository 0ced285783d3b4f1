use crate::browser::{DetailEvent, DetailStatus, DetailView, GenotypeStatus, PersonalPage};

pub struct DetailPanel;

impl DetailPanel {
    pub fn show(
        ui: &mut egui::Ui,
        detail: &DetailView,
        personal: &PersonalPage,
        events: &mut Vec<DetailEvent>,
    ) {
        let Some(target) = detail.target() else {
            ui.centered_and_justified(|ui| {
                ui.label("Select a variation from the health list to view details");
            });
            return;
        };

        ui.heading(&target.display);
        ui.horizontal(|ui| {
            ui.label("Source:");
            ui.hyperlink_to(&target.url, &target.url);
        });
        ui.separator();

        let members = detail.members();
        let mut hovered = None;
        egui::Grid::new("detail_members")
            .striped(true)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.strong("Variation");
                ui.strong("Links");
                if personal.user().is_some() {
                    ui.strong("Your genotype");
                }
                ui.end_row();

                for (idx, vrn) in members.items().iter().enumerate() {
                    let response = ui.selectable_label(
                        members.is_selected(idx) || members.is_hovered(idx),
                        vrn,
                    );
                    if response.hovered() {
                        hovered = Some(idx);
                    }
                    if response.clicked() {
                        events.push(DetailEvent::ToggleMember(idx));
                    }

                    ui.horizontal(|ui| {
                        for (label, url) in detail.links_for(vrn) {
                            ui.hyperlink_to(label, url);
                        }
                    });

                    if personal.user().is_some() {
                        match personal.genotype(vrn) {
                            Some(GenotypeStatus::Loading) => {
                                ui.spinner();
                            }
                            Some(GenotypeStatus::Loaded(genotype)) => {
                                ui.monospace(genotype);
                            }
                            Some(GenotypeStatus::Failed(reason)) => {
                                ui.colored_label(ui.visuals().warn_fg_color, "unavailable")
                                    .on_hover_text(reason);
                            }
                            None => {
                                ui.label("-");
                            }
                        }
                    }
                    ui.end_row();
                }
            });

        if hovered != members.hovered() {
            events.push(DetailEvent::HoverMember(hovered));
        }

        ui.separator();
        match detail.status() {
            DetailStatus::Idle => {}
            DetailStatus::Loading => {
                ui.spinner();
            }
            DetailStatus::Loaded(body) => {
                egui::ScrollArea::vertical()
                    .id_salt("variation_detail_body")
                    .show(ui, |ui| {
                        ui.label(body.as_str());
                    });
            }
            DetailStatus::Failed(reason) => {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    format!("Unable to load variation detail: {}", reason),
                );
            }
        }
    }
}
