use crate::browser::{GridEvent, ListStatus, VariationGrid};
use crate::browser::variation_grid::GRID_CAPTION;
use crate::types::{GridColumn, SortOrder};

pub struct VariationGridTable;

impl VariationGridTable {
    pub fn show(ui: &mut egui::Ui, grid: &VariationGrid, events: &mut Vec<GridEvent>) {
        ui.heading(GRID_CAPTION);

        match grid.status() {
            ListStatus::Loading => {
                ui.spinner();
            }
            ListStatus::Failed(reason) => {
                ui.colored_label(ui.visuals().error_fg_color, format!("Unable to load: {}", reason));
            }
            _ => {}
        }

        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - 40.0).max(0.0))
            .show(ui, |ui| {
                egui::Grid::new("variation_grid")
                    .striped(true)
                    .spacing([10.0, 4.0])
                    .min_col_width(GridColumn::Id.width())
                    .show(ui, |ui| {
                        // Header row with clickable columns for sorting
                        for column in GridColumn::ALL {
                            if Self::sortable_header_button(ui, column, grid).clicked() {
                                events.push(GridEvent::Sort(column));
                            }
                        }
                        ui.end_row();

                        for (idx, row) in grid.rows().iter().enumerate() {
                            let is_selected = grid.selected() == Some(idx);
                            if ui.selectable_label(is_selected, &row.id).clicked() {
                                events.push(GridEvent::SelectRow(idx));
                            }
                            ui.label(&row.genotype);
                            ui.end_row();
                        }
                    });
            });

        ui.horizontal(|ui| {
            if ui.add_enabled(grid.has_previous(), egui::Button::new("◀")).clicked() {
                events.push(GridEvent::PreviousPage);
            }
            ui.label(format!("Page {}", grid.query().page));
            if ui.add_enabled(grid.has_next(), egui::Button::new("▶")).clicked() {
                events.push(GridEvent::NextPage);
            }
            if ui.button("⟳").clicked() {
                events.push(GridEvent::Reload);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(grid.view_records());
            });
        });
    }

    fn sortable_header_button(
        ui: &mut egui::Ui,
        column: GridColumn,
        grid: &VariationGrid,
    ) -> egui::Response {
        let query = grid.query();
        let arrow = if query.sort_column == column {
            match query.sort_order {
                SortOrder::Asc => " ▲",
                SortOrder::Desc => " ▼",
            }
        } else {
            ""
        };

        ui.add_sized(
            [column.width(), 20.0],
            egui::Button::new(format!("{}{}", column.title(), arrow)),
        )
    }
}
