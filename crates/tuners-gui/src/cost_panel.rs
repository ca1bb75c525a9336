//! Static insurance and financing table

use eframe::egui::{self, RichText, Ui};
use tuners_domain::constants::cost_table_rows;
use tuners_types::{CostEstimate, VehicleCategory};

pub struct CostPanel {
    rows: Vec<(VehicleCategory, CostEstimate)>,
}

impl CostPanel {
    pub fn new() -> Self {
        Self {
            rows: cost_table_rows(),
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        ui.heading("Insurance & Finance Options");
        ui.add_space(10.0);

        egui::Grid::new("cost_table")
            .striped(true)
            .num_columns(3)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Vehicle").strong());
                ui.label(RichText::new("Insurance Cost").strong());
                ui.label(RichText::new("Finance Option").strong());
                ui.end_row();

                for (category, cost) in &self.rows {
                    ui.label(category.label());
                    ui.label(cost.insurance_cost);
                    ui.label(cost.finance_option);
                    ui.end_row();
                }
            });
    }
}
