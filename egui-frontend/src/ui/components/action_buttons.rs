//! # Action Buttons
//!
//! "Calculate Tip" and "Reset", side by side, each taking half the row.

use eframe::egui;

use super::theme::colors;
use crate::ui::app_state::TipCalculatorApp;

impl TipCalculatorApp {
    pub fn render_action_buttons(&mut self, ui: &mut egui::Ui) {
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            let button_width =
                ((ui.available_width() - ui.spacing().item_spacing.x) / 2.0).max(100.0);

            let calculate_button = egui::Button::new(
                egui::RichText::new("Calculate Tip")
                    .size(16.0)
                    .color(colors::TEXT_WHITE),
            )
            .fill(colors::ACCENT)
            .rounding(egui::Rounding::same(6.0))
            .min_size(egui::vec2(button_width, 42.0));

            if ui.add(calculate_button).clicked() {
                self.handle_calculate();
            }

            let reset_button = egui::Button::new(
                egui::RichText::new("Reset")
                    .size(16.0)
                    .color(colors::SECONDARY_BUTTON_TEXT),
            )
            .fill(colors::SECONDARY_BUTTON)
            .rounding(egui::Rounding::same(6.0))
            .min_size(egui::vec2(button_width, 42.0));

            if ui.add(reset_button).clicked() {
                self.handle_reset();
            }
        });
        ui.add_space(16.0);
    }
}
