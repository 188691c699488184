//! # Modals
//!
//! The validation alert raised when "Calculate Tip" is pressed without a usable time
//! at table or party size. While it is open the form underneath is disabled; OK,
//! Enter or Escape dismisses it.

use eframe::egui;

use super::theme::colors;
use crate::ui::app_state::TipCalculatorApp;

impl TipCalculatorApp {
    pub fn render_validation_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.ui_state.validation_alert.clone() else {
            return;
        };

        let mut dismissed =
            ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape));

        egui::Window::new("Invalid input")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_min_width(320.0);
                ui.add_space(8.0);
                ui.label(egui::RichText::new(format!("⚠ {}", message)).color(colors::TEXT_ERROR));
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.ui_state.dismiss_validation_alert();
        }
    }
}
