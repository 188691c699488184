//! # Results Panel
//!
//! The "Suggested Tip Breakdown" card. Visible once a calculation has been committed
//! and until the form is reset; it recomputes from the live inputs every frame.

use eframe::egui;
use shared::Money;

use super::theme::CURRENT_THEME;
use crate::ui::app_state::TipCalculatorApp;

impl TipCalculatorApp {
    pub fn render_results_panel(&self, ui: &mut egui::Ui) {
        if !self.session.is_showing_results() {
            return;
        }

        let breakdown = self.session.breakdown();
        let results = &CURRENT_THEME.results;

        egui::Frame::none()
            .fill(results.background)
            .stroke(egui::Stroke::new(1.0, results.border))
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(24.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.label(
                    egui::RichText::new("Suggested Tip Breakdown")
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(results.text),
                );
                ui.add_space(8.0);

                self.render_breakdown_line(ui, "Base Tip:", breakdown.base_tip);
                self.render_breakdown_line(
                    ui,
                    "Service Bonus (sum of ratings ≥ 0):",
                    breakdown.service_bonus,
                );
                self.render_breakdown_line(ui, "Bonus Add-ons:", breakdown.bonus_add_ons);

                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!(
                        "Suggested Total Tip: {}",
                        breakdown.suggested_tip.format_with_symbol(self.currency_symbol())
                    ))
                    .size(22.0)
                    .strong()
                    .color(results.text),
                );
            });
    }

    fn render_breakdown_line(&self, ui: &mut egui::Ui, label: &str, amount: Money) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(label).strong().color(CURRENT_THEME.results.text));
            ui.label(
                egui::RichText::new(amount.format_with_symbol(self.currency_symbol()))
                    .color(CURRENT_THEME.results.text),
            );
        });
    }
}
