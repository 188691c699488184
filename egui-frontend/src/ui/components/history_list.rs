//! # History List
//!
//! Every committed calculation in the order it was made, inside a height-capped
//! scroll area. Hidden until the first calculation.

use eframe::egui;
use shared::HistoryEntry;

use super::styling::section_heading;
use super::theme::colors;
use crate::ui::app_state::TipCalculatorApp;

impl TipCalculatorApp {
    pub fn render_history(&mut self, ui: &mut egui::Ui) {
        if self.session.history().is_empty() {
            return;
        }

        ui.add_space(24.0);
        let mut copy_requested = false;
        ui.horizontal(|ui| {
            section_heading(ui, "History");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .small_button("📋 Copy history")
                    .on_hover_text("Copy all entries as JSON")
                    .clicked()
                {
                    copy_requested = true;
                }
            });
        });

        if copy_requested {
            if let Some(json) = self.history_export() {
                ui.output_mut(|output| output.copied_text = json);
            }
        }

        egui::ScrollArea::vertical()
            .max_height(self.config.history_max_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for entry in self.session.history() {
                    render_history_entry(ui, entry, &self.config.currency_symbol);
                    ui.add_space(12.0);
                }
            });
    }
}

fn render_history_entry(ui: &mut egui::Ui, entry: &HistoryEntry, currency_symbol: &str) {
    ui.label(egui::RichText::new(&entry.date).small().color(colors::TEXT_TIMESTAMP));
    ui.label(format!("Base Tip: {}{}", currency_symbol, entry.base_tip));
    ui.label(format!("Service Bonus: {}{}", currency_symbol, entry.service_bonus));
    ui.label(format!("Bonus Add-ons: {}{}", currency_symbol, entry.bonus_add_ons));
    ui.label(
        egui::RichText::new(format!(
            "Suggested Tip: {}{}",
            currency_symbol, entry.suggested_tip
        ))
        .strong(),
    );
}
