//! # App Coordinator Module
//!
//! The eframe update loop for the calculator window.
//!
//! ## Application Flow:
//! 1. Render the form in a centered, width-capped column inside a scroll area
//! 2. Disable the form while the validation alert is open
//! 3. Render the alert (if any) on top

use eframe::egui;

use crate::ui::app_state::TipCalculatorApp;
use crate::ui::colors;

/// Widest the form column gets on large windows
const CONTENT_MAX_WIDTH: f32 = 600.0;

impl eframe::App for TipCalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let alert_open = self.ui_state.has_blocking_alert();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let side_margin = ((ui.available_width() - CONTENT_MAX_WIDTH) / 2.0).max(0.0);
                    ui.horizontal_top(|ui| {
                        ui.add_space(side_margin);
                        ui.vertical(|ui| {
                            ui.set_width(ui.available_width().min(CONTENT_MAX_WIDTH));
                            ui.add_enabled_ui(!alert_open, |ui| {
                                self.render_calculator(ui);
                            });
                        });
                    });
                });
        });

        self.render_validation_alert(ctx);
    }
}

impl TipCalculatorApp {
    /// Render every section of the form
    fn render_calculator(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Tip Calculator");
        });
        ui.add_space(12.0);

        self.render_party_inputs(ui);
        ui.add_space(12.0);
        self.render_service_ratings(ui);
        self.render_bonus_add_ons(ui);
        self.render_action_buttons(ui);
        self.render_results_panel(ui);
        self.render_history(ui);

        if let Some(status) = &self.ui_state.status_message {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(status).small().color(colors::TEXT_MUTED));
        }
    }
}
