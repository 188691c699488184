//! # Party Inputs
//!
//! Time at table, number of people and the hourly rate slider.
//!
//! Every edit goes straight to the session setter; the text buffers are then synced
//! back to the value the session stored so clamping is visible in the field.

use eframe::egui;

use crate::ui::app_state::TipCalculatorApp;

impl TipCalculatorApp {
    pub fn render_party_inputs(&mut self, ui: &mut egui::Ui) {
        ui.label("Time at table (minutes):");
        let time_response = ui.add(
            egui::TextEdit::singleline(&mut self.form.time_input)
                .hint_text("0")
                .desired_width(f32::INFINITY),
        );
        if time_response.changed() {
            let stored = self.session.set_time_at_table(&self.form.time_input);
            self.form.sync_time_input(stored);
        }

        ui.add_space(4.0);

        ui.label("Number of people:");
        let people_response = ui.add(
            egui::TextEdit::singleline(&mut self.form.people_input)
                .hint_text("1")
                .desired_width(f32::INFINITY),
        );
        if people_response.changed() {
            let stored = self.session.set_num_people(&self.form.people_input);
            self.form.sync_people_input(stored);
        }

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label(format!("Hourly rate ({}):", self.config.currency_symbol));

            let mut rate = self.session.inputs().hourly_rate;
            ui.spacing_mut().slider_width = (ui.available_width() - 70.0).max(80.0);
            let slider = egui::Slider::new(&mut rate, 0.0..=self.config.max_hourly_rate)
                .step_by(self.config.hourly_rate_step)
                .show_value(false);
            if ui.add(slider).on_hover_text("Hourly rate slider").changed() {
                self.session.set_hourly_rate(rate);
            }

            ui.label(
                egui::RichText::new(format!("{}{:.2}", self.config.currency_symbol, rate)).strong(),
            );
        });
    }
}
