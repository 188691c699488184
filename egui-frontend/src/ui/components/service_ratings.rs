//! # Service Ratings
//!
//! One discrete slider per rating criterion, from -2 to 2. Each slider shows the
//! criterion's description above it, dollar tick labels below it, and the label for
//! the current rating underneath.

use eframe::egui;
use shared::{rating_description, rating_tick_label, RatingCriterion, RATING_MAX, RATING_MIN};

use super::styling::section_heading;
use super::theme::colors;
use crate::ui::app_state::TipCalculatorApp;

impl TipCalculatorApp {
    pub fn render_service_ratings(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Rate Service");

        for criterion in RatingCriterion::ALL {
            self.render_rating_slider(ui, criterion);
        }
    }

    fn render_rating_slider(&mut self, ui: &mut egui::Ui, criterion: RatingCriterion) {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(format!("{} -", criterion.label())).strong());
            ui.label(
                egui::RichText::new(criterion.criterion_description())
                    .italics()
                    .color(colors::TEXT_MUTED),
            );
        });

        let mut rating = self.session.inputs().rating(criterion);
        ui.scope(|ui| {
            ui.spacing_mut().slider_width = ui.available_width();
            let slider = egui::Slider::new(&mut rating, RATING_MIN..=RATING_MAX)
                .step_by(1.0)
                .show_value(false);
            if ui
                .add(slider)
                .on_hover_text(format!("{} slider", criterion.label()))
                .changed()
            {
                self.session.set_rating(criterion, rating);
            }
        });

        self.render_rating_ticks(ui);

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(rating_description(rating).unwrap_or_default())
                    .strong()
                    .color(colors::ACCENT),
            );
        });
        ui.add_space(8.0);
    }

    fn render_rating_ticks(&self, ui: &mut egui::Ui) {
        let ticks: Vec<String> = (RATING_MIN..=RATING_MAX)
            .map(|rating| rating_tick_label(rating, &self.config.currency_symbol))
            .collect();

        ui.columns(ticks.len(), |columns| {
            for (column, tick) in columns.iter_mut().zip(&ticks) {
                column.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(tick.as_str())
                            .monospace()
                            .size(12.0)
                            .color(colors::TEXT_MUTED),
                    );
                });
            }
        });
    }
}
