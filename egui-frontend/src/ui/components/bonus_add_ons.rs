//! # Bonus Add-ons
//!
//! Checkboxes for the flat one-dollar situational bonuses.

use eframe::egui;
use shared::BonusFlag;

use super::styling::section_heading;
use crate::ui::app_state::TipCalculatorApp;

impl TipCalculatorApp {
    pub fn render_bonus_add_ons(&mut self, ui: &mut egui::Ui) {
        section_heading(
            ui,
            &format!("Bonus Add-ons ({}1 each)", self.config.currency_symbol),
        );

        for flag in BonusFlag::ALL {
            let mut checked = self.session.inputs().bonus(flag);
            if ui.checkbox(&mut checked, flag.label()).changed() {
                self.session.set_bonus(flag, checked);
            }
        }
    }
}
