//! # Styling Module
//!
//! Global egui style for the calculator window plus a couple of shared drawing helpers.
//!
//! ## Key Functions:
//! - `setup_tip_calculator_style()` - Text sizes, spacing, rounding and accent colors
//! - `section_heading()` - Heading text used for each form section

use eframe::egui;

use super::theme::{colors, CURRENT_THEME};

/// Configure global egui styling for the calculator
pub fn setup_tip_calculator_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.interact_size.y = 28.0;
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(4.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(4.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(4.0);

        // Slider fill and text selection pick up the accent
        style.visuals.selection.bg_fill = CURRENT_THEME.interactive.accent;
        style.visuals.slider_trailing_fill = true;

        style
    });
}

/// Bold section heading (e.g. "Rate Service")
pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(6.0);
    ui.label(
        egui::RichText::new(text)
            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
            .strong()
            .color(colors::TEXT_PRIMARY),
    );
}
