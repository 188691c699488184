//! # App State Module
//!
//! This module defines the application struct for the tip calculator window and the
//! actions the buttons trigger.
//!
//! ## Key Types:
//! - `TipCalculatorApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Create the app from an eframe creation context
//! - `handle_calculate()` - Commit a calculation or raise the validation alert
//! - `handle_reset()` - Clear the form, keep history
//! - `history_export()` - JSON for the "Copy history" action
//!
//! ## State Management:
//! The domain `TipSession` is the single source of truth for inputs, results
//! visibility and history. `FormState` only holds the text the user is typing and
//! `UIState` only holds feedback (alert, status line).

use log::{error, info};

use crate::config::TipCalculatorConfig;
use crate::domain::TipSession;
use crate::ui::state::{FormState, UIState};

/// Main application struct for the egui tip calculator
pub struct TipCalculatorApp {
    pub config: TipCalculatorConfig,
    pub session: TipSession,
    pub form: FormState,
    pub ui_state: UIState,
}

impl TipCalculatorApp {
    /// Create the app and apply the calculator styling to the egui context
    pub fn new(cc: &eframe::CreationContext<'_>, config: TipCalculatorConfig) -> Self {
        info!("🚀 Initializing TipCalculatorApp");
        crate::ui::setup_tip_calculator_style(&cc.egui_ctx);
        Self::with_config(config)
    }

    /// Create the app state without touching any egui context
    pub fn with_config(config: TipCalculatorConfig) -> Self {
        let session = TipSession::new(config.default_hourly_rate);
        Self {
            config,
            session,
            form: FormState::new(),
            ui_state: UIState::new(),
        }
    }

    /// "Calculate Tip" button
    pub fn handle_calculate(&mut self) {
        match self.session.calculate() {
            Ok(_) => self.ui_state.clear_status(),
            Err(e) => self.ui_state.show_validation_alert(e.to_string()),
        }
    }

    /// "Reset" button
    pub fn handle_reset(&mut self) {
        self.session.reset();
        self.form.clear();
        self.ui_state.clear_status();
    }

    /// History as JSON for the clipboard, or None if it could not be serialized
    pub fn history_export(&mut self) -> Option<String> {
        match self.session.history_json() {
            Ok(json) => {
                let count = self.session.history().len();
                info!("📋 Copied {} history entries", count);
                self.ui_state
                    .set_status(format!("Copied {} history entries to the clipboard", count));
                Some(json)
            }
            Err(e) => {
                error!("Failed to serialize history: {}", e);
                self.ui_state.set_status(format!("Could not copy history: {}", e));
                None
            }
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::NumericField;

    fn app() -> TipCalculatorApp {
        TipCalculatorApp::with_config(TipCalculatorConfig::default())
    }

    #[test]
    fn test_calculate_with_empty_form_raises_alert() {
        let mut app = app();
        app.handle_calculate();

        assert_eq!(
            app.ui_state.validation_alert.as_deref(),
            Some("Please enter valid Time at table and Number of people.")
        );
        assert!(app.ui_state.has_blocking_alert());
        assert!(!app.session.is_showing_results());
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn test_calculate_with_valid_party_shows_results() {
        let mut app = app();
        app.form.time_input = "30".to_string();
        app.form.people_input = "2".to_string();
        let time = app.session.set_time_at_table(&app.form.time_input);
        let people = app.session.set_num_people(&app.form.people_input);
        assert_eq!(time, NumericField::Value(30.0));
        assert_eq!(people, NumericField::Value(2));

        app.handle_calculate();

        assert!(!app.ui_state.has_blocking_alert());
        assert!(app.session.is_showing_results());
        assert_eq!(app.session.history().len(), 1);
        assert_eq!(app.session.history()[0].suggested_tip, "1.00");
    }

    #[test]
    fn test_reset_clears_form_and_keeps_history() {
        let mut app = app();
        app.form.time_input = "60".to_string();
        app.form.people_input = "1".to_string();
        app.session.set_time_at_table("60");
        app.session.set_num_people("1");
        app.handle_calculate();

        app.handle_reset();

        assert_eq!(app.form, FormState::default());
        assert!(!app.session.is_showing_results());
        assert_eq!(app.session.inputs().time_at_table_minutes, NumericField::Unset);
        assert_eq!(app.session.history().len(), 1);
    }

    #[test]
    fn test_reset_uses_configured_rate() {
        let config = TipCalculatorConfig {
            default_hourly_rate: 3.0,
            ..TipCalculatorConfig::default()
        };
        let mut app = TipCalculatorApp::with_config(config);
        app.session.set_hourly_rate(8.0);
        app.handle_reset();
        assert_eq!(app.session.inputs().hourly_rate, 3.0);
    }

    #[test]
    fn test_history_export_sets_status() {
        let mut app = app();
        app.session.set_time_at_table("30");
        app.session.set_num_people("4");
        app.handle_calculate();

        let json = app.history_export().unwrap();
        assert!(json.contains("\"base_tip\": \"2.00\""));
        assert_eq!(
            app.ui_state.status_message.as_deref(),
            Some("Copied 1 history entries to the clipboard")
        );
    }
}
