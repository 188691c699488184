//! # Tip Session
//!
//! State owned by one calculator window for its lifetime: the raw form input,
//! whether the results panel is visible, and the history of committed calculations.
//!
//! ## State Machine:
//! - `Editing` - results hidden; the initial state and the state after `reset()`
//! - `ShowingResults` - entered by a successful `calculate()`; inputs stay editable and
//!   the breakdown keeps recomputing from them
//!
//! History is append-only. `reset()` never touches it and a rejected calculation
//! leaves the whole session untouched.

use chrono::{DateTime, Local, TimeZone};
use log::{debug, info, warn};
use shared::{BonusFlag, HistoryEntry, NumericField, RatingCriterion, TipBreakdown, TipFormInputs};
use std::fmt;

use super::tip_calculation::{TipCalculationError, TipCalculationService};

/// Whether the breakdown panel is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Editing,
    ShowingResults,
}

/// Calculator state for a single UI session
#[derive(Debug, Clone)]
pub struct TipSession {
    service: TipCalculationService,
    inputs: TipFormInputs,
    phase: SessionPhase,
    default_hourly_rate: f64,
    history: Vec<HistoryEntry>,
}

impl Default for TipSession {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TipSession {
    /// Start a session whose form (and every reset) begins at `default_hourly_rate`
    pub fn new(default_hourly_rate: f64) -> Self {
        Self {
            service: TipCalculationService::new(),
            inputs: TipFormInputs::with_hourly_rate(default_hourly_rate),
            phase: SessionPhase::Editing,
            default_hourly_rate,
            history: Vec::new(),
        }
    }

    pub fn inputs(&self) -> &TipFormInputs {
        &self.inputs
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_showing_results(&self) -> bool {
        self.phase == SessionPhase::ShowingResults
    }

    /// Committed calculations, oldest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Breakdown for the current input, recomputed on every call
    pub fn breakdown(&self) -> TipBreakdown {
        self.service.derive(&self.inputs)
    }

    /// Store raw "time at table" text and return what was stored
    pub fn set_time_at_table(&mut self, raw: &str) -> NumericField<f64> {
        self.inputs.time_at_table_minutes = NumericField::<f64>::parse_minutes(raw);
        debug!("⏱️ Time at table set to {:?}", self.inputs.time_at_table_minutes);
        self.inputs.time_at_table_minutes
    }

    /// Store raw "number of people" text and return what was stored
    pub fn set_num_people(&mut self, raw: &str) -> NumericField<u32> {
        self.inputs.num_people = NumericField::<u32>::parse_people(raw);
        debug!("👥 Number of people set to {:?}", self.inputs.num_people);
        self.inputs.num_people
    }

    /// Stored verbatim; the slider keeps the value on its 0.25 grid
    pub fn set_hourly_rate(&mut self, rate: f64) {
        self.inputs.hourly_rate = rate;
        debug!("💲 Hourly rate set to {:.2}", rate);
    }

    pub fn set_rating(&mut self, criterion: RatingCriterion, rating: i8) {
        *self.inputs.rating_mut(criterion) = rating;
        debug!("⭐ {} rating set to {}", criterion.label(), rating);
    }

    pub fn set_bonus(&mut self, flag: BonusFlag, checked: bool) {
        *self.inputs.bonus_mut(flag) = checked;
        debug!("➕ {} bonus set to {}", flag.label(), checked);
    }

    /// Restore every input to its default and hide the results. History is kept.
    pub fn reset(&mut self) {
        self.inputs = TipFormInputs::with_hourly_rate(self.default_hourly_rate);
        self.phase = SessionPhase::Editing;
        info!("🔄 Form reset ({} history entries kept)", self.history.len());
    }

    /// Commit the current breakdown to history, stamped with the local time
    pub fn calculate(&mut self) -> Result<&HistoryEntry, TipCalculationError> {
        let now = Local::now();
        self.calculate_at(&now)
    }

    /// Commit the current breakdown to history with an explicit timestamp
    pub fn calculate_at<Tz>(
        &mut self,
        timestamp: &DateTime<Tz>,
    ) -> Result<&HistoryEntry, TipCalculationError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if let Err(e) = self.service.validate(&self.inputs) {
            warn!("❌ Calculation rejected: {:?}", e);
            return Err(e);
        }

        let breakdown = self.breakdown();
        let entry = self.service.create_history_entry(&breakdown, timestamp);
        info!(
            "🧮 Suggested tip ${} (base ${}, service ${}, add-ons ${})",
            entry.suggested_tip, entry.base_tip, entry.service_bonus, entry.bonus_add_ons
        );

        self.phase = SessionPhase::ShowingResults;
        let index = self.history.len();
        self.history.push(entry);
        Ok(&self.history[index])
    }

    /// History as pretty-printed JSON, oldest first
    pub fn history_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.history)
    }
}
