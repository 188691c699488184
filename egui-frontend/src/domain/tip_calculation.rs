//! Tip calculation domain logic.
//!
//! This module maps the current form input to a tip breakdown and decides whether
//! a calculation may be committed to history. The UI never does arithmetic itself;
//! everything it displays comes from `TipCalculationService::derive`.

use chrono::{DateTime, TimeZone};
use shared::{HistoryEntry, Money, TipBreakdown, TipFormInputs, INVALID_PARTY_MESSAGE};
use std::fmt;
use thiserror::Error;

/// Format used for history timestamps, e.g. `10/19/2026, 3:04:05 PM`
const HISTORY_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const MINUTES_PER_HOUR: f64 = 60.0;

/// Reasons a calculation cannot be committed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TipCalculationError {
    #[error("{}", INVALID_PARTY_MESSAGE)]
    InvalidPartyDetails {
        time_at_table_valid: bool,
        num_people_valid: bool,
    },
}

/// Stateless service holding the tip rules
#[derive(Debug, Clone, Copy, Default)]
pub struct TipCalculationService;

impl TipCalculationService {
    pub fn new() -> Self {
        Self
    }

    /// Derive the full breakdown from the current input.
    ///
    /// Each term is rounded to cents on its own and the total is the exact sum of the
    /// rounded terms, so `suggested_tip == base_tip + service_bonus + bonus_add_ons` always holds.
    pub fn derive(&self, inputs: &TipFormInputs) -> TipBreakdown {
        let base_tip = self.base_tip(inputs);
        let service_bonus = self.service_bonus(inputs);
        let bonus_add_ons = self.bonus_add_ons(inputs);

        TipBreakdown {
            base_tip,
            service_bonus,
            bonus_add_ons,
            suggested_tip: base_tip + service_bonus + bonus_add_ons,
        }
    }

    /// (minutes / 60) * rate * people, or zero until both party fields are positive
    pub fn base_tip(&self, inputs: &TipFormInputs) -> Money {
        match (
            inputs.time_at_table_minutes.value(),
            inputs.num_people.value(),
        ) {
            (Some(minutes), Some(people)) if minutes > 0.0 && people > 0 => {
                Money::from_dollars_rounded(
                    (minutes / MINUTES_PER_HOUR) * inputs.hourly_rate * people as f64,
                )
            }
            _ => Money::ZERO,
        }
    }

    /// Sum of the ratings, floored at zero
    pub fn service_bonus(&self, inputs: &TipFormInputs) -> Money {
        Money::from_whole_dollars(inputs.service_score().max(0) as i64)
    }

    /// One dollar per checked add-on
    pub fn bonus_add_ons(&self, inputs: &TipFormInputs) -> Money {
        Money::from_whole_dollars(inputs.bonus_count() as i64)
    }

    /// Check the precondition for committing a calculation
    pub fn validate(&self, inputs: &TipFormInputs) -> Result<(), TipCalculationError> {
        let time_at_table_valid = inputs.time_at_table_minutes.is_positive();
        let num_people_valid = inputs.num_people.is_positive();

        if time_at_table_valid && num_people_valid {
            Ok(())
        } else {
            Err(TipCalculationError::InvalidPartyDetails {
                time_at_table_valid,
                num_people_valid,
            })
        }
    }

    /// Snapshot a breakdown into an immutable history record
    pub fn create_history_entry<Tz>(
        &self,
        breakdown: &TipBreakdown,
        timestamp: &DateTime<Tz>,
    ) -> HistoryEntry
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        HistoryEntry {
            base_tip: breakdown.base_tip.to_string(),
            service_bonus: breakdown.service_bonus.to_string(),
            bonus_add_ons: breakdown.bonus_add_ons.to_string(),
            suggested_tip: breakdown.suggested_tip.to_string(),
            date: timestamp.format(HISTORY_DATE_FORMAT).to_string(),
        }
    }
}
