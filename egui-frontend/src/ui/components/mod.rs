//! # UI Components Module
//!
//! Rendering for each section of the calculator, top to bottom.
//!
//! ## Module Organization:
//! - `party_inputs` - Time at table, number of people, hourly rate slider
//! - `service_ratings` - The three rating sliders with their descriptions
//! - `bonus_add_ons` - Flat bonus checkboxes
//! - `action_buttons` - Calculate Tip / Reset
//! - `results_panel` - Suggested tip breakdown card
//! - `history_list` - Committed calculations
//! - `modals` - Validation alert
//! - `styling` / `theme` - Global style and color palette
//!
//! Components are `impl TipCalculatorApp` blocks so each can read config and mutate
//! the session directly.

pub mod action_buttons;
pub mod bonus_add_ons;
pub mod history_list;
pub mod modals;
pub mod party_inputs;
pub mod results_panel;
pub mod service_ratings;
pub mod styling;
pub mod theme;

pub use styling::{section_heading, setup_tip_calculator_style};
pub use theme::*;
