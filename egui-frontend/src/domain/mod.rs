//! # Domain Module
//!
//! Tip calculation rules and the per-window session state. Nothing in here
//! touches egui; the UI layer only reads breakdowns and calls the session setters.
//!
//! ## Module Organization:
//! - `tip_calculation` - Pure derivation of the tip breakdown and the Calculate precondition
//! - `session` - Form input, results visibility and the append-only calculation history

pub mod session;
pub mod tip_calculation;

pub use session::{SessionPhase, TipSession};
pub use tip_calculation::{TipCalculationError, TipCalculationService};
