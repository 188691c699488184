//! # Tip Calculator
//!
//! Desktop tip calculator built on egui. The crate is split the same way the
//! window is driven:
//!
//! - `config` - optional YAML settings (currency symbol, hourly-rate slider bounds)
//! - `domain` - the tip rules and the session state machine, free of any UI types
//! - `ui` - the eframe application, per-window UI state and the rendering components

pub mod config;
pub mod domain;
pub mod ui;
