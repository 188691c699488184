//! # Theme Configuration
//!
//! Centralized colors for the tip calculator. All components read colors from
//! `CURRENT_THEME` (or the `colors` shortcuts) instead of hard-coding them.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::ui::components::theme::colors;
//!
//! let accent = colors::ACCENT;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Buttons, sliders and other interactive elements
    pub interactive: InteractiveColors,
    /// Text colors
    pub typography: TypographyColors,
    /// The suggested tip breakdown panel
    pub results: ResultsColors,
}

/// Colors for interactive elements
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Accent used for the primary action, slider fill and rating labels
    pub accent: Color32,
    /// Fill of the secondary (Reset) button
    pub secondary_button: Color32,
    /// Text on the secondary button
    pub secondary_button_text: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    /// Criterion descriptions and slider tick labels
    pub muted: Color32,
    /// History timestamps
    pub timestamp: Color32,
    pub white: Color32,
    pub error: Color32,
}

/// Breakdown panel colors
#[derive(Debug, Clone)]
pub struct ResultsColors {
    pub background: Color32,
    pub border: Color32,
    pub text: Color32,
}

/// The current active theme - blue accent on egui's dark visuals
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        accent: Color32::from_rgb(0, 122, 204),
        secondary_button: Color32::from_rgb(176, 176, 176),
        secondary_button_text: Color32::from_rgb(30, 30, 30),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(225, 225, 225),
        muted: Color32::from_rgb(150, 150, 150),
        timestamp: Color32::from_rgb(130, 130, 130),
        white: Color32::WHITE,
        error: Color32::from_rgb(220, 50, 50),
    },
    results: ResultsColors {
        // 15% accent over the panel
        background: Color32::from_rgba_premultiplied(0, 18, 31, 38),
        border: Color32::from_rgb(0, 122, 204),
        text: Color32::WHITE,
    },
};

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const ACCENT: Color32 = CURRENT_THEME.interactive.accent;
    pub const SECONDARY_BUTTON: Color32 = CURRENT_THEME.interactive.secondary_button;
    pub const SECONDARY_BUTTON_TEXT: Color32 = CURRENT_THEME.interactive.secondary_button_text;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_MUTED: Color32 = CURRENT_THEME.typography.muted;
    pub const TEXT_TIMESTAMP: Color32 = CURRENT_THEME.typography.timestamp;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;
    pub const TEXT_ERROR: Color32 = CURRENT_THEME.typography.error;
}
