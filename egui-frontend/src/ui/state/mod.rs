//! # UI State Modules
//!
//! Widget-level state that does not belong in the domain session.
//!
//! - `form_state` - text buffers behind the numeric entry fields
//! - `ui_state` - validation alert and status line

pub mod form_state;
pub mod ui_state;

pub use form_state::FormState;
pub use ui_state::UIState;
