//! User interface module - operator messages.
//!
//! `formatter` holds the pure formatting functions; everything is re-exported
//! here for convenience.

pub mod formatter;

pub use formatter::{
    display_error, display_inputs, display_outcome, display_status,
    format_error, format_inputs, format_outcome, format_status, format_success,
};
