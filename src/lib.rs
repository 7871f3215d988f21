pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod observability;
pub mod output;
pub mod transition;
pub mod ui;

pub use error::{ReleaseGateError, Result};
pub use transition::{evaluate, validate_transition, Approval, Outcome};
