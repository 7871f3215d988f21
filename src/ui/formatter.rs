//! Pure formatting functions for operator-facing output.
//!
//! The `format_*` functions build the text; the `display_*` functions print it.
//! Operator messages go to stderr so stdout stays free for step outputs.

use console::style;

use crate::transition::Outcome;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("✗").red().bold(), message)
}

/// Format a success message with a green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Format a status message with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Format the inputs a validation run is about to check.
pub fn format_inputs(current_version: &str, version_type: &str, prerelease_id: &str) -> String {
    [
        format!("Current version: \"{}\"", style(current_version).cyan()),
        format!("Version input: \"{}\"", style(version_type).cyan()),
        format!("Prerelease ID: \"{}\"", style(prerelease_id).cyan()),
    ]
    .join("\n")
}

/// Format the final verdict line.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Approved { .. } => format_success("All transition rules passed."),
        Outcome::Rejected { message, .. } => {
            format_error(&format!("Validation failed: {}", message))
        }
    }
}

pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}

pub fn display_inputs(current_version: &str, version_type: &str, prerelease_id: &str) {
    eprintln!(
        "{}",
        format_inputs(current_version, version_type, prerelease_id)
    );
}

pub fn display_outcome(outcome: &Outcome) {
    eprintln!("\n{}", format_outcome(outcome));
}
