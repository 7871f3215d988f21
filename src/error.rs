use thiserror::Error;

use crate::transition::RuleId;

/// Unified error type for release-gate operations
#[derive(Error, Debug)]
pub enum ReleaseGateError {
    #[error("Invalid {input} \"{value}\". Must be one of: {allowed}.")]
    InvalidInput {
        input: &'static str,
        value: String,
        allowed: String,
    },

    #[error("Malformed version \"{version}\": {reason}")]
    MalformedVersion { version: String, reason: String },

    #[error("Rule {rule} violation: {message}")]
    RuleViolation { rule: RuleId, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-gate
pub type Result<T> = std::result::Result<T, ReleaseGateError>;

impl ReleaseGateError {
    /// Create an invalid input error listing the accepted values
    pub fn invalid_input(input: &'static str, value: impl Into<String>, allowed: &[&str]) -> Self {
        ReleaseGateError::InvalidInput {
            input,
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }

    /// Create a malformed version error with context
    pub fn malformed(version: impl Into<String>, reason: impl Into<String>) -> Self {
        ReleaseGateError::MalformedVersion {
            version: version.into(),
            reason: reason.into(),
        }
    }

    /// Create a rule violation error
    pub fn violation(rule: RuleId, message: impl Into<String>) -> Self {
        ReleaseGateError::RuleViolation {
            rule,
            message: message.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseGateError::Config(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseGateError::Manifest(msg.into())
    }

    /// Stable identifier for the failure kind, as reported in outcomes
    pub fn kind(&self) -> String {
        match self {
            ReleaseGateError::InvalidInput { .. } => "invalid-input".to_string(),
            ReleaseGateError::MalformedVersion { .. } => "malformed-version".to_string(),
            ReleaseGateError::RuleViolation { rule, .. } => rule.slug().to_string(),
            ReleaseGateError::Config(_) => "config".to_string(),
            ReleaseGateError::Manifest(_) => "manifest".to_string(),
            ReleaseGateError::Io(_) => "io".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseGateError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseGateError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn test_invalid_input_lists_allowed_values() {
        let err = ReleaseGateError::invalid_input("version", "huge", &["major", "minor"]);
        assert_eq!(
            err.to_string(),
            "Invalid version \"huge\". Must be one of: major, minor."
        );
        assert_eq!(err.kind(), "invalid-input");
    }

    #[test]
    fn test_malformed_version_display() {
        let err = ReleaseGateError::malformed("1.2", "expected MAJOR.MINOR.PATCH");
        let msg = err.to_string();
        assert!(msg.starts_with("Malformed version \"1.2\""));
        assert!(msg.contains("expected MAJOR.MINOR.PATCH"));
        assert_eq!(err.kind(), "malformed-version");
    }

    #[test]
    fn test_rule_violation_display() {
        let err = ReleaseGateError::violation(RuleId::TrackLockIn, "wrong track");
        assert_eq!(err.to_string(), "Rule 3 violation: wrong track");
        assert_eq!(err.kind(), "rule-3");
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseGateError::config("x"), "Configuration error"),
            (ReleaseGateError::manifest("x"), "Manifest error"),
            (ReleaseGateError::malformed("x", "y"), "Malformed version"),
            (
                ReleaseGateError::violation(RuleId::ForwardOnly, "x"),
                "Rule 4 violation",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
