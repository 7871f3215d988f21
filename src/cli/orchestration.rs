//! Gate workflow orchestration
//!
//! Resolves the current version, validates the requested transition and
//! reports the prerelease flag. Kept apart from `main.rs` so it can be driven
//! without clap.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::manifest;
use crate::output::OutputSink;
use crate::transition::{self, Outcome};

/// Arguments for the gate workflow
#[derive(Debug, Clone, PartialEq)]
pub struct GateArgs {
    /// Requested bump type, unvalidated
    pub version_type: String,

    /// Requested prerelease identifier, unvalidated
    pub prerelease_id: String,

    /// Explicit current version; skips the manifest when set
    pub current_version: Option<String>,

    /// Manifest to read; defaults to the configured path
    pub manifest_path: Option<PathBuf>,

    /// Where to report the prerelease flag; `None` disables reporting
    pub output: Option<OutputSink>,
}

/// Result of a completed gate run
#[derive(Debug, Clone, PartialEq)]
pub struct GateReport {
    /// The version the transition was checked against
    pub current_version: String,

    /// Verdict of the transition rules
    pub outcome: Outcome,
}

impl GateReport {
    pub fn approved(&self) -> bool {
        self.outcome.is_approved()
    }
}

/// Resolve the current version string from the arguments or the manifest.
pub fn resolve_current_version(args: &GateArgs, config: &Config) -> Result<String> {
    if let Some(version) = &args.current_version {
        return Ok(version.clone());
    }

    let path = args
        .manifest_path
        .clone()
        .unwrap_or_else(|| config.manifest.path.clone());
    manifest::read_current_version(&path)
}

/// Main gate workflow
///
/// 1. Resolve the current version
/// 2. Validate the requested transition
/// 3. On approval, write `<output.key>=<next_is_prerelease>` to the sink
///
/// Rejections are part of the report. Only operational failures (unreadable
/// manifest, unwritable output) are returned as errors.
pub fn run_gate(args: &GateArgs, config: &Config) -> Result<GateReport> {
    let current_version = resolve_current_version(args, config)?;

    let outcome = transition::evaluate(&args.version_type, &args.prerelease_id, &current_version);

    if let Outcome::Approved { next_is_prerelease } = outcome {
        if let Some(sink) = &args.output {
            sink.write(&config.output.key, next_is_prerelease)?;
        }
    } else {
        tracing::warn!(version = %current_version, ?outcome, "transition rejected");
    }

    Ok(GateReport {
        current_version,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(version_type: &str, prerelease_id: &str, current: &str) -> GateArgs {
        GateArgs {
            version_type: version_type.to_string(),
            prerelease_id: prerelease_id.to_string(),
            current_version: Some(current.to_string()),
            manifest_path: None,
            output: None,
        }
    }

    #[test]
    fn test_explicit_version_skips_manifest() {
        let config = Config::default();
        let version =
            resolve_current_version(&args("major", "none", "3.0.0"), &config).unwrap();
        assert_eq!(version, "3.0.0");
    }

    #[test]
    fn test_rejection_is_reported_not_raised() {
        let report = run_gate(&args("prerelease", "beta", "1.0.0"), &Config::default()).unwrap();
        assert!(!report.approved());
        assert_eq!(report.current_version, "1.0.0");
    }

    #[test]
    fn test_approval_writes_configured_key() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");

        let mut config = Config::default();
        config.output.key = "prerelease".to_string();

        let mut gate = args("preminor", "alpha", "1.0.0");
        gate.output = Some(OutputSink::File(out.clone()));

        let report = run_gate(&gate, &config).unwrap();
        assert!(report.approved());
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "prerelease=true\n");
    }

    #[test]
    fn test_rejection_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");

        let mut gate = args("preminor", "none", "1.0.0");
        gate.output = Some(OutputSink::File(out.clone()));

        let report = run_gate(&gate, &Config::default()).unwrap();
        assert!(!report.approved());
        assert!(!out.exists());
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let mut gate = args("major", "none", "1.0.0");
        gate.current_version = None;
        gate.manifest_path = Some(PathBuf::from("/nonexistent/package.json"));

        let err = run_gate(&gate, &Config::default()).unwrap_err();
        assert!(err.to_string().starts_with("Manifest error"));
    }
}
