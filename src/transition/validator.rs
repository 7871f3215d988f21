use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, info};

use crate::domain::{classify, BumpType, Classification, ParsedVersion, PrereleaseId};
use crate::error::{ReleaseGateError, Result};

use super::RuleId;

/// A validated bump request: both inputs are known variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpRequest {
    pub version_type: BumpType,
    pub prerelease_id: PrereleaseId,
}

impl BumpRequest {
    /// Validate the raw inputs; the version type is checked first
    pub fn from_inputs(version_type: &str, prerelease_id: &str) -> Result<Self> {
        Ok(BumpRequest {
            version_type: version_type.parse()?,
            prerelease_id: prerelease_id.parse()?,
        })
    }
}

/// Result of a transition that passed every rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Approval {
    /// Whether the version produced by the bump will be a prerelease
    pub next_is_prerelease: bool,
}

/// Apply the transition rules in order. The first violation is returned.
pub fn validate(request: &BumpRequest, current: &Classification) -> Result<Approval> {
    for rule in RuleId::ORDERED {
        rule.check(request, current)?;
        debug!(rule = rule.slug(), "rule passed");
    }

    Ok(Approval {
        next_is_prerelease: request.version_type.yields_prerelease(),
    })
}

/// Validate a transition from raw strings.
///
/// Inputs are validated before the current version is parsed, so an unknown
/// bump type is reported even when the version string is also malformed.
///
/// # Examples
/// ```
/// use release_gate::validate_transition;
///
/// let approval = validate_transition("prerelease", "beta", "1.2.0-alpha.0").unwrap();
/// assert!(approval.next_is_prerelease);
///
/// assert!(validate_transition("minor", "none", "2.0.0-alpha.0").is_err());
/// ```
pub fn validate_transition(
    version_type: &str,
    prerelease_id: &str,
    current_version: &str,
) -> Result<Approval> {
    let request = BumpRequest::from_inputs(version_type, prerelease_id)?;
    let parsed = ParsedVersion::parse(current_version)?;
    let current = classify(&parsed);

    debug!(
        version = %parsed,
        is_prerelease = current.is_prerelease,
        track = %current.track,
        prerelease_id = current.prerelease_id.as_deref().unwrap_or("-"),
        "classified current version"
    );

    let approval = validate(&request, &current)?;
    info!(
        version_type = %request.version_type,
        prerelease_id = %request.prerelease_id,
        next_is_prerelease = approval.next_is_prerelease,
        "transition approved"
    );
    Ok(approval)
}

/// Flattened verdict handed to callers that branch on plain values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Approved { next_is_prerelease: bool },
    Rejected { rule: String, message: String },
}

impl Outcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, Outcome::Approved { .. })
    }
}

impl From<Result<Approval>> for Outcome {
    fn from(result: Result<Approval>) -> Self {
        match result {
            Ok(approval) => Outcome::Approved {
                next_is_prerelease: approval.next_is_prerelease,
            },
            Err(err) => Outcome::from(&err),
        }
    }
}

impl From<&ReleaseGateError> for Outcome {
    fn from(err: &ReleaseGateError) -> Self {
        Outcome::Rejected {
            rule: err.kind(),
            message: err.to_string(),
        }
    }
}

// Serialized as `{"approved": true, "next_is_prerelease": ..}` or
// `{"approved": false, "rule": .., "message": ..}`.
impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Outcome::Approved { next_is_prerelease } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("approved", &true)?;
                map.serialize_entry("next_is_prerelease", next_is_prerelease)?;
                map.end()
            }
            Outcome::Rejected { rule, message } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("approved", &false)?;
                map.serialize_entry("rule", rule)?;
                map.serialize_entry("message", message)?;
                map.end()
            }
        }
    }
}

/// Run [`validate_transition`] and flatten the result into an [`Outcome`]
pub fn evaluate(version_type: &str, prerelease_id: &str, current_version: &str) -> Outcome {
    validate_transition(version_type, prerelease_id, current_version).into()
}
