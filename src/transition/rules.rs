//! The ordered transition rules.
//!
//! Each rule either passes or produces a [`ReleaseGateError::RuleViolation`].
//! Rules are checked in [`RuleId::ORDERED`] order and the first failure wins.

use std::fmt;

use crate::domain::{BumpType, Classification, PrereleaseId, Track};
use crate::error::{ReleaseGateError, Result};

use super::BumpRequest;

/// Identifies one of the transition rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    /// Starting a prerelease track needs a concrete identifier
    TrackInitiation,
    /// `prerelease` needs an existing track to advance
    StableHasNoTrack,
    /// A prerelease may only move within or above its track
    TrackLockIn,
    /// Identifiers never move backwards within a track
    ForwardOnly,
}

impl RuleId {
    pub const ORDERED: [RuleId; 4] = [
        RuleId::TrackInitiation,
        RuleId::StableHasNoTrack,
        RuleId::TrackLockIn,
        RuleId::ForwardOnly,
    ];

    pub fn number(self) -> u8 {
        match self {
            RuleId::TrackInitiation => 1,
            RuleId::StableHasNoTrack => 2,
            RuleId::TrackLockIn => 3,
            RuleId::ForwardOnly => 4,
        }
    }

    /// Stable machine-readable name, e.g. `rule-3`
    pub fn slug(self) -> &'static str {
        match self {
            RuleId::TrackInitiation => "rule-1",
            RuleId::StableHasNoTrack => "rule-2",
            RuleId::TrackLockIn => "rule-3",
            RuleId::ForwardOnly => "rule-4",
        }
    }

    /// Run this rule against a request and the current classification
    pub fn check(self, request: &BumpRequest, current: &Classification) -> Result<()> {
        match self {
            RuleId::TrackInitiation => check_track_initiation(request),
            RuleId::StableHasNoTrack => check_stable_has_no_track(request, current),
            RuleId::TrackLockIn => check_track_lock_in(request, current),
            RuleId::ForwardOnly => check_forward_only(request, current),
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Bump types permitted while the current version sits on `track`.
///
/// Stable versions have no lock-in, so every bump type is listed.
pub fn allowed_bumps(track: Track) -> &'static [BumpType] {
    const PREMAJOR: &[BumpType] = &[BumpType::Prerelease, BumpType::Major];
    const PREMINOR: &[BumpType] = &[BumpType::Prerelease, BumpType::Minor, BumpType::Premajor];
    const PREPATCH: &[BumpType] = &[
        BumpType::Prerelease,
        BumpType::Patch,
        BumpType::Preminor,
        BumpType::Premajor,
    ];

    match track {
        Track::Premajor => PREMAJOR,
        Track::Preminor => PREMINOR,
        Track::Prepatch => PREPATCH,
        Track::None => &BumpType::ALL,
    }
}

fn check_track_initiation(request: &BumpRequest) -> Result<()> {
    if request.version_type.initiates_track() && !request.prerelease_id.is_concrete() {
        return Err(ReleaseGateError::violation(
            RuleId::TrackInitiation,
            format!(
                "Starting a new prerelease track (\"{}\") requires an explicit prerelease-id (alpha | beta | rc). \"none\" is not allowed here.",
                request.version_type
            ),
        ));
    }
    Ok(())
}

fn check_stable_has_no_track(request: &BumpRequest, current: &Classification) -> Result<()> {
    if !current.is_prerelease && request.version_type == BumpType::Prerelease {
        return Err(ReleaseGateError::violation(
            RuleId::StableHasNoTrack,
            format!(
                "Cannot use version \"prerelease\" when the current version ({}) is not already a prerelease.",
                current.version
            ),
        ));
    }
    Ok(())
}

fn check_track_lock_in(request: &BumpRequest, current: &Classification) -> Result<()> {
    if !current.is_prerelease {
        return Ok(());
    }

    let allowed = allowed_bumps(current.track);
    if allowed.contains(&request.version_type) {
        return Ok(());
    }

    let names: Vec<&str> = allowed.iter().map(|bump| bump.as_str()).collect();
    Err(ReleaseGateError::violation(
        RuleId::TrackLockIn,
        format!(
            "Current version ({}) is on the {} track. Next version must be one of: {}, got \"{}\".",
            current.version,
            current.track,
            names.join(", "),
            request.version_type
        ),
    ))
}

fn check_forward_only(request: &BumpRequest, current: &Classification) -> Result<()> {
    if request.version_type != BumpType::Prerelease || !current.is_prerelease {
        return Ok(());
    }

    // Unknown identifiers (e.g. "dev") carry no weight and are not ordered.
    let Some(current_id) = current
        .prerelease_id
        .as_deref()
        .and_then(|id| id.parse::<PrereleaseId>().ok())
    else {
        return Ok(());
    };

    // Graduation to stable is always allowed.
    if !request.prerelease_id.is_concrete() {
        return Ok(());
    }

    if request.prerelease_id.weight() < current_id.weight() {
        return Err(ReleaseGateError::violation(
            RuleId::ForwardOnly,
            format!(
                "Cannot move prerelease identifier from \"{}\" to \"{}\". Identifier progression is: alpha -> beta -> rc -> (stable).",
                current_id, request.prerelease_id
            ),
        ));
    }
    Ok(())
}
