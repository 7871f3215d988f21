//! Prerelease identifiers and their maturity ordering
//!
//! Identifiers progress `alpha -> beta -> rc -> (stable)`. `none` is the
//! graduation sentinel that sits above every real identifier.

use crate::error::{ReleaseGateError, Result};
use std::fmt;
use std::str::FromStr;

/// Requested prerelease identifier
///
/// Variant order matches maturity, so the derived `Ord` is the progression
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrereleaseId {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    ReleaseCandidate,
    /// No identifier: graduate to stable
    None,
}

impl PrereleaseId {
    /// Every accepted identifier, in maturity order
    pub const ALL: [PrereleaseId; 4] = [
        PrereleaseId::Alpha,
        PrereleaseId::Beta,
        PrereleaseId::ReleaseCandidate,
        PrereleaseId::None,
    ];

    /// Accepted spellings, used in error messages
    pub const NAMES: [&'static str; 4] = ["alpha", "beta", "rc", "none"];

    /// Parse an identifier; only the exact lowercase names are accepted
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Position in the progression `alpha(0) < beta(1) < rc(2) < none(3)`
    pub fn weight(self) -> u8 {
        match self {
            PrereleaseId::Alpha => 0,
            PrereleaseId::Beta => 1,
            PrereleaseId::ReleaseCandidate => 2,
            PrereleaseId::None => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrereleaseId::Alpha => "alpha",
            PrereleaseId::Beta => "beta",
            PrereleaseId::ReleaseCandidate => "rc",
            PrereleaseId::None => "none",
        }
    }

    /// Whether this names a concrete prerelease label rather than graduation
    pub fn is_concrete(self) -> bool {
        self != PrereleaseId::None
    }
}

impl FromStr for PrereleaseId {
    type Err = ReleaseGateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alpha" => Ok(PrereleaseId::Alpha),
            "beta" => Ok(PrereleaseId::Beta),
            "rc" => Ok(PrereleaseId::ReleaseCandidate),
            "none" => Ok(PrereleaseId::None),
            other => Err(ReleaseGateError::invalid_input(
                "prerelease-id",
                other,
                &PrereleaseId::NAMES,
            )),
        }
    }
}

impl fmt::Display for PrereleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
