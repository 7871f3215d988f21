use crate::error::{ReleaseGateError, Result};
use std::fmt;
use std::str::FromStr;

/// Version bump requested by the release pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpType {
    Major,
    Minor,
    Patch,
    Premajor,
    Preminor,
    Prepatch,
    Prerelease,
}

impl BumpType {
    pub const ALL: [BumpType; 7] = [
        BumpType::Major,
        BumpType::Minor,
        BumpType::Patch,
        BumpType::Premajor,
        BumpType::Preminor,
        BumpType::Prepatch,
        BumpType::Prerelease,
    ];

    pub const NAMES: [&'static str; 7] = [
        "major",
        "minor",
        "patch",
        "premajor",
        "preminor",
        "prepatch",
        "prerelease",
    ];

    /// Bump types that start a new prerelease track
    pub const TRACK_INITIATORS: [BumpType; 3] =
        [BumpType::Premajor, BumpType::Preminor, BumpType::Prepatch];

    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BumpType::Major => "major",
            BumpType::Minor => "minor",
            BumpType::Patch => "patch",
            BumpType::Premajor => "premajor",
            BumpType::Preminor => "preminor",
            BumpType::Prepatch => "prepatch",
            BumpType::Prerelease => "prerelease",
        }
    }

    /// True for `premajor`, `preminor` and `prepatch`
    pub fn initiates_track(self) -> bool {
        Self::TRACK_INITIATORS.contains(&self)
    }

    /// Whether the version produced by this bump is a prerelease
    pub fn yields_prerelease(self) -> bool {
        self.initiates_track() || self == BumpType::Prerelease
    }
}

impl FromStr for BumpType {
    type Err = ReleaseGateError;

    fn from_str(s: &str) -> Result<Self> {
        BumpType::ALL
            .into_iter()
            .find(|bump| bump.as_str() == s)
            .ok_or_else(|| ReleaseGateError::invalid_input("version", s, &BumpType::NAMES))
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
