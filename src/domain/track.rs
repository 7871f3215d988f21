//! Classification of the current version into a prerelease track.
//!
//! The track is read purely from the numeric shape of the core version:
//!
//! - premajor  -> `X.0.0-<id>.N`
//! - preminor  -> `X.Y.0-<id>.N`
//! - prepatch  -> `X.Y.Z-<id>.N`
//!
//! A hand-written `1.0.0-alpha.0` meant as a prepatch is indistinguishable
//! from a premajor seed and is classified as premajor.

use std::fmt;

use super::version::ParsedVersion;

/// Granularity a prerelease sequence is building toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    Premajor,
    Preminor,
    Prepatch,
    /// Stable version, no track
    None,
}

impl Track {
    pub fn as_str(self) -> &'static str {
        match self {
            Track::Premajor => "premajor",
            Track::Preminor => "preminor",
            Track::Prepatch => "prepatch",
            Track::None => "none",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the transition rules need to know about the current version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The classified version, without build metadata
    pub version: String,
    pub is_prerelease: bool,
    pub track: Track,
    /// First non-numeric prerelease segment, verbatim
    pub prerelease_id: Option<String>,
}

/// Classify a parsed version. Never fails.
pub fn classify(version: &ParsedVersion) -> Classification {
    Classification {
        version: version.to_string(),
        is_prerelease: version.is_prerelease(),
        track: track_of(version),
        prerelease_id: identifier_of(version).map(str::to_string),
    }
}

fn track_of(version: &ParsedVersion) -> Track {
    if !version.is_prerelease() {
        return Track::None;
    }

    match (version.minor, version.patch) {
        (0, 0) => Track::Premajor,
        (_, 0) => Track::Preminor,
        _ => Track::Prepatch,
    }
}

fn identifier_of(version: &ParsedVersion) -> Option<&str> {
    version
        .prerelease
        .iter()
        .map(String::as_str)
        .find(|segment| !is_numeric_segment(segment))
}

/// Whether a segment reads as a number the way JavaScript's `Number()`
/// converts strings: surrounding whitespace is ignored, an empty string is 0,
/// and decimal, exponent, `0x`/`0o`/`0b` and `Infinity` forms all count.
fn is_numeric_segment(segment: &str) -> bool {
    let s = segment.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return true;
    }

    let radix_digits = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| s.strip_prefix(prefix).map(|rest| (rest, radix)));
    if let Some((digits, radix)) = radix_digits {
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned == "Infinity" || is_decimal_literal(unsigned)
}

// digits [. digits] [e|E [+|-] digits], with at least one mantissa digit
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if int_part.len() + frac_part.len() == 0 || !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && all_digits(exp)
        }
    }
}
