use crate::error::{ReleaseGateError, Result};
use std::fmt;
use std::str::FromStr;

/// Largest integer a version component may hold (2^53 - 1).
///
/// Versions are also consumed by JavaScript tooling, which cannot represent
/// larger integers exactly.
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Semantic version split into its core numbers and raw prerelease segments.
///
/// Build metadata is dropped while parsing and never kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<String>,
}

impl ParsedVersion {
    /// Create a version without prerelease segments
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        ParsedVersion {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
        }
    }

    /// Attach prerelease segments, e.g. `["alpha", "0"]`
    pub fn with_prerelease<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerelease = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a version string such as `1.2.0-alpha.0+build.5`.
    ///
    /// Only the core is validated: it must be exactly three dot-separated,
    /// all-digit segments, each no larger than [`MAX_SAFE_INTEGER`].
    /// Prerelease segments are kept verbatim.
    ///
    /// # Examples
    /// ```
    /// use release_gate::domain::ParsedVersion;
    ///
    /// let v = ParsedVersion::parse("1.2.0-alpha.0+sha.abc").unwrap();
    /// assert_eq!((v.major, v.minor, v.patch), (1, 2, 0));
    /// assert_eq!(v.prerelease, vec!["alpha", "0"]);
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let base = match raw.find('+') {
            Some(idx) => &raw[..idx],
            None => raw,
        };

        let (core, prerelease) = match base.find('-') {
            Some(idx) => (&base[..idx], &base[idx + 1..]),
            None => (base, ""),
        };

        let pieces: Vec<&str> = core.split('.').collect();
        if pieces.len() != 3 {
            return Err(ReleaseGateError::malformed(
                raw,
                format!(
                    "expected MAJOR.MINOR.PATCH, found {} core segment(s)",
                    pieces.len()
                ),
            ));
        }

        let major = parse_core_segment(raw, pieces[0])?;
        let minor = parse_core_segment(raw, pieces[1])?;
        let patch = parse_core_segment(raw, pieces[2])?;

        let prerelease = if prerelease.is_empty() {
            Vec::new()
        } else {
            prerelease.split('.').map(str::to_string).collect()
        };

        Ok(ParsedVersion {
            major,
            minor,
            patch,
            prerelease,
        })
    }

    /// True when the version carries prerelease segments
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }
}

fn parse_core_segment(raw: &str, segment: &str) -> Result<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReleaseGateError::malformed(
            raw,
            format!("invalid version segment \"{}\"", segment),
        ));
    }

    // All digits, so the only possible parse failure is overflow.
    match segment.parse::<u64>() {
        Ok(n) if n <= MAX_SAFE_INTEGER => Ok(n),
        _ => Err(ReleaseGateError::malformed(
            raw,
            format!("version segment \"{}\" exceeds safe integer range", segment),
        )),
    }
}

impl FromStr for ParsedVersion {
    type Err = ReleaseGateError;

    fn from_str(s: &str) -> Result<Self> {
        ParsedVersion::parse(s)
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.is_prerelease() {
            write!(f, "-{}", self.prerelease.join("."))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_stable() {
        let v = ParsedVersion::parse("1.2.3").unwrap();
        assert_eq!(v, ParsedVersion::new(1, 2, 3));
        assert!(!v.is_prerelease());
    }

    #[test]
    fn test_parse_prerelease() {
        let v = ParsedVersion::parse("2.0.0-rc.1").unwrap();
        assert_eq!(v, ParsedVersion::new(2, 0, 0).with_prerelease(["rc", "1"]));
        assert!(v.is_prerelease());
    }

    #[test]
    fn test_parse_strips_build_metadata() {
        let v = ParsedVersion::parse("1.0.0+build.7").unwrap();
        assert_eq!(v, ParsedVersion::new(1, 0, 0));

        let v = ParsedVersion::parse("1.0.0-beta.2+exp.sha.5114f85").unwrap();
        assert_eq!(v.prerelease, vec!["beta", "2"]);
    }

    #[test]
    fn test_parse_hyphen_inside_build_metadata_is_ignored() {
        let v = ParsedVersion::parse("1.0.0+build-1").unwrap();
        assert!(!v.is_prerelease());
    }

    #[test]
    fn test_parse_keeps_hyphens_inside_prerelease() {
        let v = ParsedVersion::parse("1.0.0-x-y.1").unwrap();
        assert_eq!(v.prerelease, vec!["x-y", "1"]);
    }

    #[test]
    fn test_parse_empty_prerelease_is_stable() {
        let v = ParsedVersion::parse("1.0.0-").unwrap();
        assert!(!v.is_prerelease());
    }

    #[test]
    fn test_parse_accepts_leading_zeros() {
        let v = ParsedVersion::parse("01.002.3").unwrap();
        assert_eq!(v, ParsedVersion::new(1, 2, 3));
    }

    #[test]
    fn test_parse_wrong_segment_count() {
        assert!(ParsedVersion::parse("1.2").is_err());
        assert!(ParsedVersion::parse("1.2.3.4").is_err());
        assert!(ParsedVersion::parse("").is_err());
    }

    #[test]
    fn test_parse_non_digit_segments() {
        assert!(ParsedVersion::parse("v1.2.3").is_err());
        assert!(ParsedVersion::parse("1.x.3").is_err());
        assert!(ParsedVersion::parse("1..3").is_err());
        assert!(ParsedVersion::parse(" 1.2.3").is_err());
        assert!(ParsedVersion::parse("1.2.-3").is_err());
    }

    #[test]
    fn test_parse_safe_integer_limit() {
        let v = ParsedVersion::parse("9007199254740991.0.0").unwrap();
        assert_eq!(v.major, MAX_SAFE_INTEGER);

        let err = ParsedVersion::parse("9007199254740992.0.0").unwrap_err();
        assert!(err.to_string().contains("exceeds safe integer range"));

        // Overflows u64 entirely
        assert!(ParsedVersion::parse("1.99999999999999999999999.0").is_err());
    }

    #[test]
    fn test_parse_error_names_version() {
        let err = ParsedVersion::parse("1.2").unwrap_err();
        assert!(matches!(err, ReleaseGateError::MalformedVersion { ref version, .. } if version == "1.2"));
    }

    #[test]
    fn test_from_str() {
        let v: ParsedVersion = "0.1.0-alpha".parse().unwrap();
        assert_eq!(v.prerelease, vec!["alpha"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(ParsedVersion::new(1, 2, 3).to_string(), "1.2.3");
        let v = ParsedVersion::parse("1.2.0-alpha.0+meta").unwrap();
        assert_eq!(v.to_string(), "1.2.0-alpha.0");
    }

    proptest! {
        #[test]
        fn agrees_with_semver_crate(
            major in 0u64..10_000,
            minor in 0u64..10_000,
            patch in 0u64..10_000,
            pre in proptest::option::of("[a-z]{1,6}(\\.(0|[1-9][0-9]{0,3}))?"),
            build in proptest::option::of("[a-z0-9]{1,8}"),
        ) {
            let mut raw = format!("{}.{}.{}", major, minor, patch);
            if let Some(pre) = &pre {
                raw.push('-');
                raw.push_str(pre);
            }
            if let Some(build) = &build {
                raw.push('+');
                raw.push_str(build);
            }

            let reference = semver::Version::parse(&raw).unwrap();
            let ours = ParsedVersion::parse(&raw).unwrap();

            prop_assert_eq!(ours.major, reference.major);
            prop_assert_eq!(ours.minor, reference.minor);
            prop_assert_eq!(ours.patch, reference.patch);
            prop_assert_eq!(ours.prerelease.join("."), reference.pre.as_str());
        }

        #[test]
        fn display_drops_only_build_metadata(
            major in 0u64..1000,
            minor in 0u64..1000,
            patch in 0u64..1000,
            pre in "[a-z]{1,5}\\.[0-9]{1,3}",
        ) {
            let raw = format!("{}.{}.{}-{}", major, minor, patch, pre);
            let with_build = format!("{}+ci.42", raw);
            prop_assert_eq!(ParsedVersion::parse(&with_build).unwrap().to_string(), raw);
        }
    }
}
