//! Package version strings
//!
//! Parses the `[v]X.Y.Z[-suffix]` format used by the `version` field of
//! `composer.json` into a structured, comparable [`Version`].
//!
//! The suffix grammar is deliberately narrow: only the exact tokens `dev`,
//! `patch`/`p`, `alpha`/`a`, `beta`/`b` and `RC` are accepted. Numeric
//! qualifiers such as `alpha3` are rejected as unknown suffixes.
//!
//! # Example
//!
//! ```
//! use composer_version::Version;
//!
//! let version = Version::parse("v2.0.4-p").unwrap();
//! assert_eq!((version.major, version.minor, version.micro), (2, 0, 4));
//! assert!(version.is_patch());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shortest string that can hold `X.Y.Z`.
const MIN_LEN: usize = 5;

/// Version parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("version is empty")]
    Empty,

    #[error("version must be in the format [v]X.Y.Z[-suffix]")]
    Malformed,

    #[error("unknown version suffix '{0}'")]
    UnknownSuffix(String),

    /// `index` is 1-based: 1 is major, 2 is minor, 3 is micro.
    #[error("part {index} ('{value}') of the version must be a number")]
    NonNumeric { index: usize, value: String },
}

/// Pre-release or post-release marker following the numeric part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suffix {
    Dev,
    Patch,
    Alpha,
    Beta,
    Rc,
}

impl Suffix {
    /// Canonical token used when rendering a version.
    pub fn as_str(&self) -> &'static str {
        match self {
            Suffix::Dev => "dev",
            Suffix::Patch => "patch",
            Suffix::Alpha => "alpha",
            Suffix::Beta => "beta",
            Suffix::Rc => "RC",
        }
    }

    // dev < alpha < beta < RC < (final) < patch
    fn stability_rank(suffix: Option<Suffix>) -> u8 {
        match suffix {
            Some(Suffix::Dev) => 0,
            Some(Suffix::Alpha) => 1,
            Some(Suffix::Beta) => 2,
            Some(Suffix::Rc) => 3,
            None => 4,
            Some(Suffix::Patch) => 5,
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suffix {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Suffix::Dev),
            "patch" | "p" => Ok(Suffix::Patch),
            "alpha" | "a" => Ok(Suffix::Alpha),
            "beta" | "b" => Ok(Suffix::Beta),
            "RC" => Ok(Suffix::Rc),
            _ => Err(VersionError::UnknownSuffix(s.to_string())),
        }
    }
}

/// A parsed package version.
///
/// Holding the suffix as an `Option` keeps the five suffix flags mutually
/// exclusive; the `is_*` accessors expose them individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub micro: u64,
    pub suffix: Option<Suffix>,
}

impl Version {
    /// Create a final-release version.
    pub fn new(major: u64, minor: u64, micro: u64) -> Self {
        Self {
            major,
            minor,
            micro,
            suffix: None,
        }
    }

    /// Return a copy of this version carrying `suffix`.
    pub fn with_suffix(self, suffix: Suffix) -> Self {
        Self {
            suffix: Some(suffix),
            ..self
        }
    }

    /// Parse a version string in the `[v]X.Y.Z[-suffix]` format.
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        if raw.is_empty() {
            return Err(VersionError::Empty);
        }

        if raw.len() < MIN_LEN {
            return Err(VersionError::Malformed);
        }

        let raw = raw.strip_prefix('v').unwrap_or(raw);

        let segments: Vec<&str> = raw.split('-').collect();
        let (numbers, suffix) = match segments.as_slice() {
            [numbers] => (*numbers, None),
            [numbers, suffix] => (*numbers, Some(suffix.parse::<Suffix>()?)),
            _ => return Err(VersionError::Malformed),
        };

        let parts: Vec<&str> = numbers.split('.').collect();
        let [major, minor, micro] = parts.as_slice() else {
            return Err(VersionError::Malformed);
        };

        Ok(Self {
            major: parse_component(1, major)?,
            minor: parse_component(2, minor)?,
            micro: parse_component(3, micro)?,
            suffix,
        })
    }

    pub fn is_dev(&self) -> bool {
        self.suffix == Some(Suffix::Dev)
    }

    pub fn is_patch(&self) -> bool {
        self.suffix == Some(Suffix::Patch)
    }

    pub fn is_alpha(&self) -> bool {
        self.suffix == Some(Suffix::Alpha)
    }

    pub fn is_beta(&self) -> bool {
        self.suffix == Some(Suffix::Beta)
    }

    pub fn is_rc(&self) -> bool {
        self.suffix == Some(Suffix::Rc)
    }

    /// True when any suffix flag is set.
    pub fn has_suffix(&self) -> bool {
        self.suffix.is_some()
    }

    /// True for final releases and patch releases.
    pub fn is_stable(&self) -> bool {
        matches!(self.suffix, None | Some(Suffix::Patch))
    }

    fn sort_key(&self) -> (u64, u64, u64, u8) {
        (
            self.major,
            self.minor,
            self.micro,
            Suffix::stability_rank(self.suffix),
        )
    }
}

/// Parse a version string. Shorthand for [`Version::parse`].
pub fn parse_version(raw: &str) -> Result<Version, VersionError> {
    Version::parse(raw)
}

/// Components are limited to the non-negative `i64` range.
fn parse_component(index: usize, value: &str) -> Result<u64, VersionError> {
    value
        .parse::<i64>()
        .ok()
        .and_then(|n| u64::try_from(n).ok())
        .ok_or_else(|| VersionError::NonNumeric {
            index,
            value: value.to_string(),
        })
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if let Some(suffix) = self.suffix {
            write!(f, "-{}", suffix)?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
