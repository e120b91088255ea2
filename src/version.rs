//! Release version handling
//!
//! A release is tagged with a dotted version ("2.14.3"). Only the first two
//! numeric components matter to the checklist: they form the version family
//! ("2.14") whose issue carries the checklist for every patch release in
//! that line.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur while parsing a release version
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The version string was empty
    #[error("empty version string")]
    Empty,

    /// The version string has no minor component
    #[error("version {0:?} must have at least major.minor components")]
    MissingMinor(String),

    /// A significant component was not a number
    #[error("non-numeric component {component:?} in version {version:?}")]
    NotNumeric {
        /// The full version string
        version: String,
        /// The offending component
        component: String,
    },
}

/// A parsed release version
///
/// Components beyond major.minor are kept verbatim in the raw string but are
/// never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    raw: String,
    major: u32,
    minor: u32,
}

impl ReleaseVersion {
    /// Parse a dotted version string (`MAJOR.MINOR[.PATCH...]`)
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VersionError::Empty);
        }

        let mut parts = trimmed.split('.');
        let major = parse_component(trimmed, parts.next())?;
        let minor = match parts.next() {
            Some(part) => parse_component(trimmed, Some(part))?,
            None => return Err(VersionError::MissingMinor(trimmed.to_string())),
        };

        Ok(Self {
            raw: trimmed.to_string(),
            major,
            minor,
        })
    }

    /// The full version string as given
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Major component
    #[must_use]
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// Minor component
    #[must_use]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    /// The version family this release belongs to
    #[must_use]
    pub const fn family(&self) -> VersionFamily {
        VersionFamily {
            major: self.major,
            minor: self.minor,
        }
    }
}

impl FromStr for ReleaseVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_component(version: &str, part: Option<&str>) -> Result<u32, VersionError> {
    let part = part.unwrap_or("");
    part.parse().map_err(|_| VersionError::NotNumeric {
        version: version.to_string(),
        component: part.to_string(),
    })
}

/// A major.minor version family
///
/// The key under which a release line's checklist issue is filed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionFamily {
    /// Major component
    pub major: u32,
    /// Minor component
    pub minor: u32,
}

impl VersionFamily {
    /// The title fragment identifying this family's checklist issue,
    /// e.g. `[2.14.x]`
    #[must_use]
    pub fn title_pattern(&self) -> String {
        format!("[{}.{}.x]", self.major, self.minor)
    }
}

impl fmt::Display for VersionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
