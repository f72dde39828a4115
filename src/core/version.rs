//! Driver version parsing and comparison.
//!
//! NVIDIA driver versions are written as `major.minor` with a 3-digit major
//! and a 2-digit minor group (e.g. `456.71`). There is no patch component.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{NvduError, Result};

const MAJOR_DIGITS: usize = 3;
const MINOR_DIGITS: usize = 2;

/// A parsed `major.minor` driver version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriverVersion {
    pub major: u16,
    pub minor: u8,
}

impl DriverVersion {
    /// Parse a version string such as `"451.67"`
    ///
    /// Surrounding whitespace is ignored, anything else that is not exactly
    /// three digits, a dot and two digits is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(NvduError::version_parse(input, "version is empty"));
        }

        let (major, minor) = trimmed
            .split_once('.')
            .ok_or_else(|| NvduError::version_parse(input, "expected 'major.minor'"))?;

        if minor.contains('.') {
            return Err(NvduError::version_parse(
                input,
                "expected exactly two dot-separated groups",
            ));
        }

        let major = parse_group(input, major, MAJOR_DIGITS, "major")?;
        let minor = parse_group(input, minor, MINOR_DIGITS, "minor")?;

        Ok(Self {
            major,
            minor: minor as u8,
        })
    }
}

fn parse_group(input: &str, group: &str, digits: usize, label: &str) -> Result<u16> {
    if group.len() != digits || !group.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NvduError::version_parse(
            input,
            format!("{} group must be exactly {} digits", label, digits),
        ));
    }

    group
        .parse::<u16>()
        .map_err(|e| NvduError::version_parse(input, e.to_string()))
}

/// Compare two versions by major, then minor
pub fn compare(a: &DriverVersion, b: &DriverVersion) -> Ordering {
    a.major.cmp(&b.major).then(a.minor.cmp(&b.minor))
}

impl FromStr for DriverVersion {
    type Err = NvduError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DriverVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0mw$}.{:0nw$}",
            self.major,
            self.minor,
            mw = MAJOR_DIGITS,
            nw = MINOR_DIGITS
        )
    }
}
