//! Update decision between the installed and the catalog driver.

use std::cmp::Ordering;
use std::fmt;

use crate::core::version::{self, DriverVersion};

/// Why a decision could not be trusted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// One of the version strings is malformed
    Unparseable { input: String, reason: String },
    /// The catalog offered an older driver than the installed one, which
    /// means the series, family or OS filter selected the wrong product
    CandidateOlder {
        current: DriverVersion,
        candidate: DriverVersion,
    },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Unparseable { input, reason } => {
                write!(f, "cannot parse version '{}': {}", input, reason)
            }
            InvalidReason::CandidateOlder { current, candidate } => write!(
                f,
                "catalog returned {} which is older than installed {}",
                candidate, current
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateDecision {
    UpToDate,
    UpdateAvailable(DriverVersion),
    Invalid(InvalidReason),
}

impl UpdateDecision {
    pub fn is_invalid(&self) -> bool {
        matches!(self, UpdateDecision::Invalid(_))
    }
}

/// Compare the installed driver version against the catalog candidate
pub fn decide(current: &str, candidate: &str) -> UpdateDecision {
    let parse = |input: &str| {
        DriverVersion::parse(input).map_err(|e| match e {
            crate::error::NvduError::VersionParse { input, reason } => {
                InvalidReason::Unparseable { input, reason }
            }
            other => InvalidReason::Unparseable {
                input: input.to_string(),
                reason: other.to_string(),
            },
        })
    };

    let (current, candidate) = match (parse(current), parse(candidate)) {
        (Ok(current), Ok(candidate)) => (current, candidate),
        (Err(reason), _) | (_, Err(reason)) => return UpdateDecision::Invalid(reason),
    };

    decide_parsed(current, candidate)
}

/// Same as [`decide`] for versions that are already parsed
pub fn decide_parsed(current: DriverVersion, candidate: DriverVersion) -> UpdateDecision {
    let decision = match version::compare(&candidate, &current) {
        Ordering::Equal => UpdateDecision::UpToDate,
        Ordering::Greater => UpdateDecision::UpdateAvailable(candidate),
        Ordering::Less => {
            UpdateDecision::Invalid(InvalidReason::CandidateOlder { current, candidate })
        }
    };

    log::debug!("Decision for {} -> {}: {:?}", current, candidate, decision);

    decision
}
