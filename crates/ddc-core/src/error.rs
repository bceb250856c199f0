// crates/ddc-core/src/error.rs

//! Error taxonomy for the DDC engine.
//!
//! Lookup failures that prevent minting a code are explicit `Err` values so
//! the orchestrator can decide per-context whether a missing code is
//! acceptable. Degradations in the rural path (missing store data, missing
//! user text) are absorbed locally and never surface here.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DdcError>;

/// All recoverable failures the core can report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DdcError {
    /// Latitude or longitude is non-finite or outside the valid global range.
    /// Detected at the [`crate::Coordinate`] boundary; never retried.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Coordinate is valid but no administrative match exists (outside the
    /// national bounds, or the registry has nothing for it). Callers may
    /// recover, e.g. by asking the user for a manual state/LGA.
    #[error("no administrative match for ({latitude}, {longitude})")]
    LocationNotResolvable { latitude: f64, longitude: f64 },

    /// A code string does not match the 5-segment DDC grammar. Carries the
    /// offending segment so callers can distinguish legacy/foreign codes
    /// from data corruption.
    #[error("malformed code: segment `{segment}`: {reason}")]
    MalformedCode { segment: String, reason: String },

    /// A registry or address-store lookup failed (timeout, connection
    /// error). Non-fatal for rural generation; blocking for code minting.
    #[error("collaborator unavailable: {0}")]
    StoreUnavailable(String),

    /// A sequence scope has used all 9999 values. Hard failure: no further
    /// addresses can be minted in that scope without widening the sequence
    /// or re-partitioning the area.
    #[error("sequence scope `{scope}` exhausted")]
    SequenceExhausted { scope: String },
}

impl DdcError {
    pub(crate) fn malformed(segment: impl Into<String>, reason: impl Into<String>) -> Self {
        DdcError::MalformedCode {
            segment: segment.into(),
            reason: reason.into(),
        }
    }
}
