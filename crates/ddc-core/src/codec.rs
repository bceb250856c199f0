// crates/ddc-core/src/codec.rs

//! # DDC Codec
//!
//! Encoding and parsing of the canonical code string
//! `NG-{state}-{lga}-{areaType}{areaCode}-{sequence}`, e.g.
//! `NG-LA-15-Z001-0042`.
//!
//! `encode` is total over validated inputs and deterministic (the sequence
//! component carries the only per-call variation). `decode` validates each
//! of the five segments and reports the offending one in a
//! [`DdcError::MalformedCode`] value — parse failures are recoverable
//! results, never panics, so callers can treat them as "legacy/foreign
//! code" rather than corruption.

use crate::error::{DdcError, Result};
use crate::model::{
    AdministrativeMatch, AreaIdentifier, AreaType, DdcComponents, SequenceNumber,
};

/// Country segment: this engine mints Nigerian codes only.
pub const COUNTRY_PREFIX: &str = "NG";

const SEGMENT_COUNT: usize = 5;

/// Render the canonical DDC string.
///
/// Given well-formed inputs (guaranteed by the constructors of the
/// argument types) this always succeeds, and the same inputs always yield
/// the same string.
pub fn encode(
    admin: &AdministrativeMatch,
    area: &AreaIdentifier,
    sequence: &SequenceNumber,
) -> String {
    format!(
        "{COUNTRY_PREFIX}-{}-{}-{}{}-{}",
        admin.state_code(),
        admin.lga_code(),
        area.area_type().prefix(),
        area.code(),
        sequence
    )
}

/// Parse a code string back into typed components.
///
/// # Errors
///
/// [`DdcError::MalformedCode`] when the string violates the 5-segment
/// grammar: wrong segment count, country prefix other than `NG`, bad state
/// or LGA shape, unrecognized area-type prefix, non-3-digit area code, or
/// a non-numeric final segment. The error names the offending segment.
pub fn decode(code: &str) -> Result<DdcComponents> {
    let segments: Vec<&str> = code.split('-').collect();
    if segments.len() != SEGMENT_COUNT {
        return Err(DdcError::malformed(
            code,
            format!(
                "expected {SEGMENT_COUNT} hyphen-separated segments, found {}",
                segments.len()
            ),
        ));
    }

    if segments[0] != COUNTRY_PREFIX {
        return Err(DdcError::malformed(
            segments[0],
            format!("country segment must be `{COUNTRY_PREFIX}`"),
        ));
    }

    let admin = AdministrativeMatch::new(segments[1], segments[2])?;

    let area_segment = segments[3];
    let (area_type, digits) = AreaType::split_segment(area_segment).ok_or_else(|| {
        DdcError::malformed(area_segment, "area segment must start with STR, LMK or Z")
    })?;
    if digits.len() != 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DdcError::malformed(
            area_segment,
            "area code must be exactly 3 digits",
        ));
    }
    let area = AreaIdentifier::new(area_type, digits)?;

    let sequence = SequenceNumber::parse(segments[4])?;

    Ok(DdcComponents {
        admin,
        area,
        sequence,
    })
}
