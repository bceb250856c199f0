// crates/ddc-core/src/model.rs

//! Value types shared across the engine.
//!
//! Everything here is request-scoped: created, consumed and dropped within a
//! single computation. Validation happens at construction so the codec and
//! the orchestrator can stay total over well-formed values.

use serde::{Deserialize, Serialize};

use crate::error::{DdcError, Result};

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

/// A validated geographic coordinate.
///
/// Both components are finite; latitude is within `[-90, 90]` and longitude
/// within `[-180, 180]`, bounds inclusive. Whether the point is addressable
/// at all (inside the national bounding box) is a separate question answered
/// by the [`crate::locate::AdministrativeLocator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting NaN/infinite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`DdcError::InvalidCoordinate`] when either component is
    /// non-finite or outside the valid global range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DdcError::InvalidCoordinate(format!(
                "components must be finite, got ({latitude}, {longitude})"
            )));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DdcError::InvalidCoordinate(format!(
                "latitude {latitude} outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DdcError::InvalidCoordinate(format!(
                "longitude {longitude} outside [-180, 180]"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Coordinate::new(raw.latitude, raw.longitude).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

// ---------------------------------------------------------------------------
// Administrative match
// ---------------------------------------------------------------------------

/// Resolved administrative context: a state code plus the bare LGA code.
///
/// `state_code` is two ASCII letters (e.g. `LA`); `lga_code` is the 2–3
/// digit identifier with any state prefix already stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrativeMatch {
    state_code: String,
    lga_code: String,
}

impl AdministrativeMatch {
    /// Build a match from raw parts, uppercasing the state code.
    ///
    /// # Errors
    ///
    /// Returns [`DdcError::MalformedCode`] when the state code is not two
    /// ASCII letters or the LGA code is not 2–3 digits.
    pub fn new(state_code: &str, lga_code: &str) -> Result<Self> {
        let state = state_code.trim().to_ascii_uppercase();
        if state.len() != 2 || !state.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DdcError::malformed(
                state_code,
                "state code must be two ASCII letters",
            ));
        }
        let lga = lga_code.trim();
        if !(2..=3).contains(&lga.len()) || !lga.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DdcError::malformed(
                lga_code,
                "LGA code must be 2-3 digits",
            ));
        }
        Ok(Self {
            state_code: state,
            lga_code: lga.to_string(),
        })
    }

    pub fn state_code(&self) -> &str {
        &self.state_code
    }

    pub fn lga_code(&self) -> &str {
        &self.lga_code
    }
}

impl<'de> Deserialize<'de> for AdministrativeMatch {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            state_code: String,
            lga_code: String,
        }
        let raw = Raw::deserialize(deserializer)?;
        AdministrativeMatch::new(&raw.state_code, &raw.lga_code)
            .map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Area identification
// ---------------------------------------------------------------------------

/// The three mutually exclusive area-identification strategies.
///
/// The wire prefixes are uneven on purpose: `Z` is a single character while
/// `STR` and `LMK` are three, so parsing must check the longer prefixes
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaType {
    /// Named street.
    #[serde(rename = "STR")]
    Street,
    /// Numbered zone.
    #[serde(rename = "Z")]
    Zone,
    /// Landmark-anchored area.
    #[serde(rename = "LMK")]
    Landmark,
}

impl AreaType {
    /// Wire prefix embedded in the DDC area segment.
    pub const fn prefix(&self) -> &'static str {
        match self {
            AreaType::Street => "STR",
            AreaType::Zone => "Z",
            AreaType::Landmark => "LMK",
        }
    }

    /// Split an area segment into its type and the remaining digits.
    ///
    /// Checks the three-character prefixes before `Z`; longest prefix wins.
    pub fn split_segment(segment: &str) -> Option<(AreaType, &str)> {
        for ty in [AreaType::Street, AreaType::Landmark, AreaType::Zone] {
            if let Some(rest) = segment.strip_prefix(ty.prefix()) {
                return Some((ty, rest));
            }
        }
        None
    }
}

impl std::fmt::Display for AreaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// An area classification: strategy plus the zero-padded 3-digit area code.
///
/// The code is normalized at construction, so encode→decode round-trips
/// reproduce the identifier exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaIdentifier {
    area_type: AreaType,
    #[serde(rename = "areaCode")]
    code: String,
}

impl AreaIdentifier {
    /// Build an identifier from a numeric code string, zero-padding to
    /// three digits.
    ///
    /// # Errors
    ///
    /// Returns [`DdcError::MalformedCode`] when `code` is not a number in
    /// `0..=999`.
    pub fn new(area_type: AreaType, code: &str) -> Result<Self> {
        let trimmed = code.trim();
        let value: u16 = trimmed
            .parse()
            .ok()
            .filter(|v| *v <= 999)
            .ok_or_else(|| {
                DdcError::malformed(trimmed, "area code must be a number in 0..=999")
            })?;
        Ok(Self::from_number(area_type, value))
    }

    /// Build an identifier from a numeric code. Values above 999 wrap into
    /// range, keeping this constructor total for classifier implementations.
    pub fn from_number(area_type: AreaType, code: u16) -> Self {
        Self {
            area_type,
            code: format!("{:03}", code % 1000),
        }
    }

    pub fn area_type(&self) -> AreaType {
        self.area_type
    }

    /// Zero-padded 3-digit code, e.g. `001`.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl std::fmt::Display for AreaIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.area_type.prefix(), self.code)
    }
}

// ---------------------------------------------------------------------------
// Sequence number
// ---------------------------------------------------------------------------

/// A 4-digit location number, unique within its allocation scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SequenceNumber(String);

impl SequenceNumber {
    /// Build from a counter value.
    ///
    /// # Errors
    ///
    /// Returns [`DdcError::MalformedCode`] when `value` exceeds 9999.
    pub fn new(value: u16) -> Result<Self> {
        if value > 9999 {
            return Err(DdcError::malformed(
                value.to_string(),
                "sequence value exceeds 9999",
            ));
        }
        Ok(Self(format!("{value:04}")))
    }

    /// Parse a wire segment: exactly four ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns [`DdcError::MalformedCode`] otherwise.
    pub fn parse(segment: &str) -> Result<Self> {
        if segment.len() != 4 || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DdcError::malformed(
                segment,
                "sequence must be exactly 4 digits",
            ));
        }
        Ok(Self(segment.to_string()))
    }

    /// Infallible constructor for allocator internals; callers guarantee
    /// the 0..=9999 invariant.
    pub(crate) fn from_counter(value: u16) -> Self {
        debug_assert!(value <= 9999);
        Self(format!("{value:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the sequence.
    pub fn value(&self) -> u16 {
        // Invariant: always 4 ASCII digits.
        self.0.parse().unwrap_or(0)
    }
}

impl std::fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SequenceNumber {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        SequenceNumber::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Decoded code components
// ---------------------------------------------------------------------------

/// The typed components of a parsed DDC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DdcComponents {
    #[serde(flatten)]
    pub admin: AdministrativeMatch,
    #[serde(flatten)]
    pub area: AreaIdentifier,
    /// Historical field name from the address schema.
    #[serde(rename = "locationNumber")]
    pub sequence: SequenceNumber,
}

// ---------------------------------------------------------------------------
// Rural address result
// ---------------------------------------------------------------------------

/// Fixed reference catalogs offered alongside a generated rural address.
///
/// Static data, not query results: landmark types, compass directions,
/// village-name variants derived from the city, and the traditional-naming
/// lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedComponents {
    pub landmarks: Vec<String>,
    pub directions: Vec<String>,
    pub villages: Vec<String>,
    pub traditional: Vec<String>,
}

/// A previously recorded address found near the requested coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyAddress {
    pub address: String,
    /// Great-circle distance, rounded to two decimal places.
    pub distance_km: f64,
    pub code: String,
}

/// Everything the rural generator produces for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuralAddressResult {
    pub primary_address: String,
    /// Deduplicated, insertion order preserved.
    pub alternative_addresses: Vec<String>,
    pub coordinate_description: String,
    pub suggested_components: SuggestedComponents,
    /// Sorted by ascending distance; empty when the store is unreachable.
    pub nearby_addresses: Vec<NearbyAddress>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_accepts_inclusive_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn coordinate_rejects_out_of_range() {
        assert!(matches!(
            Coordinate::new(200.0, 3.3),
            Err(DdcError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            Coordinate::new(6.5, 181.0),
            Err(DdcError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn coordinate_rejects_nan() {
        assert!(Coordinate::new(f64::NAN, 3.3).is_err());
        assert!(Coordinate::new(6.5, f64::INFINITY).is_err());
    }

    #[test]
    fn admin_match_normalizes_state_case() {
        let m = AdministrativeMatch::new("la", "15").unwrap();
        assert_eq!(m.state_code(), "LA");
        assert_eq!(m.lga_code(), "15");
    }

    #[test]
    fn admin_match_rejects_bad_parts() {
        assert!(AdministrativeMatch::new("LAG", "15").is_err());
        assert!(AdministrativeMatch::new("LA", "1").is_err());
        assert!(AdministrativeMatch::new("LA", "01A").is_err());
    }

    #[test]
    fn area_identifier_zero_pads() {
        let a = AreaIdentifier::new(AreaType::Zone, "1").unwrap();
        assert_eq!(a.code(), "001");
        assert_eq!(a.to_string(), "Z001");
    }

    #[test]
    fn area_identifier_rejects_non_numeric() {
        assert!(AreaIdentifier::new(AreaType::Street, "abc").is_err());
        assert!(AreaIdentifier::new(AreaType::Street, "1000").is_err());
    }

    #[test]
    fn area_segment_split_is_longest_prefix_first() {
        assert_eq!(
            AreaType::split_segment("STR001"),
            Some((AreaType::Street, "001"))
        );
        assert_eq!(
            AreaType::split_segment("LMK250"),
            Some((AreaType::Landmark, "250"))
        );
        assert_eq!(AreaType::split_segment("Z042"), Some((AreaType::Zone, "042")));
        assert_eq!(AreaType::split_segment("X001"), None);
    }

    #[test]
    fn sequence_number_formats_and_parses() {
        assert_eq!(SequenceNumber::new(42).unwrap().as_str(), "0042");
        assert_eq!(SequenceNumber::parse("0007").unwrap().value(), 7);
        assert!(SequenceNumber::parse("007").is_err());
        assert!(SequenceNumber::parse("00a7").is_err());
        assert!(SequenceNumber::new(10_000).is_err());
    }

    #[test]
    fn coordinate_deserialize_validates() {
        let ok: std::result::Result<Coordinate, _> =
            serde_json::from_str(r#"{"latitude": 6.5, "longitude": 3.3}"#);
        assert!(ok.is_ok());
        let bad: std::result::Result<Coordinate, _> =
            serde_json::from_str(r#"{"latitude": 200.0, "longitude": 3.3}"#);
        assert!(bad.is_err());
    }
}
