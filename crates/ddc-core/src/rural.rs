// crates/ddc-core/src/rural.rs

//! # Rural Address Generator
//!
//! Synthesizes human-readable descriptive addresses when formal addressing
//! data is absent: no street name, unmapped zone, open countryside.
//!
//! Three inputs feed the result: user-supplied free text (classified by
//! keyword patterns), a geo-proximity search over previously recorded
//! addresses, and the degree-minute rendering of the coordinate itself.
//! Everything degrades gracefully — a missing store or absent user text
//! never blocks returning a best-effort address.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::describe::dms_string;
use crate::model::{Coordinate, NearbyAddress, RuralAddressResult, SuggestedComponents};
use crate::store::{haversine_km, AddressStore};
use crate::text::fold_key;

/// Default search radius for the nearby-address query.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 5.0;

/// Upper bound on returned nearby addresses.
const MAX_NEARBY: usize = 5;

// ---------------------------------------------------------------------------
// Free-text classification
// ---------------------------------------------------------------------------

/// How a piece of user-supplied address text anchors the location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuralInputKind {
    /// "near X", "close to X", "beside X".
    Landmark,
    /// Compass word or distance unit followed by "of"/"from".
    Direction,
    /// Mentions a village, community or settlement.
    Village,
    /// Carries a token from the traditional-naming lexicon.
    Traditional,
    /// Nothing recognizable; fall back to coordinates.
    Coordinate,
}

/// Classification of user text with a heuristic confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedInput {
    pub kind: RuralInputKind,
    pub confidence: f64,
}

const LANDMARK_PHRASES: &[&str] = &["near", "close to", "beside"];
const DIRECTION_WORDS: &[&str] = &["north", "south", "east", "west", "km", "mile", "miles"];
const SETTLEMENT_WORDS: &[&str] = &["village", "community", "settlement"];
/// Hausa naming tokens common in northern addresses.
const TRADITIONAL_TOKENS: &[&str] = &[
    "unguwar", "gidan", "sabon", "tudun", "kasuwar", "magaji", "sarki",
];

/// Classify free text by keyword patterns — first match wins, tested over
/// the case/accent-folded form in this order: landmark proximity,
/// directional phrase, settlement word, traditional token, coordinate
/// fallback.
pub fn classify_input(input: &str) -> ClassifiedInput {
    let folded = fold_key(input);

    if LANDMARK_PHRASES.iter().any(|p| folded.contains(p)) {
        return ClassifiedInput {
            kind: RuralInputKind::Landmark,
            confidence: 0.8,
        };
    }

    let directional = DIRECTION_WORDS.iter().any(|word| {
        ["of", "from"]
            .iter()
            .any(|link| folded.contains(&format!("{word} {link}")))
    });
    if directional {
        return ClassifiedInput {
            kind: RuralInputKind::Direction,
            confidence: 0.85,
        };
    }

    if SETTLEMENT_WORDS.iter().any(|w| folded.contains(w)) {
        return ClassifiedInput {
            kind: RuralInputKind::Village,
            confidence: 0.9,
        };
    }

    if TRADITIONAL_TOKENS.iter().any(|t| folded.contains(t)) {
        return ClassifiedInput {
            kind: RuralInputKind::Traditional,
            confidence: 0.75,
        };
    }

    ClassifiedInput {
        kind: RuralInputKind::Coordinate,
        confidence: 0.5,
    }
}

// ---------------------------------------------------------------------------
// Address templates
// ---------------------------------------------------------------------------

/// Inputs for a landmark-anchored address.
#[derive(Debug, Default, Clone, Copy)]
pub struct LandmarkTemplate<'a> {
    pub primary_landmark: &'a str,
    pub secondary_landmark: Option<&'a str>,
    pub direction: Option<&'a str>,
    pub distance: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// Render a landmark-anchored address, e.g.
/// `Main Market, 2km North, near Health Centre (by the river)`.
pub fn landmark_address(opts: &LandmarkTemplate<'_>) -> String {
    let mut address = opts.primary_landmark.to_string();
    if let (Some(direction), Some(distance)) = (opts.direction, opts.distance) {
        address.push_str(&format!(", {distance} {direction}"));
    }
    if let Some(secondary) = opts.secondary_landmark {
        address.push_str(&format!(", near {secondary}"));
    }
    if let Some(description) = opts.description {
        address.push_str(&format!(" ({description})"));
    }
    address
}

/// Inputs for a direction-anchored address.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectionTemplate<'a> {
    pub reference_point: &'a str,
    pub direction: &'a str,
    pub distance: &'a str,
    pub additional_info: Option<&'a str>,
}

/// Render a direction-anchored address, e.g. `3km North of Ikorodu`.
pub fn direction_address(opts: &DirectionTemplate<'_>) -> String {
    let mut address = format!(
        "{} {} of {}",
        opts.distance, opts.direction, opts.reference_point
    );
    if let Some(info) = opts.additional_info {
        address.push_str(&format!(", {info}"));
    }
    address
}

/// Inputs for a village/area-anchored address.
#[derive(Debug, Default, Clone, Copy)]
pub struct VillageTemplate<'a> {
    pub village: &'a str,
    pub area: Option<&'a str>,
    pub quarter: Option<&'a str>,
    pub family_name: Option<&'a str>,
    pub local_name: Option<&'a str>,
}

/// Render a village-anchored address, e.g.
/// `Ikorodu, Outskirts Area, Oke Quarter, Balogun Compound (Oke-Eletu)`.
pub fn village_address(opts: &VillageTemplate<'_>) -> String {
    let mut address = opts.village.to_string();
    if let Some(area) = opts.area {
        address.push_str(&format!(", {area} Area"));
    }
    if let Some(quarter) = opts.quarter {
        address.push_str(&format!(", {quarter} Quarter"));
    }
    if let Some(family) = opts.family_name {
        address.push_str(&format!(", {family} Compound"));
    }
    if let Some(local) = opts.local_name {
        address.push_str(&format!(" ({local})"));
    }
    address
}

// ---------------------------------------------------------------------------
// Suggestion catalogs
// ---------------------------------------------------------------------------

const LANDMARK_SUGGESTIONS: &[&str] = &[
    "Main Market",
    "Primary School",
    "Health Centre",
    "Police Station",
    "Motor Park",
    "Church",
    "Mosque",
    "Community Center",
    "Water Borehole",
    "Village Square",
    "Post Office",
    "Bank Branch",
    "Filling Station",
    "River/Stream",
    "Hill/Mountain",
    "Farm Settlement",
    "Traditional Ruler's Palace",
    "Local Government Office",
];

const DIRECTION_SUGGESTIONS: &[&str] = &[
    "North",
    "South",
    "East",
    "West",
    "Northeast",
    "Northwest",
    "Southeast",
    "Southwest",
];

/// Traditional naming tokens with their common meanings:
/// Sabon Gari (new town), Tudun Wada (settlement area), Unguwar
/// (neighborhood), Gidan (compound), Kasuwar (market area), plus
/// title-holder areas.
const TRADITIONAL_SUGGESTIONS: &[&str] = &[
    "Sabon Gari",
    "Tudun Wada",
    "Unguwar",
    "Gidan",
    "Kasuwar",
    "Galadima",
    "Madaki",
    "Sarki",
    "Magaji",
];

/// Fixed reference catalogs for the given city — static data, not query
/// results.
pub fn suggested_components(city: &str) -> SuggestedComponents {
    SuggestedComponents {
        landmarks: LANDMARK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        directions: DIRECTION_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        villages: vec![
            format!("{city} Village"),
            format!("New {city}"),
            format!("Old {city}"),
            format!("{city} Ward"),
            format!("{city} Community"),
            format!("{city} Settlement"),
        ],
        traditional: TRADITIONAL_SUGGESTIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Descriptive-address generation over an [`AddressStore`].
pub struct RuralAddressGenerator {
    store: Arc<dyn AddressStore>,
    radius_km: f64,
}

impl RuralAddressGenerator {
    pub fn new(store: Arc<dyn AddressStore>) -> Self {
        Self {
            store,
            radius_km: DEFAULT_NEARBY_RADIUS_KM,
        }
    }

    /// Override the nearby-search radius.
    pub fn with_radius(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    /// Generate the full rural result for one request.
    ///
    /// The primary address is the user text when given (via the
    /// enhancement hook), otherwise the coordinate description. The
    /// alternatives are one candidate per template family plus the
    /// coordinate description, deduplicated in first-seen order.
    pub fn generate(
        &self,
        coord: Coordinate,
        city: &str,
        user_text: Option<&str>,
    ) -> RuralAddressResult {
        let coordinate_description =
            dms_string(coord.latitude(), coord.longitude(), Some(city));

        let primary_address = match user_text {
            Some(text) if !text.trim().is_empty() => enhance_primary(text),
            _ => coordinate_description.clone(),
        };

        let alternative_addresses = dedup_preserving(vec![
            landmark_address(&LandmarkTemplate {
                primary_landmark: &format!("{city} Area"),
                description: Some("Rural location with GPS coordinates"),
                ..Default::default()
            }),
            village_address(&VillageTemplate {
                village: city,
                area: Some("Outskirts"),
                local_name: Some("Exact location via coordinates"),
                ..Default::default()
            }),
            direction_address(&DirectionTemplate {
                reference_point: city,
                direction: "rural area",
                distance: "countryside",
                additional_info: Some("GPS location recorded"),
            }),
            coordinate_description.clone(),
        ]);

        RuralAddressResult {
            primary_address,
            alternative_addresses,
            coordinate_description,
            suggested_components: suggested_components(city),
            nearby_addresses: self.nearby(coord),
        }
    }

    /// Nearby-address search; store failures degrade to an empty list.
    fn nearby(&self, coord: Coordinate) -> Vec<NearbyAddress> {
        let rows = match self.store.find_near(coord, self.radius_km) {
            Ok(rows) => rows,
            Err(err) => {
                warn!(error = %err, "nearby-address search unavailable; continuing without it");
                return Vec::new();
            }
        };

        let mut hits: Vec<(f64, NearbyAddress)> = rows
            .into_iter()
            .filter_map(|row| {
                let stored = Coordinate::new(row.latitude, row.longitude).ok()?;
                let distance = haversine_km(coord, stored);
                if distance > self.radius_km {
                    return None;
                }
                Some((
                    distance,
                    NearbyAddress {
                        address: row.address,
                        distance_km: (distance * 100.0).round() / 100.0,
                        code: row.code,
                    },
                ))
            })
            .collect();

        hits.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(MAX_NEARBY);
        hits.into_iter().map(|(_, hit)| hit).collect()
    }
}

/// Enhancement hook for user-provided text.
///
/// Currently a pass-through that records the classification; the seam
/// where landmark grounding against nearby data would slot in.
fn enhance_primary(text: &str) -> String {
    let classified = classify_input(text);
    debug!(
        kind = ?classified.kind,
        confidence = classified.confidence,
        "classified user address text"
    );
    text.to_string()
}

fn dedup_preserving(candidates: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}
