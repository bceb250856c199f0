// crates/ddc-core/src/registry.rs

//! # Location Registry
//!
//! The administrative boundary collaborator: state and LGA listings plus
//! coordinate-to-region resolution.
//!
//! [`LocationRegistry`] is the seam real deployments implement over actual
//! boundary geometry (point-in-polygon lookups against a GIS dataset or a
//! database). The bundled [`BoundedRegistry`] resolves coordinates against
//! hardcoded regional bounding boxes and is intentionally test-double
//! quality: it returns *some* registry-known pair or nothing, never a
//! geographically authoritative answer.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{AdministrativeMatch, Coordinate};

/// A state as listed by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateInfo {
    pub code: String,
    pub name: String,
}

/// A local-government area as listed by the registry.
///
/// `code` may carry a state prefix (`LA-015`); [`LgaInfo::bare_code`]
/// strips it to the form embedded in a DDC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LgaInfo {
    pub code: String,
    pub name: String,
}

impl LgaInfo {
    /// The LGA code without any `XX-` state prefix.
    pub fn bare_code(&self) -> &str {
        match self.code.split_once('-') {
            Some((prefix, rest)) if prefix.len() == 2 => rest,
            _ => &self.code,
        }
    }
}

/// Administrative boundary lookups consumed by the locator.
///
/// Implementations own their timeout policy; a lookup that cannot complete
/// reports [`crate::DdcError::StoreUnavailable`] rather than hanging.
pub trait LocationRegistry: Send + Sync {
    /// All states known to the registry.
    fn list_states(&self) -> Result<Vec<StateInfo>>;

    /// All LGAs belonging to a state, empty when the state is unknown.
    fn list_lgas(&self, state_code: &str) -> Result<Vec<LgaInfo>>;

    /// Resolve a coordinate to its administrative context, `None` when the
    /// point falls outside every known region.
    fn resolve(&self, coord: Coordinate) -> Result<Option<AdministrativeMatch>>;
}

// ---------------------------------------------------------------------------
// Bundled dataset
// ---------------------------------------------------------------------------

struct StateRow {
    code: &'static str,
    name: &'static str,
}

struct LgaRow {
    state: &'static str,
    code: &'static str,
    name: &'static str,
}

struct RegionRow {
    state: &'static str,
    lga: &'static str,
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl RegionRow {
    fn contains(&self, coord: Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&coord.latitude())
            && (self.min_lon..=self.max_lon).contains(&coord.longitude())
    }
}

/// The 36 states plus the Federal Capital Territory.
const STATES: &[StateRow] = &[
    StateRow { code: "AB", name: "Abia" },
    StateRow { code: "AD", name: "Adamawa" },
    StateRow { code: "AK", name: "Akwa Ibom" },
    StateRow { code: "AN", name: "Anambra" },
    StateRow { code: "BA", name: "Bauchi" },
    StateRow { code: "BY", name: "Bayelsa" },
    StateRow { code: "BE", name: "Benue" },
    StateRow { code: "BO", name: "Borno" },
    StateRow { code: "CR", name: "Cross River" },
    StateRow { code: "DE", name: "Delta" },
    StateRow { code: "EB", name: "Ebonyi" },
    StateRow { code: "ED", name: "Edo" },
    StateRow { code: "EK", name: "Ekiti" },
    StateRow { code: "EN", name: "Enugu" },
    StateRow { code: "FC", name: "Federal Capital Territory" },
    StateRow { code: "GO", name: "Gombe" },
    StateRow { code: "IM", name: "Imo" },
    StateRow { code: "JI", name: "Jigawa" },
    StateRow { code: "KD", name: "Kaduna" },
    StateRow { code: "KN", name: "Kano" },
    StateRow { code: "KT", name: "Katsina" },
    StateRow { code: "KE", name: "Kebbi" },
    StateRow { code: "KO", name: "Kogi" },
    StateRow { code: "KW", name: "Kwara" },
    StateRow { code: "LA", name: "Lagos" },
    StateRow { code: "NA", name: "Nasarawa" },
    StateRow { code: "NI", name: "Niger" },
    StateRow { code: "OG", name: "Ogun" },
    StateRow { code: "ON", name: "Ondo" },
    StateRow { code: "OS", name: "Osun" },
    StateRow { code: "OY", name: "Oyo" },
    StateRow { code: "PL", name: "Plateau" },
    StateRow { code: "RI", name: "Rivers" },
    StateRow { code: "SO", name: "Sokoto" },
    StateRow { code: "TA", name: "Taraba" },
    StateRow { code: "YO", name: "Yobe" },
    StateRow { code: "ZA", name: "Zamfara" },
];

/// LGA rows for the states the regional bounding boxes cover.
const LGAS: &[LgaRow] = &[
    LgaRow { state: "LA", code: "LA-015", name: "Ikeja" },
    LgaRow { state: "LA", code: "LA-008", name: "Ikorodu" },
    LgaRow { state: "LA", code: "LA-012", name: "Lagos Island" },
    LgaRow { state: "FC", code: "FC-01", name: "Abuja Municipal" },
    LgaRow { state: "FC", code: "FC-02", name: "Gwagwalada" },
    LgaRow { state: "KN", code: "KN-024", name: "Kano Municipal" },
    LgaRow { state: "KN", code: "KN-028", name: "Nassarawa" },
    LgaRow { state: "KD", code: "KD-008", name: "Kaduna North" },
    LgaRow { state: "KD", code: "KD-009", name: "Kaduna South" },
    LgaRow { state: "OY", code: "OY-011", name: "Ibadan North" },
    LgaRow { state: "OY", code: "OY-014", name: "Ibadan South-West" },
    LgaRow { state: "RI", code: "RI-017", name: "Port Harcourt" },
    LgaRow { state: "EN", code: "EN-006", name: "Enugu North" },
];

/// Coarse bounding boxes around major urban regions.
///
/// These mirror the latitude/longitude bands the original deployment
/// shipped with; each box carries exactly one (state, LGA) pair, so the
/// precise path can never face a multi-LGA ambiguity.
const REGIONS: &[RegionRow] = &[
    RegionRow { state: "LA", lga: "LA-015", min_lat: 6.35, max_lat: 6.70, min_lon: 3.00, max_lon: 4.00 },
    RegionRow { state: "FC", lga: "FC-01", min_lat: 8.25, max_lat: 9.45, min_lon: 6.75, max_lon: 7.65 },
    RegionRow { state: "KD", lga: "KD-008", min_lat: 10.40, max_lat: 10.70, min_lon: 7.30, max_lon: 7.60 },
    RegionRow { state: "KN", lga: "KN-024", min_lat: 11.80, max_lat: 12.25, min_lon: 8.30, max_lon: 8.80 },
    RegionRow { state: "OY", lga: "OY-011", min_lat: 7.20, max_lat: 7.60, min_lon: 3.70, max_lon: 4.10 },
    RegionRow { state: "RI", lga: "RI-017", min_lat: 4.70, max_lat: 4.95, min_lon: 6.90, max_lon: 7.10 },
    RegionRow { state: "EN", lga: "EN-006", min_lat: 6.35, max_lat: 6.55, min_lon: 7.45, max_lon: 7.60 },
];

static LGA_INDEX: Lazy<HashMap<&'static str, Vec<&'static LgaRow>>> = Lazy::new(|| {
    let mut index: HashMap<&'static str, Vec<&'static LgaRow>> = HashMap::new();
    for row in LGAS {
        index.entry(row.state).or_default().push(row);
    }
    index
});

/// Registry over the bundled state/LGA tables and regional bounding boxes.
///
/// Keep this as a development/test double; production deployments replace
/// it with a [`LocationRegistry`] backed by real boundary geometry.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoundedRegistry;

impl BoundedRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl LocationRegistry for BoundedRegistry {
    fn list_states(&self) -> Result<Vec<StateInfo>> {
        Ok(STATES
            .iter()
            .map(|row| StateInfo {
                code: row.code.to_string(),
                name: row.name.to_string(),
            })
            .collect())
    }

    fn list_lgas(&self, state_code: &str) -> Result<Vec<LgaInfo>> {
        let state = state_code.trim().to_ascii_uppercase();
        Ok(LGA_INDEX
            .get(state.as_str())
            .into_iter()
            .flatten()
            .map(|row| LgaInfo {
                code: row.code.to_string(),
                name: row.name.to_string(),
            })
            .collect())
    }

    fn resolve(&self, coord: Coordinate) -> Result<Option<AdministrativeMatch>> {
        for region in REGIONS {
            if region.contains(coord) {
                let lga = LgaInfo {
                    code: region.lga.to_string(),
                    name: String::new(),
                };
                return AdministrativeMatch::new(region.state, lga.bare_code()).map(Some);
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_states() {
        let states = BoundedRegistry::new().list_states().unwrap();
        assert_eq!(states.len(), 37);
        assert!(states.iter().any(|s| s.code == "LA" && s.name == "Lagos"));
        assert!(states.iter().any(|s| s.code == "FC"));
    }

    #[test]
    fn lists_lgas_for_known_state() {
        let lgas = BoundedRegistry::new().list_lgas("la").unwrap();
        assert!(lgas.iter().any(|l| l.name == "Ikeja"));
    }

    #[test]
    fn unknown_state_has_no_lgas() {
        assert!(BoundedRegistry::new().list_lgas("XX").unwrap().is_empty());
    }

    #[test]
    fn bare_code_strips_state_prefix() {
        let lga = LgaInfo { code: "LA-015".into(), name: "Ikeja".into() };
        assert_eq!(lga.bare_code(), "015");
        let plain = LgaInfo { code: "01".into(), name: "AMAC".into() };
        assert_eq!(plain.bare_code(), "01");
    }

    #[test]
    fn resolves_lagos_box() {
        let coord = Coordinate::new(6.5, 3.3).unwrap();
        let m = BoundedRegistry::new().resolve(coord).unwrap().unwrap();
        assert_eq!(m.state_code(), "LA");
        assert_eq!(m.lga_code(), "015");
    }

    #[test]
    fn unmapped_point_resolves_to_none() {
        // Inside Nigeria but outside every bundled region box.
        let coord = Coordinate::new(5.5, 8.3).unwrap();
        assert!(BoundedRegistry::new().resolve(coord).unwrap().is_none());
    }
}
