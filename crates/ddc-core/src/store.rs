// crates/ddc-core/src/store.rs

//! # Address Store
//!
//! Geo-proximity access to previously recorded addresses, consumed by the
//! rural generator's nearby-address search. [`AddressStore`] is the seam a
//! deployment implements over its persistence layer;
//! [`InMemoryAddressStore`] backs tests, demos and the CLI.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates via the haversine formula.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude().to_radians().cos()
            * b.latitude().to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// A previously recorded address with its coordinate and code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAddress {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub code: String,
}

/// Geo-proximity query over recorded addresses.
///
/// Implementations own their timeout policy; a query that cannot complete
/// reports [`crate::DdcError::StoreUnavailable`], which the rural path
/// degrades to an empty result.
pub trait AddressStore: Send + Sync {
    /// Addresses within `radius_km` of the coordinate, in no particular
    /// order.
    fn find_near(&self, coord: Coordinate, radius_km: f64) -> Result<Vec<StoredAddress>>;
}

/// Simple in-process store with linear haversine scans.
#[derive(Debug, Default)]
pub struct InMemoryAddressStore {
    entries: RwLock<Vec<StoredAddress>>,
}

impl InMemoryAddressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, entry: StoredAddress) {
        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push(entry);
    }

    pub fn len(&self) -> usize {
        match self.entries.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AddressStore for InMemoryAddressStore {
    fn find_near(&self, coord: Coordinate, radius_km: f64) -> Result<Vec<StoredAddress>> {
        let entries = match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Ok(entries
            .iter()
            .filter(|entry| {
                Coordinate::new(entry.latitude, entry.longitude)
                    .map(|stored| haversine_km(coord, stored) <= radius_km)
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn haversine_of_identical_points_is_zero() {
        let p = coord(6.5, 3.3);
        assert!(haversine_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn haversine_matches_known_distance() {
        // One degree of latitude is ~111.2 km.
        let d = haversine_km(coord(6.0, 3.3), coord(7.0, 3.3));
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn find_near_filters_by_radius() {
        let store = InMemoryAddressStore::new();
        store.insert(StoredAddress {
            address: "Close by".into(),
            latitude: 6.51,
            longitude: 3.3,
            code: "NG-LA-15-Z001-0001".into(),
        });
        store.insert(StoredAddress {
            address: "Far away".into(),
            latitude: 7.5,
            longitude: 3.3,
            code: "NG-OY-11-Z001-0001".into(),
        });

        let hits = store.find_near(coord(6.5, 3.3), 5.0).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].address, "Close by");
    }
}
