// crates/ddc-core/src/locate.rs

//! # Administrative Locator
//!
//! Resolves a coordinate to a (state, LGA) pair through the
//! [`LocationRegistry`] collaborator.
//!
//! Two modes exist. [`AdministrativeLocator::locate`] is strict: a point the
//! registry cannot place yields [`DdcError::LocationNotResolvable`].
//! [`AdministrativeLocator::locate_best_effort`] additionally degrades to
//! the registry-default state and its first LGA — the caller opts into an
//! answer that is valid but not geographically meaningful, and the fallback
//! is logged.

use std::sync::Arc;

use tracing::warn;

use crate::error::{DdcError, Result};
use crate::model::{AdministrativeMatch, Coordinate};
use crate::registry::LocationRegistry;

/// Inclusive national bounding box (Nigeria).
///
/// Points outside are rejected before any registry call: they cannot be
/// addressed by this system regardless of what the registry knows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NationalBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl NationalBounds {
    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&coord.latitude())
            && (self.min_lon..=self.max_lon).contains(&coord.longitude())
    }
}

/// Default bounds enclosing Nigerian territory.
pub const NIGERIA_BOUNDS: NationalBounds = NationalBounds {
    min_lat: 4.0,
    max_lat: 14.0,
    min_lon: 2.5,
    max_lon: 15.0,
};

/// Coordinate → administrative context resolution.
pub struct AdministrativeLocator {
    registry: Arc<dyn LocationRegistry>,
    bounds: NationalBounds,
}

impl AdministrativeLocator {
    pub fn new(registry: Arc<dyn LocationRegistry>) -> Self {
        Self {
            registry,
            bounds: NIGERIA_BOUNDS,
        }
    }

    /// Override the national bounding box (tests, multi-country setups).
    pub fn with_bounds(mut self, bounds: NationalBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Strict resolution: registry-known match or an explicit failure value.
    ///
    /// # Errors
    ///
    /// [`DdcError::LocationNotResolvable`] when the point is outside the
    /// national bounds or no region covers it;
    /// [`DdcError::StoreUnavailable`] when the registry cannot be reached.
    pub fn locate(&self, coord: Coordinate) -> Result<AdministrativeMatch> {
        self.check_bounds(coord)?;
        match self.registry.resolve(coord)? {
            Some(m) => Ok(m),
            None => Err(self.not_resolvable(coord)),
        }
    }

    /// Resolution with the registry-default fallback.
    ///
    /// When no region covers the point, falls back to the first state the
    /// registry lists and that state's first LGA. The result is always a
    /// registry-known pair, but carries no geographic meaning; callers must
    /// have asked for best-effort semantics explicitly.
    ///
    /// # Errors
    ///
    /// Same as [`AdministrativeLocator::locate`], except an uncovered point
    /// only fails when the registry itself is empty.
    pub fn locate_best_effort(&self, coord: Coordinate) -> Result<AdministrativeMatch> {
        self.check_bounds(coord)?;
        if let Some(m) = self.registry.resolve(coord)? {
            return Ok(m);
        }

        let states = self.registry.list_states()?;
        for state in &states {
            let lgas = self.registry.list_lgas(&state.code)?;
            if let Some(lga) = lgas.first() {
                warn!(
                    latitude = coord.latitude(),
                    longitude = coord.longitude(),
                    state = %state.code,
                    lga = %lga.bare_code(),
                    "no regional match; degrading to registry-default state/LGA"
                );
                return AdministrativeMatch::new(&state.code, lga.bare_code());
            }
        }
        Err(self.not_resolvable(coord))
    }

    fn check_bounds(&self, coord: Coordinate) -> Result<()> {
        if self.bounds.contains(coord) {
            Ok(())
        } else {
            Err(self.not_resolvable(coord))
        }
    }

    fn not_resolvable(&self, coord: Coordinate) -> DdcError {
        DdcError::LocationNotResolvable {
            latitude: coord.latitude(),
            longitude: coord.longitude(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{BoundedRegistry, LgaInfo, StateInfo};

    fn locator() -> AdministrativeLocator {
        AdministrativeLocator::new(Arc::new(BoundedRegistry::new()))
    }

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn lagos_coordinate_resolves_to_la() {
        let m = locator().locate(coord(6.5, 3.3)).unwrap();
        assert_eq!(m.state_code(), "LA");
        assert_eq!(m.lga_code(), "015");
    }

    #[test]
    fn abuja_coordinate_resolves_to_fc() {
        let m = locator().locate(coord(9.0, 7.5)).unwrap();
        assert_eq!(m.state_code(), "FC");
        assert_eq!(m.lga_code(), "01");
    }

    #[test]
    fn point_outside_national_bounds_is_not_resolvable() {
        let err = locator().locate(coord(48.1, 11.5)).unwrap_err();
        assert!(matches!(err, DdcError::LocationNotResolvable { .. }));
    }

    #[test]
    fn strict_mode_refuses_uncovered_point() {
        // Inside Nigeria, outside every region box.
        let err = locator().locate(coord(5.5, 8.3)).unwrap_err();
        assert!(matches!(err, DdcError::LocationNotResolvable { .. }));
    }

    #[test]
    fn best_effort_falls_back_to_registry_default() {
        let m = locator().locate_best_effort(coord(5.5, 8.3)).unwrap();
        // First bundled state carrying LGAs is registry-order dependent but
        // must be a known pair with a bare LGA code.
        assert_eq!(m.state_code().len(), 2);
        assert!(m.lga_code().bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn best_effort_still_rejects_out_of_bounds() {
        let err = locator().locate_best_effort(coord(48.1, 11.5)).unwrap_err();
        assert!(matches!(err, DdcError::LocationNotResolvable { .. }));
    }

    struct EmptyRegistry;

    impl crate::registry::LocationRegistry for EmptyRegistry {
        fn list_states(&self) -> crate::Result<Vec<StateInfo>> {
            Ok(Vec::new())
        }
        fn list_lgas(&self, _state_code: &str) -> crate::Result<Vec<LgaInfo>> {
            Ok(Vec::new())
        }
        fn resolve(&self, _coord: Coordinate) -> crate::Result<Option<AdministrativeMatch>> {
            Ok(None)
        }
    }

    #[test]
    fn best_effort_with_empty_registry_is_not_resolvable() {
        let locator = AdministrativeLocator::new(Arc::new(EmptyRegistry));
        let err = locator.locate_best_effort(coord(6.5, 3.3)).unwrap_err();
        assert!(matches!(err, DdcError::LocationNotResolvable { .. }));
    }
}
