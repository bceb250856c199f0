// crates/ddc-core/src/enhanced.rs

//! # Enhanced Address Builder
//!
//! Top-level orchestration: one coordinate in, a structured address out.
//! The builder runs the formal pipeline (locate, classify, sequence,
//! encode) and, when the request looks rural, layers the descriptive
//! fallback from [`crate::rural`] on top. A coordinate outside registry
//! coverage still yields a usable address — the code field is simply
//! absent.

use std::sync::Arc;

use tracing::{debug, info};

use crate::area::AreaClassifier;
use crate::codec;
use crate::describe::dms_string;
use crate::error::{DdcError, Result};
use crate::locate::AdministrativeLocator;
use crate::model::{Coordinate, RuralAddressResult};
use crate::registry::LocationRegistry;
use crate::rural::{RuralAddressGenerator, DEFAULT_NEARBY_RADIUS_KM};
use crate::sequence::{SequenceScope, SequenceStore};
use crate::store::AddressStore;

/// Which pipeline produced the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AddressKind {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "rural_enhanced")]
    RuralEnhanced,
}

/// The display-oriented half of a build result.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponents {
    pub primary: String,
    pub alternatives: Vec<String>,
    #[serde(rename = "type")]
    pub kind: AddressKind,
    /// Degree-minute rendering of the request coordinate.
    pub coordinates: String,
}

/// Full result of one address build.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedAddress {
    /// The formal code, when the coordinate falls inside registry
    /// coverage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub address_components: AddressComponents,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rural_enhancements: Option<RuralAddressResult>,
}

/// Knobs for [`EnhancedAddressBuilder`].
#[derive(Debug, Clone, Copy)]
pub struct BuilderOptions {
    /// Fall back to the nearest covered state instead of refusing an
    /// in-bounds but unmapped coordinate.
    pub best_effort_locate: bool,
    pub nearby_radius_km: f64,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            best_effort_locate: false,
            nearby_radius_km: DEFAULT_NEARBY_RADIUS_KM,
        }
    }
}

/// Wires the locator, classifier, sequence store and rural generator
/// into one entry point.
pub struct EnhancedAddressBuilder {
    locator: AdministrativeLocator,
    classifier: Box<dyn AreaClassifier>,
    sequences: Arc<dyn SequenceStore>,
    rural: RuralAddressGenerator,
    options: BuilderOptions,
}

impl EnhancedAddressBuilder {
    pub fn new(
        registry: Arc<dyn LocationRegistry>,
        classifier: Box<dyn AreaClassifier>,
        sequences: Arc<dyn SequenceStore>,
        store: Arc<dyn AddressStore>,
    ) -> Self {
        Self::with_options(registry, classifier, sequences, store, BuilderOptions::default())
    }

    pub fn with_options(
        registry: Arc<dyn LocationRegistry>,
        classifier: Box<dyn AreaClassifier>,
        sequences: Arc<dyn SequenceStore>,
        store: Arc<dyn AddressStore>,
        options: BuilderOptions,
    ) -> Self {
        Self {
            locator: AdministrativeLocator::new(registry),
            classifier,
            sequences,
            rural: RuralAddressGenerator::new(store).with_radius(options.nearby_radius_km),
            options,
        }
    }

    /// Build an address for `coord`.
    ///
    /// `user_text` is the requester's own description, if any; `rural_hint`
    /// forces the rural pipeline even when text was provided. Absent text
    /// always selects the rural pipeline.
    pub fn build(
        &self,
        coord: Coordinate,
        city: &str,
        user_text: Option<&str>,
        rural_hint: bool,
    ) -> Result<EnhancedAddress> {
        let code = self.try_code(coord)?;
        let is_rural = rural_hint || user_text.is_none();

        if is_rural {
            let rural = self.rural.generate(coord, city, user_text);
            info!(code = ?code, city, "built rural-enhanced address");
            return Ok(EnhancedAddress {
                code,
                address_components: AddressComponents {
                    primary: rural.primary_address.clone(),
                    alternatives: rural.alternative_addresses.clone(),
                    kind: AddressKind::RuralEnhanced,
                    coordinates: rural.coordinate_description.clone(),
                },
                rural_enhancements: Some(rural),
            });
        }

        let primary = match user_text {
            Some(text) => text.to_string(),
            None => coord.to_string(),
        };
        info!(code = ?code, city, "built standard address");
        Ok(EnhancedAddress {
            code,
            address_components: AddressComponents {
                primary,
                alternatives: Vec::new(),
                kind: AddressKind::Standard,
                coordinates: dms_string(coord.latitude(), coord.longitude(), Some(city)),
            },
            rural_enhancements: None,
        })
    }

    /// Like [`build`](Self::build), but a missing formal code is an error
    /// instead of an absent field.
    pub fn build_with_code(
        &self,
        coord: Coordinate,
        city: &str,
        user_text: Option<&str>,
        rural_hint: bool,
    ) -> Result<EnhancedAddress> {
        let built = self.build(coord, city, user_text, rural_hint)?;
        if built.code.is_none() {
            return Err(DdcError::LocationNotResolvable {
                latitude: coord.latitude(),
                longitude: coord.longitude(),
            });
        }
        Ok(built)
    }

    /// Run the formal pipeline. A coordinate the registry cannot place
    /// maps to `Ok(None)`; anything else failing is a real error.
    fn try_code(&self, coord: Coordinate) -> Result<Option<String>> {
        let located = if self.options.best_effort_locate {
            self.locator.locate_best_effort(coord)
        } else {
            self.locator.locate(coord)
        };

        let admin = match located {
            Ok(admin) => admin,
            Err(DdcError::LocationNotResolvable { latitude, longitude }) => {
                debug!(latitude, longitude, "coordinate unresolvable; omitting code");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let area = self.classifier.classify(coord);
        let scope = SequenceScope::new(&admin, &area);
        let sequence = self.sequences.increment(&scope)?;
        Ok(Some(codec::encode(&admin, &area, &sequence)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::LatitudeBandClassifier;
    use crate::registry::BoundedRegistry;
    use crate::sequence::InMemorySequenceStore;
    use crate::store::InMemoryAddressStore;

    fn builder(options: BuilderOptions) -> EnhancedAddressBuilder {
        EnhancedAddressBuilder::with_options(
            Arc::new(BoundedRegistry::new()),
            Box::new(LatitudeBandClassifier::new()),
            Arc::new(InMemorySequenceStore::new()),
            Arc::new(InMemoryAddressStore::new()),
            options,
        )
    }

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn covered_coordinate_with_text_builds_standard_address() {
        let built = builder(BuilderOptions::default())
            .build(coord(6.5, 3.35), "Ikeja", Some("12 Allen Avenue"), false)
            .unwrap();

        let code = built.code.as_deref().unwrap();
        assert!(code.starts_with("NG-LA-"), "{code}");
        assert_eq!(built.address_components.kind, AddressKind::Standard);
        assert_eq!(built.address_components.primary, "12 Allen Avenue");
        assert!(built.address_components.coordinates.contains("Ikeja"));
        assert!(built.rural_enhancements.is_none());
    }

    #[test]
    fn missing_text_selects_rural_pipeline() {
        let built = builder(BuilderOptions::default())
            .build(coord(6.5, 3.35), "Ikeja", None, false)
            .unwrap();

        assert_eq!(built.address_components.kind, AddressKind::RuralEnhanced);
        let rural = built.rural_enhancements.unwrap();
        assert_eq!(built.address_components.primary, rural.primary_address);
        assert!(!rural.alternative_addresses.is_empty());
    }

    #[test]
    fn rural_hint_overrides_provided_text() {
        let built = builder(BuilderOptions::default())
            .build(coord(6.5, 3.35), "Ikeja", Some("near the old mill"), true)
            .unwrap();

        assert_eq!(built.address_components.kind, AddressKind::RuralEnhanced);
        assert_eq!(built.address_components.primary, "near the old mill");
        assert!(built.code.is_some());
    }

    #[test]
    fn uncovered_coordinate_yields_address_without_code() {
        // In national bounds but outside every registry bounding box.
        let built = builder(BuilderOptions::default())
            .build(coord(5.5, 8.3), "Calabar", None, false)
            .unwrap();

        assert!(built.code.is_none());
        assert_eq!(built.address_components.kind, AddressKind::RuralEnhanced);
        assert!(!built.address_components.primary.is_empty());
    }

    #[test]
    fn best_effort_locate_recovers_a_code() {
        let options = BuilderOptions {
            best_effort_locate: true,
            ..Default::default()
        };
        let built = builder(options)
            .build(coord(5.5, 8.3), "Calabar", None, false)
            .unwrap();
        assert!(built.code.is_some());
    }

    #[test]
    fn build_with_code_rejects_uncovered_coordinate() {
        let err = builder(BuilderOptions::default())
            .build_with_code(coord(5.5, 8.3), "Calabar", None, false)
            .unwrap_err();
        assert!(matches!(err, DdcError::LocationNotResolvable { .. }));
    }

    #[test]
    fn out_of_national_bounds_still_yields_a_codeless_address() {
        let built = builder(BuilderOptions::default())
            .build(coord(48.85, 2.35), "Paris", None, false)
            .unwrap();
        assert!(built.code.is_none());
        assert!(!built.address_components.primary.is_empty());
    }

    #[test]
    fn sequences_advance_per_build() {
        let b = builder(BuilderOptions::default());
        let first = b
            .build(coord(6.5, 3.35), "Ikeja", Some("a"), false)
            .unwrap()
            .code
            .unwrap();
        let second = b
            .build(coord(6.5, 3.35), "Ikeja", Some("a"), false)
            .unwrap()
            .code
            .unwrap();
        assert!(first.ends_with("-0001"), "{first}");
        assert!(second.ends_with("-0002"), "{second}");
        assert_ne!(first, second);
    }

    #[test]
    fn serialized_shape_uses_wire_field_names() {
        let built = builder(BuilderOptions::default())
            .build(coord(6.5, 3.35), "Ikeja", None, false)
            .unwrap();
        let json = serde_json::to_value(&built).unwrap();
        assert!(json.get("addressComponents").is_some());
        assert_eq!(
            json["addressComponents"]["type"],
            serde_json::json!("rural_enhanced")
        );
        assert!(json["ruralEnhancements"].get("primaryAddress").is_some());
    }
}
