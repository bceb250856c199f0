// crates/ddc-core/src/describe.rs

//! # Location descriptions
//!
//! Human-friendly descriptions for addresses with missing street names or
//! in unmapped areas, built from whatever context is available through a
//! hierarchical fallback chain:
//!
//! 1. landmark-based, when nearby landmarks or a business are known
//! 2. area/zone-based, when an area classification exists
//! 3. administrative, when a city/LGA/state name exists
//! 4. raw coordinates, as the last resort
//!
//! Also hosts the degree-minute coordinate formatter used by the rural
//! generator.

use crate::model::{AreaIdentifier, AreaType};
use crate::text::fold_key;

/// Format a coordinate pair as degrees and decimal minutes with hemisphere
/// letters, optionally annotated with the nearest named town.
///
/// ```
/// use ddc_core::describe::dms_string;
///
/// assert_eq!(dms_string(6.5, 3.3, None), "6°30.000'N, 3°18.000'E");
/// assert_eq!(
///     dms_string(6.5, 3.3, Some("Ikorodu")),
///     "6°30.000'N, 3°18.000'E (nearest town: Ikorodu)"
/// );
/// ```
pub fn dms_string(latitude: f64, longitude: f64, nearest_town: Option<&str>) -> String {
    let lat_dir = if latitude >= 0.0 { 'N' } else { 'S' };
    let lon_dir = if longitude >= 0.0 { 'E' } else { 'W' };

    let lat_floor = latitude.floor();
    let lon_floor = longitude.floor();
    let lat_deg = lat_floor.abs() as i64;
    let lon_deg = lon_floor.abs() as i64;
    let lat_min = (latitude - lat_floor) * 60.0;
    let lon_min = (longitude - lon_floor) * 60.0;

    let mut out = format!(
        "{lat_deg}\u{b0}{lat_min:.3}'{lat_dir}, {lon_deg}\u{b0}{lon_min:.3}'{lon_dir}"
    );
    if let Some(town) = nearest_town {
        out.push_str(&format!(" (nearest town: {town})"));
    }
    out
}

/// Context available when describing a location.
#[derive(Debug, Default, Clone)]
pub struct DescriptionOptions {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city_name: Option<String>,
    pub lga_name: Option<String>,
    pub state_name: Option<String>,
    pub area: Option<AreaIdentifier>,
    pub nearby_landmarks: Vec<String>,
    pub nearby_business: Option<String>,
    /// Formal code to append as a reference, when one exists.
    pub ddc: Option<String>,
    pub include_coordinates: bool,
}

/// Produce a description using the hierarchical fallback chain.
pub fn location_description(opts: &DescriptionOptions) -> String {
    // 1. Landmark context wins when present.
    let landmark = opts
        .nearby_landmarks
        .first()
        .map(String::as_str)
        .or(opts.nearby_business.as_deref());
    if let Some(landmark) = landmark {
        let mut description = format!("Near {landmark}");
        if let Some(city) = &opts.city_name {
            description.push_str(&format!(" in {city}"));
        } else if let Some(lga) = &opts.lga_name {
            description.push_str(&format!(" in {lga} LGA"));
        }
        return finalize(description, opts);
    }

    // 2. Area/zone classification.
    if let Some(area) = &opts.area {
        let mut description = match area.area_type() {
            AreaType::Street => "Unnamed street".to_string(),
            AreaType::Zone => format!("Zone {}", area.code()),
            AreaType::Landmark => format!("Landmark area {}", area.code()),
        };
        if let Some(city) = &opts.city_name {
            description.push_str(&format!(" in {city}"));
            if area.area_type() == AreaType::Street {
                description.push_str(&format!(" (Area {})", area.code()));
            }
        } else if let Some(lga) = &opts.lga_name {
            description.push_str(&format!(" in {lga} LGA"));
        }
        return finalize(description, opts);
    }

    // 3. Administrative names alone.
    if let Some(city) = &opts.city_name {
        return finalize(format!("Unnamed location in {city}"), opts);
    }
    if let Some(lga) = &opts.lga_name {
        return finalize(format!("Unnamed location in {lga} LGA"), opts);
    }
    if let Some(state) = &opts.state_name {
        return finalize(format!("Unnamed location in {state} State"), opts);
    }

    // 4. Coordinates as the last resort, ~1 m precision at 5 decimals.
    let description = match (opts.latitude, opts.longitude) {
        (Some(lat), Some(lon)) => {
            format!("Location at coordinates {lat:.5}, {lon:.5}")
        }
        _ => "Unnamed location".to_string(),
    };
    finalize(description, opts)
}

/// Append the DDC reference and optional coordinate suffix.
fn finalize(mut description: String, opts: &DescriptionOptions) -> String {
    if let Some(ddc) = &opts.ddc {
        if !description.contains(ddc.as_str()) {
            description.push_str(&format!(" (Ref: {ddc})"));
        }
    }

    if opts.include_coordinates && !description.contains("coordinates") {
        if let (Some(lat), Some(lon)) = (opts.latitude, opts.longitude) {
            description.push_str(&format!(" [{lat:.5}, {lon:.5}]"));
        }
    }

    description
}

/// True when a street name is absent or a placeholder and should be
/// replaced with a generated description.
pub fn needs_generated_street_name(street_name: Option<&str>) -> bool {
    let Some(name) = street_name else {
        return true;
    };
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return true;
    }

    const PLACEHOLDERS: &[&str] = &[
        "unknown",
        "unnamed",
        "no name",
        "n/a",
        "na",
        "not available",
        "none",
        "nil",
        "null",
    ];
    let folded = fold_key(trimmed);
    PLACEHOLDERS
        .iter()
        .any(|p| folded == *p || folded.contains(&format!("{p} street")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dms_formats_hemispheres() {
        assert_eq!(dms_string(-6.5, -3.3, None), "7°30.000'S, 4°42.000'W");
    }

    #[test]
    fn landmark_takes_precedence() {
        let opts = DescriptionOptions {
            city_name: Some("Ikorodu".into()),
            nearby_landmarks: vec!["Main Market".into()],
            area: Some(AreaIdentifier::new(AreaType::Zone, "4").unwrap()),
            ..Default::default()
        };
        assert_eq!(location_description(&opts), "Near Main Market in Ikorodu");
    }

    #[test]
    fn zone_description_with_city() {
        let opts = DescriptionOptions {
            city_name: Some("Kano".into()),
            area: Some(AreaIdentifier::new(AreaType::Zone, "12").unwrap()),
            ..Default::default()
        };
        assert_eq!(location_description(&opts), "Zone 012 in Kano");
    }

    #[test]
    fn street_description_includes_area_code() {
        let opts = DescriptionOptions {
            city_name: Some("Ikeja".into()),
            area: Some(AreaIdentifier::new(AreaType::Street, "7").unwrap()),
            ..Default::default()
        };
        assert_eq!(
            location_description(&opts),
            "Unnamed street in Ikeja (Area 007)"
        );
    }

    #[test]
    fn falls_back_to_lga_then_state() {
        let lga = DescriptionOptions {
            lga_name: Some("Ikorodu".into()),
            ..Default::default()
        };
        assert_eq!(location_description(&lga), "Unnamed location in Ikorodu LGA");

        let state = DescriptionOptions {
            state_name: Some("Lagos".into()),
            ..Default::default()
        };
        assert_eq!(
            location_description(&state),
            "Unnamed location in Lagos State"
        );
    }

    #[test]
    fn coordinates_are_the_last_resort() {
        let opts = DescriptionOptions {
            latitude: Some(6.5),
            longitude: Some(3.3),
            ..Default::default()
        };
        assert_eq!(
            location_description(&opts),
            "Location at coordinates 6.50000, 3.30000"
        );
    }

    #[test]
    fn finalize_appends_reference_once() {
        let opts = DescriptionOptions {
            city_name: Some("Ikeja".into()),
            ddc: Some("NG-LA-15-Z001-0042".into()),
            ..Default::default()
        };
        let description = location_description(&opts);
        assert!(description.ends_with("(Ref: NG-LA-15-Z001-0042)"));
    }

    #[test]
    fn placeholder_street_names_need_generation() {
        assert!(needs_generated_street_name(None));
        assert!(needs_generated_street_name(Some("  ")));
        assert!(needs_generated_street_name(Some("Unknown")));
        assert!(needs_generated_street_name(Some("N/A")));
        assert!(needs_generated_street_name(Some("unnamed street here")));
        assert!(!needs_generated_street_name(Some("Adeola Odeku Street")));
    }
}
