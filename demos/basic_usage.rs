//! Basic usage example for ddc-rs
//!
//! This example demonstrates how to:
//! - Generate a Digital Door Code for a coordinate
//! - Parse a code back into its components
//! - Build a full enhanced address with the rural fallback
//! - Record addresses and query for nearby ones

use std::sync::Arc;

use ddc_core::{
    codec, AdministrativeLocator, AreaClassifier, BoundedRegistry, Coordinate,
    EnhancedAddressBuilder, InMemoryAddressStore, InMemorySequenceStore, LatitudeBandClassifier,
    Result, SequenceScope, SequenceStore, StoredAddress,
};

fn main() -> Result<()> {
    println!("=== DDC-RS Basic Usage Example ===\n");

    let registry = Arc::new(BoundedRegistry::new());

    // Example 1: Generate a code for a Lagos coordinate
    println!("--- Example 1: Generate a code ---");
    let coord = Coordinate::new(6.5, 3.35)?;
    let locator = AdministrativeLocator::new(registry.clone());
    let admin = locator.locate(coord)?;
    let area = LatitudeBandClassifier::new().classify(coord);
    let sequences = InMemorySequenceStore::new();
    let sequence = sequences.increment(&SequenceScope::new(&admin, &area))?;
    let code = codec::encode(&admin, &area, &sequence);
    println!("Coordinate: {coord}");
    println!("Code:       {code}\n");

    // Example 2: Parse a code
    println!("--- Example 2: Parse a code ---");
    let components = codec::decode("NG-LA-15-Z001-0042")?;
    println!("State:    {}", components.admin.state_code());
    println!("LGA:      {}", components.admin.lga_code());
    println!("Area:     {}", components.area);
    println!("Sequence: {}\n", components.sequence.value());

    // Example 3: Build a full enhanced address for a rural coordinate
    println!("--- Example 3: Enhanced address with rural fallback ---");
    let store = Arc::new(InMemoryAddressStore::new());
    store.insert(StoredAddress {
        address: "Near the Main Market".to_string(),
        latitude: 6.62,
        longitude: 3.51,
        code: "NG-LA-08-Z510-0003".to_string(),
    });
    let builder = EnhancedAddressBuilder::new(
        registry,
        Box::new(LatitudeBandClassifier::new()),
        Arc::new(InMemorySequenceStore::new()),
        store,
    );
    let built = builder.build(Coordinate::new(6.6, 3.5)?, "Ikorodu", None, false)?;
    match &built.code {
        Some(code) => println!("Code:    {code}"),
        None => println!("Code:    (not covered)"),
    }
    println!("Primary: {}", built.address_components.primary);
    if let Some(rural) = &built.rural_enhancements {
        println!("Alternatives:");
        for alt in &rural.alternative_addresses {
            println!("  - {alt}");
        }
        println!("Nearby:");
        for nearby in &rural.nearby_addresses {
            println!("  - {} ({} km away)", nearby.address, nearby.distance_km);
        }
    }

    println!("\n✓ Done");
    Ok(())
}
