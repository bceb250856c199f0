//! ddc-cli — Command-line interface for ddc-core
//!
//! This binary exercises the Digital Door Code engine from your terminal:
//! generating a code for a coordinate, parsing a code back into its
//! components, building a full enhanced address with the rural fallback,
//! and listing the bundled states and LGAs.
//!
//! Usage examples
//! --------------
//!
//! - Generate a code for a Lagos coordinate
//!   $ ddc-cli encode 6.5 3.35
//!
//! - Parse a code
//!   $ ddc-cli decode NG-LA-15-Z001-0042
//!
//! - Build a full address with the rural fallback, as JSON
//!   $ ddc-cli --json address 6.6 3.5 --city Ikorodu
//!
//! - List states and a state's LGAs
//!   $ ddc-cli states
//!   $ ddc-cli lgas LA
//!
//! Logging is controlled via `RUST_LOG` (e.g. `RUST_LOG=ddc_core=debug`).
mod args;

use std::sync::Arc;

use clap::Parser;

use crate::args::{CliArgs, Commands};
use ddc_core::{
    codec, AdministrativeLocator, AreaClassifier, BoundedRegistry, BuilderOptions, Coordinate,
    EnhancedAddressBuilder, InMemoryAddressStore, InMemorySequenceStore, LatitudeBandClassifier,
    LocationRegistry, SequenceScope, SequenceStore,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let registry = Arc::new(BoundedRegistry::new());

    match args.command {
        Commands::Encode {
            lat,
            lon,
            best_effort,
        } => {
            let coord = Coordinate::new(lat, lon)?;
            let locator = AdministrativeLocator::new(registry);
            let admin = if best_effort {
                locator.locate_best_effort(coord)?
            } else {
                locator.locate(coord)?
            };
            let area = LatitudeBandClassifier::new().classify(coord);
            let sequences = InMemorySequenceStore::new();
            let sequence = sequences.increment(&SequenceScope::new(&admin, &area))?;
            let code = codec::encode(&admin, &area, &sequence);

            if args.json {
                println!(
                    "{}",
                    serde_json::json!({ "code": code, "stateCode": admin.state_code(), "lgaCode": admin.lga_code() })
                );
            } else {
                println!("{code}");
            }
        }

        Commands::Decode { code } => {
            let components = codec::decode(&code)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&components)?);
            } else {
                println!("State:    {}", components.admin.state_code());
                println!("LGA:      {}", components.admin.lga_code());
                println!("Area:     {}", components.area);
                println!("Sequence: {}", components.sequence.value());
            }
        }

        Commands::Address {
            lat,
            lon,
            city,
            text,
            rural,
        } => {
            let coord = Coordinate::new(lat, lon)?;
            let builder = EnhancedAddressBuilder::with_options(
                registry,
                Box::new(LatitudeBandClassifier::new()),
                Arc::new(InMemorySequenceStore::new()),
                Arc::new(InMemoryAddressStore::new()),
                BuilderOptions::default(),
            );
            let built = builder.build(coord, &city, text.as_deref(), rural)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&built)?);
            } else {
                match &built.code {
                    Some(code) => println!("Code:    {code}"),
                    None => println!("Code:    (coordinate not covered by registry)"),
                }
                println!("Primary: {}", built.address_components.primary);
                for alt in &built.address_components.alternatives {
                    println!("  alt: {alt}");
                }
                if let Some(rural) = &built.rural_enhancements {
                    println!("Coords:  {}", rural.coordinate_description);
                    for nearby in &rural.nearby_addresses {
                        println!(
                            "  near: {} ({} km, {})",
                            nearby.address, nearby.distance_km, nearby.code
                        );
                    }
                }
            }
        }

        Commands::States => {
            let states = registry.list_states()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&states)?);
            } else {
                for state in states {
                    println!("{} ({})", state.name, state.code);
                }
            }
        }

        Commands::Lgas { state } => {
            let lgas = registry.list_lgas(&state)?;
            if lgas.is_empty() {
                eprintln!("No LGAs found for state: {state}");
            } else if args.json {
                println!("{}", serde_json::to_string_pretty(&lgas)?);
            } else {
                for lga in lgas {
                    println!("{} ({})", lga.name, lga.code);
                }
            }
        }
    }

    Ok(())
}
