use clap::{Parser, Subcommand};

/// CLI arguments for ddc-cli
#[derive(Debug, Parser)]
#[command(
    name = "ddc",
    version,
    about = "CLI for generating and parsing Nigerian Digital Door Codes"
)]
pub struct CliArgs {
    /// Emit results as JSON instead of human-readable text
    #[arg(short = 'j', long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a DDC code for a coordinate
    Encode {
        /// Latitude in decimal degrees (e.g. 6.5)
        lat: f64,

        /// Longitude in decimal degrees (e.g. 3.35)
        lon: f64,

        /// Fall back to a registry-default state/LGA for uncovered points
        #[arg(long = "best-effort")]
        best_effort: bool,
    },

    /// Parse a DDC code into its components
    Decode {
        /// Full code (e.g. NG-LA-15-Z001-0042)
        code: String,
    },

    /// Build a full enhanced address (formal code plus rural fallback)
    Address {
        /// Latitude in decimal degrees
        lat: f64,

        /// Longitude in decimal degrees
        lon: f64,

        /// Nearest city or town name used in descriptions
        #[arg(short = 'c', long = "city", default_value = "Unknown")]
        city: String,

        /// User-provided free-text address description
        #[arg(short = 't', long = "text")]
        text: Option<String>,

        /// Force the rural pipeline even when text is provided
        #[arg(long = "rural")]
        rural: bool,
    },

    /// List all known states
    States,

    /// List known LGAs for a state
    Lgas {
        /// Two-letter state code (e.g. LA)
        state: String,
    },
}
