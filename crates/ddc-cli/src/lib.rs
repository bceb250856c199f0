//! ddc-cli
//! =======
//!
//! Command-line interface for the `ddc-core` Digital Door Code engine.
//!
//! This crate primarily provides a binary (`ddc-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows
//! this overview.
//!
//! Basic usage:
//!
//! ```text
//! ddc-cli --help
//! ddc-cli encode 6.5 3.35
//! ddc-cli decode NG-LA-15-Z001-0042
//! ddc-cli --json address 6.6 3.5 --city Ikorodu
//! ```
//!
//! For programmatic access, use the `ddc-core` crate directly.

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
