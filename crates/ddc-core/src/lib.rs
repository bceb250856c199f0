// crates/ddc-core/src/lib.rs

//! # ddc-core
//!
//! Core engine for the Nigerian Digital Door Code (DDC) addressing
//! system: formal code generation and parsing, administrative location
//! resolution, and the rural descriptive-address fallback for places
//! without formal addressing data.
//!
//! A code reads `NG-{state}-{lga}-{area}-{sequence}`, for example
//! `NG-LA-15-Z001-0042`. See [`codec`] for the grammar and [`enhanced`]
//! for the one-call orchestration entry point.

pub mod area;
pub mod codec;
pub mod describe;
pub mod enhanced;
pub mod error;
pub mod locate;
pub mod model;
pub mod registry;
pub mod rural;
pub mod sequence;
pub mod store;
pub mod text;

// Re-exports
pub use crate::error::{DdcError, Result};
pub use crate::model::{
    AdministrativeMatch, AreaIdentifier, AreaType, Coordinate, DdcComponents,
    NearbyAddress, RuralAddressResult, SequenceNumber, SuggestedComponents,
};
pub use crate::area::{AreaClassifier, LatitudeBandClassifier};
pub use crate::codec::{decode, encode, COUNTRY_PREFIX};
pub use crate::enhanced::{
    AddressComponents, AddressKind, BuilderOptions, EnhancedAddress, EnhancedAddressBuilder,
};
pub use crate::locate::{AdministrativeLocator, NationalBounds, NIGERIA_BOUNDS};
pub use crate::registry::{BoundedRegistry, LgaInfo, LocationRegistry, StateInfo};
pub use crate::rural::{classify_input, ClassifiedInput, RuralAddressGenerator, RuralInputKind};
pub use crate::sequence::{InMemorySequenceStore, SequenceScope, SequenceStore};
pub use crate::store::{AddressStore, InMemoryAddressStore, StoredAddress};
pub use crate::text::{equals_folded, fold_key};
