//! Layerset - build layer manifest resolution
//!
//! Parses the layer manifest of an OpenEmbedded-style distribution build
//! into validated, ordered layer descriptors ready for a caller to drive
//! cloning and checkout.

pub mod config;
pub mod error;
pub mod layer;

pub use config::{LayerRecord, ManifestConfig};
pub use error::{LayersetError, LayersetResult};
pub use layer::{Manifest, ResolvedLayer, VersionSelector};
