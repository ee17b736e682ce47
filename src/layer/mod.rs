//! Layer manifest resolution
//!
//! Layers are units of build-recipe content, each with its own search
//! priority and git checkout directive, composed into a full distribution
//! build. This module validates and orders them; cloning is delegated to
//! the [`fetch::LayerFetcher`] collaborator.

pub mod fetch;
pub mod resolve;
pub mod submission;

pub use fetch::{fetch_layers, LayerFetcher};
pub use resolve::{resolve, Manifest, ResolvedLayer, TOOLING_PRIORITY};
pub use submission::{parse_submission, VersionSelector};
