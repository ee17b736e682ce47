//! Manifest file loading
//!
//! Build trees carry their layer manifest as `layers.toml` (or `layers.json`
//! for generated manifests). A tree without one falls back to the built-in
//! reference manifest compiled into the library.

pub mod schema;

pub use schema::{LayerRecord, ManifestConfig};

use crate::error::{LayersetError, LayersetResult};
use crate::layer::resolve::{resolve, Manifest};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Manifest file name searched for in the build directory
pub const MANIFEST_TOML: &str = "layers.toml";

/// JSON alternative, searched after [`MANIFEST_TOML`]
pub const MANIFEST_JSON: &str = "layers.json";

// Reference manifest embedded at compile time
const BUILTIN_MANIFEST: &str = include_str!("../../manifests/webos.toml");

impl ManifestConfig {
    /// Parse a manifest from a TOML string
    pub fn parse(content: &str) -> LayersetResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a manifest from a JSON string
    pub fn parse_json(content: &str) -> LayersetResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// The built-in reference manifest (the webOS layer set)
    pub fn builtin() -> LayersetResult<Self> {
        Self::parse(BUILTIN_MANIFEST)
    }

    /// Load a manifest from a file, dispatching on its extension.
    ///
    /// `.toml` and `.json` are supported; anything else fails with
    /// [`LayersetError::UnsupportedFormat`].
    pub fn from_file(path: &Path) -> LayersetResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| LayersetError::io(format!("reading manifest {}", path.display()), e))?;

        let parsed = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::parse(&content),
            Some("json") => Self::parse_json(&content),
            _ => return Err(LayersetError::UnsupportedFormat(path.to_path_buf())),
        };

        parsed.map_err(|e| LayersetError::ManifestInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Locate and load the manifest for a build directory.
    ///
    /// Search chain (first match wins):
    /// 1. `{build_dir}/layers.toml`
    /// 2. `{build_dir}/layers.json`
    /// 3. Built-in reference manifest
    pub fn load(build_dir: &Path) -> LayersetResult<Self> {
        for name in [MANIFEST_TOML, MANIFEST_JSON] {
            let path = build_dir.join(name);
            if path.is_file() {
                debug!(path = %path.display(), "Loading layer manifest");
                return Self::from_file(&path);
            }
        }
        debug!(
            build_dir = %build_dir.display(),
            "No layer manifest found, using built-in reference manifest"
        );
        Self::builtin()
    }

    /// Validate this manifest into a resolved [`Manifest`]
    pub fn resolve(&self) -> LayersetResult<Manifest> {
        resolve(&self.layers, &self.distribution, &self.machines)
    }
}
