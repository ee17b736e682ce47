//! Layer resolution
//!
//! Turns raw manifest records into a validated [`Manifest`]: names checked
//! and deduplicated, submission directives parsed, checkout directories
//! defaulted. Resolution is a pure transform — no I/O, no retries, and the
//! first invalid record aborts with an error rather than yielding a partial
//! manifest.

use crate::config::schema::LayerRecord;
use crate::error::{LayersetError, LayersetResult};
use crate::layer::submission::{parse_submission, VersionSelector};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Priority value marking a record as build tooling (e.g. bitbake) rather
/// than a content-contributing layer
pub const TOOLING_PRIORITY: i32 = -1;

/// A fully validated layer, ready for cloning and checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayer {
    /// Unique layer identifier
    pub name: String,

    /// File-search priority; [`TOOLING_PRIORITY`] for tooling entries
    pub priority: i32,

    /// Git repository address; `None` when the layer is already present
    /// locally and must not be cloned
    pub url: Option<String>,

    /// Which version of the layer's source to check out
    pub selector: VersionSelector,

    /// Checkout directory, relative to the build root
    pub directory: PathBuf,
}

impl ResolvedLayer {
    /// True for content-contributing layers, false for tooling entries
    pub fn is_layer(&self) -> bool {
        self.priority != TOOLING_PRIORITY
    }
}

/// A validated layer manifest for one distribution build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Name of the distribution this manifest builds
    pub distribution: String,

    /// Supported MACHINE identifiers
    pub machines: Vec<String>,

    /// All layers, tooling entries included, in declaration order
    pub layers: Vec<ResolvedLayer>,
}

impl Manifest {
    /// Layers in file-search order: tooling entries excluded, priority
    /// descending, ties broken by declaration order.
    pub fn search_order(&self) -> Vec<&ResolvedLayer> {
        let mut ordered: Vec<&ResolvedLayer> =
            self.layers.iter().filter(|l| l.is_layer()).collect();
        // Stable sort keeps declaration order for equal priorities
        ordered.sort_by(|a, b| b.priority.cmp(&a.priority));
        ordered
    }

    /// Tooling entries (priority `-1`), in declaration order
    pub fn tooling_layers(&self) -> Vec<&ResolvedLayer> {
        self.layers.iter().filter(|l| !l.is_layer()).collect()
    }

    /// Checkout directories in file-search order — the path the downstream
    /// build tool consults when the same file exists in multiple layers
    pub fn file_search_path(&self) -> Vec<&Path> {
        self.search_order()
            .into_iter()
            .map(|l| l.directory.as_path())
            .collect()
    }

    /// Look up a layer by name
    pub fn layer(&self, name: &str) -> Option<&ResolvedLayer> {
        self.layers.iter().find(|l| l.name == name)
    }
}

/// Validate that a layer name is safe to use as a checkout directory
/// (no path traversal, no special characters).
fn validate_layer_name(name: &str) -> LayersetResult<()> {
    validate_ident(name).map_err(|reason| LayersetError::InvalidLayerName {
        name: name.to_string(),
        reason,
    })
}

/// Validate a MACHINE identifier
fn validate_machine(name: &str) -> LayersetResult<()> {
    validate_ident(name).map_err(|reason| LayersetError::InvalidMachine {
        name: name.to_string(),
        reason,
    })
}

fn validate_ident(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("must not be empty".to_string());
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") || name.contains('\0') {
        return Err("must not contain path separators or '..'".to_string());
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(
            "must contain only alphanumeric characters, hyphens, or underscores".to_string(),
        );
    }
    Ok(())
}

/// Resolve raw layer records into a validated [`Manifest`].
///
/// Records are processed in declaration order and the first invalid one
/// aborts resolution, so errors are deterministic. Submission errors are
/// attributed to the offending layer via [`LayersetError::Layer`].
pub fn resolve(
    records: &[LayerRecord],
    distribution: &str,
    machines: &[String],
) -> LayersetResult<Manifest> {
    if distribution.trim().is_empty() {
        return Err(LayersetError::EmptyField("distribution"));
    }
    if machines.is_empty() {
        return Err(LayersetError::EmptyField("machines"));
    }
    for machine in machines {
        validate_machine(machine)?;
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    let mut layers = Vec::with_capacity(records.len());

    for record in records {
        validate_layer_name(&record.name)?;
        if !seen.insert(&record.name) {
            return Err(LayersetError::DuplicateLayer(record.name.clone()));
        }

        let selector =
            parse_submission(&record.submission).map_err(|e| e.for_layer(&record.name))?;

        let url = if record.url.is_empty() {
            None
        } else {
            Some(record.url.clone())
        };

        let directory = if record.working_dir.is_empty() {
            PathBuf::from(&record.name)
        } else {
            PathBuf::from(&record.working_dir)
        };

        layers.push(ResolvedLayer {
            name: record.name.clone(),
            priority: record.priority,
            url,
            selector,
            directory,
        });
    }

    let manifest = Manifest {
        distribution: distribution.to_string(),
        machines: machines.to_vec(),
        layers,
    };

    debug!(
        distribution,
        content = manifest.search_order().len(),
        tooling = manifest.tooling_layers().len(),
        "Resolved layer manifest"
    );

    Ok(manifest)
}
