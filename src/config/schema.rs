//! Manifest file schema
//!
//! The layer manifest is authored as `layers.toml` (or `layers.json`) in the
//! build directory: two distribution-wide scalars plus one record per layer.

use serde::{Deserialize, Serialize};

/// A layer record exactly as authored in the manifest file.
///
/// Field semantics follow the OpenEmbedded layer model: `priority` orders
/// file search between layers (higher wins, `-1` marks build tooling such as
/// bitbake), `url` names the git repository to clone (empty means the layer
/// is already present locally), and `submission` selects the version to
/// check out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerRecord {
    /// Unique layer identifier; also the default checkout directory name
    pub name: String,

    /// OpenEmbedded layer priority; `-1` marks a tooling entry
    pub priority: i32,

    /// Git repository address; empty skips cloning
    #[serde(default)]
    pub url: String,

    /// Version-selection directive, e.g. `"branch=dylan,commit=bf2d538"`.
    /// Empty means the default branch at remote HEAD.
    #[serde(default)]
    pub submission: String,

    /// Alternative checkout directory; empty means use `name`
    #[serde(default)]
    pub working_dir: String,
}

/// Parsed layer manifest file, prior to validation.
///
/// This is the raw deserialized form; [`resolve`](crate::layer::resolve::resolve)
/// turns it into a validated [`Manifest`](crate::layer::Manifest).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Name of the distribution this manifest builds
    pub distribution: String,

    /// Supported MACHINE identifiers
    pub machines: Vec<String>,

    /// Layer records in declaration order
    #[serde(default)]
    pub layers: Vec<LayerRecord>,
}

impl LayerRecord {
    /// Construct a record with an empty working directory override.
    /// Mostly useful in tests and for programmatic manifest assembly.
    pub fn new(name: impl Into<String>, priority: i32, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority,
            url: url.into(),
            submission: String::new(),
            working_dir: String::new(),
        }
    }

    /// Set the submission directive
    pub fn with_submission(mut self, submission: impl Into<String>) -> Self {
        self.submission = submission.into();
        self
    }

    /// Set the working directory override
    pub fn with_working_dir(mut self, working_dir: impl Into<String>) -> Self {
        self.working_dir = working_dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_defaults_for_optional_fields() {
        let toml_content = r#"
name = "meta-webos"
priority = 10
"#;
        let record: LayerRecord = toml::from_str(toml_content).unwrap();
        assert_eq!(record.name, "meta-webos");
        assert_eq!(record.priority, 10);
        assert!(record.url.is_empty());
        assert!(record.submission.is_empty());
        assert!(record.working_dir.is_empty());
    }

    #[test]
    fn missing_priority_errors() {
        let toml_content = r#"
name = "meta-webos"
"#;
        assert!(toml::from_str::<LayerRecord>(toml_content).is_err());
    }

    #[test]
    fn builder_sets_fields() {
        let record = LayerRecord::new("meta-oe", 6, "git://example.org/meta-oe.git")
            .with_submission("branch=dylan")
            .with_working_dir("oe/meta-oe");
        assert_eq!(record.submission, "branch=dylan");
        assert_eq!(record.working_dir, "oe/meta-oe");
    }

    #[test]
    fn manifest_config_roundtrips_toml() {
        let config = ManifestConfig {
            distribution: "webos".to_string(),
            machines: vec!["qemux86".to_string()],
            layers: vec![LayerRecord::new("meta", 5, "")],
        };
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: ManifestConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.distribution, "webos");
        assert_eq!(parsed.layers.len(), 1);
    }
}
