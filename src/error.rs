//! Error types for layerset
//!
//! All modules use `LayersetResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for layerset operations
pub type LayersetResult<T> = Result<T, LayersetError>;

/// All errors that can occur in layerset
#[derive(Error, Debug)]
pub enum LayersetError {
    // Submission directive errors
    #[error("invalid submission directive '{pair}': {reason}")]
    InvalidDirective { pair: String, reason: String },

    #[error("conflicting submission directives: {reason}")]
    ConflictingDirective { reason: String },

    // Manifest validation errors
    #[error("duplicate layer name: {0}")]
    DuplicateLayer(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("invalid layer name '{name}': {reason}")]
    InvalidLayerName { name: String, reason: String },

    #[error("invalid machine identifier '{name}': {reason}")]
    InvalidMachine { name: String, reason: String },

    /// A validation error attributed to a specific layer record.
    /// Wraps submission errors so the caller sees which record is at fault.
    #[error("layer '{layer}': {source}")]
    Layer {
        layer: String,
        #[source]
        source: Box<LayersetError>,
    },

    // Fetch errors — produced by `LayerFetcher` implementations, never by
    // the resolver itself
    #[error("failed to clone layer '{layer}': {reason}")]
    Clone { layer: String, reason: String },

    // Manifest file errors
    #[error("invalid manifest at {path}: {reason}")]
    ManifestInvalid { path: PathBuf, reason: String },

    #[error("unsupported manifest format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl LayersetError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid-directive error
    pub fn invalid_directive(pair: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDirective {
            pair: pair.into(),
            reason: reason.into(),
        }
    }

    /// Create a conflicting-directive error
    pub fn conflicting(reason: impl Into<String>) -> Self {
        Self::ConflictingDirective {
            reason: reason.into(),
        }
    }

    /// Attribute this error to a named layer record
    pub fn for_layer(self, layer: impl Into<String>) -> Self {
        Self::Layer {
            layer: layer.into(),
            source: Box::new(self),
        }
    }

    /// Check if this is a manifest validation error (as opposed to an
    /// IO/parse failure while reading the manifest file)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDirective { .. }
                | Self::ConflictingDirective { .. }
                | Self::DuplicateLayer(_)
                | Self::EmptyField(_)
                | Self::InvalidLayerName { .. }
                | Self::InvalidMachine { .. }
                | Self::Layer { .. }
        )
    }
}
