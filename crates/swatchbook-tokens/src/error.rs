//! Error types for token mappings, seed palettes and imported documents.
//!
//! Validation of individual token values does not go through these types:
//! it reports [`TokenIssue`](crate::TokenIssue)s inside a
//! [`ValidationResult`](crate::ValidationResult) and never fails.

use thiserror::Error;

use crate::token::ColorMode;

/// Errors raised when a [`TokenMapping`](crate::TokenMapping) invariant would be broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Token names must be non-empty.
    #[error("token name cannot be empty")]
    EmptyName,

    /// Token values must be non-empty after trimming.
    #[error("token '{name}' has an empty value")]
    EmptyValue { name: String },
}

/// Errors raised while constructing or loading a [`SeedPalette`](crate::SeedPalette).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The YAML or JSON document could not be parsed.
    #[error("failed to parse seed palette: {0}")]
    Parse(String),

    /// A required core color is not a `#RGB` or `#RRGGBB` hex value.
    #[error("core color '{field}' must be a hex color, got '{value}'")]
    InvalidCoreColor { field: &'static str, value: String },

    /// An optional override failed color validation.
    #[error("override '{field}' is invalid: {reason}")]
    InvalidOverride { field: String, reason: String },

    /// An RGB override is not an `r, g, b` triplet.
    #[error("override '{field}' must be an 'r, g, b' triplet, got '{value}'")]
    InvalidRgbOverride { field: String, value: String },

    /// A brand or base token broke a mapping invariant.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl From<serde_yaml::Error> for PaletteError {
    fn from(err: serde_yaml::Error) -> Self {
        PaletteError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for PaletteError {
    fn from(err: serde_json::Error) -> Self {
        PaletteError::Parse(err.to_string())
    }
}

/// The first structural violation found in an imported token document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The input is not valid JSON.
    #[error("invalid theme document: {0}")]
    Parse(String),

    /// The document root is not an object.
    #[error("invalid theme data: must be an object")]
    NotAnObject,

    /// The `light` or `dark` property is missing or not an object.
    #[error("missing or invalid {0} mode tokens")]
    MissingMode(ColorMode),

    /// A token value is not a string.
    #[error("all token values must be strings ('{name}' in {mode} mode is not)")]
    NonStringValue { mode: ColorMode, name: String },

    /// The document is well-shaped but a token breaks a mapping invariant.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::Parse(err.to_string())
    }
}
