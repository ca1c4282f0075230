//! # Swatchbook Export - Token Mapping Exporters
//!
//! Turns finished [`TokenMapping`]s into the documents other tools consume.
//! Every exporter is pure: same input, same output (the JSON snapshot's
//! `generated` timestamp is the one exception, see [`export_json_at`]).
//!
//! | Format | Output |
//! |--------|--------|
//! | [`ExportFormat::Json`] | `{light, dark, version, generated}` snapshot |
//! | [`ExportFormat::Css`] | `:root` / `[data-bs-theme]` rule blocks |
//! | [`ExportFormat::Scss`] | `$bs-theme-tokens` map literal |
//! | [`ExportFormat::TypeScript`] | `ThemeTokens` interface plus per-mode constants |
//! | [`ExportFormat::Figma`] | variables collection with per-mode values |
//! | [`ExportFormat::Tailwind`] | `theme.extend` config module |
//! | [`ExportFormat::StyleDictionary`] | `{color, size, font}` token tree |
//! | [`ExportFormat::Dtcg`] | `$value`/`$type` tokens with mode overlays |
//!
//! ## Example
//!
//! ```rust
//! use swatchbook_export::{export, ExportFormat, ExportOptions};
//! use swatchbook_tokens::TokenMapping;
//!
//! let light = TokenMapping::new().with("--bs-primary", "#6750A4").unwrap();
//! let dark = TokenMapping::new().with("--bs-primary", "#D0BCFF").unwrap();
//!
//! let out = export(ExportFormat::Css, &light, Some(&dark), &ExportOptions::default()).unwrap();
//! assert!(out.content.contains("[data-bs-theme=\"dark\"]"));
//! assert!(out.skipped.is_empty());
//! ```
//!
//! ## Lossy Values
//!
//! Exporters never fail on a malformed value. A value a format cannot
//! represent (a color Figma cannot parse, a token Style Dictionary has no
//! bucket for, a CSS value that would close its rule) is left out and listed
//! in [`Export::skipped`], and a `tracing` warning is emitted for it.
//!
//! Formats that key tokens by a shortened name can map two tokens to the
//! same key (`--bs-gap` and `--gap` both become `gap`). The first token in
//! name order keeps the key; the others are skipped the same way.

mod css;
mod dtcg;
mod error;
mod figma;
mod format;
mod json;
mod scss;
mod skipped;
mod style_dictionary;
mod tailwind;
mod typescript;

pub use error::ExportError;
pub use format::ExportFormat;
pub use json::export_json_at;
pub use skipped::SkippedValue;

use serde::{Deserialize, Serialize};
use swatchbook_tokens::{Namespace, TokenMapping};

use crate::skipped::SkipLog;

/// Settings shared by every exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Prefix stripped from token names in namespaced formats.
    pub namespace: Namespace,
    /// Written into the JSON snapshot and Figma documents.
    pub version: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            namespace: Namespace::default(),
            version: "1.0.0".to_string(),
        }
    }
}

impl ExportOptions {
    pub fn new(namespace: impl Into<Namespace>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// The result of one export.
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub format: ExportFormat,
    pub content: String,
    /// Values the format could not represent.
    pub skipped: Vec<SkippedValue>,
}

impl Export {
    pub fn file_name(&self) -> &'static str {
        self.format.file_name()
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Exports `light` (and `dark`, when given) in `format`.
///
/// # Errors
///
/// Only serializer failures are errors; see [`ExportError`].
pub fn export(
    format: ExportFormat,
    light: &TokenMapping,
    dark: Option<&TokenMapping>,
    opts: &ExportOptions,
) -> Result<Export, ExportError> {
    let mut log = SkipLog::new(format);
    let content = match format {
        ExportFormat::Json => json::render(light, dark, opts)?,
        ExportFormat::Css => css::render(light, dark, opts, &mut log)?,
        ExportFormat::Scss => scss::render(light, dark, opts, &mut log)?,
        ExportFormat::TypeScript => typescript::render(light, dark, opts, &mut log)?,
        ExportFormat::Figma => figma::render(light, dark, opts, &mut log)?,
        ExportFormat::Tailwind => tailwind::render(light, opts, &mut log)?,
        ExportFormat::StyleDictionary => style_dictionary::render(light, opts, &mut log)?,
        ExportFormat::Dtcg => dtcg::render(light, dark, opts, &mut log)?,
    };
    let skipped = log.into_entries();

    tracing::debug!(
        format = %format,
        bytes = content.len(),
        skipped = skipped.len(),
        "exported tokens"
    );

    Ok(Export {
        format,
        content,
        skipped,
    })
}
