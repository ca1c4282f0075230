//! # Swatchbook Tokens - Design-Token Engine
//!
//! `swatchbook-tokens` models a theme as two flat mappings of CSS custom
//! properties (one per color mode) and provides everything needed to build,
//! check and apply them.
//!
//! This crate is the foundation for `swatchbook`; the exporters live in
//! `swatchbook-export`.
//!
//! ## Core Concepts
//!
//! - [`TokenMapping`]: Ordered name → value map; values are never empty
//! - [`ThemeTokenSet`]: A light and a dark mapping
//! - [`classify`] / [`validate`]: Infer a token's kind and check its value
//! - [`colorspace`]: Hex/RGB conversion, tinting and WCAG contrast
//! - [`SeedPalette`] + [`PresetBuilder`]: Expand a handful of core colors into a
//!   full token set
//! - [`validate_imported`] / [`apply`]: Accept external documents and push
//!   tokens into a live style target
//!
//! ## Quick Start
//!
//! ```rust
//! use swatchbook_tokens::{build_preset, validate_mapping, BuiltinPreset, ColorMode};
//!
//! let seed = BuiltinPreset::Material.seed();
//! let light = build_preset(&seed.light, ColorMode::Light);
//!
//! assert_eq!(light.get("--bs-primary"), Some("#6750A4"));
//! assert_eq!(light.get("--bs-primary-rgb"), Some("103, 80, 164"));
//! assert!(validate_mapping(&light).is_valid());
//! ```
//!
//! ## Seed Files
//!
//! Seeds load from YAML or JSON, in the same shape the builder consumes:
//!
//! ```yaml
//! namespace: bs
//! light:
//!   primary: "#6750A4"
//!   secondary: "#625B71"
//!   # ...
//!   overrides:
//!     primary:
//!       hover: "#4f3d7d"
//!   brand:
//!     accent: "#FF5722"
//! dark:
//!   # ...
//! ```
//!
//! ## Errors
//!
//! Value checks never fail: they return a [`ValidationResult`]. Fallible
//! construction and parsing return [`MappingError`], [`PaletteError`] or
//! [`ImportError`].

mod apply;
mod audit;
mod catalog;
pub mod colorspace;
mod error;
mod import;
mod kind;
mod palette;
mod preset;
mod token;
mod validate;

pub use apply::{apply, StyleRegistry, StyleTarget};
pub use audit::{audit_contrast, ContrastFinding};
pub use catalog::{standard_tokens, BuiltinPreset};
pub use colorspace::{
    check_compliance, contrast_ratio, darken, hex_to_rgb_triplet, lighten, parse_css_color,
    relative_luminance, ContrastReport, Rgb, Rgba,
};
pub use error::{ImportError, MappingError, PaletteError};
pub use import::validate_imported;
pub use kind::{classify, TokenKind};
pub use palette::{
    CoreColors, FormOverrides, PaletteOverrides, Role, RoleOverrides, SeedPalette, ThemeSeed,
};
pub use preset::{build_preset, build_theme, PresetBuilder};
pub use token::{ColorMode, Namespace, ThemeTokenSet, Token, TokenMapping};
pub use validate::{validate, validate_mapping, MappingReport, TokenIssue, ValidationResult};
