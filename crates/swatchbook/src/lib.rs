//! # Swatchbook - Design-Token Themes
//!
//! Builds light/dark design-token themes from a handful of seed colors,
//! checks them, and ships them to CSS, SCSS, TypeScript, Tailwind, Figma,
//! Style Dictionary and DTCG.
//!
//! This crate ties together:
//!
//! - `swatchbook-tokens`: token model, classifier, validator, color math,
//!   seed palettes, preset builder, contrast audit, import and apply
//! - `swatchbook-export`: the exporters
//!
//! ## Quick Start
//!
//! ```rust
//! use swatchbook::{ColorMode, ExportFormat, Theme};
//!
//! let yaml = r##"
//! light:
//!   primary: "#6750A4"
//!   secondary: "#625B71"
//!   success: "#006C4C"
//!   error: "#BA1A1A"
//!   warning: "#7C5800"
//!   info: "#006874"
//!   bodyBg: "#FFFBFE"
//!   bodyColor: "#1C1B1F"
//!   headingColor: "#1C1B1F"
//! dark:
//!   primary: "#D0BCFF"
//!   secondary: "#CCC2DC"
//!   success: "#6DD58C"
//!   error: "#FFB4AB"
//!   warning: "#F9BC2D"
//!   info: "#4FD8EB"
//!   bodyBg: "#1C1B1F"
//!   bodyColor: "#E6E1E5"
//!   headingColor: "#E6E1E5"
//! "##;
//!
//! let theme = Theme::from_seed_yaml(yaml)?;
//! assert_eq!(theme.mode(ColorMode::Light).get("--bs-primary-rgb"), Some("103, 80, 164"));
//!
//! let snapshot = theme.export(ExportFormat::Json)?;
//! let restored = Theme::import_json(&snapshot.content, "bs")?;
//! assert_eq!(restored.tokens(), theme.tokens());
//! # Ok::<(), swatchbook::ThemeError>(())
//! ```
//!
//! ## Logging
//!
//! Building, exporting and applying emit `tracing` events (`debug` summaries,
//! `warn` for skipped export values and failing contrast pairs). No
//! subscriber is installed; hosts choose their own.

mod error;
mod theme;

pub use error::ThemeError;
pub use theme::{Theme, ThemeReport};

// Token engine
pub use swatchbook_tokens::colorspace;
pub use swatchbook_tokens::{
    apply, audit_contrast, build_preset, build_theme, check_compliance, classify,
    contrast_ratio, darken, hex_to_rgb_triplet, lighten, parse_css_color, relative_luminance,
    standard_tokens, validate, validate_imported, validate_mapping,
};
pub use swatchbook_tokens::{
    BuiltinPreset, ColorMode, ContrastFinding, ContrastReport, CoreColors, FormOverrides,
    MappingReport, Namespace, PaletteOverrides, PresetBuilder, Rgb, Rgba, Role, RoleOverrides,
    SeedPalette, StyleRegistry, StyleTarget, ThemeSeed, ThemeTokenSet, Token, TokenIssue,
    TokenKind, TokenMapping, ValidationResult,
};
pub use swatchbook_tokens::{ImportError, MappingError, PaletteError};

// Exporters
pub use swatchbook_export::{
    export, export_json_at, Export, ExportError, ExportFormat, ExportOptions, SkippedValue,
};
