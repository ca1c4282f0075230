//! Expands a seed palette into a complete token mapping.
//!
//! Every derived token follows the same rule: use the palette's explicit
//! override if there is one, otherwise derive it from the core colors.
//!
//! | Token | Light default | Dark default |
//! |-------|---------------|--------------|
//! | `<role>-rgb` | `r, g, b` of the role color | same |
//! | `<role>-hover` (success, error, warning, info) | role color | role color |
//! | `<role>-hover` (primary, secondary) | darkened 15% | lightened 15% |
//! | `primary-text-emphasis` | heading color | body color |
//! | `<role>-text-emphasis` (others) | darkened 60% if AA on its subtle bg | lightened 40% if AA |
//! | `<role>-bg-subtle`, `tertiary-bg-subtle` | lightened 95% | darkened 80% |
//! | `brand-bg-subtle` | `primary-bg-subtle` | same |
//! | `<role>-border-subtle` | role color | role color |
//! | `form-valid-*` / `form-invalid-*` | success / error | same |
//! | `link-color`, `link-hover-color` | primary, primary hover | same |
//!
//! The palette's base tokens are merged last and win over anything derived.
//! Output is a `BTreeMap`-backed mapping, so building the same palette twice
//! yields identical mappings.

use std::collections::BTreeMap;

use crate::colorspace::{check_compliance, darken, hex_to_rgb_triplet, lighten, Rgb};
use crate::palette::{Role, SeedPalette, ThemeSeed};
use crate::token::{ColorMode, Namespace, ThemeTokenSet, TokenMapping};

const HOVER_SHIFT: f64 = 0.15;
const LIGHT_SUBTLE: f64 = 0.95;
const DARK_SUBTLE: f64 = 0.8;
const LIGHT_EMPHASIS: f64 = 0.6;
const DARK_EMPHASIS: f64 = 0.4;

/// Builds token mappings for a namespace.
#[derive(Debug, Clone, Default)]
pub struct PresetBuilder {
    namespace: Namespace,
}

impl PresetBuilder {
    pub fn new(namespace: impl Into<Namespace>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Expands `seed` into the full token mapping for `mode`.
    pub fn build(&self, seed: &SeedPalette, mode: ColorMode) -> TokenMapping {
        let ns = &self.namespace;
        let core = seed.core();
        let overrides = seed.overrides();

        let subtle = |color: &str| match mode {
            ColorMode::Light => lighten(color, LIGHT_SUBTLE),
            ColorMode::Dark => darken(color, DARK_SUBTLE),
        };
        let emphasis_fallback = match mode {
            ColorMode::Light => core.heading_color.as_str(),
            ColorMode::Dark => core.body_color.as_str(),
        };

        let mut out: BTreeMap<String, String> = BTreeMap::new();
        let mut put = |role: &str, value: String| {
            out.insert(ns.var_name(role), value);
        };

        let mut primary_subtle = String::new();
        let mut primary_hover = String::new();
        let mut primary_rgb = String::new();

        for role in Role::all() {
            let name = role.as_str();
            let base = core.role(*role);
            let o = overrides.role(*role);

            let rgb = o.rgb.clone().unwrap_or_else(|| hex_to_rgb_triplet(base));
            let hover = o.hover.clone().unwrap_or_else(|| match (role, mode) {
                (Role::Primary | Role::Secondary, ColorMode::Light) => darken(base, HOVER_SHIFT),
                (Role::Primary | Role::Secondary, ColorMode::Dark) => lighten(base, HOVER_SHIFT),
                _ => base.to_string(),
            });
            let bg_subtle = o.bg_subtle.clone().unwrap_or_else(|| subtle(base));
            let border_subtle = o.border_subtle.clone().unwrap_or_else(|| base.to_string());
            let text_emphasis = o.text_emphasis.clone().unwrap_or_else(|| match role {
                Role::Primary => emphasis_fallback.to_string(),
                _ => contrast_checked_emphasis(base, &bg_subtle, mode, emphasis_fallback),
            });

            if *role == Role::Primary {
                primary_subtle = bg_subtle.clone();
                primary_hover = hover.clone();
                primary_rgb = rgb.clone();
            }

            put(name, base.to_string());
            put(&format!("{}-rgb", name), rgb);
            put(&format!("{}-hover", name), hover);
            put(&format!("{}-bg-subtle", name), bg_subtle);
            put(&format!("{}-border-subtle", name), border_subtle);
            put(&format!("{}-text-emphasis", name), text_emphasis);
        }

        put(
            "tertiary-bg-subtle",
            overrides
                .tertiary_bg_subtle
                .clone()
                .unwrap_or_else(|| subtle(&core.body_bg)),
        );
        put(
            "brand-bg-subtle",
            overrides
                .brand_bg_subtle
                .clone()
                .unwrap_or(primary_subtle),
        );

        put("body-bg", core.body_bg.clone());
        put("body-bg-rgb", hex_to_rgb_triplet(&core.body_bg));
        put("body-color", core.body_color.clone());
        put("body-color-rgb", hex_to_rgb_triplet(&core.body_color));
        put("heading-color", core.heading_color.clone());

        let form = &overrides.form;
        put(
            "form-valid-color",
            form.valid_color.clone().unwrap_or_else(|| core.success.clone()),
        );
        put(
            "form-valid-border-color",
            form.valid_border_color
                .clone()
                .unwrap_or_else(|| core.success.clone()),
        );
        put(
            "form-invalid-color",
            form.invalid_color.clone().unwrap_or_else(|| core.error.clone()),
        );
        put(
            "form-invalid-border-color",
            form.invalid_border_color
                .clone()
                .unwrap_or_else(|| core.error.clone()),
        );

        let link = overrides
            .link_color
            .clone()
            .unwrap_or_else(|| core.primary.clone());
        let link_rgb = Rgb::from_hex(&link)
            .map(Rgb::triplet)
            .unwrap_or(primary_rgb);
        put("link-color", link);
        put("link-color-rgb", link_rgb);
        put(
            "link-hover-color",
            overrides.link_hover_color.clone().unwrap_or(primary_hover),
        );

        for (key, color) in seed.brand() {
            put(&format!("brand-{}", key), color.clone());
        }

        for (name, value) in seed.tokens() {
            let name = if name.starts_with("--") {
                name.clone()
            } else {
                ns.var_name(name)
            };
            out.insert(name, value.clone());
        }

        let mapping = TokenMapping::from_trusted(out);
        tracing::debug!(mode = %mode, tokens = mapping.len(), "built preset mapping");
        mapping
    }

    /// Builds both modes of a theme seed with this builder's namespace.
    pub fn build_theme(&self, seed: &ThemeSeed) -> ThemeTokenSet {
        ThemeTokenSet::new(
            self.build(&seed.light, ColorMode::Light),
            self.build(&seed.dark, ColorMode::Dark),
        )
    }
}

/// Shifts the role color toward the mode's text extreme, keeping it only if
/// it reads at AA on the role's subtle background.
fn contrast_checked_emphasis(base: &str, bg_subtle: &str, mode: ColorMode, fallback: &str) -> String {
    let candidate = match mode {
        ColorMode::Light => darken(base, LIGHT_EMPHASIS),
        ColorMode::Dark => lighten(base, DARK_EMPHASIS),
    };
    match check_compliance(&candidate, bg_subtle) {
        Some(report) if report.aa => candidate,
        _ => fallback.to_string(),
    }
}

/// Expands a palette with the default namespace.
pub fn build_preset(seed: &SeedPalette, mode: ColorMode) -> TokenMapping {
    PresetBuilder::default().build(seed, mode)
}

/// Expands both modes of a theme seed, using the seed's namespace.
pub fn build_theme(seed: &ThemeSeed) -> ThemeTokenSet {
    PresetBuilder::new(seed.namespace.clone()).build_theme(seed)
}
