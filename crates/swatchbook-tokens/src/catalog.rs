//! Built-in theme seeds.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::palette::{CoreColors, PaletteOverrides, SeedPalette, ThemeSeed};

/// Built-in preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinPreset {
    /// Material 3 baseline colors.
    Material,
    /// Classic Bootstrap-style palette.
    Classic,
}

impl BuiltinPreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Classic => "classic",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Material => "Material",
            Self::Classic => "Classic",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [BuiltinPreset] {
        const PRESETS: [BuiltinPreset; 2] = [BuiltinPreset::Material, BuiltinPreset::Classic];
        &PRESETS
    }

    /// Light and dark seed palettes for this preset.
    pub fn seed(self) -> ThemeSeed {
        match self {
            Self::Material => ThemeSeed::new(
                palette([
                    "#6750A4", "#625B71", "#006C4C", "#BA1A1A", "#7C5800", "#006874", "#FFFBFE",
                    "#1C1B1F", "#1C1B1F",
                ]),
                palette([
                    "#D0BCFF", "#CCC2DC", "#6DD58C", "#FFB4AB", "#F9BC2D", "#4FD8EB", "#1C1B1F",
                    "#E6E1E5", "#E6E1E5",
                ]),
            ),
            Self::Classic => ThemeSeed::new(
                palette([
                    "#0d6efd", "#6c757d", "#198754", "#dc3545", "#ffc107", "#0dcaf0", "#ffffff",
                    "#212529", "#212529",
                ]),
                palette([
                    "#0d6efd", "#6c757d", "#198754", "#dc3545", "#ffc107", "#0dcaf0", "#212529",
                    "#dee2e6", "#dee2e6",
                ]),
            ),
        }
    }
}

impl Display for BuiltinPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for BuiltinPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| format!("Unknown preset: {}", s))
    }
}

/// Core colors in declaration order: primary, secondary, success, error,
/// warning, info, body bg, body color, heading color.
fn palette(colors: [&str; 9]) -> SeedPalette {
    let [primary, secondary, success, error, warning, info, body_bg, body_color, heading_color] =
        colors.map(String::from);
    SeedPalette::trusted(
        CoreColors {
            primary,
            secondary,
            success,
            error,
            warning,
            info,
            body_bg,
            body_color,
            heading_color,
        },
        PaletteOverrides::default(),
        standard_tokens(),
    )
}

/// Non-color base tokens shared by the built-in presets.
pub fn standard_tokens() -> BTreeMap<String, String> {
    [
        ("border-radius", "0.375rem"),
        ("border-radius-sm", "0.25rem"),
        ("border-radius-lg", "0.5rem"),
        ("spacing-sm", "0.5rem"),
        ("spacing-md", "1rem"),
        ("spacing-lg", "1.5rem"),
        ("font-size-sm", "0.875rem"),
        ("font-size-base", "1rem"),
        ("font-size-lg", "1.25rem"),
        (
            "font-sans-serif",
            "system-ui, -apple-system, \"Segoe UI\", Roboto, sans-serif",
        ),
        ("box-shadow", "0 0.5rem 1rem rgba(0, 0, 0, 0.15)"),
        (
            "gradient",
            "linear-gradient(180deg, rgba(255, 255, 255, 0.15), rgba(255, 255, 255, 0))",
        ),
        ("transition-duration", "150ms"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
