//! Seed palettes: the configuration a theme author writes.
//!
//! A [`SeedPalette`] is split into the nine [`CoreColors`] every theme must
//! supply and an optional tail of [`PaletteOverrides`]. Everything the
//! overrides leave out is derived by the [preset builder](crate::preset).
//!
//! Palettes are validated once, when they are constructed or deserialized,
//! so the builder never has to second-guess its input.
//!
//! ## YAML format
//!
//! Keys use camelCase. Overrides are grouped per semantic role.
//!
//! ```rust
//! use swatchbook_tokens::SeedPalette;
//!
//! let palette = SeedPalette::from_yaml(r##"
//! primary: "#6750A4"
//! secondary: "#625B71"
//! success: "#006C4C"
//! error: "#BA1A1A"
//! warning: "#7C5800"
//! info: "#006874"
//! bodyBg: "#FFFBFE"
//! bodyColor: "#1C1B1F"
//! headingColor: "#1C1B1F"
//! overrides:
//!   primary:
//!     hover: "#5B4694"
//!   form:
//!     invalidColor: "#93000A"
//! brand:
//!   logo: "#6750A4"
//! tokens:
//!   border-radius: 0.375rem
//! "##).unwrap();
//!
//! assert_eq!(palette.core().primary, "#6750A4");
//! assert_eq!(palette.overrides().primary.hover.as_deref(), Some("#5B4694"));
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::colorspace::Rgb;
use crate::error::PaletteError;
use crate::kind::TokenKind;
use crate::token::{Namespace, TokenMapping};
use crate::validate::validate;

static RGB_TRIPLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,3},\s*\d{1,3},\s*\d{1,3}$").expect("triplet pattern compiles")
});

/// The semantic roles that get the full set of derived tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Primary,
    Secondary,
    Success,
    Error,
    Warning,
    Info,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Success => "success",
            Role::Error => "error",
            Role::Warning => "warning",
            Role::Info => "info",
        }
    }

    pub fn all() -> &'static [Role] {
        const ROLES: [Role; 6] = [
            Role::Primary,
            Role::Secondary,
            Role::Success,
            Role::Error,
            Role::Warning,
            Role::Info,
        ];
        &ROLES
    }
}

/// The nine colors every palette must define, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreColors {
    pub primary: String,
    pub secondary: String,
    pub success: String,
    pub error: String,
    pub warning: String,
    pub info: String,
    pub body_bg: String,
    pub body_color: String,
    pub heading_color: String,
}

impl CoreColors {
    /// Base color of a semantic role.
    pub fn role(&self, role: Role) -> &str {
        match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Success => &self.success,
            Role::Error => &self.error,
            Role::Warning => &self.warning,
            Role::Info => &self.info,
        }
    }

    fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("success", &self.success),
            ("error", &self.error),
            ("warning", &self.warning),
            ("info", &self.info),
            ("bodyBg", &self.body_bg),
            ("bodyColor", &self.body_color),
            ("headingColor", &self.heading_color),
        ]
    }
}

/// Optional per-role overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoleOverrides {
    pub hover: Option<String>,
    /// `"r, g, b"` triplet.
    pub rgb: Option<String>,
    pub text_emphasis: Option<String>,
    pub bg_subtle: Option<String>,
    pub border_subtle: Option<String>,
}

/// Optional form-validation colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormOverrides {
    pub valid_color: Option<String>,
    pub valid_border_color: Option<String>,
    pub invalid_color: Option<String>,
    pub invalid_border_color: Option<String>,
}

/// Every optional knob of a palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaletteOverrides {
    pub primary: RoleOverrides,
    pub secondary: RoleOverrides,
    pub success: RoleOverrides,
    pub error: RoleOverrides,
    pub warning: RoleOverrides,
    pub info: RoleOverrides,
    pub tertiary_bg_subtle: Option<String>,
    pub brand_bg_subtle: Option<String>,
    pub link_color: Option<String>,
    pub link_hover_color: Option<String>,
    pub form: FormOverrides,
}

impl PaletteOverrides {
    pub fn role(&self, role: Role) -> &RoleOverrides {
        match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Success => &self.success,
            Role::Error => &self.error,
            Role::Warning => &self.warning,
            Role::Info => &self.info,
        }
    }

    pub fn role_mut(&mut self, role: Role) -> &mut RoleOverrides {
        match role {
            Role::Primary => &mut self.primary,
            Role::Secondary => &mut self.secondary,
            Role::Success => &mut self.success,
            Role::Error => &mut self.error,
            Role::Warning => &mut self.warning,
            Role::Info => &mut self.info,
        }
    }

    fn validate(&self) -> Result<(), PaletteError> {
        for role in Role::all() {
            let o = self.role(*role);
            let name = role.as_str();
            check_color_override(&format!("{}.hover", name), o.hover.as_deref())?;
            check_color_override(&format!("{}.textEmphasis", name), o.text_emphasis.as_deref())?;
            check_color_override(&format!("{}.bgSubtle", name), o.bg_subtle.as_deref())?;
            check_color_override(&format!("{}.borderSubtle", name), o.border_subtle.as_deref())?;
            if let Some(rgb) = o.rgb.as_deref() {
                if !RGB_TRIPLET.is_match(rgb.trim()) {
                    return Err(PaletteError::InvalidRgbOverride {
                        field: format!("{}.rgb", name),
                        value: rgb.to_string(),
                    });
                }
            }
        }
        check_color_override("tertiaryBgSubtle", self.tertiary_bg_subtle.as_deref())?;
        check_color_override("brandBgSubtle", self.brand_bg_subtle.as_deref())?;
        check_color_override("linkColor", self.link_color.as_deref())?;
        check_color_override("linkHoverColor", self.link_hover_color.as_deref())?;
        check_color_override("form.validColor", self.form.valid_color.as_deref())?;
        check_color_override("form.validBorderColor", self.form.valid_border_color.as_deref())?;
        check_color_override("form.invalidColor", self.form.invalid_color.as_deref())?;
        check_color_override(
            "form.invalidBorderColor",
            self.form.invalid_border_color.as_deref(),
        )?;
        Ok(())
    }
}

fn check_color_override(field: &str, value: Option<&str>) -> Result<(), PaletteError> {
    let Some(value) = value else {
        return Ok(());
    };
    let result = validate(field, value, Some(TokenKind::Color));
    match result.errors.first() {
        Some(issue) => Err(PaletteError::InvalidOverride {
            field: field.to_string(),
            reason: issue.to_string(),
        }),
        None => Ok(()),
    }
}

/// Serde mirror of [`SeedPalette`]; converted through validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedPaletteDef {
    #[serde(flatten)]
    core: CoreColors,
    #[serde(default)]
    overrides: PaletteOverrides,
    #[serde(default)]
    brand: BTreeMap<String, String>,
    #[serde(default)]
    tokens: BTreeMap<String, String>,
}

/// A validated seed palette for one visual mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeedPaletteDef", rename_all = "camelCase")]
pub struct SeedPalette {
    #[serde(flatten)]
    core: CoreColors,
    overrides: PaletteOverrides,
    brand: BTreeMap<String, String>,
    tokens: TokenMapping,
}

impl SeedPalette {
    /// Creates a palette from its core colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidCoreColor`] if a core color is not a
    /// `#RGB` or `#RRGGBB` hex value.
    pub fn new(core: CoreColors) -> Result<Self, PaletteError> {
        for (field, value) in core.fields() {
            let v = value.trim();
            let is_hex = v.starts_with('#') && matches!(v.len(), 4 | 7);
            if !is_hex || Rgb::from_hex(v).is_none() {
                return Err(PaletteError::InvalidCoreColor {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(Self {
            core,
            overrides: PaletteOverrides::default(),
            brand: BTreeMap::new(),
            tokens: TokenMapping::new(),
        })
    }

    /// Replaces the overrides after validating them.
    pub fn with_overrides(mut self, overrides: PaletteOverrides) -> Result<Self, PaletteError> {
        overrides.validate()?;
        self.overrides = overrides;
        Ok(self)
    }

    /// Adds a brand color, emitted as `--<ns>-brand-<key>`.
    pub fn with_brand(
        mut self,
        key: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, PaletteError> {
        let key = key.into();
        let color = color.into();
        if key.trim().is_empty() {
            return Err(crate::error::MappingError::EmptyName.into());
        }
        check_color_override(&format!("brand.{}", key), Some(&color))?;
        self.brand.insert(key, color.trim().to_string());
        Ok(self)
    }

    /// Adds a base token. Base tokens win over every derived token.
    ///
    /// Names without a leading `--` are namespaced when the palette is built.
    pub fn with_token(
        mut self,
        name: impl Into<String>,
        value: impl AsRef<str>,
    ) -> Result<Self, PaletteError> {
        self.tokens.insert(name, value)?;
        Ok(self)
    }

    /// Assembles a palette from data known to be valid (built-in presets).
    pub(crate) fn trusted(
        core: CoreColors,
        overrides: PaletteOverrides,
        tokens: BTreeMap<String, String>,
    ) -> Self {
        Self {
            core,
            overrides,
            brand: BTreeMap::new(),
            tokens: TokenMapping::from_trusted(tokens),
        }
    }

    pub fn core(&self) -> &CoreColors {
        &self.core
    }

    pub fn overrides(&self) -> &PaletteOverrides {
        &self.overrides
    }

    pub fn brand(&self) -> &BTreeMap<String, String> {
        &self.brand
    }

    pub fn tokens(&self) -> &TokenMapping {
        &self.tokens
    }

    /// Loads a palette from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, PaletteError> {
        let def: SeedPaletteDef = serde_yaml::from_str(yaml)?;
        Self::try_from(def)
    }

    /// Loads a palette from JSON.
    pub fn from_json(json: &str) -> Result<Self, PaletteError> {
        let def: SeedPaletteDef = serde_json::from_str(json)?;
        Self::try_from(def)
    }
}

impl TryFrom<SeedPaletteDef> for SeedPalette {
    type Error = PaletteError;

    fn try_from(def: SeedPaletteDef) -> Result<Self, Self::Error> {
        let mut palette = SeedPalette::new(def.core)?.with_overrides(def.overrides)?;
        for (key, color) in def.brand {
            palette = palette.with_brand(key, color)?;
        }
        palette.tokens = TokenMapping::try_from(def.tokens)?;
        Ok(palette)
    }
}

/// A light and a dark palette, plus the namespace their tokens live in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSeed {
    #[serde(default)]
    pub namespace: Namespace,
    pub light: SeedPalette,
    pub dark: SeedPalette,
}

impl ThemeSeed {
    pub fn new(light: SeedPalette, dark: SeedPalette) -> Self {
        Self {
            namespace: Namespace::default(),
            light,
            dark,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<Namespace>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Loads a theme seed (`namespace`, `light`, `dark`) from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, PaletteError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a theme seed from JSON.
    pub fn from_json(json: &str) -> Result<Self, PaletteError> {
        Ok(serde_json::from_str(json)?)
    }
}
