//! The [`Theme`] value: a light/dark token set and the namespace it lives in.

use serde::Serialize;
use swatchbook_export::{export, Export, ExportFormat, ExportOptions};
use swatchbook_tokens::{
    apply, audit_contrast, build_theme, validate_mapping, BuiltinPreset, ColorMode,
    ContrastFinding, ImportError, MappingError, MappingReport, Namespace, StyleTarget, ThemeSeed,
    ThemeTokenSet, TokenMapping,
};

use crate::error::ThemeError;

/// Validation results for both modes of a theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeReport {
    pub light: MappingReport,
    pub dark: MappingReport,
}

impl ThemeReport {
    pub fn is_valid(&self) -> bool {
        self.light.is_valid() && self.dark.is_valid()
    }

    pub fn get(&self, mode: ColorMode) -> &MappingReport {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    pub fn error_count(&self) -> usize {
        self.light.error_count() + self.dark.error_count()
    }

    pub fn warning_count(&self) -> usize {
        self.light.warning_count() + self.dark.warning_count()
    }
}

/// A complete theme.
///
/// ```rust
/// use swatchbook::{BuiltinPreset, ColorMode, ExportFormat, StyleRegistry, Theme};
///
/// let theme = Theme::from_preset(BuiltinPreset::Classic);
/// assert!(theme.validate().is_valid());
///
/// let css = theme.export(ExportFormat::Css).unwrap();
/// assert!(css.content.starts_with(":root,\n[data-bs-theme=\"light\"] {"));
///
/// let mut root = StyleRegistry::new();
/// theme.apply(ColorMode::Dark, Some(&mut root));
/// assert_eq!(root.attribute("data-bs-theme"), Some("dark"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    tokens: ThemeTokenSet,
    namespace: Namespace,
}

impl Theme {
    pub fn new(tokens: ThemeTokenSet, namespace: impl Into<Namespace>) -> Self {
        Self {
            tokens,
            namespace: namespace.into(),
        }
    }

    /// Builds both modes of `seed` in the seed's namespace.
    pub fn from_seed(seed: &ThemeSeed) -> Self {
        Self::new(build_theme(seed), seed.namespace.clone())
    }

    pub fn from_preset(preset: BuiltinPreset) -> Self {
        tracing::debug!(preset = preset.id(), "building built-in preset");
        Self::from_seed(&preset.seed())
    }

    /// Loads a YAML theme seed and builds it.
    pub fn from_seed_yaml(yaml: &str) -> Result<Self, ThemeError> {
        Ok(Self::from_seed(&ThemeSeed::from_yaml(yaml)?))
    }

    /// Loads a JSON theme seed and builds it.
    pub fn from_seed_json(json: &str) -> Result<Self, ThemeError> {
        Ok(Self::from_seed(&ThemeSeed::from_json(json)?))
    }

    /// Accepts a previously exported JSON snapshot.
    pub fn import_json(json: &str, namespace: impl Into<Namespace>) -> Result<Self, ImportError> {
        let tokens = ThemeTokenSet::from_json(json)?;
        Ok(Self::new(tokens, namespace))
    }

    pub fn tokens(&self) -> &ThemeTokenSet {
        &self.tokens
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn mode(&self, mode: ColorMode) -> &TokenMapping {
        self.tokens.get(mode)
    }

    /// Sets one token in one mode, returning the previous value.
    pub fn set_token(
        &mut self,
        mode: ColorMode,
        name: impl Into<String>,
        value: &str,
    ) -> Result<Option<String>, MappingError> {
        self.tokens.get_mut(mode).insert(name, value)
    }

    pub fn validate(&self) -> ThemeReport {
        ThemeReport {
            light: validate_mapping(&self.tokens.light),
            dark: validate_mapping(&self.tokens.dark),
        }
    }

    pub fn audit(&self, mode: ColorMode) -> Vec<ContrastFinding> {
        audit_contrast(self.tokens.get(mode), &self.namespace)
    }

    pub fn export(&self, format: ExportFormat) -> Result<Export, ThemeError> {
        let opts = ExportOptions::new(self.namespace.clone());
        Ok(export(
            format,
            &self.tokens.light,
            Some(&self.tokens.dark),
            &opts,
        )?)
    }

    /// Pushes one mode's tokens into a live style target, if there is one.
    pub fn apply(&self, mode: ColorMode, target: Option<&mut dyn StyleTarget>) {
        apply(self.tokens.get(mode), mode, target, &self.namespace);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_token_rejects_empty_value() {
        let mut theme = Theme::from_preset(BuiltinPreset::Material);
        assert!(theme.set_token(ColorMode::Light, "--bs-primary", "  ").is_err());
        assert_eq!(theme.mode(ColorMode::Light).get("--bs-primary"), Some("#6750A4"));
    }

    #[test]
    fn test_set_token_replaces_value() {
        let mut theme = Theme::from_preset(BuiltinPreset::Material);
        let prev = theme
            .set_token(ColorMode::Dark, "--bs-primary", "#ffffff")
            .unwrap();
        assert_eq!(prev.as_deref(), Some("#D0BCFF"));
        assert_eq!(theme.mode(ColorMode::Dark).get("--bs-primary"), Some("#ffffff"));
    }

    #[test]
    fn test_report_counts_both_modes() {
        let mut theme = Theme::new(ThemeTokenSet::default(), "bs");
        theme
            .set_token(ColorMode::Light, "--bs-primary", "#12")
            .unwrap();
        theme
            .set_token(ColorMode::Dark, "--bs-primary", "#12")
            .unwrap();
        let report = theme.validate();
        assert!(!report.is_valid());
        assert_eq!(report.error_count(), 2);
        assert_eq!(report.get(ColorMode::Dark).error_count(), 1);
    }
}
