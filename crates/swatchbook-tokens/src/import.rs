//! Gatekeeping for externally supplied token documents.
//!
//! [`validate_imported`] is a shallow shape check that stops at the first
//! violation, unlike [`validate`](crate::validate) which collects every issue.
//! Checks run in this order:
//!
//! 1. the document is an object
//! 2. it has a `light` object
//! 3. it has a `dark` object
//! 4. every value in both is a string

use serde_json::{Map, Value};

use crate::error::ImportError;
use crate::token::{ColorMode, ThemeTokenSet, TokenMapping};

fn mode_object(root: &Map<String, Value>, mode: ColorMode) -> Result<&Map<String, Value>, ImportError> {
    root.get(mode.as_str())
        .and_then(Value::as_object)
        .ok_or(ImportError::MissingMode(mode))
}

/// Checks the shape of an imported document, returning the first violation.
///
/// ```rust
/// use serde_json::json;
/// use swatchbook_tokens::{validate_imported, ImportError};
///
/// assert!(validate_imported(&json!({"light": {}, "dark": {}})).is_ok());
/// assert_eq!(validate_imported(&json!(null)), Err(ImportError::NotAnObject));
/// ```
pub fn validate_imported(data: &Value) -> Result<(), ImportError> {
    let root = data.as_object().ok_or(ImportError::NotAnObject)?;
    let light = mode_object(root, ColorMode::Light)?;
    let dark = mode_object(root, ColorMode::Dark)?;

    for (mode, tokens) in [(ColorMode::Light, light), (ColorMode::Dark, dark)] {
        if let Some((name, _)) = tokens.iter().find(|(_, v)| !v.is_string()) {
            return Err(ImportError::NonStringValue {
                mode,
                name: name.clone(),
            });
        }
    }
    Ok(())
}

fn mapping_from(tokens: &Map<String, Value>) -> Result<TokenMapping, ImportError> {
    let mut mapping = TokenMapping::new();
    for (name, value) in tokens {
        if let Some(value) = value.as_str() {
            mapping.insert(name.clone(), value)?;
        }
    }
    Ok(mapping)
}

impl ThemeTokenSet {
    /// Accepts a parsed document after it passes [`validate_imported`].
    ///
    /// Extra top-level keys (such as `version` or `generated`) are ignored.
    pub fn from_value(data: &Value) -> Result<Self, ImportError> {
        validate_imported(data)?;
        let root = data.as_object().ok_or(ImportError::NotAnObject)?;
        Ok(Self::new(
            mapping_from(mode_object(root, ColorMode::Light)?)?,
            mapping_from(mode_object(root, ColorMode::Dark)?)?,
        ))
    }

    /// Parses and accepts a JSON token document.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        let data: Value = serde_json::from_str(json)?;
        Self::from_value(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_an_object() {
        for data in [json!(null), json!([]), json!("theme"), json!(3)] {
            assert_eq!(validate_imported(&data), Err(ImportError::NotAnObject));
        }
    }

    #[test]
    fn test_missing_light_reported_first() {
        let err = validate_imported(&json!({"dark": {"a": 1}})).unwrap_err();
        assert_eq!(err, ImportError::MissingMode(ColorMode::Light));
    }

    #[test]
    fn test_light_must_be_object() {
        let err = validate_imported(&json!({"light": "x", "dark": {}})).unwrap_err();
        assert_eq!(err, ImportError::MissingMode(ColorMode::Light));
    }

    #[test]
    fn test_missing_dark() {
        let err = validate_imported(&json!({"light": {"a": 1}})).unwrap_err();
        assert_eq!(err, ImportError::MissingMode(ColorMode::Dark));
    }

    #[test]
    fn test_non_string_value() {
        let err =
            validate_imported(&json!({"light": {"a": "#fff"}, "dark": {"b": 2}})).unwrap_err();
        assert_eq!(
            err,
            ImportError::NonStringValue {
                mode: ColorMode::Dark,
                name: "b".into()
            }
        );
    }

    #[test]
    fn test_from_json_builds_mappings() {
        let set = ThemeTokenSet::from_json(
            r##"{"light": {"--bs-primary": "#6750A4"}, "dark": {"--bs-primary": "#D0BCFF"}, "version": "1.0.0"}"##,
        )
        .unwrap();
        assert_eq!(set.light.get("--bs-primary"), Some("#6750A4"));
        assert_eq!(set.get(ColorMode::Dark).get("--bs-primary"), Some("#D0BCFF"));
    }

    #[test]
    fn test_from_json_rejects_empty_value() {
        let err = ThemeTokenSet::from_json(r#"{"light": {"a": " "}, "dark": {}}"#).unwrap_err();
        assert!(matches!(err, ImportError::Mapping(_)));
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = ThemeTokenSet::from_json("{light").unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
    }
}
