//! Token value validation.
//!
//! [`validate`] checks a single token and accumulates every issue it finds.
//! Issues come in two severities:
//!
//! - **errors** make the token unacceptable (`valid == false`)
//! - **warnings** are advisory and never block
//!
//! The split lets legacy or bulk-imported themes through while still showing
//! what looks risky. [`validate_mapping`] runs the same checks over a whole
//! [`TokenMapping`].

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::kind::{classify, TokenKind};
use crate::token::TokenMapping;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^#([0-9a-f]{3}|[0-9a-f]{6}|[0-9a-f]{8})$").expect("hex pattern compiles")
});

static RGB_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^rgba?\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*(,\s*[\d.]+\s*)?\)$")
        .expect("rgb pattern compiles")
});

static DIMENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d+(\.\d+)?(rem|px|em|%|s|ms|vh|vw|ch|ex|vmin|vmax)$")
        .expect("dimension pattern compiles")
});

static BARE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+$").expect("keyword pattern compiles"));

const COLOR_KEYWORDS: [&str; 11] = [
    "red",
    "blue",
    "green",
    "yellow",
    "white",
    "black",
    "transparent",
    "currentcolor",
    "inherit",
    "initial",
    "unset",
];

const TEXT_KEYWORDS: [&str; 7] = [
    "currentcolor",
    "inherit",
    "initial",
    "unset",
    "none",
    "auto",
    "normal",
];

/// Name fragments that mark a token as holding a color even when its value
/// classifies as text.
const COLOR_NAME_HINTS: [&str; 8] = [
    "color",
    "bg",
    "background",
    "border-color",
    "brand",
    "accent",
    "fill",
    "stroke",
];

const GRADIENT_FUNCTIONS: [&str; 3] = ["linear-gradient", "radial-gradient", "conic-gradient"];

const PURE_WHITE: [&str; 3] = ["white", "#fff", "#ffffff"];
const PURE_BLACK: [&str; 3] = ["black", "#000", "#000000"];

/// A single finding about a token value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenIssue {
    #[error("Token value cannot be empty")]
    EmptyValue,

    #[error("Invalid hex color format '{value}' (expected #RGB, #RRGGBB or #RRGGBBAA)")]
    InvalidHexColor { value: String },

    #[error("Invalid rgb()/rgba() color format '{value}'")]
    InvalidRgbColor { value: String },

    #[error("Unknown color keyword '{value}'")]
    UnknownColorKeyword { value: String },

    #[error("Invalid dimension '{value}' (expected a number followed by a CSS unit)")]
    InvalidDimension { value: String },

    #[error("Negative value '{value}' for a size or spacing token")]
    NegativeDimension { value: String },

    #[error("Shadow value should include px or rem lengths")]
    ShadowWithoutLengths,

    #[error("Gradient should use linear-gradient, radial-gradient or conic-gradient")]
    UnrecognizedGradient,

    #[error("Text color '{value}' is pure white or black and may fail contrast on same-toned surfaces")]
    ExtremeTextColor { value: String },

    #[error("Value contains double spaces")]
    DoubleSpaces,

    #[error("Value has leading or trailing whitespace")]
    SurroundingWhitespace,
}

/// Result of validating one token. Built fresh on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<TokenIssue>,
    pub warnings: Vec<TokenIssue>,
}

impl ValidationResult {
    fn from_issues(errors: Vec<TokenIssue>, warnings: Vec<TokenIssue>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Validates a token value.
///
/// The kind is `explicit` when given, otherwise [`classify`]`(value)`. An
/// empty (or whitespace-only) value yields exactly one error and no other
/// checks run.
///
/// ```rust
/// use swatchbook_tokens::{validate, TokenIssue};
///
/// let result = validate("brand-primary", "#12", None);
/// assert!(!result.valid);
/// assert!(matches!(result.errors[0], TokenIssue::InvalidHexColor { .. }));
///
/// let result = validate("brand-accent", "chartreuse", None);
/// assert!(result.valid);
/// assert!(!result.warnings.is_empty());
/// ```
pub fn validate(name: &str, value: &str, explicit: Option<TokenKind>) -> ValidationResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return ValidationResult::from_issues(vec![TokenIssue::EmptyValue], Vec::new());
    }

    let kind = explicit.unwrap_or_else(|| classify(value));
    let lower = trimmed.to_lowercase();
    let name_lower = name.to_lowercase();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    match kind {
        TokenKind::Color => {
            if lower.starts_with('#') {
                if !HEX_COLOR.is_match(trimmed) {
                    errors.push(TokenIssue::InvalidHexColor {
                        value: trimmed.to_string(),
                    });
                }
            } else if lower.starts_with("rgb") {
                if !RGB_COLOR.is_match(trimmed) {
                    errors.push(TokenIssue::InvalidRgbColor {
                        value: trimmed.to_string(),
                    });
                }
            } else if !COLOR_KEYWORDS.contains(&lower.as_str()) {
                warnings.push(TokenIssue::UnknownColorKeyword {
                    value: trimmed.to_string(),
                });
            }

            // Name-based heuristic: misses text roles not spelled "text"
            // (e.g. "link-foreground").
            if name_lower.contains("text")
                && (PURE_WHITE.contains(&lower.as_str()) || PURE_BLACK.contains(&lower.as_str()))
            {
                warnings.push(TokenIssue::ExtremeTextColor {
                    value: trimmed.to_string(),
                });
            }
        }
        TokenKind::Dimension => {
            if !DIMENSION.is_match(&lower) {
                errors.push(TokenIssue::InvalidDimension {
                    value: trimmed.to_string(),
                });
            } else if lower.starts_with('-')
                && (name_lower.contains("size") || name_lower.contains("spacing"))
            {
                warnings.push(TokenIssue::NegativeDimension {
                    value: trimmed.to_string(),
                });
            }
        }
        TokenKind::Shadow => {
            if !lower.contains("px") && !lower.contains("rem") {
                warnings.push(TokenIssue::ShadowWithoutLengths);
            }
        }
        TokenKind::Gradient => {
            if !GRADIENT_FUNCTIONS.iter().any(|f| lower.contains(f)) {
                warnings.push(TokenIssue::UnrecognizedGradient);
            }
        }
        TokenKind::Text => {
            // A bare word in a color-named token is most likely a color
            // keyword the classifier does not know.
            if BARE_WORD.is_match(&lower)
                && COLOR_NAME_HINTS.iter().any(|hint| name_lower.contains(hint))
                && !COLOR_KEYWORDS.contains(&lower.as_str())
                && !TEXT_KEYWORDS.contains(&lower.as_str())
            {
                warnings.push(TokenIssue::UnknownColorKeyword {
                    value: trimmed.to_string(),
                });
            }
        }
    }

    if trimmed.contains("  ") {
        warnings.push(TokenIssue::DoubleSpaces);
    }
    if value != trimmed {
        warnings.push(TokenIssue::SurroundingWhitespace);
    }

    ValidationResult::from_issues(errors, warnings)
}

/// Validation results for every token of a mapping, in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingReport {
    results: BTreeMap<String, ValidationResult>,
}

impl MappingReport {
    /// True when no token has an error. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.results.values().all(|r| r.valid)
    }

    pub fn error_count(&self) -> usize {
        self.results.values().map(|r| r.errors.len()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.results.values().map(|r| r.warnings.len()).sum()
    }

    pub fn get(&self, name: &str) -> Option<&ValidationResult> {
        self.results.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationResult)> {
        self.results.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Names of tokens that have at least one error.
    pub fn invalid_tokens(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|(_, r)| !r.valid)
            .map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Validates every token of a mapping, classifying each value once.
pub fn validate_mapping(mapping: &TokenMapping) -> MappingReport {
    let results = mapping
        .tokens()
        .map(|token| {
            (
                token.name.to_string(),
                validate(token.name, token.value, Some(token.kind)),
            )
        })
        .collect();
    MappingReport { results }
}
