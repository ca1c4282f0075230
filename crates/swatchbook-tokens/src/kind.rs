//! Token classification.
//!
//! A token's semantic kind is never stored next to its value; it is derived
//! from the value's shape by [`classify`]. The result is a closed enum so that
//! later stages (validation, export) match on it instead of re-sniffing the
//! string.
//!
//! | Kind | Recognised by |
//! |------|---------------|
//! | [`TokenKind::Color`] | `#…`, `rgb(…)`, `rgba(…)`, or a basic named color |
//! | [`TokenKind::Dimension`] | `<number><unit>` with unit in `rem px em % s ms` |
//! | [`TokenKind::Gradient`] | contains `gradient` |
//! | [`TokenKind::Shadow`] | contains `shadow` |
//! | [`TokenKind::Text`] | anything else |

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Named colors the classifier recognises. The validator accepts a wider set.
pub(crate) const CLASSIFIER_COLOR_NAMES: [&str; 7] =
    ["red", "blue", "green", "yellow", "white", "black", "transparent"];

static CLASSIFIER_DIMENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d+(\.\d+)?(rem|px|em|%|s|ms)$").expect("dimension pattern compiles")
});

/// The semantic kind of a token value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenKind {
    #[serde(rename = "color")]
    Color,
    /// A length or duration with a unit. Serialized as `number`.
    #[serde(rename = "number")]
    Dimension,
    #[serde(rename = "gradient")]
    Gradient,
    #[serde(rename = "shadow")]
    Shadow,
    /// Fallback bucket for everything else (font stacks, keywords, triplets).
    #[serde(rename = "text")]
    Text,
}

impl TokenKind {
    /// Stable wire name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Color => "color",
            TokenKind::Dimension => "number",
            TokenKind::Gradient => "gradient",
            TokenKind::Shadow => "shadow",
            TokenKind::Text => "text",
        }
    }

    pub fn all() -> &'static [TokenKind] {
        const KINDS: [TokenKind; 5] = [
            TokenKind::Color,
            TokenKind::Dimension,
            TokenKind::Gradient,
            TokenKind::Shadow,
            TokenKind::Text,
        ];
        &KINDS
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "color" => Ok(TokenKind::Color),
            "number" | "dimension" => Ok(TokenKind::Dimension),
            "gradient" => Ok(TokenKind::Gradient),
            "shadow" => Ok(TokenKind::Shadow),
            "text" => Ok(TokenKind::Text),
            other => Err(format!("Unknown token kind: {}", other)),
        }
    }
}

/// Derives the kind of a raw token value.
///
/// Matching is done on a trimmed, lowercased copy; the value itself is never
/// altered. Every string has a classification.
///
/// ```rust
/// use swatchbook_tokens::{classify, TokenKind};
///
/// assert_eq!(classify("#6750A4"), TokenKind::Color);
/// assert_eq!(classify("0.375rem"), TokenKind::Dimension);
/// assert_eq!(classify("linear-gradient(#fff, #000)"), TokenKind::Gradient);
/// assert_eq!(classify("system-ui, sans-serif"), TokenKind::Text);
/// ```
pub fn classify(value: &str) -> TokenKind {
    let v = value.trim().to_lowercase();

    if v.starts_with('#')
        || v.starts_with("rgb(")
        || v.starts_with("rgba(")
        || CLASSIFIER_COLOR_NAMES.contains(&v.as_str())
    {
        return TokenKind::Color;
    }

    if CLASSIFIER_DIMENSION.is_match(&v) {
        return TokenKind::Dimension;
    }

    if v.contains("gradient") {
        return TokenKind::Gradient;
    }

    if v.contains("shadow") {
        return TokenKind::Shadow;
    }

    TokenKind::Text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_colors() {
        assert_eq!(classify("#fff"), TokenKind::Color);
        assert_eq!(classify("rgb(1, 2, 3)"), TokenKind::Color);
        assert_eq!(classify("RGBA(1, 2, 3, 0.5)"), TokenKind::Color);
        assert_eq!(classify("  Transparent "), TokenKind::Color);
        assert_eq!(classify("black"), TokenKind::Color);
    }

    #[test]
    fn test_classify_named_color_outside_small_set_is_text() {
        assert_eq!(classify("chartreuse"), TokenKind::Text);
        assert_eq!(classify("currentcolor"), TokenKind::Text);
    }

    #[test]
    fn test_classify_dimensions() {
        assert_eq!(classify("1rem"), TokenKind::Dimension);
        assert_eq!(classify("-0.5px"), TokenKind::Dimension);
        assert_eq!(classify("150ms"), TokenKind::Dimension);
        assert_eq!(classify("50%"), TokenKind::Dimension);
        assert_eq!(classify("2s"), TokenKind::Dimension);
    }

    #[test]
    fn test_classify_dimension_requires_known_unit() {
        // Units only the validator knows fall through to text here.
        assert_eq!(classify("100vh"), TokenKind::Text);
        assert_eq!(classify(".5rem"), TokenKind::Text);
        assert_eq!(classify("12"), TokenKind::Text);
    }

    #[test]
    fn test_classify_gradient_and_shadow() {
        assert_eq!(
            classify("linear-gradient(180deg, #fff, #000)"),
            TokenKind::Gradient
        );
        assert_eq!(classify("box-shadow: 0 1px red"), TokenKind::Shadow);
        assert_eq!(classify("inset-shadow"), TokenKind::Shadow);
    }

    #[test]
    fn test_classify_fallback_text() {
        assert_eq!(classify(""), TokenKind::Text);
        assert_eq!(classify("system-ui, sans-serif"), TokenKind::Text);
        assert_eq!(classify("103, 80, 164"), TokenKind::Text);
    }

    #[test]
    fn test_kind_round_trips_through_name() {
        for kind in TokenKind::all() {
            assert_eq!(kind.as_str().parse::<TokenKind>().unwrap(), *kind);
        }
        assert_eq!("dimension".parse::<TokenKind>().unwrap(), TokenKind::Dimension);
        assert!("colour".parse::<TokenKind>().is_err());
    }
}
