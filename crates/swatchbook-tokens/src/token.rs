//! Token mappings, color modes and the token-name namespace.
//!
//! A [`TokenMapping`] is one visual mode's worth of `name → value` pairs.
//! It is backed by a `BTreeMap`, so iteration is always alphabetical by name
//! and every consumer (validator, exporters, applier) sees the same order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MappingError;
use crate::kind::{classify, TokenKind};

/// Light or dark visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Both modes, light first.
    pub fn all() -> [ColorMode; 2] {
        [ColorMode::Light, ColorMode::Dark]
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(format!("Unknown color mode: {}", other)),
        }
    }
}

/// The fixed prefix shared by every token name of a theme.
///
/// With the default prefix `bs`, the role `primary` becomes the custom
/// property `--bs-primary` and the mode marker is `data-bs-theme`.
///
/// ```rust
/// use swatchbook_tokens::Namespace;
///
/// let ns = Namespace::default();
/// assert_eq!(ns.var_name("body-bg"), "--bs-body-bg");
/// assert_eq!(ns.strip("--bs-body-bg"), "body-bg");
/// assert_eq!(ns.mode_attribute(), "data-bs-theme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Namespace {
    prefix: String,
}

impl Namespace {
    /// Creates a namespace. Surrounding whitespace and dashes are dropped, so
    /// `"--acme-"` and `"acme"` are equivalent. An empty prefix is allowed.
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            prefix: prefix.trim().trim_matches('-').to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Builds the full custom-property name for a role.
    pub fn var_name(&self, role: &str) -> String {
        if self.prefix.is_empty() {
            format!("--{}", role)
        } else {
            format!("--{}-{}", self.prefix, role)
        }
    }

    /// Strips the namespace (or a bare `--`) from a token name.
    ///
    /// Names that carry neither are returned unchanged.
    pub fn strip<'a>(&self, name: &'a str) -> &'a str {
        let full = format!("--{}-", self.prefix);
        if !self.prefix.is_empty() {
            if let Some(rest) = name.strip_prefix(full.as_str()) {
                return rest;
            }
        }
        name.strip_prefix("--").unwrap_or(name)
    }

    /// Root attribute that carries the active mode.
    pub fn mode_attribute(&self) -> String {
        if self.prefix.is_empty() {
            "data-theme".to_string()
        } else {
            format!("data-{}-theme", self.prefix)
        }
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new("bs")
    }
}

impl From<String> for Namespace {
    fn from(prefix: String) -> Self {
        Self::new(prefix)
    }
}

impl From<&str> for Namespace {
    fn from(prefix: &str) -> Self {
        Self::new(prefix)
    }
}

impl From<Namespace> for String {
    fn from(ns: Namespace) -> Self {
        ns.prefix
    }
}

/// A token borrowed from a mapping, classified once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub kind: TokenKind,
}

/// One visual mode's tokens, keyed by name.
///
/// Invariants: names are non-empty, values are trimmed and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>")]
pub struct TokenMapping(BTreeMap<String, String>);

impl TokenMapping {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts a token, trimming its value. Returns the previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] if the name is empty or the value is empty
    /// after trimming.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl AsRef<str>,
    ) -> Result<Option<String>, MappingError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MappingError::EmptyName);
        }
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(MappingError::EmptyValue { name });
        }
        Ok(self.0.insert(name, value.to_string()))
    }

    /// Builder-style [`insert`](TokenMapping::insert).
    pub fn with(
        mut self,
        name: impl Into<String>,
        value: impl AsRef<str>,
    ) -> Result<Self, MappingError> {
        self.insert(name, value)?;
        Ok(self)
    }

    /// Wraps a map whose values were produced internally, dropping any
    /// entry that would break the invariants.
    pub(crate) fn from_trusted(mut map: BTreeMap<String, String>) -> Self {
        map.retain(|name, value| {
            let keep = !name.trim().is_empty() && !value.trim().is_empty();
            if keep {
                *value = value.trim().to_string();
            }
            keep
        });
        Self(map)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates tokens in name order with their kind derived once.
    pub fn tokens(&self) -> impl Iterator<Item = Token<'_>> {
        self.0.iter().map(|(name, value)| Token {
            name,
            value,
            kind: classify(value),
        })
    }

    /// Copies every token of `other` into this mapping; `other` wins on conflicts.
    pub fn merge(&mut self, other: &TokenMapping) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

impl TryFrom<BTreeMap<String, String>> for TokenMapping {
    type Error = MappingError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut mapping = TokenMapping::new();
        for (name, value) in map {
            mapping.insert(name, value)?;
        }
        Ok(mapping)
    }
}

impl<'a> IntoIterator for &'a TokenMapping {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A complete theme: one mapping per mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTokenSet {
    pub light: TokenMapping,
    pub dark: TokenMapping,
}

impl ThemeTokenSet {
    pub fn new(light: TokenMapping, dark: TokenMapping) -> Self {
        Self { light, dark }
    }

    pub fn get(&self, mode: ColorMode) -> &TokenMapping {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    pub fn get_mut(&mut self, mode: ColorMode) -> &mut TokenMapping {
        match mode {
            ColorMode::Light => &mut self.light,
            ColorMode::Dark => &mut self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Namespace
    // =========================================================================

    #[test]
    fn test_namespace_normalizes_prefix() {
        assert_eq!(Namespace::new("--acme-").prefix(), "acme");
        assert_eq!(Namespace::new(" acme ").var_name("x"), "--acme-x");
    }

    #[test]
    fn test_namespace_strip() {
        let ns = Namespace::default();
        assert_eq!(ns.strip("--bs-primary-rgb"), "primary-rgb");
        assert_eq!(ns.strip("--other-token"), "other-token");
        assert_eq!(ns.strip("plain"), "plain");
    }

    #[test]
    fn test_empty_namespace() {
        let ns = Namespace::new("");
        assert_eq!(ns.var_name("primary"), "--primary");
        assert_eq!(ns.strip("--primary"), "primary");
        assert_eq!(ns.mode_attribute(), "data-theme");
    }

    // =========================================================================
    // TokenMapping
    // =========================================================================

    #[test]
    fn test_insert_trims_value() {
        let mut m = TokenMapping::new();
        m.insert("--bs-primary", "  #6750A4 ").unwrap();
        assert_eq!(m.get("--bs-primary"), Some("#6750A4"));
    }

    #[test]
    fn test_insert_rejects_empty_value() {
        let mut m = TokenMapping::new();
        let err = m.insert("--bs-primary", "   ").unwrap_err();
        assert!(matches!(err, MappingError::EmptyValue { .. }));
        assert!(m.is_empty());
    }

    #[test]
    fn test_insert_rejects_empty_name() {
        let mut m = TokenMapping::new();
        assert_eq!(m.insert("", "#fff").unwrap_err(), MappingError::EmptyName);
    }

    #[test]
    fn test_iteration_is_alphabetical() {
        let m = TokenMapping::new()
            .with("zeta", "1px")
            .unwrap()
            .with("alpha", "#fff")
            .unwrap();
        let names: Vec<&str> = m.names().collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_tokens_are_classified() {
        let m = TokenMapping::new()
            .with("a", "#fff")
            .unwrap()
            .with("b", "1rem")
            .unwrap();
        let kinds: Vec<TokenKind> = m.tokens().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Color, TokenKind::Dimension]);
    }

    #[test]
    fn test_deserialize_rejects_empty_values() {
        let err = serde_json::from_str::<TokenMapping>(r#"{"a": "  "}"#);
        assert!(err.is_err());
        let ok: TokenMapping = serde_json::from_str(r#"{"a": " #fff "}"#).unwrap();
        assert_eq!(ok.get("a"), Some("#fff"));
    }

    #[test]
    fn test_from_trusted_drops_empty_entries() {
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), "".to_string());
        map.insert("b".to_string(), " x ".to_string());
        let m = TokenMapping::from_trusted(map);
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("b"), Some("x"));
    }

    #[test]
    fn test_merge_other_wins() {
        let mut base = TokenMapping::new().with("a", "1").unwrap();
        let other = TokenMapping::new().with("a", "2").unwrap();
        base.merge(&other);
        assert_eq!(base.get("a"), Some("2"));
    }

    #[test]
    fn test_color_mode_parse() {
        assert_eq!("Dark".parse::<ColorMode>().unwrap(), ColorMode::Dark);
        assert!("dim".parse::<ColorMode>().is_err());
    }
}
