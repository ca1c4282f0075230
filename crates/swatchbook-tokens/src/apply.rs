//! Applying a token mapping to a live style environment.
//!
//! The engine does not know about any particular DOM. A host implements
//! [`StyleTarget`] for its root element; [`apply`] sets the mode marker and
//! writes each token as a custom property. When there is no live environment
//! the host passes `None` and nothing happens.
//!
//! [`apply`] does no validation. Callers that preview several themes at once
//! must serialize their calls; the last write wins.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::token::{ColorMode, Namespace, TokenMapping};

/// A DOM-like root element that accepts attributes and inline custom properties.
pub trait StyleTarget {
    fn set_attribute(&mut self, name: &str, value: &str);
    fn set_property(&mut self, name: &str, value: &str);
}

/// In-memory [`StyleTarget`] for headless previews and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRegistry {
    attributes: BTreeMap<String, String>,
    properties: BTreeMap<String, String>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.attributes.clear();
        self.properties.clear();
    }
}

impl StyleTarget for StyleRegistry {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }
}

/// Writes `tokens` into `target` as the active `mode`.
///
/// Token names without a leading `--` are written as `--<name>`.
pub fn apply(
    tokens: &TokenMapping,
    mode: ColorMode,
    target: Option<&mut dyn StyleTarget>,
    namespace: &Namespace,
) {
    let Some(target) = target else {
        tracing::trace!(mode = %mode, "no live style target, skipping apply");
        return;
    };

    target.set_attribute(&namespace.mode_attribute(), mode.as_str());
    for (name, value) in tokens.iter() {
        let property = if name.starts_with("--") {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(format!("--{}", name))
        };
        target.set_property(&property, value);
    }
    tracing::trace!(mode = %mode, tokens = tokens.len(), "applied tokens");
}
