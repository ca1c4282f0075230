//! Values an exporter could not represent.

use serde::Serialize;
use swatchbook_tokens::ColorMode;

use crate::format::ExportFormat;

/// A token value left out of an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedValue {
    /// `None` when the exporter works on merged or light-only input.
    pub mode: Option<ColorMode>,
    pub name: String,
    pub value: String,
    pub reason: String,
}

#[derive(Debug)]
pub(crate) struct SkipLog {
    format: ExportFormat,
    entries: Vec<SkippedValue>,
}

impl SkipLog {
    pub(crate) fn new(format: ExportFormat) -> Self {
        Self {
            format,
            entries: Vec::new(),
        }
    }

    pub(crate) fn skip(
        &mut self,
        mode: Option<ColorMode>,
        name: &str,
        value: &str,
        reason: impl Into<String>,
    ) {
        let reason = reason.into();
        tracing::warn!(
            format = %self.format,
            mode = ?mode,
            token = name,
            value,
            reason = %reason,
            "skipped token value"
        );
        self.entries.push(SkippedValue {
            mode,
            name: name.to_string(),
            value: value.to_string(),
            reason,
        });
    }

    /// Records a token whose output key is already taken by an earlier one.
    pub(crate) fn collision(&mut self, mode: Option<ColorMode>, name: &str, value: &str, key: &str) {
        self.skip(
            mode,
            name,
            value,
            format!("output key '{}' is already used by an earlier token", key),
        );
    }

    pub(crate) fn into_entries(self) -> Vec<SkippedValue> {
        self.entries
    }
}
