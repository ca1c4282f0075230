use thiserror::Error;

/// Errors that can occur while exporting.
///
/// Malformed token values never end up here: they are reported as
/// [`SkippedValue`](crate::SkippedValue)s on the [`Export`](crate::Export).
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write export: {0}")]
    Fmt(#[from] std::fmt::Error),
}
