use swatchbook_export::ExportError;
use swatchbook_tokens::{ImportError, MappingError, PaletteError};
use thiserror::Error;

/// Any failure surfaced through [`Theme`](crate::Theme).
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
