//! The export-format catalog.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A supported export target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExportFormat {
    /// Generic snapshot: `{light, dark, version, generated}`.
    Json,
    /// Runtime CSS custom properties.
    Css,
    /// SCSS map literal.
    Scss,
    /// TypeScript interface plus one literal per mode.
    TypeScript,
    /// Figma variables document.
    Figma,
    /// Tailwind `theme.extend` config.
    Tailwind,
    /// Style Dictionary token tree.
    StyleDictionary,
    /// W3C Design Tokens Community Group format.
    Dtcg,
}

impl ExportFormat {
    /// Stable id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::TypeScript => "typescript",
            Self::Figma => "figma",
            Self::Tailwind => "tailwind",
            Self::StyleDictionary => "style-dictionary",
            Self::Dtcg => "dtcg",
        }
    }

    /// Suggested download file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Json => "theme-tokens.json",
            Self::Css => "theme-tokens.css",
            Self::Scss => "_theme-tokens.scss",
            Self::TypeScript => "theme-tokens.ts",
            Self::Figma => "figma-variables.json",
            Self::Tailwind => "tailwind.config.js",
            Self::StyleDictionary => "style-dictionary.tokens.json",
            Self::Dtcg => "design-tokens.tokens.json",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Json | Self::Figma | Self::StyleDictionary | Self::Dtcg => "json",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::TypeScript => "ts",
            Self::Tailwind => "js",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Json | Self::Figma | Self::StyleDictionary | Self::Dtcg => "application/json",
            Self::Css => "text/css",
            Self::Scss => "text/x-scss",
            Self::TypeScript => "application/typescript",
            Self::Tailwind => "application/javascript",
        }
    }

    /// Full format list.
    pub fn all() -> &'static [ExportFormat] {
        const FORMATS: [ExportFormat; 8] = [
            ExportFormat::Json,
            ExportFormat::Css,
            ExportFormat::Scss,
            ExportFormat::TypeScript,
            ExportFormat::Figma,
            ExportFormat::Tailwind,
            ExportFormat::StyleDictionary,
            ExportFormat::Dtcg,
        ];
        &FORMATS
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        let wanted = match wanted.as_str() {
            "ts" => "typescript",
            "sass" => "scss",
            "w3c" => "dtcg",
            other => other,
        };
        Self::all()
            .iter()
            .copied()
            .find(|f| f.id() == wanted)
            .ok_or_else(|| format!("Unknown export format: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for format in ExportFormat::all() {
            assert_eq!(format.id().parse::<ExportFormat>().unwrap(), *format);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("TS".parse::<ExportFormat>().unwrap(), ExportFormat::TypeScript);
        assert_eq!(" w3c ".parse::<ExportFormat>().unwrap(), ExportFormat::Dtcg);
        assert!("yaml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_file_name_matches_extension() {
        for format in ExportFormat::all() {
            assert!(format.file_name().ends_with(format.extension()), "{format}");
        }
    }
}
