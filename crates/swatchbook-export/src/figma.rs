//! Figma variables document.
//!
//! One collection named `Theme Tokens` with a mode per color mode. The
//! variable type comes from classifying the light value (the dark value when
//! the token is dark-only):
//!
//! | Kind | `resolvedType` | Value |
//! |------|----------------|-------|
//! | color | `COLOR` | `{r, g, b, a}` in `0..=1`, four decimals |
//! | dimension | `FLOAT` | leading number, unit dropped |
//! | anything else | `STRING` | the raw value |
//!
//! A mode value that does not convert to the variable's type is skipped. A
//! variable with no convertible value at all is left out, and of two tokens
//! with the same stripped name only the first becomes a variable.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use swatchbook_tokens::{classify, parse_css_color, ColorMode, TokenKind, TokenMapping};

use crate::error::ExportError;
use crate::skipped::SkipLog;
use crate::ExportOptions;

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d*\.?\d+").expect("number pattern compiles"));

const COLLECTION_NAME: &str = "Theme Tokens";

#[derive(Serialize)]
struct Document<'a> {
    version: &'a str,
    collections: Vec<Collection>,
}

#[derive(Serialize)]
struct Collection {
    name: &'static str,
    modes: Vec<Mode>,
    variables: Vec<Variable>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Mode {
    mode_id: ColorMode,
    name: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Variable {
    name: String,
    resolved_type: ResolvedType,
    values_by_mode: BTreeMap<ColorMode, VariableValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
enum ResolvedType {
    Color,
    Float,
    String,
}

impl From<TokenKind> for ResolvedType {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Color => ResolvedType::Color,
            TokenKind::Dimension => ResolvedType::Float,
            _ => ResolvedType::String,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum VariableValue {
    Color { r: f64, g: f64, b: f64, a: f64 },
    Float(f64),
    String(String),
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

fn convert(value: &str, ty: ResolvedType) -> Result<VariableValue, &'static str> {
    match ty {
        ResolvedType::Color => {
            let rgba = parse_css_color(value).ok_or("not a parseable color")?;
            let unit = |c: u8| round4(f64::from(c) / 255.0);
            Ok(VariableValue::Color {
                r: unit(rgba.rgb.0),
                g: unit(rgba.rgb.1),
                b: unit(rgba.rgb.2),
                a: round4(rgba.alpha),
            })
        }
        ResolvedType::Float => LEADING_NUMBER
            .find(value.trim())
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .map(VariableValue::Float)
            .ok_or("no leading number"),
        ResolvedType::String => Ok(VariableValue::String(value.to_string())),
    }
}

pub(crate) fn render(
    light: &TokenMapping,
    dark: Option<&TokenMapping>,
    opts: &ExportOptions,
    log: &mut SkipLog,
) -> Result<String, ExportError> {
    let ns = &opts.namespace;
    let mut sources = vec![(ColorMode::Light, light)];
    if let Some(dark) = dark {
        sources.push((ColorMode::Dark, dark));
    }

    let names: BTreeSet<&str> = sources.iter().flat_map(|(_, t)| t.names()).collect();
    let mut variables = Vec::new();
    let mut taken = BTreeSet::new();

    for name in names {
        let Some(first) = sources.iter().find_map(|(_, t)| t.get(name)) else {
            continue;
        };
        let key = ns.strip(name);
        if !taken.insert(key) {
            for (mode, tokens) in &sources {
                if let Some(value) = tokens.get(name) {
                    log.collision(Some(*mode), name, value, key);
                }
            }
            continue;
        }
        let resolved_type = ResolvedType::from(classify(first));

        let mut values_by_mode = BTreeMap::new();
        for (mode, tokens) in &sources {
            let Some(value) = tokens.get(name) else { continue };
            match convert(value, resolved_type) {
                Ok(converted) => {
                    values_by_mode.insert(*mode, converted);
                }
                Err(reason) => log.skip(Some(*mode), name, value, reason),
            }
        }

        if values_by_mode.is_empty() {
            continue;
        }
        variables.push(Variable {
            name: key.to_string(),
            resolved_type,
            values_by_mode,
        });
    }

    let document = Document {
        version: &opts.version,
        collections: vec![Collection {
            name: COLLECTION_NAME,
            modes: sources
                .iter()
                .map(|(mode, _)| Mode {
                    mode_id: *mode,
                    name: match mode {
                        ColorMode::Light => "Light",
                        ColorMode::Dark => "Dark",
                    },
                })
                .collect(),
            variables,
        }],
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
