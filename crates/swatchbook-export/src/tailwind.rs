//! Tailwind `theme.extend` config module, from the light mapping.
//!
//! Tokens are bucketed by their stripped name, first match wins:
//!
//! | Name contains | Bucket |
//! |---------------|--------|
//! | `radius` | `borderRadius` |
//! | `font-size` | `fontSize` |
//! | `spacing` or `spacer` | `spacing` |
//! | `color`, or the value is a color (not an `-rgb` triplet) | `colors` |
//!
//! The bucket's words are dropped from the key (`border-radius-sm` → `sm`),
//! and a key left empty becomes `DEFAULT`. Tokens matching no bucket are
//! outside Tailwind's theme and are not emitted. A token whose bucket key is
//! already taken (`--bs-radius` after `--bs-border-radius`) is skipped.

use std::collections::BTreeMap;

use serde::Serialize;
use swatchbook_tokens::{ColorMode, Token, TokenKind, TokenMapping};

use crate::error::ExportError;
use crate::skipped::SkipLog;
use crate::ExportOptions;

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct Extend {
    border_radius: BTreeMap<String, String>,
    colors: BTreeMap<String, String>,
    font_size: BTreeMap<String, String>,
    spacing: BTreeMap<String, String>,
}

#[derive(Serialize)]
struct Theme {
    extend: Extend,
}

#[derive(Serialize)]
struct Config {
    theme: Theme,
}

fn bucket_key(name: &str, drop: &[&str]) -> String {
    let key = name
        .split('-')
        .filter(|segment| !segment.is_empty() && !drop.contains(segment))
        .collect::<Vec<_>>()
        .join("-");
    if key.is_empty() {
        "DEFAULT".to_string()
    } else {
        key
    }
}

fn put(
    bucket: &mut BTreeMap<String, String>,
    key: String,
    token: &Token<'_>,
    log: &mut SkipLog,
) {
    if bucket.contains_key(&key) {
        log.collision(Some(ColorMode::Light), token.name, token.value, &key);
    } else {
        bucket.insert(key, token.value.to_string());
    }
}

pub(crate) fn render(
    light: &TokenMapping,
    opts: &ExportOptions,
    log: &mut SkipLog,
) -> Result<String, ExportError> {
    let mut extend = Extend::default();

    for token in light.tokens() {
        let name = opts.namespace.strip(token.name);

        if name.contains("radius") {
            let key = bucket_key(name, &["border", "radius"]);
            put(&mut extend.border_radius, key, &token, log);
        } else if name.contains("font-size") {
            let key = bucket_key(name, &["font", "size"]);
            put(&mut extend.font_size, key, &token, log);
        } else if name.contains("spacing") || name.contains("spacer") {
            let key = bucket_key(name, &["spacing", "spacer"]);
            put(&mut extend.spacing, key, &token, log);
        } else if (name.contains("color") || token.kind == TokenKind::Color)
            && !name.ends_with("-rgb")
        {
            let key = bucket_key(name, &["color"]);
            put(&mut extend.colors, key, &token, log);
        }
    }

    let config = Config {
        theme: Theme { extend },
    };
    Ok(format!(
        "module.exports = {};\n",
        serde_json::to_string_pretty(&config)?
    ))
}
