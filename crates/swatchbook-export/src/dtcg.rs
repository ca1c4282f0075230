//! W3C Design Tokens Community Group format.
//!
//! A flat map from stripped token name to `{$value, $type, $description}`,
//! plus a `modes` entry holding the per-mode values. `$value` is the light
//! value when there is one. When two tokens strip to the same key
//! (`--bs-gap` and `--gap`) the first in name order is kept.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::{Map, Value};
use swatchbook_tokens::{classify, ColorMode, TokenKind, TokenMapping};

use crate::error::ExportError;
use crate::skipped::SkipLog;
use crate::ExportOptions;

const MODES_KEY: &str = "modes";

#[derive(Serialize)]
struct DesignToken<'a> {
    #[serde(rename = "$value")]
    value: &'a str,
    #[serde(rename = "$type")]
    kind: &'static str,
    #[serde(rename = "$description")]
    description: String,
}

fn dtcg_type(kind: TokenKind, value: &str) -> &'static str {
    match kind {
        TokenKind::Color => "color",
        TokenKind::Dimension if value.trim().to_lowercase().ends_with('s') => "duration",
        TokenKind::Dimension => "dimension",
        TokenKind::Gradient => "gradient",
        TokenKind::Shadow => "shadow",
        TokenKind::Text => "string",
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

    let mut doc: Map<String, Value> = Map::new();
    let mut modes: BTreeMap<ColorMode, BTreeMap<&str, &str>> = BTreeMap::new();
    let names: BTreeSet<&str> = sources.iter().flat_map(|(_, t)| t.names()).collect();

    for name in names {
        let key = ns.strip(name);
        let Some(value) = sources.iter().find_map(|(_, t)| t.get(name)) else {
            continue;
        };
        if key == MODES_KEY {
            log.skip(None, name, value, "name collides with the modes overlay");
            continue;
        }
        if doc.contains_key(key) {
            log.collision(None, name, value, key);
            continue;
        }

        let token = DesignToken {
            value,
            kind: dtcg_type(classify(value), value),
            description: format!("Theme token {}", name),
        };
        doc.insert(key.to_string(), serde_json::to_value(token)?);

        for (mode, tokens) in &sources {
            if let Some(v) = tokens.get(name) {
                modes.entry(*mode).or_default().insert(key, v);
            }
        }
    }

    doc.insert(MODES_KEY.to_string(), serde_json::to_value(modes)?);
    Ok(serde_json::to_string_pretty(&doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExportFormat;
    use serde_json::json;

    fn run(light: &TokenMapping, dark: Option<&TokenMapping>) -> (Value, Vec<crate::SkippedValue>) {
        let mut log = SkipLog::new(ExportFormat::Dtcg);
        let out = render(light, dark, &ExportOptions::default(), &mut log).unwrap();
        (serde_json::from_str(&out).unwrap(), log.into_entries())
    }

    #[test]
    fn test_types() {
        let light = TokenMapping::new()
            .with("--bs-primary", "#6750A4")
            .unwrap()
            .with("--bs-radius", "4px")
            .unwrap()
            .with("--bs-transition-duration", "150ms")
            .unwrap()
            .with("--bs-gradient", "linear-gradient(#fff, #000)")
            .unwrap()
            .with("--bs-font", "system-ui")
            .unwrap();
        let (doc, _) = run(&light, None);

        assert_eq!(doc["primary"]["$type"], "color");
        assert_eq!(doc["radius"]["$type"], "dimension");
        assert_eq!(doc["transition-duration"]["$type"], "duration");
        assert_eq!(doc["gradient"]["$type"], "gradient");
        assert_eq!(doc["font"]["$type"], "string");
        assert_eq!(doc["primary"]["$description"], "Theme token --bs-primary");
    }

    #[test]
    fn test_mode_overlays() {
        let light = TokenMapping::new().with("--bs-primary", "#6750A4").unwrap();
        let dark = TokenMapping::new()
            .with("--bs-primary", "#D0BCFF")
            .unwrap()
            .with("--bs-glow", "#FFFFFF")
            .unwrap();
        let (doc, _) = run(&light, Some(&dark));

        assert_eq!(doc["primary"]["$value"], "#6750A4");
        assert_eq!(doc["glow"]["$value"], "#FFFFFF");
        assert_eq!(
            doc["modes"],
            json!({
                "light": {"primary": "#6750A4"},
                "dark": {"glow": "#FFFFFF", "primary": "#D0BCFF"}
            })
        );
    }

    #[test]
    fn test_modes_name_is_skipped() {
        let light = TokenMapping::new().with("--bs-modes", "2").unwrap();
        let (doc, skipped) = run(&light, None);
        assert!(doc.get("modes").is_some_and(|m| m == &json!({})));
        assert_eq!(skipped.len(), 1);
    }

    #[test]
    fn test_stripped_key_collision_keeps_first() {
        let light = TokenMapping::new()
            .with("--bs-gap", "1rem")
            .unwrap()
            .with("--gap", "2rem")
            .unwrap();
        let (doc, skipped) = run(&light, Some(&light));

        assert_eq!(doc["gap"]["$value"], "1rem");
        assert_eq!(doc["gap"]["$description"], "Theme token --bs-gap");
        assert_eq!(doc["modes"]["dark"], json!({"gap": "1rem"}));
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].name, "--gap");
        assert_eq!(skipped[0].value, "2rem");
    }
}
