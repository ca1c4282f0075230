//! TypeScript declarations: one `ThemeTokens` interface and a constant per mode.
//!
//! Keys are the stripped token names with hyphens turned into underscores.
//! A key that is still not a valid identifier (`2xl`, say) is quoted. A key
//! missing from one of the modes is optional in the interface. Tokens that
//! end up on the same key (`--bs-a-b` and `--bs-a_b`) keep the first in
//! name order; the rest are skipped.

use std::collections::BTreeMap;
use std::fmt::Write;

use once_cell::sync::Lazy;
use regex::Regex;
use swatchbook_tokens::{ColorMode, Namespace, TokenMapping};

use crate::error::ExportError;
use crate::skipped::SkipLog;
use crate::ExportOptions;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern compiles"));

fn property_key(ns: &Namespace, name: &str) -> Result<String, ExportError> {
    let key = ns.strip(name).replace('-', "_");
    if IDENTIFIER.is_match(&key) {
        Ok(key)
    } else {
        Ok(serde_json::to_string(&key)?)
    }
}

fn keyed<'a>(
    ns: &Namespace,
    mode: ColorMode,
    tokens: &'a TokenMapping,
    log: &mut SkipLog,
) -> Result<BTreeMap<String, &'a str>, ExportError> {
    let mut keyed = BTreeMap::new();
    for (name, value) in tokens.iter() {
        let key = property_key(ns, name)?;
        if keyed.contains_key(&key) {
            log.collision(Some(mode), name, value, &key);
            continue;
        }
        keyed.insert(key, value);
    }
    Ok(keyed)
}

fn write_const(
    out: &mut String,
    ident: &str,
    tokens: &BTreeMap<String, &str>,
) -> Result<(), ExportError> {
    writeln!(out)?;
    writeln!(out, "export const {}: ThemeTokens = {{", ident)?;
    for (key, value) in tokens {
        writeln!(out, "  {}: {},", key, serde_json::to_string(value)?)?;
    }
    writeln!(out, "}};")?;
    Ok(())
}

pub(crate) fn render(
    light: &TokenMapping,
    dark: Option<&TokenMapping>,
    opts: &ExportOptions,
    log: &mut SkipLog,
) -> Result<String, ExportError> {
    let ns = &opts.namespace;
    let light = keyed(ns, ColorMode::Light, light, log)?;
    let dark = dark
        .map(|d| keyed(ns, ColorMode::Dark, d, log))
        .transpose()?;

    // Key -> present in every emitted mode.
    let mut keys: BTreeMap<&str, bool> = BTreeMap::new();
    for key in light.keys() {
        let in_dark = dark.as_ref().map_or(true, |d| d.contains_key(key));
        keys.insert(key.as_str(), in_dark);
    }
    if let Some(dark) = &dark {
        for key in dark.keys() {
            keys.entry(key.as_str()).or_insert(false);
        }
    }

    let mut out = String::new();
    writeln!(out, "export interface ThemeTokens {{")?;
    for (key, required) in &keys {
        let marker = if *required { "" } else { "?" };
        writeln!(out, "  {}{}: string;", key, marker)?;
    }
    writeln!(out, "}}")?;

    write_const(&mut out, "lightTokens", &light)?;
    if let Some(dark) = &dark {
        write_const(&mut out, "darkTokens", dark)?;
    }
    Ok(out)
}
