//! SCSS map literal keyed by mode, with the namespace prefix stripped.
//!
//! Sass rejects a map with a repeated key, so when two tokens strip to the
//! same key (`--bs-gap` and `--gap`) only the first in name order is kept.

use std::collections::BTreeSet;
use std::fmt::Write;

use swatchbook_tokens::{ColorMode, TokenMapping};

use crate::css::unsafe_declaration;
use crate::error::ExportError;
use crate::skipped::SkipLog;
use crate::ExportOptions;

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

pub(crate) fn render(
    light: &TokenMapping,
    dark: Option<&TokenMapping>,
    opts: &ExportOptions,
    log: &mut SkipLog,
) -> Result<String, ExportError> {
    let ns = &opts.namespace;
    let variable = match ns.prefix() {
        "" => "$theme-tokens".to_string(),
        prefix => format!("${}-theme-tokens", prefix),
    };

    let modes = [(ColorMode::Light, Some(light)), (ColorMode::Dark, dark)];

    let mut out = String::new();
    writeln!(out, "{}: (", variable)?;
    for (mode, tokens) in modes {
        let Some(tokens) = tokens else { continue };
        let mut seen = BTreeSet::new();
        writeln!(out, "  \"{}\": (", mode)?;
        for (name, value) in tokens.iter() {
            if let Some(reason) = unsafe_declaration(name, value) {
                log.skip(Some(mode), name, value, reason);
                continue;
            }
            let key = ns.strip(name);
            if !seen.insert(key) {
                log.collision(Some(mode), name, value, key);
                continue;
            }
            writeln!(out, "    {}: {},", quote(key), quote(value))?;
        }
        writeln!(out, "  ),")?;
    }
    writeln!(out, ");")?;
    Ok(out)
}
