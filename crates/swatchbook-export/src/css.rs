//! Runtime CSS custom properties.
//!
//! ```css
//! :root,
//! [data-bs-theme="light"] {
//!   --bs-primary: #6750A4;
//! }
//!
//! [data-bs-theme="dark"] {
//!   --bs-primary: #D0BCFF;
//! }
//! ```
//!
//! Values that would end the declaration or the rule early (`;`, braces,
//! line breaks) are skipped, as are names that are not plain identifiers.
//! `gap` and `--gap` are the same property; the first in name order wins.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt::Write;

use swatchbook_tokens::{ColorMode, TokenMapping};

use crate::error::ExportError;
use crate::skipped::SkipLog;
use crate::ExportOptions;

const STRUCTURAL: [char; 6] = [';', '{', '}', '\n', '\r', '\\'];

/// Why `name: value` cannot be written into a stylesheet, if it can't.
pub(crate) fn unsafe_declaration(name: &str, value: &str) -> Option<&'static str> {
    let bare = name.trim_start_matches('-');
    if bare.is_empty()
        || !bare
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Some("name is not a valid custom property identifier");
    }
    if value.contains(STRUCTURAL) {
        return Some("value contains characters that would break the stylesheet");
    }
    None
}

fn write_block(
    out: &mut String,
    selector: &str,
    mode: ColorMode,
    tokens: &TokenMapping,
    log: &mut SkipLog,
) -> Result<(), ExportError> {
    let mut seen = BTreeSet::new();
    writeln!(out, "{} {{", selector)?;
    for (name, value) in tokens.iter() {
        if let Some(reason) = unsafe_declaration(name, value) {
            log.skip(Some(mode), name, value, reason);
            continue;
        }
        let property = if name.starts_with("--") {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(format!("--{}", name))
        };
        if !seen.insert(property.clone()) {
            log.collision(Some(mode), name, value, &property);
            continue;
        }
        writeln!(out, "  {}: {};", property, value)?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

pub(crate) fn render(
    light: &TokenMapping,
    dark: Option<&TokenMapping>,
    opts: &ExportOptions,
    log: &mut SkipLog,
) -> Result<String, ExportError> {
    let attribute = opts.namespace.mode_attribute();
    let selector = |mode: ColorMode| format!("[{}=\"{}\"]", attribute, mode);

    let mut out = String::new();
    write_block(
        &mut out,
        &format!(":root,\n{}", selector(ColorMode::Light)),
        ColorMode::Light,
        light,
        log,
    )?;
    if let Some(dark) = dark {
        out.push('\n');
        write_block(&mut out, &selector(ColorMode::Dark), ColorMode::Dark, dark, log)?;
    }
    Ok(out)
}
