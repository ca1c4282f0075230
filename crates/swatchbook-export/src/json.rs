//! Generic JSON snapshot, the format [`ThemeTokenSet::from_json`] reads back.
//!
//! [`ThemeTokenSet::from_json`]: swatchbook_tokens::ThemeTokenSet::from_json

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use swatchbook_tokens::TokenMapping;

use crate::error::ExportError;
use crate::ExportOptions;

#[derive(Serialize)]
struct Snapshot<'a> {
    light: &'a TokenMapping,
    dark: &'a TokenMapping,
    version: &'a str,
    generated: String,
}

pub(crate) fn render(
    light: &TokenMapping,
    dark: Option<&TokenMapping>,
    opts: &ExportOptions,
) -> Result<String, ExportError> {
    export_json_at(light, dark, opts, Utc::now())
}

/// Writes the JSON snapshot with a fixed `generated` timestamp.
///
/// A missing dark mapping is written as an empty object so the snapshot
/// still passes [`validate_imported`](swatchbook_tokens::validate_imported).
pub fn export_json_at(
    light: &TokenMapping,
    dark: Option<&TokenMapping>,
    opts: &ExportOptions,
    generated: DateTime<Utc>,
) -> Result<String, ExportError> {
    let empty = TokenMapping::new();
    let snapshot = Snapshot {
        light,
        dark: dark.unwrap_or(&empty),
        version: &opts.version,
        generated: generated.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::{json, Value};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_snapshot_shape() {
        let light = TokenMapping::new().with("--bs-primary", "#6750A4").unwrap();
        let dark = TokenMapping::new().with("--bs-primary", "#D0BCFF").unwrap();
        let out = export_json_at(&light, Some(&dark), &ExportOptions::default(), at()).unwrap();

        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            json!({
                "light": {"--bs-primary": "#6750A4"},
                "dark": {"--bs-primary": "#D0BCFF"},
                "version": "1.0.0",
                "generated": "2024-05-01T12:00:00.000Z"
            })
        );
    }

    #[test]
    fn test_missing_dark_is_empty_object() {
        let light = TokenMapping::new().with("a", "1px").unwrap();
        let out = export_json_at(&light, None, &ExportOptions::default(), at()).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["dark"], json!({}));
    }

    #[test]
    fn test_same_timestamp_same_output() {
        let light = TokenMapping::new().with("b", "2px").unwrap().with("a", "1px").unwrap();
        let opts = ExportOptions::default().with_version("2.1.0");
        assert_eq!(
            export_json_at(&light, None, &opts, at()).unwrap(),
            export_json_at(&light, None, &opts, at()).unwrap()
        );
    }
}
