//! Exporter output on a small two-mode theme.

use insta::assert_snapshot;
use swatchbook_export::{export, ExportFormat, ExportOptions};
use swatchbook_tokens::{validate_imported, ThemeTokenSet, TokenMapping};

fn light() -> TokenMapping {
    TokenMapping::new()
        .with("--bs-primary", "#6750A4")
        .unwrap()
        .with("--bs-border-radius", "0.375rem")
        .unwrap()
        .with("--bs-font-sans-serif", r#"system-ui, "Segoe UI""#)
        .unwrap()
}

fn dark() -> TokenMapping {
    TokenMapping::new()
        .with("--bs-primary", "#D0BCFF")
        .unwrap()
        .with("--bs-border-radius", "0.375rem")
        .unwrap()
}

fn content(format: ExportFormat) -> String {
    export(format, &light(), Some(&dark()), &ExportOptions::default())
        .unwrap()
        .content
}

// ============================================================================
// Text formats
// ============================================================================

#[test]
fn test_css_output() {
    assert_snapshot!(content(ExportFormat::Css), @r###"
    :root,
    [data-bs-theme="light"] {
      --bs-border-radius: 0.375rem;
      --bs-font-sans-serif: system-ui, "Segoe UI";
      --bs-primary: #6750A4;
    }

    [data-bs-theme="dark"] {
      --bs-border-radius: 0.375rem;
      --bs-primary: #D0BCFF;
    }
    "###);
}

#[test]
fn test_scss_output() {
    assert_snapshot!(content(ExportFormat::Scss), @r###"
    $bs-theme-tokens: (
      "light": (
        "border-radius": "0.375rem",
        "font-sans-serif": "system-ui, \"Segoe UI\"",
        "primary": "#6750A4",
      ),
      "dark": (
        "border-radius": "0.375rem",
        "primary": "#D0BCFF",
      ),
    );
    "###);
}

#[test]
fn test_typescript_output() {
    assert_snapshot!(content(ExportFormat::TypeScript), @r###"
    export interface ThemeTokens {
      border_radius: string;
      font_sans_serif?: string;
      primary: string;
    }

    export const lightTokens: ThemeTokens = {
      border_radius: "0.375rem",
      font_sans_serif: "system-ui, \"Segoe UI\"",
      primary: "#6750A4",
    };

    export const darkTokens: ThemeTokens = {
      border_radius: "0.375rem",
      primary: "#D0BCFF",
    };
    "###);
}

// ============================================================================
// Structured formats
// ============================================================================

#[test]
fn test_json_snapshot_imports_back() {
    let out = content(ExportFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(validate_imported(&value), Ok(()));

    let set = ThemeTokenSet::from_json(&out).unwrap();
    assert_eq!(set, ThemeTokenSet::new(light(), dark()));
}

#[test]
fn test_structured_formats_are_json() {
    for format in [
        ExportFormat::Figma,
        ExportFormat::StyleDictionary,
        ExportFormat::Dtcg,
    ] {
        let out = content(format);
        assert!(serde_json::from_str::<serde_json::Value>(&out).is_ok(), "{format}");
    }
}

#[test]
fn test_every_format_is_deterministic_except_json() {
    for format in ExportFormat::all() {
        if *format == ExportFormat::Json {
            continue;
        }
        assert_eq!(content(*format), content(*format), "{format}");
    }
}

#[test]
fn test_skips_are_reported_not_raised() {
    let light = TokenMapping::new()
        .with("--bs-primary", "#6750A4")
        .unwrap()
        .with("--bs-primary-rgb", "103, 80, 164")
        .unwrap();
    let out = export(
        ExportFormat::StyleDictionary,
        &light,
        None,
        &ExportOptions::default(),
    )
    .unwrap();

    assert_eq!(out.skipped.len(), 1);
    assert_eq!(out.skipped[0].name, "--bs-primary-rgb");
    assert_eq!(out.file_name(), "style-dictionary.tokens.json");
}
