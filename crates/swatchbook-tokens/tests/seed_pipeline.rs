//! End-to-end: seed file → preset mapping → validation, audit and apply.

use swatchbook_tokens::{
    apply, audit_contrast, build_theme, validate_mapping, ColorMode, Namespace, StyleRegistry,
    ThemeSeed, ThemeTokenSet,
};

const SEED: &str = r##"
namespace: acme
light:
  primary: "#6750A4"
  secondary: "#625B71"
  success: "#006C4C"
  error: "#BA1A1A"
  warning: "#7C5800"
  info: "#006874"
  bodyBg: "#FFFBFE"
  bodyColor: "#1C1B1F"
  headingColor: "#1C1B1F"
  overrides:
    primary:
      hover: "#4f3d7d"
    linkColor: "#0b57d0"
  brand:
    accent: "#FF5722"
  tokens:
    spacing-md: 1rem
dark:
  primary: "#D0BCFF"
  secondary: "#CCC2DC"
  success: "#6DD58C"
  error: "#FFB4AB"
  warning: "#F9BC2D"
  info: "#4FD8EB"
  bodyBg: "#1C1B1F"
  bodyColor: "#E6E1E5"
  headingColor: "#E6E1E5"
"##;

fn theme() -> ThemeTokenSet {
    build_theme(&ThemeSeed::from_yaml(SEED).unwrap())
}

// ============================================================================
// Building
// ============================================================================

#[test]
fn test_seed_builds_namespaced_tokens() {
    let set = theme();

    assert_eq!(set.light.get("--acme-primary"), Some("#6750A4"));
    assert_eq!(set.light.get("--acme-primary-rgb"), Some("103, 80, 164"));
    assert_eq!(set.light.get("--acme-primary-hover"), Some("#4f3d7d"));
    assert_eq!(set.light.get("--acme-primary-bg-subtle"), Some("#f7f6fa"));
    assert_eq!(set.light.get("--acme-link-color"), Some("#0b57d0"));
    assert_eq!(set.light.get("--acme-link-color-rgb"), Some("11, 87, 208"));
    assert_eq!(set.light.get("--acme-brand-accent"), Some("#FF5722"));
    assert_eq!(set.light.get("--acme-spacing-md"), Some("1rem"));
    assert!(set.light.names().all(|n| n.starts_with("--acme-")));

    assert_eq!(set.dark.get("--acme-primary"), Some("#D0BCFF"));
    assert_eq!(set.dark.get("--acme-primary-text-emphasis"), Some("#E6E1E5"));
    assert!(set.dark.get("--acme-brand-accent").is_none());
}

#[test]
fn test_built_theme_validates_clean() {
    let set = theme();
    for mode in ColorMode::all() {
        let report = validate_mapping(set.get(mode));
        assert!(report.is_valid(), "{mode}: {:?}", report.invalid_tokens().collect::<Vec<_>>());
    }
}

// ============================================================================
// Audit and apply
// ============================================================================

#[test]
fn test_body_text_passes_audit() {
    let set = theme();
    let ns = Namespace::new("acme");
    for mode in ColorMode::all() {
        let findings = audit_contrast(set.get(mode), &ns);
        assert_eq!(findings.len(), 8);
        let body = findings
            .iter()
            .find(|f| f.foreground == "--acme-body-color")
            .unwrap();
        assert!(body.passes_aa());
    }
}

#[test]
fn test_apply_dark_mode() {
    let set = theme();
    let mut registry = StyleRegistry::new();
    apply(&set.dark, ColorMode::Dark, Some(&mut registry), &Namespace::new("acme"));

    assert_eq!(registry.attribute("data-acme-theme"), Some("dark"));
    assert_eq!(registry.property("--acme-body-bg"), Some("#1C1B1F"));
    assert_eq!(registry.properties().count(), set.dark.len());
}
