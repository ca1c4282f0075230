//! Contrast audit of a finished token mapping.
//!
//! Checks the text/background pairs a theme is expected to keep readable:
//! body text and headings on the body background, and each role's
//! text-emphasis color on its subtle background.

use serde::Serialize;

use crate::colorspace::{check_compliance, ContrastReport};
use crate::palette::Role;
use crate::token::{Namespace, TokenMapping};

/// One audited foreground/background pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastFinding {
    /// Token name of the foreground color.
    pub foreground: String,
    /// Token name of the background color.
    pub background: String,
    /// `None` when either value could not be read as a color.
    pub report: Option<ContrastReport>,
}

impl ContrastFinding {
    pub fn passes_aa(&self) -> bool {
        self.report.is_some_and(|r| r.aa)
    }

    pub fn is_verified(&self) -> bool {
        self.report.is_some()
    }
}

fn audited_pairs() -> Vec<(String, String)> {
    let mut pairs = vec![
        ("body-color".to_string(), "body-bg".to_string()),
        ("heading-color".to_string(), "body-bg".to_string()),
    ];
    for role in Role::all() {
        pairs.push((
            format!("{}-text-emphasis", role.as_str()),
            format!("{}-bg-subtle", role.as_str()),
        ));
    }
    pairs
}

/// Audits the standard pairs present in `mapping`. Pairs with a missing
/// token are left out.
pub fn audit_contrast(mapping: &TokenMapping, namespace: &Namespace) -> Vec<ContrastFinding> {
    let mut findings = Vec::new();

    for (fg_role, bg_role) in audited_pairs() {
        let fg_name = namespace.var_name(&fg_role);
        let bg_name = namespace.var_name(&bg_role);
        let (Some(fg), Some(bg)) = (mapping.get(&fg_name), mapping.get(&bg_name)) else {
            continue;
        };

        let report = check_compliance(fg, bg);
        match report {
            Some(r) if !r.aa => tracing::warn!(
                theme.contrast_ratio = r.ratio,
                theme.fg = %fg_name,
                theme.bg = %bg_name,
                "contrast below AA"
            ),
            None => tracing::warn!(
                theme.fg = %fg_name,
                theme.bg = %bg_name,
                "contrast could not be verified"
            ),
            _ => {}
        }

        findings.push(ContrastFinding {
            foreground: fg_name,
            background: bg_name,
            report,
        });
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ns() -> Namespace {
        Namespace::default()
    }

    #[test]
    fn test_audit_reports_present_pairs_only() {
        let mapping = TokenMapping::new()
            .with("--bs-body-color", "#000000")
            .unwrap()
            .with("--bs-body-bg", "#ffffff")
            .unwrap();
        let findings = audit_contrast(&mapping, &ns());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].foreground, "--bs-body-color");
        assert!(findings[0].passes_aa());
        assert_eq!(findings[0].report.unwrap().ratio, 21.0);
    }

    #[test]
    fn test_audit_flags_low_contrast() {
        let mapping = TokenMapping::new()
            .with("--bs-heading-color", "#eeeeee")
            .unwrap()
            .with("--bs-body-bg", "#ffffff")
            .unwrap();
        let findings = audit_contrast(&mapping, &ns());
        assert_eq!(findings.len(), 1);
        assert!(!findings[0].passes_aa());
        assert!(findings[0].is_verified());
    }

    #[test]
    fn test_audit_unreadable_color_is_unverified() {
        let mapping = TokenMapping::new()
            .with("--bs-body-color", "var(--x)")
            .unwrap()
            .with("--bs-body-bg", "#ffffff")
            .unwrap();
        let findings = audit_contrast(&mapping, &ns());
        assert!(!findings[0].is_verified());
        assert!(!findings[0].passes_aa());
    }
}
