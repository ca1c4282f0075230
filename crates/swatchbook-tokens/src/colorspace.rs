//! Color math: parsing, hex/RGB conversion, tinting and contrast.
//!
//! The helpers in this module sit underneath bulk operations (preset
//! building, exports) where one bad value must not abort the rest. The
//! string-in/string-out helpers are therefore total:
//!
//! | Function | On unparseable input |
//! |----------|----------------------|
//! | [`hex_to_rgb_triplet`] | `"0, 0, 0"` |
//! | [`lighten`] / [`darken`] | the input, unchanged |
//!
//! Measurements are different. A contrast ratio of `1` is a real (and
//! terrible) result, so [`relative_luminance`], [`contrast_ratio`] and
//! [`check_compliance`] return `None` when a color cannot be read instead of
//! inventing a number.
//!
//! The contrast math is the simplified sRGB relative-luminance formula. It is
//! good enough to flag risky pairs; it is not a certified accessibility audit.
//!
//! # Example
//!
//! ```rust
//! use swatchbook_tokens::colorspace::{check_compliance, hex_to_rgb_triplet, lighten};
//!
//! assert_eq!(hex_to_rgb_triplet("#FF0000"), "255, 0, 0");
//! assert_eq!(lighten("#000000", 1.0), "#ffffff");
//!
//! let report = check_compliance("#000000", "#FFFFFF").unwrap();
//! assert_eq!(report.ratio, 21.0);
//! assert!(report.aa && report.aaa);
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static RGB_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .expect("rgb() pattern compiles")
});

/// Minimum ratio for normal-size text (AA).
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for normal-size text (AAA).
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for large text (AA).
pub const AA_LARGE: f64 = 3.0;

// ─── RGB type ───────────────────────────────────────────────────────────────

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional, alpha is dropped).
    pub fn from_hex(hex: &str) -> Option<Self> {
        parse_hex(hex).map(|rgba| rgba.rgb)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// The `"r, g, b"` form used by `*-rgb` tokens.
    pub fn triplet(self) -> String {
        format!("{}, {}, {}", self.0, self.1, self.2)
    }

    /// Moves each channel toward `target` by `amount` (clamped to `0..=1`).
    pub fn mix(self, target: Rgb, amount: f64) -> Rgb {
        let t = clamp_amount(amount);
        let channel = |from: u8, to: u8| -> u8 {
            let from = from as f64;
            (from + (to as f64 - from) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb(
            channel(self.0, target.0),
            channel(self.1, target.1),
            channel(self.2, target.2),
        )
    }

    /// Channels scaled to `0.0..=1.0`.
    pub fn normalized(self) -> (f64, f64, f64) {
        (
            self.0 as f64 / 255.0,
            self.1 as f64 / 255.0,
            self.2 as f64 / 255.0,
        )
    }

    /// Relative luminance, `0.0` (black) to `1.0` (white).
    pub fn relative_luminance(self) -> f64 {
        let (r, g, b) = self.normalized();
        0.2126 * channel_to_linear(r) + 0.7152 * channel_to_linear(g) + 0.0722 * channel_to_linear(b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// An sRGB color with alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    pub fn opaque(rgb: Rgb) -> Self {
        Self { rgb, alpha: 1.0 }
    }
}

/// Piecewise sRGB gamma curve.
fn channel_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn clamp_amount(amount: f64) -> f64 {
    if amount.is_nan() {
        0.0
    } else {
        amount.clamp(0.0, 1.0)
    }
}

// ─── Parsing ────────────────────────────────────────────────────────────────

fn parse_hex(hex: &str) -> Option<Rgba> {
    let hex = hex.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);

    match hex.len() {
        3 => Some(Rgba::opaque(Rgb(nibble(0)?, nibble(1)?, nibble(2)?))),
        6 => Some(Rgba::opaque(Rgb(byte(0)?, byte(2)?, byte(4)?))),
        8 => Some(Rgba {
            rgb: Rgb(byte(0)?, byte(2)?, byte(4)?),
            alpha: byte(6)? as f64 / 255.0,
        }),
        _ => None,
    }
}

fn parse_rgb_function(value: &str) -> Option<Rgba> {
    let caps = RGB_FUNCTION.captures(value)?;
    let channel = |i: usize| -> Option<u8> {
        let n: u16 = caps.get(i)?.as_str().parse().ok()?;
        Some(n.min(255) as u8)
    };
    let alpha = match caps.get(4) {
        Some(a) => a.as_str().parse::<f64>().ok()?.clamp(0.0, 1.0),
        None => 1.0,
    };
    Some(Rgba {
        rgb: Rgb(channel(1)?, channel(2)?, channel(3)?),
        alpha,
    })
}

fn parse_named(name: &str) -> Option<Rgba> {
    let rgb = match name {
        "red" => Rgb(255, 0, 0),
        "blue" => Rgb(0, 0, 255),
        "green" => Rgb(0, 128, 0),
        "yellow" => Rgb(255, 255, 0),
        "white" => Rgb::WHITE,
        "black" => Rgb::BLACK,
        "transparent" => {
            return Some(Rgba {
                rgb: Rgb::BLACK,
                alpha: 0.0,
            })
        }
        _ => return None,
    };
    Some(Rgba::opaque(rgb))
}

/// Parses the color syntaxes the classifier recognises: hex, `rgb()`,
/// `rgba()` and the basic named colors.
pub fn parse_css_color(value: &str) -> Option<Rgba> {
    let v = value.trim().to_lowercase();
    if v.starts_with('#') {
        parse_hex(&v)
    } else if v.starts_with("rgb") {
        parse_rgb_function(&v)
    } else {
        parse_named(&v)
    }
}

// ─── Conversions ────────────────────────────────────────────────────────────

/// Converts a hex color to an `"r, g, b"` string, or `"0, 0, 0"` if it
/// cannot be parsed.
pub fn hex_to_rgb_triplet(hex: &str) -> String {
    match Rgb::from_hex(hex) {
        Some(rgb) => rgb.triplet(),
        None => {
            tracing::debug!(value = hex, "unparseable hex color, using 0, 0, 0");
            Rgb::BLACK.triplet()
        }
    }
}

/// Moves a hex color toward white. `amount = 0.95` keeps 5% of the color,
/// which is what subtle backgrounds use.
///
/// An amount of zero returns the input untouched; so does an unparseable color.
pub fn lighten(hex: &str, amount: f64) -> String {
    tint(hex, Rgb::WHITE, amount)
}

/// Moves a hex color toward black by `amount`.
///
/// An amount of zero returns the input untouched; so does an unparseable color.
pub fn darken(hex: &str, amount: f64) -> String {
    tint(hex, Rgb::BLACK, amount)
}

fn tint(hex: &str, target: Rgb, amount: f64) -> String {
    if clamp_amount(amount) == 0.0 {
        return hex.to_string();
    }
    match Rgb::from_hex(hex) {
        Some(rgb) => rgb.mix(target, amount).to_hex(),
        None => {
            tracing::debug!(value = hex, "unparseable hex color, left unchanged");
            hex.to_string()
        }
    }
}

// ─── Contrast ───────────────────────────────────────────────────────────────

/// Relative luminance of a hex, `rgb()` or named color; `None` if unreadable.
pub fn relative_luminance(color: &str) -> Option<f64> {
    parse_css_color(color).map(|c| c.rgb.relative_luminance())
}

/// Contrast ratio between two colors, from `1.0` to `21.0`.
///
/// Returns `None` when either color cannot be read, so "could not verify"
/// is never confused with a measured ratio of 1.
pub fn contrast_ratio(a: &str, b: &str) -> Option<f64> {
    let la = relative_luminance(a)?;
    let lb = relative_luminance(b)?;
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    Some((lighter + 0.05) / (darker + 0.05))
}

/// Outcome of a contrast check between a foreground and a background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastReport {
    /// Ratio rounded to two decimals.
    pub ratio: f64,
    /// Passes AA for normal text (4.5:1).
    pub aa: bool,
    /// Passes AAA for normal text (7:1).
    pub aaa: bool,
    /// Passes AA for large text (3:1).
    pub aa_large: bool,
}

impl ContrastReport {
    pub fn from_ratio(ratio: f64) -> Self {
        let ratio = (ratio * 100.0).round() / 100.0;
        Self {
            ratio,
            aa: ratio >= AA_NORMAL,
            aaa: ratio >= AAA_NORMAL,
            aa_large: ratio >= AA_LARGE,
        }
    }
}

/// Checks a foreground/background pair against the fixed thresholds.
pub fn check_compliance(foreground: &str, background: &str) -> Option<ContrastReport> {
    contrast_ratio(foreground, background).map(ContrastReport::from_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_from_hex_lengths() {
        assert_eq!(Rgb::from_hex("#ff6b35"), Some(Rgb(255, 107, 53)));
        assert_eq!(Rgb::from_hex("F80"), Some(Rgb(255, 136, 0)));
        assert_eq!(Rgb::from_hex("#11223380"), Some(Rgb(17, 34, 51)));
        assert_eq!(Rgb::from_hex("#12"), None);
        assert_eq!(Rgb::from_hex("#gggggg"), None);
        assert_eq!(Rgb::from_hex("#ffff"), None);
    }

    #[test]
    fn test_from_hex_rejects_multibyte_input() {
        assert_eq!(Rgb::from_hex("#ééé"), None);
    }

    #[test]
    fn test_parse_css_color_rgb_function() {
        let c = parse_css_color("rgba(10, 20, 30, 0.5)").unwrap();
        assert_eq!(c.rgb, Rgb(10, 20, 30));
        assert!((c.alpha - 0.5).abs() < f64::EPSILON);

        let c = parse_css_color("RGB(300,0,0)").unwrap();
        assert_eq!(c.rgb, Rgb(255, 0, 0));
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn test_parse_css_color_named() {
        assert_eq!(parse_css_color("White").unwrap().rgb, Rgb::WHITE);
        assert_eq!(parse_css_color("transparent").unwrap().alpha, 0.0);
        assert!(parse_css_color("chartreuse").is_none());
    }

    #[test]
    fn test_parse_hex_alpha() {
        let c = parse_css_color("#000000ff").unwrap();
        assert_eq!(c.alpha, 1.0);
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    #[test]
    fn test_hex_to_rgb_triplet() {
        assert_eq!(hex_to_rgb_triplet("#FF0000"), "255, 0, 0");
        assert_eq!(hex_to_rgb_triplet("#6750A4"), "103, 80, 164");
        assert_eq!(hex_to_rgb_triplet("6750a4"), "103, 80, 164");
    }

    #[test]
    fn test_hex_to_rgb_triplet_fallback() {
        assert_eq!(hex_to_rgb_triplet("not a color"), "0, 0, 0");
        assert_eq!(hex_to_rgb_triplet(""), "0, 0, 0");
    }

    #[test]
    fn test_lighten_boundaries() {
        assert_eq!(lighten("#6750A4", 0.0), "#6750A4");
        assert_eq!(lighten("#6750A4", 1.0), "#ffffff");
    }

    #[test]
    fn test_darken_boundaries() {
        assert_eq!(darken("#6750A4", 0.0), "#6750A4");
        assert_eq!(darken("#6750A4", 1.0), "#000000");
    }

    #[test]
    fn test_lighten_subtle_background() {
        // 103 + (255 - 103) * 0.95 = 247.4
        assert_eq!(lighten("#6750A4", 0.95), "#f7f6fa");
    }

    #[test]
    fn test_darken_amount() {
        // 200 * 0.2 = 40
        assert_eq!(darken("#c8c8c8", 0.8), "#282828");
    }

    #[test]
    fn test_amount_is_clamped() {
        assert_eq!(lighten("#123456", 2.0), "#ffffff");
        assert_eq!(darken("#123456", -1.0), "#123456");
        assert_eq!(darken("#123456", f64::NAN), "#123456");
    }

    #[test]
    fn test_tint_unparseable_is_unchanged() {
        assert_eq!(lighten("rgb(1, 2, 3)", 0.5), "rgb(1, 2, 3)");
        assert_eq!(darken("oops", 0.5), "oops");
    }

    // =========================================================================
    // Contrast
    // =========================================================================

    #[test]
    fn test_black_on_white_is_maximum() {
        let report = check_compliance("#000000", "#FFFFFF").unwrap();
        assert_eq!(report.ratio, 21.0);
        assert!(report.aa);
        assert!(report.aaa);
        assert!(report.aa_large);
    }

    #[test]
    fn test_same_color_is_minimum() {
        let report = check_compliance("#777777", "#777777").unwrap();
        assert_eq!(report.ratio, 1.0);
        assert!(!report.aa && !report.aaa && !report.aa_large);
    }

    #[test]
    fn test_contrast_is_symmetric() {
        let a = contrast_ratio("#6750A4", "#FFFBFE").unwrap();
        let b = contrast_ratio("#FFFBFE", "#6750A4").unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_contrast_accepts_rgb_function() {
        let ratio = contrast_ratio("rgb(0, 0, 0)", "white").unwrap();
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_unreadable_color_is_not_a_ratio() {
        assert!(contrast_ratio("#000", "banana").is_none());
        assert!(check_compliance("??", "#fff").is_none());
        assert!(relative_luminance("hsl(0, 0%, 0%)").is_none());
    }

    #[test]
    fn test_large_text_threshold() {
        let report = ContrastReport::from_ratio(3.2);
        assert!(report.aa_large);
        assert!(!report.aa);
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(Rgb::BLACK.relative_luminance(), 0.0);
        assert!((Rgb::WHITE.relative_luminance() - 1.0).abs() < 1e-12);
    }
}
