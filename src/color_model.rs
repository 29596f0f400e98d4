//! Color model conversions.
//!
//! HSB is the canonical representation; RGB, hex and the CSS-style RGBA
//! string are derived from it. All functions here are pure.
//!
//! Units: hue in degrees `[0, 360)`, saturation/brightness/opacity in percent
//! `[0, 100]`, RGB channels as `u8`.

use std::fmt;

use crate::error::ColorError;

/// Maximum per-channel drift of `rgb_to_hsb(hsb_to_rgb(hsb))`.
///
/// Holds for chromatic colors (saturation and brightness of at least 50%).
/// Below that, RGB quantization makes hue and saturation increasingly
/// unrecoverable; at zero saturation or brightness hue is undefined and
/// comes back as 0.
pub const ROUND_TRIP_TOLERANCE: f64 = 1.0;

/// A color in 8-bit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&rgb_to_hex(*self))
    }
}

/// A color in hue/saturation/brightness.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsb {
    /// Hue in degrees, `[0, 360)`
    pub h: f64,
    /// Saturation in percent
    pub s: f64,
    /// Brightness in percent
    pub b: f64,
}

impl Hsb {
    pub const fn new(h: f64, s: f64, b: f64) -> Self {
        Self { h, s, b }
    }

    /// Clamp every component into its range, wrapping hue.
    pub fn clamped(self) -> Self {
        Self {
            h: wrap_hue(self.h),
            s: clamp_percent(self.s),
            b: clamp_percent(self.b),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        hsb_to_rgb(self.h, self.s, self.b)
    }
}

/// Wrap a hue into `[0, 360)`. Non-finite input becomes 0.
pub fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid of a tiny negative number rounds up to 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Clamp a percentage into `[0, 100]`. NaN becomes 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Check that a percentage lies in `[0, 100]`.
pub fn validate_percent(what: &'static str, value: f64) -> Result<f64, ColorError> {
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::OutOfRange {
            what,
            value,
            min: 0.0,
            max: 100.0,
        })
    }
}

/// Convert HSB to RGB.
///
/// # Arguments
/// * `h` - Hue in degrees (wrapped into 0-360)
/// * `s` - Saturation in percent (clamped to 0-100)
/// * `b` - Brightness in percent (clamped to 0-100)
///
/// Each channel is rounded independently, half away from zero.
pub fn hsb_to_rgb(h: f64, s: f64, b: f64) -> Rgb {
    let h = wrap_hue(h);
    let s = clamp_percent(s) / 100.0;
    let v = clamp_percent(b) / 100.0;

    let c = v * s;
    let sector = h / 60.0;
    let x = c * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert RGB to HSB.
///
/// Hue is 0 for achromatic colors and saturation is 0 for black.
/// `hsb_to_rgb(rgb_to_hsb(c))` returns `c` exactly for every RGB color;
/// the reverse direction drifts by at most [`ROUND_TRIP_TOLERANCE`] for
/// chromatic colors.
pub fn rgb_to_hsb(rgb: Rgb) -> Hsb {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max * 100.0 };

    Hsb::new(wrap_hue(h), s, max * 100.0)
}

/// Format RGB as `#RRGGBB` with uppercase digits.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Check whether `input` is exactly `#` followed by six hex digits.
pub fn is_valid_hex(input: &str) -> bool {
    input.len() == 7
        && input.starts_with('#')
        && input[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Parse `#RRGGBB` (either case). Shorthand forms are rejected.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    if !is_valid_hex(hex) {
        return Err(ColorError::invalid_format(hex));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::invalid_format(hex))
    };
    Ok(Rgb::new(channel(1..3)?, channel(3..5)?, channel(5..7)?))
}

/// Uppercase a valid `#RRGGBB` string.
pub fn normalize_hex(hex: &str) -> Result<String, ColorError> {
    hex_to_rgb(hex).map(rgb_to_hex)
}

/// Opacity percent as an alpha in `[0, 1]`, rounded to three decimals.
pub fn opacity_to_alpha(opacity: f64) -> f64 {
    (clamp_percent(opacity) * 10.0).round() / 1000.0
}

/// Compose `rgba(r, g, b, a)` from a hex color and an opacity percent.
///
/// The alpha is printed with at most three decimals and no trailing zeros.
pub fn compose_rgba(hex: &str, opacity: f64) -> Result<String, ColorError> {
    let rgb = hex_to_rgb(hex)?;
    Ok(rgba_string(rgb, opacity))
}

pub(crate) fn rgba_string(rgb: Rgb, opacity: f64) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        rgb.r,
        rgb.g,
        rgb.b,
        opacity_to_alpha(opacity)
    )
}

/// The fully saturated, full brightness color for a hue.
pub fn pure_hue_hex(h: f64) -> String {
    rgb_to_hex(hsb_to_rgb(h, 100.0, 100.0))
}
