//! The picker's canonical color.
//!
//! `ColorState` stores hue/saturation/brightness plus opacity and keeps the
//! derived RGB, hex and RGBA values in step with them: every setter writes
//! its fields and recomputes the derived values before returning, so an
//! observer never sees a half-applied update.
//!
//! The one exception is the hex text field. Text typed into it is kept as a
//! transient display value and leaves HSB untouched until it forms a
//! complete `#RRGGBB`; at that point the typed color becomes authoritative
//! and HSB is re-derived from it.

use crate::color_model::{
    self, Hsb, Rgb, clamp_percent, hex_to_rgb, rgb_to_hex, rgb_to_hsb, rgba_string, wrap_hue,
};
use crate::error::ColorError;

/// Default opacity in percent.
pub const DEFAULT_OPACITY: f64 = 100.0;

/// Direction of an opacity spinner step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Increment,
    Decrement,
}

/// The values needed to restore a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSnapshot {
    pub hsb: Hsb,
    pub opacity: f64,
}

/// Canonical picker color with derived representations.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorState {
    hsb: Hsb,
    opacity: f64,
    rgb: Rgb,
    hex: String,
    rgba: String,
    /// Incomplete text typed into the hex field
    pending_hex: Option<String>,
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(Hsb::new(0.0, 0.0, 100.0), DEFAULT_OPACITY)
    }
}

impl ColorState {
    /// Create a state from HSB and opacity, clamping both into range.
    pub fn new(hsb: Hsb, opacity: f64) -> Self {
        let mut state = Self {
            hsb: hsb.clamped(),
            opacity: clamp_percent(opacity),
            rgb: Rgb::default(),
            hex: String::new(),
            rgba: String::new(),
            pending_hex: None,
        };
        state.recompute();
        state
    }

    /// Create a state from a `#RRGGBB` color.
    pub fn from_hex(hex: &str, opacity: f64) -> Result<Self, ColorError> {
        let rgb = hex_to_rgb(hex)?;
        Ok(Self::new(rgb_to_hsb(rgb), opacity))
    }

    pub fn hsb(&self) -> Hsb {
        self.hsb
    }

    pub fn hue(&self) -> f64 {
        self.hsb.h
    }

    pub fn saturation(&self) -> f64 {
        self.hsb.s
    }

    pub fn brightness(&self) -> f64 {
        self.hsb.b
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Opacity as shown in the numeric field.
    pub fn opacity_display(&self) -> u8 {
        self.opacity.round() as u8
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Canonical `#RRGGBB` derived from HSB.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// `rgba(r, g, b, a)` derived from HSB and opacity.
    pub fn rgba(&self) -> &str {
        &self.rgba
    }

    /// What the hex field should display: the typed text while it is
    /// incomplete, the canonical hex otherwise.
    pub fn hex_text(&self) -> &str {
        self.pending_hex.as_deref().unwrap_or(&self.hex)
    }

    pub fn has_pending_hex(&self) -> bool {
        self.pending_hex.is_some()
    }

    pub fn snapshot(&self) -> ColorSnapshot {
        ColorSnapshot {
            hsb: self.hsb,
            opacity: self.opacity,
        }
    }

    pub fn restore(&mut self, snapshot: ColorSnapshot) {
        *self = Self::new(snapshot.hsb, snapshot.opacity);
    }

    /// Set hue from the hue track. Returns whether anything changed.
    pub fn set_hue_from_drag(&mut self, hue: f64) -> bool {
        let hsb = Hsb {
            h: wrap_hue(hue),
            ..self.hsb
        };
        self.apply(hsb, self.opacity)
    }

    /// Set saturation and brightness from the surface.
    pub fn set_saturation_brightness_from_drag(&mut self, saturation: f64, brightness: f64) -> bool {
        let hsb = Hsb {
            s: clamp_percent(saturation),
            b: clamp_percent(brightness),
            ..self.hsb
        };
        self.apply(hsb, self.opacity)
    }

    /// Set opacity, clamped to `[0, 100]`.
    pub fn set_opacity(&mut self, opacity: f64) -> bool {
        self.apply(self.hsb, clamp_percent(opacity))
    }

    /// Accept text typed into the hex field.
    ///
    /// Incomplete or malformed text is stored for display only and returns
    /// `false`. A complete `#RRGGBB` replaces HSB and returns `true`.
    pub fn set_hex_from_text(&mut self, raw: &str) -> bool {
        match hex_to_rgb(raw) {
            Ok(rgb) => {
                self.pending_hex = None;
                self.apply(rgb_to_hsb(rgb), self.opacity);
                log::debug!("ColorState: hex input {} applied", self.hex);
                true
            }
            Err(_) => {
                log::trace!("ColorState: pending hex input {:?}", raw);
                self.pending_hex = Some(raw.to_string());
                false
            }
        }
    }

    /// Apply a preset color. Malformed presets leave the state unchanged.
    pub fn select_preset_color(&mut self, hex: &str) -> bool {
        match hex_to_rgb(hex) {
            Ok(rgb) => {
                self.pending_hex = None;
                self.apply(rgb_to_hsb(rgb), self.opacity);
                true
            }
            Err(e) => {
                log::warn!("ColorState: ignoring preset: {}", e);
                false
            }
        }
    }

    /// Accept text from the numeric opacity field.
    ///
    /// Only integers in `[0, 100]` are accepted; anything else is ignored
    /// and returns `false`.
    pub fn set_opacity_from_numeric_input(&mut self, text: &str) -> bool {
        match text.trim().parse::<i64>() {
            Ok(value) if (0..=100).contains(&value) => {
                self.apply(self.hsb, value as f64);
                true
            }
            _ => {
                log::debug!("ColorState: rejected opacity input {:?}", text);
                false
            }
        }
    }

    /// Step opacity by one from its rounded value, saturating at the ends.
    pub fn step_opacity(&mut self, direction: StepDirection) -> bool {
        let current = self.opacity.round();
        let next = match direction {
            StepDirection::Increment => (current + 1.0).min(100.0),
            StepDirection::Decrement => (current - 1.0).max(0.0),
        };
        self.apply(self.hsb, next)
    }

    fn apply(&mut self, hsb: Hsb, opacity: f64) -> bool {
        let changed = hsb != self.hsb || opacity != self.opacity || self.pending_hex.is_some();
        self.hsb = hsb;
        self.opacity = opacity;
        self.pending_hex = None;
        self.recompute();
        changed
    }

    fn recompute(&mut self) {
        self.rgb = self.hsb.to_rgb();
        self.hex = rgb_to_hex(self.rgb);
        self.rgba = rgba_string(self.rgb, self.opacity);
    }
}

/// Check that the derived values match HSB and opacity.
pub fn is_consistent(state: &ColorState) -> bool {
    let rgb = color_model::hsb_to_rgb(state.hue(), state.saturation(), state.brightness());
    state.rgb() == rgb
        && state.hex() == rgb_to_hex(rgb)
        && color_model::compose_rgba(state.hex(), state.opacity()).as_deref() == Ok(state.rgba())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_white() {
        let state = ColorState::default();
        assert_eq!(state.hsb(), Hsb::new(0.0, 0.0, 100.0));
        assert_eq!(state.opacity(), 100.0);
        assert_eq!(state.hex(), "#FFFFFF");
        assert_eq!(state.rgba(), "rgba(255, 255, 255, 1)");
        assert!(is_consistent(&state));
    }

    #[test]
    fn test_drag_setters_touch_only_their_fields() {
        let mut state = ColorState::default();
        assert!(state.set_hue_from_drag(120.0));
        assert_eq!(state.hsb(), Hsb::new(120.0, 0.0, 100.0));

        assert!(state.set_saturation_brightness_from_drag(100.0, 50.0));
        assert_eq!(state.hsb(), Hsb::new(120.0, 100.0, 50.0));
        assert_eq!(state.hex(), "#008000");

        assert!(state.set_opacity(50.0));
        assert_eq!(state.hsb(), Hsb::new(120.0, 100.0, 50.0));
        assert_eq!(state.rgba(), "rgba(0, 128, 0, 0.5)");
        assert!(is_consistent(&state));
    }

    #[test]
    fn test_drag_setters_clamp() {
        let mut state = ColorState::default();
        state.set_saturation_brightness_from_drag(-10.0, 140.0);
        assert_eq!(state.saturation(), 0.0);
        assert_eq!(state.brightness(), 100.0);
        state.set_opacity(101.0);
        assert_eq!(state.opacity(), 100.0);
        state.set_hue_from_drag(360.0);
        assert_eq!(state.hue(), 0.0);
    }

    #[test]
    fn test_repeated_value_reports_no_change() {
        let mut state = ColorState::default();
        assert!(state.set_opacity(40.0));
        assert!(!state.set_opacity(40.0));
    }

    #[test]
    fn test_typed_hex_is_transient_until_complete() {
        let mut state = ColorState::default();
        state.set_hue_from_drag(200.0);
        state.set_saturation_brightness_from_drag(30.0, 60.0);
        let before = state.hsb();
        let before_hex = state.hex().to_string();

        for partial in ["#12", "#1234"] {
            assert!(!state.set_hex_from_text(partial));
            assert_eq!(state.hsb(), before);
            assert_eq!(state.hex(), before_hex);
            assert_eq!(state.hex_text(), partial);
            assert!(state.has_pending_hex());
        }

        assert!(state.set_hex_from_text("#123456"));
        let expected = rgb_to_hsb(hex_to_rgb("#123456").unwrap());
        assert_eq!(state.hsb(), expected);
        assert_eq!(state.hex(), "#123456");
        assert_eq!(state.hex_text(), "#123456");
        assert!(!state.has_pending_hex());
        assert!(is_consistent(&state));
    }

    #[test]
    fn test_typed_hex_is_case_normalized() {
        let mut state = ColorState::default();
        assert!(state.set_hex_from_text("#d28e9e"));
        assert_eq!(state.hex(), "#D28E9E");
        assert_eq!(state.hex_text(), "#D28E9E");
    }

    #[test]
    fn test_garbage_hex_text_is_kept_for_display() {
        let mut state = ColorState::default();
        assert!(!state.set_hex_from_text("hello"));
        assert_eq!(state.hex_text(), "hello");
        assert_eq!(state.hex(), "#FFFFFF");
    }

    #[test]
    fn test_drag_discards_pending_hex() {
        let mut state = ColorState::default();
        state.set_hex_from_text("#AB");
        assert!(state.set_hue_from_drag(0.0));
        assert!(!state.has_pending_hex());
        assert_eq!(state.hex_text(), "#FFFFFF");
    }

    #[test]
    fn test_typed_hex_keeps_opacity() {
        let mut state = ColorState::default();
        state.set_opacity(25.0);
        state.set_hex_from_text("#FF0000");
        assert_eq!(state.opacity(), 25.0);
        assert_eq!(state.rgba(), "rgba(255, 0, 0, 0.25)");
    }

    #[test]
    fn test_select_preset_color() {
        let mut state = ColorState::default();
        assert!(state.select_preset_color("#3B82F6"));
        assert_eq!(state.hex(), "#3B82F6");
        assert!(!state.select_preset_color("#3B8"));
        assert_eq!(state.hex(), "#3B82F6");
    }

    #[test]
    fn test_numeric_opacity_validation() {
        let mut state = ColorState::default();
        assert!(state.set_opacity_from_numeric_input("42"));
        assert_eq!(state.opacity(), 42.0);

        for bad in ["150", "-5", "abc", "", "12.5", "101"] {
            assert!(!state.set_opacity_from_numeric_input(bad), "{:?}", bad);
            assert_eq!(state.opacity(), 42.0);
        }

        assert!(state.set_opacity_from_numeric_input(" 0 "));
        assert_eq!(state.opacity(), 0.0);
        assert!(state.set_opacity_from_numeric_input("100"));
        assert_eq!(state.opacity(), 100.0);
    }

    #[test]
    fn test_step_opacity_saturates() {
        let mut state = ColorState::default();
        assert!(!state.step_opacity(StepDirection::Increment));
        assert_eq!(state.opacity(), 100.0);

        state.set_opacity(0.0);
        assert!(!state.step_opacity(StepDirection::Decrement));
        assert_eq!(state.opacity(), 0.0);

        assert!(state.step_opacity(StepDirection::Increment));
        assert_eq!(state.opacity(), 1.0);
    }

    #[test]
    fn test_step_opacity_rounds_first() {
        let mut state = ColorState::default();
        state.set_opacity(41.6);
        state.step_opacity(StepDirection::Increment);
        assert_eq!(state.opacity(), 43.0);
        state.set_opacity(41.4);
        state.step_opacity(StepDirection::Decrement);
        assert_eq!(state.opacity(), 40.0);
        assert_eq!(state.opacity_display(), 40);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut state = ColorState::from_hex("#123456", 70.0).unwrap();
        let snap = state.snapshot();
        state.set_hue_from_drag(10.0);
        state.set_opacity(5.0);
        state.set_hex_from_text("#9");
        state.restore(snap);
        assert_eq!(state.hex(), "#123456");
        assert_eq!(state.opacity(), 70.0);
        assert!(!state.has_pending_hex());
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(ColorState::from_hex("#12345", 100.0).is_err());
    }
}
