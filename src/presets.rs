//! Preset ("theme") colors offered next to the picker.

use crate::color_model::{is_valid_hex, normalize_hex};

/// Built-in theme colors.
pub const DEFAULT_PRESETS: [&str; 12] = [
    "#D28E9E", // Dusty rose
    "#EF4444", // Red
    "#F97316", // Orange
    "#EAB308", // Yellow
    "#22C55E", // Green
    "#14B8A6", // Teal
    "#3B82F6", // Blue
    "#6366F1", // Indigo
    "#A855F7", // Purple
    "#EC4899", // Pink
    "#6B7280", // Gray
    "#111827", // Near black
];

/// Source of preset colors.
pub trait PresetProvider {
    /// Preset colors as `#RRGGBB` strings, in display order.
    fn list_presets(&self) -> Vec<String>;
}

/// A fixed list of preset colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePresets {
    colors: Vec<String>,
}

impl ThemePresets {
    /// Build a preset list, dropping entries that are not `#RRGGBB`.
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = colors
            .into_iter()
            .filter_map(|c| match normalize_hex(c.as_ref()) {
                Ok(hex) => Some(hex),
                Err(e) => {
                    log::warn!("ThemePresets: skipping preset: {}", e);
                    None
                }
            })
            .collect();
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    /// Index of a preset equal to `hex`, ignoring case.
    pub fn position(&self, hex: &str) -> Option<usize> {
        if !is_valid_hex(hex) {
            return None;
        }
        self.colors.iter().position(|c| c.eq_ignore_ascii_case(hex))
    }
}

impl Default for ThemePresets {
    fn default() -> Self {
        Self::new(DEFAULT_PRESETS)
    }
}

impl PresetProvider for ThemePresets {
    fn list_presets(&self) -> Vec<String> {
        self.colors.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_presets_are_valid() {
        let presets = ThemePresets::default();
        assert_eq!(presets.len(), DEFAULT_PRESETS.len());
        assert!(presets.list_presets().iter().all(|c| is_valid_hex(c)));
    }

    #[test]
    fn test_invalid_entries_dropped_and_normalized() {
        let presets = ThemePresets::new(["#abcdef", "#FFF", "nope", "#000000"]);
        assert_eq!(presets.list_presets(), vec!["#ABCDEF", "#000000"]);
        assert_eq!(presets.get(1), Some("#000000"));
        assert_eq!(presets.get(2), None);
    }

    #[test]
    fn test_position_ignores_case() {
        let presets = ThemePresets::default();
        assert_eq!(presets.position("#d28e9e"), Some(0));
        assert_eq!(presets.position("#D28"), None);
        assert_eq!(presets.position("#010101"), None);
    }
}
