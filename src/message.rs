//! Picker message types.
//!
//! Every user action on the picker is represented as a message; all state
//! changes happen in `ColorPicker::update`.

use tint_ui::DragValue;

use crate::color_state::StepDirection;
use crate::sampler::SampleOutcome;

/// Messages that can be sent to update the picker.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Drag regions
    /// Surface dragged to a saturation/brightness pair
    SaturationBrightnessChanged { saturation: f64, brightness: f64 },
    /// Hue track dragged
    HueChanged(f64),
    /// Opacity track dragged
    OpacityChanged(f64),

    // Custom color row
    /// Hex field text changed
    HexInputChanged(String),
    /// Opacity number field text changed
    OpacityInputChanged(String),
    /// Opacity spinner arrow clicked
    OpacityStepped(StepDirection),

    // Theme colors
    /// Preset swatch clicked, by index
    PresetSelected(usize),

    // Eyedropper
    /// Sampling finished
    Sampled(SampleOutcome),

    // Dialog
    /// Show the picker
    Open,
    /// Close and restore the color from when the picker was opened
    Cancel,
    /// Close and commit the current color
    Select,
}

impl From<DragValue> for Message {
    fn from(value: DragValue) -> Self {
        match value {
            DragValue::SaturationBrightness {
                saturation,
                brightness,
            } => Message::SaturationBrightnessChanged {
                saturation,
                brightness,
            },
            DragValue::Hue(h) => Message::HueChanged(h),
            DragValue::Opacity(o) => Message::OpacityChanged(o),
        }
    }
}
