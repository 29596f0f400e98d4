//! tint - headless color picker
//!
//! A color picker engine: an HSB color model with RGB/hex/RGBA conversion,
//! a color state that keeps every representation consistent, and pointer
//! drag handling for the saturation/brightness surface and the hue and
//! opacity tracks. A host shell feeds it events and draws from the values
//! it exposes.

pub mod color_model;
pub mod color_state;
pub mod config;
pub mod constants;
pub mod error;
pub mod message;
pub mod picker;
pub mod presets;
pub mod sampler;

pub use color_model::{Hsb, Rgb};
pub use color_state::{ColorState, StepDirection};
pub use config::{ConfigError, LogLevel, PickerConfig};
pub use error::ColorError;
pub use message::Message;
pub use picker::{ColorPicker, PickerLayout, SelectedColor};
pub use presets::{PresetProvider, ThemePresets};
pub use sampler::{ColorSampler, SampleFuture, SampleOutcome, SamplerCapability};

pub use tint_ui;
