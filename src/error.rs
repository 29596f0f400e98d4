//! Errors raised by the color model.

/// Errors from color conversion and validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// A hex string that is not `#` followed by six hex digits
    #[error("Invalid hex color {input:?}: expected #RRGGBB")]
    InvalidFormat { input: String },

    /// A numeric value outside its allowed range
    #[error("{what} {value} is out of range {min}..={max}")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        ColorError::InvalidFormat {
            input: input.to_string(),
        }
    }
}
