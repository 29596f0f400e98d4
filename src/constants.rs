//! Default geometry for the picker regions.
//!
//! Regions are stacked vertically inside the picker panel: the
//! saturation/brightness surface on top, then the hue track and the opacity
//! track.

/// Saturation/brightness surface.
pub mod surface {
    pub const WIDTH: f32 = 280.0;
    pub const HEIGHT: f32 = 200.0;
}

/// Hue and opacity tracks.
pub mod track {
    pub const WIDTH: f32 = 280.0;
    pub const HEIGHT: f32 = 24.0;
}

/// Spacing between stacked regions.
pub mod spacing {
    /// Gap between the surface and the hue track
    pub const SECTION: f32 = 24.0;
    /// Gap between the hue and opacity tracks
    pub const TRACK: f32 = 8.0;
}
