//! Continuous pointer-drag controller.
//!
//! A [`DragController`] owns at most one [`DragSession`] at a time. Pressing
//! inside the region starts a session and immediately emits the value under
//! the pointer, so a bare click moves the handle. While the session is alive
//! the controller holds the global [`PointerCapture`], and every sample is
//! mapped through the configured [`DragMapping`] with the pointer clamped to
//! the region, so dragging past an edge pins the value to that edge.

use crate::callback::Callback;
use crate::capture::{CaptureGuard, PointerCapture};
use crate::layout::{Bounds, Point};

/// Largest hue a drag can produce.
///
/// The hue range is half-open, so the right end of the track stops just
/// short of 360 instead of wrapping around to red at 0.
pub const HUE_MAX: f64 = 359.999;

/// Identifies which drag region is being interacted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragId {
    /// The 2-D saturation/brightness surface
    Surface,
    /// The 1-D hue track
    HueTrack,
    /// The 1-D opacity track
    OpacityTrack,
    Custom(u32),
}

/// How a pointer position inside a region turns into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMapping {
    /// x → saturation 0..=100, y → brightness 100..=0 (top is brightest)
    SaturationBrightness,
    /// x → hue 0..=[`HUE_MAX`]
    Hue,
    /// x → opacity 0..=100
    Opacity,
}

/// A value emitted by a drag controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragValue {
    SaturationBrightness { saturation: f64, brightness: f64 },
    Hue(f64),
    Opacity(f64),
}

impl DragMapping {
    /// Map a pointer position to a value, clamping to the region.
    pub fn map(&self, bounds: Bounds, position: Point) -> DragValue {
        let fx = bounds.fraction_x(position.x);
        match self {
            DragMapping::SaturationBrightness => {
                let fy = bounds.fraction_y(position.y);
                DragValue::SaturationBrightness {
                    saturation: fx * 100.0,
                    brightness: 100.0 - fy * 100.0,
                }
            }
            DragMapping::Hue => DragValue::Hue((fx * 360.0).min(HUE_MAX)),
            DragMapping::Opacity => DragValue::Opacity(fx * 100.0),
        }
    }
}

/// State of one press-to-release gesture.
///
/// Holding the session holds the pointer capture; dropping it releases it.
#[derive(Debug)]
pub struct DragSession {
    /// Region bounds as of the latest sample
    bounds: Bounds,
    /// Where the press happened
    origin: Point,
    /// Last value sent to the callback
    last_value: DragValue,
    _capture: CaptureGuard,
}

impl DragSession {
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn last_value(&self) -> DragValue {
        self.last_value
    }
}

/// Manages a continuous drag over one region.
pub struct DragController<M> {
    id: DragId,
    mapping: DragMapping,
    /// Host-supplied accessor for the region's current bounds
    region: Box<dyn Fn() -> Bounds>,
    capture: PointerCapture,
    session: Option<DragSession>,
    on_change: Callback<DragValue, M>,
}

impl<M> DragController<M> {
    /// Create a controller sharing `capture` with its sibling controllers.
    pub fn new(id: DragId, mapping: DragMapping, capture: &PointerCapture) -> Self {
        Self {
            id,
            mapping,
            region: Box::new(Bounds::default),
            capture: capture.clone(),
            session: None,
            on_change: Callback::none(),
        }
    }

    /// Use fixed region bounds.
    pub fn region(self, bounds: Bounds) -> Self {
        self.region_fn(move || bounds)
    }

    /// Query the region bounds from the host on every sample.
    pub fn region_fn<F>(mut self, region: F) -> Self
    where
        F: Fn() -> Bounds + 'static,
    {
        self.region = Box::new(region);
        self
    }

    /// Set the callback that turns emitted values into messages.
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(DragValue) -> M + 'static,
    {
        self.on_change = Callback::new(handler);
        self
    }

    pub fn id(&self) -> DragId {
        self.id
    }

    pub fn mapping(&self) -> DragMapping {
        self.mapping
    }

    /// Current region bounds, as reported by the host.
    pub fn bounds(&self) -> Bounds {
        (self.region)()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Value the controller would emit for `position` right now.
    pub fn value_at(&self, position: Point) -> DragValue {
        self.mapping.map(self.bounds(), position)
    }

    /// Start a session at `position` and emit its value.
    ///
    /// Returns `None` without starting when another controller holds the
    /// pointer capture. A session already owned by this controller is
    /// restarted.
    pub fn begin_drag(&mut self, position: Point) -> Option<M> {
        // release our own capture before re-acquiring
        self.session = None;
        let guard = self.capture.acquire(self.id)?;
        let bounds = self.bounds();
        let value = self.mapping.map(bounds, position);
        log::debug!("DragController {:?}: started at {:?} -> {:?}", self.id, position, value);
        self.session = Some(DragSession {
            bounds,
            origin: position,
            last_value: value,
            _capture: guard,
        });
        self.on_change.call(value)
    }

    /// Emit the value for `position` if a session is active.
    ///
    /// Samples that produce the same value as the previous emission are
    /// coalesced.
    pub fn on_pointer_move(&mut self, position: Point) -> Option<M> {
        let bounds = self.bounds();
        let session = self.session.as_mut()?;
        session.bounds = bounds;
        let value = self.mapping.map(bounds, position);
        if value == session.last_value {
            return None;
        }
        session.last_value = value;
        log::trace!("DragController {:?}: moved to {:?} -> {:?}", self.id, position, value);
        self.on_change.call(value)
    }

    /// End the session, if any. Returns whether one was running.
    pub fn end_drag(&mut self) -> bool {
        match self.session.take() {
            Some(_) => {
                log::debug!("DragController {:?}: stopped dragging", self.id);
                true
            }
            None => false,
        }
    }
}

impl<M> std::fmt::Debug for DragController<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragController")
            .field("id", &self.id)
            .field("mapping", &self.mapping)
            .field("session", &self.session)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn surface(capture: &PointerCapture) -> DragController<DragValue> {
        DragController::new(DragId::Surface, DragMapping::SaturationBrightness, capture)
            .region(Bounds::new(0.0, 0.0, 280.0, 200.0))
            .on_change(|v| v)
    }

    fn sb(value: DragValue) -> (f64, f64) {
        match value {
            DragValue::SaturationBrightness {
                saturation,
                brightness,
            } => (saturation, brightness),
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn test_surface_center() {
        let capture = PointerCapture::new();
        let mut c = surface(&capture);
        let (s, b) = sb(c.begin_drag(Point::new(140.0, 100.0)).unwrap());
        assert!(approx_eq(s, 50.0));
        assert!(approx_eq(b, 50.0));
    }

    #[test]
    fn test_surface_clamps_outside_region() {
        let capture = PointerCapture::new();
        let mut c = surface(&capture);
        let (s, b) = sb(c.begin_drag(Point::new(-50.0, 50.0)).unwrap());
        assert_eq!(s, 0.0);
        assert!(approx_eq(b, 75.0));

        let (s, b) = sb(c.on_pointer_move(Point::new(400.0, 0.0)).unwrap());
        assert_eq!(s, 100.0);
        assert_eq!(b, 100.0);

        let (s, b) = sb(c.on_pointer_move(Point::new(-10.0, 900.0)).unwrap());
        assert_eq!(s, 0.0);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn test_hue_track_mapping() {
        let capture = PointerCapture::new();
        let mut c = DragController::new(DragId::HueTrack, DragMapping::Hue, &capture)
            .region(Bounds::new(0.0, 0.0, 360.0, 12.0))
            .on_change(|v| v);
        match c.begin_drag(Point::new(90.0, 6.0)) {
            Some(DragValue::Hue(h)) => assert!(approx_eq(h, 90.0)),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(c.on_pointer_move(Point::new(500.0, 6.0)), Some(DragValue::Hue(HUE_MAX)));
        assert_eq!(c.on_pointer_move(Point::new(-1.0, 6.0)), Some(DragValue::Hue(0.0)));
        assert_eq!(c.on_pointer_move(Point::new(360.0, 6.0)), Some(DragValue::Hue(HUE_MAX)));
    }

    #[test]
    fn test_opacity_track_offset_region() {
        let capture = PointerCapture::new();
        let mut c = DragController::new(DragId::OpacityTrack, DragMapping::Opacity, &capture)
            .region(Bounds::new(100.0, 40.0, 200.0, 24.0))
            .on_change(|v| v);
        assert_eq!(c.begin_drag(Point::new(150.0, 0.0)), Some(DragValue::Opacity(25.0)));
        assert_eq!(c.on_pointer_move(Point::new(10.0, 500.0)), Some(DragValue::Opacity(0.0)));
    }

    #[test]
    fn test_click_without_move_emits_once() {
        let capture = PointerCapture::new();
        let mut c = surface(&capture);
        let mut emitted = Vec::new();
        emitted.extend(c.begin_drag(Point::new(28.0, 20.0)));
        assert!(c.end_drag());
        emitted.extend(c.on_pointer_move(Point::new(100.0, 100.0)));
        assert_eq!(emitted.len(), 1);
        let (s, b) = sb(emitted[0]);
        assert!(approx_eq(s, 10.0));
        assert!(approx_eq(b, 90.0));
    }

    #[test]
    fn test_move_without_session_is_noop() {
        let capture = PointerCapture::new();
        let mut c = surface(&capture);
        assert_eq!(c.on_pointer_move(Point::new(10.0, 10.0)), None);
        assert!(!c.is_active());
    }

    #[test]
    fn test_end_drag_is_idempotent() {
        let capture = PointerCapture::new();
        let mut c = surface(&capture);
        assert!(!c.end_drag());
        c.begin_drag(Point::new(1.0, 1.0));
        assert!(c.end_drag());
        assert!(!c.end_drag());
        assert!(!capture.is_captured());
    }

    #[test]
    fn test_release_outside_stops_emission() {
        let capture = PointerCapture::new();
        let mut c = surface(&capture);
        c.begin_drag(Point::new(10.0, 10.0));
        assert!(c.on_pointer_move(Point::new(900.0, -300.0)).is_some());
        assert!(c.end_drag());
        assert_eq!(c.on_pointer_move(Point::new(50.0, 50.0)), None);
        assert!(!capture.is_captured());
    }

    #[test]
    fn test_identical_moves_are_coalesced() {
        let capture = PointerCapture::new();
        let mut c = surface(&capture);
        c.begin_drag(Point::new(400.0, -5.0));
        // still pinned to the same corner
        assert_eq!(c.on_pointer_move(Point::new(500.0, -50.0)), None);
        assert!(c.on_pointer_move(Point::new(140.0, 100.0)).is_some());
    }

    #[test]
    fn test_session_holds_capture() {
        let capture = PointerCapture::new();
        let mut s = surface(&capture);
        let mut o = DragController::new(DragId::OpacityTrack, DragMapping::Opacity, &capture)
            .region(Bounds::new(0.0, 0.0, 100.0, 10.0))
            .on_change(|v| v);
        s.begin_drag(Point::new(5.0, 5.0));
        assert_eq!(capture.owner(), Some(DragId::Surface));
        assert_eq!(o.begin_drag(Point::new(5.0, 5.0)), None);
        assert!(!o.is_active());
        s.end_drag();
        assert!(o.begin_drag(Point::new(5.0, 5.0)).is_some());
        assert_eq!(capture.owner(), Some(DragId::OpacityTrack));
    }

    #[test]
    fn test_dropping_controller_releases_capture() {
        let capture = PointerCapture::new();
        {
            let mut c = surface(&capture);
            c.begin_drag(Point::new(5.0, 5.0));
            assert!(capture.is_captured());
        }
        assert!(!capture.is_captured());
    }

    #[test]
    fn test_region_requeried_per_move() {
        use std::cell::Cell;
        use std::rc::Rc;

        let capture = PointerCapture::new();
        let region = Rc::new(Cell::new(Bounds::new(0.0, 0.0, 100.0, 10.0)));
        let source = Rc::clone(&region);
        let mut c = DragController::new(DragId::OpacityTrack, DragMapping::Opacity, &capture)
            .region_fn(move || source.get())
            .on_change(|v| v);
        assert_eq!(c.begin_drag(Point::new(50.0, 5.0)), Some(DragValue::Opacity(50.0)));
        region.set(Bounds::new(0.0, 0.0, 200.0, 10.0));
        assert_eq!(c.on_pointer_move(Point::new(50.0, 5.0)), Some(DragValue::Opacity(25.0)));
        assert_eq!(c.session().unwrap().bounds().width, 200.0);
    }

    #[test]
    fn test_without_callback_nothing_is_emitted() {
        let capture = PointerCapture::new();
        let mut c: DragController<()> =
            DragController::new(DragId::Custom(7), DragMapping::Opacity, &capture);
        assert_eq!(c.begin_drag(Point::new(3.0, 3.0)), None);
        assert!(c.is_active());
        assert_eq!(c.value_at(Point::new(3.0, 3.0)), DragValue::Opacity(0.0));
    }
}
