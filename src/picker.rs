//! Headless color picker engine.
//!
//! `ColorPicker` owns the canonical [`ColorState`], the three drag
//! controllers (saturation/brightness surface, hue track, opacity track) and
//! the pointer capture they share. A host shell feeds it pointer events and
//! user actions and reads back the values it needs to draw: handle
//! positions, gradient stops and the preview color.
//!
//! Presses are hit-tested against the region bounds. Once a controller has
//! started a session it owns the pointer capture, and moves and releases are
//! routed to it wherever the pointer is.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tint_ui::{Bounds, DragController, DragId, DragMapping, Event, MouseButton, Point, PointerCapture};

use crate::color_model::{pure_hue_hex, rgba_string};
use crate::color_state::{ColorSnapshot, ColorState, StepDirection};
use crate::config::PickerConfig;
use crate::constants::{spacing, surface, track};
use crate::message::Message;
use crate::presets::{PresetProvider, ThemePresets};
use crate::sampler::{SampleFuture, SampleOutcome, SamplerCapability};

/// Bounds of the three interactive regions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerLayout {
    pub surface: Bounds,
    pub hue_track: Bounds,
    pub opacity_track: Bounds,
}

impl PickerLayout {
    /// Default sizes stacked top to bottom from `origin`.
    pub fn stacked(origin: Point) -> Self {
        let surface = Bounds::new(origin.x, origin.y, surface::WIDTH, surface::HEIGHT);
        let hue_y = surface.y + surface.height + spacing::SECTION;
        let hue_track = Bounds::new(origin.x, hue_y, track::WIDTH, track::HEIGHT);
        let opacity_y = hue_y + track::HEIGHT + spacing::TRACK;
        let opacity_track = Bounds::new(origin.x, opacity_y, track::WIDTH, track::HEIGHT);
        Self {
            surface,
            hue_track,
            opacity_track,
        }
    }

    /// Bounds of the region a drag controller works on.
    pub fn region(&self, id: DragId) -> Option<Bounds> {
        match id {
            DragId::Surface => Some(self.surface),
            DragId::HueTrack => Some(self.hue_track),
            DragId::OpacityTrack => Some(self.opacity_track),
            DragId::Custom(_) => None,
        }
    }

    /// Region under `position`, checked in drawing order.
    pub fn hit_test(&self, position: Point) -> Option<DragId> {
        [DragId::Surface, DragId::HueTrack, DragId::OpacityTrack]
            .into_iter()
            .find(|id| self.region(*id).is_some_and(|b| b.contains(position)))
    }
}

impl Default for PickerLayout {
    fn default() -> Self {
        Self::stacked(Point::zero())
    }
}

/// The color committed by [`ColorPicker::select`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedColor {
    pub hex: String,
    pub opacity: f64,
    pub rgba: String,
}

/// Color picker state machine driven by host events.
pub struct ColorPicker {
    state: ColorState,
    is_open: bool,
    /// Color when the picker was opened, restored on cancel
    opened_with: Option<ColorSnapshot>,
    layout: Rc<Cell<PickerLayout>>,
    capture: PointerCapture,
    surface: DragController<Message>,
    hue: DragController<Message>,
    opacity: DragController<Message>,
    presets: ThemePresets,
    sampler: SamplerCapability,
}

impl ColorPicker {
    /// Create a closed picker showing `state`.
    pub fn new(state: ColorState) -> Self {
        let layout = Rc::new(Cell::new(PickerLayout::default()));
        let capture = PointerCapture::new();
        let surface = Self::controller(DragId::Surface, DragMapping::SaturationBrightness, &capture, &layout);
        let hue = Self::controller(DragId::HueTrack, DragMapping::Hue, &capture, &layout);
        let opacity = Self::controller(DragId::OpacityTrack, DragMapping::Opacity, &capture, &layout);
        Self {
            state,
            is_open: false,
            opened_with: None,
            layout,
            capture,
            surface,
            hue,
            opacity,
            presets: ThemePresets::default(),
            sampler: SamplerCapability::Unavailable,
        }
    }

    fn controller(
        id: DragId,
        mapping: DragMapping,
        capture: &PointerCapture,
        layout: &Rc<Cell<PickerLayout>>,
    ) -> DragController<Message> {
        let layout = Rc::clone(layout);
        DragController::new(id, mapping, capture)
            .region_fn(move || layout.get().region(id).unwrap_or_default())
            .on_change(Message::from)
    }

    /// Build a picker from configuration.
    ///
    /// An invalid initial color falls back to the default.
    pub fn from_config(config: &PickerConfig) -> Self {
        let prefs = &config.preferences;
        let state = ColorState::from_hex(&prefs.initial_color, prefs.initial_opacity)
            .unwrap_or_else(|e| {
                log::warn!("ColorPicker: {}; starting from default color", e);
                ColorState::default()
            });
        Self::new(state)
            .layout(config.layout)
            .presets(&ThemePresets::new(&config.presets))
    }

    /// Set the region layout.
    pub fn layout(self, layout: PickerLayout) -> Self {
        self.layout.set(layout);
        self
    }

    /// Replace the preset list.
    pub fn presets<P: PresetProvider>(mut self, provider: &P) -> Self {
        self.presets = ThemePresets::new(provider.list_presets());
        self
    }

    /// Set the color sampling capability.
    pub fn sampler(mut self, sampler: SamplerCapability) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_layout(&self) -> PickerLayout {
        self.layout.get()
    }

    /// Move or resize the regions; active drags pick this up on their next sample.
    pub fn set_layout(&mut self, layout: PickerLayout) {
        self.layout.set(layout);
    }

    pub fn preset_colors(&self) -> &ThemePresets {
        &self.presets
    }

    pub fn can_sample(&self) -> bool {
        self.sampler.is_available()
    }

    /// The controller currently owning the pointer.
    pub fn active_drag(&self) -> Option<DragId> {
        self.capture.owner()
    }

    fn controller_mut(&mut self, id: DragId) -> Option<&mut DragController<Message>> {
        match id {
            DragId::Surface => Some(&mut self.surface),
            DragId::HueTrack => Some(&mut self.hue),
            DragId::OpacityTrack => Some(&mut self.opacity),
            DragId::Custom(_) => None,
        }
    }

    /// Route a pointer event to the drag controllers.
    ///
    /// Returns the message produced by the event, if any. Events are ignored
    /// while the picker is closed.
    pub fn on_event(&mut self, event: &Event) -> Option<Message> {
        if !self.is_open {
            return None;
        }

        match *event {
            Event::MousePressed {
                button: MouseButton::Left,
                position,
            } => {
                if self.capture.is_captured() {
                    return None;
                }
                let id = self.layout.get().hit_test(position)?;
                self.controller_mut(id)?.begin_drag(position)
            }
            Event::MouseMoved { position } => {
                let owner = self.capture.owner()?;
                self.controller_mut(owner)?.on_pointer_move(position)
            }
            Event::MouseReleased {
                button: MouseButton::Left,
                ..
            } => {
                if let Some(owner) = self.capture.owner() {
                    if let Some(controller) = self.controller_mut(owner) {
                        controller.end_drag();
                    }
                }
                None
            }
            Event::PointerCancelled => {
                self.end_drags();
                None
            }
            _ => None,
        }
    }

    /// Route an event and apply its message. Returns whether anything changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match self.on_event(event) {
            Some(message) => self.update(message),
            None => false,
        }
    }

    /// Apply a message. Returns whether the picker needs redrawing.
    pub fn update(&mut self, message: Message) -> bool {
        match message {
            Message::SaturationBrightnessChanged {
                saturation,
                brightness,
            } => self
                .state
                .set_saturation_brightness_from_drag(saturation, brightness),
            Message::HueChanged(hue) => self.state.set_hue_from_drag(hue),
            Message::OpacityChanged(opacity) => self.state.set_opacity(opacity),
            Message::HexInputChanged(text) => {
                let before = self.state.hex_text().to_string();
                self.state.set_hex_from_text(&text);
                self.state.hex_text() != before
            }
            Message::OpacityInputChanged(text) => self.state.set_opacity_from_numeric_input(&text),
            Message::OpacityStepped(direction) => self.step_opacity(direction),
            Message::PresetSelected(index) => self.select_preset(index),
            Message::Sampled(outcome) => self.apply_sample(outcome),
            Message::Open => self.open(),
            Message::Cancel => self.cancel(),
            Message::Select => self.select().is_some(),
        }
    }

    fn step_opacity(&mut self, direction: StepDirection) -> bool {
        self.state.step_opacity(direction)
    }

    /// Show the picker, remembering the current color for cancel.
    pub fn open(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        log::debug!("ColorPicker: opened with {} at {}%", self.state.hex(), self.state.opacity_display());
        self.opened_with = Some(self.state.snapshot());
        self.is_open = true;
        true
    }

    /// Close the picker and restore the color it was opened with.
    pub fn cancel(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        if let Some(snapshot) = self.opened_with.take() {
            self.state.restore(snapshot);
        }
        self.close();
        log::debug!("ColorPicker: cancelled, back to {}", self.state.hex());
        true
    }

    /// Close the picker and commit the current color.
    pub fn select(&mut self) -> Option<SelectedColor> {
        if !self.is_open {
            return None;
        }
        // a half-typed hex never gets committed
        if self.state.has_pending_hex() {
            self.state.restore(self.state.snapshot());
        }
        let selected = SelectedColor {
            hex: self.state.hex().to_string(),
            opacity: self.state.opacity(),
            rgba: self.state.rgba().to_string(),
        };
        log::info!("Selected color: {} Opacity: {}", selected.hex, selected.opacity);
        self.opened_with = None;
        self.close();
        Some(selected)
    }

    fn close(&mut self) {
        self.end_drags();
        self.is_open = false;
    }

    fn end_drags(&mut self) {
        self.surface.end_drag();
        self.hue.end_drag();
        self.opacity.end_drag();
    }

    /// Apply the preset at `index`.
    pub fn select_preset(&mut self, index: usize) -> bool {
        match self.presets.get(index) {
            Some(hex) => {
                let hex = hex.to_string();
                self.state.select_preset_color(&hex)
            }
            None => {
                log::warn!("ColorPicker: no preset at index {}", index);
                false
            }
        }
    }

    /// Start the eyedropper.
    ///
    /// Returns the future for the host to drive; feed its output to
    /// [`ColorPicker::apply_sample`]. Returns `None` when the picker is
    /// closed or the host cannot sample.
    pub fn start_sampling(&self) -> Option<SampleFuture> {
        if !self.is_open {
            return None;
        }
        let future = self.sampler.start();
        if future.is_none() {
            log::debug!("ColorPicker: color sampling not supported");
        }
        future
    }

    /// Apply the result of a sampling interaction.
    ///
    /// A picked color is applied like a preset; cancellation is ignored.
    pub fn apply_sample(&mut self, outcome: SampleOutcome) -> bool {
        match outcome {
            SampleOutcome::Picked(hex) => self.state.select_preset_color(&hex),
            SampleOutcome::Cancelled => {
                log::debug!("ColorPicker: user cancelled the eyedropper");
                false
            }
        }
    }

    /// Center of the surface handle.
    pub fn surface_handle(&self) -> Point {
        let hsb = self.state.hsb();
        self.layout
            .get()
            .surface
            .point_at(hsb.s / 100.0, 1.0 - hsb.b / 100.0)
    }

    /// Center of the hue track handle.
    pub fn hue_handle(&self) -> Point {
        self.layout
            .get()
            .hue_track
            .point_at(self.state.hue() / 360.0, 0.5)
    }

    /// Center of the opacity track handle.
    pub fn opacity_handle(&self) -> Point {
        self.layout
            .get()
            .opacity_track
            .point_at(self.state.opacity() / 100.0, 0.5)
    }

    /// Color at the saturated edge of the surface gradient.
    pub fn surface_hue_color(&self) -> String {
        pure_hue_hex(self.state.hue())
    }

    /// Gradient stops of the opacity track, transparent to opaque.
    pub fn opacity_gradient(&self) -> (String, String) {
        (
            rgba_string(self.state.rgb(), 0.0),
            self.state.hex().to_string(),
        )
    }

    /// Preview swatch color, composited with the current opacity.
    pub fn preview(&self) -> &str {
        self.state.rgba()
    }
}

impl std::fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPicker")
            .field("state", &self.state)
            .field("is_open", &self.is_open)
            .field("layout", &self.layout.get())
            .field("active_drag", &self.capture.owner())
            .field("sampler", &self.sampler)
            .finish()
    }
}
