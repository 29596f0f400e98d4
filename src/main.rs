//! Scripted walk through the color picker.
//!
//! Loads the user configuration, opens a picker and replays a short gesture
//! script against it, printing the color after each step and the committed
//! color at the end. Run with `RUST_LOG=debug` for drag tracing.

use tint::tint_ui::{Event, MouseButton, Point};
use tint::{
    ColorPicker, ColorSampler, Message, PickerConfig, SampleFuture, SampleOutcome,
    SamplerCapability, StepDirection,
};

/// Sampler that always "picks" the same color.
struct FixedSampler(&'static str);

impl ColorSampler for FixedSampler {
    fn sample(&self) -> SampleFuture {
        let hex = self.0.to_string();
        Box::pin(async move { SampleOutcome::Picked(hex) })
    }
}

fn press(x: f32, y: f32) -> Event {
    Event::MousePressed {
        button: MouseButton::Left,
        position: Point::new(x, y),
    }
}

fn moved(x: f32, y: f32) -> Event {
    Event::MouseMoved {
        position: Point::new(x, y),
    }
}

fn release(x: f32, y: f32) -> Event {
    Event::MouseReleased {
        button: MouseButton::Left,
        position: Point::new(x, y),
    }
}

fn report(picker: &ColorPicker, step: &str) {
    let state = picker.state();
    println!(
        "{:<28} {}  {:>3}%  {}",
        step,
        state.hex_text(),
        state.opacity_display(),
        state.rgba()
    );
}

fn main() {
    let config = PickerConfig::load_from_default_path().unwrap_or_default();

    // RUST_LOG overrides the configured level
    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let mut picker = ColorPicker::from_config(&config)
        .sampler(SamplerCapability::available(FixedSampler("#3B82F6")));
    picker.update(Message::Open);
    report(&picker, "opened");

    let layout = picker.current_layout();
    let surface = layout.surface;
    let hue = layout.hue_track;
    let opacity = layout.opacity_track;

    // Drag across the surface and out past its bottom-right corner
    picker.handle_event(&press(surface.x + 20.0, surface.y + 20.0));
    for step in 1..=5 {
        let t = step as f32 / 5.0;
        picker.handle_event(&moved(
            surface.x + surface.width * 1.2 * t,
            surface.y + surface.height * 0.6 * t,
        ));
    }
    picker.handle_event(&release(surface.x + surface.width * 1.2, surface.y));
    report(&picker, "surface drag");

    // Bare click on the hue track
    let hue_y = hue.y + hue.height / 2.0;
    picker.handle_event(&press(hue.x + hue.width * 0.6, hue_y));
    picker.handle_event(&release(hue.x + hue.width * 0.6, hue_y));
    report(&picker, "hue click");

    // Opacity drag released far outside the track
    let opacity_y = opacity.y + opacity.height / 2.0;
    picker.handle_event(&press(opacity.x + opacity.width, opacity_y));
    picker.handle_event(&moved(opacity.x + opacity.width * 0.4, opacity_y + 300.0));
    picker.handle_event(&release(-500.0, -500.0));
    report(&picker, "opacity drag");

    // Typing a hex color one character at a time
    let mut typed = String::new();
    for c in "#22C55E".chars() {
        typed.push(c);
        picker.update(Message::HexInputChanged(typed.clone()));
    }
    report(&picker, "typed hex");

    picker.update(Message::OpacityStepped(StepDirection::Increment));
    report(&picker, "opacity step");

    picker.update(Message::OpacityInputChanged("250".to_string()));
    report(&picker, "opacity 250 (rejected)");

    picker.update(Message::PresetSelected(0));
    report(&picker, "first preset");

    if let Some(future) = picker.start_sampling() {
        let outcome = pollster::block_on(future);
        picker.update(Message::Sampled(outcome));
        report(&picker, "eyedropper");
    }

    match picker.select() {
        Some(selected) => println!("selected {} at {}% -> {}", selected.hex, selected.opacity, selected.rgba),
        None => eprintln!("picker was not open"),
    }
}
