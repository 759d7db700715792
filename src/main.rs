// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use lettervis::{
    animation::AnimationSession,
    config::Config,
    views::{MessageView, Stage},
};

struct Model {
    // Animation
    session: AnimationSession,

    // Rendering
    message_view: MessageView,

    // FPS
    last_update: Instant,
    fps: f32,

    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Create window
    app.new_window()
        .title("lettervis 0.2")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    // Optional custom font; empty font_file keeps the built-in one
    let font = config
        .resolve_font_path()
        .map(|path| nannou::text::font::from_file(path).expect("Failed to load font file"));

    let stage = Stage::new(
        config.window.width as f32,
        config.window.height as f32,
        config.style.font_size,
        config.style.letter_spacing,
    );
    let session = AnimationSession::new(stage, config.animation.clone(), &config.message.text);

    println!(
        "Animating {:?} ({} letters) at speed {}",
        config.message.text,
        session.letters().len(),
        session.speed()
    );

    Model {
        session,
        message_view: MessageView::new(&config.style, font),
        last_update: Instant::now(),
        fps: 0.0,
        debug_flag: false,
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // re-cascade the message from the top of the cycle
        Key::Space => model.session.restart(),
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32();
    }

    model.session.tick(app.time);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    model.message_view.draw(&draw, &model.session);

    if model.debug_flag {
        draw_debug_overlay(&draw, model);
    }

    draw.to_frame(app, &frame).unwrap();
}

fn draw_debug_overlay(draw: &Draw, model: &Model) {
    // Mark each letter's centered slot
    for &slot_x in model.session.slots() {
        draw.line()
            .points(pt2(slot_x, -20.0), pt2(slot_x, 20.0))
            .color(RED)
            .stroke_weight(1.0);
    }

    // Visualize FPS
    draw.text(&format!("FPS: {:.1}", model.fps))
        .x_y(0.0, -200.0)
        .color(RED);
}
