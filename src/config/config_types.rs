// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct MessageConfig {
    pub text: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StyleConfig {
    pub font_file: String, // empty means the built-in font
    pub font_size: u32,
    pub letter_spacing: f32, // slot advance as a multiple of font_size
    pub text_color: [f32; 3],
    pub glow_color: [f32; 3],
    pub glow_layers: u32,
    pub glow_spread: f32, // extra font-size points on the widest glow layer
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnimationConfig {
    pub speed: f32,            // master rate multiplier for motion and fades
    pub pause_duration: f32,   // seconds held at center, not speed-scaled
    pub stagger_interval: f32, // per-letter entry delay in seconds
    pub restart_jitter: f32,   // max random extra delay on re-entry
    pub travel_rate: f32,      // stage-widths per second at speed 1.0
    pub fade_duration: f32,    // fade in/out time in seconds at speed 1.0
}
