// src/views/message_view.rs
//
// Draws the session's letters: layered glow under-draws in the glow
// color, then the glyph itself, all modulated by the letter's opacity.

use nannou::prelude::*;
use nannou::text::Font;

use crate::{
    animation::AnimationSession,
    config::StyleConfig,
    utilities::{lerp, smoothstep},
};

pub struct MessageView {
    font: Option<Font>,
    font_size: u32,
    text_color: Rgb<f32>,
    glow_color: Rgb<f32>,
    glow_layers: u32,
    glow_spread: f32,
}

impl MessageView {
    pub fn new(style: &StyleConfig, font: Option<Font>) -> Self {
        Self {
            font,
            font_size: style.font_size,
            text_color: rgb(
                style.text_color[0],
                style.text_color[1],
                style.text_color[2],
            ),
            glow_color: rgb(
                style.glow_color[0],
                style.glow_color[1],
                style.glow_color[2],
            ),
            glow_layers: style.glow_layers,
            glow_spread: style.glow_spread,
        }
    }

    pub fn draw(&self, draw: &Draw, session: &AnimationSession) {
        for (ch, letter) in session.glyphs() {
            if letter.opacity <= 0.0 || ch.is_whitespace() {
                continue;
            }
            let glyph = ch.to_string();

            // widest, faintest glow layer first
            for layer in (1..=self.glow_layers).rev() {
                let t = layer as f32 / self.glow_layers as f32;
                let alpha = letter.opacity * lerp(0.30, 0.05, smoothstep(t));
                let size = self.font_size + (self.glow_spread * t).round() as u32;
                self.draw_glyph(
                    draw,
                    &glyph,
                    letter.position,
                    size,
                    rgba(
                        self.glow_color.red,
                        self.glow_color.green,
                        self.glow_color.blue,
                        alpha,
                    ),
                );
            }

            self.draw_glyph(
                draw,
                &glyph,
                letter.position,
                self.font_size,
                rgba(
                    self.text_color.red,
                    self.text_color.green,
                    self.text_color.blue,
                    letter.opacity,
                ),
            );
        }
    }

    fn draw_glyph(&self, draw: &Draw, glyph: &str, position: Point2, font_size: u32, color: Rgba) {
        let drawing = draw
            .text(glyph)
            .x_y(position.x, position.y)
            .font_size(font_size)
            .color(color);
        if let Some(font) = &self.font {
            drawing.font(font.clone());
        }
    }
}
