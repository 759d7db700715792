// src/animation/session.rs
//
// The AnimationSession is the main updating entity: it owns one
// LetterAnimation per character of the message and advances them all
// by one time step per tick. Letters run independently except for the
// shared stagger schedule that cascades their entries.

use rand::Rng;

use crate::{
    animation::{LetterAnimation, StepContext},
    config::AnimationConfig,
    views::Stage,
};

pub struct AnimationSession {
    message: String,
    letters: Vec<LetterAnimation>,
    slots: Vec<f32>, // centered slot x per letter, index-aligned

    // session clock, advanced only by `advance`
    clock: f32,
    last_tick_time: f32,

    speed: f32,
    timing: AnimationConfig,
    stage: Stage,
    random: rand::rngs::ThreadRng,
}

impl AnimationSession {
    pub fn new(stage: Stage, timing: AnimationConfig, message: &str) -> Self {
        let mut session = Self {
            message: String::new(),
            letters: Vec::new(),
            slots: Vec::new(),
            clock: 0.0,
            last_tick_time: 0.0,
            speed: timing.speed,
            timing,
            stage,
            random: rand::thread_rng(),
        };
        session.set_message(message);
        session
    }

    // Replaces the message and rebuilds every letter from scratch.
    // Letters start off-screen right with entry times increasing by
    // index so they cascade in rather than entering in unison.
    pub fn set_message(&mut self, text: &str) {
        self.message = text.to_string();
        self.slots = self.stage.slot_positions(text.chars().count());
        self.letters = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, &slot_x)| {
                LetterAnimation::offscreen_right(
                    self.stage.entry_x(),
                    0.0,
                    self.stage.approach_target(slot_x),
                    self.clock + i as f32 * self.timing.stagger_interval,
                )
            })
            .collect();
    }

    // Re-cascades the current message from the top of the cycle.
    pub fn restart(&mut self) {
        let message = self.message.clone();
        self.set_message(&message);
    }

    // Advance every letter by dt seconds. dt == 0 (and anything
    // non-finite or negative, which clamps to 0) is a strict no-op.
    pub fn advance(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        if dt == 0.0 || self.letters.is_empty() {
            return;
        }
        self.clock += dt;

        let velocity = self.timing.travel_rate * self.stage.width * self.speed;
        let fade_step = dt * self.speed / self.timing.fade_duration;

        for i in 0..self.letters.len() {
            let ctx = StepContext {
                clock: self.clock,
                max_step: velocity * dt,
                fade_step,
                slot_x: self.slots[i],
                exit_x: self.stage.exit_x(),
                pause_duration: self.timing.pause_duration,
            };

            if self.letters[i].step(&ctx) {
                // exit finished: send the letter back around with its
                // stagger slot plus optional jitter
                let jitter = if self.timing.restart_jitter > 0.0 {
                    self.random.gen_range(0.0..self.timing.restart_jitter)
                } else {
                    0.0
                };
                let restart_time =
                    self.clock + i as f32 * self.timing.stagger_interval + jitter;
                self.letters[i].recycle(
                    self.stage.entry_x(),
                    self.stage.approach_target(self.slots[i]),
                    restart_time,
                );
            }
        }
    }

    // Host-loop entry point: computes dt from the previous tick's
    // timestamp and advances.
    pub fn tick(&mut self, now: f32) {
        let dt = now - self.last_tick_time;
        self.last_tick_time = now;
        self.advance(dt);
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn letters(&self) -> &[LetterAnimation] {
        &self.letters
    }

    pub fn slots(&self) -> &[f32] {
        &self.slots
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    // Characters paired with their animation records, render-ready.
    pub fn glyphs(&self) -> impl Iterator<Item = (char, &LetterAnimation)> {
        self.message.chars().zip(self.letters.iter())
    }
}
