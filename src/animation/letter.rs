// src/animation/letter.rs
//
// Per-letter animation state. Each letter runs an independent
// four-phase cycle: drift in from off-screen right, settle into its
// centered slot, hold, exit off-screen left, then re-enter.

use crate::utilities::move_toward;
use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterPhase {
    ApproachingFromRight,
    MovingToCenter,
    PausedAtCenter,
    MovingLeftOffscreen,
}

// Per-tick inputs shared by every phase, computed once by the session.
#[derive(Debug, Clone, Copy)]
pub struct StepContext {
    pub clock: f32,
    pub max_step: f32,  // speed-scaled travel distance this tick
    pub fade_step: f32, // opacity change this tick, speed-scaled
    pub slot_x: f32,
    pub exit_x: f32,
    pub pause_duration: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetterAnimation {
    pub position: Point2,
    pub opacity: f32,
    pub phase: LetterPhase,
    pub target_x: f32,
    pub phase_start_time: f32,
}

impl LetterAnimation {
    pub fn offscreen_right(
        entry_x: f32,
        baseline_y: f32,
        approach_target: f32,
        start_time: f32,
    ) -> Self {
        Self {
            position: pt2(entry_x, baseline_y),
            opacity: 0.0,
            phase: LetterPhase::ApproachingFromRight,
            target_x: approach_target,
            phase_start_time: start_time,
        }
    }

    // Advance one tick. Returns true when the letter has finished its
    // exit and is ready to be recycled by the session.
    pub fn step(&mut self, ctx: &StepContext) -> bool {
        // stagger hold: letter is parked until its start time arrives
        if ctx.clock < self.phase_start_time {
            return false;
        }

        match self.phase {
            LetterPhase::ApproachingFromRight => {
                self.opacity = (self.opacity + ctx.fade_step).min(1.0);
                if self.advance_position(ctx.max_step) {
                    self.phase = LetterPhase::MovingToCenter;
                    self.target_x = ctx.slot_x;
                    self.phase_start_time = ctx.clock;
                }
            }
            LetterPhase::MovingToCenter => {
                self.opacity = (self.opacity + ctx.fade_step).min(1.0);
                if self.advance_position(ctx.max_step) {
                    self.phase = LetterPhase::PausedAtCenter;
                    self.phase_start_time = ctx.clock;
                }
            }
            LetterPhase::PausedAtCenter => {
                self.opacity = (self.opacity + ctx.fade_step).min(1.0);
                if ctx.clock - self.phase_start_time >= ctx.pause_duration {
                    self.phase = LetterPhase::MovingLeftOffscreen;
                    self.target_x = ctx.exit_x;
                    self.phase_start_time = ctx.clock;
                }
            }
            LetterPhase::MovingLeftOffscreen => {
                self.opacity = (self.opacity - ctx.fade_step).max(0.0);
                if self.advance_position(ctx.max_step) || self.opacity <= 0.0 {
                    return true;
                }
            }
        }
        false
    }

    // Reset for a fresh entry from the right. start_time may lie in
    // the future to keep re-entries out of lockstep.
    pub fn recycle(&mut self, entry_x: f32, approach_target: f32, start_time: f32) {
        self.position.x = entry_x;
        self.opacity = 0.0;
        self.phase = LetterPhase::ApproachingFromRight;
        self.target_x = approach_target;
        self.phase_start_time = start_time;
    }

    // Moves position.x toward target_x; true on arrival.
    fn advance_position(&mut self, max_step: f32) -> bool {
        self.position.x = move_toward(self.position.x, self.target_x, max_step);
        (self.position.x - self.target_x).abs() < f32::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(clock: f32) -> StepContext {
        StepContext {
            clock,
            max_step: 100.0 * 0.1, // 100 px/s at dt = 0.1s
            fade_step: 0.1,
            slot_x: 0.0,
            exit_x: -550.0,
            pause_duration: 1.0,
        }
    }

    #[test]
    fn test_stagger_hold_freezes_letter() {
        let mut letter = LetterAnimation::offscreen_right(550.0, 0.0, 275.0, 5.0);
        let before = letter.clone();
        letter.step(&ctx(1.0));
        assert_eq!(letter, before);
    }

    #[test]
    fn test_approach_transitions_on_arrival() {
        let mut letter = LetterAnimation::offscreen_right(280.0, 0.0, 275.0, 0.0);
        let done = letter.step(&ctx(0.1));
        assert!(!done);
        assert_eq!(letter.phase, LetterPhase::MovingToCenter);
        assert_eq!(letter.position.x, 275.0);
        assert_eq!(letter.target_x, 0.0);
        assert_eq!(letter.phase_start_time, 0.1);
    }

    #[test]
    fn test_pause_holds_then_releases() {
        let mut letter = LetterAnimation {
            position: pt2(0.0, 0.0),
            opacity: 1.0,
            phase: LetterPhase::PausedAtCenter,
            target_x: 0.0,
            phase_start_time: 0.0,
        };

        letter.step(&ctx(0.5));
        assert_eq!(letter.phase, LetterPhase::PausedAtCenter);
        assert_eq!(letter.position.x, 0.0);

        letter.step(&ctx(1.5));
        assert_eq!(letter.phase, LetterPhase::MovingLeftOffscreen);
        assert_eq!(letter.target_x, -550.0);
        assert_eq!(letter.phase_start_time, 1.5);
    }

    #[test]
    fn test_exit_completes_when_faded_out() {
        let mut letter = LetterAnimation {
            position: pt2(-100.0, 0.0),
            opacity: 0.05,
            phase: LetterPhase::MovingLeftOffscreen,
            target_x: -550.0,
            phase_start_time: 0.0,
        };
        assert!(letter.step(&ctx(0.1)));
        assert_eq!(letter.opacity, 0.0);
    }

    #[test]
    fn test_recycle_resets_entry_state() {
        let mut letter = LetterAnimation {
            position: pt2(-550.0, 0.0),
            opacity: 0.0,
            phase: LetterPhase::MovingLeftOffscreen,
            target_x: -550.0,
            phase_start_time: 3.0,
        };
        letter.recycle(550.0, 275.0, 4.0);
        assert_eq!(letter.phase, LetterPhase::ApproachingFromRight);
        assert_eq!(letter.position.x, 550.0);
        assert_eq!(letter.opacity, 0.0);
        assert_eq!(letter.target_x, 275.0);
        assert_eq!(letter.phase_start_time, 4.0);
    }
}
