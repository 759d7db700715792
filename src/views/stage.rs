// src/views/stage.rs
//
// Stage geometry: where letters enter, exit, fade in, and line up.
// Coordinates are nannou-style with the origin at the window center.

#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub width: f32,
    pub height: f32,
    pub glyph_advance: f32, // horizontal advance per letter slot
    pub glyph_margin: f32,  // off-screen clearance beyond the stage edge
}

impl Stage {
    pub fn new(width: f32, height: f32, font_size: u32, letter_spacing: f32) -> Self {
        Self {
            width,
            height,
            glyph_advance: font_size as f32 * letter_spacing,
            glyph_margin: font_size as f32,
        }
    }

    // Where a fresh letter is parked before it drifts in.
    pub fn entry_x(&self) -> f32 {
        self.width / 2.0 + self.glyph_margin
    }

    // Exit target, fully clear of the left edge.
    pub fn exit_x(&self) -> f32 {
        -self.width / 2.0 - self.glyph_margin
    }

    // Line inside the right edge where the fade-in finishes and the
    // letter switches from approaching to seeking its slot.
    pub fn fade_in_line(&self) -> f32 {
        self.width / 2.0 * 0.55
    }

    // Approach target for a given slot. Slots to the right of the
    // fade-in line (wide messages) are approached directly.
    pub fn approach_target(&self, slot_x: f32) -> f32 {
        self.fade_in_line().max(slot_x)
    }

    // Centered slot x-coordinates, one per letter, lined up around 0.
    pub fn slot_positions(&self, letter_count: usize) -> Vec<f32> {
        let total_width = letter_count as f32 * self.glyph_advance;
        (0..letter_count)
            .map(|i| -total_width / 2.0 + self.glyph_advance * (i as f32 + 0.5))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage() -> Stage {
        Stage::new(1000.0, 600.0, 50, 0.8)
    }

    #[test]
    fn test_entry_and_exit_clear_the_edges() {
        let stage = stage();
        assert!(stage.entry_x() > stage.width / 2.0);
        assert!(stage.exit_x() < -stage.width / 2.0);
    }

    #[test]
    fn test_slots_are_centered_and_evenly_spaced() {
        let stage = stage();
        let slots = stage.slot_positions(4);
        assert_eq!(slots.len(), 4);

        let sum: f32 = slots.iter().sum();
        assert!(sum.abs() < 1e-3);

        for pair in slots.windows(2) {
            assert!((pair[1] - pair[0] - stage.glyph_advance).abs() < 1e-3);
        }
    }

    #[test]
    fn test_two_letter_slots_are_symmetric() {
        let stage = stage();
        let slots = stage.slot_positions(2);
        assert!((slots[0] + slots[1]).abs() < 1e-3);
        assert!(slots[0] < slots[1]);
    }

    #[test]
    fn test_wide_message_approach_goes_to_slot() {
        let stage = stage();
        let far_right_slot = stage.fade_in_line() + 100.0;
        assert_eq!(stage.approach_target(far_right_slot), far_right_slot);
        assert_eq!(stage.approach_target(0.0), stage.fade_in_line());
    }
}
