//src/utilities/easing.rs

// scalar easing helpers for letter motion and glow falloff

pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

// Constant-rate approach: steps at most max_step toward target and
// snaps exactly onto it on the final step.
pub fn move_toward(current: f32, target: f32, max_step: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_step {
        target
    } else {
        current + max_step * delta.signum()
    }
}

pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_toward_snaps_on_arrival() {
        assert_eq!(move_toward(9.5, 10.0, 1.0), 10.0);
        assert_eq!(move_toward(10.0, 10.0, 1.0), 10.0);
    }

    #[test]
    fn test_move_toward_steps_both_directions() {
        assert_eq!(move_toward(0.0, 10.0, 1.0), 1.0);
        assert_eq!(move_toward(0.0, -10.0, 1.0), -1.0);
    }

    #[test]
    fn test_smoothstep_bounds() {
        assert_eq!(smoothstep(-1.0), 0.0);
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(2.0), 1.0);
        assert_eq!(smoothstep(0.5), 0.5);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }
}
