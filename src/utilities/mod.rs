pub mod easing;

pub use easing::{lerp, move_toward, smoothstep};
