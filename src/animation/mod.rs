pub mod letter;
pub mod session;

pub use letter::{LetterAnimation, LetterPhase, StepContext};
pub use session::AnimationSession;
