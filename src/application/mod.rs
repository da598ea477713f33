mod frame_limiter;
mod session;

pub use frame_limiter::FrameLimiter;
pub use session::{FrameOutcome, MANUAL_INTRO_MESSAGE, Mode, Session, WELCOME_MESSAGE};
