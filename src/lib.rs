// Domain layer - grid and the Life rule
pub mod domain;

// Application layer - session state machine and frame pacing
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Ambient
pub mod config;
pub mod error;
pub mod logging;

// Re-exports for convenience
pub use domain::{Cell, Grid, next_generation};
pub use application::{FrameLimiter, FrameOutcome, Mode, Session};
pub use config::Config;
pub use error::{Error, Result};
