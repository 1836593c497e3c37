//! Pet Push - the push mini-game of a virtual-pet smartwatch
//!
//! Core modules:
//! - `sim`: Deterministic simulation (agents, physics step, match session)
//! - `pet`: Pet stats feeding into the player's agent
//! - `settings`: Arena layout and opponent selection
//! - `error`: Configuration errors

pub mod error;
pub mod pet;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use pet::PetStats;
pub use settings::{OpponentKind, Settings};

/// Game configuration constants
pub mod consts {
    /// Default frame step for headless runs (60 Hz, in ms)
    pub const FRAME_DT_MS: f32 = 1000.0 / 60.0;

    /// Initial vertical velocity of a jump (px/s, negative is up)
    pub const JUMP_VELOCITY: f32 = -200.0;
    /// Downward acceleration while jumping (px/s²)
    pub const GRAVITY: f32 = 250.0;
    /// Where an agent is held when it bumps the top of the screen
    pub const CEILING_Y: f32 = 1.0;

    /// 1/e decay time of horizontal velocity (ms)
    pub const DRAG_TIME_CONSTANT_MS: f32 = 2000.0;
    /// Horizontal velocity multiplier before integrating (px/s per unit)
    pub const VX_SCALE: f32 = 15.0;

    /// Push delivered by a single tap at strength 1
    pub const PUSH_UNIT: f32 = 1.0;
    /// Added to stamina when scaling a push, so exhausted agents still push
    pub const STAMINA_FLOOR: f32 = 0.1;
    /// Taps to exhaust a strength-1 agent
    pub const STAMINA_DECAY_BASE: f32 = 100.0;

    /// Minimum gap between AI pushes (ms)
    pub const AI_PUSH_INTERVAL_MS: f64 = 500.0;
    /// Upper bound of the random gap between AI jumps (ms)
    pub const AI_MAX_JUMP_INTERVAL_MS: f64 = 10_000.0;
}
