//! Deterministic push-game simulation
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - Time only enters through `dt` and the injected `Clock`
//! - Seeded RNG only
//! - Fixed step order (see `physics::update`)
//! - No rendering or platform dependencies

pub mod agent;
pub mod clock;
pub mod geometry;
pub mod input;
pub mod physics;
pub mod session;
pub mod sprite;

pub use agent::{Agent, AiAgent, AiTuning, Body, BrickAgent, Direction, UserAgent};
pub use clock::{Clock, ManualClock, SystemClock};
pub use geometry::{Rect, colliding, directly_above, is_above, is_left};
pub use input::{Gesture, GestureBus, GestureHandler, GestureSource, SubscriptionId};
pub use physics::{Winner, do_drag, do_jump, do_move, update};
pub use session::PushGame;
pub use sprite::Sprite;
