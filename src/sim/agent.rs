//! Push game agents
//!
//! An agent is one of the two combatants on the platform. The physics step
//! only talks to the [`Agent`] trait; the three variants differ in where their
//! pushes and jumps come from:
//! - [`UserAgent`]: buffered tap/swipe gestures
//! - [`BrickAgent`]: nothing at all
//! - [`AiAgent`]: clock-driven pulses, facing its opponent

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::geometry::{Rect, is_left};
use super::input::{Gesture, GestureSource, SubscriptionId};
use super::sprite::Sprite;
use crate::consts::*;
use crate::error::{ConfigError, check_mass, check_strength};

/// Push/facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    /// +1 for right, -1 for left
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Kinematic state of an agent. Only the physics step mutates it.
#[derive(Debug, Clone, Default)]
pub struct Body {
    pub sprite: Sprite,
    /// px/sec; negative y is up
    pub vel: Vec2,
    pub jumping: bool,
}

impl Body {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            sprite,
            vel: Vec2::ZERO,
            jumping: false,
        }
    }
}

/// Capability set every combatant provides to the physics step
pub trait Agent {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Push magnitude accumulated since the last call, then reset to zero.
    ///
    /// This is a drain: a second call with nothing in between returns 0.
    fn drain_push(&mut self) -> f32;

    /// Direction the agent currently wants to push in
    fn direction(&self) -> Direction;

    /// True once per jump request, then cleared.
    fn take_jump_request(&mut self) -> bool;

    /// Larger mass is harder to push around
    fn mass(&self) -> f32;

    /// Fatigue in [0, 1], scaling push strength
    fn stamina(&self) -> f32;

    /// The match ended. Release input subscriptions; the sprite stays valid
    /// for drawing. Calling it again does nothing.
    fn game_over(&mut self, won: bool);

    fn sprite(&self) -> &Sprite {
        &self.body().sprite
    }

    fn rect(&self) -> Rect {
        self.body().sprite.rect()
    }

    fn set_jump_state(&mut self, jumping: bool) {
        self.body_mut().jumping = jumping;
    }

    fn is_jumping(&self) -> bool {
        self.body().jumping
    }

    /// Move relative to the current position (y negative is up)
    fn move_by(&mut self, dx: f32, dy: f32) {
        let sprite = self.sprite();
        let rect = sprite.rect();
        sprite.set_position(rect.x() + dx, rect.y() + dy);
    }
}

/// Gestures folded between two physics steps
#[derive(Debug, Clone)]
struct PendingInput {
    pushes: u32,
    facing: Direction,
    jump_requested: bool,
    stamina: f32,
    stamina_decay: f32,
}

impl PendingInput {
    fn apply(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Tap => {
                self.pushes += 1;
                self.stamina -= self.stamina.min(self.stamina_decay);
            }
            Gesture::SwipeLeft => self.facing = Direction::Left,
            Gesture::SwipeRight => self.facing = Direction::Right,
            Gesture::SwipeUp => self.jump_requested = true,
            Gesture::SwipeDown => {}
        }
    }
}

/// Agent driven by the watch wearer
///
/// Tap pushes, swipe left/right turns, swipe up jumps.
pub struct UserAgent {
    body: Body,
    input: Rc<RefCell<PendingInput>>,
    /// Push contributed by one tap
    push_scale: f32,
    mass: f32,
    gestures: Rc<dyn GestureSource>,
    subscription: Option<SubscriptionId>,
}

impl UserAgent {
    /// Subscribe to `gestures` and set up an agent.
    ///
    /// Strength scales each push and slows fatigue; hunger becomes the mass.
    pub fn new(
        sprite: Sprite,
        strength: f32,
        hunger: f32,
        gestures: Rc<dyn GestureSource>,
    ) -> Result<Self, ConfigError> {
        let strength = check_strength(strength)?;
        let mass = check_mass(hunger)?;

        let input = Rc::new(RefCell::new(PendingInput {
            pushes: 0,
            facing: Direction::Right,
            jump_requested: false,
            stamina: 1.0,
            stamina_decay: 1.0 / (STAMINA_DECAY_BASE * strength),
        }));

        let sink = input.clone();
        let subscription = gestures.subscribe(Box::new(move |gesture, _x, _y| {
            sink.borrow_mut().apply(gesture);
        }));

        Ok(Self {
            body: Body::new(sprite),
            input,
            push_scale: strength * PUSH_UNIT,
            mass,
            gestures,
            subscription: Some(subscription),
        })
    }

    /// Is the agent still receiving gestures?
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    fn release(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.gestures.unsubscribe(id);
            log::debug!("User agent released gesture subscription {:?}", id);
        }
    }
}

impl Agent for UserAgent {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn drain_push(&mut self) -> f32 {
        let mut input = self.input.borrow_mut();
        let push = input.pushes as f32 * self.push_scale;
        input.pushes = 0;
        push
    }

    fn direction(&self) -> Direction {
        self.input.borrow().facing
    }

    fn take_jump_request(&mut self) -> bool {
        std::mem::take(&mut self.input.borrow_mut().jump_requested)
    }

    fn mass(&self) -> f32 {
        self.mass
    }

    fn stamina(&self) -> f32 {
        self.input.borrow().stamina
    }

    fn game_over(&mut self, won: bool) {
        if self.subscription.is_some() {
            log::info!("User agent {}", if won { "won" } else { "lost" });
        }
        self.release();

        // Anything queued before the final frame is dropped
        let mut input = self.input.borrow_mut();
        input.pushes = 0;
        input.jump_requested = false;
    }
}

impl Drop for UserAgent {
    fn drop(&mut self) {
        self.release();
    }
}

/// Inert opponent. Never pushes, never jumps.
pub struct BrickAgent {
    body: Body,
}

impl BrickAgent {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            body: Body::new(sprite),
        }
    }
}

impl Agent for BrickAgent {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn drain_push(&mut self) -> f32 {
        0.0
    }

    fn direction(&self) -> Direction {
        Direction::Left
    }

    fn take_jump_request(&mut self) -> bool {
        false
    }

    fn mass(&self) -> f32 {
        1.0
    }

    fn stamina(&self) -> f32 {
        1.0
    }

    fn game_over(&mut self, _won: bool) {}
}

/// Timing knobs for the simple AI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiTuning {
    /// Minimum gap between two pushes (ms)
    pub push_interval_ms: f64,
    /// Upper bound of the random gap between jumps (ms)
    pub max_jump_interval_ms: f64,
    /// Seed for the jump-interval RNG
    pub seed: u64,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            push_interval_ms: AI_PUSH_INTERVAL_MS,
            max_jump_interval_ms: AI_MAX_JUMP_INTERVAL_MS,
            seed: 0,
        }
    }
}

impl AiTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.push_interval_ms.is_finite() && self.push_interval_ms >= 0.0) {
            return Err(ConfigError::InvalidAiTuning(format!(
                "push interval {} ms",
                self.push_interval_ms
            )));
        }
        if !(self.max_jump_interval_ms.is_finite() && self.max_jump_interval_ms >= 0.0) {
            return Err(ConfigError::InvalidAiTuning(format!(
                "max jump interval {} ms",
                self.max_jump_interval_ms
            )));
        }
        Ok(())
    }
}

/// Simple AI: pushes on a fixed beat, jumps at random intervals, and always
/// faces whoever it is fighting.
pub struct AiAgent {
    body: Body,
    /// Read-only view of the opponent's box
    opponent: Sprite,
    clock: Rc<dyn Clock>,
    rng: Pcg32,
    tuning: AiTuning,
    last_push_ms: f64,
    last_jump_ms: f64,
    jump_interval_ms: f64,
    finished: bool,
}

impl AiAgent {
    pub fn new(
        sprite: Sprite,
        opponent: Sprite,
        clock: Rc<dyn Clock>,
        tuning: AiTuning,
    ) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let now = clock.now_ms();
        let mut agent = Self {
            body: Body::new(sprite),
            opponent,
            clock,
            rng: Pcg32::seed_from_u64(tuning.seed),
            tuning,
            last_push_ms: now,
            last_jump_ms: now,
            jump_interval_ms: 0.0,
            finished: false,
        };
        agent.jump_interval_ms = agent.roll_jump_interval();
        Ok(agent)
    }

    /// Current wait before the next jump (ms)
    pub fn jump_interval_ms(&self) -> f64 {
        self.jump_interval_ms
    }

    fn roll_jump_interval(&mut self) -> f64 {
        self.rng.random::<f64>() * self.tuning.max_jump_interval_ms
    }
}

impl Agent for AiAgent {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn drain_push(&mut self) -> f32 {
        if self.finished {
            return 0.0;
        }
        let now = self.clock.now_ms();
        if now - self.last_push_ms > self.tuning.push_interval_ms {
            self.last_push_ms = now;
            return PUSH_UNIT;
        }
        0.0
    }

    fn direction(&self) -> Direction {
        if is_left(&self.opponent.rect(), &self.rect()) {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    fn take_jump_request(&mut self) -> bool {
        if self.finished {
            return false;
        }
        let now = self.clock.now_ms();
        if now - self.last_jump_ms > self.jump_interval_ms {
            self.last_jump_ms = now;
            self.jump_interval_ms = self.roll_jump_interval();
            return true;
        }
        false
    }

    fn mass(&self) -> f32 {
        1.0
    }

    fn stamina(&self) -> f32 {
        1.0
    }

    fn game_over(&mut self, _won: bool) {
        self.finished = true;
    }
}
