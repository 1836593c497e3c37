//! A single push-game match
//!
//! Owns both agents and the platform, and steps the physics once per frame
//! until someone falls off.

use super::agent::Agent;
use super::geometry::Rect;
use super::physics::{Winner, update};
use super::sprite::Sprite;
use crate::error::{ConfigError, check_mass, check_stamina};

pub struct PushGame {
    player: Box<dyn Agent>,
    opponent: Box<dyn Agent>,
    platform: Rect,
    outcome: Option<Winner>,
    frames: u64,
}

impl PushGame {
    /// Start a match. The player is the first agent handed to the physics
    /// step, the opponent the second.
    pub fn new(
        player: Box<dyn Agent>,
        opponent: Box<dyn Agent>,
        platform: Rect,
    ) -> Result<Self, ConfigError> {
        let (width, height) = (platform.width(), platform.height());
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0)
            || !platform.pos.is_finite()
        {
            return Err(ConfigError::InvalidPlatform { width, height });
        }
        for agent in [&player, &opponent] {
            check_mass(agent.mass())?;
            check_stamina(agent.stamina())?;
        }

        log::info!(
            "Push game started: platform {}x{} at ({}, {})",
            width,
            height,
            platform.x(),
            platform.y()
        );

        Ok(Self {
            player,
            opponent,
            platform,
            outcome: None,
            frames: 0,
        })
    }

    /// Step one frame. Returns the winner on the frame the match ends;
    /// frames after that are ignored.
    pub fn update(&mut self, dt_ms: f32) -> Option<Winner> {
        if self.outcome.is_some() {
            return None;
        }

        self.frames += 1;
        let result = update(
            self.player.as_mut(),
            self.opponent.as_mut(),
            &self.platform,
            dt_ms,
        );
        if let Some(winner) = result {
            self.outcome = Some(winner);
            log::info!(
                "Push game over after {} frames: {} wins",
                self.frames,
                match winner {
                    Winner::First => "player",
                    Winner::Second => "opponent",
                }
            );
        }
        result
    }

    pub fn outcome(&self) -> Option<Winner> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Did the player (first agent) win?
    pub fn player_won(&self) -> Option<bool> {
        self.outcome.map(|winner| winner == Winner::First)
    }

    /// Frames stepped so far (including the one that ended the match)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn platform(&self) -> Rect {
        self.platform
    }

    pub fn player(&self) -> &dyn Agent {
        self.player.as_ref()
    }

    pub fn opponent(&self) -> &dyn Agent {
        self.opponent.as_ref()
    }

    /// Drawable handles, valid after the match ends
    pub fn sprites(&self) -> (Sprite, Sprite) {
        (self.player.sprite().clone(), self.opponent.sprite().clone())
    }
}
