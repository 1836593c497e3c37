//! Push game settings
//!
//! Layout of the arena, who the opponent is, and the pet taking part.
//! Stored as JSON; missing fields fall back to the defaults below.

use std::path::Path;
use std::rc::Rc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::FRAME_DT_MS;
use crate::error::ConfigError;
use crate::pet::PetStats;
use crate::sim::{
    Agent, AiAgent, AiTuning, BrickAgent, Clock, GestureSource, PushGame, Rect, Sprite,
};

/// Who the player fights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OpponentKind {
    #[default]
    Brick,
    Ai,
}

impl OpponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpponentKind::Brick => "Brick",
            OpponentKind::Ai => "AI",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "brick" => Some(OpponentKind::Brick),
            "ai" | "bot" => Some(OpponentKind::Ai),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    /// Platform both agents stand on
    pub platform: Rect,
    /// Size of each agent's box
    pub agent_size: Vec2,
    /// Top-left corner of the player at the start
    pub player_start: Vec2,
    /// Top-left corner of the opponent at the start
    pub opponent_start: Vec2,

    // === Opponent ===
    pub opponent: OpponentKind,
    pub ai: AiTuning,

    // === Player ===
    pub pet: PetStats,

    // === Loop ===
    /// Frame step for headless runs (ms)
    pub frame_dt_ms: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            platform: Rect::new(50.0, 200.0, 200.0, 100.0),
            agent_size: Vec2::new(30.0, 30.0),
            player_start: Vec2::new(100.0, 170.0),
            opponent_start: Vec2::new(200.0, 170.0),

            opponent: OpponentKind::Brick,
            ai: AiTuning::default(),

            pet: PetStats::default(),

            frame_dt_ms: FRAME_DT_MS,
        }
    }
}

impl Settings {
    /// Check everything a match needs before building one
    pub fn validate(&self) -> Result<(), ConfigError> {
        let platform = self.platform.size;
        if !(platform.is_finite() && platform.x > 0.0 && platform.y > 0.0)
            || !self.platform.pos.is_finite()
        {
            return Err(ConfigError::InvalidPlatform {
                width: platform.x,
                height: platform.y,
            });
        }

        let size = self.agent_size;
        if !(size.is_finite() && size.x >= 0.0 && size.y >= 0.0) {
            return Err(ConfigError::InvalidAgentSize {
                width: size.x,
                height: size.y,
            });
        }

        for (agent, start) in [("player", self.player_start), ("opponent", self.opponent_start)] {
            if !start.is_finite() {
                return Err(ConfigError::InvalidStart {
                    agent,
                    x: start.x,
                    y: start.y,
                });
            }
        }

        if !(self.frame_dt_ms.is_finite() && self.frame_dt_ms > 0.0) {
            return Err(ConfigError::InvalidFrameStep(self.frame_dt_ms));
        }

        self.ai.validate()?;
        self.pet.validate()?;
        Ok(())
    }

    /// Read and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults if there is no usable file
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Lay out a fresh match: the pet on the left as the player, the
    /// configured opponent on the right.
    pub fn build_game(
        &self,
        gestures: Rc<dyn GestureSource>,
        clock: Rc<dyn Clock>,
    ) -> Result<PushGame, ConfigError> {
        self.validate()?;

        let player_sprite = Sprite::new(Rect {
            pos: self.player_start,
            size: self.agent_size,
        });
        let opponent_sprite = Sprite::new(Rect {
            pos: self.opponent_start,
            size: self.agent_size,
        });

        let player = self.pet.push_agent(player_sprite.clone(), gestures)?;
        let opponent: Box<dyn Agent> = match self.opponent {
            OpponentKind::Brick => Box::new(BrickAgent::new(opponent_sprite)),
            OpponentKind::Ai => Box::new(AiAgent::new(
                opponent_sprite,
                player_sprite,
                clock,
                self.ai,
            )?),
        };
        log::info!("Opponent: {}", self.opponent.as_str());

        PushGame::new(Box::new(player), opponent, self.platform)
    }
}
