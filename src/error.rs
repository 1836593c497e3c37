//! Configuration errors
//!
//! Gameplay outcomes (falling off the platform) are never errors. These only
//! cover agent/session construction and settings files.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("mass must be finite and > 0, got {0}")]
    InvalidMass(f32),
    #[error("strength must be finite and > 0, got {0}")]
    InvalidStrength(f32),
    #[error("stamina must be within [0, 1], got {0}")]
    InvalidStamina(f32),
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfRange { field: &'static str, value: f32 },
    #[error("platform must have a finite, positive size, got {width}x{height}")]
    InvalidPlatform { width: f32, height: f32 },
    #[error("agent must have a finite, non-negative size, got {width}x{height}")]
    InvalidAgentSize { width: f32, height: f32 },
    #[error("{agent} start position must be finite, got ({x}, {y})")]
    InvalidStart { agent: &'static str, x: f32, y: f32 },
    #[error("frame step must be finite and > 0 ms, got {0}")]
    InvalidFrameStep(f32),
    #[error("invalid AI tuning: {0}")]
    InvalidAiTuning(String),
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Validate a mass value (must be finite and strictly positive)
pub fn check_mass(mass: f32) -> Result<f32, ConfigError> {
    if mass.is_finite() && mass > 0.0 {
        Ok(mass)
    } else {
        Err(ConfigError::InvalidMass(mass))
    }
}

/// Validate a strength value (must be finite and strictly positive)
pub fn check_strength(strength: f32) -> Result<f32, ConfigError> {
    if strength.is_finite() && strength > 0.0 {
        Ok(strength)
    } else {
        Err(ConfigError::InvalidStrength(strength))
    }
}

/// Validate a stamina value (must be within [0, 1])
pub fn check_stamina(stamina: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&stamina) {
        Ok(stamina)
    } else {
        Err(ConfigError::InvalidStamina(stamina))
    }
}

/// Validate a named [0, 1] stat
pub fn check_unit(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}
