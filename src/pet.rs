//! Pet stats
//!
//! The pet's condition outside of the game. Strength and hunger decide how
//! the pet fights when it is dropped into a push game.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, check_strength, check_unit};
use crate::sim::{GestureSource, Sprite, UserAgent};

/// Lightest a pet can be on the platform, however well fed
pub const MIN_PET_MASS: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetStats {
    pub health: f32,
    pub hunger: f32,
    pub emotion: f32,
    pub strength: f32,
}

impl Default for PetStats {
    fn default() -> Self {
        Self {
            health: 0.5,
            hunger: 0.5,
            emotion: 0.5,
            strength: 1.0,
        }
    }
}

impl PetStats {
    /// Feed the pet. Better meals take more hunger away; hunger stops at 0.
    pub fn feed(&mut self, meal_quality: f32) {
        self.hunger = (self.hunger - meal_quality).max(0.0);
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_strength(self.strength)?;
        check_unit("health", self.health)?;
        check_unit("hunger", self.hunger)?;
        check_unit("emotion", self.emotion)?;
        Ok(())
    }

    /// Mass on the platform (hunger, but never weightless)
    pub fn mass(&self) -> f32 {
        self.hunger.max(MIN_PET_MASS)
    }

    /// Build the gesture-controlled agent for this pet
    pub fn push_agent(
        &self,
        sprite: Sprite,
        gestures: Rc<dyn GestureSource>,
    ) -> Result<UserAgent, ConfigError> {
        UserAgent::new(sprite, self.strength, self.mass(), gestures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Agent, GestureBus};

    #[test]
    fn test_feed_floors_hunger() {
        let mut pet = PetStats::default();
        pet.feed(0.2);
        assert!((pet.hunger - 0.3).abs() < 1e-6);
        pet.feed(1.0);
        assert_eq!(pet.hunger, 0.0);
    }

    #[test]
    fn test_fed_pet_can_still_play() {
        let mut pet = PetStats::default();
        pet.feed(1.0);
        let agent = pet
            .push_agent(Sprite::default(), Rc::new(GestureBus::new()))
            .unwrap();
        assert_eq!(agent.mass(), MIN_PET_MASS);
    }

    #[test]
    fn test_validate() {
        assert!(PetStats::default().validate().is_ok());
        let weak = PetStats {
            strength: 0.0,
            ..Default::default()
        };
        assert!(matches!(weak.validate(), Err(ConfigError::InvalidStrength(_))));
        let starving = PetStats {
            hunger: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            starving.validate(),
            Err(ConfigError::OutOfRange { field: "hunger", .. })
        ));
    }
}
