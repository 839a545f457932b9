//! Game tuning and layout constants
//!
//! Defaults match the shipped game. A JSON override can be stored in
//! LocalStorage; any field left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// All tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of lanes
    pub lane_count: usize,
    /// Lane the player starts each session in (clamped to the lane range)
    pub start_lane: usize,
    /// Speed at session start (pixels per tick)
    pub base_speed: f32,
    /// Speed cap (pixels per tick)
    pub max_speed: f32,
    /// Speed added every tick
    pub accel: f32,
    /// Ticks between obstacle spawns
    pub spawn_interval: u64,

    /// Lane width cap (CSS pixels)
    pub lane_width_cap: f32,
    /// Player width cap (CSS pixels)
    pub player_width_cap: f32,
    /// Player width as a fraction of lane width
    pub player_width_ratio: f32,
    /// Player height as a multiple of player width
    pub player_aspect: f32,
    /// Gap between the player and the bottom edge
    pub player_bottom_margin: f32,
    /// Fraction of the remaining distance the player covers each tick
    pub player_easing: f32,

    /// Obstacle width as a fraction of lane width
    pub obstacle_width_ratio: f32,
    /// Smallest obstacle height
    pub obstacle_min_height: f32,
    /// Largest obstacle height (exclusive)
    pub obstacle_max_height: f32,
    /// How far past the bottom edge an obstacle travels before removal
    pub despawn_margin: f32,

    /// Score gained every tick regardless of speed
    pub score_base: f64,
    /// Speed is divided by this before being added to the score
    pub score_speed_divisor: f64,

    /// Minimum horizontal travel for a touch swipe to count
    pub swipe_threshold: f32,
    /// Delay before the game-over overlay appears
    pub game_over_delay_ms: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lane_count: 4,
            start_lane: 1,
            base_speed: 3.0,
            max_speed: 20.0,
            accel: 0.004,
            spawn_interval: 80,

            lane_width_cap: 160.0,
            player_width_cap: 80.0,
            player_width_ratio: 0.6,
            player_aspect: 1.5,
            player_bottom_margin: 20.0,
            player_easing: 0.2,

            obstacle_width_ratio: 0.7,
            obstacle_min_height: 60.0,
            obstacle_max_height: 100.0,
            despawn_margin: 100.0,

            score_base: 0.1,
            score_speed_divisor: 100.0,

            swipe_threshold: 50.0,
            game_over_delay_ms: 300,
        }
    }
}

impl GameConfig {
    /// LocalStorage key for the JSON override (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "trackrunner_config";

    /// Parse a JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |field, reason| Err(GameError::InvalidConfig { field, reason });

        if self.lane_count == 0 {
            return invalid("lane_count", "must be at least 1");
        }
        if self.spawn_interval == 0 {
            return invalid("spawn_interval", "must be at least 1");
        }
        if !(self.base_speed > 0.0) {
            return invalid("base_speed", "must be positive");
        }
        if self.max_speed < self.base_speed {
            return invalid("max_speed", "must not be below base_speed");
        }
        if self.accel < 0.0 {
            return invalid("accel", "must not be negative");
        }
        if !(self.player_easing > 0.0 && self.player_easing <= 1.0) {
            return invalid("player_easing", "must be in (0, 1]");
        }
        if !(self.obstacle_min_height > 0.0 && self.obstacle_max_height > self.obstacle_min_height)
        {
            return invalid("obstacle_max_height", "must exceed a positive obstacle_min_height");
        }
        if !(self.score_speed_divisor > 0.0) {
            return invalid("score_speed_divisor", "must be positive");
        }
        Ok(())
    }

    /// Start lane clamped into the lane range
    pub fn clamped_start_lane(&self) -> usize {
        self.start_lane.min(self.lane_count.saturating_sub(1))
    }

    /// Load the override from LocalStorage, falling back to defaults (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config override from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring config override: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "lane_count": 3, "max_speed": 12.5 }"#).unwrap();
        assert_eq!(config.lane_count, 3);
        assert_eq!(config.max_speed, 12.5);
        assert_eq!(config.spawn_interval, 80);
        assert_eq!(config.base_speed, 3.0);
    }

    #[test]
    fn test_rejects_zero_lanes() {
        let err = GameConfig::from_json(r#"{ "lane_count": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidConfig {
                field: "lane_count",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_max_below_base() {
        let config = GameConfig {
            base_speed: 5.0,
            max_speed: 4.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_easing() {
        for easing in [0.0, -0.5, 1.5, f32::NAN] {
            let config = GameConfig {
                player_easing: easing,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "easing {easing} accepted");
        }
    }

    #[test]
    fn test_rejects_garbage_json() {
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(GameError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_start_lane_clamped() {
        let config = GameConfig {
            lane_count: 1,
            start_lane: 1,
            ..Default::default()
        };
        assert_eq!(config.clamped_start_lane(), 0);
        assert_eq!(GameConfig::default().clamped_start_lane(), 1);
    }
}
