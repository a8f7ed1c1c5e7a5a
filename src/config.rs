//! Runtime game configuration.
//!
//! [`GameConfig`] mirrors every tunable constant below. The host may pass a JSON
//! object to `start_game_with_config`; missing keys fall back to the defaults, so
//! a minimal object can override just the values you care about.
//!
//! ```json
//! { "player_speed": 7.5, "burst_count": 30 }
//! ```

use serde::Deserialize;

use crate::error::GameError;

// ── Player ──────────────────────────────────────────────────────────────────
pub const PLAYER_RADIUS: f64 = 20.0;
pub const PLAYER_SPEED: f64 = 5.0;
pub const PLAYER_COLOR: &str = "#FF6F61";

// ── Target ──────────────────────────────────────────────────────────────────
pub const TARGET_RADIUS: f64 = 10.0;
pub const TARGET_COLOR: &str = "#FFD700";

// ── Particles ───────────────────────────────────────────────────────────────
pub const BURST_COUNT: usize = 20;
pub const PARTICLE_DECAY: f64 = 0.02;
/// Headroom for four overlapping bursts at full lifetime.
pub const MAX_PARTICLES: usize = BURST_COUNT * 50 * 4;

// ── Encouragement text ──────────────────────────────────────────────────────
pub const TEXT_DECAY: f64 = 0.01;

// ── Host ────────────────────────────────────────────────────────────────────
pub const BGM_VOLUME: f64 = 0.4;
pub const SCORE_VOLUME: f64 = 0.3;
pub const VIEWPORT_FRACTION: f64 = 0.8;
pub const CANVAS_ID: &str = "gameCanvas";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub player_radius: f64,
    pub player_speed: f64,
    pub player_color: String,

    pub target_radius: f64,
    pub target_color: String,

    pub burst_count: usize,
    pub particle_decay: f64,
    pub max_particles: usize,

    pub text_decay: f64,
    pub encouragements: Vec<String>,

    pub bgm_volume: f64,
    pub score_volume: f64,
    pub viewport_fraction: f64,
    pub canvas_id: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            player_color: PLAYER_COLOR.to_string(),
            target_radius: TARGET_RADIUS,
            target_color: TARGET_COLOR.to_string(),
            burst_count: BURST_COUNT,
            particle_decay: PARTICLE_DECAY,
            max_particles: MAX_PARTICLES,
            text_decay: TEXT_DECAY,
            encouragements: crate::ENCOURAGEMENTS.iter().map(|s| s.to_string()).collect(),
            bgm_volume: BGM_VOLUME,
            score_volume: SCORE_VOLUME,
            viewport_fraction: VIEWPORT_FRACTION,
            canvas_id: CANVAS_ID.to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON object and validate the result.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let cfg: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would break the tick invariants (e.g. a zero decay
    /// would keep particles alive forever).
    pub fn validate(&self) -> Result<(), GameError> {
        positive("player_radius", self.player_radius)?;
        positive("player_speed", self.player_speed)?;
        positive("target_radius", self.target_radius)?;
        positive("particle_decay", self.particle_decay)?;
        positive("text_decay", self.text_decay)?;
        unit("bgm_volume", self.bgm_volume)?;
        unit("score_volume", self.score_volume)?;
        if !(self.viewport_fraction > 0.0 && self.viewport_fraction <= 1.0) {
            return Err(GameError::InvalidConfig {
                field: "viewport_fraction",
                reason: "must be in (0, 1]",
            });
        }
        if self.encouragements.is_empty() {
            return Err(GameError::InvalidConfig {
                field: "encouragements",
                reason: "must not be empty",
            });
        }
        if self.max_particles < self.burst_count {
            return Err(GameError::InvalidConfig {
                field: "max_particles",
                reason: "must hold at least one burst",
            });
        }
        Ok(())
    }

    /// Upper bound on how many ticks a particle stays alive (one extra tick
    /// absorbs float rounding in the repeated subtraction).
    pub fn particle_lifetime_ticks(&self) -> usize {
        (1.0 / self.particle_decay).ceil() as usize + 1
    }
}

fn positive(field: &'static str, v: f64) -> Result<(), GameError> {
    // NaN fails this check too
    if v > 0.0 && v.is_finite() {
        Ok(())
    } else {
        Err(GameError::InvalidConfig { field, reason: "must be a positive number" })
    }
}

fn unit(field: &'static str, v: f64) -> Result<(), GameError> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(GameError::InvalidConfig { field, reason: "must be in [0, 1]" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.burst_count, 20);
        assert_eq!(cfg.particle_lifetime_ticks(), 51);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GameConfig::from_json(r#"{ "player_speed": 7.5 }"#).unwrap();
        assert_eq!(cfg.player_speed, 7.5);
        assert_eq!(cfg.player_radius, PLAYER_RADIUS);
        assert_eq!(cfg.canvas_id, CANVAS_ID);
    }

    #[test]
    fn zero_decay_is_rejected() {
        let err = GameConfig::from_json(r#"{ "particle_decay": 0.0 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig { field: "particle_decay", .. }));
    }

    #[test]
    fn empty_encouragements_rejected() {
        let err = GameConfig::from_json(r#"{ "encouragements": [] }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig { field: "encouragements", .. }));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }
}
