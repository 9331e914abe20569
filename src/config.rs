//! Tunable game constants.
//!
//! Every field has a default matching the classic game feel.  A JSON file
//! may override any subset of them; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entities::{CloudMode, WeaponMode};
use crate::error::{GameError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Milliseconds per tick (16 ≈ 60 ticks/s).
    pub frame_ms: u64,
    pub mode: WeaponMode,
    pub cloud_mode: CloudMode,
    /// Ring the terminal bell on each shot.
    pub sound: bool,
    pub spawn: SpawnConfig,
    pub motion: MotionConfig,
    pub particles: ParticleConfig,
    pub weapon: WeaponConfig,
    pub display: DisplayConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            frame_ms: 16,
            mode: WeaponMode::Aimable,
            cloud_mode: CloudMode::Random,
            sound: true,
            spawn: SpawnConfig::default(),
            motion: MotionConfig::default(),
            particles: ParticleConfig::default(),
            weapon: WeaponConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Per-tick probability of a new bird.
    pub bird_chance: f64,
    /// Per-tick probability of a new cloud (random cloud mode only).
    pub cloud_chance: f64,
    pub max_clouds: usize,
    /// Ticks after the start on which a bird is always spawned.  The first
    /// tick of a game is 1.
    pub early_spawn_ticks: Vec<u64>,
    pub left_edge_x: f32,
    pub right_edge_x: f32,
    /// Top of the vertical band birds and clouds appear in.
    pub band_top: f32,
    pub band_height: f32,
    pub min_speed_x: f32,
    /// Added on top of `min_speed_x`, scaled by a uniform draw.
    pub speed_x_spread: f32,
    /// Vertical speed is drawn from `[-spread/2, spread/2)`.
    pub speed_y_spread: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        SpawnConfig {
            bird_chance: 0.015,
            cloud_chance: 0.01,
            max_clouds: 12,
            early_spawn_ticks: vec![30, 90],
            left_edge_x: -5.0,
            right_edge_x: 105.0,
            band_top: 15.0,
            band_height: 50.0,
            min_speed_x: 0.5,
            speed_x_spread: 1.5,
            speed_y_spread: 0.8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Radians added to a bird's wing phase each tick.
    pub wing_step: f32,
    pub bird_min_x: f32,
    pub bird_max_x: f32,
    pub bullet_min_y: f32,
    pub bullet_min_x: f32,
    pub bullet_max_x: f32,
    pub cloud_wrap_at: f32,
    pub cloud_wrap_to: f32,
    /// Added to a particle's vertical velocity each tick.
    pub gravity: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            wing_step: 0.3,
            bird_min_x: -10.0,
            bird_max_x: 110.0,
            bullet_min_y: -5.0,
            bullet_min_x: -5.0,
            bullet_max_x: 105.0,
            cloud_wrap_at: 110.0,
            cloud_wrap_to: -20.0,
            gravity: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub burst_count: usize,
    /// Each velocity component is drawn from `[-spread/2, spread/2)`.
    pub spread: f32,
    pub life: i32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        ParticleConfig { burst_count: 8, spread: 4.0, life: 30 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub origin_x: f32,
    pub origin_y: f32,
    pub bullet_speed: f32,
    /// Bullet-to-bird-centre distance below which a hit registers.
    pub hit_radius: f32,
    pub min_angle: f32,
    pub max_angle: f32,
    /// Degrees per aim key press.
    pub key_step: f32,
    /// Swipes only aim when they start below this y.
    pub swipe_region_y: f32,
    /// Horizontal drag in pixels needed before the gun turns.
    pub swipe_threshold_px: f32,
    /// Degrees per pixel of horizontal drag.
    pub swipe_sensitivity: f32,
    pub muzzle_flash_ticks: u32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        WeaponConfig {
            origin_x: 50.0,
            origin_y: 85.0,
            bullet_speed: 3.0,
            hit_radius: 3.0,
            min_angle: -45.0,
            max_angle: 45.0,
            key_step: 5.0,
            swipe_region_y: 70.0,
            swipe_threshold_px: 10.0,
            swipe_sensitivity: 0.3,
            muzzle_flash_ticks: 6,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Approximate pixel size of one terminal cell.
    pub cell_width_px: f32,
    pub cell_height_px: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { cell_width_px: 8.0, cell_height_px: 16.0 }
    }
}

impl GameConfig {
    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<GameConfig> {
        let text = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&text).map_err(|source| GameError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` when given, otherwise fall back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<GameConfig> {
        match path {
            Some(p) => GameConfig::load(p),
            None => Ok(GameConfig::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        fn check(ok: bool, msg: &str) -> Result<()> {
            if ok {
                Ok(())
            } else {
                Err(GameError::InvalidConfig(msg.to_string()))
            }
        }

        check(self.frame_ms > 0, "frame_ms must be positive")?;
        check(
            !self.spawn.early_spawn_ticks.contains(&0),
            "spawn.early_spawn_ticks are counted from 1",
        )?;
        check(
            (0.0..=1.0).contains(&self.spawn.bird_chance),
            "spawn.bird_chance must be within [0, 1]",
        )?;
        check(
            (0.0..=1.0).contains(&self.spawn.cloud_chance),
            "spawn.cloud_chance must be within [0, 1]",
        )?;
        check(self.spawn.min_speed_x > 0.0, "spawn.min_speed_x must be positive")?;
        check(self.spawn.speed_x_spread >= 0.0, "spawn.speed_x_spread must not be negative")?;
        check(self.spawn.band_height >= 0.0, "spawn.band_height must not be negative")?;
        check(self.particles.life > 0, "particles.life must be positive")?;
        check(self.particles.spread >= 0.0, "particles.spread must not be negative")?;
        check(self.weapon.bullet_speed > 0.0, "weapon.bullet_speed must be positive")?;
        check(self.weapon.hit_radius > 0.0, "weapon.hit_radius must be positive")?;
        check(
            self.weapon.min_angle <= 0.0 && 0.0 <= self.weapon.max_angle,
            "weapon angle range must contain 0 (the gun starts upright)",
        )?;
        check(
            self.display.cell_width_px > 0.0 && self.display.cell_height_px > 0.0,
            "display cell size must be positive",
        )?;
        Ok(())
    }
}
