//! Tunable constants, loadable from a TOML file.
//!
//! Every section falls back to its defaults field by field, so a file only
//! needs to name the values it overrides.  `GameConfig::default()` is the
//! reference tuning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ── Sections ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Population {
    /// Asteroid count the replenisher tops up to.
    pub asteroid_target: usize,
    /// Asteroid count that is never exceeded.
    pub asteroid_cap: usize,
    /// Enemy count, held exactly after every tick.
    pub enemy_target: usize,
    /// Maximum concurrent projectiles; enforced when firing.
    pub projectile_cap: usize,
}

impl Default for Population {
    fn default() -> Self {
        Population {
            asteroid_target: 15,
            asteroid_cap: 25,
            enemy_target: 3,
            projectile_cap: 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Motion {
    /// Player displacement per tick along each active axis.
    pub player_speed: f32,
    /// Upward projectile displacement per tick.
    pub projectile_speed: f32,
    /// Horizontal enemy displacement per tick.
    pub enemy_speed: f32,
    /// Asteroid speed is drawn uniformly from `[min, max)`.
    pub asteroid_speed_min: f32,
    pub asteroid_speed_max: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Motion {
            player_speed: 3.5,
            projectile_speed: 10.0,
            enemy_speed: 2.0,
            asteroid_speed_min: 1.0,
            asteroid_speed_max: 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arena {
    /// Distance outside the visible rectangle used for spawns and despawns.
    pub offscreen_margin: f32,
    /// Minimum distance between the player spawn and any initial asteroid.
    pub spawn_clearance: f32,
    /// Enemies spawn in the top `enemy_band * height` of the screen.
    pub enemy_band: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Arena {
            offscreen_margin: 50.0,
            spawn_clearance: 100.0,
            enemy_band: 0.25,
        }
    }
}

/// Visual size of each kind, in simulation units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sizes {
    pub player: f32,
    pub asteroid: f32,
    pub enemy: f32,
    pub projectile: f32,
}

impl Default for Sizes {
    fn default() -> Self {
        Sizes {
            player: 80.0,
            asteroid: 60.0,
            enemy: 64.0,
            projectile: 16.0,
        }
    }
}

/// Radius divisors for one collision pairing: `radius = size / divisor`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Divisors {
    /// Applied to the first-named entity of the pairing.
    pub first: f32,
    /// Applied to the second-named entity of the pairing.
    pub second: f32,
}

impl Divisors {
    pub const fn new(first: f32, second: f32) -> Self {
        Divisors { first, second }
    }

    /// Fill in whichever half the file left out from `reference`.
    fn merged(reference: Divisors, over: DivisorsOverride) -> Self {
        Divisors {
            first: over.first.unwrap_or(reference.first),
            second: over.second.unwrap_or(reference.second),
        }
    }
}

/// One pairing as written in TOML: either half may be omitted.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
struct DivisorsOverride {
    first: Option<f32>,
    second: Option<f32>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
struct CollisionOverrides {
    projectile_enemy: DivisorsOverride,
    projectile_asteroid: DivisorsOverride,
    player_asteroid: DivisorsOverride,
    player_enemy: DivisorsOverride,
}

/// Per-pairing divisors.  The same asteroid can be a
/// smaller target for projectiles than it is a hazard for the player.
///
/// Omitted pairings, or omitted halves of a pairing, keep that pairing's
/// reference value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "CollisionOverrides")]
pub struct CollisionTuning {
    pub projectile_enemy: Divisors,
    pub projectile_asteroid: Divisors,
    pub player_asteroid: Divisors,
    pub player_enemy: Divisors,
}

impl Default for CollisionTuning {
    fn default() -> Self {
        CollisionTuning {
            projectile_enemy: Divisors::new(2.0, 2.0),
            projectile_asteroid: Divisors::new(2.0, 3.0),
            // 80/2 + 60/2 = 70 units between centres.
            player_asteroid: Divisors::new(2.0, 2.0),
            player_enemy: Divisors::new(2.5, 2.0),
        }
    }
}

impl From<CollisionOverrides> for CollisionTuning {
    fn from(over: CollisionOverrides) -> Self {
        let reference = CollisionTuning::default();
        CollisionTuning {
            projectile_enemy: Divisors::merged(reference.projectile_enemy, over.projectile_enemy),
            projectile_asteroid: Divisors::merged(
                reference.projectile_asteroid,
                over.projectile_asteroid,
            ),
            player_asteroid: Divisors::merged(reference.player_asteroid, over.player_asteroid),
            player_enemy: Divisors::merged(reference.player_enemy, over.player_enemy),
        }
    }
}

// ── Root ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub population: Population,
    pub motion: Motion,
    pub arena: Arena,
    pub sizes: Sizes,
    pub collision: CollisionTuning,
}

impl GameConfig {
    /// Read and validate a TOML configuration file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the population or collision invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.population;
        if p.asteroid_target > p.asteroid_cap {
            return Err(ConfigError::Invalid(format!(
                "asteroid_target ({}) exceeds asteroid_cap ({})",
                p.asteroid_target, p.asteroid_cap
            )));
        }

        let m = &self.motion;
        if !(m.asteroid_speed_min < m.asteroid_speed_max) {
            return Err(ConfigError::Invalid(format!(
                "asteroid speed band [{}, {}) is empty",
                m.asteroid_speed_min, m.asteroid_speed_max
            )));
        }
        if m.projectile_speed <= 0.0 {
            return Err(ConfigError::Invalid("projectile_speed must be positive".to_string()));
        }

        if !(0.0..=1.0).contains(&self.arena.enemy_band) || self.arena.enemy_band == 0.0 {
            return Err(ConfigError::Invalid(format!(
                "enemy_band ({}) must lie in (0, 1]",
                self.arena.enemy_band
            )));
        }
        if self.arena.offscreen_margin < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "offscreen_margin ({}) must not be negative",
                self.arena.offscreen_margin
            )));
        }
        if self.arena.spawn_clearance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "spawn_clearance ({}) must not be negative",
                self.arena.spawn_clearance
            )));
        }

        let z = &self.sizes;
        let sizes = [
            ("player", z.player),
            ("asteroid", z.asteroid),
            ("enemy", z.enemy),
            ("projectile", z.projectile),
        ];
        for (name, size) in sizes {
            if size <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} size ({size}) must be positive")));
            }
        }

        let c = &self.collision;
        let pairings = [
            ("projectile_enemy", c.projectile_enemy),
            ("projectile_asteroid", c.projectile_asteroid),
            ("player_asteroid", c.player_asteroid),
            ("player_enemy", c.player_enemy),
        ];
        for (name, d) in pairings {
            if d.first <= 0.0 || d.second <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} divisors must be positive")));
            }
        }

        Ok(())
    }
}
