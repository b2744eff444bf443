//! Collision engine.
//!
//! Runs once per tick on post-move positions.  Destruction only flips the
//! `alive` flag, and every test checks that flag first, so an entity removed
//! earlier in the pass can never satisfy a second destructive condition in
//! the same tick.  `Destroyed` events are emitted when the replenisher
//! compacts the pools.

use log::debug;

use crate::config::{CollisionTuning, Divisors};
use crate::entities::{Entity, GameEvent, GameState};

/// The four interacting pairs.  Each has its own radius divisors, so the
/// effective threshold for, say, an asteroid differs between projectile hits
/// and player contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pairing {
    ProjectileEnemy,
    ProjectileAsteroid,
    PlayerAsteroid,
    PlayerEnemy,
}

impl Pairing {
    pub fn divisors(self, tuning: &CollisionTuning) -> Divisors {
        match self {
            Pairing::ProjectileEnemy => tuning.projectile_enemy,
            Pairing::ProjectileAsteroid => tuning.projectile_asteroid,
            Pairing::PlayerAsteroid => tuning.player_asteroid,
            Pairing::PlayerEnemy => tuning.player_enemy,
        }
    }

    /// Centre distance below which `first` and `second` touch.
    pub fn threshold(self, tuning: &CollisionTuning, first: &Entity, second: &Entity) -> f32 {
        let d = self.divisors(tuning);
        first.size / d.first + second.size / d.second
    }
}

/// Plain Euclidean test against the pairing's threshold.
pub fn collides(
    pairing: Pairing,
    tuning: &CollisionTuning,
    first: &Entity,
    second: &Entity,
) -> bool {
    first.pos.distance(second.pos) < pairing.threshold(tuning, first, second)
}

/// Resolve every collision of this tick.
///
/// Projectiles are tested against enemies before asteroids.  An enemy hit
/// scores one point and kills both entities; an asteroid hit kills only the
/// projectile.  Returns `true` when the player touched an asteroid or enemy;
/// the caller owns the resulting state transition.
pub fn resolve(state: &mut GameState) -> bool {
    let GameState {
        player,
        asteroids,
        enemies,
        projectiles,
        score,
        events,
        config,
        ..
    } = state;
    let tuning = &config.collision;

    // ── Projectiles ↔ enemies, then ↔ asteroids ──────────────────────────────
    for projectile in projectiles.iter_mut() {
        for enemy in enemies.iter_mut() {
            if !projectile.alive {
                break;
            }
            if enemy.alive && collides(Pairing::ProjectileEnemy, tuning, projectile, enemy) {
                enemy.alive = false;
                projectile.alive = false;
                *score += 1;
                debug!(
                    "projectile {} destroyed enemy {}, score {}",
                    projectile.id, enemy.id, score
                );
                events.push(GameEvent::Scored { score: *score });
            }
        }

        for asteroid in asteroids.iter() {
            if !projectile.alive {
                break;
            }
            if asteroid.alive
                && collides(Pairing::ProjectileAsteroid, tuning, projectile, asteroid)
            {
                // Asteroids absorb the shot and survive.
                projectile.alive = false;
                debug!("projectile {} absorbed by asteroid {}", projectile.id, asteroid.id);
            }
        }
    }

    // ── Player ↔ hazards ─────────────────────────────────────────────────────
    let Some(player) = player.as_ref() else {
        return false;
    };

    let hit_enemy = enemies
        .iter()
        .filter(|e| e.alive)
        .find(|e| collides(Pairing::PlayerEnemy, tuning, player, e));
    if let Some(enemy) = hit_enemy {
        debug!("player hit by enemy {}", enemy.id);
        return true;
    }

    let hit_asteroid = asteroids
        .iter()
        .filter(|e| e.alive)
        .find(|e| collides(Pairing::PlayerAsteroid, tuning, player, e));
    if let Some(asteroid) = hit_asteroid {
        debug!("player hit by asteroid {}", asteroid.id);
        return true;
    }

    false
}
