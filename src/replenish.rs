//! Population replenisher.
//!
//! Drops records flagged dead by movement or collision, then restores the
//! asteroid and enemy targets.  This is the only phase that structurally
//! changes the pools during a tick.

use log::debug;
use rand::Rng;

use crate::entities::{Entity, EntityKind, GameEvent, GameState, GameStatus, Vec2};
use crate::rng::{
    enemy_spawn, random_enemy_origin, random_offscreen_position, random_position_clear_of,
    random_velocity,
};

/// How many records of each kind the last compaction dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Removed {
    pub asteroids: usize,
    pub enemies: usize,
    pub projectiles: usize,
}

// ── Compaction ────────────────────────────────────────────────────────────────

/// Physically remove dead records, emitting a `Destroyed` event for each.
pub fn compact(state: &mut GameState) -> Removed {
    let GameState {
        asteroids,
        enemies,
        projectiles,
        events,
        ..
    } = state;

    Removed {
        asteroids: drop_dead(asteroids, events),
        enemies: drop_dead(enemies, events),
        projectiles: drop_dead(projectiles, events),
    }
}

fn drop_dead(pool: &mut Vec<Entity>, events: &mut Vec<GameEvent>) -> usize {
    let before = pool.len();
    pool.retain(|e| {
        if !e.alive {
            events.push(GameEvent::Destroyed { id: e.id, kind: e.kind });
        }
        e.alive
    });
    before - pool.len()
}

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Spawn one asteroid just outside a random screen edge.
/// No-op (returns `None`) once the asteroid cap is reached.
pub fn spawn_asteroid(state: &mut GameState, rng: &mut impl Rng) -> Option<u64> {
    let pos = random_offscreen_position(
        rng,
        state.width,
        state.height,
        state.config.arena.offscreen_margin,
    );
    push_asteroid(state, pos, rng)
}

/// Spawn one asteroid inside the screen, clear of the player spawn point.
/// Used only for the opening population.
pub fn spawn_asteroid_clear_of_spawn(state: &mut GameState, rng: &mut impl Rng) -> Option<u64> {
    let pos = random_position_clear_of(
        rng,
        state.width,
        state.height,
        state.spawn_point(),
        state.config.arena.spawn_clearance,
    );
    push_asteroid(state, pos, rng)
}

fn push_asteroid(state: &mut GameState, pos: Vec2, rng: &mut impl Rng) -> Option<u64> {
    if state.live_count(EntityKind::Asteroid) >= state.config.population.asteroid_cap {
        return None;
    }
    let motion = &state.config.motion;
    let vel = random_velocity(rng, motion.asteroid_speed_min, motion.asteroid_speed_max);
    let size = state.config.sizes.asteroid;
    let id = state.allocate_id();
    state.asteroids.push(Entity::new(id, EntityKind::Asteroid, pos, vel, size));
    state.events.push(GameEvent::Spawned { id, kind: EntityKind::Asteroid });
    debug!("spawned asteroid {id} at {pos:?}");
    Some(id)
}

/// Spawn one enemy from a random side, travelling toward the other.
pub fn spawn_enemy(state: &mut GameState, rng: &mut impl Rng) -> u64 {
    let origin = random_enemy_origin(rng);
    let (pos, vel) = enemy_spawn(
        rng,
        origin,
        state.width,
        state.height,
        state.config.arena.offscreen_margin,
        state.config.arena.enemy_band,
        state.config.motion.enemy_speed,
    );
    let size = state.config.sizes.enemy;
    let id = state.allocate_id();
    state.enemies.push(Entity::new(id, EntityKind::Enemy, pos, vel, size));
    state.events.push(GameEvent::Spawned { id, kind: EntityKind::Enemy });
    debug!("spawned enemy {id} from {origin:?}");
    id
}

// ── Phases ────────────────────────────────────────────────────────────────────

/// Opening population for a new run: asteroids placed on screen but away from
/// the player spawn, enemies entering from the sides.
pub fn populate_initial(state: &mut GameState, rng: &mut impl Rng) {
    let population = state.config.population.clone();
    for _ in 0..population.asteroid_target {
        if spawn_asteroid_clear_of_spawn(state, rng).is_none() {
            break;
        }
    }
    for _ in 0..population.enemy_target {
        spawn_enemy(state, rng);
    }
}

/// Per-tick replenishment: compact, then spawn one asteroid per removed
/// asteroid (capped), top asteroids up to target, and put enemies back to
/// their exact target count.
pub fn restore(state: &mut GameState, rng: &mut impl Rng) -> Removed {
    let removed = compact(state);
    if state.status != GameStatus::Playing {
        return removed;
    }

    let population = state.config.population.clone();

    for _ in 0..removed.asteroids {
        if spawn_asteroid(state, rng).is_none() {
            break;
        }
    }
    while state.live_count(EntityKind::Asteroid) < population.asteroid_target {
        if spawn_asteroid(state, rng).is_none() {
            break;
        }
    }
    while state.live_count(EntityKind::Enemy) < population.enemy_target {
        spawn_enemy(state, rng);
    }

    debug_assert!(state.asteroids.len() <= population.asteroid_cap);
    debug_assert_eq!(state.enemies.len(), population.enemy_target);
    debug_assert!(state.projectiles.len() <= population.projectile_cap);

    removed
}
