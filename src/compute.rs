//! Game state machine and the public entry points.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG.
//!
//! Menu ──start──▶ Playing ──player collision──▶ GameOver ──retry──▶ Playing
//!
//! Calls that do not apply to the current status return an unchanged copy.

use log::{info, trace};
use rand::Rng;

use crate::collision;
use crate::config::GameConfig;
use crate::entities::{
    Direction, Entity, EntityKind, GameEvent, GameState, GameStatus, Intent, Vec2,
};
use crate::movement;
use crate::replenish;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial (menu) state for the given bounds.
pub fn init_state(config: GameConfig, width: f32, height: f32) -> GameState {
    GameState {
        player: None,
        asteroids: Vec::new(),
        enemies: Vec::new(),
        projectiles: Vec::new(),
        intent: Intent::default(),
        score: 0,
        status: GameStatus::Menu,
        frame: 0,
        width,
        height,
        next_id: 0,
        events: Vec::new(),
        config,
    }
}

// ── State transitions (pure) ────────────────────────────────────────────────

/// `Menu → Playing`.
pub fn start_game(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::Menu {
        return state.clone();
    }
    let mut next = state.clone();
    begin_run(&mut next, rng);
    info!("game started ({}x{})", next.width, next.height);
    next
}

/// `GameOver → Playing`, with score and pools reset.
pub fn reset_game(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::GameOver {
        return state.clone();
    }
    let mut next = state.clone();
    begin_run(&mut next, rng);
    info!("game restarted after game over");
    next
}

fn begin_run(state: &mut GameState, rng: &mut impl Rng) {
    state.asteroids.clear();
    state.enemies.clear();
    state.projectiles.clear();
    state.score = 0;
    state.frame = 0;
    state.intent = Intent::default();
    state.status = GameStatus::Playing;

    let id = state.allocate_id();
    let player = Entity::new(
        id,
        EntityKind::Player,
        state.spawn_point(),
        Vec2::ZERO,
        state.config.sizes.player,
    );
    state.player = Some(player);
    state.events.push(GameEvent::Started);
    state.events.push(GameEvent::Spawned { id, kind: EntityKind::Player });

    replenish::populate_initial(state, rng);
}

/// `Playing → GameOver`: flag every entity dead so compaction clears the pools.
fn end_run(state: &mut GameState) {
    state.status = GameStatus::GameOver;
    state.intent = Intent::default();

    if let Some(player) = state.player.take() {
        state.events.push(GameEvent::Destroyed { id: player.id, kind: player.kind });
    }
    for entity in state
        .asteroids
        .iter_mut()
        .chain(state.enemies.iter_mut())
        .chain(state.projectiles.iter_mut())
    {
        entity.alive = false;
    }
    state.events.push(GameEvent::GameOver { score: state.score });
    info!("game over with score {}", state.score);
}

// ── Input (pure) ────────────────────────────────────────────────────────────

/// Record whether a direction is held.  Takes effect on the next tick; ignored
/// outside `Playing`, so keys held across a menu or game-over screen start the
/// next run from rest.
pub fn set_intent(state: &GameState, direction: Direction, active: bool) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    let mut next = state.clone();
    next.intent.set(direction, active);
    next
}

/// Fire a projectile straight up from the nose of the ship — capped at
/// `projectile_cap` live projectiles.
pub fn fire_projectile(state: &GameState) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    let Some(player) = state.player.as_ref() else {
        return state.clone();
    };
    if state.live_count(EntityKind::Projectile) >= state.config.population.projectile_cap {
        return state.clone();
    }

    let pos = player.pos - Vec2::new(0.0, player.size / 2.0);
    let vel = Vec2::new(0.0, -state.config.motion.projectile_speed);

    let mut next = state.clone();
    let id = next.allocate_id();
    let size = next.config.sizes.projectile;
    next.projectiles.push(Entity::new(id, EntityKind::Projectile, pos, vel, size));
    next.events.push(GameEvent::Spawned { id, kind: EntityKind::Projectile });
    next
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame within the given bounds.
///
/// Outside `Playing` only the bounds are recorded.  Otherwise the phases run
/// in a fixed order: movement, collision, replenishment.
pub fn tick(state: &GameState, width: f32, height: f32, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.width = width;
    next.height = height;

    if next.status != GameStatus::Playing {
        return next;
    }
    next.frame += 1;
    trace!("tick {}", next.frame);

    movement::advance(&mut next);

    if collision::resolve(&mut next) {
        end_run(&mut next);
    }

    replenish::restore(&mut next, rng);

    debug_assert!(next.score >= state.score);
    debug_assert_eq!(next.player.is_some(), next.status == GameStatus::Playing);
    next
}
