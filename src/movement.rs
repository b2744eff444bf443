//! Kinematic pass: advance every live entity by one tick and apply the
//! per-kind boundary rule.
//!
//! Nothing is removed or spawned here.  Entities that leave their allowed
//! region are only flagged `alive = false`; the replenisher compacts the
//! pools and requests replacements after collision resolution.

use log::trace;

use crate::entities::{Entity, GameState, Intent, Vec2};

/// Run the movement phase against the bounds recorded in `state`.
pub fn advance(state: &mut GameState) {
    let (width, height) = (state.width, state.height);
    let margin = state.config.arena.offscreen_margin;
    let speed = state.config.motion.player_speed;

    if let Some(player) = state.player.as_mut() {
        move_player(player, &state.intent, speed, width, height);
    }

    for asteroid in state.asteroids.iter_mut().filter(|e| e.alive) {
        asteroid.pos += asteroid.vel;
        if outside_expanded(asteroid.pos, width, height, margin) {
            trace!("asteroid {} left the field at {:?}", asteroid.id, asteroid.pos);
            asteroid.alive = false;
        }
    }

    for enemy in state.enemies.iter_mut().filter(|e| e.alive) {
        // Height is fixed at spawn.
        enemy.pos.x += enemy.vel.x;
        if enemy.pos.x < -margin || enemy.pos.x > width + margin {
            trace!("enemy {} left the field at x={}", enemy.id, enemy.pos.x);
            enemy.alive = false;
        }
    }

    for projectile in state.projectiles.iter_mut().filter(|e| e.alive) {
        projectile.pos.y += projectile.vel.y;
        if projectile.pos.y < 0.0 {
            projectile.alive = false;
        }
    }
}

/// Apply held intent and clamp into `[0, width] × [0, height]`.
pub fn move_player(player: &mut Entity, intent: &Intent, speed: f32, width: f32, height: f32) {
    let moved = player.pos + intent.axis() * speed;
    player.pos = moved.clamp(Vec2::ZERO, Vec2::new(width.max(0.0), height.max(0.0)));
}

/// True once `pos` is strictly outside the rectangle grown by `margin`.
pub fn outside_expanded(pos: Vec2, width: f32, height: f32, margin: f32) -> bool {
    pos.x < -margin || pos.x > width + margin || pos.y < -margin || pos.y > height + margin
}
