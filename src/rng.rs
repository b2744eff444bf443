//! Random spawn positions and velocities.
//!
//! Every function takes the RNG as a parameter so callers control
//! determinism (tests use a seeded `StdRng`).  Uniform samples are drawn as
//! `gen::<f32>() * extent` rather than `gen_range`, which keeps zero-sized
//! bounds from panicking.

use std::f32::consts::TAU;

use rand::Rng;

use crate::entities::Vec2;

/// Rejection-sampling attempts before falling back to a guaranteed-clear point.
const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// Side of the screen an enemy enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyOrigin {
    Left,
    Right,
}

/// Direction uniform in `[0, 2π)`, magnitude uniform in `[min_speed, max_speed)`.
pub fn random_velocity(rng: &mut impl Rng, min_speed: f32, max_speed: f32) -> Vec2 {
    let angle = rng.gen::<f32>() * TAU;
    let speed = min_speed + rng.gen::<f32>() * (max_speed - min_speed);
    Vec2::from_angle(angle) * speed
}

/// A point on one of the four sides, `margin` units outside the visible
/// rectangle.  The side is chosen uniformly, then the coordinate along it.
pub fn random_offscreen_position(
    rng: &mut impl Rng,
    width: f32,
    height: f32,
    margin: f32,
) -> Vec2 {
    let along_x = rng.gen::<f32>() * width;
    let along_y = rng.gen::<f32>() * height;
    match rng.gen_range(0..4) {
        0 => Vec2::new(along_x, -margin),
        1 => Vec2::new(along_x, height + margin),
        2 => Vec2::new(-margin, along_y),
        _ => Vec2::new(width + margin, along_y),
    }
}

/// A point inside the screen at least `clearance` units from `avoid`.
///
/// Falls back to a point exactly `clearance` away in a random direction when
/// the screen is too small to find one by sampling.
pub fn random_position_clear_of(
    rng: &mut impl Rng,
    width: f32,
    height: f32,
    avoid: Vec2,
    clearance: f32,
) -> Vec2 {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height);
        if candidate.distance(avoid) >= clearance {
            return candidate;
        }
    }
    avoid + Vec2::from_angle(rng.gen::<f32>() * TAU) * clearance
}

pub fn random_enemy_origin(rng: &mut impl Rng) -> EnemyOrigin {
    if rng.gen_bool(0.5) {
        EnemyOrigin::Left
    } else {
        EnemyOrigin::Right
    }
}

/// Spawn position and velocity for an enemy entering from `origin`.
///
/// Enemies start half a margin outside the chosen edge, at a height uniform in
/// `[0, band · height)`, and travel horizontally toward the opposite edge.
pub fn enemy_spawn(
    rng: &mut impl Rng,
    origin: EnemyOrigin,
    width: f32,
    height: f32,
    margin: f32,
    band: f32,
    speed: f32,
) -> (Vec2, Vec2) {
    let y = rng.gen::<f32>() * band * height;
    match origin {
        EnemyOrigin::Left => (Vec2::new(-margin / 2.0, y), Vec2::new(speed, 0.0)),
        EnemyOrigin::Right => (Vec2::new(width + margin / 2.0, y), Vec2::new(-speed, 0.0)),
    }
}
