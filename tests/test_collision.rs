use asteroid_shooter::collision::*;
use asteroid_shooter::compute::init_state;
use asteroid_shooter::config::{CollisionTuning, GameConfig};
use asteroid_shooter::entities::*;

use approx::assert_relative_eq;

fn entity(id: u64, kind: EntityKind, x: f32, y: f32) -> Entity {
    let size = match kind {
        EntityKind::Player => 80.0,
        EntityKind::Asteroid => 60.0,
        EntityKind::Enemy => 64.0,
        EntityKind::Projectile => 16.0,
    };
    Entity::new(id, kind, Vec2::new(x, y), Vec2::ZERO, size)
}

fn playing(player_at: Option<Vec2>) -> GameState {
    let mut s = init_state(GameConfig::default(), 800.0, 600.0);
    s.status = GameStatus::Playing;
    s.player = player_at.map(|p| entity(0, EntityKind::Player, p.x, p.y));
    s.next_id = 100;
    s
}

// ── Thresholds ────────────────────────────────────────────────────────────────

#[test]
fn thresholds_differ_per_pairing() {
    let t = CollisionTuning::default();
    let player = entity(0, EntityKind::Player, 0.0, 0.0);
    let rock = entity(1, EntityKind::Asteroid, 0.0, 0.0);
    let enemy = entity(2, EntityKind::Enemy, 0.0, 0.0);
    let shot = entity(3, EntityKind::Projectile, 0.0, 0.0);

    assert_relative_eq!(Pairing::ProjectileEnemy.threshold(&t, &shot, &enemy), 40.0);
    assert_relative_eq!(Pairing::ProjectileAsteroid.threshold(&t, &shot, &rock), 28.0);
    assert_relative_eq!(Pairing::PlayerAsteroid.threshold(&t, &player, &rock), 70.0);
    assert_relative_eq!(Pairing::PlayerEnemy.threshold(&t, &player, &enemy), 64.0);
}

#[test]
fn contact_requires_strictly_less_than_threshold() {
    let t = CollisionTuning::default();
    let player = entity(0, EntityKind::Player, 0.0, 0.0);
    let touching = entity(1, EntityKind::Asteroid, 69.5, 0.0);
    let grazing = entity(2, EntityKind::Asteroid, 70.0, 0.0);

    assert!(collides(Pairing::PlayerAsteroid, &t, &player, &touching));
    assert!(!collides(Pairing::PlayerAsteroid, &t, &player, &grazing));
}

#[test]
fn distance_is_euclidean() {
    let t = CollisionTuning::default();
    let player = entity(0, EntityKind::Player, 0.0, 0.0);
    // 3-4-5 triangle scaled: distance 65 on the diagonal.
    let near = entity(1, EntityKind::Asteroid, 39.0, 52.0);
    let far = entity(2, EntityKind::Asteroid, 45.0, 60.0);

    assert!(collides(Pairing::PlayerAsteroid, &t, &player, &near));
    assert!(!collides(Pairing::PlayerAsteroid, &t, &player, &far));
}

// ── resolve ───────────────────────────────────────────────────────────────────

#[test]
fn resolve_flags_but_never_removes() {
    let mut s = playing(None);
    s.enemies.push(entity(1, EntityKind::Enemy, 100.0, 100.0));
    s.projectiles.push(entity(2, EntityKind::Projectile, 100.0, 100.0));

    assert!(!resolve(&mut s));
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.projectiles.len(), 1);
    assert!(!s.enemies[0].alive);
    assert!(!s.projectiles[0].alive);
    assert_eq!(s.score, 1);
}

#[test]
fn spent_projectile_cannot_hit_again() {
    let mut s = playing(None);
    s.enemies.push(entity(1, EntityKind::Enemy, 100.0, 100.0));
    s.enemies.push(entity(2, EntityKind::Enemy, 100.0, 100.0));
    s.asteroids.push(entity(3, EntityKind::Asteroid, 100.0, 100.0));
    s.projectiles.push(entity(4, EntityKind::Projectile, 100.0, 100.0));

    resolve(&mut s);
    assert_eq!(s.score, 1);
    assert!(!s.enemies[0].alive);
    assert!(s.enemies[1].alive);
    assert!(s.asteroids[0].alive);
}

#[test]
fn dead_enemy_is_not_a_target() {
    let mut s = playing(None);
    let mut ghost = entity(1, EntityKind::Enemy, 100.0, 100.0);
    ghost.alive = false;
    s.enemies.push(ghost);
    s.projectiles.push(entity(2, EntityKind::Projectile, 100.0, 100.0));

    resolve(&mut s);
    assert_eq!(s.score, 0);
    assert!(s.projectiles[0].alive);
}

#[test]
fn two_projectiles_two_enemies_score_two() {
    let mut s = playing(None);
    s.enemies.push(entity(1, EntityKind::Enemy, 100.0, 100.0));
    s.enemies.push(entity(2, EntityKind::Enemy, 300.0, 100.0));
    s.projectiles.push(entity(3, EntityKind::Projectile, 100.0, 100.0));
    s.projectiles.push(entity(4, EntityKind::Projectile, 300.0, 100.0));

    resolve(&mut s);
    assert_eq!(s.score, 2);
    assert_eq!(
        s.events,
        vec![GameEvent::Scored { score: 1 }, GameEvent::Scored { score: 2 }]
    );
}

#[test]
fn asteroid_hit_leaves_score_alone() {
    let mut s = playing(None);
    s.asteroids.push(entity(1, EntityKind::Asteroid, 100.0, 100.0));
    s.projectiles.push(entity(2, EntityKind::Projectile, 110.0, 100.0));

    resolve(&mut s);
    assert_eq!(s.score, 0);
    assert!(s.asteroids[0].alive);
    assert!(!s.projectiles[0].alive);
}

#[test]
fn player_contact_is_reported() {
    let mut s = playing(Some(Vec2::new(400.0, 300.0)));
    s.enemies.push(entity(1, EntityKind::Enemy, 460.0, 300.0));
    assert!(resolve(&mut s));

    let mut s = playing(Some(Vec2::new(400.0, 300.0)));
    s.asteroids.push(entity(1, EntityKind::Asteroid, 400.0, 365.0));
    assert!(resolve(&mut s));
}

#[test]
fn player_ignores_enemy_destroyed_this_tick() {
    let mut s = playing(Some(Vec2::new(400.0, 300.0)));
    s.enemies.push(entity(1, EntityKind::Enemy, 400.0, 250.0));
    s.projectiles.push(entity(2, EntityKind::Projectile, 400.0, 250.0));
    assert!(!resolve(&mut s));
    assert_eq!(s.score, 1);
}

#[test]
fn no_player_means_no_contact() {
    let mut s = playing(None);
    s.asteroids.push(entity(1, EntityKind::Asteroid, 400.0, 300.0));
    assert!(!resolve(&mut s));
}

#[test]
fn custom_divisors_change_the_threshold() {
    let mut s = playing(Some(Vec2::new(400.0, 300.0)));
    s.config.collision.player_asteroid.first = 4.0;
    s.config.collision.player_asteroid.second = 4.0;
    // Threshold is now 20 + 15 = 35.
    s.asteroids.push(entity(1, EntityKind::Asteroid, 440.0, 300.0));
    assert!(!resolve(&mut s));
}
