use asteroid_shooter::compute::init_state;
use asteroid_shooter::config::GameConfig;
use asteroid_shooter::entities::*;

fn rock(id: u64, x: f32, alive: bool) -> Entity {
    let mut e = Entity::new(id, EntityKind::Asteroid, Vec2::new(x, 0.0), Vec2::ZERO, 60.0);
    e.alive = alive;
    e
}

#[test]
fn intent_axis_combines_directions() {
    let mut intent = Intent::default();
    assert_eq!(intent.axis(), Vec2::ZERO);

    intent.set(Direction::Up, true);
    intent.set(Direction::Right, true);
    assert_eq!(intent.axis(), Vec2::new(1.0, -1.0));

    intent.set(Direction::Left, true);
    assert_eq!(intent.axis(), Vec2::new(0.0, -1.0));

    intent.set(Direction::Up, false);
    intent.set(Direction::Down, true);
    assert_eq!(intent.axis(), Vec2::new(0.0, 1.0));
}

#[test]
fn new_entities_are_alive() {
    let e = Entity::new(3, EntityKind::Enemy, Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0), 64.0);
    assert!(e.alive);
    assert_eq!(e.id, 3);
    assert_eq!(e.kind, EntityKind::Enemy);
}

#[test]
fn ids_are_monotonic() {
    let mut s = init_state(GameConfig::default(), 800.0, 600.0);
    let a = s.allocate_id();
    let b = s.allocate_id();
    assert!(b > a);
    assert_eq!(s.next_id, b + 1);
}

#[test]
fn snapshots_skip_dead_entities() {
    let mut s = init_state(GameConfig::default(), 800.0, 600.0);
    s.asteroids.push(rock(1, 10.0, true));
    s.asteroids.push(rock(2, 20.0, false));
    s.asteroids.push(rock(3, 30.0, true));

    assert_eq!(s.asteroid_positions(), vec![Vec2::new(10.0, 0.0), Vec2::new(30.0, 0.0)]);
    assert_eq!(s.live_count(EntityKind::Asteroid), 2);
    assert_eq!(s.live_count(EntityKind::Player), 0);
    assert!(s.enemy_positions().is_empty());
    assert!(s.projectile_positions().is_empty());
    assert_eq!(s.player_position(), None);
}

#[test]
fn drain_events_empties_the_queue() {
    let mut s = init_state(GameConfig::default(), 800.0, 600.0);
    s.events.push(GameEvent::Started);
    s.events.push(GameEvent::Scored { score: 1 });

    let drained = s.drain_events();
    assert_eq!(drained.len(), 2);
    assert!(s.events().is_empty());
}

#[test]
fn spawn_point_is_screen_centre() {
    let s = init_state(GameConfig::default(), 640.0, 480.0);
    assert_eq!(s.spawn_point(), Vec2::new(320.0, 240.0));
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(GameConfig::default(), 800.0, 600.0);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.score = 999;
    cloned.asteroids.push(rock(1, 5.0, true));
    cloned.intent.up = true;

    assert_eq!(original.score, 0);
    assert!(original.asteroids.is_empty());
    assert!(!original.intent.up);
}
