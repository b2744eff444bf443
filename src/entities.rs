//! All simulation entity types — pure data, no game rules.

use crate::config::GameConfig;

pub use glam::Vec2;

// ── Entity kinds ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Asteroid,
    Enemy,
    Projectile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Menu,
    Playing,
    GameOver,
}

// ── Input intent ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Which directional inputs are currently held.  Axes are independent, so
/// `up && right` moves diagonally and `left && right` cancels out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Intent {
    pub fn set(&mut self, direction: Direction, active: bool) {
        match direction {
            Direction::Up => self.up = active,
            Direction::Down => self.down = active,
            Direction::Left => self.left = active,
            Direction::Right => self.right = active,
        }
    }

    /// Unit-less displacement (-1, 0 or +1 per axis).  Screen y grows downward.
    pub fn axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.up {
            axis.y -= 1.0;
        }
        if self.down {
            axis.y += 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        if self.right {
            axis.x += 1.0;
        }
        axis
    }
}

// ── Entity record ─────────────────────────────────────────────────────────────

/// One simulated object.  Velocity is a vector for every kind; enemies simply
/// carry a zero vertical component.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Unique for the lifetime of the process; never reused.
    pub id: u64,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Visual size in simulation units.  Collision radii are derived from it
    /// per pairing, see `collision::Pairing`.
    pub size: f32,
    /// Cleared by movement or collision; the replenisher drops dead records.
    pub alive: bool,
}

impl Entity {
    pub fn new(id: u64, kind: EntityKind, pos: Vec2, vel: Vec2, size: f32) -> Self {
        Entity {
            id,
            kind,
            pos,
            vel,
            size,
            alive: true,
        }
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Discrete happenings, in the order they occurred.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Started,
    Spawned { id: u64, kind: EntityKind },
    Destroyed { id: u64, kind: EntityKind },
    Scored { score: u32 },
    GameOver { score: u32 },
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation state.  Cloneable so the public update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Present only while `Playing`.
    pub player: Option<Entity>,
    /// Insertion-ordered pools; no dedup.
    pub asteroids: Vec<Entity>,
    pub enemies: Vec<Entity>,
    pub projectiles: Vec<Entity>,
    pub intent: Intent,
    pub score: u32,
    pub status: GameStatus,
    pub frame: u64,
    /// Last known screen bounds in simulation units.
    pub width: f32,
    pub height: f32,
    pub next_id: u64,
    /// Accumulated since the last `drain_events`.
    pub events: Vec<GameEvent>,
    pub config: GameConfig,
}

impl GameState {
    /// Hand out a fresh entity id.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Centre of the current bounds, where the player appears.
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn player_position(&self) -> Option<Vec2> {
        self.player.as_ref().map(|p| p.pos)
    }

    pub fn asteroid_positions(&self) -> Vec<Vec2> {
        live_positions(&self.asteroids)
    }

    pub fn enemy_positions(&self) -> Vec<Vec2> {
        live_positions(&self.enemies)
    }

    pub fn projectile_positions(&self) -> Vec<Vec2> {
        live_positions(&self.projectiles)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Hand the pending events to the presentation layer.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn live_count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Player => usize::from(self.player.is_some()),
            EntityKind::Asteroid => self.asteroids.iter().filter(|e| e.alive).count(),
            EntityKind::Enemy => self.enemies.iter().filter(|e| e.alive).count(),
            EntityKind::Projectile => self.projectiles.iter().filter(|e| e.alive).count(),
        }
    }
}

fn live_positions(pool: &[Entity]) -> Vec<Vec2> {
    pool.iter().filter(|e| e.alive).map(|e| e.pos).collect()
}
