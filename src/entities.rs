/// All game entity types and their per-kind update rules.
///
/// Positions and velocities are integer pixels on the logical surface
/// described by `GameConfig`.  Update rules are pure: they take an entity by
/// reference and return its next state.

use std::ops::Range;

use rand::Rng;

use crate::config::GameConfig;

// ── Enemy randomisation ranges ───────────────────────────────────────────────

pub const ENEMY_SPAWN_Y: Range<i32> = -100..-40;
pub const ENEMY_SPEED_X: Range<i32> = -3..3;
pub const ENEMY_SPEED_Y: Range<i32> = 1..4;

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box, used for both drawing and overlap tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub const fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Closed-rectangle intersection: boxes that share an edge overlap.
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }
}

// ── Input snapshot ───────────────────────────────────────────────────────────

/// Direction keys held during the current tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub rect: Rect,
    pub vx: i32,
    pub vy: i32,
}

impl Player {
    /// Horizontally centred, resting just above the bottom edge.
    pub fn spawn(cfg: &GameConfig) -> Self {
        let x = cfg.screen_width / 2 - cfg.player_width / 2;
        let y = cfg.screen_height - cfg.player_bottom_margin - cfg.player_height;
        Self {
            rect: Rect::new(x, y, cfg.player_width, cfg.player_height),
            vx: 0,
            vy: 0,
        }
    }

    /// Velocity comes straight from the held keys; right wins over left and
    /// down wins over up.
    pub fn steer(&self, controls: &Controls, speed: i32) -> Self {
        let mut vx = 0;
        let mut vy = 0;
        if controls.left {
            vx = -speed;
        }
        if controls.right {
            vx = speed;
        }
        if controls.up {
            vy = -speed;
        }
        if controls.down {
            vy = speed;
        }
        Self { vx, vy, ..*self }
    }

    /// Integrate, then clamp into the screen.
    pub fn update(&self, cfg: &GameConfig) -> Self {
        let moved = self.rect.translated(self.vx, self.vy);
        let x = moved.x.clamp(0, cfg.screen_width - moved.w);
        let y = moved.y.clamp(0, cfg.screen_height - moved.h);
        Self {
            rect: Rect { x, y, ..moved },
            ..*self
        }
    }
}

// ── Enemy ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enemy {
    /// Stable identity; survives respawns.
    pub id: u32,
    pub rect: Rect,
    pub vx: i32,
    pub vy: i32,
}

impl Enemy {
    /// A fresh enemy somewhere above the top edge.
    pub fn spawn(id: u32, cfg: &GameConfig, rng: &mut impl Rng) -> Self {
        let x = rng.gen_range(0..cfg.screen_width - cfg.enemy_width);
        let y = rng.gen_range(ENEMY_SPAWN_Y);
        let vy = rng.gen_range(ENEMY_SPEED_Y);
        let vx = rng.gen_range(ENEMY_SPEED_X);
        Self {
            id,
            rect: Rect::new(x, y, cfg.enemy_width, cfg.enemy_height),
            vx,
            vy,
        }
    }

    pub fn is_below_screen(&self, cfg: &GameConfig) -> bool {
        self.rect.top() > cfg.screen_height + cfg.enemy_offscreen_margin
    }

    /// Integrate.  Once past the bottom edge the same enemy reappears above
    /// the top with a new position and fall speed; its drift is kept.
    pub fn update(&self, cfg: &GameConfig, rng: &mut impl Rng) -> Self {
        let moved = Self {
            rect: self.rect.translated(self.vx, self.vy),
            ..*self
        };
        if !moved.is_below_screen(cfg) {
            return moved;
        }

        let x = rng.gen_range(0..cfg.screen_width - moved.rect.w);
        let y = rng.gen_range(ENEMY_SPAWN_Y);
        let vy = rng.gen_range(ENEMY_SPEED_Y);
        log::trace!("enemy {} respawned at ({}, {}) vy={}", self.id, x, y, vy);
        Self {
            rect: Rect { x, y, ..moved.rect },
            vy,
            ..moved
        }
    }
}

// ── Bullet ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub rect: Rect,
    pub vy: i32,
}

impl Bullet {
    /// Centred on `center_x` with its bottom edge at `bottom`.
    pub fn fired_from(center_x: i32, bottom: i32, cfg: &GameConfig) -> Self {
        Self {
            rect: Rect::new(
                center_x - cfg.bullet_width / 2,
                bottom - cfg.bullet_height,
                cfg.bullet_width,
                cfg.bullet_height,
            ),
            vy: -cfg.bullet_speed,
        }
    }

    /// Integrate; `None` once the bullet has left through the top.
    pub fn update(&self) -> Option<Self> {
        let rect = self.rect.translated(0, self.vy);
        if rect.bottom() < 0 {
            None
        } else {
            Some(Self { rect, ..*self })
        }
    }
}

// ── Closed variant over every live sprite ────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Player(Player),
    Enemy(Enemy),
    Bullet(Bullet),
}

impl Entity {
    pub fn bounds(&self) -> Rect {
        match self {
            Entity::Player(p) => p.rect,
            Entity::Enemy(e) => e.rect,
            Entity::Bullet(b) => b.rect,
        }
    }
}

// ── Session ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// The entire world plus session bookkeeping.  Cloneable so pure update
/// functions can return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub score: u32,
    pub status: GameStatus,
    /// Ticks simulated this session.
    pub frame: u64,
    /// Identity handed to the next spawned enemy.
    pub next_enemy_id: u32,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// The "all" view: player first, then enemies, then bullets.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        std::iter::once(Entity::Player(self.player))
            .chain(self.enemies.iter().copied().map(Entity::Enemy))
            .chain(self.bullets.iter().copied().map(Entity::Bullet))
    }
}
