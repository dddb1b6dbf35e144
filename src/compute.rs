/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG and logging.

use rand::Rng;

use crate::collision::{bullet_hits, player_hit};
use crate::config::GameConfig;
use crate::entities::{Bullet, Controls, Enemy, GameState, GameStatus, Player};

// ── Constructors ─────────────────────────────────────────────────────────────

/// A fresh session: lone player at the default position, score zero.
pub fn init_state(cfg: &GameConfig) -> GameState {
    GameState {
        player: Player::spawn(cfg),
        enemies: Vec::new(),
        bullets: Vec::new(),
        score: 0,
        status: GameStatus::Running,
        frame: 0,
        next_enemy_id: 0,
    }
}

/// Start over, but only once the current session has ended.
pub fn restart(state: &GameState, cfg: &GameConfig) -> GameState {
    if !state.is_over() {
        return state.clone();
    }
    log::info!("restarting after final score {}", state.score);
    init_state(cfg)
}

// ── Input-driven state transitions ───────────────────────────────────────────

/// Fire one bullet from the top centre of the player.  No cooldown.
pub fn player_shoot(state: &GameState, cfg: &GameConfig) -> GameState {
    if state.is_over() {
        return state.clone();
    }
    let p = &state.player.rect;
    let mut bullets = state.bullets.clone();
    bullets.push(Bullet::fired_from(p.center_x(), p.top(), cfg));
    GameState {
        bullets,
        ..state.clone()
    }
}

// ── Spawner ──────────────────────────────────────────────────────────────────

/// One draw per tick; below `spawn_rate` a new enemy joins the world.
pub fn spawn_enemy(state: &GameState, cfg: &GameConfig, rng: &mut impl Rng) -> GameState {
    if state.is_over() || rng.gen::<f64>() >= cfg.spawn_rate {
        return state.clone();
    }
    let enemy = Enemy::spawn(state.next_enemy_id, cfg, rng);
    log::debug!(
        "spawned enemy {} at ({}, {}) v=({}, {})",
        enemy.id,
        enemy.rect.x,
        enemy.rect.y,
        enemy.vx,
        enemy.vy
    );
    let mut enemies = state.enemies.clone();
    enemies.push(enemy);
    GameState {
        enemies,
        next_enemy_id: state.next_enemy_id.wrapping_add(1),
        ..state.clone()
    }
}

// ── Collision resolution ─────────────────────────────────────────────────────

/// Bullets and enemies first, then player and enemies.
pub fn resolve_collisions(state: &GameState) -> GameState {
    let hits = bullet_hits(&state.enemies, &state.bullets);
    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .enumerate()
        .filter(|(i, _)| hits.enemies.binary_search(i).is_err())
        .map(|(_, e)| *e)
        .collect();
    let bullets: Vec<Bullet> = state
        .bullets
        .iter()
        .enumerate()
        .filter(|(i, _)| hits.bullets.binary_search(i).is_err())
        .map(|(_, b)| *b)
        .collect();

    let gained = hits.enemies.len() as u32;
    if !hits.is_empty() {
        log::debug!(
            "{} enemies down, {} bullets spent",
            hits.enemies.len(),
            hits.bullets.len()
        );
    }

    // Enemies survive touching the player; only the session ends.
    let status = if player_hit(&state.player, &enemies) {
        log::info!("player hit on frame {}, final score {}", state.frame, state.score + gained);
        GameStatus::GameOver
    } else {
        state.status
    };

    GameState {
        enemies,
        bullets,
        score: state.score + gained,
        status,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  A finished session is frozen and
/// comes back unchanged.  All randomness comes through `rng` so callers
/// control determinism (useful for tests with a seeded RNG).
pub fn tick(
    state: &GameState,
    controls: &Controls,
    cfg: &GameConfig,
    rng: &mut impl Rng,
) -> GameState {
    if state.is_over() {
        return state.clone();
    }

    // ── 1. Apply input & integrate ───────────────────────────────────────────
    let player = state.player.steer(controls, cfg.player_speed).update(cfg);
    let enemies: Vec<Enemy> = state.enemies.iter().map(|e| e.update(cfg, rng)).collect();
    let bullets: Vec<Bullet> = state.bullets.iter().filter_map(Bullet::update).collect();

    let moved = GameState {
        player,
        enemies,
        bullets,
        frame: state.frame + 1,
        ..state.clone()
    };

    // ── 2. Spawn ─────────────────────────────────────────────────────────────
    let spawned = spawn_enemy(&moved, cfg, rng);

    // ── 3. Collisions ────────────────────────────────────────────────────────
    resolve_collisions(&spawned)
}
