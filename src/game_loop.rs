/// The fixed-rate loop: input → update → render → wait.
///
/// Everything it touches is passed in, so tests can drive it with a fake
/// canvas, scripted input and a seeded RNG.

use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::compute::{init_state, player_shoot, restart, tick};
use crate::config::GameConfig;
use crate::display::{render, Canvas};
use crate::entities::GameState;
use crate::error::GameError;
use crate::input::{InputEvent, InputSource, Key};

/// Sleeps away whatever is left of each frame's time budget.
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            frame_start: Instant::now(),
        }
    }

    /// Block until one frame has passed since the previous call (or since
    /// construction).  Returns how long it slept.
    pub fn wait(&mut self) -> Duration {
        let elapsed = self.frame_start.elapsed();
        let slept = if elapsed < self.frame {
            let remaining = self.frame - elapsed;
            thread::sleep(remaining);
            remaining
        } else {
            Duration::ZERO
        };
        self.frame_start = Instant::now();
        slept
    }
}

/// One-shot actions.  Movement keys only matter through held state.
pub fn handle_key(state: &GameState, key: Key, cfg: &GameConfig) -> GameState {
    match key {
        Key::Fire => player_shoot(state, cfg),
        Key::Restart => restart(state, cfg),
        _ => state.clone(),
    }
}

/// Play until a quit event arrives.  The iteration that sees the quit still
/// updates and renders.  Returns the state as of the last frame.
pub fn run<C, I, R>(
    canvas: &mut C,
    input: &mut I,
    cfg: &GameConfig,
    rng: &mut R,
) -> Result<GameState, GameError>
where
    C: Canvas,
    I: InputSource,
    R: Rng,
{
    let mut state = init_state(cfg);
    let mut limiter = FrameLimiter::new(cfg.frame_duration());
    log::info!(
        "session started on a {}x{} field at {} fps",
        cfg.screen_width,
        cfg.screen_height,
        cfg.fps
    );

    let mut running = true;
    while running {
        // ── Discrete events ─────────────────────────────────────────────────
        for event in input.poll_events()? {
            match event {
                InputEvent::Quit => running = false,
                InputEvent::KeyDown(key) => state = handle_key(&state, key, cfg),
                InputEvent::Resize(cols, rows) => canvas.resize(cols, rows),
            }
        }

        // ── Held keys, simulation, presentation ────────────────────────────
        let controls = input.controls();
        state = tick(&state, &controls, cfg, rng);
        render(canvas, &state, cfg)?;

        limiter.wait();
    }

    log::info!("quit with score {} after {} frames", state.score, state.frame);
    Ok(state)
}
