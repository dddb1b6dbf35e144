/// Game constants, gathered into one explicitly passed configuration object.

use std::time::Duration;

/// Everything tunable about a run.  Built once in `main` and handed by
/// reference to every subsystem.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Logical surface width in pixels.
    pub screen_width: i32,
    /// Logical surface height in pixels.
    pub screen_height: i32,
    /// Target loop rate.
    pub fps: u32,

    pub player_width: i32,
    pub player_height: i32,
    /// Pixels per tick along each axis while a direction key is held.
    pub player_speed: i32,
    /// Gap between the player's starting bottom edge and the screen bottom.
    pub player_bottom_margin: i32,

    pub enemy_width: i32,
    pub enemy_height: i32,
    /// How far past the bottom edge an enemy's top must travel before it respawns.
    pub enemy_offscreen_margin: i32,

    pub bullet_width: i32,
    pub bullet_height: i32,
    /// Upward pixels per tick.
    pub bullet_speed: i32,

    /// Per-tick probability of a new enemy appearing.
    pub spawn_rate: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            fps: 60,
            player_width: 30,
            player_height: 30,
            player_speed: 5,
            player_bottom_margin: 10,
            enemy_width: 20,
            enemy_height: 20,
            enemy_offscreen_margin: 10,
            bullet_width: 5,
            bullet_height: 10,
            bullet_speed: 7,
            spawn_rate: 0.02,
        }
    }
}

impl GameConfig {
    /// Time budget for one loop iteration.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// Reject values the simulation cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sprites = [
            ("player", self.player_width, self.player_height),
            ("enemy", self.enemy_width, self.enemy_height),
            ("bullet", self.bullet_width, self.bullet_height),
        ];
        for (name, w, h) in sprites {
            if w <= 0 || h <= 0 {
                return Err(ConfigError::EmptySprite(name));
            }
        }

        // Enemies spawn at x in [0, W - ew), which must be non-empty.
        if self.screen_width <= self.enemy_width
            || self.screen_width < self.player_width
            || self.screen_height < self.player_height + self.player_bottom_margin
        {
            return Err(ConfigError::ScreenTooSmall {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        if !(0.0..=1.0).contains(&self.spawn_rate) {
            return Err(ConfigError::SpawnRate(self.spawn_rate));
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} sprite must have a positive width and height")]
    EmptySprite(&'static str),

    #[error("screen {width}x{height} is too small for the sprites")]
    ScreenTooSmall { width: i32, height: i32 },

    #[error("spawn rate {0} is not a probability")]
    SpawnRate(f64),

    #[error("frame rate must be at least 1")]
    ZeroFrameRate,
}
