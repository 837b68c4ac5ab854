//! Nova Raid - a vertical space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, game state)
//! - `input`: Keyboard state with per-frame edge-triggered queries
//! - `highscores`: High score storage port (LocalStorage on web)
//!
//! Rendering is an external collaborator: it reads a [`sim::Snapshot`]
//! once per frame and never mutates simulation state.

pub mod highscores;
pub mod input;
pub mod sim;

pub use highscores::{HighScoreStore, MemoryHighScores};
pub use input::{FrameInput, InputState};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical pixels)
    pub const GAME_WIDTH: f32 = 480.0;
    pub const GAME_HEIGHT: f32 = 640.0;

    /// Maximum frame delta fed to the simulation (seconds).
    /// Caps the step after a stall so entities never tunnel.
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 350.0;
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;
    pub const PLAYER_START_LIVES: u8 = 3;
    pub const PLAYER_MAX_LIVES: u8 = 5;
    /// Seconds between shots
    pub const FIRE_COOLDOWN: f32 = 0.2;
    /// Post-hit invincibility window (seconds)
    pub const INVINCIBILITY_DURATION: f32 = 1.5;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 4.0;
    pub const PROJECTILE_HEIGHT: f32 = 14.0;
    pub const PROJECTILE_SPEED: f32 = 500.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 32.0;
    pub const ENEMY_POINTS: u64 = 100;
    pub const ENEMY_SPAWN_Y: f32 = -40.0;
    /// Enemies below this line despawn without penalty
    pub const ENEMY_DESPAWN_Y: f32 = 700.0;

    /// Spawner pacing
    pub const SPAWN_INTERVAL_START: f32 = 1.2;
    pub const SPAWN_INTERVAL_MIN: f32 = 0.3;
    pub const SPAWN_INTERVAL_STEP: f32 = 0.1;
    /// Seconds between difficulty steps
    pub const DIFFICULTY_PERIOD: f32 = 10.0;
    pub const ENEMY_BASE_SPEED: f32 = 100.0;
    pub const ENEMY_MAX_SPEED: f32 = 300.0;
    pub const ENEMY_SPEED_STEP: f32 = 15.0;
    /// Horizontal inset from both screen edges for spawn positions
    pub const SPAWN_MARGIN: f32 = 40.0;

    /// Background starfield
    pub const STAR_COUNT: usize = 120;
}
