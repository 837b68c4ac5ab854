//! Time-driven enemy spawner with a progressive difficulty ramp.
//!
//! Owns only its own timing state and RNG stream; it appends into the
//! loop-provided enemy container and never touches the player or
//! projectiles.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Enemy;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Spawner {
    /// Elapsed since the last spawn
    spawn_timer: f32,
    /// Current seconds between spawns; shrinks with difficulty
    interval: f32,
    /// Elapsed since the last difficulty step
    difficulty_timer: f32,
    /// Descent speed given to newly spawned enemies
    base_speed: f32,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            spawn_timer: 0.0,
            interval: SPAWN_INTERVAL_START,
            difficulty_timer: 0.0,
            base_speed: ENEMY_BASE_SPEED,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    /// Accumulate `dt`, step difficulty every [`DIFFICULTY_PERIOD`]
    /// seconds, and spawn one enemy whenever the spawn timer reaches
    /// the current interval.
    pub fn update(&mut self, dt: f32, enemies: &mut Vec<Enemy>) {
        self.spawn_timer += dt;
        self.difficulty_timer += dt;

        if self.difficulty_timer >= DIFFICULTY_PERIOD {
            self.difficulty_timer = 0.0;
            self.interval = (self.interval - SPAWN_INTERVAL_STEP).max(SPAWN_INTERVAL_MIN);
            self.base_speed = (self.base_speed + ENEMY_SPEED_STEP).min(ENEMY_MAX_SPEED);
            log::debug!(
                "difficulty step: interval={:.1}s speed={:.0}",
                self.interval,
                self.base_speed
            );
        }

        if self.spawn_timer >= self.interval {
            self.spawn_timer = 0.0;
            self.spawn(enemies);
        }
    }

    fn spawn(&mut self, enemies: &mut Vec<Enemy>) {
        let x = self
            .rng
            .random_range(SPAWN_MARGIN..GAME_WIDTH - SPAWN_MARGIN);
        enemies.push(Enemy::new(x, ENEMY_SPAWN_Y, self.base_speed, &mut self.rng));
    }

    /// Restore interval, timers and base speed for a new run. Already
    /// spawned enemies are unaffected; the RNG stream keeps advancing.
    pub fn reset(&mut self) {
        self.spawn_timer = 0.0;
        self.interval = SPAWN_INTERVAL_START;
        self.difficulty_timer = 0.0;
        self.base_speed = ENEMY_BASE_SPEED;
    }
}
