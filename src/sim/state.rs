//! Game state and core simulation types
//!
//! Entities share a [`Body`] by composition and a small [`Entity`]
//! contract instead of a class hierarchy; the three variants own their
//! movement rules.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawner::Spawner;
use crate::consts::*;
use crate::input::FrameInput;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Pause,
    /// Run ended
    GameOver,
}

/// Shared position/extent/velocity/liveness state, composed into every
/// entity variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub alive: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            alive: true,
        }
    }

    /// Euler step: position += velocity * dt
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn bounds(&self) -> super::collision::Aabb {
        super::collision::Aabb::new(self.pos, self.size)
    }
}

/// Behavior contract shared by the three entity variants.
///
/// A dead entity is never collision-tested or rendered; containers are
/// pruned by the end of the frame in which an entity died.
pub trait Entity {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Advance one frame. Default is straight velocity integration;
    /// variants with their own motion rules override this.
    fn advance(&mut self, dt: f32) {
        self.body_mut().integrate(dt);
    }

    fn bounds(&self) -> super::collision::Aabb {
        self.body().bounds()
    }

    fn is_alive(&self) -> bool {
        self.body().alive
    }

    /// Mark the entity dead. Idempotent; entities never resurrect.
    fn destroy(&mut self) {
        self.body_mut().alive = false;
    }
}

/// The player ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub lives: u8,
    /// Seconds until the next shot is allowed
    pub shoot_cooldown: f32,
    /// Remaining invincibility window; enemy contact is ignored while > 0
    pub invincible_timer: f32,
    /// Time since the invincibility window was armed, drives the blink
    pub blink_timer: f32,
}

impl Player {
    pub fn new() -> Self {
        let size = Vec2::splat(PLAYER_SIZE);
        let pos = Vec2::new(
            GAME_WIDTH / 2.0 - size.x / 2.0,
            GAME_HEIGHT - size.y - PLAYER_BOTTOM_MARGIN,
        );
        Self {
            body: Body::new(pos, size),
            lives: PLAYER_START_LIVES,
            shoot_cooldown: 0.0,
            invincible_timer: 0.0,
            blink_timer: 0.0,
        }
    }

    /// Apply horizontal input, clamp to the screen, run down the shot
    /// cooldown and the invincibility window.
    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        let mut axis = 0.0;
        if input.left {
            axis -= 1.0;
        }
        if input.right {
            axis += 1.0;
        }
        self.body.vel.x = axis * PLAYER_SPEED;
        self.body.integrate(dt);
        self.body.pos.x = self.body.pos.x.clamp(0.0, GAME_WIDTH - self.body.size.x);

        self.shoot_cooldown = (self.shoot_cooldown - dt).max(0.0);
        if self.invincible_timer > 0.0 {
            self.invincible_timer = (self.invincible_timer - dt).max(0.0);
            self.blink_timer += dt;
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_timer > 0.0
    }

    /// Render hint: blinks at 10 Hz while invincible
    pub fn is_visible(&self) -> bool {
        !self.is_invincible() || (self.blink_timer * 10.0) as u32 % 2 == 0
    }

    pub fn can_fire(&self) -> bool {
        self.shoot_cooldown <= 0.0
    }

    /// Re-arm the cooldown after a shot
    pub fn note_fired(&mut self) {
        self.shoot_cooldown = FIRE_COOLDOWN;
    }

    /// Projectile spawn point: top center of the ship
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.body.pos.x + self.body.size.x / 2.0, self.body.pos.y)
    }

    /// Apply one hit: lose a life, die at zero, otherwise arm the
    /// invincibility window. Ignored while invincible.
    pub fn hit(&mut self) {
        if self.is_invincible() {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.destroy();
        } else {
            self.invincible_timer = INVINCIBILITY_DURATION;
            self.blink_timer = 0.0;
        }
    }

    /// Restore spawn position, lives, timers and liveness for a new run
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

/// A descending enemy with sinusoidal horizontal drift
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    pub points: u64,
    /// Center line the sine oscillates around
    pub base_x: f32,
    /// Time alive, drives the sine phase
    pub elapsed: f32,
    pub sine_offset: f32,
    pub sine_amplitude: f32,
    pub sine_frequency: f32,
    /// Render hint, warm tones (0-60 degrees)
    pub hue: f32,
}

impl Enemy {
    /// Motion parameters and hue are fixed at spawn time from the
    /// spawner's RNG stream.
    pub fn new(x: f32, y: f32, speed: f32, rng: &mut impl Rng) -> Self {
        let mut body = Body::new(Vec2::new(x, y), Vec2::splat(ENEMY_SIZE));
        body.vel.y = speed;
        Self {
            body,
            points: ENEMY_POINTS,
            base_x: x,
            elapsed: 0.0,
            sine_offset: rng.random_range(0.0..std::f32::consts::TAU),
            sine_amplitude: rng.random_range(30.0..70.0),
            sine_frequency: rng.random_range(1.5..3.0),
            hue: rng.random_range(0.0..60.0),
        }
    }
}

impl Entity for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Horizontal position is set directly from the sine; vertical
    /// still integrates by velocity. Despawns below the screen with no
    /// penalty.
    fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        self.body.pos.x = self.base_x
            + (self.elapsed * self.sine_frequency + self.sine_offset).sin() * self.sine_amplitude;
        self.body.pos.y += self.body.vel.y * dt;
        if self.body.pos.y > ENEMY_DESPAWN_Y {
            self.destroy();
        }
    }
}

/// A player shot, fixed upward velocity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
}

impl Projectile {
    /// `x` is the muzzle center; the box is centered on it.
    pub fn new(x: f32, y: f32) -> Self {
        let mut body = Body::new(
            Vec2::new(x - PROJECTILE_WIDTH / 2.0, y),
            Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
        );
        body.vel.y = -PROJECTILE_SPEED;
        Self { body }
    }
}

impl Entity for Projectile {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn advance(&mut self, dt: f32) {
        self.body.integrate(dt);
        if self.body.pos.y + self.body.size.y < 0.0 {
            self.destroy();
        }
    }
}

/// Background star (ambient animation, not gameplay-affecting)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub brightness: f32,
}

impl Star {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..GAME_WIDTH),
                rng.random_range(0.0..GAME_HEIGHT),
            ),
            size: rng.random_range(0.5..2.5),
            speed: rng.random_range(20.0..100.0),
            brightness: rng.random_range(0.3..1.0),
        }
    }
}

/// Complete session state, exclusively owned by the simulation loop
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Previously-held phase, kept for diagnostics only
    pub previous_phase: Option<GamePhase>,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub spawner: Spawner,
    pub score: u64,
    /// Cached best, read from the store once at startup
    pub high_score: u64,
    pub stars: Vec<Star>,
    star_rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64, high_score: u64) -> Self {
        // Separate stream so star wrapping never perturbs spawn rolls
        let mut star_rng = Pcg32::seed_from_u64(seed ^ 0x5f37_59df);
        let stars = (0..STAR_COUNT).map(|_| Star::random(&mut star_rng)).collect();
        Self {
            phase: GamePhase::Menu,
            previous_phase: None,
            player: Player::new(),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            spawner: Spawner::new(seed),
            score: 0,
            high_score,
            stars,
            star_rng,
        }
    }

    /// Transition to `next`. Self-transitions are no-ops and leave the
    /// previous-phase record untouched.
    pub fn set_phase(&mut self, next: GamePhase) {
        if next == self.phase {
            return;
        }
        self.previous_phase = Some(self.phase);
        self.phase = next;
    }

    /// Full session reset, then enter Playing
    pub fn start_run(&mut self) {
        self.score = 0;
        self.projectiles.clear();
        self.enemies.clear();
        self.player.reset();
        self.spawner.reset();
        self.set_phase(GamePhase::Playing);
        log::info!("run started");
    }

    /// Scroll the starfield; stars wrap to the top at a fresh x
    pub fn advance_stars(&mut self, dt: f32) {
        for star in &mut self.stars {
            star.pos.y += star.speed * dt;
            if star.pos.y > GAME_HEIGHT {
                star.pos.y = -2.0;
                star.pos.x = self.star_rng.random_range(0.0..GAME_WIDTH);
            }
        }
    }

    /// Read-only view handed to the rendering collaborator once per frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            lives: self.player.lives,
            player: SpriteRect {
                pos: self.player.body.pos,
                size: self.player.body.size,
            },
            player_visible: self.player.is_visible(),
            projectiles: self
                .projectiles
                .iter()
                .map(|p| SpriteRect {
                    pos: p.body.pos,
                    size: p.body.size,
                })
                .collect(),
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemySprite {
                    rect: SpriteRect {
                        pos: e.body.pos,
                        size: e.body.size,
                    },
                    hue: e.hue,
                })
                .collect(),
            stars: self.stars.clone(),
        }
    }
}

/// Position and extent of one drawable entity
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpriteRect {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Enemy rect plus its fixed hue
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EnemySprite {
    pub rect: SpriteRect,
    pub hue: f32,
}

/// Per-frame render view; the renderer never mutates simulation state
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub high_score: u64,
    pub lives: u8,
    pub player: SpriteRect,
    pub player_visible: bool,
    pub projectiles: Vec<SpriteRect>,
    pub enemies: Vec<EnemySprite>,
    pub stars: Vec<Star>,
}
