//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Single-threaded, frame-stepped mutation
//! - No rendering or platform dependencies
//!
//! The host drives it with one [`tick`] per animation frame and reads a
//! [`Snapshot`] back for presentation.

pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, resolve_enemies_vs_player, resolve_projectiles_vs_enemies};
pub use spawner::Spawner;
pub use state::{
    Body, Enemy, EnemySprite, Entity, GamePhase, GameState, Player, Projectile, Snapshot,
    SpriteRect, Star,
};
pub use tick::tick;
