//! Axis-aligned collision detection and the two gameplay collision rules.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Enemy, Entity, Player, Projectile};

/// Axis-aligned bounding box (top-left corner + extent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Standard AABB overlap test. Boxes that only share an edge do
    /// not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

/// Resolve projectile hits: each live projectile is spent on the first
/// live enemy it overlaps, in container order. Enemies destroyed
/// earlier in the same pass are skipped by later projectiles. Returns
/// the points gained.
pub fn resolve_projectiles_vs_enemies(
    projectiles: &mut [Projectile],
    enemies: &mut [Enemy],
) -> u64 {
    let mut gained = 0;
    for projectile in projectiles.iter_mut() {
        if !projectile.is_alive() {
            continue;
        }
        for enemy in enemies.iter_mut() {
            if !enemy.is_alive() {
                continue;
            }
            if projectile.bounds().intersects(&enemy.bounds()) {
                projectile.destroy();
                enemy.destroy();
                gained += enemy.points;
                break; // one projectile kills at most one enemy
            }
        }
    }
    gained
}

/// Resolve enemy contact with the player: at most one hit per frame.
/// No-op while the player is dead or invincible. The first overlapping
/// live enemy is destroyed and the player takes the hit.
pub fn resolve_enemies_vs_player(enemies: &mut [Enemy], player: &mut Player) {
    if !player.is_alive() || player.is_invincible() {
        return;
    }
    for enemy in enemies.iter_mut() {
        if !enemy.is_alive() {
            continue;
        }
        if enemy.bounds().intersects(&player.bounds()) {
            enemy.destroy();
            player.hit();
            break;
        }
    }
}
