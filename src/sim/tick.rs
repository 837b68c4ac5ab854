//! Per-frame simulation step.
//!
//! Within a Playing frame the order is load-bearing: player update →
//! firing → spawner → entity advancement → projectiles-vs-enemies →
//! enemies-vs-player → dead-entity pruning. An enemy killed by a shot
//! must not also hit the player in the same frame.

use super::collision::{resolve_enemies_vs_player, resolve_projectiles_vs_enemies};
use super::state::{Entity, GamePhase, GameState, Projectile};
use crate::consts::*;
use crate::highscores::HighScoreStore;
use crate::input::FrameInput;

/// Advance the session by one frame.
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32, store: &mut dyn HighScoreStore) {
    // Cap the step after a stall; a negative delta counts as no time passing.
    let dt = dt.clamp(0.0, MAX_FRAME_DT);

    // Background animation runs in every phase.
    state.advance_stars(dt);

    match state.phase {
        GamePhase::Menu => {
            if input.confirm {
                state.start_run();
            }
        }
        GamePhase::Playing => {
            update_playing(state, input, dt, store);
            // A death in this frame wins over a pause press.
            if input.pause && state.phase == GamePhase::Playing {
                state.set_phase(GamePhase::Pause);
            }
        }
        GamePhase::Pause => {
            if input.pause {
                state.set_phase(GamePhase::Playing);
            }
        }
        GamePhase::GameOver => {
            if input.confirm {
                state.set_phase(GamePhase::Menu);
            }
        }
    }
}

fn update_playing(
    state: &mut GameState,
    input: &FrameInput,
    dt: f32,
    store: &mut dyn HighScoreStore,
) {
    state.player.update(input, dt);

    if input.fire && state.player.can_fire() {
        let muzzle = state.player.muzzle();
        state.projectiles.push(Projectile::new(muzzle.x, muzzle.y));
        state.player.note_fired();
    }

    state.spawner.update(dt, &mut state.enemies);

    for projectile in &mut state.projectiles {
        projectile.advance(dt);
    }
    for enemy in &mut state.enemies {
        enemy.advance(dt);
    }

    state.score += resolve_projectiles_vs_enemies(&mut state.projectiles, &mut state.enemies);
    resolve_enemies_vs_player(&mut state.enemies, &mut state.player);

    state.projectiles.retain(|p| p.is_alive());
    state.enemies.retain(|e| e.is_alive());

    if !state.player.is_alive() {
        finish_run(state, store);
    }
}

fn finish_run(state: &mut GameState, store: &mut dyn HighScoreStore) {
    if state.score > state.high_score {
        state.high_score = state.score;
        store.record(state.score);
        log::info!("new high score: {}", state.score);
    }
    log::info!("game over at {} points", state.score);
    state.set_phase(GamePhase::GameOver);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryHighScores;
    use crate::sim::state::Enemy;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const DT: f32 = 1.0 / 60.0;

    fn confirm() -> FrameInput {
        FrameInput {
            confirm: true,
            ..Default::default()
        }
    }

    fn pause() -> FrameInput {
        FrameInput {
            pause: true,
            ..Default::default()
        }
    }

    fn playing_state() -> (GameState, MemoryHighScores) {
        let mut store = MemoryHighScores::new();
        let mut state = GameState::new(11, store.high_score());
        tick(&mut state, &confirm(), DT, &mut store);
        assert_eq!(state.phase, GamePhase::Playing);
        (state, store)
    }

    /// Enemy parked on the player, motionless so overlap survives the
    /// frame's advancement.
    fn enemy_on_player(state: &GameState) -> Enemy {
        let mut rng = Pcg32::seed_from_u64(5);
        let center = state.player.body.pos + state.player.body.size / 2.0;
        let mut enemy = Enemy::new(center.x - ENEMY_SIZE / 2.0, center.y - ENEMY_SIZE / 2.0, 0.0, &mut rng);
        enemy.sine_amplitude = 0.0;
        enemy
    }

    #[test]
    fn menu_confirm_starts_a_fresh_run() {
        let mut store = MemoryHighScores::new();
        let mut state = GameState::new(11, 0);
        state.score = 777;
        tick(&mut state, &confirm(), DT, &mut store);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn pause_toggles_back_and_forth() {
        let (mut state, mut store) = playing_state();
        tick(&mut state, &pause(), DT, &mut store);
        assert_eq!(state.phase, GamePhase::Pause);
        tick(&mut state, &pause(), DT, &mut store);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn paused_game_does_not_advance_entities() {
        let (mut state, mut store) = playing_state();
        let mut enemy = enemy_on_player(&state);
        enemy.body.pos.y = 100.0;
        enemy.body.vel.y = 120.0;
        state.enemies.push(enemy);
        tick(&mut state, &pause(), DT, &mut store);

        let y_before = state.enemies[0].body.pos.y;
        for _ in 0..60 {
            tick(&mut state, &FrameInput::default(), DT, &mut store);
        }
        assert_eq!(state.enemies[0].body.pos.y, y_before);
    }

    #[test]
    fn player_death_transitions_to_game_over() {
        let (mut state, mut store) = playing_state();
        state.player.lives = 1;
        let enemy = enemy_on_player(&state);
        state.enemies.push(enemy);

        tick(&mut state, &FrameInput::default(), DT, &mut store);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn death_wins_over_pause_press_in_same_frame() {
        let (mut state, mut store) = playing_state();
        state.player.lives = 1;
        state.enemies.push(enemy_on_player(&state));

        tick(&mut state, &pause(), DT, &mut store);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn game_over_persists_a_beaten_high_score() {
        let (mut state, mut store) = playing_state();
        state.player.lives = 1;
        state.score = 1200;
        state.enemies.push(enemy_on_player(&state));

        tick(&mut state, &FrameInput::default(), DT, &mut store);
        assert_eq!(store.high_score(), 1200);
        assert_eq!(state.high_score, 1200);
    }

    #[test]
    fn game_over_leaves_an_unbeaten_high_score_alone() {
        let mut store = MemoryHighScores::new();
        store.record(5000);
        let mut state = GameState::new(11, store.high_score());
        tick(&mut state, &confirm(), DT, &mut store);

        state.player.lives = 1;
        state.score = 100;
        state.enemies.push(enemy_on_player(&state));
        tick(&mut state, &FrameInput::default(), DT, &mut store);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(store.high_score(), 5000);
        assert_eq!(state.high_score, 5000);
    }

    #[test]
    fn game_over_confirm_returns_to_menu() {
        let (mut state, mut store) = playing_state();
        state.player.lives = 1;
        state.enemies.push(enemy_on_player(&state));
        tick(&mut state, &FrameInput::default(), DT, &mut store);

        tick(&mut state, &confirm(), DT, &mut store);
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn containers_hold_only_live_entities_after_every_frame() {
        let (mut state, mut store) = playing_state();
        let input = FrameInput {
            fire: true,
            ..Default::default()
        };
        for _ in 0..1200 {
            tick(&mut state, &input, DT, &mut store);
            assert!(state.projectiles.iter().all(|p| p.is_alive()));
            assert!(state.enemies.iter().all(|e| e.is_alive()));
        }
    }

    #[test]
    fn frame_delta_is_clamped() {
        let (mut state, mut store) = playing_state();
        let x_before = state.player.body.pos.x;
        let input = FrameInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &input, 1.0, &mut store);
        let moved = x_before - state.player.body.pos.x;
        assert!(moved <= PLAYER_SPEED * MAX_FRAME_DT + 1e-3);
    }

    #[test]
    fn negative_frame_delta_is_ignored() {
        let (mut state, mut store) = playing_state();
        let x_before = state.player.body.pos.x;
        let input = FrameInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &input, -1.0, &mut store);
        assert_eq!(state.player.body.pos.x, x_before);
    }

    #[test]
    fn fire_rate_is_limited_by_the_cooldown() {
        let (mut state, mut store) = playing_state();
        let input = FrameInput {
            fire: true,
            ..Default::default()
        };

        tick(&mut state, &input, DT, &mut store);
        assert_eq!(state.projectiles.len(), 1);

        // Cooldown still running: no second shot
        tick(&mut state, &input, DT, &mut store);
        assert_eq!(state.projectiles.len(), 1);

        // After the cooldown elapses the next held frame fires again
        for _ in 0..12 {
            tick(&mut state, &input, DT, &mut store);
        }
        assert_eq!(state.projectiles.len(), 2);
    }

    #[test]
    fn killed_enemy_cannot_also_hit_the_player() {
        let (mut state, mut store) = playing_state();
        // Enemy sitting on the player, and a projectile already inside it
        let enemy = enemy_on_player(&state);
        let muzzle = enemy.body.pos + enemy.body.size / 2.0;
        state.enemies.push(enemy);
        state.projectiles.push(Projectile::new(muzzle.x, muzzle.y));

        let lives_before = state.player.lives;
        tick(&mut state, &FrameInput::default(), 0.0, &mut store);

        assert_eq!(state.score, ENEMY_POINTS);
        assert_eq!(state.player.lives, lives_before);
        assert!(state.enemies.is_empty());
    }
}
