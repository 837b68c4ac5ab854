//! Nova Raid entry point
//!
//! The browser build drives the simulation from requestAnimationFrame,
//! feeds it keyboard state, and mirrors score/lives/phase into the DOM
//! HUD. The native build runs a scripted headless session so the sim
//! can be exercised without a browser.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use nova_raid::highscores::{HighScoreStore, LocalStorageHighScores};
    use nova_raid::input::InputState;
    use nova_raid::sim::{GamePhase, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        store: LocalStorageHighScores,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let store = LocalStorageHighScores::load();
            let state = GameState::new(seed, store.high_score());
            Self {
                state,
                input: InputState::new(),
                store,
                last_time: 0.0,
            }
        }

        /// One animation frame: compute dt, tick, clear edges, refresh HUD
        fn frame(&mut self, timestamp: f64) {
            if self.last_time == 0.0 {
                self.last_time = timestamp;
            }
            let dt = ((timestamp - self.last_time) / 1000.0) as f32;
            self.last_time = timestamp;

            let frame_input = self.input.frame_input();
            tick(&mut self.state, &frame_input, dt, &mut self.store);
            self.input.end_frame();
            self.update_hud();
        }

        /// Mirror the snapshot's HUD fields into the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let snapshot = self.state.snapshot();

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&snapshot.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-lives") {
                el.set_text_content(Some(&snapshot.lives.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-best") {
                el.set_text_content(Some(&snapshot.high_score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-phase") {
                el.set_text_content(Some(phase_label(snapshot.phase)));
            }
        }
    }

    fn phase_label(phase: GamePhase) -> &'static str {
        match phase {
            GamePhase::Menu => "PRESS ENTER",
            GamePhase::Playing => "",
            GamePhase::Pause => "PAUSED",
            GamePhase::GameOver => "GAME OVER",
        }
    }

    fn window() -> web_sys::Window {
        web_sys::window().expect("no window")
    }

    fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) {
        let _ = window().request_animation_frame(f.as_ref().unchecked_ref());
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let keydown = {
            let game = game.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                // Keep arrows and space from scrolling the page
                if matches!(
                    code.as_str(),
                    "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight" | "Space"
                ) {
                    event.prevent_default();
                }
                game.borrow_mut().input.key_down(&code);
            })
        };
        let _ = window()
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
        keydown.forget();

        let keyup = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().input.key_up(&event.code());
        });
        let _ = window().add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
        keyup.forget();
    }

    fn pause_if_playing(game: &Rc<RefCell<Game>>) {
        let mut g = game.borrow_mut();
        if g.state.phase == GamePhase::Playing {
            g.state.set_phase(GamePhase::Pause);
            log::info!("auto-paused");
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let document = window().document().expect("no document");

        // Tab hidden
        {
            let game = game.clone();
            let doc = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if doc.visibility_state() == web_sys::VisibilityState::Hidden {
                    pause_if_playing(&game);
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                pause_if_playing(&game);
            });
            let _ =
                window().add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("logger init");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        setup_keyboard(game.clone());
        setup_auto_pause(game.clone());

        // requestAnimationFrame loop
        let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        *g.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            game.borrow_mut().frame(timestamp);
            request_animation_frame(f.borrow().as_ref().unwrap());
        }));
        request_animation_frame(g.borrow().as_ref().unwrap());

        log::info!("Nova Raid started with seed {}", seed);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use nova_raid::highscores::{HighScoreStore, MemoryHighScores};
    use nova_raid::input::FrameInput;
    use nova_raid::sim::{GamePhase, GameState, tick};

    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut store = MemoryHighScores::new();
    let mut state = GameState::new(seed, store.high_score());
    log::info!("Nova Raid headless demo, seed {}", seed);

    let dt = 1.0 / 60.0;

    // Confirm out of the menu, then hold fire and sweep left/right
    // until the run ends (or two minutes pass).
    tick(
        &mut state,
        &FrameInput {
            confirm: true,
            ..Default::default()
        },
        dt,
        &mut store,
    );

    let mut frames = 0u32;
    while state.phase == GamePhase::Playing && frames < 60 * 120 {
        let sweep_left = (frames / 90) % 2 == 0;
        let input = FrameInput {
            left: sweep_left,
            right: !sweep_left,
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, dt, &mut store);
        frames += 1;

        if frames % (60 * 10) == 0 {
            log::info!(
                "t={}s score={} lives={} enemies={}",
                frames / 60,
                state.score,
                state.player.lives,
                state.enemies.len()
            );
        }
    }

    log::info!(
        "demo finished after {} frames: score={} best={}",
        frames,
        state.score,
        store.high_score()
    );
}
