//! Drifting-words gameplay.
//!
//! Words enter at the left edge of a full-window canvas and drift right by a fixed
//! number of pixels per animation frame. The player types the oldest word's
//! characters in order; finishing a word scores a point and may shorten the spawn
//! interval. The first word to cross the right edge ends the session.
//!
//! Core logic (spawn policy, movement, matching, difficulty, state machine) lives
//! in the submodules and is plain Rust. This file is the browser glue: canvas
//! setup, the keydown listener, the `requestAnimationFrame` loop and the async word
//! fetch, all sharing one thread-local [`GameState`].

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

use crate::config::GameConfig;
use crate::error::GameError;

pub mod difficulty;
mod fetch;
pub mod input;
pub mod render;
pub mod session;
pub mod sim;
pub mod spawn;
pub mod storage;
pub mod words;

pub use session::{FrameOutcome, Game, GameSession, KeyOutcome, Phase};

/// Everything the frame and key callbacks touch.
struct GameState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    game: Game,
    rng: StdRng,
}

thread_local! {
    static GAME_STATE: std::cell::RefCell<Option<GameState>> = const { std::cell::RefCell::new(None) };
}

pub fn start_game_mode(config: GameConfig) -> Result<(), GameError> {
    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;

    // Reuse the page's canvas if it has one, otherwise create it.
    let canvas: HtmlCanvasElement = match doc.get_element_by_id(&config.canvas_id) {
        Some(el) => el.dyn_into().map_err(|_| {
            GameError::Dom(format!("#{} is not a canvas", config.canvas_id))
        })?,
        None => {
            let c: HtmlCanvasElement = doc
                .create_element("canvas")
                .map_err(GameError::dom)?
                .dyn_into()
                .map_err(|_| GameError::Dom("created element is not a canvas".to_string()))?;
            c.set_id(&config.canvas_id);
            c.set_attribute("style", "display:block; background:#000;").ok();
            doc.body()
                .ok_or(GameError::NoDocument)?
                .append_child(&c)
                .map_err(GameError::dom)?;
            c
        }
    };
    let viewport = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    canvas.set_width(viewport(win.inner_width()) as u32);
    canvas.set_height(viewport(win.inner_height()) as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(GameError::dom)?
        .ok_or_else(|| GameError::Dom("2d context unavailable".to_string()))?
        .dyn_into()
        .map_err(|_| GameError::Dom("2d context has unexpected type".to_string()))?;

    let store = storage::LocalStore::open();
    let game = Game::new(config, Box::new(store));
    render::draw_idle(&ctx, &canvas, game.high_score());

    GAME_STATE.with(|s| {
        s.replace(Some(GameState {
            canvas,
            ctx,
            game,
            rng: StdRng::from_entropy(),
        }))
    });

    // Keyboard: space starts, everything else is matched against the leading word.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let now = performance_now();
            let outcome = GAME_STATE.with(|cell| {
                cell.borrow_mut()
                    .as_mut()
                    .map(|state| state.game.on_key(&evt.key(), &evt.code(), now))
            });
            if let Some(KeyOutcome::Started { epoch }) = outcome {
                request_words(epoch);
            }
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(GameError::dom)?;
        closure.forget();
    }

    start_game_loop();
    log::info!("Word Drift ready");
    Ok(())
}

/// Fetch the word list for session `epoch` without blocking the frame loop.
fn request_words(epoch: u64) {
    let url = GAME_STATE.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|state| state.game.config().word_list_url())
    });
    let Some(url) = url else { return };
    wasm_bindgen_futures::spawn_local(async move {
        let fetched = fetch::fetch_words(&url).await;
        GAME_STATE.with(|cell| {
            if let Some(GameState { game, rng, .. }) = cell.borrow_mut().as_mut() {
                game.words_arrived(epoch, fetched, rng);
            }
        });
    });
}

type FrameCallback = std::rc::Rc<std::cell::RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_game_loop() {
    let f: FrameCallback = std::rc::Rc::new(std::cell::RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        GAME_STATE.with(|state_cell| {
            if let Some(state) = state_cell.borrow_mut().as_mut() {
                game_tick(state, ts);
            }
        });
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

// --- Tick ---------------------------------------------------------------------

fn game_tick(state: &mut GameState, now: f64) {
    if state.game.phase() == Phase::Idle {
        render::draw_idle(&state.ctx, &state.canvas, state.game.high_score());
        return;
    }
    // Draw at the current positions, then step the simulation.
    render::draw_active(&state.ctx, &state.canvas, &state.game, &mut state.rng);
    let width = state.canvas.width() as f64;
    let height = state.canvas.height() as f64;
    if let FrameOutcome::GameOver { .. } = state.game.frame(now, width, height, &mut state.rng) {
        render::draw_idle(&state.ctx, &state.canvas, state.game.high_score());
    }
}

fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
