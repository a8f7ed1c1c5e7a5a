//! Star Chase core crate.
//!
//! A small canvas arcade game: steer the coral circle (arrow keys / WASD or the
//! mouse) into the gold target. Every hit scores a point, bursts into particles,
//! rings the score cue and flashes an encouragement line. The simulation in
//! [`game::state`] is host-independent; [`game`] wires it to the browser.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod game;
pub mod logging;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{GameState, TickOutcome};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::Level::Info);
}

// -----------------------------------------------------------------------------
// Encouragement lines shown after each hit (one picked at random).
// -----------------------------------------------------------------------------

pub const ENCOURAGEMENTS: &[&str] = &[
    "你是最棒的，宇宙第一帥！",
    "得分+1，離脫單又近了一步！",
    "別人玩遊戲，你玩的是人生巔峰！",
    "你這操作，牛頓看了都想復活！",
    "再接再厲，世界因你而美好！",
];

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start(GameConfig::default()).map_err(Into::into)
}

/// Start with a JSON config object; unspecified keys keep their defaults.
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json).inspect_err(|e| log::warn!("rejected config: {e}"))?;
    game::start(config).map_err(Into::into)
}

/// Raise or lower console verbosity at runtime ("error" .. "trace").
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match level.parse::<log::LevelFilter>() {
        Ok(filter) => {
            logging::set_level(filter);
            true
        }
        Err(_) => false,
    }
}
