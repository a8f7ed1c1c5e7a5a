// Browser tests for the canvas surface. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use star_chase::game::render::CanvasSurface;
use star_chase::{GameConfig, GameState};

wasm_bindgen_test_configure!(run_in_browser);

fn context() -> CanvasRenderingContext2d {
    let doc = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = doc.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_width(320);
    canvas.set_height(240);
    canvas.get_context("2d").unwrap().unwrap().dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn renders_a_hit_frame_to_canvas() {
    let ctx = context();
    let mut g = GameState::with_seed(GameConfig::default(), 320.0, 240.0, 3);
    g.player.x = 100.0;
    g.player.y = 100.0;
    g.target.x = 105.0;
    g.target.y = 100.0;
    assert!(g.update().hit);
    g.render(&mut CanvasSurface::new(&ctx));
    // text alignment is restored after centered text
    assert_eq!(ctx.text_align(), "left");
}

#[wasm_bindgen_test]
fn start_game_creates_canvas() {
    star_chase::start_game().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.get_element_by_id("gameCanvas").is_some());
}
