//! Browser host for the chase game.
//!
//! Wires the page (canvas, keyboard, pointer, resize, audio) to a [`GameState`]
//! and drives it from `requestAnimationFrame`. Event callbacks only push
//! [`InputEvent`]s into the game's inbox; the frame callback runs `update` then
//! `render`.

pub mod audio;
pub mod entities;
pub mod frame_loop;
pub mod input;
pub mod particles;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window, window};

use crate::config::GameConfig;
use crate::error::{GameError, describe};
use audio::Audio;
use frame_loop::AnimationFrameScheduler;
use input::InputEvent;
use render::CanvasSurface;
pub use state::{GameState, TickOutcome};

/// Canvas size for a viewport: each dimension scaled by `fraction`, floored to
/// whole pixels.
pub fn scaled_viewport(inner_width: f64, inner_height: f64, fraction: f64) -> (u32, u32) {
    let w = (inner_width.max(0.0) * fraction).floor() as u32;
    let h = (inner_height.max(0.0) * fraction).floor() as u32;
    (w, h)
}

fn viewport(win: &Window, fraction: f64) -> (u32, u32) {
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    scaled_viewport(w, h, fraction)
}

fn find_or_create_canvas(doc: &Document, id: &str) -> Result<HtmlCanvasElement, GameError> {
    if let Some(el) = doc.get_element_by_id(id) {
        return el
            .dyn_into()
            .map_err(|_| GameError::Canvas(format!("#{id} is not a <canvas>")));
    }
    let c: HtmlCanvasElement = doc
        .create_element("canvas")
        .map_err(|e| GameError::Canvas(describe(&e)))?
        .dyn_into()
        .map_err(|_| GameError::Canvas("created element is not a canvas".into()))?;
    c.set_id(id);
    let body = doc.body().ok_or(GameError::NoBody)?;
    body.append_child(&c).map_err(|e| GameError::Canvas(describe(&e)))?;
    Ok(c)
}

pub fn start(config: GameConfig) -> Result<(), GameError> {
    config.validate()?;
    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;

    let canvas = find_or_create_canvas(&doc, &config.canvas_id)?;
    let (w, h) = viewport(&win, config.viewport_fraction);
    canvas.set_width(w);
    canvas.set_height(h);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| GameError::Context(describe(&e)))?
        .ok_or_else(|| GameError::Context("getContext(\"2d\") returned null".into()))?
        .dyn_into()
        .map_err(|_| GameError::Context("not a CanvasRenderingContext2d".into()))?;

    let audio = Rc::new(Audio::from_document(&doc, config.bgm_volume, config.score_volume));
    let fraction = config.viewport_fraction;
    let game = Rc::new(RefCell::new(GameState::new(config, w as f64, h as f64)));
    log::info!("star chase started on a {w}x{h} canvas");

    // Keyboard
    for (kind, down) in [("keydown", true), ("keyup", false)] {
        let game = Rc::clone(&game);
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let key = evt.key();
            let event = if down { InputEvent::KeyDown(key) } else { InputEvent::KeyUp(key) };
            game.borrow_mut().push_input(event);
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| GameError::Listener(describe(&e)))?;
        closure.forget();
    }

    // Pointer position relative to the canvas origin
    {
        let game = Rc::clone(&game);
        let canvas_move = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let rect = canvas_move.get_bounding_client_rect();
            let x = evt.client_x() as f64 - rect.left();
            let y = evt.client_y() as f64 - rect.top();
            game.borrow_mut().push_input(InputEvent::PointerMove { x, y });
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
            .map_err(|e| GameError::Listener(describe(&e)))?;
        closure.forget();
    }

    // Clicks start the background track on the next frame
    {
        let game = Rc::clone(&game);
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            game.borrow_mut().push_input(InputEvent::Click);
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| GameError::Listener(describe(&e)))?;
        closure.forget();
    }

    // Viewport resize
    {
        let game = Rc::clone(&game);
        let canvas_resize = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            let Some(win) = window() else { return };
            let (w, h) = viewport(&win, fraction);
            canvas_resize.set_width(w);
            canvas_resize.set_height(h);
            game.borrow_mut().resize(w as f64, h as f64);
            log::debug!("canvas resized to {w}x{h}");
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| GameError::Listener(describe(&e)))?;
        closure.forget();
    }

    frame_loop::run(Rc::new(AnimationFrameScheduler), move |_ts| {
        let outcome = game.borrow_mut().update();
        if outcome.clicked {
            audio.start_bgm();
        }
        if outcome.hit {
            audio.play_score();
        }
        game.borrow().render(&mut CanvasSurface::new(&ctx));
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_is_eighty_percent() {
        assert_eq!(scaled_viewport(1000.0, 500.0, 0.8), (800, 400));
        assert_eq!(scaled_viewport(1001.0, 0.0, 0.8), (800, 0));
    }

    #[test]
    fn negative_viewport_clamps_to_zero() {
        assert_eq!(scaled_viewport(-10.0, 20.0, 0.5), (0, 10));
    }
}
