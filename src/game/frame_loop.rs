//! Frame loop driver.
//!
//! [`run`] calls the frame callback once per scheduled frame, forever. Each frame
//! re-arms itself through the [`FrameScheduler`], so the core does not depend on
//! `requestAnimationFrame` directly and tests can step frames by hand.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Host primitive that invokes `callback` (with a timestamp in ms) at the next frame.
pub trait FrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>);
}

pub fn run<S, F>(scheduler: Rc<S>, frame: F)
where
    S: FrameScheduler + 'static,
    F: FnMut(f64) + 'static,
{
    schedule(scheduler, Rc::new(RefCell::new(frame)));
}

fn schedule<S, F>(scheduler: Rc<S>, frame: Rc<RefCell<F>>)
where
    S: FrameScheduler + 'static,
    F: FnMut(f64) + 'static,
{
    let next = Rc::clone(&scheduler);
    scheduler.request_frame(Box::new(move |ts: f64| {
        (&mut *frame.borrow_mut())(ts);
        schedule(next, frame);
    }));
}

/// `window.requestAnimationFrame` scheduler.
pub struct AnimationFrameScheduler;

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        let Some(w) = web_sys::window() else {
            log::error!("no window; frame loop stopped");
            return;
        };
        let js = Closure::once_into_js(move |ts: f64| callback(ts));
        if let Err(err) = w.request_animation_frame(js.unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {}", crate::error::describe(&err));
        }
    }
}
