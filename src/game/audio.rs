//! Background music and score cue.
//!
//! Both cues are `<audio>` elements supplied by the page. A missing element just
//! disables that cue, and a rejected `play()` (autoplay policy) is logged and
//! dropped so the frame loop never sees it.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlAudioElement};

pub const BGM_ID: &str = "bgm";
pub const SCORE_ID: &str = "scoreSound";

pub struct Audio {
    bgm: Option<HtmlAudioElement>,
    score: Option<HtmlAudioElement>,
    on_reject: Closure<dyn FnMut(JsValue)>,
}

impl Audio {
    pub fn from_document(doc: &Document, bgm_volume: f64, score_volume: f64) -> Self {
        let bgm = lookup(doc, BGM_ID);
        let score = lookup(doc, SCORE_ID);
        if let Some(el) = &bgm {
            el.set_volume(bgm_volume);
        }
        if let Some(el) = &score {
            el.set_volume(score_volume);
        }
        let on_reject = Closure::wrap(Box::new(|err: JsValue| {
            log::debug!("audio playback rejected: {}", crate::error::describe(&err));
        }) as Box<dyn FnMut(JsValue)>);
        Self { bgm, score, on_reject }
    }

    /// Start the background track if it is not already playing. Called on the
    /// frame after a click, while the page still has user activation; the track
    /// is never autoplayed.
    pub fn start_bgm(&self) {
        if let Some(el) = &self.bgm {
            if el.paused() {
                self.play(el);
            }
        }
    }

    /// Rewind the score cue and play it from the start.
    pub fn play_score(&self) {
        if let Some(el) = &self.score {
            el.set_current_time(0.0);
            self.play(el);
        }
    }

    fn play(&self, el: &HtmlAudioElement) {
        match el.play() {
            Ok(promise) => {
                let _ = promise.catch(&self.on_reject);
            }
            Err(err) => log::debug!("audio play failed: {}", crate::error::describe(&err)),
        }
    }
}

fn lookup(doc: &Document, id: &str) -> Option<HtmlAudioElement> {
    let el = doc.get_element_by_id(id);
    if el.is_none() {
        log::info!("no <audio id=\"{id}\"> element, cue disabled");
    }
    el.and_then(|el| el.dyn_into::<HtmlAudioElement>().ok())
}
