//! Keyboard / pointer state.
//!
//! Host callbacks never touch the game directly: they push [`InputEvent`]s into
//! the inbox owned by `GameState`, which folds them into [`InputState`] at the
//! start of the next tick.

use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    /// Pointer position relative to the canvas origin.
    PointerMove { x: f64, y: f64 },
    Click,
}

#[derive(Default, Debug)]
pub struct InputState {
    keys: HashMap<String, bool>,
    pointer: Option<(f64, f64)>,
    click_pending: bool,
}

const LEFT: [&str; 2] = ["ArrowLeft", "a"];
const RIGHT: [&str; 2] = ["ArrowRight", "d"];
const UP: [&str; 2] = ["ArrowUp", "w"];
const DOWN: [&str; 2] = ["ArrowDown", "s"];

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(key) => self.key_up(key),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::Click => self.click_pending = true,
        }
    }

    pub fn key_down(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into(), true);
    }

    pub fn key_up(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into(), false);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Latest pointer position; `None` until the pointer first moves over the canvas.
    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    /// Consume a click seen since the last call.
    pub fn take_click(&mut self) -> bool {
        std::mem::take(&mut self.click_pending)
    }

    fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_held(k))
    }

    /// Held direction per axis, each in {-1, 0, 1}. Opposite keys cancel.
    pub fn direction(&self) -> (i8, i8) {
        let dx = self.any_held(&RIGHT) as i8 - self.any_held(&LEFT) as i8;
        let dy = self.any_held(&DOWN) as i8 - self.any_held(&UP) as i8;
        (dx, dy)
    }
}
