//! Setup errors.
//!
//! Only host wiring can fail (missing window, canvas, 2d context, bad config).
//! Once the loop is running every state transition is plain arithmetic, and
//! audio failures are swallowed at the call site.

use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// `window` is not available (not running in a browser main thread).
    NoWindow,
    NoDocument,
    NoBody,
    /// Canvas lookup, creation or cast failed.
    Canvas(String),
    /// The canvas refused to hand out a 2d context.
    Context(String),
    /// An event listener could not be attached.
    Listener(String),
    /// Configuration JSON did not parse.
    Config(String),
    /// Configuration parsed but a value is out of range.
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoWindow => write!(f, "no window"),
            GameError::NoDocument => write!(f, "no document"),
            GameError::NoBody => write!(f, "document has no body"),
            GameError::Canvas(msg) => write!(f, "canvas unavailable: {msg}"),
            GameError::Context(msg) => write!(f, "2d context unavailable: {msg}"),
            GameError::Listener(msg) => write!(f, "event listener failed: {msg}"),
            GameError::Config(msg) => write!(f, "invalid config json: {msg}"),
            GameError::InvalidConfig { field, reason } => {
                write!(f, "invalid config field `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Render a JS exception for inclusion in a [`GameError`] message.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
