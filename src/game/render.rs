//! Draw-call surface.
//!
//! `GameState::render` emits [`DrawCmd`]s into any [`Surface`]. The browser uses
//! [`CanvasSurface`]; tests record the stream with [`RecordingSurface`].

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear {
        width: f64,
        height: f64,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        fill: String,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        font: &'static str,
        fill: String,
        align: TextAlign,
    },
}

pub trait Surface {
    fn draw(&mut self, cmd: DrawCmd);
}

/// CSS color with alpha, clamped into [0, 1].
pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0))
}

#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn draw(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }
}

pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface<'_> {
    fn draw(&mut self, cmd: DrawCmd) {
        let ctx = self.ctx;
        match cmd {
            DrawCmd::Clear { width, height } => ctx.clear_rect(0.0, 0.0, width, height),
            DrawCmd::Circle { x, y, radius, fill } => {
                ctx.begin_path();
                // arc only fails on a negative radius
                ctx.arc(x, y, radius.max(0.0), 0.0, TAU).ok();
                ctx.set_fill_style_str(&fill);
                ctx.fill();
            }
            DrawCmd::Text { text, x, y, font, fill, align } => {
                ctx.set_font(font);
                ctx.set_fill_style_str(&fill);
                ctx.set_text_align(align.as_css());
                ctx.fill_text(&text, x, y).ok();
                ctx.set_text_align("left");
            }
        }
    }
}
