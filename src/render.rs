//! Stroke rendering onto a 2D surface.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::SketchConfig;
use crate::state::{ContactTracker, Point, SlotIndex};

/// Shift applied to the start of a stroke's first segment. Canvas draws nothing for a
/// zero-length line with butt caps, so a fresh touch gets a one-pixel diagonal mark instead.
const FIRST_MARK_OFFSET: f64 = 1.0;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no browser window")]
    NoWindow,
    #[error("sketch canvas element is not mounted")]
    MissingCanvas,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("canvas 2d context has an unexpected type")]
    WrongContextType,
    #[error("could not attach `{0}` listener")]
    Listener(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
}

/// Minimal path-drawing target. Implemented by the browser canvas and by test recorders.
pub trait Surface {
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn stroke(&mut self, style: &StrokeStyle);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn size(&self) -> (f64, f64);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(SurfaceError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::WrongContextType)?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        self.ctx.set_stroke_style_str(&style.color);
        self.ctx.set_line_width(style.width);
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeRenderer {
    style: StrokeStyle,
    background: String,
}

impl StrokeRenderer {
    pub fn new(style: StrokeStyle, background: impl Into<String>) -> Self {
        Self {
            style,
            background: background.into(),
        }
    }

    pub fn from_config(config: &SketchConfig) -> Self {
        Self::new(
            StrokeStyle {
                color: config.stroke_color.clone(),
                width: config.stroke_width,
            },
            config.background.clone(),
        )
    }

    /// Draws from the slot's last point (or a one-pixel offset for a fresh stroke) to `to`,
    /// then records `to` as the slot's last point.
    pub fn draw_segment<S: Surface + ?Sized>(
        &self,
        tracker: &mut ContactTracker,
        slot: SlotIndex,
        to: Point,
        surface: &mut S,
    ) {
        let last = tracker.slot_mut(slot);
        let from = last
            .last_point
            .unwrap_or(Point::new(to.x - FIRST_MARK_OFFSET, to.y - FIRST_MARK_OFFSET));
        surface.begin_path();
        surface.move_to(from);
        surface.line_to(to);
        surface.stroke(&self.style);
        last.last_point = Some(to);
    }

    pub fn clear<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (w, h) = surface.size();
        surface.fill_rect(0.0, 0.0, w, h, &self.background);
    }
}
