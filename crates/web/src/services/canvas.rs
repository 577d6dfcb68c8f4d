// =============================================================================
// Portfolio Web - Canvas Surface
// =============================================================================
// 2D canvas implementation of the engine's drawing surface.
// =============================================================================

use std::f64::consts::TAU;

use portfolio_motion::{Rgba, Surface, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::DomError;

/// `<canvas>` element plus its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, DomError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(DomError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DomError::NoContext2d)?;
        Ok(Self { canvas, context })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn set_size(&mut self, size: Viewport) {
        self.canvas.set_width(size.width as u32);
        self.canvas.set_height(size.height as u32);
    }

    fn wash(&mut self, color: Rgba) {
        let size = self.size();
        self.context.set_fill_style_str(&color.to_string());
        self.context.fill_rect(0.0, 0.0, size.width, size.height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.context.set_fill_style_str(&color.to_string());
        self.context.begin_path();
        if self.context.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.context.fill();
        }
    }
}
