//! Canvas 2D backend (WASM only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::scene::Surface;
use crate::error::GameError;
use crate::sim::{Rect, Viewport};

/// Drawing surface backed by the game canvas
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Background gradient, rebuilt when the height changes
    gradient: Option<(f32, CanvasGradient)>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, GameError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(GameError::MissingElement("game (2d context)"))?;
        Ok(Self {
            canvas,
            ctx,
            gradient: None,
        })
    }

    /// Match the backing store to the viewport and scale drawing by DPR
    pub fn resize(&mut self, viewport: Viewport) {
        let (w, h) = viewport.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        let dpr = viewport.dpr as f64;
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("set_transform failed: {:?}", e);
        }
        self.gradient = None;
    }

    fn background(&mut self, height: f32, top: &str, bottom: &str) -> Option<&CanvasGradient> {
        let stale = !matches!(&self.gradient, Some((h, _)) if *h == height);
        if stale {
            let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, height as f64);
            if gradient.add_color_stop(0.0, top).is_err()
                || gradient.add_color_stop(1.0, bottom).is_err()
            {
                log::warn!("Invalid gradient colors {} / {}", top, bottom);
                return None;
            }
            self.gradient = Some((height, gradient));
        }
        self.gradient.as_ref().map(|(_, g)| g)
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;

    fn fill_gradient(&mut self, area: Rect, top: &str, bottom: &str) {
        match self.background(area.size.y, top, bottom).cloned() {
            Some(gradient) => self.ctx.set_fill_style_canvas_gradient(&gradient),
            None => self.ctx.set_fill_style_str(bottom),
        }
        self.ctx.fill_rect(
            area.pos.x as f64,
            area.pos.y as f64,
            area.size.x as f64,
            area.size.y as f64,
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn draw_image(&mut self, image: &HtmlImageElement, rect: Rect) {
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        ) {
            log::debug!("draw_image failed: {:?}", e);
        }
    }
}
