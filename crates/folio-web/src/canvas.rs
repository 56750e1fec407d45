use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use folio_engine::{FieldError, FrameData, Renderer, SurfaceSize};

/// Canvas2D backend for the particle field.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Acquire the 2D context of `canvas`. Fails if the browser refuses one.
    pub fn acquire(canvas: HtmlCanvasElement) -> Result<Self, FieldError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| FieldError::SurfaceUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| FieldError::SurfaceUnavailable("2d context not supported".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FieldError::SurfaceUnavailable("context is not a CanvasRenderingContext2d".into()))?;
        Ok(Self { canvas, ctx })
    }
}

fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
}

impl Renderer for CanvasRenderer {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.canvas.set_width(size.width.max(0.0) as u32);
        self.canvas.set_height(size.height.max(0.0) as u32);
    }

    fn draw(&mut self, frame: &FrameData) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, frame.size.width as f64, frame.size.height as f64);

        for c in frame.circles {
            ctx.begin_path();
            // arc only fails on a negative radius, which the config rejects
            let _ = ctx.arc(c.x as f64, c.y as f64, c.radius as f64, 0.0, TAU);
            ctx.set_fill_style_str(&rgba(frame.style.particle_rgb, c.alpha));
            ctx.fill();
        }

        ctx.set_line_width(1.0);
        for l in frame.links {
            ctx.begin_path();
            ctx.move_to(l.x0 as f64, l.y0 as f64);
            ctx.line_to(l.x1 as f64, l.y1 as f64);
            ctx.set_stroke_style_str(&rgba(frame.style.link_rgb, l.alpha));
            ctx.stroke();
        }
    }
}
