//! Drawing contract between the simulation and a concrete backend.
//!
//! The engine never touches a canvas. Each step it fills a `FrameBuffer`;
//! a `Renderer` turns that into pixels (Canvas2D in `folio-web`).

use super::frame::{CircleInstance, LinkInstance};
use crate::api::config::FieldStyle;
use crate::api::types::SurfaceSize;

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    /// Surface the frame was simulated against; the backend clears all of it.
    pub size: SurfaceSize,
    /// One circle per particle.
    pub circles: &'a [CircleInstance],
    /// Links between nearby particles, drawn after the circles.
    pub links: &'a [LinkInstance],
    pub style: FieldStyle,
}

/// Renderer trait for drawing backends.
///
/// # Example Implementation
///
/// ```ignore
/// struct SvgRenderer { out: String }
///
/// impl Renderer for SvgRenderer {
///     fn backend(&self) -> &'static str { "svg" }
///     fn resize(&mut self, size: SurfaceSize) { /* update viewBox */ }
///     fn draw(&mut self, frame: &FrameData) {
///         self.out.clear();
///         for c in frame.circles { /* <circle .../> */ }
///     }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "canvas2d").
    fn backend(&self) -> &'static str;

    /// The surface changed size. Called before the next `draw`.
    fn resize(&mut self, size: SurfaceSize);

    /// Clear the whole surface, then draw circles followed by links.
    fn draw(&mut self, frame: &FrameData);
}
