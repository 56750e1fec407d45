//! Test double that remembers what it was asked to draw.

use super::frame::{CircleInstance, LinkInstance};
use super::traits::{FrameData, Renderer};
use crate::api::types::SurfaceSize;

#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: usize,
    pub resizes: Vec<SurfaceSize>,
    pub last_size: Option<SurfaceSize>,
    pub last_circles: Vec<CircleInstance>,
    pub last_links: Vec<LinkInstance>,
}

impl Renderer for RecordingRenderer {
    fn backend(&self) -> &'static str {
        "recording"
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.resizes.push(size);
    }

    fn draw(&mut self, frame: &FrameData) {
        self.frames += 1;
        self.last_size = Some(frame.size);
        self.last_circles = frame.circles.to_vec();
        self.last_links = frame.links.to_vec();
    }
}
