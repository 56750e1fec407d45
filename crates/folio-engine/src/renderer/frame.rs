use bytemuck::{Pod, Zeroable};

/// A filled circle, one per particle per frame. 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl CircleInstance {
    pub const FLOATS: usize = 4;
}

/// A line segment between two nearby particles. 5 floats = 20 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LinkInstance {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub alpha: f32,
}

impl LinkInstance {
    pub const FLOATS: usize = 5;
}

/// Everything drawn in one frame, rebuilt from scratch every step.
pub struct FrameBuffer {
    pub circles: Vec<CircleInstance>,
    pub links: Vec<LinkInstance>,
}

impl FrameBuffer {
    pub fn with_capacity(particles: usize) -> Self {
        Self {
            circles: Vec::with_capacity(particles),
            links: Vec::with_capacity(particles * 4),
        }
    }

    pub fn clear(&mut self) {
        self.circles.clear();
        self.links.clear();
    }

    pub fn push_circle(&mut self, circle: CircleInstance) {
        self.circles.push(circle);
    }

    pub fn push_link(&mut self, link: LinkInstance) {
        self.links.push(link);
    }

    pub fn circle_count(&self) -> u32 {
        self.circles.len() as u32
    }

    pub fn link_count(&self) -> u32 {
        self.links.len() as u32
    }

    /// Flat float view of the circle data, for hosts that read WASM memory.
    pub fn circle_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.circles)
    }

    /// Flat float view of the link data.
    pub fn link_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.links)
    }

    /// Start of the circle floats in linear memory. Valid until the next step.
    pub fn circles_ptr(&self) -> *const f32 {
        self.circle_floats().as_ptr()
    }

    pub fn links_ptr(&self) -> *const f32 {
        self.link_floats().as_ptr()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::with_capacity(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_strides() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), CircleInstance::FLOATS * 4);
        assert_eq!(std::mem::size_of::<LinkInstance>(), LinkInstance::FLOATS * 4);
    }

    #[test]
    fn float_views_follow_pushes() {
        let mut buf = FrameBuffer::default();
        buf.push_circle(CircleInstance { x: 1.0, y: 2.0, radius: 3.0, alpha: 0.5 });
        buf.push_link(LinkInstance { x0: 0.0, y0: 0.0, x1: 4.0, y1: 4.0, alpha: 0.1 });
        assert_eq!(buf.circle_floats(), &[1.0, 2.0, 3.0, 0.5]);
        assert_eq!(buf.link_floats().len(), LinkInstance::FLOATS);
        assert_eq!(buf.circles_ptr(), buf.circles.as_ptr() as *const f32);
        assert_eq!(buf.links_ptr(), buf.links.as_ptr() as *const f32);
        buf.clear();
        assert_eq!(buf.circle_count(), 0);
        assert_eq!(buf.link_count(), 0);
    }
}
