pub mod frame;
pub mod traits;
#[cfg(test)]
pub(crate) mod recording;

pub use frame::{CircleInstance, FrameBuffer, LinkInstance};
pub use traits::{FrameData, Renderer};
