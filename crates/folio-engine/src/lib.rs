pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod content;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::animator::Animator;
pub use api::config::{FieldConfig, FieldStyle, Range};
pub use api::types::SurfaceSize;
pub use crate::core::field::ParticleField;
pub use crate::core::particle::{Particle, repulsion_offset};
pub use crate::core::rng::Rng;
pub use error::FieldError;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::{CircleInstance, FrameBuffer, FrameData, LinkInstance, Renderer};
pub use systems::links::{build_links, link_alpha};
