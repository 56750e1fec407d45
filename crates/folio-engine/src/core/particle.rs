//! A single particle of the hero field.

use glam::Vec2;

use crate::api::config::FieldConfig;
use crate::api::types::SurfaceSize;
use crate::core::rng::Rng;

/// One simulated point. `radius`, `velocity` and `opacity` are rolled once
/// and have no setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pos: Vec2,
    base: Vec2,
    radius: f32,
    velocity: Vec2,
    opacity: f32,
}

impl Particle {
    /// Create a particle resting on its anchor.
    pub fn new(pos: Vec2, radius: f32, velocity: Vec2, opacity: f32) -> Self {
        Self {
            pos,
            base: pos,
            radius,
            velocity,
            opacity,
        }
    }

    /// Override the anchor (builder).
    pub fn with_base(mut self, base: Vec2) -> Self {
        self.base = base;
        self
    }

    /// Roll a particle uniformly over `size` with attributes from `config`.
    pub fn random(rng: &mut Rng, size: SurfaceSize, config: &FieldConfig) -> Self {
        let pos = Vec2::new(rng.range(0.0, size.width), rng.range(0.0, size.height));
        let radius = rng.range(config.radius.min, config.radius.max);
        let velocity = Vec2::new(
            rng.range(config.speed.min, config.speed.max),
            rng.range(config.speed.min, config.speed.max),
        );
        let opacity = rng.range(config.opacity.min, config.opacity.max);
        Self::new(pos, radius, velocity, opacity)
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn base(&self) -> Vec2 {
        self.base
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Push away from `pointer` when it is strictly inside the repulsion radius.
    pub(crate) fn repel(&mut self, pointer: Vec2, config: &FieldConfig) {
        self.pos += repulsion_offset(pointer - self.pos, config);
    }

    pub(crate) fn drift(&mut self, config: &FieldConfig) {
        self.pos += self.velocity * config.drift_scale;
    }

    /// Soft spring toward the anchor. Idle while within the threshold.
    pub(crate) fn settle(&mut self, config: &FieldConfig) {
        let displacement = self.base - self.pos;
        if displacement.length() > config.spring_threshold {
            self.pos += displacement * config.spring_stiffness;
        }
    }

    /// Relocate to the opposite edge once past the wrap margin. The anchor
    /// follows so the spring does not drag the particle back across.
    /// Returns true if the particle wrapped.
    pub(crate) fn wrap(&mut self, size: SurfaceSize, margin: f32) -> bool {
        let mut wrapped = false;
        if self.pos.x < -margin {
            self.pos.x = size.width + margin;
            wrapped = true;
        } else if self.pos.x > size.width + margin {
            self.pos.x = -margin;
            wrapped = true;
        }
        if self.pos.y < -margin {
            self.pos.y = size.height + margin;
            wrapped = true;
        } else if self.pos.y > size.height + margin {
            self.pos.y = -margin;
            wrapped = true;
        }
        if wrapped {
            self.base = self.pos;
        }
        wrapped
    }
}

/// Offset applied to a particle whose vector *to* the pointer is `to_pointer`.
///
/// Magnitude is `strength * (radius - d) / radius` for `0 < d < radius`,
/// pointing away from the pointer; zero otherwise.
pub fn repulsion_offset(to_pointer: Vec2, config: &FieldConfig) -> Vec2 {
    let distance = to_pointer.length();
    if distance <= 0.0 || distance >= config.repulsion_radius {
        return Vec2::ZERO;
    }
    let force = (config.repulsion_radius - distance) / config.repulsion_radius;
    -(to_pointer / distance) * force * config.repulsion_strength
}
