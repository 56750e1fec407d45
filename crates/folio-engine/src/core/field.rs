//! The hero particle field: a fixed set of particles drifting around their
//! anchors, shoved aside by the pointer, wrapping at the surface edges.

use glam::Vec2;

use crate::api::config::FieldConfig;
use crate::api::types::SurfaceSize;
use crate::core::particle::Particle;
use crate::core::rng::Rng;
use crate::error::Result;
use crate::renderer::frame::{CircleInstance, FrameBuffer};
use crate::renderer::traits::FrameData;
use crate::systems::links::build_links;

pub struct ParticleField {
    config: FieldConfig,
    size: SurfaceSize,
    /// Last reported pointer position. `None` until the first move.
    pointer: Option<Vec2>,
    particles: Vec<Particle>,
    frame: FrameBuffer,
}

impl ParticleField {
    /// Validate `config` and scatter `config.particle_count` particles over `size`.
    pub fn new(config: FieldConfig, size: SurfaceSize, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = Rng::new(seed);
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(&mut rng, size, &config))
            .collect();
        Ok(Self::from_particles(config, size, particles))
    }

    /// Build a field around hand-placed particles. The particle count is
    /// whatever `particles` holds.
    pub fn from_particles(config: FieldConfig, size: SurfaceSize, particles: Vec<Particle>) -> Self {
        let frame = FrameBuffer::with_capacity(particles.len());
        Self {
            config,
            size,
            pointer: None,
            particles,
            frame,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particles keep their absolute coordinates; the wrap check brings
    /// stragglers back over the following frames.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    /// Last write wins; read once per step.
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    /// Advance one frame and rebuild the frame buffer.
    pub fn step(&mut self) {
        self.frame.clear();
        let config = &self.config;

        for p in &mut self.particles {
            if let Some(pointer) = self.pointer {
                p.repel(pointer, config);
            }
            p.drift(config);
            p.settle(config);
            p.wrap(self.size, config.wrap_margin);

            self.frame.push_circle(CircleInstance {
                x: p.pos().x,
                y: p.pos().y,
                radius: p.radius(),
                alpha: p.opacity(),
            });
        }

        build_links(&self.particles, config, &mut self.frame);
    }

    /// The frame built by the last `step`.
    pub fn frame(&self) -> FrameData<'_> {
        FrameData {
            size: self.size,
            circles: &self.frame.circles,
            links: &self.frame.links,
            style: self.config.style,
        }
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn size() -> SurfaceSize {
        SurfaceSize::new(W, H)
    }

    fn single(p: Particle) -> ParticleField {
        ParticleField::from_particles(FieldConfig::default(), size(), vec![p])
    }

    #[test]
    fn new_field_has_configured_count() {
        let field = ParticleField::new(FieldConfig::default(), size(), 1).unwrap();
        assert_eq!(field.len(), 100);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = FieldConfig {
            particle_count: 0,
            ..FieldConfig::default()
        };
        assert!(ParticleField::new(config, size(), 1).is_err());
    }

    #[test]
    fn same_seed_same_field() {
        let a = ParticleField::new(FieldConfig::default(), size(), 77).unwrap();
        let b = ParticleField::new(FieldConfig::default(), size(), 77).unwrap();
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn positions_stay_inside_wrap_margin() {
        let mut field = ParticleField::new(FieldConfig::default(), size(), 5).unwrap();
        for frame in 0..2000 {
            // Sweep the pointer across the surface to stir things up.
            let t = frame as f32;
            field.set_pointer(Vec2::new((t * 7.0) % W, (t * 3.0) % H));
            field.step();
            for p in field.particles() {
                assert!(p.pos().x >= -50.0 && p.pos().x <= W + 50.0, "x={}", p.pos().x);
                assert!(p.pos().y >= -50.0 && p.pos().y <= H + 50.0, "y={}", p.pos().y);
            }
        }
    }

    #[test]
    fn fixed_attributes_never_change() {
        let mut field = ParticleField::new(FieldConfig::default(), size(), 11).unwrap();
        let before: Vec<(f32, Vec2, f32)> = field
            .particles()
            .iter()
            .map(|p| (p.radius(), p.velocity(), p.opacity()))
            .collect();
        for i in 0..300 {
            field.set_pointer(Vec2::new(i as f32, 300.0));
            field.step();
        }
        let after: Vec<(f32, Vec2, f32)> = field
            .particles()
            .iter()
            .map(|p| (p.radius(), p.velocity(), p.opacity()))
            .collect();
        assert_eq!(before, after);
        assert_eq!(field.len(), 100);
    }

    #[test]
    fn distant_pointer_adds_no_repulsion() {
        let mut field = ParticleField::new(FieldConfig::default(), size(), 21).unwrap();
        // Far outside the surface and the wrap margin: >= 120 from everyone.
        field.set_pointer(Vec2::new(-10_000.0, -10_000.0));
        let config = field.config().clone();
        for _ in 0..50 {
            let before: Vec<Particle> = field.particles().to_vec();
            field.step();
            for (old, new) in before.iter().zip(field.particles()) {
                if new.base() != old.base() {
                    continue; // wrapped this frame
                }
                let drift = old.velocity() * config.drift_scale;
                let spring = ((old.base() - old.pos()).length() + drift.length())
                    * config.spring_stiffness;
                let moved = (new.pos() - old.pos()).length();
                assert!(
                    moved <= drift.length() + spring + 1e-3,
                    "moved {} > drift {} + spring {}",
                    moved,
                    drift.length(),
                    spring
                );
            }
        }
    }

    #[test]
    fn pointer_near_origin_pushes_particle_away() {
        let mut field = single(Particle::new(Vec2::ZERO, 2.0, Vec2::ZERO, 0.5));
        field.set_pointer(Vec2::new(5.0, 5.0));
        field.step();
        let pos = field.particles()[0].pos();
        assert!(pos.x < 0.0 && pos.y < 0.0, "pos={:?}", pos);
        assert!(pos.distance(Vec2::new(5.0, 5.0)) > Vec2::new(5.0, 5.0).length());
    }

    #[test]
    fn displaced_particle_springs_toward_anchor() {
        let p = Particle::new(Vec2::new(500.0, 300.0), 2.0, Vec2::ZERO, 0.5)
            .with_base(Vec2::new(400.0, 300.0));
        let mut field = single(p);
        field.step();
        let pos = field.particles()[0].pos();
        assert!(pos.x < 500.0 - 1.0, "x={}", pos.x);
        assert_eq!(pos.y, 300.0);
    }

    #[test]
    fn particle_past_right_edge_wraps_left() {
        let p = Particle::new(Vec2::new(W + 60.0, 200.0), 2.0, Vec2::ZERO, 0.5);
        let mut field = single(p);
        field.step();
        let p = &field.particles()[0];
        assert!((p.pos().x + 50.0).abs() < 1e-3, "x={}", p.pos().x);
        assert_eq!(p.base(), p.pos());
    }

    #[test]
    fn resize_keeps_positions_until_wrap() {
        let p = Particle::new(Vec2::new(700.0, 100.0), 2.0, Vec2::ZERO, 0.5);
        let mut field = single(p);
        field.resize(SurfaceSize::new(400.0, 600.0));
        assert_eq!(field.particles()[0].pos(), Vec2::new(700.0, 100.0));
        field.step();
        assert_eq!(field.particles()[0].pos().x, -50.0);
    }

    #[test]
    fn step_fills_frame() {
        let mut field = ParticleField::new(FieldConfig::default(), size(), 2).unwrap();
        field.step();
        let frame = field.frame();
        assert_eq!(frame.circles.len(), 100);
        assert_eq!(field.frame_buffer().circle_count(), 100);
        assert_eq!(frame.size, size());
        for (c, p) in frame.circles.iter().zip(field.particles()) {
            assert_eq!((c.x, c.y), (p.pos().x, p.pos().y));
            assert_eq!(c.alpha, p.opacity());
        }
        for link in frame.links {
            assert!(link.alpha > 0.0 && link.alpha <= 0.2);
        }
    }
}
