use glam::Vec2;

use crate::api::config::FieldConfig;
use crate::api::types::SurfaceSize;
use crate::core::field::ParticleField;
use crate::error::Result;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::traits::Renderer;

/// Mount/frame/unmount driver for a particle field.
///
/// The host owns scheduling: it calls `frame()` once per repaint and pushes
/// viewport signals in between. After `unmount()` every call is a no-op, so a
/// late DOM event cannot touch the particles.
pub struct Animator<R: Renderer> {
    field: ParticleField,
    renderer: R,
    input: InputQueue,
    running: bool,
    frames: u64,
}

impl<R: Renderer> Animator<R> {
    /// Build a fresh field sized to the viewport and attach `renderer`.
    ///
    /// `seed` is used unless the config pins one.
    pub fn mount(config: FieldConfig, mut renderer: R, size: SurfaceSize, seed: u64) -> Result<Self> {
        let seed = config.seed.unwrap_or(seed);
        let field = ParticleField::new(config, size, seed)?;
        renderer.resize(size);
        log::info!(
            "particle field mounted: {} particles on {}x{} ({})",
            field.len(),
            size.width,
            size.height,
            renderer.backend()
        );
        Ok(Self {
            field,
            renderer,
            input: InputQueue::new(),
            running: true,
            frames: 0,
        })
    }

    /// Queue a viewport signal for the next frame. Dropped once unmounted.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.running {
            self.input.push(event);
        }
    }

    /// Apply pending input, step the simulation and draw it.
    /// Returns false once unmounted; the host stops scheduling then.
    pub fn frame(&mut self) -> bool {
        if !self.running {
            return false;
        }

        for event in self.input.drain() {
            match event {
                InputEvent::PointerMove { x, y } => self.field.set_pointer(Vec2::new(x, y)),
                InputEvent::Resize { width, height } => {
                    let size = SurfaceSize::new(width, height);
                    log::debug!("particle field resized to {}x{}", width, height);
                    self.field.resize(size);
                    self.renderer.resize(size);
                }
            }
        }

        self.field.step();
        self.renderer.draw(&self.field.frame());
        self.frames += 1;
        true
    }

    /// Stop for good. Pending input is discarded.
    pub fn unmount(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.input.clear();
        log::info!("particle field unmounted after {} frames", self.frames);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::particle::Particle;
    use crate::renderer::recording::RecordingRenderer;

    fn mounted() -> Animator<RecordingRenderer> {
        Animator::mount(
            FieldConfig::default(),
            RecordingRenderer::default(),
            SurfaceSize::new(800.0, 600.0),
            1234,
        )
        .unwrap()
    }

    #[test]
    fn mount_sizes_renderer_and_spawns_field() {
        let a = mounted();
        assert!(a.is_running());
        assert_eq!(a.field().len(), 100);
        assert_eq!(a.renderer().resizes, vec![SurfaceSize::new(800.0, 600.0)]);
        assert_eq!(a.renderer().frames, 0);
    }

    #[test]
    fn mount_rejects_bad_config() {
        let config = FieldConfig {
            particle_count: 0,
            ..FieldConfig::default()
        };
        let result = Animator::mount(config, RecordingRenderer::default(), SurfaceSize::new(10.0, 10.0), 1);
        assert!(result.is_err());
    }

    #[test]
    fn frame_draws_every_particle() {
        let mut a = mounted();
        assert!(a.frame());
        assert_eq!(a.renderer().frames, 1);
        assert_eq!(a.renderer().last_circles.len(), 100);
        assert_eq!(a.frames(), 1);
    }

    #[test]
    fn pointer_input_applied_on_next_frame() {
        let mut a = mounted();
        a.push_input(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        assert_eq!(a.field().pointer(), None);
        a.frame();
        assert_eq!(a.field().pointer(), Some(Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn last_pointer_write_wins() {
        let mut a = mounted();
        a.push_input(InputEvent::PointerMove { x: 1.0, y: 1.0 });
        a.push_input(InputEvent::PointerMove { x: 300.0, y: 200.0 });
        a.frame();
        assert_eq!(a.field().pointer(), Some(Vec2::new(300.0, 200.0)));
    }

    #[test]
    fn resize_reaches_field_and_renderer() {
        let mut a = mounted();
        a.push_input(InputEvent::Resize { width: 1280.0, height: 720.0 });
        a.frame();
        let size = SurfaceSize::new(1280.0, 720.0);
        assert_eq!(a.field().size(), size);
        assert_eq!(a.renderer().last_size, Some(size));
        assert_eq!(a.renderer().resizes.last(), Some(&size));
    }

    #[test]
    fn config_seed_overrides_host_seed() {
        let config = FieldConfig {
            seed: Some(5),
            ..FieldConfig::default()
        };
        let size = SurfaceSize::new(800.0, 600.0);
        let a = Animator::mount(config.clone(), RecordingRenderer::default(), size, 1).unwrap();
        let b = Animator::mount(config, RecordingRenderer::default(), size, 2).unwrap();
        assert_eq!(a.field().particles(), b.field().particles());
    }

    #[test]
    fn remount_regenerates_particles() {
        let size = SurfaceSize::new(800.0, 600.0);
        let a = Animator::mount(FieldConfig::default(), RecordingRenderer::default(), size, 1).unwrap();
        let b = Animator::mount(FieldConfig::default(), RecordingRenderer::default(), size, 2).unwrap();
        assert_ne!(a.field().particles(), b.field().particles());
    }

    #[test]
    fn nothing_moves_after_unmount() {
        let mut a = mounted();
        a.frame();
        a.push_input(InputEvent::PointerMove { x: 5.0, y: 5.0 });
        a.unmount();
        let frozen: Vec<Particle> = a.field().particles().to_vec();

        a.push_input(InputEvent::PointerMove { x: 400.0, y: 300.0 });
        assert!(!a.frame());
        assert!(!a.frame());

        assert!(!a.is_running());
        assert_eq!(a.field().particles(), frozen.as_slice());
        assert_eq!(a.field().pointer(), None);
        assert_eq!(a.renderer().frames, 1);
    }
}
