//! Proximity links between particles.

use crate::api::config::FieldConfig;
use crate::core::particle::Particle;
use crate::renderer::frame::{FrameBuffer, LinkInstance};

/// Alpha of the line joining two particles `distance` apart.
/// Zero at or beyond `link_distance`, linear up to `link_max_alpha` at zero.
pub fn link_alpha(distance: f32, config: &FieldConfig) -> f32 {
    if distance >= config.link_distance {
        return 0.0;
    }
    config.link_max_alpha * (1.0 - distance / config.link_distance)
}

/// Push one link per unordered pair closer than `link_distance`.
///
/// Brute force over all pairs; fine for the hundred-particle field, and the
/// cutoff keeps the output small.
pub fn build_links(particles: &[Particle], config: &FieldConfig, out: &mut FrameBuffer) {
    let cutoff_sq = config.link_distance * config.link_distance;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let d_sq = a.pos().distance_squared(b.pos());
            if d_sq >= cutoff_sq {
                continue;
            }
            let alpha = link_alpha(d_sq.sqrt(), config);
            if alpha <= 0.0 {
                continue;
            }
            out.push_link(LinkInstance {
                x0: a.pos().x,
                y0: a.pos().y,
                x1: b.pos().x,
                y1: b.pos().y,
                alpha,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), 1.0, Vec2::ZERO, 0.5)
    }

    #[test]
    fn alpha_zero_at_and_beyond_cutoff() {
        let config = FieldConfig::default();
        assert_eq!(link_alpha(120.0, &config), 0.0);
        assert_eq!(link_alpha(500.0, &config), 0.0);
    }

    #[test]
    fn alpha_positive_and_decreasing_inside_cutoff() {
        let config = FieldConfig::default();
        assert!((link_alpha(0.0, &config) - 0.2).abs() < 1e-6);
        let mut last = f32::INFINITY;
        for d in [0.0, 20.0, 60.0, 100.0, 119.5] {
            let a = link_alpha(d, &config);
            assert!(a > 0.0 && a < last, "d={} alpha={}", d, a);
            last = a;
        }
    }

    #[test]
    fn links_only_close_pairs_once() {
        let config = FieldConfig::default();
        let particles = vec![at(0.0, 0.0), at(60.0, 0.0), at(400.0, 400.0)];
        let mut buf = FrameBuffer::default();
        build_links(&particles, &config, &mut buf);
        assert_eq!(buf.link_count(), 1);
        let link = buf.links[0];
        assert_eq!((link.x0, link.x1), (0.0, 60.0));
        assert!((link.alpha - 0.1).abs() < 1e-6);
    }

    #[test]
    fn full_cluster_links_every_pair() {
        let config = FieldConfig::default();
        let particles: Vec<Particle> = (0..10).map(|i| at(i as f32, 0.0)).collect();
        let mut buf = FrameBuffer::default();
        build_links(&particles, &config, &mut buf);
        assert_eq!(buf.link_count(), 45);
    }
}
