use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Inclusive `[min, max]` range used when rolling per-particle attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Colors used when drawing the field. RGB, 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
    pub particle_rgb: [u8; 3],
    pub link_rgb: [u8; 3],
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            // Tailwind blue-400 / amber-400, the hero gradient colors.
            particle_rgb: [96, 165, 250],
            link_rgb: [251, 191, 36],
        }
    }
}

/// Tunables for the particle field. Defaults reproduce the hero banner.
///
/// Deserializes from partial JSON: every missing key keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles, fixed for the lifetime of a field (default: 100).
    pub particle_count: usize,
    /// Pointer distance below which particles are pushed away (default: 120).
    pub repulsion_radius: f32,
    /// Multiplier on the normalized repulsion force (default: 8).
    pub repulsion_strength: f32,
    /// Fraction of the particle velocity applied every frame (default: 0.5).
    pub drift_scale: f32,
    /// Anchor distance beyond which the spring engages (default: 50).
    pub spring_threshold: f32,
    /// Fraction of the anchor displacement recovered per frame (default: 0.02).
    pub spring_stiffness: f32,
    /// Off-surface distance before a particle wraps to the opposite edge (default: 50).
    pub wrap_margin: f32,
    /// Pair distance below which a link is drawn (default: 120).
    pub link_distance: f32,
    /// Link alpha for two coincident particles (default: 0.2).
    pub link_max_alpha: f32,
    pub radius: Range,
    pub speed: Range,
    pub opacity: Range,
    /// RNG seed. `None` lets the host pick one per mount.
    pub seed: Option<u64>,
    pub style: FieldStyle,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            repulsion_radius: 120.0,
            repulsion_strength: 8.0,
            drift_scale: 0.5,
            spring_threshold: 50.0,
            spring_stiffness: 0.02,
            wrap_margin: 50.0,
            link_distance: 120.0,
            link_max_alpha: 0.2,
            radius: Range::new(1.0, 3.0),
            speed: Range::new(-1.25, 1.25),
            opacity: Range::new(0.3, 0.8),
            seed: None,
            style: FieldStyle::default(),
        }
    }
}

impl FieldConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot honor.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.particle_count == 0 {
            return Err(FieldError::InvalidConfig("particle_count must be at least 1".into()));
        }
        for (name, range) in [("radius", self.radius), ("speed", self.speed), ("opacity", self.opacity)] {
            if !(range.min.is_finite() && range.max.is_finite()) || range.min > range.max {
                return Err(FieldError::InvalidConfig(format!(
                    "{} range [{}, {}] is inverted or not finite",
                    name, range.min, range.max
                )));
            }
        }
        if self.radius.min <= 0.0 {
            return Err(FieldError::InvalidConfig("radius must be positive".into()));
        }
        if self.opacity.min < 0.0 || self.opacity.max > 1.0 {
            return Err(FieldError::InvalidConfig("opacity must lie in [0, 1]".into()));
        }
        for (name, value) in [
            ("repulsion_radius", self.repulsion_radius),
            ("link_distance", self.link_distance),
            ("wrap_margin", self.wrap_margin),
            ("spring_threshold", self.spring_threshold),
            ("repulsion_strength", self.repulsion_strength),
            ("drift_scale", self.drift_scale),
            ("spring_stiffness", self.spring_stiffness),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FieldError::InvalidConfig(format!("{} must be >= 0", name)));
            }
        }
        Ok(())
    }
}
