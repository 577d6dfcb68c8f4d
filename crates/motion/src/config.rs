//! # Motion Configuration
//!
//! Every tunable of the particle field, the reveal watches and the scroll
//! animation. All structs use `#[serde(default)]`, so a partial JSON document
//! only overrides the keys it names.
//!
//! ```json
//! { "particles": { "max_count": 80 }, "scroll": { "duration_ms": 450 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Rgba;

// ============================================================================
// Span
// ============================================================================

/// Half-open sampling range `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..self.max).contains(&value)
    }

    /// Width of the range; infinite when the bounds are too far apart to sample.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if !self.width().is_finite() {
            return Err(ConfigError::Unbounded { field, min: self.min, max: self.max });
        }
        if self.min < self.max {
            Ok(())
        } else {
            Err(ConfigError::EmptySpan { field, min: self.min, max: self.max })
        }
    }
}

/// Hard ceiling on `ParticleConfig::max_count`.
pub const MAX_PARTICLES: usize = 10_000;

// ============================================================================
// Subsystem Config
// ============================================================================

/// Particle field tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Upper bound on live particles
    pub max_count: usize,
    /// Surface area (px²) granted to each particle
    pub area_per_particle: f64,
    /// Per-axis velocity range, px per frame
    pub speed: Span,
    /// Radius range, px
    pub radius: Span,
    /// Per-particle opacity range
    pub alpha: Span,
    /// Opacity of the black wash painted before every frame
    pub trail_alpha: f64,
    /// Particle colour; alpha is sampled per particle
    pub color: [u8; 3],
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_count: 50,
            area_per_particle: 20_000.0,
            speed: Span::new(-1.0, 1.0),
            radius: Span::new(0.5, 2.5),
            alpha: Span::new(0.2, 0.5),
            trail_alpha: 0.01,
            color: [255, 255, 255],
        }
    }
}

impl ParticleConfig {
    /// Colour of the trail wash.
    pub fn trail(&self) -> Rgba {
        Rgba::new(0, 0, 0, self.trail_alpha)
    }

    /// Particle colour at the given opacity.
    pub fn tint(&self, alpha: f64) -> Rgba {
        let [r, g, b] = self.color;
        Rgba::new(r, g, b, alpha)
    }
}

/// Section reveal watch tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the section that must be visible
    pub threshold: f64,
    /// Margin added around the viewport, px
    pub root_margin_px: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.05,
            root_margin_px: 100,
        }
    }
}

impl RevealConfig {
    /// CSS margin string for `IntersectionObserverInit.rootMargin`.
    pub fn root_margin(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

/// Smooth scroll tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub duration_ms: f64,
    /// Remaining distance (px) under which the animation stops early
    pub settle_distance: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: 600.0,
            settle_distance: 1.0,
        }
    }
}

// ============================================================================
// Motion Config
// ============================================================================

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub particles: ParticleConfig,
    pub reveal: RevealConfig,
    pub scroll: ScrollConfig,
}

impl MotionConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: MotionConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every range and bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let particles = &self.particles;
        if particles.max_count > MAX_PARTICLES {
            return Err(ConfigError::TooLarge {
                field: "particles.max_count",
                value: particles.max_count,
                limit: MAX_PARTICLES,
            });
        }
        positive("particles.area_per_particle", particles.area_per_particle)?;
        particles.speed.check("particles.speed")?;
        particles.radius.check("particles.radius")?;
        particles.alpha.check("particles.alpha")?;
        if particles.radius.min < 0.0 {
            return Err(ConfigError::NotPositive { field: "particles.radius.min", value: particles.radius.min });
        }
        unit("particles.alpha.min", particles.alpha.min)?;
        unit("particles.alpha.max", particles.alpha.max)?;
        unit("particles.trail_alpha", particles.trail_alpha)?;

        unit("reveal.threshold", self.reveal.threshold)?;

        positive("scroll.duration_ms", self.scroll.duration_ms)?;
        if !(self.scroll.settle_distance >= 0.0 && self.scroll.settle_distance.is_finite()) {
            return Err(ConfigError::NotPositive { field: "scroll.settle_distance", value: self.scroll.settle_distance });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::NotUnit { field, value })
    }
}
