//! # Particle Field
//!
//! The decorative particle set behind the page. Particles drift at a
//! constant velocity on a torus: leaving one edge re-enters at the opposite
//! edge at the same height (or column).
//!
//! The field size is a pure function of the surface area:
//! `count = min(max_count, floor(area / area_per_particle))`.

use rand::Rng;

use crate::config::ParticleConfig;
use crate::geometry::{wrap, Rgba, Viewport};

// ============================================================================
// Particle
// ============================================================================

/// One moving point. Only `x`/`y` change after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub size: f64,
    pub color: Rgba,
}

impl Particle {
    /// Random particle inside `bounds`.
    ///
    /// `bounds` must be non-empty.
    pub fn random<R: Rng>(rng: &mut R, bounds: Viewport, config: &ParticleConfig) -> Self {
        Self {
            x: rng.gen_range(0.0..bounds.width),
            y: rng.gen_range(0.0..bounds.height),
            speed_x: rng.gen_range(config.speed.min..config.speed.max),
            speed_y: rng.gen_range(config.speed.min..config.speed.max),
            size: rng.gen_range(config.radius.min..config.radius.max),
            color: config.tint(rng.gen_range(config.alpha.min..config.alpha.max)),
        }
    }

    /// Advance one frame and wrap into `bounds`.
    pub fn update(&mut self, bounds: Viewport) {
        self.x = wrap(self.x + self.speed_x, bounds.width);
        self.y = wrap(self.y + self.speed_y, bounds.height);
    }

    pub fn in_bounds(&self, bounds: Viewport) -> bool {
        (0.0..bounds.width).contains(&self.x) && (0.0..bounds.height).contains(&self.y)
    }
}

// ============================================================================
// Particle Field
// ============================================================================

/// Number of particles a surface of `bounds` should carry.
pub fn desired_count(bounds: Viewport, config: &ParticleConfig) -> usize {
    if bounds.is_empty() {
        return 0;
    }
    let by_area = (bounds.area() / config.area_per_particle).floor() as usize;
    by_area.min(config.max_count)
}

/// Ordered particle collection sized to its bounds.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Viewport,
    config: ParticleConfig,
}

impl ParticleField {
    /// Populate a fresh field for `bounds`.
    pub fn populate<R: Rng>(rng: &mut R, bounds: Viewport, config: ParticleConfig) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            bounds,
            config,
        };
        field.fill(rng);
        field
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Move the field to new bounds without visual discontinuity.
    ///
    /// Positions are rescaled by the per-axis ratio, then the collection is
    /// truncated or topped up with fresh particles to the new desired count.
    /// Returns `(before, after)` counts.
    pub fn resize<R: Rng>(&mut self, rng: &mut R, bounds: Viewport) -> (usize, usize) {
        let before = self.particles.len();
        let (scale_x, scale_y) = bounds.scale_from(self.bounds);
        self.bounds = bounds;

        for particle in &mut self.particles {
            particle.x = wrap(particle.x * scale_x, bounds.width);
            particle.y = wrap(particle.y * scale_y, bounds.height);
        }

        let desired = desired_count(bounds, &self.config);
        if self.particles.len() > desired {
            self.particles.truncate(desired);
        } else {
            self.fill(rng);
        }
        (before, self.particles.len())
    }

    /// Advance every particle by one frame.
    pub fn advance(&mut self) {
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.update(bounds);
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    fn fill<R: Rng>(&mut self, rng: &mut R) {
        let desired = desired_count(self.bounds, &self.config);
        while self.particles.len() < desired {
            self.particles.push(Particle::random(rng, self.bounds, &self.config));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_desired_count() {
        let config = ParticleConfig::default();
        assert_eq!(desired_count(Viewport::new(400.0, 300.0), &config), 6);
        assert_eq!(desired_count(Viewport::new(1920.0, 1080.0), &config), 50);
        assert_eq!(desired_count(Viewport::new(100.0, 100.0), &config), 0);
        assert_eq!(desired_count(Viewport::default(), &config), 0);
    }

    #[test]
    fn test_random_particle_ranges() {
        let config = ParticleConfig::default();
        let bounds = Viewport::new(800.0, 600.0);
        let mut rng = rng();
        for _ in 0..500 {
            let p = Particle::random(&mut rng, bounds, &config);
            assert!(p.in_bounds(bounds));
            assert!(config.speed.contains(p.speed_x) && config.speed.contains(p.speed_y));
            assert!(config.radius.contains(p.size));
            assert!(config.alpha.contains(p.color.a));
            assert_eq!((p.color.r, p.color.g, p.color.b), (255, 255, 255));
        }
    }

    #[test]
    fn test_update_wraps_each_edge() {
        let bounds = Viewport::new(100.0, 50.0);
        let mut p = Particle {
            x: 99.5,
            y: 0.2,
            speed_x: 1.0,
            speed_y: -0.5,
            size: 1.0,
            color: Rgba::new(255, 255, 255, 0.3),
        };
        p.update(bounds);
        assert!((p.x - 0.5).abs() < 1e-9);
        assert!((p.y - 49.7).abs() < 1e-9);

        // Height is preserved when crossing the right edge
        let mut q = Particle { x: 99.9, y: 20.0, speed_x: 0.5, speed_y: 0.0, ..p.clone() };
        q.update(bounds);
        assert_eq!(q.y, 20.0);
        assert!(q.x < 1.0);
    }

    #[test]
    fn test_resize_grow_and_shrink() {
        let mut rng = rng();
        let mut field = ParticleField::populate(&mut rng, Viewport::new(400.0, 300.0), ParticleConfig::default());
        assert_eq!(field.len(), 6);

        let kept: Vec<Particle> = field.particles().to_vec();
        assert_eq!(field.resize(&mut rng, Viewport::new(800.0, 600.0)), (6, 24));
        for (old, new) in kept.iter().zip(field.particles()) {
            assert_eq!(new.x, old.x * 2.0);
            assert_eq!(new.y, old.y * 2.0);
            assert_eq!(new.speed_x, old.speed_x);
        }

        assert_eq!(field.resize(&mut rng, Viewport::new(200.0, 200.0)), (24, 2));
        assert!(field.iter().all(|p| p.in_bounds(field.bounds())));
    }

    #[test]
    fn test_resize_from_unsized_bounds() {
        let mut rng = rng();
        let mut field = ParticleField::populate(&mut rng, Viewport::default(), ParticleConfig::default());
        assert!(field.is_empty());

        field.resize(&mut rng, Viewport::new(1000.0, 1000.0));
        assert_eq!(field.len(), 50);
        assert!(field.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn test_same_size_resize_is_stable() {
        let mut rng = rng();
        let bounds = Viewport::new(1024.0, 768.0);
        let mut field = ParticleField::populate(&mut rng, bounds, ParticleConfig::default());
        let snapshot = field.particles().to_vec();
        field.resize(&mut rng, bounds);
        field.resize(&mut rng, bounds);
        assert_eq!(field.particles(), snapshot.as_slice());
    }
}
