//! # Particle Simulator
//!
//! Scoped owner of a [`ParticleField`] and the [`Surface`] it is painted on.
//! Construction performs initialization (size the surface, populate the
//! field); [`ParticleSimulator::teardown`] stops it for good. Once stopped,
//! `tick` and `resize` leave both the surface and the field untouched.
//!
//! The browser crate wraps this in a driver that owns the frame handle and
//! the resize listener.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ParticleConfig;
use crate::geometry::{Rgba, Viewport};
use crate::particles::ParticleField;

// ============================================================================
// Surface
// ============================================================================

/// 2D raster target the field is drawn onto.
pub trait Surface {
    /// Current pixel size. Zero when never sized.
    fn size(&self) -> Viewport;

    fn set_size(&mut self, size: Viewport);

    /// Fill the whole surface with `color`.
    fn wash(&mut self, color: Rgba);

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
}

// ============================================================================
// Simulator
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorState {
    Running,
    Stopped,
}

/// Particle field bound to a drawing surface.
pub struct ParticleSimulator<S: Surface, R: Rng = StdRng> {
    surface: S,
    field: ParticleField,
    rng: R,
    state: SimulatorState,
    frames: u64,
}

impl<S: Surface> ParticleSimulator<S, StdRng> {
    /// Initialize with an entropy-seeded generator.
    pub fn new(surface: S, viewport: Viewport, config: ParticleConfig) -> Self {
        Self::with_rng(surface, viewport, config, StdRng::from_entropy())
    }
}

impl<S: Surface, R: Rng> ParticleSimulator<S, R> {
    /// Size `surface` to `viewport` and populate the field.
    pub fn with_rng(mut surface: S, viewport: Viewport, config: ParticleConfig, mut rng: R) -> Self {
        surface.set_size(viewport);
        let field = ParticleField::populate(&mut rng, viewport, config);
        log::debug!(
            "Particle field initialized: {} particles on {}x{}",
            field.len(),
            viewport.width,
            viewport.height
        );
        Self {
            surface,
            field,
            rng,
            state: SimulatorState::Running,
            frames: 0,
        }
    }

    pub fn state(&self) -> SimulatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimulatorState::Running
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Frames rendered since initialization.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Follow a viewport change.
    ///
    /// Returns false when stopped.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if !self.is_running() {
            return false;
        }
        self.surface.set_size(viewport);
        let (before, after) = self.field.resize(&mut self.rng, viewport);
        if before != after {
            log::debug!(
                "Particle field resized to {}x{}: {} -> {} particles",
                viewport.width,
                viewport.height,
                before,
                after
            );
        }
        true
    }

    /// Advance and paint one frame: trail wash, then every particle.
    ///
    /// Returns false when stopped.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.surface.wash(self.field.config().trail());
        self.field.advance();
        for particle in self.field.iter() {
            self.surface
                .fill_circle(particle.x, particle.y, particle.size, particle.color);
        }
        self.frames += 1;
        true
    }

    /// Stop the simulator and drop its particles. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.state == SimulatorState::Stopped {
            return;
        }
        self.state = SimulatorState::Stopped;
        self.field.clear();
        log::debug!("Particle field stopped after {} frames", self.frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        size: Viewport,
        washes: Vec<Rgba>,
        circles: usize,
    }

    impl Surface for Recorder {
        fn size(&self) -> Viewport {
            self.size
        }

        fn set_size(&mut self, size: Viewport) {
            self.size = size;
        }

        fn wash(&mut self, color: Rgba) {
            self.washes.push(color);
        }

        fn fill_circle(&mut self, _x: f64, _y: f64, _radius: f64, _color: Rgba) {
            self.circles += 1;
        }
    }

    fn simulator(w: f64, h: f64) -> ParticleSimulator<Recorder> {
        ParticleSimulator::with_rng(
            Recorder::default(),
            Viewport::new(w, h),
            ParticleConfig::default(),
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn test_init_sizes_surface() {
        let sim = simulator(640.0, 480.0);
        assert_eq!(sim.surface().size(), Viewport::new(640.0, 480.0));
        assert_eq!(sim.field().len(), 15);
        assert!(sim.is_running());
    }

    #[test]
    fn test_tick_washes_then_draws() {
        let mut sim = simulator(640.0, 480.0);
        assert!(sim.tick());
        assert!(sim.tick());
        assert_eq!(sim.surface().washes, vec![Rgba::new(0, 0, 0, 0.01); 2]);
        assert_eq!(sim.surface().circles, 30);
        assert_eq!(sim.frame_count(), 2);
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let mut sim = simulator(640.0, 480.0);
        sim.tick();
        sim.teardown();
        sim.teardown();
        assert_eq!(sim.state(), SimulatorState::Stopped);

        assert!(!sim.tick());
        assert!(!sim.resize(Viewport::new(1920.0, 1080.0)));
        assert_eq!(sim.surface().washes.len(), 1);
        assert_eq!(sim.surface().size(), Viewport::new(640.0, 480.0));
        assert!(sim.field().is_empty());
    }

    #[test]
    fn test_zero_viewport_init() {
        let mut sim = simulator(0.0, 0.0);
        assert!(sim.field().is_empty());
        assert!(sim.resize(Viewport::new(800.0, 500.0)));
        assert_eq!(sim.field().len(), 20);
    }
}
