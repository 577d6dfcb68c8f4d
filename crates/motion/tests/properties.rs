//! End-to-end behaviour of the motion engine through its public API.

use portfolio_motion::scroll::target_offset;
use portfolio_motion::{
    ease_out_quad, MotionConfig, ParticleSimulator, RevealAction, Rgba, ScrollNavigator,
    SectionReveal, Surface, Viewport,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct Canvas {
    size: Viewport,
    mutations: usize,
}

impl Surface for Canvas {
    fn size(&self) -> Viewport {
        self.size
    }

    fn set_size(&mut self, size: Viewport) {
        self.size = size;
        self.mutations += 1;
    }

    fn wash(&mut self, _color: Rgba) {
        self.mutations += 1;
    }

    fn fill_circle(&mut self, _x: f64, _y: f64, _radius: f64, _color: Rgba) {
        self.mutations += 1;
    }
}

fn simulator(w: f64, h: f64, seed: u64) -> ParticleSimulator<Canvas> {
    ParticleSimulator::with_rng(
        Canvas::default(),
        Viewport::new(w, h),
        MotionConfig::default().particles,
        StdRng::seed_from_u64(seed),
    )
}

fn expected_count(w: f64, h: f64) -> usize {
    ((w * h / 20_000.0).floor() as usize).min(50)
}

#[test]
fn particle_count_follows_area() {
    let sizes = [
        (320.0, 568.0),
        (375.0, 812.0),
        (768.0, 1024.0),
        (1366.0, 768.0),
        (1920.0, 1080.0),
        (3840.0, 2160.0),
        (141.0, 141.0),
        (1.0, 1.0),
    ];
    for (i, (w, h)) in sizes.into_iter().enumerate() {
        let sim = simulator(w, h, i as u64);
        assert_eq!(sim.field().len(), expected_count(w, h), "{w}x{h}");
    }
}

#[test]
fn particles_stay_on_the_torus() {
    let mut sim = simulator(300.0, 200.0, 3);
    assert_eq!(sim.field().len(), 3);
    for _ in 0..5_000 {
        sim.tick();
        let bounds = sim.field().bounds();
        for p in sim.field().iter() {
            assert!(p.x >= 0.0 && p.x < bounds.width, "x = {}", p.x);
            assert!(p.y >= 0.0 && p.y < bounds.height, "y = {}", p.y);
        }
    }
}

#[test]
fn resize_rescales_and_recounts() {
    let mut sim = simulator(1000.0, 500.0, 11);
    for _ in 0..10 {
        sim.tick();
    }
    let before: Vec<(f64, f64)> = sim.field().iter().map(|p| (p.x, p.y)).collect();

    sim.resize(Viewport::new(1500.0, 250.0));
    let (sx, sy) = (1500.0 / 1000.0, 250.0 / 500.0);
    for (&(x, y), p) in before.iter().zip(sim.field().iter()) {
        assert_eq!(p.x, x * sx);
        assert_eq!(p.y, y * sy);
    }
    assert_eq!(sim.field().len(), expected_count(1500.0, 250.0));
    assert_eq!(sim.surface().size(), Viewport::new(1500.0, 250.0));

    sim.resize(Viewport::new(2400.0, 1600.0));
    assert_eq!(sim.field().len(), expected_count(2400.0, 1600.0));
}

#[test]
fn section_reveals_at_most_once() {
    let mut reveal = SectionReveal::new();
    let mut transitions = 0;
    let events = [false, true, true, false, true, true, false, true];
    for visible in events {
        if reveal.on_intersect(visible) == RevealAction::ScheduleCommit && reveal.commit() {
            transitions += 1;
        }
    }
    assert_eq!(transitions, 1);
    assert!(reveal.is_revealed());
    assert!(!reveal.is_watching());
}

#[test]
fn scroll_reaches_section_under_navbar() {
    let config = MotionConfig::default().scroll;
    let target = target_offset(1000.0, 80.0);
    assert_eq!(target, 920.0);

    let mut nav = ScrollNavigator::new(config);
    nav.begin(0.0, target);

    let start = 5_000.0;
    let mut now = start;
    let mut previous = 0.0;
    loop {
        let step = nav.advance(now).expect("job still active");
        assert!(step.offset >= previous);
        assert!((step.offset - 920.0 * ease_out_quad(step.progress)).abs() < 1e-9);
        previous = step.offset;
        if !step.keep_going {
            break;
        }
        now += 1000.0 / 60.0;
    }

    assert!((previous - 920.0).abs() <= 1.0);
    assert!(now - start <= 600.0);
    assert!(!nav.is_animating());
}

#[test]
fn teardown_freezes_the_field() {
    let mut sim = simulator(1280.0, 720.0, 5);
    sim.tick();
    let count = sim.field().len();
    assert!(count > 0);

    sim.teardown();
    let mutations = sim.surface().mutations;
    for _ in 0..10 {
        assert!(!sim.tick());
    }
    sim.resize(Viewport::new(2560.0, 1440.0));
    sim.resize(Viewport::new(320.0, 240.0));

    assert_eq!(sim.surface().mutations, mutations);
    assert_eq!(sim.field().len(), 0);
    sim.teardown();
}
