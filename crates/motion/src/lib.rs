//! # Portfolio Motion
//!
//! Animation and interaction engine for the portfolio site.
//! Platform-independent: the browser crate binds these state machines to
//! the canvas, `requestAnimationFrame`, `IntersectionObserver` and
//! `window.scrollTo`.
//!
//! ## Modules
//!
//! - [`particles`]: Particle model and the resize-adaptive particle field
//! - [`simulator`]: Scoped simulator owning a field and a drawing [`Surface`]
//! - [`reveal`]: One-shot per-section reveal state machine
//! - [`scroll`]: Eased scroll jobs and the single-job navigator
//! - [`sections`]: The static navigation list
//! - [`config`]: Tunables, loadable from JSON
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Portfolio Motion                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Particle Field Simulator                                       │
//! │  ├── count = min(max_count, floor(area / area_per_particle))    │
//! │  ├── Toroidal wraparound on every tick                          │
//! │  └── Rescale + truncate/append on resize                        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Section Reveal Tracker                                         │
//! │  └── Hidden -> Pending -> Revealed (never reverts)              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Smooth Scroll Navigator                                        │
//! │  ├── t(2 - t) ease-out over a fixed duration                    │
//! │  └── One active job; a new navigation cancels the old one       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod simulator;

pub use config::{MotionConfig, ParticleConfig, RevealConfig, ScrollConfig, Span};
pub use error::{ConfigError, SectionError};
pub use geometry::{Rgba, Viewport};
pub use particles::{Particle, ParticleField};
pub use reveal::{RevealAction, RevealState, SectionReveal};
pub use scroll::{ease_out_quad, ScrollJob, ScrollNavigator, ScrollStep};
pub use sections::{Section, NAV_ITEMS};
pub use simulator::{ParticleSimulator, SimulatorState, Surface};
