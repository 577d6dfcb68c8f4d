// =============================================================================
// Portfolio Web - Browser Services
// =============================================================================
// Table of Contents:
// 1. Canvas Surface
// 2. Particle Backdrop
// 3. Section Reveal
// 4. Smooth Scroll
// =============================================================================

pub mod backdrop;
pub mod canvas;
pub mod reveal;
pub mod scroll;

pub use backdrop::ParticleBackdrop;
pub use canvas::CanvasSurface;
pub use reveal::RevealWatch;
pub use scroll::SmoothScroller;
