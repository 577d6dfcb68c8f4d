// =============================================================================
// Portfolio Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Navigation
// 2. Particle Background
// 3. Sections
// 4. Decoration
// =============================================================================

pub mod footer;
pub mod nav;
pub mod particles;
pub mod section;
pub mod separator;

pub use footer::Footer;
pub use nav::Navbar;
pub use particles::ParticleCanvas;
pub use section::{use_reveal, RevealSection};
pub use separator::{Separator, SeparatorVariant};
