// =============================================================================
// Portfolio Web - Site State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Site State
// 3. Config Loading
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Imports
// -----------------------------------------------------------------------------

use portfolio_motion::MotionConfig;

/// Motion tunables shipped with the site.
const MOTION_CONFIG: &str = include_str!("../motion.json");

// -----------------------------------------------------------------------------
// 2. Site State
// -----------------------------------------------------------------------------

/// Page-wide state provided via Leptos context.
#[derive(Clone, Debug)]
pub struct SiteState {
    /// Particle, reveal and scroll tunables.
    pub config: MotionConfig,
}

impl SiteState {
    /// Create the state from the embedded config.
    pub fn new() -> Self {
        Self {
            config: load_config(MOTION_CONFIG),
        }
    }
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 3. Config Loading
// -----------------------------------------------------------------------------

/// Parse `source`, falling back to the built-in defaults.
pub fn load_config(source: &str) -> MotionConfig {
    match MotionConfig::from_json(source) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring motion config: {}", err);
            MotionConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        assert!(MotionConfig::from_json(MOTION_CONFIG).is_ok());
    }

    #[test]
    fn test_falls_back_on_invalid_config() {
        let config = load_config(r#"{ "scroll": { "duration_ms": -5 } }"#);
        assert_eq!(config, MotionConfig::default());
    }

    #[test]
    fn test_falls_back_on_unsampleable_span() {
        let config = load_config(r#"{ "particles": { "speed": { "min": -1e308, "max": 1e308 } } }"#);
        assert_eq!(config.particles, MotionConfig::default().particles);
    }
}
