//! # Smooth Scroll
//!
//! Eased scroll animation towards a section. A [`ScrollJob`] captures its
//! start offset and target when created and its start time from the first
//! frame it sees. [`ScrollNavigator`] holds at most one job: starting a new
//! navigation replaces the one in flight, so the last click always wins.

use crate::config::ScrollConfig;

// ============================================================================
// Easing
// ============================================================================

/// Quadratic ease-out: `t(2 - t)`, mapping [0, 1] onto [0, 1].
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Scroll offset that puts `section_top` (document-relative) just under a
/// navigation bar of `nav_height`.
pub fn target_offset(section_top: f64, nav_height: f64) -> f64 {
    section_top - nav_height
}

// ============================================================================
// Scroll Job
// ============================================================================

/// Result of advancing a job by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStep {
    /// Offset to apply this frame
    pub offset: f64,
    /// Linear time fraction, clamped to [0, 1]
    pub progress: f64,
    /// Whether another frame should be scheduled
    pub keep_going: bool,
}

/// One smooth-scroll animation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollJob {
    id: u64,
    start_offset: f64,
    target_offset: f64,
    start_time: Option<f64>,
    duration_ms: f64,
    settle_distance: f64,
}

impl ScrollJob {
    pub fn new(id: u64, start_offset: f64, target_offset: f64, config: &ScrollConfig) -> Self {
        Self {
            id,
            start_offset,
            target_offset,
            start_time: None,
            duration_ms: config.duration_ms,
            settle_distance: config.settle_distance,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }

    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }

    pub fn distance(&self) -> f64 {
        self.target_offset - self.start_offset
    }

    /// Compute the offset for the frame at `now` (ms).
    pub fn step(&mut self, now: f64) -> ScrollStep {
        let start_time = *self.start_time.get_or_insert(now);
        let elapsed = (now - start_time).max(0.0);
        let progress = (elapsed / self.duration_ms).min(1.0);
        let offset = self.start_offset + self.distance() * ease_out_quad(progress);
        let keep_going =
            elapsed < self.duration_ms && (self.target_offset - offset).abs() > self.settle_distance;
        ScrollStep { offset, progress, keep_going }
    }
}

// ============================================================================
// Navigator
// ============================================================================

/// Single active scroll job with cancellation.
#[derive(Debug, Clone)]
pub struct ScrollNavigator {
    config: ScrollConfig,
    active: Option<ScrollJob>,
    next_id: u64,
}

impl ScrollNavigator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            active: None,
            next_id: 1,
        }
    }

    /// Start a job from `current` to `target`, cancelling any job in flight.
    /// Returns the new job id.
    pub fn begin(&mut self, current: f64, target: f64) -> u64 {
        if let Some(old) = self.active.take() {
            log::debug!("Scroll job {} superseded before reaching {}", old.id(), old.target_offset());
        }
        let id = self.next_id;
        self.next_id += 1;
        self.active = Some(ScrollJob::new(id, current, target, &self.config));
        id
    }

    /// Advance the active job. `None` when idle.
    ///
    /// The job is dropped once its step reports `keep_going == false`.
    pub fn advance(&mut self, now: f64) -> Option<ScrollStep> {
        let job = self.active.as_mut()?;
        let step = job.step(now);
        if !step.keep_going {
            log::trace!("Scroll job {} settled at {}", job.id(), step.offset);
            self.active = None;
        }
        Some(step)
    }

    /// Drop the active job, if any.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ScrollJob> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(0.5), 0.75);
        assert_eq!(ease_out_quad(1.0), 1.0);
    }

    #[test]
    fn test_job_first_frame_sets_origin() {
        let mut job = ScrollJob::new(1, 100.0, 500.0, &ScrollConfig::default());
        let step = job.step(2_000.0);
        assert_eq!(step.offset, 100.0);
        assert_eq!(step.progress, 0.0);
        assert!(step.keep_going);

        let step = job.step(2_300.0);
        assert_eq!(step.progress, 0.5);
        assert_eq!(step.offset, 100.0 + 400.0 * 0.75);
    }

    #[test]
    fn test_job_stops_at_duration() {
        let mut job = ScrollJob::new(1, 0.0, 5_000.0, &ScrollConfig::default());
        job.step(0.0);
        let step = job.step(600.0);
        assert_eq!(step.offset, 5_000.0);
        assert!(!step.keep_going);

        // Late frames clamp instead of overshooting
        assert_eq!(job.step(900.0).offset, 5_000.0);
    }

    #[test]
    fn test_zero_distance_stops_immediately() {
        let mut nav = ScrollNavigator::new(ScrollConfig::default());
        nav.begin(300.0, 300.0);
        let step = nav.advance(10.0).unwrap();
        assert!(!step.keep_going);
        assert!(!nav.is_animating());
        assert!(nav.advance(20.0).is_none());
    }

    #[test]
    fn test_new_navigation_cancels_previous() {
        let mut nav = ScrollNavigator::new(ScrollConfig::default());
        let first = nav.begin(0.0, 1_000.0);
        nav.advance(0.0);
        let mid = nav.advance(200.0).unwrap().offset;

        let second = nav.begin(mid, 0.0);
        assert_ne!(first, second);
        assert_eq!(nav.active().map(ScrollJob::id), Some(second));

        // Only the second job drives the offset from here on
        let mut last = nav.advance(250.0).unwrap();
        assert_eq!(last.offset, mid);
        let mut t = 250.0;
        while last.keep_going {
            t += 16.0;
            let step = nav.advance(t).unwrap();
            assert!(step.offset <= last.offset);
            last = step;
        }
        assert!(last.offset.abs() <= 1.0);
    }

    #[test]
    fn test_cancel() {
        let mut nav = ScrollNavigator::new(ScrollConfig::default());
        assert!(!nav.cancel());
        nav.begin(0.0, 10.0);
        assert!(nav.cancel());
        assert!(nav.advance(0.0).is_none());
    }
}
