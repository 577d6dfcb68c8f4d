//! # Section Reveal
//!
//! One-shot reveal per page section. The first intersection that crosses
//! the threshold schedules a commit on the next frame; the commit flips the
//! section to [`RevealState::Revealed`] and releases the watch. A revealed
//! section never goes back; a commit that could not be scheduled returns the
//! section to `Hidden` so the next intersection tries again.
//!
//! ```text
//! Hidden ──intersect──▶ Pending ──next frame──▶ Revealed
//!   ▲                      │
//!   └──────abandon─────────┘
//! ```

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealState {
    #[default]
    Hidden,
    /// Threshold crossed, commit scheduled for the next frame
    Pending,
    Revealed,
}

/// What the caller must do after feeding an intersection event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    Ignore,
    /// Schedule [`SectionReveal::commit`] on the next display refresh
    ScheduleCommit,
}

/// Reveal state of one section plus whether its watch is still held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReveal {
    state: RevealState,
    watching: bool,
}

impl Default for SectionReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionReveal {
    pub fn new() -> Self {
        Self {
            state: RevealState::Hidden,
            watching: true,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn is_watching(&self) -> bool {
        self.watching
    }

    /// Feed one intersection event.
    pub fn on_intersect(&mut self, is_intersecting: bool) -> RevealAction {
        if !is_intersecting || !self.watching || self.state != RevealState::Hidden {
            return RevealAction::Ignore;
        }
        self.state = RevealState::Pending;
        RevealAction::ScheduleCommit
    }

    /// Complete a scheduled reveal. Returns true exactly once per section;
    /// the watch is released either way. A commit that lands after
    /// [`release`](Self::release) is dropped.
    pub fn commit(&mut self) -> bool {
        let watching = std::mem::replace(&mut self.watching, false);
        if !watching || self.state != RevealState::Pending {
            return false;
        }
        self.state = RevealState::Revealed;
        true
    }

    /// Drop a commit that never got scheduled. Only a pending section moves,
    /// back to `Hidden`; returns whether it did.
    pub fn abandon(&mut self) -> bool {
        if self.state != RevealState::Pending {
            return false;
        }
        self.state = RevealState::Hidden;
        true
    }

    /// Release the watch on unmount. Does not change the reveal state.
    pub fn release(&mut self) {
        self.watching = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_on_first_intersection() {
        let mut reveal = SectionReveal::new();
        assert_eq!(reveal.on_intersect(false), RevealAction::Ignore);
        assert_eq!(reveal.state(), RevealState::Hidden);

        assert_eq!(reveal.on_intersect(true), RevealAction::ScheduleCommit);
        assert_eq!(reveal.state(), RevealState::Pending);
        assert!(!reveal.is_revealed());

        assert!(reveal.commit());
        assert!(reveal.is_revealed());
        assert!(!reveal.is_watching());
    }

    #[test]
    fn test_pending_absorbs_repeats() {
        let mut reveal = SectionReveal::new();
        reveal.on_intersect(true);
        assert_eq!(reveal.on_intersect(true), RevealAction::Ignore);
        assert_eq!(reveal.on_intersect(false), RevealAction::Ignore);
        assert!(reveal.commit());
        assert!(!reveal.commit());
    }

    #[test]
    fn test_never_reverts() {
        let mut reveal = SectionReveal::new();
        reveal.on_intersect(true);
        reveal.commit();
        for visible in [false, true, false, true] {
            assert_eq!(reveal.on_intersect(visible), RevealAction::Ignore);
            assert!(reveal.is_revealed());
        }
    }

    #[test]
    fn test_release_before_reveal() {
        let mut reveal = SectionReveal::new();
        reveal.release();
        assert_eq!(reveal.on_intersect(true), RevealAction::Ignore);
        assert!(!reveal.commit());
        assert_eq!(reveal.state(), RevealState::Hidden);
    }

    #[test]
    fn test_release_while_pending() {
        let mut reveal = SectionReveal::new();
        reveal.on_intersect(true);
        reveal.release();
        assert!(!reveal.commit());
        assert!(!reveal.is_revealed());
    }

    #[test]
    fn test_abandoned_commit_retries() {
        let mut reveal = SectionReveal::new();
        assert_eq!(reveal.on_intersect(true), RevealAction::ScheduleCommit);
        assert!(reveal.abandon());
        assert_eq!(reveal.state(), RevealState::Hidden);
        assert!(reveal.is_watching());

        assert_eq!(reveal.on_intersect(true), RevealAction::ScheduleCommit);
        assert!(reveal.commit());
        assert!(!reveal.abandon());
        assert!(reveal.is_revealed());
    }
}
