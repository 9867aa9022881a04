// Reveal tracking for entrance animations
//
// The original site registers each freshly rendered widget with an
// IntersectionObserver and marks it "active" the first time it enters the
// viewport. In the terminal the same contract is driven by scroll position:
// after every render cycle the panel registers its visible widgets here,
// and as rows scroll into view each widget is notified exactly once.
//
// Registrations are keyed by a render generation. A notification carrying a
// stale generation belongs to a widget from a superseded render and is
// discarded silently - never a fault.

/// Handle identifying one registered widget within one render cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub generation: u64,
    pub index: usize,
}

/// Tracks which widgets of the current render cycle have been revealed
#[derive(Debug, Default)]
pub struct RevealTracker {
    /// Bumped on every render cycle; invalidates prior registrations
    generation: u64,
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new render cycle with `count` widgets, all unrevealed.
    /// Prior registrations become stale.
    pub fn begin_cycle(&mut self, count: usize) {
        self.generation = self.generation.wrapping_add(1);
        self.revealed.clear();
        self.revealed.resize(count, false);
    }

    /// Current render generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Registration handle for the widget at `index` in the current cycle
    pub fn registration(&self, index: usize) -> Option<Registration> {
        (index < self.revealed.len()).then_some(Registration {
            generation: self.generation,
            index,
        })
    }

    /// Deliver an "entered viewport" notification.
    ///
    /// Returns true only the first time a live registration is notified.
    /// Stale generations and out-of-range indices are discarded.
    pub fn notify_entered(&mut self, reg: Registration) -> bool {
        if reg.generation != self.generation {
            return false;
        }
        match self.revealed.get_mut(reg.index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    /// Whether the widget at `index` has been revealed this cycle
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_per_cycle() {
        let mut tracker = RevealTracker::new();
        tracker.begin_cycle(3);

        let reg = tracker.registration(1).unwrap();
        assert!(tracker.notify_entered(reg));
        // Scrolling back and forth must not replay the animation
        assert!(!tracker.notify_entered(reg));
        assert!(tracker.is_revealed(1));
        assert!(!tracker.is_revealed(0));
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut tracker = RevealTracker::new();
        tracker.begin_cycle(2);
        let old = tracker.registration(0).unwrap();

        // Re-render detaches the old widgets
        tracker.begin_cycle(2);
        assert!(!tracker.notify_entered(old));
        assert!(!tracker.is_revealed(0));

        // The fresh registration still works
        let new = tracker.registration(0).unwrap();
        assert!(tracker.notify_entered(new));
    }

    #[test]
    fn new_cycle_resets_reveal_state() {
        let mut tracker = RevealTracker::new();
        tracker.begin_cycle(1);
        let reg = tracker.registration(0).unwrap();
        assert!(tracker.notify_entered(reg));

        tracker.begin_cycle(1);
        assert!(!tracker.is_revealed(0));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut tracker = RevealTracker::new();
        tracker.begin_cycle(2);
        assert!(tracker.registration(5).is_none());

        let bogus = Registration {
            generation: tracker.generation(),
            index: 5,
        };
        assert!(!tracker.notify_entered(bogus));
    }
}
