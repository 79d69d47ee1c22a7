//! Suspension state machine
//!
//! Sequences programmatic scrolls against new navigation intents and passive
//! detection: `Idle → Navigating → Settling → Idle`.
//!
//! | State        | navigation blocked | observer suppressed |
//! |--------------|--------------------|---------------------|
//! | `Idle`       | no                 | no                  |
//! | `Navigating` | yes                | yes                 |
//! | `Settling`   | no                 | yes                 |
//!
//! The windows are time based: the host gives no reliable "animation
//! finished" signal, so completion is estimated with two timeouts. A host that
//! does report scroll end can shorten them through [`Suspension::scroll_ended`].

use std::time::{Duration, Instant};

use folio_core::deadline_after;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Suspension {
    #[default]
    Idle,
    /// A programmatic scroll is in flight
    Navigating {
        lock_until: Instant,
        release_until: Instant,
    },
    /// Navigation is allowed again but the observer is still muted
    Settling { release_until: Instant },
}

impl Suspension {
    /// Enter `Navigating` for a scroll starting at `now`.
    ///
    /// Observer suppression never ends before the navigation lock.
    pub fn begin(now: Instant, lock: Duration, suppress: Duration) -> Self {
        let lock_until = deadline_after(now, lock);
        let release_until = deadline_after(now, suppress).max(lock_until);
        Suspension::Navigating {
            lock_until,
            release_until,
        }
    }

    pub fn navigation_in_flight(&self) -> bool {
        matches!(self, Suspension::Navigating { .. })
    }

    pub fn observer_suppressed(&self) -> bool {
        !matches!(self, Suspension::Idle)
    }

    /// Apply every deadline that has passed at `now`.
    pub fn advance(self, now: Instant) -> Self {
        let mut state = self;
        loop {
            let next = match state {
                Suspension::Navigating {
                    lock_until,
                    release_until,
                } if now >= lock_until => Suspension::Settling { release_until },
                Suspension::Settling { release_until } if now >= release_until => {
                    Suspension::Idle
                }
                other => return other,
            };
            state = next;
        }
    }

    /// The host reported that the smooth scroll finished.
    ///
    /// Releases the navigation lock and keeps the observer muted for at most
    /// `grace` more.
    pub fn scroll_ended(self, now: Instant, grace: Duration) -> Self {
        match self {
            Suspension::Navigating { release_until, .. } => Suspension::Settling {
                release_until: release_until.min(deadline_after(now, grace)),
            },
            other => other,
        }
    }

    /// Earliest instant at which this state changes on its own
    pub fn next_deadline(&self) -> Option<Instant> {
        match self {
            Suspension::Idle => None,
            Suspension::Navigating { lock_until, .. } => Some(*lock_until),
            Suspension::Settling { release_until } => Some(*release_until),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Suspension::Idle => "idle",
            Suspension::Navigating { .. } => "navigating",
            Suspension::Settling { .. } => "settling",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCK: Duration = Duration::from_millis(1000);
    const SUPPRESS: Duration = Duration::from_millis(1500);

    #[test]
    fn test_begin_blocks_both() {
        let now = Instant::now();
        let s = Suspension::begin(now, LOCK, SUPPRESS);
        assert!(s.navigation_in_flight());
        assert!(s.observer_suppressed());
    }

    #[test]
    fn test_advance_walks_through_states() {
        let now = Instant::now();
        let s = Suspension::begin(now, LOCK, SUPPRESS);

        let s = s.advance(now + Duration::from_millis(999));
        assert!(s.navigation_in_flight());

        let s = s.advance(now + LOCK);
        assert!(matches!(s, Suspension::Settling { .. }));
        assert!(!s.navigation_in_flight());
        assert!(s.observer_suppressed());

        let s = s.advance(now + SUPPRESS);
        assert_eq!(s, Suspension::Idle);
    }

    #[test]
    fn test_advance_skips_settling_when_both_expired() {
        let now = Instant::now();
        let s = Suspension::begin(now, LOCK, SUPPRESS).advance(now + Duration::from_secs(5));
        assert_eq!(s, Suspension::Idle);
    }

    #[test]
    fn test_suppression_not_shorter_than_lock() {
        let now = Instant::now();
        let s = Suspension::begin(now, LOCK, Duration::from_millis(200));
        let s = s.advance(now + Duration::from_millis(500));
        assert!(s.observer_suppressed());
        assert!(s.navigation_in_flight());
    }

    #[test]
    fn test_scroll_ended_releases_lock() {
        let now = Instant::now();
        let grace = Duration::from_millis(100);
        let s = Suspension::begin(now, LOCK, SUPPRESS);

        let ended_at = now + Duration::from_millis(300);
        let s = s.scroll_ended(ended_at, grace);
        assert!(!s.navigation_in_flight());
        assert!(s.observer_suppressed());
        assert_eq!(s.next_deadline(), Some(ended_at + grace));

        assert_eq!(s.advance(ended_at + grace), Suspension::Idle);
    }

    #[test]
    fn test_scroll_ended_when_idle_is_noop() {
        let now = Instant::now();
        let s = Suspension::Idle.scroll_ended(now, Duration::from_millis(100));
        assert_eq!(s, Suspension::Idle);
    }
}
