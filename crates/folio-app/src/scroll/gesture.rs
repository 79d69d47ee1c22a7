//! Wheel gesture accumulator
//!
//! Successive wheel events within the debounce window add up to one gesture.
//! Every event restarts the window; only the latest deadline counts.

use std::time::{Duration, Instant};

use folio_core::deadline_after;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelGesture {
    sum: f64,
    deadline: Option<Instant>,
}

impl WheelGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a wheel delta and restart the window at `now + debounce`.
    pub fn push(&mut self, delta: f64, now: Instant, debounce: Duration) {
        self.sum += delta;
        self.deadline = Some(deadline_after(now, debounce));
    }

    /// Take the accumulated delta once the window has elapsed.
    ///
    /// The accumulator is reset whenever a value is returned.
    pub fn take_due(&mut self, now: Instant) -> Option<f64> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                let sum = self.sum;
                self.cancel();
                Some(sum)
            }
            _ => None,
        }
    }

    /// Drop the pending gesture without evaluating it.
    pub fn cancel(&mut self) {
        self.sum = 0.0;
        self.deadline = None;
    }

    pub fn is_open(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(150);

    #[test]
    fn test_push_accumulates() {
        let now = Instant::now();
        let mut g = WheelGesture::new();
        g.push(4.0, now, DEBOUNCE);
        g.push(-1.5, now, DEBOUNCE);
        assert_eq!(g.sum(), 2.5);
        assert!(g.is_open());
    }

    #[test]
    fn test_push_restarts_window() {
        let now = Instant::now();
        let mut g = WheelGesture::new();
        g.push(5.0, now, DEBOUNCE);
        g.push(5.0, now + Duration::from_millis(100), DEBOUNCE);

        // First window would have closed at 150ms; the restart moves it to 250ms
        assert_eq!(g.take_due(now + Duration::from_millis(200)), None);
        assert_eq!(g.take_due(now + Duration::from_millis(250)), Some(10.0));
    }

    #[test]
    fn test_take_due_resets() {
        let now = Instant::now();
        let mut g = WheelGesture::new();
        g.push(30.0, now, DEBOUNCE);
        assert_eq!(g.take_due(now + DEBOUNCE), Some(30.0));
        assert!(!g.is_open());
        assert_eq!(g.sum(), 0.0);
        assert_eq!(g.take_due(now + DEBOUNCE * 2), None);
    }

    #[test]
    fn test_cancel_discards() {
        let now = Instant::now();
        let mut g = WheelGesture::new();
        g.push(30.0, now, DEBOUNCE);
        g.cancel();
        assert_eq!(g.take_due(now + DEBOUNCE), None);
    }
}
