// Wall-clock sources and the one-shot timer that paces simulation ticks

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of wall-clock time in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Real time, measured from when the clock was created.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Virtual time that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    /// Moves to `ms`. Never goes backwards.
    pub fn set(&self, ms: u64) {
        self.now.set(self.now.get().max(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// One-shot timer for the next scheduled tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickTimer {
    due_at_ms: Option<f64>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to fire `delay_ms` after `now_ms`, replacing any pending deadline.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: f64) {
        self.due_at_ms = Some(now_ms as f64 + delay_ms.max(0.0));
    }

    /// Arms the timer for an absolute deadline.
    pub fn schedule_at(&mut self, due_at_ms: f64) {
        self.due_at_ms = Some(due_at_ms);
    }

    pub fn cancel(&mut self) {
        self.due_at_ms = None;
    }

    /// Returns true if the timer is armed and its deadline has passed
    pub fn is_ready(&self, now_ms: u64) -> bool {
        self.due_at_ms.is_some_and(|due| now_ms as f64 >= due)
    }

    pub fn due_at_ms(&self) -> Option<f64> {
        self.due_at_ms
    }

    /// Time left until the deadline, zero if overdue, `None` if not armed.
    pub fn remaining(&self, now_ms: u64) -> Option<Duration> {
        self.due_at_ms
            .map(|due| Duration::from_nanos(((due - now_ms as f64).max(0.0) * 1e6).round() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new(10);
        let handle = clock.clone();
        handle.advance(90);
        assert_eq!(clock.now_ms(), 100);
        clock.set(50);
        assert_eq!(handle.now_ms(), 100);
    }

    #[test]
    fn test_timer_fires_at_deadline() {
        let mut timer = TickTimer::new();
        assert!(!timer.is_ready(0));

        timer.schedule(1000, 100.0);
        assert_eq!(timer.due_at_ms(), Some(1100.0));
        assert!(!timer.is_ready(1099));
        assert!(timer.is_ready(1100));
        assert!(timer.is_ready(5000));
    }

    #[test]
    fn test_timer_cancel() {
        let mut timer = TickTimer::new();
        timer.schedule(0, 0.0);
        assert!(timer.is_ready(0));
        timer.cancel();
        assert!(!timer.is_ready(0));
        assert_eq!(timer.remaining(0), None);
    }

    #[test]
    fn test_timer_remaining() {
        let mut timer = TickTimer::new();
        timer.schedule(0, 250.0);
        assert_eq!(timer.remaining(100), Some(Duration::from_millis(150)));
        assert_eq!(timer.remaining(400), Some(Duration::ZERO));
    }

    #[test]
    fn test_schedule_at_absolute_deadline() {
        let mut timer = TickTimer::new();
        timer.schedule_at(1000.0 / 15.0 * 2.0);
        assert!(!timer.is_ready(133));
        assert!(timer.is_ready(134));
    }

    #[test]
    fn test_fractional_interval() {
        // 15 ticks per second
        let mut timer = TickTimer::new();
        timer.schedule(0, 1000.0 / 15.0);
        assert!(!timer.is_ready(66));
        assert!(timer.is_ready(67));
    }
}
