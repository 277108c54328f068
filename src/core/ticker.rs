//! Periodic refresh schedule for the stopwatch display.
//!
//! The ticker does not own a thread: it only tracks the next deadline, and
//! the caller's loop decides when to sleep and poll. That keeps every state
//! change on the single owning thread.

use std::time::{Duration, Instant};

pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK)
    }
}

impl Ticker {
    /// A zero interval is replaced by the default one.
    pub fn new(interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            DEFAULT_TICK
        } else {
            interval
        };
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Start ticking from `now`. Returns false if already active; there is
    /// never more than one schedule.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_active() {
            return false;
        }
        self.next_due = Some(now + self.interval);
        true
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Time left until the next tick, `None` when stopped.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }

    /// Consume a due tick. Missed ticks collapse into one and the schedule
    /// restarts from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let next = due + self.interval;
                self.next_due = Some(if next > now { next } else { now + self.interval });
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SEC);
        assert!(ticker.start(t0));

        assert!(!ticker.poll(t0 + Duration::from_millis(999)));
        assert!(ticker.poll(t0 + SEC));
        assert!(!ticker.poll(t0 + SEC));
        assert!(ticker.poll(t0 + SEC * 2));
    }

    #[test]
    fn only_one_schedule_at_a_time() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SEC);
        assert!(ticker.start(t0));
        assert!(!ticker.start(t0 + Duration::from_millis(500)));
        assert_eq!(ticker.time_until_due(t0), Some(SEC));
    }

    #[test]
    fn stopped_ticker_never_fires() {
        let t0 = Instant::now();
        let mut ticker = Ticker::default();
        assert!(!ticker.poll(t0 + SEC * 10));
        ticker.start(t0);
        ticker.stop();
        assert!(!ticker.is_active());
        assert_eq!(ticker.time_until_due(t0), None);
        assert!(!ticker.poll(t0 + SEC * 10));
    }

    #[test]
    fn missed_ticks_collapse() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SEC);
        ticker.start(t0);
        assert!(ticker.poll(t0 + SEC * 5));
        assert!(!ticker.poll(t0 + SEC * 5 + Duration::from_millis(10)));
        assert_eq!(ticker.time_until_due(t0 + SEC * 5), Some(SEC));
    }

    #[test]
    fn zero_interval_uses_default() {
        assert_eq!(Ticker::new(Duration::ZERO).interval(), DEFAULT_TICK);
    }
}
