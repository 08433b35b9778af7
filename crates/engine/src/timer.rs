//! Cooperative repeating tick timer.
//!
//! The timer never runs code on its own. The event loop asks
//! [`TickTimer::time_until_next`] how long it may block, then calls
//! [`TickTimer::poll`] and ticks the game when it returns true. Only one
//! schedule exists at a time, so re-arming can never produce a second,
//! overlapping tick source.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start the timer. The first firing is one `interval` after `now`.
    pub fn arm(&mut self, now: Instant, interval: Duration) {
        self.interval = interval;
        self.next_due = Some(now + interval);
    }

    /// Stop firing until the next `arm`.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Interval of the active schedule; `None` while canceled.
    pub fn interval(&self) -> Option<Duration> {
        self.next_due.map(|_| self.interval)
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Time left before the next firing; zero when overdue.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.checked_duration_since(now).unwrap_or(Duration::ZERO))
    }

    /// Fire at most once if due.
    ///
    /// The next firing keeps the existing cadence. If the caller fell more
    /// than an interval behind, the schedule restarts from `now` instead of
    /// replaying the missed ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next_due = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_150: Duration = Duration::from_millis(150);

    #[test]
    fn new_timer_is_idle() {
        let mut timer = TickTimer::new();
        let now = Instant::now();
        assert!(!timer.is_armed());
        assert_eq!(timer.interval(), None);
        assert_eq!(timer.time_until_next(now), None);
        assert!(!timer.poll(now + Duration::from_secs(10)));
    }

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let mut timer = TickTimer::new();
        timer.arm(t0, MS_150);

        assert!(!timer.poll(t0));
        assert!(!timer.poll(t0 + Duration::from_millis(149)));
        assert!(timer.poll(t0 + MS_150));
        assert!(!timer.poll(t0 + MS_150));
        assert!(timer.poll(t0 + Duration::from_millis(300)));
    }

    #[test]
    fn keeps_cadence_when_polled_late() {
        let t0 = Instant::now();
        let mut timer = TickTimer::new();
        timer.arm(t0, MS_150);

        assert!(timer.poll(t0 + Duration::from_millis(160)));
        assert_eq!(timer.next_due(), Some(t0 + Duration::from_millis(300)));
    }

    #[test]
    fn does_not_burst_after_stall() {
        let t0 = Instant::now();
        let mut timer = TickTimer::new();
        timer.arm(t0, MS_150);

        let late = t0 + Duration::from_secs(2);
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.next_due(), Some(late + MS_150));
    }

    #[test]
    fn cancel_stops_firing() {
        let t0 = Instant::now();
        let mut timer = TickTimer::new();
        timer.arm(t0, MS_150);
        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.poll(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn rearm_replaces_schedule() {
        let t0 = Instant::now();
        let mut timer = TickTimer::new();
        timer.arm(t0, MS_150);

        let t1 = t0 + Duration::from_millis(100);
        timer.arm(t1, Duration::from_millis(70));
        assert_eq!(timer.interval(), Some(Duration::from_millis(70)));
        assert!(!timer.poll(t0 + MS_150));
        assert!(timer.poll(t1 + Duration::from_millis(70)));
    }

    #[test]
    fn time_until_next_saturates() {
        let t0 = Instant::now();
        let mut timer = TickTimer::new();
        timer.arm(t0, MS_150);

        assert_eq!(timer.time_until_next(t0), Some(MS_150));
        assert_eq!(
            timer.time_until_next(t0 + Duration::from_secs(1)),
            Some(Duration::ZERO)
        );
    }
}
