//! Timer module - the one-shot drop deadline

/// One-shot drop timer on an injected millisecond clock.
///
/// At most one deadline is pending: [`DropTimer::restart`] replaces any
/// previous deadline, so ticks never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTimer {
    interval_ms: u64,
    deadline_ms: Option<u64>,
}

impl DropTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            deadline_ms: None,
        }
    }

    /// Cancel any pending deadline and schedule a new one at `now + interval`.
    pub fn restart(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        matches!(self.deadline_ms, Some(d) if now_ms >= d)
    }

    /// Milliseconds left before the deadline (0 when due), `None` when idle.
    pub fn time_until(&self, now_ms: u64) -> Option<u64> {
        self.deadline_ms.map(|d| d.saturating_sub(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_idle() {
        let t = DropTimer::new(1000);
        assert!(!t.is_pending());
        assert!(!t.is_due(u64::MAX));
        assert_eq!(t.time_until(0), None);
    }

    #[test]
    fn restart_replaces_pending_deadline() {
        let mut t = DropTimer::new(1000);
        t.restart(0);
        t.restart(400);
        assert_eq!(t.deadline_ms(), Some(1400));
        assert!(!t.is_due(1000));
        assert!(t.is_due(1400));
    }

    #[test]
    fn time_until_counts_down_to_zero() {
        let mut t = DropTimer::new(1000);
        t.restart(100);
        assert_eq!(t.time_until(100), Some(1000));
        assert_eq!(t.time_until(900), Some(200));
        assert_eq!(t.time_until(5000), Some(0));
    }

    #[test]
    fn cancel_clears_deadline() {
        let mut t = DropTimer::new(1000);
        t.restart(0);
        t.cancel();
        assert!(!t.is_due(2000));
    }
}
