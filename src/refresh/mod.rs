use std::time::Duration;
use tokio::time::{Instant, sleep_until};

/// Paces periodic refreshes: the first tick fires immediately, later ones one interval apart.
///
/// The next deadline is kept across calls, so dropping a pending `tick` does not reset the schedule.
pub struct RefreshPacer {
    interval: Duration,
    next_at: Option<Instant>,
    tick_count: usize,
    max_ticks: Option<usize>,
}

impl RefreshPacer {
    pub fn new(interval_secs: u64) -> Self {
        Self::with_interval(Duration::from_secs(interval_secs))
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            next_at: None,
            tick_count: 0,
            max_ticks: None,
        }
    }

    pub fn with_max_ticks(mut self, max: usize) -> Self {
        self.max_ticks = Some(max);
        self
    }

    /// Wait for the next refresh; `false` once the tick budget is spent
    pub async fn tick(&mut self) -> bool {
        if self.has_reached_max() {
            return false;
        }
        if let Some(deadline) = self.next_at {
            sleep_until(deadline).await;
        }
        self.increment();
        true
    }

    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    pub fn has_reached_max(&self) -> bool {
        self.max_ticks.is_some_and(|max| self.tick_count >= max)
    }

    fn increment(&mut self) {
        self.tick_count += 1;
        self.next_at = Some(Instant::now() + self.interval);
    }
}
