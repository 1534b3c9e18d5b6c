use std::future::{Future, pending};
use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// One-shot quiet-period timer. Each [`arm`](Debouncer::arm) pushes the
/// deadline out by the full quiet period, so a burst of edits yields a
/// single expiry, for the last edit. [`wait`](Debouncer::wait) snapshots the
/// current deadline into a detached future (it pends forever while
/// disarmed), which makes it safe to race inside `tokio::select!`; the
/// caller disarms after acting on an expiry.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    pub fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.quiet);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Resolves when the quiet period elapses; pends forever while disarmed.
    pub fn wait(&self) -> impl Future<Output = ()> + Send + 'static {
        let deadline = self.deadline;
        async move {
            match deadline {
                Some(at) => sleep_until(at).await,
                None => pending().await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, timeout};

    #[tokio::test(start_paused = true)]
    async fn rapid_rearms_coalesce_into_one_expiry() {
        let mut d = Debouncer::new(Duration::from_millis(200));
        for _ in 0..5 {
            d.arm();
            advance(Duration::from_millis(100)).await;
        }
        // Last arm was 100ms ago; the deadline is 100ms out.
        assert!(timeout(Duration::from_millis(150), d.wait()).await.is_ok());

        // Acting on the expiry disarms; the next wait pends until re-armed.
        d.disarm();
        assert!(timeout(Duration::from_millis(500), d.wait()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn disarm_cancels_a_pending_expiry() {
        let mut d = Debouncer::new(Duration::from_millis(200));
        d.arm();
        d.disarm();
        assert!(!d.is_armed());
        assert!(timeout(Duration::from_millis(500), d.wait()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn wait_snapshots_the_deadline_at_creation() {
        let mut d = Debouncer::new(Duration::from_millis(200));
        d.arm();
        let stale = d.wait();
        d.arm();
        // The snapshot keeps the earlier deadline; racing code recreates the
        // future after every event, so this only matters within one round.
        assert!(timeout(Duration::from_millis(250), stale).await.is_ok());
    }
}
