use std::future::pending;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Restartable one-shot timer.
///
/// Every `restart` pushes the deadline back by `delay`; `cancel` disarms the
/// timer. `expired` resolves once an armed deadline passes and disarms it. It
/// is cancel safe, so it can sit in a `tokio::select!` loop.
#[derive(Debug)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn restart(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Never resolves while disarmed.
    pub async fn expired(&mut self) {
        match self.deadline {
            Some(deadline) => {
                sleep_until(deadline).await;
                self.deadline = None;
            }
            None => pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, timeout};

    const DELAY: Duration = Duration::from_millis(150);

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let mut debounce = Debounce::new(DELAY);
        let start = Instant::now();
        debounce.restart();
        assert!(debounce.is_pending());
        debounce.expired().await;
        assert!(start.elapsed() >= DELAY);
        assert!(!debounce.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_postpones_expiry() {
        let mut debounce = Debounce::new(DELAY);
        let start = Instant::now();
        debounce.restart();
        advance(Duration::from_millis(100)).await;
        debounce.restart();
        debounce.expired().await;
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_never_fires() {
        let mut debounce = Debounce::new(DELAY);
        debounce.restart();
        debounce.cancel();
        assert!(timeout(Duration::from_secs(5), debounce.expired())
            .await
            .is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_wait_keeps_deadline() {
        let mut debounce = Debounce::new(DELAY);
        debounce.restart();
        assert!(timeout(Duration::from_millis(50), debounce.expired())
            .await
            .is_err());
        assert!(debounce.is_pending());
        debounce.expired().await;
        assert!(!debounce.is_pending());
    }
}
