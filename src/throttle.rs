use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// Paces outbound requests to a fixed minimum interval. Deliberately not
/// adaptive: server pushback is not inspected, the interval is the only
/// rate-limit mitigation.
pub struct Throttle {
    interval: Duration,
    next_allowed: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_allowed: None,
        }
    }

    /// Sleeps until at least the configured interval has passed since the
    /// previous `wait` returned. The first call returns immediately.
    pub async fn wait(&mut self) {
        if let Some(at) = self.next_allowed {
            sleep_until(at).await;
        }
        self.next_allowed = Some(Instant::now() + self.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_wait_is_immediate() {
        let mut throttle = Throttle::new(Duration::from_secs(60));
        let start = std::time::Instant::now();
        throttle.wait().await;
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_second_wait_spaces_calls() {
        let mut throttle = Throttle::new(Duration::from_millis(50));
        throttle.wait().await;
        let start = std::time::Instant::now();
        throttle.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(45));
    }

    #[tokio::test]
    async fn test_zero_interval_never_sleeps_long() {
        let mut throttle = Throttle::new(Duration::ZERO);
        let start = std::time::Instant::now();
        for _ in 0..10 {
            throttle.wait().await;
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
