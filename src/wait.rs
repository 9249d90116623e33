//! Timers and Bounded Waiting
//!
//! `wait_until` polls a predicate at a fixed interval until it holds or the
//! time budget is spent.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Something that can suspend the current task for a while
#[async_trait(?Send)]
pub trait Timer: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Browser timer backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("condition not met within {}ms", .waited.as_millis())]
pub struct WaitTimedOut {
    pub waited: Duration,
}

/// Poll `ready` every `interval` for at most `timeout`.
///
/// The predicate is checked before the first sleep and after each one, so a
/// condition that is already true never sleeps.
pub async fn wait_until<T, F>(
    timer: &T,
    mut ready: F,
    interval: Duration,
    timeout: Duration,
) -> Result<(), WaitTimedOut>
where
    T: Timer + ?Sized,
    F: FnMut() -> bool,
{
    let max_sleeps = if interval.is_zero() {
        0
    } else {
        (timeout.as_millis() / interval.as_millis().max(1)) as u64
    };

    let mut waited = Duration::ZERO;
    for attempt in 0..=max_sleeps {
        if ready() {
            return Ok(());
        }
        if attempt == max_sleeps {
            break;
        }
        timer.sleep(interval).await;
        waited += interval;
    }

    Err(WaitTimedOut { waited })
}


#[cfg(test)]
mod tests {
    use super::testing::InstantTimer;
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(50);
    const TIMEOUT: Duration = Duration::from_millis(5000);

    #[tokio::test]
    async fn test_ready_immediately_never_sleeps() {
        let timer = InstantTimer::default();
        let result = wait_until(&timer, || true, INTERVAL, TIMEOUT).await;
        assert!(result.is_ok());
        assert_eq!(timer.sleep_count(), 0);
    }

    #[tokio::test]
    async fn test_ready_after_a_few_polls() {
        let timer = InstantTimer::default();
        let mut polls = 0;
        let result = wait_until(
            &timer,
            || {
                polls += 1;
                polls == 4
            },
            INTERVAL,
            TIMEOUT,
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(timer.sleep_count(), 3);
        assert_eq!(timer.total_slept(), Duration::from_millis(150));
    }

    #[tokio::test]
    async fn test_gives_up_after_timeout() {
        let timer = InstantTimer::default();
        let mut polls = 0;
        let result = wait_until(
            &timer,
            || {
                polls += 1;
                false
            },
            INTERVAL,
            TIMEOUT,
        )
        .await;
        assert_eq!(result, Err(WaitTimedOut { waited: TIMEOUT }));
        assert_eq!(timer.sleep_count(), 100);
        assert_eq!(polls, 101);
    }
}
