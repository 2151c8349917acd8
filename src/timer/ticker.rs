use anyhow::{Context, Result};
use tokio::{
    task::JoinHandle,
    time::{self, Duration, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

/// Repeating task that calls `on_tick` every `period` until stopped.
///
/// The first tick fires immediately. Dropping the ticker cancels it without
/// waiting; call [`Ticker::stop`] to be sure no tick is still in flight.
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
    cancel_token: CancellationToken,
}

impl Ticker {
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let cancel_token = CancellationToken::new();
        let token = cancel_token.clone();

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = interval.tick() => on_tick(),
                }
            }
        });

        Self {
            handle: Some(handle),
            cancel_token,
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub async fn stop(&mut self) -> Result<()> {
        self.cancel_token.cancel();

        if let Some(handle) = self.handle.take() {
            handle.await.context("ticker task failed to join")
        } else {
            Ok(())
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    #[tokio::test]
    async fn ticks_until_stopped() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();

        let mut ticker = Ticker::spawn(Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(ticker.is_active());

        time::sleep(Duration::from_millis(60)).await;
        ticker.stop().await.unwrap();
        assert!(!ticker.is_active());

        let after_stop = count.load(Ordering::SeqCst);
        assert!(after_stop >= 2, "expected several ticks, saw {after_stop}");

        time::sleep(Duration::from_millis(30)).await;
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[tokio::test]
    async fn stopping_twice_is_fine() {
        let mut ticker = Ticker::spawn(Duration::from_millis(5), || {});
        ticker.stop().await.unwrap();
        ticker.stop().await.unwrap();
    }
}
