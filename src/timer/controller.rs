use std::sync::Arc;

use anyhow::Result;
use tokio::time::Duration;

use crate::ui::Display;

use super::{clock::Clock, ticker::Ticker, ControlState, Stopwatch};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

/// Owns the stopwatch and drives the display while it runs.
pub struct StopwatchController {
    stopwatch: Stopwatch,
    controls: ControlState,
    clock: Arc<dyn Clock>,
    display: Arc<dyn Display>,
    ticker: Option<Ticker>,
    tick_interval: Duration,
}

impl StopwatchController {
    pub fn new(clock: Arc<dyn Clock>, display: Arc<dyn Display>, tick_interval: Duration) -> Self {
        Self {
            stopwatch: Stopwatch::new(),
            controls: ControlState::IDLE,
            clock,
            display,
            ticker: None,
            tick_interval,
        }
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn controls(&self) -> ControlState {
        self.controls
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(Ticker::is_active)
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.stopwatch.elapsed_ms(self.clock.now_ms())
    }

    pub fn formatted(&self) -> String {
        self.stopwatch.formatted(self.clock.now_ms())
    }

    pub fn start(&mut self) {
        let now = self.clock.now_ms();
        if !self.stopwatch.start(now) {
            return;
        }

        // The tick task only needs a frozen copy: elapsed time while running
        // is a pure function of the epoch and the clock.
        let snapshot = self.stopwatch.clone();
        let clock = self.clock.clone();
        let display = self.display.clone();
        self.ticker = Some(Ticker::spawn(self.tick_interval, move || {
            display.show_time(&snapshot.formatted(clock.now_ms()));
        }));

        log_info!(
            "stopwatch started with {}ms already accumulated",
            self.stopwatch.accumulated_ms()
        );
        self.set_controls(ControlState::RUNNING);
    }

    /// Returns the frozen reading, or `None` if the stopwatch was not running.
    pub async fn stop(&mut self) -> Result<Option<String>> {
        let now = self.clock.now_ms();
        if !self.stopwatch.is_running() {
            return Ok(None);
        }

        self.cancel_ticker().await;

        let formatted = self.stopwatch.stop(now);
        if let Some(time) = formatted.as_deref() {
            self.display.show_time(time);
            log_info!("stopwatch stopped at {time}");
        }
        self.set_controls(ControlState::STOPPED);
        Ok(formatted)
    }

    pub async fn reset(&mut self) -> Result<String> {
        self.cancel_ticker().await;

        let formatted = self.stopwatch.reset();
        self.display.show_time(&formatted);
        self.set_controls(ControlState::IDLE);
        log_info!("stopwatch reset");
        Ok(formatted)
    }

    /// Stops ticking without touching the reading.
    pub async fn shutdown(&mut self) {
        self.cancel_ticker().await;
    }

    async fn cancel_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            if let Err(err) = ticker.stop().await {
                log_warn!("tick task ended abnormally: {err:?}");
            }
        }
    }

    fn set_controls(&mut self, controls: ControlState) {
        self.controls = controls;
        self.display.set_controls(controls);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::timer::{clock::ManualClock, ZERO_TIME};

    #[derive(Default)]
    struct CapturingDisplay {
        times: Mutex<Vec<String>>,
        controls: Mutex<Vec<ControlState>>,
    }

    impl CapturingDisplay {
        fn last_time(&self) -> Option<String> {
            self.times.lock().unwrap().last().cloned()
        }

        fn last_controls(&self) -> Option<ControlState> {
            self.controls.lock().unwrap().last().copied()
        }
    }

    impl Display for CapturingDisplay {
        fn show_time(&self, formatted: &str) {
            self.times.lock().unwrap().push(formatted.to_string());
        }

        fn show_records(&self, _records: &[String]) {}

        fn set_controls(&self, controls: ControlState) {
            self.controls.lock().unwrap().push(controls);
        }
    }

    fn controller() -> (StopwatchController, ManualClock, Arc<CapturingDisplay>) {
        let clock = ManualClock::new();
        let display = Arc::new(CapturingDisplay::default());
        let controller = StopwatchController::new(
            Arc::new(clock.clone()),
            display.clone(),
            Duration::from_millis(5),
        );
        (controller, clock, display)
    }

    #[tokio::test]
    async fn stop_after_simulated_wait_reports_elapsed() {
        let (mut controller, clock, display) = controller();

        controller.start();
        assert!(controller.is_ticking());
        assert_eq!(display.last_controls(), Some(ControlState::RUNNING));

        clock.advance(1_500);
        let time = controller.stop().await.unwrap();

        assert_eq!(time.as_deref(), Some("00:01:500"));
        assert!(!controller.is_ticking());
        assert_eq!(display.last_time().as_deref(), Some("00:01:500"));
        assert_eq!(controller.controls(), ControlState::STOPPED);
    }

    #[tokio::test]
    async fn ticks_publish_running_time() {
        let (mut controller, clock, display) = controller();

        controller.start();
        clock.advance(2_250);
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(display.last_time().as_deref(), Some("00:02:250"));
        controller.shutdown().await;
    }

    #[tokio::test]
    async fn stop_when_idle_is_a_no_op() {
        let (mut controller, _clock, display) = controller();

        assert_eq!(controller.stop().await.unwrap(), None);
        assert_eq!(controller.controls(), ControlState::IDLE);
        assert!(display.last_controls().is_none());
    }

    #[tokio::test]
    async fn double_start_keeps_first_epoch() {
        let (mut controller, clock, _display) = controller();

        controller.start();
        clock.advance(300);
        controller.start();
        clock.advance(200);

        assert_eq!(controller.elapsed_ms(), 500);
        assert_eq!(controller.stop().await.unwrap().as_deref(), Some("00:00:500"));
    }

    #[tokio::test]
    async fn reset_returns_to_idle_zero() {
        let (mut controller, clock, display) = controller();

        controller.start();
        clock.advance(4_000);
        controller.stop().await.unwrap();

        assert_eq!(controller.reset().await.unwrap(), ZERO_TIME);
        assert_eq!(controller.elapsed_ms(), 0);
        assert_eq!(controller.controls(), ControlState::IDLE);
        assert_eq!(display.last_time().as_deref(), Some(ZERO_TIME));

        // Also from running.
        controller.start();
        clock.advance(700);
        assert_eq!(controller.reset().await.unwrap(), ZERO_TIME);
        assert!(!controller.is_ticking());
        assert!(!controller.stopwatch().is_running());
    }
}
