use super::format::{format_elapsed, ZERO_TIME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
}

impl Default for TimerStatus {
    fn default() -> Self {
        TimerStatus::Idle
    }
}

/// Which of the start/stop/reset controls accept input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub start: bool,
    pub stop: bool,
    pub reset: bool,
}

impl ControlState {
    /// Fresh launch and after a reset.
    pub const IDLE: Self = Self {
        start: true,
        stop: false,
        reset: false,
    };
    pub const RUNNING: Self = Self {
        start: false,
        stop: true,
        reset: false,
    };
    /// Stopped with a reading worth clearing.
    pub const STOPPED: Self = Self {
        start: true,
        stop: false,
        reset: true,
    };
}

impl Default for ControlState {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Stopwatch timing state. Every transition takes the current clock
/// reading, so the struct itself never looks at a clock.
///
/// Fields are private so `Running` always comes with an epoch.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    status: TimerStatus,
    accumulated_ms: u64,
    /// Clock reading the running window counts from, already shifted back by
    /// whatever was accumulated before the last start.
    epoch_ms: Option<u64>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    /// Reading frozen at the last stop.
    pub fn accumulated_ms(&self) -> u64 {
        self.accumulated_ms
    }

    pub fn epoch_ms(&self) -> Option<u64> {
        self.epoch_ms
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match (self.status, self.epoch_ms) {
            (TimerStatus::Running, Some(epoch)) => now_ms.saturating_sub(epoch),
            _ => self.accumulated_ms,
        }
    }

    pub fn formatted(&self, now_ms: u64) -> String {
        format_elapsed(self.elapsed_ms(now_ms))
    }

    /// Returns `false` when already running.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.is_running() {
            return false;
        }
        self.epoch_ms = Some(now_ms.saturating_sub(self.accumulated_ms));
        self.status = TimerStatus::Running;
        true
    }

    /// Freezes the reading. `None` when there was nothing running to stop.
    pub fn stop(&mut self, now_ms: u64) -> Option<String> {
        if !self.is_running() {
            return None;
        }
        self.accumulated_ms = self.elapsed_ms(now_ms);
        self.status = TimerStatus::Idle;
        self.epoch_ms = None;
        Some(format_elapsed(self.accumulated_ms))
    }

    pub fn reset(&mut self) -> String {
        *self = Self::default();
        ZERO_TIME.to_string()
    }
}
