pub mod clock;
pub mod controller;
pub mod format;
pub mod state;
pub mod ticker;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use controller::StopwatchController;
pub use format::{format_elapsed, ZERO_TIME};
pub use state::{ControlState, Stopwatch, TimerStatus};
pub use ticker::Ticker;
