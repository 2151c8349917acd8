pub mod command;
pub mod terminal;

use anyhow::Result;

use crate::timer::ControlState;

pub use command::Command;
pub use terminal::{TerminalDisplay, TerminalUi};

/// Output surfaces of the stopwatch screen.
///
/// `show_time` is called from the tick task as well as the UI task, hence
/// `Send + Sync`.
pub trait Display: Send + Sync {
    fn show_time(&self, formatted: &str);
    fn show_records(&self, records: &[String]);
    fn set_controls(&self, controls: ControlState);
}

/// Modal questions put to the user.
#[allow(async_fn_in_trait)]
pub trait Prompt {
    async fn confirm(&mut self, title: &str, message: &str) -> Result<bool>;

    /// `None` when the user backs out.
    async fn prompt_text(&mut self, title: &str, message: &str) -> Result<Option<String>>;
}
