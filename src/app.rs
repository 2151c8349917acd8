use std::sync::Arc;

use anyhow::Result;

use crate::{
    records::RecordStore,
    storage::Storage,
    timer::{StopwatchController, ZERO_TIME},
    ui::{Command, Display, Prompt},
};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_error, log_info};

pub const SAVE_TITLE: &str = "Save Time";
pub const SAVE_CONFIRM_MESSAGE: &str = "Do you want to save this time?";
pub const SAVE_NAME_MESSAGE: &str = "Enter a name for this time record:";
pub const DELETE_TITLE: &str = "Delete Time";
pub const DELETE_CONFIRM_MESSAGE: &str = "Do you want to delete this time?";

/// What became of one terminal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The matching control is disabled in the current state.
    Unavailable,
    /// `delete <n>` named a position past the end of the list.
    NoSuchRecord(usize),
    ShowHelp,
    Quit,
}

/// The stopwatch screen: buttons, the saved-times list, and the dialogs
/// between them. Holds the only mutable stopwatch and record list.
pub struct StopwatchApp<S, P> {
    controller: StopwatchController,
    records: RecordStore<S>,
    prompt: P,
    display: Arc<dyn Display>,
}

impl<S: Storage, P: Prompt> StopwatchApp<S, P> {
    pub fn new(
        controller: StopwatchController,
        records: RecordStore<S>,
        prompt: P,
        display: Arc<dyn Display>,
    ) -> Self {
        Self {
            controller,
            records,
            prompt,
            display,
        }
    }

    pub fn controller(&self) -> &StopwatchController {
        &self.controller
    }

    pub fn records(&self) -> &[String] {
        self.records.entries()
    }

    pub fn record_store(&self) -> &RecordStore<S> {
        &self.records
    }

    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    /// Loads saved times and draws the initial screen.
    pub async fn launch(&mut self) -> Result<()> {
        self.records.load().await?;
        self.display.show_records(self.records.entries());
        self.display.show_time(ZERO_TIME);
        self.display.set_controls(self.controller.controls());
        Ok(())
    }

    /// Returns `false` when the start control is disabled.
    pub fn press_start(&mut self) -> bool {
        if !self.controller.controls().start {
            return false;
        }
        self.controller.start();
        true
    }

    /// Stops the stopwatch and walks the user through saving the reading.
    /// Returns `false` when the stop control is disabled.
    pub async fn press_stop(&mut self) -> Result<bool> {
        if !self.controller.controls().stop {
            return Ok(false);
        }
        let Some(time) = self.controller.stop().await? else {
            return Ok(true);
        };

        if !self.prompt.confirm(SAVE_TITLE, SAVE_CONFIRM_MESSAGE).await? {
            return Ok(true);
        }
        let Some(label) = self
            .prompt
            .prompt_text(SAVE_TITLE, SAVE_NAME_MESSAGE)
            .await?
        else {
            return Ok(true);
        };

        match self.records.add(&label, &time).await {
            Ok(true) => {
                log_info!("saved time {time}");
                self.display.show_records(self.records.entries());
            }
            Ok(false) => {}
            Err(err) => {
                log_error!("failed to save time {time}: {err:?}");
                self.display.show_records(self.records.entries());
            }
        }
        Ok(true)
    }

    /// Returns `false` when the reset control is disabled.
    pub async fn press_reset(&mut self) -> Result<bool> {
        if !self.controller.controls().reset {
            return Ok(false);
        }
        self.controller.reset().await?;
        Ok(true)
    }

    /// Asks before deleting the record at `index` (0-based). Returns whether
    /// anything was removed.
    pub async fn long_press_record(&mut self, index: usize) -> Result<bool> {
        if !self
            .prompt
            .confirm(DELETE_TITLE, DELETE_CONFIRM_MESSAGE)
            .await?
        {
            return Ok(false);
        }

        match self.records.remove_at(index).await {
            Ok(true) => {
                self.display.show_records(self.records.entries());
                Ok(true)
            }
            Ok(false) => Ok(false),
            Err(err) => {
                log_error!("failed to delete saved time #{index}: {err:?}");
                self.display.show_records(self.records.entries());
                Ok(true)
            }
        }
    }

    /// Maps a terminal command onto the matching button or gesture.
    /// `Delete` positions are 1-based, as the list is printed.
    pub async fn handle(&mut self, command: Command) -> Result<Outcome> {
        let accepted = match command {
            Command::Start => self.press_start(),
            Command::Stop => self.press_stop().await?,
            Command::Reset => self.press_reset().await?,
            Command::List => {
                self.show_records();
                true
            }
            Command::Delete(position) => {
                if position == 0 || position > self.records.len() {
                    return Ok(Outcome::NoSuchRecord(position));
                }
                self.long_press_record(position - 1).await?;
                true
            }
            Command::Help => return Ok(Outcome::ShowHelp),
            Command::Quit => return Ok(Outcome::Quit),
        };

        Ok(if accepted {
            Outcome::Done
        } else {
            Outcome::Unavailable
        })
    }

    pub fn show_records(&self) {
        self.display.show_records(self.records.entries());
    }

    pub async fn shutdown(&mut self) {
        self.controller.shutdown().await;
    }
}
