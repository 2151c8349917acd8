use std::{
    io::{self, Write},
    sync::Mutex,
};

use anyhow::{Context, Result};
use tokio::io::{self as tokio_io, AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::timer::ControlState;

use super::{Command, Display, Prompt};

/// Writes the running time in place on stdout.
pub struct TerminalDisplay {
    last_width: Mutex<usize>,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self {
            last_width: Mutex::new(0),
        }
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TerminalDisplay {
    fn show_time(&self, formatted: &str) {
        let mut width = match self.last_width.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let pad = width.saturating_sub(formatted.len());
        let mut out = io::stdout().lock();
        let _ = write!(out, "\r{formatted}{:pad$}", "");
        let _ = out.flush();
        *width = formatted.len();
    }

    fn show_records(&self, records: &[String]) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out);
        if records.is_empty() {
            let _ = writeln!(out, "no saved times");
        }
        for (position, record) in records.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {record}", position + 1);
        }
        let _ = out.flush();
    }

    fn set_controls(&self, controls: ControlState) {
        let available: Vec<&str> = [
            ("start", controls.start),
            ("stop", controls.stop),
            ("reset", controls.reset),
        ]
        .into_iter()
        .filter_map(|(name, enabled)| enabled.then_some(name))
        .collect();

        let mut out = io::stdout().lock();
        let _ = writeln!(out, "\n[{}]", available.join(" | "));
        let _ = out.flush();
    }
}

/// Line-oriented input: commands and dialog answers share stdin.
pub struct TerminalUi {
    lines: Lines<BufReader<Stdin>>,
}

impl TerminalUi {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio_io::stdin()).lines(),
        }
    }

    /// Next command, or `None` at end of input. Unparseable lines are
    /// reported and skipped.
    pub async fn next_command(&mut self) -> Result<Option<Command>> {
        loop {
            let Some(line) = self.read_line().await? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => return Ok(Some(command)),
                Err(err) => println!("{err}"),
            }
        }
    }

    async fn read_line(&mut self) -> Result<Option<String>> {
        self.lines
            .next_line()
            .await
            .context("failed to read from stdin")
    }

    async fn ask(&mut self, title: &str, message: &str, hint: &str) -> Result<Option<String>> {
        print!("\n{title}: {message} {hint}");
        io::stdout().flush().context("failed to flush stdout")?;
        self.read_line().await
    }
}

impl Default for TerminalUi {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalUi {
    async fn confirm(&mut self, title: &str, message: &str) -> Result<bool> {
        let answer = self.ask(title, message, "[y/N] ").await?;
        Ok(answer.is_some_and(|line| is_yes(&line)))
    }

    async fn prompt_text(&mut self, title: &str, message: &str) -> Result<Option<String>> {
        let answer = self.ask(title, message, "(empty to cancel) ").await?;
        Ok(answer.filter(|line| !line.trim().is_empty()))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::is_yes;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("sure"));
    }
}
