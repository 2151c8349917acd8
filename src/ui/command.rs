use std::str::FromStr;

use anyhow::{anyhow, bail, Error};

/// One line of terminal input, mapped onto the screen's buttons and gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Reset,
    List,
    /// Long-press on the record shown at this 1-based position.
    Delete(usize),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  start        start (or resume) the stopwatch
  stop         stop and offer to save the time
  reset        clear the stopped time
  list         show saved times
  delete <n>   delete saved time number n
  help         show this text
  quit         exit";

impl FromStr for Command {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "start" | "s" => Command::Start,
            "stop" | "x" => Command::Stop,
            "reset" | "r" => Command::Reset,
            "list" | "ls" | "l" => Command::List,
            "delete" | "del" | "rm" => {
                let raw = words
                    .next()
                    .ok_or_else(|| anyhow!("delete needs a record number"))?;
                let position: usize = raw
                    .parse()
                    .map_err(|_| anyhow!("'{raw}' is not a record number"))?;
                if position == 0 {
                    bail!("record numbers start at 1");
                }
                Command::Delete(position)
            }
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("unknown command '{other}' (try 'help')"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected argument '{extra}'");
        }
        Ok(command)
    }
}
