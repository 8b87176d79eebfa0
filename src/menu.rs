//! Interactive menu driving a [`PieceQueue`] over line-based text streams.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;
use tracing::{info, warn};

use crate::error::QueueError;
use crate::queue::PieceQueue;

/// A menu selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    /// Play the front piece and refill the queue (`1`).
    Play,
    /// Redraw the preview (`2`).
    Refresh,
    /// Leave the menu (`0`).
    Exit,
}

/// Input that names no menu entry.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid menu option: {0:?}")]
pub struct InvalidAction(pub String);

impl FromStr for Action {
    type Err = InvalidAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Action::Play),
            "2" => Ok(Action::Refresh),
            "0" => Ok(Action::Exit),
            other => Err(InvalidAction(other.to_owned())),
        }
    }
}

const MENU: &str = "\n--- Actions ---\n\
                    1. Play the front piece\n\
                    2. Refresh view\n\
                    0. Exit\n\
                    Select: ";

/// Runs the menu until `Exit` is chosen or `input` is exhausted.
///
/// Each round prints the queue preview and the menu, reads one line and
/// applies it. Only I/O failures end the loop early.
pub fn run<R, I, O>(queue: &mut PieceQueue<R>, input: I, mut output: O) -> io::Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut lines = input.lines();
    loop {
        write!(output, "\n{}", queue)?;
        write!(output, "{}", MENU)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                info!("input closed, leaving menu");
                writeln!(output)?;
                return Ok(());
            }
        };
        writeln!(output)?;

        match line.parse::<Action>() {
            Ok(Action::Play) => match queue.play() {
                Ok(played) => {
                    writeln!(output, "Removed piece: {}", played.removed)?;
                    writeln!(output, "New piece inserted: {}", played.inserted)?;
                }
                Err(QueueError::Underflow(_)) => {
                    writeln!(output, "Error: queue is empty, no pieces available.")?;
                }
                Err(err @ QueueError::CapacityExceeded(_)) => {
                    writeln!(output, "Error: {}.", err)?;
                }
            },
            Ok(Action::Refresh) => writeln!(output, "View refreshed.")?,
            Ok(Action::Exit) => {
                writeln!(output, "Shutting down...")?;
                return Ok(());
            }
            Err(err) => {
                warn!(%err, "ignoring menu input");
                writeln!(output, "Invalid option.")?;
            }
        }
    }
}
