//! Line-oriented command loop.
//!
//! Each line is one command:
//!
//! | command | effect |
//! |---|---|
//! | `next`, `n` | forward trigger |
//! | `prev`, `p` | backward trigger |
//! | `jump <room>`, `j <room>` | jump to a room |
//! | `portal` | jump to the configured portal room |
//! | `status` | print the room view as JSON |
//! | `quit`, `q` | stop |
//!
//! Bad input is reported on the output and the loop carries on.

use std::io::{BufRead, Write};

use rooms_core::error::DomainError;
use rooms_presenter::application::presenter::RoomPresenter;
use rooms_presenter::domain::navigation::NavigationEvent;
use thiserror::Error;
use tracing::{info, warn};

use crate::error::AppError;

/// A parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// Deliver a navigation trigger.
    Navigate(NavigationEvent),
    /// Jump to the portal room.
    Portal,
    /// Print the room view.
    Status,
    /// Stop the loop.
    Quit,
}

/// Reasons a command line is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not recognized.
    #[error("unknown command `{0}`")]
    Unknown(String),

    /// `jump` was given without a room number.
    #[error("`jump` needs a room number")]
    MissingRoom,

    /// The room number is not an integer.
    #[error("invalid room number `{0}`")]
    InvalidRoom(String),
}

/// Parses one line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns a [`CommandError`] for unrecognized commands or malformed room
/// numbers.
pub fn parse_command(line: &str) -> Result<Option<ReplCommand>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "next" | "n" => ReplCommand::Navigate(NavigationEvent::Forward),
        "prev" | "p" => ReplCommand::Navigate(NavigationEvent::Backward),
        "jump" | "j" => {
            let raw = words.next().ok_or(CommandError::MissingRoom)?;
            let room = raw
                .parse::<i64>()
                .map_err(|_| CommandError::InvalidRoom(raw.to_owned()))?;
            ReplCommand::Navigate(NavigationEvent::Jump(room))
        }
        "portal" => ReplCommand::Portal,
        "status" => ReplCommand::Status,
        "quit" | "q" => ReplCommand::Quit,
        _ => return Err(CommandError::Unknown(word.to_owned())),
    };
    Ok(Some(command))
}

/// Runs commands from `input` against `presenter` until `quit` or end of
/// input.
///
/// # Errors
///
/// Returns `AppError::Io` if reading input or writing output fails, and
/// `AppError::Domain` if an engine collaborator fails. Rejected commands
/// and invalid jump targets are reported on `output` instead.
pub fn run(
    presenter: &mut RoomPresenter<'_>,
    input: impl BufRead,
    output: &mut impl Write,
    portal_room: i64,
) -> Result<(), AppError> {
    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, "rejected command");
                writeln!(output, "error: {e}")?;
                continue;
            }
        };

        let navigation = match command {
            ReplCommand::Quit => break,
            ReplCommand::Status => {
                serde_json::to_writer(&mut *output, &presenter.room_view())
                    .map_err(std::io::Error::from)?;
                writeln!(output)?;
                continue;
            }
            ReplCommand::Portal => NavigationEvent::Jump(portal_room),
            ReplCommand::Navigate(event) => event,
        };

        match presenter.on_navigation_trigger(navigation) {
            Ok(()) => {}
            Err(e @ DomainError::InvalidArgument(_)) => writeln!(output, "error: {e}")?,
            Err(e) => return Err(e.into()),
        }
    }

    info!(
        room = presenter.sequencer().current_room(),
        "command loop finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_accepts_long_and_short_forms() {
        let cases = [
            ("next", ReplCommand::Navigate(NavigationEvent::Forward)),
            ("N", ReplCommand::Navigate(NavigationEvent::Forward)),
            ("prev", ReplCommand::Navigate(NavigationEvent::Backward)),
            ("p", ReplCommand::Navigate(NavigationEvent::Backward)),
            ("jump 25", ReplCommand::Navigate(NavigationEvent::Jump(25))),
            ("  j   -4 ", ReplCommand::Navigate(NavigationEvent::Jump(-4))),
            ("portal", ReplCommand::Portal),
            ("status", ReplCommand::Status),
            ("q", ReplCommand::Quit),
        ];

        for (line, expected) in cases {
            assert_eq!(parse_command(line), Ok(Some(expected)), "line {line:?}");
        }
    }

    #[test]
    fn test_parse_command_skips_blank_lines() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   \t"), Ok(None));
    }

    #[test]
    fn test_parse_command_reports_bad_input() {
        assert_eq!(
            parse_command("fly"),
            Err(CommandError::Unknown("fly".to_owned()))
        );
        assert_eq!(parse_command("jump"), Err(CommandError::MissingRoom));
        assert_eq!(
            parse_command("jump ten"),
            Err(CommandError::InvalidRoom("ten".to_owned()))
        );
    }
}
