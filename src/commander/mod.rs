// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Command-line input logic and state management.
//!
//! This module implements the `:` command line, handling a text input
//! component and dispatching the corresponding application event when a
//! command is submitted.
//!
//! | Command         | Effect                                              |
//! |-----------------|-----------------------------------------------------|
//! | `q`             | quit                                                |
//! | `import <file>` | import tune documents from a JSON export            |
//! | `reload`        | run the current Hub search again                    |
//! | `open <id>`     | open a tune                                         |
//! | `copy <id>`     | copy a tune's share link                            |
//! | `login-link`    | copy a login link that returns to the current view  |

use std::{path::PathBuf, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{events::AppEvent, routes::Route};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    Import(PathBuf),
    Reload,
    Open(String),
    Copy(String),
    LoginLink,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
}

/// Parses a command line, `Ok(None)` meaning there was nothing to run.
pub(crate) fn parse_command(buffer: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        [] => return Ok(None),

        ["q"] | ["quit"] => Command::Quit,
        ["reload"] => Command::Reload,
        ["login-link"] => Command::LoginLink,

        ["import"] => return Err(CommandError::MissingArgument("import")),
        ["import", ..] => {
            // Paths may contain spaces
            let path = buffer.trim_start().trim_start_matches("import").trim();
            Command::Import(PathBuf::from(path))
        }

        ["open"] => return Err(CommandError::MissingArgument("open")),
        ["open", id] => Command::Open(id.to_string()),

        ["copy"] => return Err(CommandError::MissingArgument("copy")),
        ["copy", id] => Command::Copy(id.to_string()),

        _ => return Err(CommandError::Unknown(buffer.trim().to_string())),
    };

    Ok(Some(command))
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a key event, returning `true` if the command line consumed it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().to_string();
                self.input.reset();
                self.active = false;
                self.run_command(&buffer, event_tx)?;
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        let event = match parse_command(buffer) {
            Ok(Some(Command::Quit)) => AppEvent::ExitApplication,
            Ok(Some(Command::Import(path))) => AppEvent::Import(path),
            Ok(Some(Command::Reload)) => AppEvent::Reload,
            Ok(Some(Command::Open(id))) => AppEvent::Navigate(Route::tune(id)),
            Ok(Some(Command::Copy(id))) => AppEvent::CopyShareLink(id),
            Ok(Some(Command::LoginLink)) => AppEvent::CopyLoginLink,
            Ok(None) => return Ok(()),
            Err(e) => AppEvent::Error(e.to_string()),
        };

        event_tx.send(event)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("q"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command(" reload "), Ok(Some(Command::Reload)));
        assert_eq!(parse_command("open abc"), Ok(Some(Command::Open("abc".to_string()))));
        assert_eq!(parse_command("copy abc"), Ok(Some(Command::Copy("abc".to_string()))));
        assert_eq!(parse_command("login-link"), Ok(Some(Command::LoginLink)));
        assert_eq!(parse_command(""), Ok(None));
    }

    #[test]
    fn import_path_keeps_spaces() {
        assert_eq!(
            parse_command("import /tmp/my tunes.json"),
            Ok(Some(Command::Import(PathBuf::from("/tmp/my tunes.json"))))
        );
    }

    #[test]
    fn rejects_bad_commands() {
        assert_eq!(parse_command("open"), Err(CommandError::MissingArgument("open")));
        assert_eq!(parse_command("fly away"), Err(CommandError::Unknown("fly away".to_string())));
    }

    #[test]
    fn submitted_command_becomes_an_event() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('x')), &tx).unwrap());
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap());
        for c in "open t1".chars() {
            commander.handle_event(&key(KeyCode::Char(c)), &tx).unwrap();
        }
        commander.handle_event(&key(KeyCode::Enter), &tx).unwrap();

        assert!(!commander.active());
        assert!(matches!(
            rx.try_recv(),
            Ok(AppEvent::Navigate(Route::Tune { tune_id })) if tune_id == "t1"
        ));
    }

    #[test]
    fn unknown_command_is_reported() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Char('z')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Enter), &tx).unwrap();

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Error(msg)) if msg == "unknown command: z"));
    }
}
