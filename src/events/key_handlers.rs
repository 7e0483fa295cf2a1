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

//! Keyboard routing.
//!
//! Keys go, in order, to: the command line when it is open, the active view,
//! the command line trigger (`:`), and finally the global bindings. A view
//! that is editing text consumes every key, so typing `q` in the search box
//! does not quit.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{App, View, events::{AppEvent, AppEventProcessor}};

/// Maps keyboard input to application actions.
///
/// # Errors
///
/// Returns an error if an event cannot be sent back to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    app.status_message = None;

    let event = Event::Key(key);

    if app.commander.active() {
        app.commander.handle_event(&event, &app.event_tx)?;
        return Ok(());
    }

    let handled = match &mut app.view {
        View::Hub(hub) => hub.process_event(&event, &app.event_tx)?,
        View::Detail(detail) => detail.process_event(&event, &app.event_tx)?,
    };
    if handled {
        return Ok(());
    }

    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('q') {
        app.event_tx.send(AppEvent::ExitApplication)?;
    }

    Ok(())
}
