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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard), background task results, and the UI
//! rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    `mpsc` channel. The wait is bounded by the earliest deadline of the
//!    active view (a debounced search, the end of copy feedback), so timed
//!    state changes happen on time even when no input arrives.
//! 2. **Process**: The handlers update the [`App`] state and dispatch tasks to
//!    the background worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
mod key_handlers;

use handlers::*;

use std::{
    io::Stdout,
    path::PathBuf,
    sync::mpsc::{RecvTimeoutError, Sender},
    time::{Duration, Instant},
};

use anyhow::{Result, anyhow};
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    model::{TuneDocument, TuneList},
    render::draw,
    routes::Route,
};

/// Upper bound on how long the loop sleeps when nothing is scheduled.
const IDLE_WAIT: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Resize,

    Navigate(Route),

    SearchCompleted {
        generation: u64,
        result: Result<TuneList, String>,
    },
    Reload,

    TuneLoaded {
        tune_id: String,
        result: Result<Option<TuneDocument>, String>,
    },

    CopyShareLink(String),
    CopyLoginLink,

    Import(PathBuf),
    ImportFinished(usize),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

pub(crate) trait AppEventProcessor {
    /// Handles an input event, returning `true` if it was consumed.
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error if the terminal cannot be drawn, if a handler fails to
/// reach the task worker, or if the worker reports a fatal error.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    loop {
        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_WAIT);

        match app.event_rx.recv_timeout(timeout) {
            Ok(AppEvent::ExitApplication) => break,
            Ok(AppEvent::FatalError(message)) => return Err(anyhow!(message)),
            Ok(event) => handle_event(app, event)?,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        handle_deadlines(app, Instant::now())?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
        AppEvent::Navigate(route) => handle_navigate(app, route)?,
        AppEvent::SearchCompleted { generation, result } => {
            handle_search_completed(app, generation, result)
        }
        AppEvent::Reload => handle_reload(app)?,
        AppEvent::TuneLoaded { tune_id, result } => handle_tune_loaded(app, &tune_id, result),
        AppEvent::CopyShareLink(tune_id) => handle_copy_share_link(app, &tune_id),
        AppEvent::CopyLoginLink => handle_copy_login_link(app),
        AppEvent::Import(path) => handle_import(app, path)?,
        AppEvent::ImportFinished(count) => handle_import_finished(app, count)?,
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Resize | AppEvent::Tick => {}
        AppEvent::ExitApplication | AppEvent::FatalError(_) => {}
    }

    Ok(())
}
