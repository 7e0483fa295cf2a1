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

//! # Tune Hub TUI.
//!
//! A terminal front end for browsing published engine tunes.
//!
//! The Hub lists tunes from a local document store, filters them as you type,
//! and copies shareable links to the web application for any tune.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Background Worker** owns the document store and answers searches,
//!   lookups and imports.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the worker is handled via `std::sync::mpsc` channels.

mod clipboard;
mod commander;
mod components;
mod config;
mod db;
mod events;
mod logging;
mod model;
mod render;
mod routes;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::{Duration, Instant},
};
use tracing::info;

use crate::{
    clipboard::{ClipboardService, SystemClipboard},
    commander::Commander,
    components::{DetailView, HubView},
    config::AppConfig,
    events::{AppEvent, process_events},
    routes::Route,
    tasks::AppTask,
    theme::Theme,
    util::url::UrlBuilder,
};

/// The view currently filling the screen.
pub(crate) enum View {
    Hub(HubView),
    Detail(DetailView),
}

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub view: View,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub urls: UrlBuilder,
    pub clipboard: Option<Box<dyn ClipboardService>>,

    pub commander: Commander,
    pub status_message: Option<String>,

    /// Last search generation issued by a Hub that has since been closed.
    pub search_generation: u64,
}

impl App {
    /// Create a new instance of application state, showing an empty Hub.
    ///
    /// The Hub's first search is not issued here, see [`run`].
    pub fn new(
        config: AppConfig,
        urls: UrlBuilder,
        clipboard: Option<Box<dyn ClipboardService>>,
        task_tx: Sender<AppTask>,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let hub = HubView::new(
            config.search_debounce(),
            config.copy_feedback(),
            config.compact_width,
        );

        Self {
            config,
            theme: Theme::default(),
            view: View::Hub(hub),
            event_tx,
            event_rx,
            task_tx,
            urls,
            clipboard,
            commander: Commander::new(),
            status_message: None,
            search_generation: 0,
        }
    }

    /// Creates a Hub whose searches are numbered after those of any earlier
    /// Hub, whose results may still be in flight.
    pub(crate) fn new_hub_view(&self) -> HubView {
        let mut hub = HubView::new(
            self.config.search_debounce(),
            self.config.copy_feedback(),
            self.config.compact_width,
        );
        hub.state.continue_after(self.search_generation);
        hub
    }

    pub(crate) fn current_route(&self) -> Route {
        match &self.view {
            View::Hub(_) => Route::Hub,
            View::Detail(detail) => Route::tune(detail.tune_id.clone()),
        }
    }

    /// The next moment the active view has a timed change due.
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        match &self.view {
            View::Hub(hub) => hub.state.next_deadline(),
            View::Detail(_) => None,
        }
    }
}

/// The entry point of the application.
///
/// Loads and validates the configuration, sets up the communication channels,
/// initializes the application state, manages the terminal lifecycle, and
/// returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let _log_guard = logging::init_logging(&config);

    // Without a base URL no share link can be built, so refuse to start
    let urls = UrlBuilder::from_config(&config).context("Invalid configuration")?;

    let clipboard = SystemClipboard::detect().map(|c| Box::new(c) as Box<dyn ClipboardService>);

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, urls, clipboard, task_tx);

    info!(web_url = %app.urls.base(), clipboard = app.clipboard.is_some(), "starting");

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is best-effort and does not return a result, as it is
/// typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process [`AppTask`]s against the document store.
/// * An input thread to poll for system keyboard and resize events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it issues the Hub's first search and hands
/// control to [`process_events`] to manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to process application tasks.
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(&app.config, task_rx, task_event_tx);

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(_) => break,
            };
            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial trigger to populate the Hub
    if let View::Hub(hub) = &mut app.view
        && let Some(request) = hub.state.load_initial()
    {
        app.task_tx.send(AppTask::Search(request))?;
    }

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
