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

use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use tracing::{debug, error, info};

use crate::{
    App, View,
    clipboard::ClipboardService,
    components::{DetailView, HubView},
    model::{
        TuneDocument, TuneList,
        hub::{CopyOutcome, share_link},
    },
    routes::Route,
    tasks::AppTask,
};

const CLIPBOARD_UNAVAILABLE: &str = "Clipboard is not available";

pub(super) fn handle_navigate(app: &mut App, route: Route) -> Result<()> {
    info!(route = %route, "navigate");

    match route {
        Route::Hub => {
            if matches!(app.view, View::Hub(_)) {
                return Ok(());
            }

            // Returning to the Hub mounts a fresh view, which loads again
            let mut hub: HubView = app.new_hub_view();
            if let Some(request) = hub.state.load_initial() {
                app.task_tx.send(AppTask::Search(request))?;
            }
            app.view = View::Hub(hub);
        }

        Route::Tune { tune_id } => {
            if let View::Hub(hub) = &mut app.view {
                hub.state.teardown();
                app.search_generation = hub.state.generation();
            }

            app.task_tx.send(AppTask::FetchTune(tune_id.clone()))?;
            app.view = View::Detail(DetailView::new(tune_id));
        }
    }

    Ok(())
}

pub(super) fn handle_search_completed(app: &mut App, generation: u64, result: Result<TuneList, String>) {
    match &mut app.view {
        View::Hub(hub) => {
            if hub.state.complete_search(generation, result) {
                hub.rows_changed();
            }
        }
        View::Detail(_) => debug!(generation, "search completed after leaving the hub"),
    }
}

pub(super) fn handle_reload(app: &mut App) -> Result<()> {
    if let View::Hub(hub) = &mut app.view {
        let request = hub.reload();
        app.task_tx.send(AppTask::Search(request))?;
    }

    Ok(())
}

pub(super) fn handle_tune_loaded(
    app: &mut App,
    tune_id: &str,
    result: Result<Option<TuneDocument>, String>,
) {
    if let Err(e) = &result {
        error!(tune_id, error = %e, "failed to load tune");
    }

    if let View::Detail(detail) = &mut app.view {
        detail.tune_loaded(tune_id, result);
    }
}

pub(super) fn handle_copy_share_link(app: &mut App, tune_id: &str) {
    let clipboard = app
        .clipboard
        .as_mut()
        .map(|c| &mut **c as &mut dyn ClipboardService);

    let message = match &mut app.view {
        View::Hub(hub) => {
            match hub
                .state
                .copy_share_link(tune_id, &app.urls, clipboard, Instant::now())
            {
                Ok(CopyOutcome::Copied(url)) => format!("Copied {}", url),
                Ok(CopyOutcome::Unavailable) => CLIPBOARD_UNAVAILABLE.to_string(),
                Err(e) => {
                    error!(tune_id, error = %format!("{:#}", e), "failed to copy share link");
                    format!("Copy failed: {:#}", e)
                }
            }
        }
        View::Detail(_) => copy_text(clipboard, &share_link(&app.urls, tune_id)),
    };

    app.status_message = Some(message);
}

/// Copies a link to the login page that sends the user back to the current
/// view once signed in.
pub(super) fn handle_copy_login_link(app: &mut App) {
    let next = app.current_route().path();
    let url = app.urls.build_redirect_url("login", &[("next", next.as_str())]);

    let clipboard = app
        .clipboard
        .as_mut()
        .map(|c| &mut **c as &mut dyn ClipboardService);
    app.status_message = Some(copy_text(clipboard, &url));
}

fn copy_text(clipboard: Option<&mut dyn ClipboardService>, text: &str) -> String {
    let Some(clipboard) = clipboard else {
        return CLIPBOARD_UNAVAILABLE.to_string();
    };

    match clipboard.write_text(text) {
        Ok(()) => {
            info!(url = %text, "link copied");
            format!("Copied {}", text)
        }
        Err(e) => {
            error!(error = %format!("{:#}", e), "failed to copy link");
            format!("Copy failed: {:#}", e)
        }
    }
}

pub(super) fn handle_import(app: &mut App, path: PathBuf) -> Result<()> {
    app.status_message = Some(format!("Importing {}...", path.display()));
    app.task_tx.send(AppTask::Import(path))?;

    Ok(())
}

pub(super) fn handle_import_finished(app: &mut App, count: usize) -> Result<()> {
    app.status_message = Some(format!("Imported {} tunes", count));
    handle_reload(app)
}

pub(super) fn handle_error(app: &mut App, message: String) {
    error!(message = %message, "application error");
    app.status_message = Some(message);
}

/// Releases debounced searches and expires timed feedback that is due.
pub(super) fn handle_deadlines(app: &mut App, now: Instant) -> Result<()> {
    if let View::Hub(hub) = &mut app.view {
        if let Some(request) = hub.state.poll_search(now) {
            app.task_tx.send(AppTask::Search(request))?;
        }
        hub.state.tick(now);
    }

    Ok(())
}
