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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to keep document store
//! access off the UI thread. A dedicated worker owns the database connection,
//! translates [`AppTask`] requests into store operations, and broadcasts the
//! results back to the application via [`AppEvent`]s.
//!
//! Tasks run one at a time in the order they were sent. Search results carry
//! the generation of the request that produced them, so the Hub can drop
//! answers it no longer wants.

mod handlers;

use std::{
    path::PathBuf,
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use tracing::{error, info};

use crate::{config::AppConfig, db::{self, TuneStore}, events::AppEvent, model::hub::SearchRequest};

#[derive(Debug)]
pub(crate) enum AppTask {
    Search(SearchRequest),
    FetchTune(String),
    Import(PathBuf),
}

/// Spawns a background thread to process application tasks.
///
/// This worker thread opens its own database connection and enters a
/// blocking loop, listening for incoming [`AppTask`]s until the sending side
/// is dropped.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let database_file = config.database_file.clone();

    thread::spawn(move || {
        let mut conn = match db::init_db(&database_file) {
            Ok(conn) => conn,
            Err(e) => {
                error!(error = %format!("{:#}", e), "failed to initialise database");
                let _ = event_tx.send(AppEvent::FatalError(format!("{:#}", e)));
                return;
            }
        };

        info!(database = %database_file, "task worker started");

        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                event_tx: &event_tx,
                store: &mut conn,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                error!(error = %format!("{:#}", e), "task failed");
                let _ = event_tx.send(AppEvent::Error(format!("{:#}", e)));
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
pub(crate) struct TaskContext<'a, S: TuneStore> {
    event_tx: &'a Sender<AppEvent>,
    store: &'a mut S,
}

/// Orchestrates the execution of a single task.
fn handle_task<S: TuneStore>(task: AppTask, ctx: &mut TaskContext<S>) -> Result<()> {
    match task {
        AppTask::Search(request) => handlers::search(ctx, request),
        AppTask::FetchTune(tune_id) => handlers::fetch_tune(ctx, tune_id),
        AppTask::Import(path) => handlers::import(ctx, &path),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::{db::testing::memory_store, model::fixtures::tune};

    #[test]
    fn search_result_carries_request_generation() {
        let mut store = memory_store();
        store.upsert_tunes(&[tune("a", Some("Supra")), tune("b", None)]).unwrap();
        let (event_tx, event_rx) = mpsc::channel();
        let mut ctx = TaskContext {
            event_tx: &event_tx,
            store: &mut store,
        };

        let request = SearchRequest {
            generation: 7,
            query: None,
        };
        handle_task(AppTask::Search(request), &mut ctx).unwrap();

        match event_rx.try_recv().unwrap() {
            AppEvent::SearchCompleted { generation, result } => {
                assert_eq!(generation, 7);
                assert_eq!(result.unwrap().documents.len(), 2);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn fetching_unknown_tune_reports_none() {
        let mut store = memory_store();
        let (event_tx, event_rx) = mpsc::channel();
        let mut ctx = TaskContext {
            event_tx: &event_tx,
            store: &mut store,
        };

        handle_task(AppTask::FetchTune("missing".to_string()), &mut ctx).unwrap();

        match event_rx.try_recv().unwrap() {
            AppEvent::TuneLoaded { tune_id, result } => {
                assert_eq!(tune_id, "missing");
                assert_eq!(result, Ok(None));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn failed_lookup_is_reported_with_the_tune() {
        // No schema, so every query fails
        let mut store = rusqlite::Connection::open_in_memory().unwrap();
        let (event_tx, event_rx) = mpsc::channel();
        let mut ctx = TaskContext {
            event_tx: &event_tx,
            store: &mut store,
        };

        handle_task(AppTask::FetchTune("x".to_string()), &mut ctx).unwrap();

        match event_rx.try_recv().unwrap() {
            AppEvent::TuneLoaded { tune_id, result } => {
                assert_eq!(tune_id, "x");
                assert!(result.unwrap_err().contains("no such table"));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn failed_import_is_returned_as_error() {
        let mut store = memory_store();
        let (event_tx, event_rx) = mpsc::channel();
        let mut ctx = TaskContext {
            event_tx: &event_tx,
            store: &mut store,
        };

        let result = handle_task(AppTask::Import(PathBuf::from("/nonexistent.json")), &mut ctx);

        assert!(result.is_err());
        assert!(event_rx.try_recv().is_err());
    }
}
