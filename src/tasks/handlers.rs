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

use std::path::Path;

use anyhow::Result;

use crate::{
    db::{TuneStore, import},
    events::AppEvent,
    model::hub::SearchRequest,
    tasks::TaskContext,
};

/// Store failures are reported through the completion rather than as task
/// errors, so the Hub can stop its loading state for the right generation.
pub(super) fn search<S: TuneStore>(ctx: &mut TaskContext<S>, request: SearchRequest) -> Result<()> {
    let result = ctx
        .store
        .search_tunes(request.query.as_deref())
        .map_err(|e| format!("{:#}", e));

    ctx.event_tx.send(AppEvent::SearchCompleted {
        generation: request.generation,
        result,
    })?;

    Ok(())
}

/// Lookup failures are reported through the event so the detail view can
/// leave its loading state.
pub(super) fn fetch_tune<S: TuneStore>(ctx: &mut TaskContext<S>, tune_id: String) -> Result<()> {
    let result = ctx
        .store
        .fetch_tune(&tune_id)
        .map_err(|e| format!("{:#}", e));
    ctx.event_tx.send(AppEvent::TuneLoaded { tune_id, result })?;

    Ok(())
}

pub(super) fn import<S: TuneStore>(ctx: &mut TaskContext<S>, path: &Path) -> Result<()> {
    let count = import::import_documents(&mut *ctx.store, path)?;
    ctx.event_tx.send(AppEvent::ImportFinished(count))?;

    Ok(())
}
