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

//! Tune detail view.
//!
//! Opened by navigating to a tune's route. The id is not checked before
//! navigating; the view asks the store for the tune and reports when there is
//! no such tune or the lookup failed.

mod render;

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    events::{AppEvent, AppEventProcessor},
    model::TuneDocument,
    routes::Route,
};

#[derive(Debug)]
pub(crate) enum DetailState {
    Loading,
    Loaded(TuneDocument),
    NotFound,
    Failed(String),
}

pub(crate) struct DetailView {
    pub(crate) tune_id: String,
    pub(crate) state: DetailState,
}

impl DetailView {
    pub(crate) fn new(tune_id: String) -> Self {
        Self {
            tune_id,
            state: DetailState::Loading,
        }
    }

    /// Applies a store lookup, ignoring answers for a different tune.
    pub(crate) fn tune_loaded(&mut self, tune_id: &str, result: Result<Option<TuneDocument>, String>) {
        if tune_id != self.tune_id {
            return;
        }

        self.state = match result {
            Ok(Some(tune)) => DetailState::Loaded(tune),
            Ok(None) => DetailState::NotFound,
            Err(e) => DetailState::Failed(e),
        };
    }
}

impl AppEventProcessor for DetailView {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
                event_tx.send(AppEvent::Navigate(Route::Hub))?;
                Ok(true)
            }
            KeyCode::Char('y') => {
                event_tx.send(AppEvent::CopyShareLink(self.tune_id.clone()))?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::fixtures::tune;

    #[test]
    fn unknown_tune_is_reported_as_not_found() {
        let mut view = DetailView::new("missing".to_string());
        view.tune_loaded("missing", Ok(None));
        assert!(matches!(view.state, DetailState::NotFound));
    }

    #[test]
    fn lookups_for_other_tunes_are_ignored() {
        let mut view = DetailView::new("a".to_string());
        view.tune_loaded("b", Ok(Some(tune("b", Some("MR2")))));
        assert!(matches!(view.state, DetailState::Loading));

        view.tune_loaded("a", Ok(Some(tune("a", Some("Supra")))));
        assert!(matches!(view.state, DetailState::Loaded(ref t) if t.tune_id == "a"));
    }

    #[test]
    fn failed_lookup_ends_loading() {
        let mut view = DetailView::new("x".to_string());
        view.tune_loaded("x", Err("no such table: tunes".to_string()));
        assert!(matches!(view.state, DetailState::Failed(ref e) if e == "no such table: tunes"));
    }

    #[test]
    fn escape_navigates_back_to_the_hub() {
        let (tx, rx) = mpsc::channel();
        let mut view = DetailView::new("a".to_string());

        let event = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(view.process_event(&event, &tx).unwrap());
        assert!(matches!(rx.try_recv(), Ok(AppEvent::Navigate(Route::Hub))));
    }
}
