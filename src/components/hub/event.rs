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

//! Event routing for the Hub view.
//!
//! While the search box has focus every key edits the search text, apart from
//! the keys that move focus to the table. With the table focused, keys go to
//! the table and its row actions become application events.

use std::{sync::mpsc::Sender, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{
        hub::{HubFocus, HubView},
        tune_table::TuneTableAction,
    },
    events::{AppEvent, AppEventProcessor},
    routes::Route,
};

impl AppEventProcessor for HubView {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match self.focus {
            HubFocus::SearchInput => {
                match key_event.code {
                    KeyCode::Esc | KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                        self.focus = HubFocus::Table;
                        self.rows_changed();
                    }
                    _ => {
                        let changed = self.input.handle_event(event);
                        if changed.is_some_and(|c| c.value) {
                            self.state
                                .on_search_text_changed(self.input.value(), Instant::now());
                        }
                    }
                }
                Ok(true)
            }

            HubFocus::Table => {
                if matches!(key_event.code, KeyCode::Char('/') | KeyCode::Tab) {
                    self.focus = HubFocus::SearchInput;
                    return Ok(true);
                }

                let action = self
                    .table
                    .as_widget(self.state.rows())
                    .process_event(event);

                match action {
                    Some(TuneTableAction::CopyLink(tune_id)) => {
                        event_tx.send(AppEvent::CopyShareLink(tune_id))?;
                        Ok(true)
                    }
                    Some(TuneTableAction::Open(tune_id)) => {
                        event_tx.send(AppEvent::Navigate(Route::tune(tune_id)))?;
                        Ok(true)
                    }
                    None => Ok(false),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Duration};

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::{TuneList, fixtures::tune};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn view() -> HubView {
        HubView::new(Duration::from_millis(300), Duration::from_millis(1000), 100)
    }

    #[test]
    fn typing_schedules_a_debounced_search() {
        let (tx, _rx) = mpsc::channel();
        let mut view = view();

        for c in "gt".chars() {
            assert!(view.process_event(&key(KeyCode::Char(c)), &tx).unwrap());
        }

        assert_eq!(view.input.value(), "gt");
        assert!(view.state.next_deadline().is_some());
    }

    #[test]
    fn quit_key_is_text_while_searching() {
        let (tx, _rx) = mpsc::channel();
        let mut view = view();

        assert!(view.process_event(&key(KeyCode::Char('q')), &tx).unwrap());
        assert_eq!(view.input.value(), "q");
    }

    #[test]
    fn table_actions_become_events() {
        let (tx, rx) = mpsc::channel();
        let mut view = view();
        let request = view.state.load_initial().unwrap();
        view.state.complete_search(
            request.generation,
            Ok(TuneList {
                documents: vec![tune("abc", Some("Supra"))],
            }),
        );

        view.process_event(&key(KeyCode::Esc), &tx).unwrap();
        assert_eq!(view.focus, HubFocus::Table);

        view.process_event(&key(KeyCode::Char('y')), &tx).unwrap();
        view.process_event(&key(KeyCode::Enter), &tx).unwrap();

        assert!(matches!(rx.try_recv(), Ok(AppEvent::CopyShareLink(id)) if id == "abc"));
        assert!(matches!(
            rx.try_recv(),
            Ok(AppEvent::Navigate(Route::Tune { tune_id })) if tune_id == "abc"
        ));
    }

    #[test]
    fn enter_leaves_the_search_box_for_the_table() {
        let (tx, rx) = mpsc::channel();
        let mut view = view();

        assert!(view.process_event(&key(KeyCode::Enter), &tx).unwrap());
        assert_eq!(view.focus, HubFocus::Table);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn unhandled_table_keys_fall_through() {
        let (tx, _rx) = mpsc::channel();
        let mut view = view();
        view.focus = HubFocus::Table;

        assert!(!view.process_event(&key(KeyCode::Char('q')), &tx).unwrap());
        assert!(view.process_event(&key(KeyCode::Char('/')), &tx).unwrap());
        assert_eq!(view.focus, HubFocus::SearchInput);
    }
}
