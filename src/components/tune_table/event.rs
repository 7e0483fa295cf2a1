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

//! Input handling for the tune table.
//!
//! This module maps raw terminal keyboard events to table navigation and to
//! the row actions (copy link, open) the owning view carries out.

use crossterm::event::{Event, KeyCode};

use crate::components::tune_table::{TuneTable, TuneTableAction};

impl TuneTable<'_> {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<TuneTableAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Char('y') => {
                return self
                    .selected_row()
                    .map(|row| TuneTableAction::CopyLink(row.tune_id.clone()));
            }

            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
                return self
                    .selected_row()
                    .map(|row| TuneTableAction::Open(row.tune_id.clone()));
            }

            _ => {}
        }

        None
    }
}
