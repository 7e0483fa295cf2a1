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

//! The Hub view: a search box over the tune table.
//!
//! The view owns the [`HubState`] listing controller, the text input bound to
//! it, and the table selection. Row actions are forwarded to the application
//! as events.

mod event;
mod render;

use std::time::Duration;

use tui_input::Input;

use crate::{
    components::tune_table::TuneTableState,
    model::hub::{HubState, SearchRequest},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HubFocus {
    SearchInput,
    Table,
}

pub(crate) struct HubView {
    pub(crate) state: HubState,
    pub(crate) input: Input,
    pub(crate) focus: HubFocus,
    pub(crate) table: TuneTableState,
    compact_width: u16,
}

impl HubView {
    pub(crate) fn new(debounce: Duration, copy_feedback: Duration, compact_width: u16) -> Self {
        Self {
            state: HubState::new(debounce, copy_feedback),
            input: Input::default(),
            focus: HubFocus::SearchInput,
            table: TuneTableState::new(),
            compact_width,
        }
    }

    /// Runs the current search text again straight away.
    pub(crate) fn reload(&mut self) -> SearchRequest {
        self.state.search_now(self.input.value())
    }

    /// Keeps the table selection valid after the rows were replaced.
    pub(crate) fn rows_changed(&mut self) {
        self.table.as_widget(self.state.rows()).clamp_selection();
    }

    pub(crate) fn selected_tune_id(&mut self) -> Option<String> {
        self.table
            .as_widget(self.state.rows())
            .selected_row()
            .map(|row| row.tune_id.clone())
    }
}
