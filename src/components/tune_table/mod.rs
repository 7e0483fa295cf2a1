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

//! Tune table widget, column definitions and selection state.
//!
//! Columns are declared once in [`COLUMNS`], each with a visibility tier and
//! a cell renderer. Narrow terminals get the [`Tier::Compact`] layout, a
//! single combined column with three lines per tune; wider ones get one
//! column per field. The actions column is shown in both.
//!
//! Persistent state (`TuneTableState`) is kept apart from the transient
//! widget view (`TuneTable`), which borrows the rows owned by the Hub.

mod event;
mod render;

use ratatui::{layout::Constraint, text::{Line, Text}, widgets::TableState};

use crate::{model::TuneRow, util::format::or_placeholder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tier {
    Compact,
    Full,
}

impl Tier {
    pub(crate) fn for_width(width: u16, compact_width: u16) -> Self {
        if width < compact_width {
            Self::Compact
        } else {
            Self::Full
        }
    }

    /// Terminal lines used by each tune.
    pub(crate) fn row_height(self) -> u16 {
        match self {
            Self::Compact => 3,
            Self::Full => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visibility {
    Compact,
    Full,
    Always,
}

impl Visibility {
    fn shown_in(self, tier: Tier) -> bool {
        matches!(
            (self, tier),
            (Self::Always, _) | (Self::Compact, Tier::Compact) | (Self::Full, Tier::Full)
        )
    }
}

/// Per-row information cell renderers may need besides the row itself.
pub(crate) struct CellContext {
    /// This row's link was just copied.
    pub(crate) copied: bool,
}

pub(crate) struct Column {
    pub(crate) title: &'static str,
    pub(crate) visibility: Visibility,
    pub(crate) width: Constraint,
    pub(crate) render: fn(&TuneRow, &CellContext) -> Text<'static>,
}

pub(crate) const AUTHOR_PLACEHOLDER: &str = "?";
pub(crate) const STARS_PLACEHOLDER: &str = "0";
pub(crate) const STAR: &str = "★";

pub(crate) const COLUMNS: &[Column] = &[
    Column {
        title: "Tune",
        visibility: Visibility::Compact,
        width: Constraint::Min(20),
        render: summary_cell,
    },
    Column {
        title: "Vehicle name",
        visibility: Visibility::Full,
        width: Constraint::Percentage(18),
        render: |row, _| Text::from(row.vehicle_name.clone()),
    },
    Column {
        title: "Make",
        visibility: Visibility::Full,
        width: Constraint::Percentage(9),
        render: |row, _| Text::from(row.engine_make.clone()),
    },
    Column {
        title: "Engine code",
        visibility: Visibility::Full,
        width: Constraint::Percentage(9),
        render: |row, _| Text::from(row.engine_code.clone()),
    },
    Column {
        title: "",
        visibility: Visibility::Full,
        width: Constraint::Length(6),
        render: |row, _| Text::from(row.displacement.clone()),
    },
    Column {
        title: "Cylinders",
        visibility: Visibility::Full,
        width: Constraint::Length(9),
        render: |row, _| Text::from(or_placeholder(row.cylinders_count.as_ref(), "")),
    },
    Column {
        title: "Aspiration",
        visibility: Visibility::Full,
        width: Constraint::Length(19),
        render: |row, _| Text::from(row.aspiration),
    },
    Column {
        title: "Author",
        visibility: Visibility::Full,
        width: Constraint::Length(6),
        render: |row, _| Text::from(or_placeholder(row.author.as_ref(), AUTHOR_PLACEHOLDER)),
    },
    Column {
        title: "Signature",
        visibility: Visibility::Full,
        width: Constraint::Percentage(14),
        render: |row, _| Text::from(row.signature.clone()),
    },
    Column {
        title: "Published",
        visibility: Visibility::Full,
        width: Constraint::Length(16),
        render: |row, _| Text::from(row.published_at.clone()),
    },
    Column {
        title: STAR,
        visibility: Visibility::Full,
        width: Constraint::Length(3),
        render: |row, _| Text::from(or_placeholder(row.stars.as_ref(), STARS_PLACEHOLDER)),
    },
    Column {
        title: "",
        visibility: Visibility::Always,
        width: Constraint::Length(22),
        render: actions_cell,
    },
];

fn summary_cell(row: &TuneRow, _: &CellContext) -> Text<'static> {
    Text::from(vec![
        Line::from(format!(
            "{} ({}), published: {}",
            row.vehicle_name, row.signature, row.published_at
        )),
        Line::from(format!(
            "{}, {}, {}, {} cylinders, {}",
            row.engine_make,
            row.engine_code,
            row.displacement,
            or_placeholder(row.cylinders_count.as_ref(), "?"),
            row.aspiration
        )),
        Line::from(format!(
            "author: {} {} {}",
            or_placeholder(row.author.as_ref(), AUTHOR_PLACEHOLDER),
            or_placeholder(row.stars.as_ref(), STARS_PLACEHOLDER),
            STAR
        )),
    ])
}

pub(crate) fn copy_label(ctx: &CellContext) -> &'static str {
    if ctx.copied {
        "Copied!"
    } else {
        "Copy URL"
    }
}

fn actions_cell(_: &TuneRow, ctx: &CellContext) -> Text<'static> {
    Text::from(format!("[y] {}  [⏎] Open", copy_label(ctx)))
}

pub(crate) fn visible_columns(tier: Tier) -> impl Iterator<Item = &'static Column> {
    COLUMNS.iter().filter(move |c| c.visibility.shown_in(tier))
}

#[derive(Debug)]
pub(crate) enum TuneTableAction {
    CopyLink(String),
    Open(String),
}

pub(crate) struct TuneTableState {
    table_state: TableState,
}

impl TuneTableState {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    pub(crate) fn as_widget<'a>(&'a mut self, rows: &'a [TuneRow]) -> TuneTable<'a> {
        TuneTable {
            rows,
            table_state: &mut self.table_state,
        }
    }
}

pub(crate) struct TuneTable<'a> {
    rows: &'a [TuneRow],
    table_state: &'a mut TableState,
}

impl TuneTable<'_> {
    fn goto_next(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => len - 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(self.rows.len() - 1));
        }
    }

    /// Keeps the selection on a valid row after the rows were replaced.
    pub(crate) fn clamp_selection(&mut self) {
        match (self.table_state.selected(), self.rows.len()) {
            (_, 0) => self.table_state.select(None),
            (Some(i), len) if i >= len => self.table_state.select(Some(len - 1)),
            (None, _) => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    pub(crate) fn selected_row(&self) -> Option<&TuneRow> {
        self.table_state.selected().and_then(|i| self.rows.get(i))
    }

    fn cell_context(&self, row: &TuneRow, copied_tune: Option<&str>) -> CellContext {
        CellContext {
            copied: copied_tune == Some(row.tune_id.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TuneRow, fixtures::tune};

    fn rows(n: usize) -> Vec<TuneRow> {
        (0..n)
            .filter_map(|i| TuneRow::from_document(tune(&format!("t{}", i), Some("Supra"))))
            .collect()
    }

    fn titles(tier: Tier) -> Vec<&'static str> {
        visible_columns(tier).map(|c| c.title).collect()
    }

    #[test]
    fn compact_tier_shows_summary_and_actions_only() {
        assert_eq!(titles(Tier::Compact), vec!["Tune", ""]);
    }

    #[test]
    fn full_tier_shows_every_field() {
        assert_eq!(
            titles(Tier::Full),
            vec![
                "Vehicle name", "Make", "Engine code", "", "Cylinders", "Aspiration", "Author",
                "Signature", "Published", STAR, ""
            ]
        );
    }

    #[test]
    fn tier_follows_terminal_width() {
        assert_eq!(Tier::for_width(80, 100), Tier::Compact);
        assert_eq!(Tier::for_width(100, 100), Tier::Full);
    }

    #[test]
    fn summary_cell_combines_fields_on_three_lines() {
        let rows = rows(1);
        let row = &rows[0];
        let ctx = CellContext { copied: false };
        let text = summary_cell(row, &ctx);

        assert_eq!(text.lines.len(), 3);
        assert!(text.lines[1].to_string().starts_with("Toyota, 3S-GTE, 2l, 4 cylinders, Turbocharged"));
        assert_eq!(text.lines[2].to_string(), "author: ? 0 ★");
    }

    #[test]
    fn copied_label_follows_the_copied_tune_not_the_selection() {
        let rows = rows(2);
        let mut state = TuneTableState::new();
        let mut table = state.as_widget(&rows);
        table.clamp_selection();
        assert_eq!(table.selected_row().map(|r| r.key.as_str()), Some("t0"));

        let labels: Vec<_> = rows
            .iter()
            .map(|row| copy_label(&table.cell_context(row, Some("t1"))))
            .collect();

        assert_eq!(labels, vec!["Copy URL", "Copied!"]);
        assert_eq!(copy_label(&table.cell_context(&rows[1], None)), "Copy URL");
    }

    #[test]
    fn selection_stays_within_rows() {
        let rows = rows(3);
        let mut state = TuneTableState::new();
        let mut table = state.as_widget(&rows);

        table.clamp_selection();
        assert_eq!(table.selected_row().map(|r| r.key.as_str()), Some("t0"));

        table.goto_last();
        table.goto_next();
        assert_eq!(table.selected_row().map(|r| r.key.as_str()), Some("t2"));

        table.goto_first();
        table.goto_previous();
        assert_eq!(table.selected_row().map(|r| r.key.as_str()), Some("t0"));
    }

    #[test]
    fn clamp_after_rows_shrink() {
        let many = rows(5);
        let few = rows(2);
        let empty: Vec<TuneRow> = vec![];
        let mut state = TuneTableState::new();

        state.as_widget(&many).goto_last();
        state.as_widget(&few).clamp_selection();
        assert_eq!(state.as_widget(&few).selected_row().map(|r| r.key.as_str()), Some("t1"));

        state.as_widget(&empty).clamp_selection();
        assert!(state.as_widget(&empty).selected_row().is_none());
    }
}
