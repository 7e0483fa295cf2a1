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

//! UI rendering logic for the tune table.
//!
//! Builds the header and rows from the columns visible in the current tier
//! and applies the theme. There is no pagination; the table scrolls with the
//! selection.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::tune_table::{Tier, TuneTable, visible_columns},
    theme::Theme,
};

impl TuneTable<'_> {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        theme: &Theme,
        tier: Tier,
        copied_tune: Option<&str>,
    ) {
        let rows = self.rows.iter().map(|row| {
            let ctx = self.cell_context(row, copied_tune);
            let cells = visible_columns(tier).map(|column| Cell::from((column.render)(row, &ctx)));

            Row::new(cells)
                .height(tier.row_height())
                .style(Style::default().fg(theme.table_fg))
        });

        let header = Row::new(visible_columns(tier).map(|c| Cell::from(c.title)))
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1);

        let table = Table::new(rows, visible_columns(tier).map(|c| c.width))
            .header(header)
            .column_spacing(2)
            .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
            .block(Block::default());

        f.render_stateful_widget(table, area, self.table_state);
    }
}
