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

//! UI rendering logic for the Hub view.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{
        hub::{HubFocus, HubView},
        tune_table::Tier,
    },
    render::Render,
    theme::Theme,
};

const SEARCH_PLACEHOLDER: &str = "Search...";

impl Render for HubView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        self.draw_header(f, chunks[0], theme);
        self.draw_search_input(f, chunks[1], theme);

        if let Some(notice) = self.state.notice() {
            f.render_widget(
                Paragraph::new(notice).style(Style::default().fg(theme.notice_fg)),
                chunks[2].inner(ratatui::layout::Margin::new(1, 0)),
            );
        }

        let tier = Tier::for_width(area.width, self.compact_width);
        let copied_tune = self.state.copied_tune(Instant::now());
        self.table
            .as_widget(self.state.rows())
            .draw(f, chunks[3], theme, tier, copied_tune);
    }
}

impl HubView {
    fn draw_header(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans = vec![Span::from("Hub").bold().fg(theme.accent_colour)];

        if self.state.is_loading() {
            spans.push(Span::from("  Loading..."));
        } else {
            spans.push(Span::from(format!("  {} tunes", self.state.rows().len())));
        }

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border_colour))
                .padding(Padding::horizontal(1)),
        );

        f.render_widget(header, area);
    }

    fn draw_search_input(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focus == HubFocus::SearchInput;
        let border_colour = if focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour));
        let inner = block.inner(area);

        let text = if self.input.value().is_empty() {
            Line::from(SEARCH_PLACEHOLDER).fg(theme.placeholder_fg)
        } else {
            Line::from(self.input.value())
        };

        let scroll = self.input.visual_scroll(inner.width.saturating_sub(1) as usize);
        f.render_widget(
            Paragraph::new(text).scroll((0, scroll as u16)).block(block),
            area,
        );

        if focused {
            let cursor = self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((inner.x + cursor, inner.y));
        }
    }
}
