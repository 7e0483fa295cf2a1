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

//! UI rendering logic for the tune detail view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{
        detail::{DetailState, DetailView},
        tune_table::{AUTHOR_PLACEHOLDER, STAR, STARS_PLACEHOLDER},
    },
    model::{Aspiration, TuneDocument},
    render::Render,
    theme::Theme,
    util::format::{format_displacement, format_timestamp, or_placeholder},
};

impl Render for DetailView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header = Paragraph::new(Line::from(vec![
            Span::from("Tune").bold().fg(theme.accent_colour),
            Span::from(format!("  {}", self.tune_id)),
        ]))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border_colour))
                .padding(Padding::horizontal(1)),
        );
        f.render_widget(header, chunks[0]);

        let body = match &self.state {
            DetailState::Loading => vec![Line::from("Loading...")],
            DetailState::NotFound => vec![Line::from("Tune not found").fg(theme.notice_fg)],
            DetailState::Failed(e) => {
                vec![Line::from(format!("Failed to load tune: {}", e)).fg(theme.notice_fg)]
            }
            DetailState::Loaded(tune) => detail_lines(tune, theme),
        };

        f.render_widget(
            Paragraph::new(body).block(Block::default().padding(Padding::uniform(1))),
            chunks[1],
        );
    }
}

fn detail_lines(tune: &TuneDocument, theme: &Theme) -> Vec<Line<'static>> {
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::from(format!("{:<14}", label)).fg(theme.label_fg),
            Span::from(value),
        ])
    };

    vec![
        field("Vehicle", tune.vehicle_name.clone().unwrap_or_default()),
        field("Year", or_placeholder(tune.year.as_ref(), "")),
        field("Signature", tune.signature.clone()),
        field("Make", tune.engine_make.clone()),
        field("Engine code", tune.engine_code.clone()),
        field("Displacement", format_displacement(tune.displacement)),
        field("Cylinders", or_placeholder(tune.cylinders_count.as_ref(), "")),
        field("Aspiration", Aspiration::label_for_code(&tune.aspiration).to_string()),
        field("Author", AUTHOR_PLACEHOLDER.to_string()),
        field("Stars", format!("{} {}", STARS_PLACEHOLDER, STAR)),
        field("Published", format_timestamp(tune.updated_at, &chrono::Local)),
        Line::from(""),
        Line::from("[y] Copy URL  [esc] Back").fg(theme.placeholder_fg),
    ]
}
