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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) status_bg: Color,
    pub(crate) commander_colour: Color,

    pub(crate) table_fg: Color,
    pub(crate) highlight_fg: Color,
    pub(crate) highlight_bg: Color,

    pub(crate) label_fg: Color,
    pub(crate) placeholder_fg: Color,
    pub(crate) notice_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 26, 32),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            status_bg: Color::Rgb(40, 44, 52),
            commander_colour: Color::Rgb(255, 255, 255),

            table_fg: Color::Rgb(220, 220, 220),
            highlight_fg: Color::Rgb(255, 255, 255),
            highlight_bg: Color::Rgb(22, 119, 255),

            label_fg: Color::Rgb(162, 161, 166),
            placeholder_fg: Color::Rgb(110, 110, 120),
            notice_fg: Color::Rgb(255, 120, 117),
        }
    }

    /// Converts an RGB [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, for setting the terminal emulator's background.
    ///
    /// Returns `None` for non-RGB colours, which have no fixed value.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_colour_converts_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(250, 189, 47)).as_deref(), Some("#fabd2f"));
    }

    #[test]
    fn named_colour_has_no_hex() {
        assert_eq!(Theme::to_hex(Color::Blue), None);
    }
}
