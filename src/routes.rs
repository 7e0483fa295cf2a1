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

//! In-app routes.
//!
//! Route paths are shared with the web client so that a deep link copied from
//! the terminal opens the same tune in a browser.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters is escaped in a segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Hub,
    Tune { tune_id: String },
}

impl Route {
    pub(crate) fn tune(tune_id: impl Into<String>) -> Self {
        Self::Tune {
            tune_id: tune_id.into(),
        }
    }

    /// Generates the path for this route, percent-encoding parameters so
    /// each stays a single segment.
    pub(crate) fn path(&self) -> String {
        match self {
            Self::Hub => "/hub".to_string(),
            Self::Tune { tune_id } => {
                format!("/t/{}/tune", utf8_percent_encode(tune_id, SEGMENT))
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tune_route_path_contains_the_id() {
        assert_eq!(Route::tune("abc123").path(), "/t/abc123/tune");
    }

    #[test]
    fn tune_id_stays_one_path_segment() {
        assert_eq!(Route::tune("a/b").path(), "/t/a%2Fb/tune");
        assert_eq!(Route::tune("my tune?").path(), "/t/my%20tune%3F/tune");
    }

    #[test]
    fn hub_route_path() {
        assert_eq!(Route::Hub.to_string(), "/hub");
    }
}
