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

//! Short-lived boolean feedback, such as the "Copied!" acknowledgement.

use std::time::{Duration, Instant};

/// A flag that reads `true` for a fixed duration after being triggered.
///
/// There is no timer behind it, only an expiry instant, so dropping or
/// clearing it cannot leave anything running.
#[derive(Debug)]
pub(crate) struct TimedFlag {
    duration: Duration,
    until: Option<Instant>,
}

impl TimedFlag {
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            duration,
            until: None,
        }
    }

    /// Raises the flag, restarting the window if it is already raised.
    pub(crate) fn trigger(&mut self, now: Instant) {
        self.until = Some(now + self.duration);
    }

    pub(crate) fn is_set(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// Drops the expiry once it has passed, so it no longer counts as a
    /// deadline.
    pub(crate) fn expire(&mut self, now: Instant) {
        if !self.is_set(now) {
            self.until = None;
        }
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.until
    }

    pub(crate) fn clear(&mut self) {
        self.until = None;
    }
}
