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

//! System clipboard access.
//!
//! Clipboard support depends on the environment (a headless Linux session
//! has none), so the system clipboard is detected once at start-up and the
//! rest of the application works with an optional [`ClipboardService`].

use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::debug;

pub(crate) trait ClipboardService {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The platform clipboard.
///
/// On X11 and Wayland the copied text is served by this process, so the
/// handle is kept for the lifetime of the application.
pub(crate) struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    /// Connects to the platform clipboard, or returns `None` when there is
    /// no clipboard available.
    pub(crate) fn detect() -> Option<Self> {
        match Clipboard::new() {
            Ok(clipboard) => Some(Self { clipboard }),
            Err(e) => {
                debug!(error = %e, "system clipboard unavailable");
                None
            }
        }
    }
}

impl ClipboardService for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.clipboard
            .set_text(text)
            .context("Failed to set clipboard text")
    }
}
