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

//! File logging.
//!
//! The terminal belongs to the UI, so log output goes to `tunehub.log` next
//! to the configuration file. The filter is taken from `RUST_LOG` when set,
//! otherwise from the `log_level` configuration value.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{self, AppConfig};

const LOG_FILE: &str = "tunehub.log";

/// Builds the filter directive used when `RUST_LOG` is not set.
fn default_directive(config: &AppConfig) -> String {
    format!("tunehub={}", config.log_level)
}

/// Installs the global subscriber.
///
/// The returned guard flushes buffered log lines when dropped and must be
/// held until the application exits. Returns `None`, with logging disabled,
/// when there is nowhere to write the log file.
pub(crate) fn init_logging(config: &AppConfig) -> Option<WorkerGuard> {
    let dir = config::config_dir()?;
    fs::create_dir_all(&dir).ok()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()
        .ok()?;

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_scopes_level_to_this_crate() {
        let config = AppConfig {
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(default_directive(&config), "tunehub=debug");
    }
}
