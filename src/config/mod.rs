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

//! Application configuration.
//!
//! This module manages the application configuration file, and the single
//! environment override used by deployments to point deep links at the right
//! web host.

use std::{env, path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_NAME: &str = "tunehub";

/// Environment variable that takes precedence over the configured web URL.
pub(crate) const WEB_URL_ENV: &str = "TUNEHUB_WEB_URL";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub web_url: Option<String>,
    pub database_file: String,
    pub search_debounce_ms: u64,
    pub copy_feedback_ms: u64,
    pub compact_width: u16,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            web_url: None,
            database_file: "tunes.db".to_string(),
            search_debounce_ms: 300,
            copy_feedback_ms: 1000,
            compact_width: 100,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub(crate) fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub(crate) fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// Applies the environment override for the web URL, ignoring blank
    /// values.
    fn with_web_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.web_url = Some(url);
        }
        self
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("no web URL configured, set `web_url` in the config file or {WEB_URL_ENV}")]
    MissingWebUrl,

    #[error("invalid web URL {url:?}")]
    InvalidWebUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

pub fn load_config() -> AppConfig {
    confy::load::<AppConfig>(CONFIG_NAME, None)
        .unwrap_or_default()
        .with_web_url_override(env::var(WEB_URL_ENV).ok())
}

/// Directory holding the configuration file, also used for the log file.
pub(crate) fn config_dir() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(|p| p.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_hub_timings() {
        let config = AppConfig::default();
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.copy_feedback(), Duration::from_millis(1000));
        assert!(config.web_url.is_none());
    }

    #[test]
    fn environment_overrides_configured_web_url() {
        let config = AppConfig {
            web_url: Some("https://file.example.com".to_string()),
            ..AppConfig::default()
        }
        .with_web_url_override(Some("https://env.example.com".to_string()));

        assert_eq!(config.web_url.as_deref(), Some("https://env.example.com"));
    }

    #[test]
    fn blank_environment_value_is_ignored() {
        let config = AppConfig {
            web_url: Some("https://file.example.com".to_string()),
            ..AppConfig::default()
        }
        .with_web_url_override(Some("  ".to_string()));

        assert_eq!(config.web_url.as_deref(), Some("https://file.example.com"));
    }

    #[test]
    fn partial_config_file_falls_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "web_url": "https://a.b" }"#).unwrap();
        assert_eq!(config.web_url.as_deref(), Some("https://a.b"));
        assert_eq!(config.database_file, "tunes.db");
        assert_eq!(config.search_debounce_ms, 300);
    }
}
