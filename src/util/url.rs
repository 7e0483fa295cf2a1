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

//! Absolute application URLs.
//!
//! Deep links use the web client's hash router, so every path is placed after
//! a `#` marker on the configured base URL.

use url::Url;

use crate::config::{AppConfig, ConfigError};

/// Builds absolute URLs against the configured web base.
#[derive(Debug, Clone)]
pub(crate) struct UrlBuilder {
    base: String,
}

impl UrlBuilder {
    /// Creates a builder for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWebUrl`] if `base` is not an absolute
    /// URL.
    pub(crate) fn new(base: &str) -> Result<Self, ConfigError> {
        let base = base.trim().trim_end_matches('/');
        Url::parse(base).map_err(|source| ConfigError::InvalidWebUrl {
            url: base.to_string(),
            source,
        })?;

        Ok(Self {
            base: base.to_string(),
        })
    }

    /// Creates a builder from the application configuration.
    ///
    /// A missing web URL is a deployment mistake, so this is checked once at
    /// start-up rather than every time a link is built.
    pub(crate) fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        match config.web_url.as_deref() {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Err(ConfigError::MissingWebUrl),
        }
    }

    pub(crate) fn base(&self) -> &str {
        &self.base
    }

    /// Joins `parts` with `/` and appends them to the base after the `#`
    /// route marker.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let urls = UrlBuilder::new("https://app.example.com")?;
    /// assert_eq!(urls.build_full_url(&["tune", "abc123"]), "https://app.example.com/#tune/abc123");
    /// ```
    pub(crate) fn build_full_url<S: AsRef<str>>(&self, parts: &[S]) -> String {
        let path = parts
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/#{}", self.base, path)
    }

    /// Builds a URL whose query carries `redirect=<redirect_page>` followed by
    /// `params`.
    ///
    /// `redirect` is always the first key. A `redirect` entry in `params`
    /// replaces its value in place, as does any repeated key.
    pub(crate) fn build_redirect_url(&self, redirect_page: &str, params: &[(&str, &str)]) -> String {
        let mut pairs: Vec<(&str, &str)> = vec![("redirect", redirect_page)];
        for &(key, value) in params {
            match pairs.iter_mut().find(|(k, _)| *k == key) {
                Some(existing) => existing.1 = value,
                None => pairs.push((key, value)),
            }
        }

        // The base was validated in `new`
        let mut url = match Url::parse(&self.base) {
            Ok(url) => url,
            Err(_) => return self.base.clone(),
        };
        url.query_pairs_mut().clear().extend_pairs(pairs);

        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> UrlBuilder {
        UrlBuilder::new("https://app.example.com").unwrap()
    }

    #[test]
    fn full_url_places_path_after_hash_marker() {
        assert_eq!(
            urls().build_full_url(&["tune", "abc123"]),
            "https://app.example.com/#tune/abc123"
        );
    }

    #[test]
    fn full_url_keeps_route_paths_verbatim() {
        assert_eq!(
            urls().build_full_url(&["/t/abc123/tune"]),
            "https://app.example.com/#/t/abc123/tune"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let urls = UrlBuilder::new("https://app.example.com/").unwrap();
        assert_eq!(urls.build_full_url(&["hub"]), "https://app.example.com/#hub");
    }

    #[test]
    fn redirect_url_encodes_params() {
        let url = urls().build_redirect_url("login", &[("next", "/hub")]);
        assert_eq!(url, "https://app.example.com/?redirect=login&next=%2Fhub");
        assert!(url.contains("redirect=login"));
        assert!(url.contains("next=%2Fhub"));
    }

    #[test]
    fn redirect_param_replaces_value_but_stays_first() {
        let url = urls().build_redirect_url("login", &[("next", "a"), ("redirect", "signup")]);
        assert_eq!(url, "https://app.example.com/?redirect=signup&next=a");
    }

    #[test]
    fn repeated_param_keeps_last_value() {
        let url = urls().build_redirect_url("login", &[("next", "a"), ("next", "b")]);
        assert_eq!(url, "https://app.example.com/?redirect=login&next=b");
    }

    #[test]
    fn missing_web_url_is_a_config_error() {
        let config = AppConfig::default();
        assert!(matches!(
            UrlBuilder::from_config(&config),
            Err(ConfigError::MissingWebUrl)
        ));
    }

    #[test]
    fn relative_web_url_is_rejected() {
        let config = AppConfig {
            web_url: Some("app.example.com".to_string()),
            ..AppConfig::default()
        };
        assert!(matches!(
            UrlBuilder::from_config(&config),
            Err(ConfigError::InvalidWebUrl { .. })
        ));
    }
}
