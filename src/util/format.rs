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

//! Display formatting for tune fields.

use chrono::{DateTime, TimeZone};

const PUBLISHED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats an engine displacement in liters for display.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_displacement(Some(2.0)), "2l");
/// assert_eq!(format_displacement(Some(1.6)), "1.6l");
/// ```
pub(crate) fn format_displacement(liters: Option<f64>) -> String {
    match liters {
        Some(liters) => format!("{}l", liters),
        None => String::new(),
    }
}

/// Formats a seconds-since-epoch timestamp as a date and time in `tz`.
///
/// Out of range timestamps produce an empty string.
pub(crate) fn format_timestamp<Tz: TimeZone>(seconds: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp(seconds, 0) {
        Some(utc) => utc.with_timezone(tz).format(PUBLISHED_FORMAT).to_string(),
        None => String::new(),
    }
}

/// Formats a value that may not be known yet, using `unknown` in its place.
pub(crate) fn or_placeholder<T: ToString>(value: Option<&T>, unknown: &str) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| unknown.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn whole_liters_have_no_decimal_part() {
        assert_eq!(format_displacement(Some(2.0)), "2l");
    }

    #[test]
    fn fractional_liters_keep_their_decimals() {
        assert_eq!(format_displacement(Some(1.6)), "1.6l");
    }

    #[test]
    fn unknown_displacement_is_blank() {
        assert_eq!(format_displacement(None), "");
    }

    #[test]
    fn timestamp_is_rendered_in_the_given_zone() {
        assert_eq!(format_timestamp(1_700_000_000, &Utc), "2023-11-14 22:13");
    }

    #[test]
    fn placeholder_is_used_when_value_is_missing() {
        assert_eq!(or_placeholder::<u32>(None, "?"), "?");
        assert_eq!(or_placeholder(Some(&5), "?"), "5");
    }
}
