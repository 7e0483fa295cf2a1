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

//! Domain models and core data structures.
//!
//! This module defines the tune documents held by the document store and the
//! display rows the Hub derives from them. Rows are a pure projection: they
//! are rebuilt from documents on every search and never written back.

pub(crate) mod debounce;
pub(crate) mod feedback;
pub(crate) mod hub;

use std::{fmt, str::FromStr};

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::format::{format_displacement, format_timestamp};

/// A tune document as stored in, and returned by, the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TuneDocument {
    pub(crate) tune_id: String,
    #[serde(default)]
    pub(crate) vehicle_name: Option<String>,
    #[serde(default)]
    pub(crate) signature: String,
    #[serde(default)]
    pub(crate) engine_make: String,
    #[serde(default)]
    pub(crate) engine_code: String,
    #[serde(default)]
    pub(crate) displacement: Option<f64>,
    #[serde(default)]
    pub(crate) cylinders_count: Option<i64>,
    #[serde(default)]
    pub(crate) aspiration: String,
    #[serde(default)]
    pub(crate) year: Option<i64>,
    #[serde(rename = "$updatedAt")]
    pub(crate) updated_at: i64,
}

impl TuneDocument {
    /// Tunes without a vehicle name are unpublished drafts.
    pub(crate) fn is_published(&self) -> bool {
        self.vehicle_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }
}

/// Result of a document store search.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TuneList {
    pub(crate) documents: Vec<TuneDocument>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Aspiration {
    NaturallyAspirated,
    Turbocharged,
    Supercharged,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown aspiration code {0:?}")]
pub(crate) struct UnknownAspiration(pub(crate) String);

impl Aspiration {
    /// Label shown for codes missing from the aspiration table.
    pub(crate) const UNKNOWN_LABEL: &'static str = "Unknown";

    pub(crate) fn from_code(code: &str) -> Result<Self, UnknownAspiration> {
        match code {
            "na" => Ok(Self::NaturallyAspirated),
            "turbocharger" => Ok(Self::Turbocharged),
            "supercharger" => Ok(Self::Supercharged),
            other => Err(UnknownAspiration(other.to_string())),
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::NaturallyAspirated => "Naturally aspirated",
            Self::Turbocharged => "Turbocharged",
            Self::Supercharged => "Supercharged",
        }
    }

    /// Label for a raw code, falling back to [`Self::UNKNOWN_LABEL`].
    pub(crate) fn label_for_code(code: &str) -> &'static str {
        Self::from_code(code)
            .map(Self::label)
            .unwrap_or(Self::UNKNOWN_LABEL)
    }
}

impl FromStr for Aspiration {
    type Err = UnknownAspiration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Aspiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A display-ready projection of a published [`TuneDocument`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TuneRow {
    pub(crate) key: String,
    pub(crate) tune_id: String,
    pub(crate) vehicle_name: String,
    pub(crate) signature: String,
    pub(crate) engine_make: String,
    pub(crate) engine_code: String,
    pub(crate) displacement: String,
    pub(crate) cylinders_count: Option<i64>,
    pub(crate) aspiration: &'static str,
    pub(crate) year: Option<i64>,
    pub(crate) published_at: String,
    /// Authorship is not modelled yet, always `None`.
    pub(crate) author: Option<String>,
    /// Stars are not counted yet, always `None`.
    pub(crate) stars: Option<u32>,
}

impl TuneRow {
    /// Projects a document into a row, or `None` for unpublished tunes.
    pub(crate) fn from_document(doc: TuneDocument) -> Option<Self> {
        Self::from_document_with(doc, |secs| format_timestamp(secs, &Local))
    }

    fn from_document_with(
        doc: TuneDocument,
        format_published: impl Fn(i64) -> String,
    ) -> Option<Self> {
        if !doc.is_published() {
            return None;
        }

        Some(Self {
            key: doc.tune_id.clone(),
            aspiration: Aspiration::label_for_code(&doc.aspiration),
            displacement: format_displacement(doc.displacement),
            published_at: format_published(doc.updated_at),
            vehicle_name: doc.vehicle_name.unwrap_or_default(),
            tune_id: doc.tune_id,
            signature: doc.signature,
            engine_make: doc.engine_make,
            engine_code: doc.engine_code,
            cylinders_count: doc.cylinders_count,
            year: doc.year,
            author: None,
            stars: None,
        })
    }
}

/// Builds display rows from a search result, dropping unpublished tunes and
/// keeping the store's ordering.
pub(crate) fn rows_from_documents(list: TuneList) -> Vec<TuneRow> {
    list.documents
        .into_iter()
        .filter_map(TuneRow::from_document)
        .collect()
}
