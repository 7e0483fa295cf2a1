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

//! Importing tune documents from JSON exports.
//!
//! The expected input is a JSON array of documents in the same shape the
//! document database serves them (`tuneId`, `vehicleName`, ..., `$updatedAt`).

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use tracing::info;

use crate::{db::TuneStore, model::TuneDocument};

/// Reads a JSON export from `path` and upserts every document into `store`.
///
/// Returns the number of documents written.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed, or if the store
/// rejects the write. Nothing is written when parsing fails.
pub(crate) fn import_documents(store: &mut impl TuneStore, path: &Path) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let documents: Vec<TuneDocument> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse tune documents in {}", path.display()))?;

    let count = store.upsert_tunes(&documents)?;
    info!(path = %path.display(), count, "imported tune documents");

    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::db::testing::memory_store;

    #[test]
    fn imports_documents_from_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{ "tuneId": "a", "vehicleName": "Supra", "aspiration": "turbocharger", "$updatedAt": 10 }},
                {{ "tuneId": "b", "$updatedAt": 20 }}
            ]"#
        )
        .unwrap();

        let mut store = memory_store();
        let count = import_documents(&mut store, file.path()).unwrap();

        assert_eq!(count, 2);
        let listed = store.search_tunes(None).unwrap();
        assert_eq!(listed.documents.len(), 2);
        assert_eq!(listed.documents[0].tune_id, "b");
        assert_eq!(listed.documents[0].vehicle_name, None);
    }

    #[test]
    fn malformed_file_writes_nothing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "tuneId": "a" "#).unwrap();

        let mut store = memory_store();
        assert!(import_documents(&mut store, file.path()).is_err());
        assert!(store.search_tunes(None).unwrap().documents.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut store = memory_store();
        assert!(import_documents(&mut store, Path::new("/nonexistent/tunes.json")).is_err());
    }
}
