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

//! Database row mapping for tune documents.

use rusqlite::Row;

use crate::model::TuneDocument;

impl TuneDocument {
    /// Maps an SQLite row, selected with the store's column list, to a
    /// [`TuneDocument`].
    ///
    /// This is a helper function designed to be used with
    /// [`rusqlite::Statement::query_map`].
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            tune_id: row.get(0)?,
            vehicle_name: row.get(1)?,
            signature: row.get(2)?,
            engine_make: row.get(3)?,
            engine_code: row.get(4)?,
            displacement: row.get(5)?,
            cylinders_count: row.get(6)?,
            aspiration: row.get(7)?,
            year: row.get(8)?,
            updated_at: row.get(9)?,
        })
    }
}
