use crate::errors::{AppError, AppResult};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;
use std::fmt;

/// A work location name from the `Location` table.
///
/// The valid set lives in the database, not in code: `Location::lookup` checks
/// a name against the persisted vocabulary at runtime, so adding a location is
/// a row insert, not a rebuild.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Location counted by the weekly attendance aggregates.
    pub const OFFICE: &'static str = "office";

    /// Normalize user input (trim + lowercase). Does not validate membership.
    pub fn normalize(name: &str) -> AppResult<String> {
        let n = name.trim().to_lowercase();
        if n.is_empty() {
            return Err(AppError::InvalidLocation(name.to_string()));
        }
        Ok(n)
    }

    /// Resolve `name` against the `Location` table.
    /// Returns `None` when the name is not part of the vocabulary.
    pub fn lookup(conn: &Connection, name: &str) -> AppResult<Option<Self>> {
        let n = Self::normalize(name)?;
        let found: Option<String> = conn
            .query_row(
                "SELECT location FROM Location WHERE location = ?1",
                [&n],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.map(Location))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ToSql for Location {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl FromSql for Location {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(Location(value.as_str()?.to_string()))
    }
}
