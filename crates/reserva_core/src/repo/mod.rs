//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for reservations and
//!   the availability calendar.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Reservation::validate()` before
//!   persistence.
//! - Repository APIs return semantic errors (`NotFound`,
//!   `DatesNotAvailable`) in addition to DB transport errors.
//! - Transaction-scoped helpers accept `&Connection`; a
//!   `rusqlite::Transaction` derefs to one, so the same code runs against
//!   a bare connection or an open booking transaction.

pub mod calendar_repo;
pub mod reservation_repo;

use chrono::NaiveDate;
use log::warn;
use rusqlite::Connection;

use crate::db::migrations::latest_version;
use reservation_repo::{RepoError, RepoResult};

/// Canonical storage encoding for calendar dates (ISO 8601).
pub(crate) fn date_to_db(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a stored date, rejecting anything that is not canonical ISO
/// 8601. Corrupt values are reported, never masked with a placeholder.
pub(crate) fn parse_db_date(value: &str, column: &'static str) -> RepoResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        warn!(
            "event=date_parse module=repo status=error column={column} value={value}"
        );
        RepoError::InvalidData(format!("invalid date value `{value}` in {column}"))
    })
}

pub(crate) fn ensure_schema_version(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }
    Ok(())
}

pub(crate) fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table'
              AND name = ?1
         );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

pub(crate) fn table_has_column(
    conn: &Connection,
    table: &str,
    column: &str,
) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get("name")?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}
