//! Calendar repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Own the per-date availability table that is the single source of
//!   truth for whether a date is bookable.
//! - Provide the range availability check and the bulk flip used inside
//!   the booking transaction.
//!
//! # Invariants
//! - A date is bookable iff a calendar row exists and `is_available = 1`;
//!   dates without a row are outside the horizon and never bookable.
//! - Seeding never flips an already-unavailable date back to available.
//! - The free functions here run against whatever querier they are given;
//!   the booking coordinator passes its open transaction.

use crate::model::date_range::DateRange;
use crate::repo::reservation_repo::{RepoError, RepoResult};
use crate::repo::{date_to_db, ensure_schema_version, parse_db_date, table_exists, table_has_column};
use chrono::NaiveDate;
use log::info;
use rusqlite::{params, Connection};

/// Repository interface for calendar horizon maintenance and reads.
pub trait CalendarRepository {
    /// Pre-populates calendar rows for every date in the range. Existing
    /// rows are left untouched. Returns the number of rows created.
    fn seed_range(&self, range: &DateRange) -> RepoResult<usize>;
    /// Lists the available dates inside the range, ascending.
    fn find_available_dates(&self, range: &DateRange) -> RepoResult<Vec<NaiveDate>>;
    /// Whether every date in the range is present and available.
    fn is_range_available(&self, range: &DateRange) -> RepoResult<bool>;
}

/// SQLite-backed calendar repository.
pub struct SqliteCalendarRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCalendarRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_calendar_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl CalendarRepository for SqliteCalendarRepository<'_> {
    fn seed_range(&self, range: &DateRange) -> RepoResult<usize> {
        let mut stmt = self
            .conn
            .prepare("INSERT OR IGNORE INTO calendar (date, is_available) VALUES (?1, 1);")?;

        let mut created = 0;
        for date in range.iter_days() {
            created += stmt.execute([date_to_db(date)])?;
        }

        info!(
            "event=calendar_seed module=repo status=ok range={} created={}",
            range, created
        );
        Ok(created)
    }

    fn find_available_dates(&self, range: &DateRange) -> RepoResult<Vec<NaiveDate>> {
        let mut stmt = self.conn.prepare(
            "SELECT date
             FROM calendar
             WHERE date BETWEEN ?1 AND ?2
               AND is_available = 1
             ORDER BY date ASC;",
        )?;
        let mut rows = stmt.query(params![date_to_db(range.start()), date_to_db(range.end())])?;

        let mut dates = Vec::new();
        while let Some(row) = rows.next()? {
            let value: String = row.get("date")?;
            dates.push(parse_db_date(&value, "calendar.date")?);
        }

        Ok(dates)
    }

    fn is_range_available(&self, range: &DateRange) -> RepoResult<bool> {
        is_range_available(self.conn, range)
    }
}

/// Checks range availability through the given querier.
///
/// The caller on the booking path must pass its open transaction so the
/// check and the subsequent writes observe one snapshot. Availability
/// requires both zero unavailable rows and full row coverage: a range
/// touching dates beyond the seeded horizon is not available.
pub fn is_range_available(conn: &Connection, range: &DateRange) -> RepoResult<bool> {
    let start = date_to_db(range.start());
    let end = date_to_db(range.end());

    let unavailable: i64 = conn.query_row(
        "SELECT COUNT(*)
         FROM calendar
         WHERE date BETWEEN ?1 AND ?2
           AND is_available = 0;",
        params![start, end],
        |row| row.get(0),
    )?;
    if unavailable > 0 {
        return Ok(false);
    }

    let covered: i64 = conn.query_row(
        "SELECT COUNT(*)
         FROM calendar
         WHERE date BETWEEN ?1 AND ?2;",
        params![start, end],
        |row| row.get(0),
    )?;
    Ok(covered == range.num_days())
}

/// Flips every calendar row in the range to unavailable through the given
/// querier. Returns the number of rows changed; the coordinator verifies
/// it equals the range day count before committing.
pub fn mark_range_unavailable(conn: &Connection, range: &DateRange) -> RepoResult<usize> {
    let changed = conn.execute(
        "UPDATE calendar
         SET is_available = 0
         WHERE date BETWEEN ?1 AND ?2;",
        params![date_to_db(range.start()), date_to_db(range.end())],
    )?;
    Ok(changed)
}

fn ensure_calendar_connection_ready(conn: &Connection) -> RepoResult<()> {
    ensure_schema_version(conn)?;

    if !table_exists(conn, "calendar")? {
        return Err(RepoError::MissingRequiredTable("calendar"));
    }

    for column in ["date", "is_available"] {
        if !table_has_column(conn, "calendar", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "calendar",
                column,
            });
        }
    }

    Ok(())
}
