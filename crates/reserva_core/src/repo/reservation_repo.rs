//! Reservation repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable read APIs over canonical `reservations` storage.
//! - Provide the transaction-scoped insert used by the booking
//!   coordinator.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Reservation::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - `find_all` ordering is stable within a call (`created_at`, then id).

use crate::db::DbError;
use crate::model::reservation::{Reservation, ReservationValidationError};
use crate::repo::{
    date_to_db, ensure_schema_version, parse_db_date, table_exists, table_has_column,
};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const RESERVATION_SELECT_SQL: &str = "SELECT
    id,
    email,
    first_name,
    last_name,
    national_id,
    start_date,
    end_date,
    num_guests
FROM reservations";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error taxonomy for reservation and calendar persistence.
#[derive(Debug)]
pub enum RepoError {
    /// Input failed domain validation before touching storage.
    Validation(ReservationValidationError),
    /// Connection, query, or transaction failure; wraps the cause.
    Db(DbError),
    /// No reservation row for the requested id.
    NotFound(String),
    /// The requested stay overlaps an existing reservation or leaves the
    /// seeded calendar horizon.
    DatesNotAvailable { start: NaiveDate, end: NaiveDate },
    /// Persisted state violates the schema contract.
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "reservation not found: {id}"),
            Self::DatesNotAvailable { start, end } => {
                write!(f, "dates not available between {start} and {end}")
            }
            Self::InvalidData(message) => {
                write!(f, "invalid persisted reservation data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ReservationValidationError> for RepoError {
    fn from(value: ReservationValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for reservation read paths.
pub trait ReservationRepository {
    /// Full scan of confirmed reservations, stable order within a call.
    fn find_all(&self) -> RepoResult<Vec<Reservation>>;
    /// Looks up one reservation; `RepoError::NotFound` when absent.
    fn find_by_id(&self, id: &str) -> RepoResult<Reservation>;
}

/// SQLite-backed reservation repository.
pub struct SqliteReservationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReservationRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_reservation_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ReservationRepository for SqliteReservationRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RESERVATION_SELECT_SQL} ORDER BY created_at ASC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut reservations = Vec::new();

        while let Some(row) = rows.next()? {
            reservations.push(parse_reservation_row(row)?);
        }

        Ok(reservations)
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Reservation> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RESERVATION_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;

        match rows.next()? {
            Some(row) => parse_reservation_row(row),
            None => Err(RepoError::NotFound(id.to_string())),
        }
    }
}

/// Inserts one reservation row through the given querier.
///
/// Intended for use inside an open booking transaction: pass the
/// transaction handle and the write joins its atomic unit. Does not
/// check availability; that is the coordinator's job.
pub fn insert_reservation(conn: &Connection, reservation: &Reservation) -> RepoResult<()> {
    reservation.validate()?;

    conn.execute(
        "INSERT INTO reservations (
            id,
            email,
            first_name,
            last_name,
            national_id,
            start_date,
            end_date,
            num_guests
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
        params![
            reservation.id.to_string(),
            reservation.email.as_str(),
            reservation.first_name.as_str(),
            reservation.last_name.as_str(),
            reservation.national_id.as_str(),
            date_to_db(reservation.start_date),
            date_to_db(reservation.end_date),
            i64::from(reservation.num_guests),
        ],
    )?;

    Ok(())
}

fn parse_reservation_row(row: &Row<'_>) -> RepoResult<Reservation> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in reservations.id"))
    })?;

    let start_text: String = row.get("start_date")?;
    let start_date = parse_db_date(&start_text, "reservations.start_date")?;

    let end_text: String = row.get("end_date")?;
    let end_date = parse_db_date(&end_text, "reservations.end_date")?;

    let num_guests_raw: i64 = row.get("num_guests")?;
    let num_guests = u32::try_from(num_guests_raw).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid num_guests value `{num_guests_raw}` in reservations.num_guests"
        ))
    })?;

    let reservation = Reservation {
        id,
        email: row.get("email")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        national_id: row.get("national_id")?,
        start_date,
        end_date,
        num_guests,
    };
    reservation.validate()?;
    Ok(reservation)
}

fn ensure_reservation_connection_ready(conn: &Connection) -> RepoResult<()> {
    ensure_schema_version(conn)?;

    if !table_exists(conn, "reservations")? {
        return Err(RepoError::MissingRequiredTable("reservations"));
    }

    for column in [
        "id",
        "email",
        "first_name",
        "last_name",
        "national_id",
        "start_date",
        "end_date",
        "num_guests",
        "created_at",
    ] {
        if !table_has_column(conn, "reservations", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "reservations",
                column,
            });
        }
    }

    Ok(())
}
