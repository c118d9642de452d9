//! Booking transaction coordinator.
//!
//! # Responsibility
//! - Execute "check availability, insert reservation, flip calendar" as
//!   one atomic unit against a single transaction.
//! - Classify failures into the repository error taxonomy.
//!
//! # Invariants
//! - The availability check runs inside the same transaction as the
//!   writes; there is no window between check and insert.
//! - The transaction begins with `TransactionBehavior::Immediate`, so two
//!   concurrent bookings serialize on the write lock: at most one
//!   transaction can reserve any given calendar date.
//! - Any failure before commit rolls back completely; a failed booking
//!   leaves no residue and the caller may retry as a first attempt.

use crate::model::reservation::Reservation;
use crate::repo::calendar_repo::{is_range_available, mark_range_unavailable};
use crate::repo::reservation_repo::{insert_reservation, RepoError, RepoResult};
use crate::repo::{ensure_schema_version, table_exists};
use log::info;
use rusqlite::{Connection, TransactionBehavior};

/// Coordinates the atomic booking protocol over one connection.
///
/// Holds the connection mutably for the lifetime of the service because
/// starting a transaction requires exclusive use of the handle.
pub struct BookingService<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> BookingService<'conn> {
    /// Constructs the coordinator from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_schema_version(conn)?;
        for table in ["reservations", "calendar"] {
            if !table_exists(conn, table)? {
                return Err(RepoError::MissingRequiredTable(table));
            }
        }
        Ok(Self { conn })
    }

    /// Books the reservation if every date in its range is available.
    ///
    /// # Contract
    /// - Success: exactly one reservation row plus all calendar flips
    ///   become durable atomically; the stored reservation is returned.
    /// - `RepoError::DatesNotAvailable`: the range overlaps an existing
    ///   reservation or leaves the seeded horizon; nothing is persisted.
    /// - Any other error: storage failure, full rollback, nothing
    ///   persisted.
    pub fn book(&mut self, reservation: &Reservation) -> RepoResult<Reservation> {
        reservation.validate()?;
        let range = reservation.date_range()?;

        // Immediate mode takes the write lock before the availability
        // read, so a concurrent booker blocks here and then observes
        // this transaction's flips.
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if !is_range_available(&tx, &range)? {
            info!(
                "event=booking module=service status=conflict range={}",
                range
            );
            // Dropping the uncommitted transaction rolls it back.
            return Err(RepoError::DatesNotAvailable {
                start: range.start(),
                end: range.end(),
            });
        }

        insert_reservation(&tx, reservation)?;

        let flipped = mark_range_unavailable(&tx, &range)?;
        if flipped as i64 != range.num_days() {
            return Err(RepoError::InvalidData(format!(
                "calendar flip touched {flipped} rows for a {}-day range",
                range.num_days()
            )));
        }

        tx.commit()?;

        info!(
            "event=booking module=service status=ok reservation_id={} range={} num_guests={}",
            reservation.id, range, reservation.num_guests
        );
        Ok(reservation.clone())
    }
}
