//! Domain model for calendar bookings.
//!
//! # Responsibility
//! - Define the canonical reservation record and its validation rules.
//! - Provide the inclusive date-range value type used by availability
//!   checks and calendar updates.
//!
//! # Invariants
//! - Every reservation is identified by a stable `ReservationId`.
//! - A persisted reservation is immutable; there is no update or cancel
//!   path in core.

pub mod date_range;
pub mod reservation;
