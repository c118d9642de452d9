//! Core domain logic for the reserva booking service.
//! This crate is the single source of truth for booking invariants.

pub mod db;

// Re-exported so downstream crates share one rusqlite version.
pub use rusqlite;

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{core_version, default_log_level, init_logging};
pub use model::date_range::DateRange;
pub use model::reservation::{
    Reservation, ReservationDraft, ReservationId, ReservationValidationError,
};
pub use repo::calendar_repo::{CalendarRepository, SqliteCalendarRepository};
pub use repo::reservation_repo::{
    RepoError, RepoResult, ReservationRepository, SqliteReservationRepository,
};
pub use service::booking_service::BookingService;
pub use service::reservation_service::ReservationService;
