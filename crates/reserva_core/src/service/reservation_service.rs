//! Reservation read-path service.
//!
//! # Responsibility
//! - Provide stable query entry points for callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic; reads are snapshot-consistent
//!   but unsynchronized with concurrent bookings.

use crate::model::reservation::Reservation;
use crate::repo::reservation_repo::{RepoResult, ReservationRepository};

/// Use-case service wrapper for reservation queries.
pub struct ReservationService<R: ReservationRepository> {
    repo: R,
}

impl<R: ReservationRepository> ReservationService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all confirmed reservations in stable order.
    pub fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        self.repo.find_all()
    }

    /// Gets one reservation by its opaque string id.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn find_by_id(&self, id: &str) -> RepoResult<Reservation> {
        self.repo.find_by_id(id)
    }
}
