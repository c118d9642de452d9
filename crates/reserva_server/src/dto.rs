//! Request/response payloads for the reservation API.

use chrono::NaiveDate;
use reserva_core::{Reservation, ReservationDraft};
use serde::{Deserialize, Serialize};

/// Body for `POST /api/reservations`.
///
/// A client-supplied `id` is ignored; identities are server-assigned at
/// booking time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservationRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_guests: u32,
}

impl From<CreateReservationRequest> for ReservationDraft {
    fn from(value: CreateReservationRequest) -> Self {
        Self {
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
            national_id: value.national_id,
            start_date: value.start_date,
            end_date: value.end_date,
            num_guests: value.num_guests,
        }
    }
}

/// Body for `GET /api/reservations`.
#[derive(Debug, Serialize)]
pub struct ReservationListResponse {
    pub reservations: Vec<Reservation>,
}

/// Query string for `GET /api/calendar/available-dates`.
#[derive(Debug, Deserialize)]
pub struct AvailableDatesQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Body for `GET /api/calendar/available-dates`.
#[derive(Debug, Serialize)]
pub struct AvailableDatesResponse {
    pub dates: Vec<NaiveDate>,
}

/// Body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
