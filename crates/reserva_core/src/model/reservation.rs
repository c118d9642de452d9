//! Reservation domain record.
//!
//! # Responsibility
//! - Define the canonical reservation shape shared by persistence and the
//!   HTTP surface.
//! - Enforce presence and range validation before any SQL mutation.
//!
//! # Invariants
//! - `id` is stable and server-assigned; callers never pick identities.
//! - Contact fields are required but not format-validated beyond presence.
//! - `start_date <= end_date` and `num_guests >= 1` for every valid record.

use crate::model::date_range::{DateRange, InvertedRange};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a confirmed reservation.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ReservationId = Uuid;

/// Validation failures for reservation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationValidationError {
    /// A required contact field is empty or whitespace-only.
    MissingField(&'static str),
    /// `start_date` is after `end_date`.
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
    /// Guest count must be at least one.
    NoGuests,
}

impl Display for ReservationValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is empty"),
            Self::InvertedDateRange { start, end } => {
                write!(f, "start date {start} is after end date {end}")
            }
            Self::NoGuests => write!(f, "num_guests must be at least 1"),
        }
    }
}

impl Error for ReservationValidationError {}

impl From<InvertedRange> for ReservationValidationError {
    fn from(value: InvertedRange) -> Self {
        Self::InvertedDateRange {
            start: value.start,
            end: value.end,
        }
    }
}

/// Confirmed (or candidate) reservation for an inclusive date range.
///
/// Created exactly once through the booking transaction; immutable
/// afterwards. Wire field names follow the persisted schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Server-assigned stable id, serialized as an opaque string.
    pub id: ReservationId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Government-issued identifier; opaque text for core purposes.
    pub national_id: String,
    /// First night of the stay (inclusive).
    pub start_date: NaiveDate,
    /// Last night of the stay (inclusive).
    pub end_date: NaiveDate,
    pub num_guests: u32,
}

/// Contact and stay details for a reservation about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_guests: u32,
}

impl Reservation {
    /// Creates a reservation candidate with a freshly assigned id.
    ///
    /// The draft is not validated here; `validate()` runs on the booking
    /// path before any SQL mutation.
    pub fn new(draft: ReservationDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Creates a reservation with a caller-provided id.
    ///
    /// Used by read paths reconstructing persisted rows; the id must be
    /// the one originally assigned at booking time.
    pub fn with_id(id: ReservationId, draft: ReservationDraft) -> Self {
        Self {
            id,
            email: draft.email,
            first_name: draft.first_name,
            last_name: draft.last_name,
            national_id: draft.national_id,
            start_date: draft.start_date,
            end_date: draft.end_date,
            num_guests: draft.num_guests,
        }
    }

    /// Checks presence, range, and guest-count rules.
    pub fn validate(&self) -> Result<(), ReservationValidationError> {
        for (field, value) in [
            ("email", &self.email),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("national_id", &self.national_id),
        ] {
            if value.trim().is_empty() {
                return Err(ReservationValidationError::MissingField(field));
            }
        }

        if self.start_date > self.end_date {
            return Err(ReservationValidationError::InvertedDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }

        if self.num_guests == 0 {
            return Err(ReservationValidationError::NoGuests);
        }

        Ok(())
    }

    /// The inclusive stay range.
    ///
    /// Only meaningful after `validate()`; an inverted pair is reported
    /// as a validation error, never silently reordered.
    pub fn date_range(&self) -> Result<DateRange, ReservationValidationError> {
        Ok(DateRange::new(self.start_date, self.end_date)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_draft() -> ReservationDraft {
        ReservationDraft {
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            national_id: "X1234567".to_string(),
            start_date: date(2024, 12, 25),
            end_date: date(2024, 12, 31),
            num_guests: 2,
        }
    }

    #[test]
    fn new_assigns_distinct_ids() {
        let first = Reservation::new(valid_draft());
        let second = Reservation::new(valid_draft());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn valid_reservation_passes_validation() {
        assert!(Reservation::new(valid_draft()).validate().is_ok());
    }

    #[test]
    fn empty_contact_field_is_rejected() {
        let mut draft = valid_draft();
        draft.national_id = "   ".to_string();
        let err = Reservation::new(draft).validate().unwrap_err();
        assert_eq!(err, ReservationValidationError::MissingField("national_id"));
    }

    #[test]
    fn inverted_dates_are_rejected() {
        let mut draft = valid_draft();
        draft.start_date = date(2024, 12, 31);
        draft.end_date = date(2024, 12, 25);
        let err = Reservation::new(draft).validate().unwrap_err();
        assert!(matches!(
            err,
            ReservationValidationError::InvertedDateRange { .. }
        ));
    }

    #[test]
    fn zero_guests_is_rejected() {
        let mut draft = valid_draft();
        draft.num_guests = 0;
        let err = Reservation::new(draft).validate().unwrap_err();
        assert_eq!(err, ReservationValidationError::NoGuests);
    }

    #[test]
    fn wire_field_names_match_schema() {
        let reservation = Reservation::new(valid_draft());
        let json = serde_json::to_value(&reservation).unwrap();
        for field in [
            "id",
            "email",
            "first_name",
            "last_name",
            "national_id",
            "start_date",
            "end_date",
            "num_guests",
        ] {
            assert!(json.get(field).is_some(), "missing wire field `{field}`");
        }
        assert_eq!(json["start_date"], "2024-12-25");
        assert_eq!(json["end_date"], "2024-12-31");
    }
}
