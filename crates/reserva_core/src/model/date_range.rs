//! Inclusive calendar-date range.
//!
//! # Responsibility
//! - Carry a validated `[start, end]` pair of calendar dates.
//! - Provide day counting and iteration for calendar operations.
//!
//! # Invariants
//! - `start <= end` always holds for a constructed range.
//! - Both endpoints are plain calendar dates; no time-of-day component.

use chrono::{Days, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for an inverted date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvertedRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Display for InvertedRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "start date {} is after end date {}",
            self.start, self.end
        )
    }
}

impl Error for InvertedRange {}

/// Inclusive range of calendar dates, `[start, end]`.
///
/// Both bounds are part of the stay: a one-night reservation has
/// `start == end` and covers exactly one calendar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvertedRange> {
        if start > end {
            return Err(InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar dates covered, counting both endpoints.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterates every date in the range in ascending order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start
            .iter_days()
            .take_while(move |date| *date <= end)
    }

    /// Shifts the whole range forward by `days`.
    pub fn shifted_forward(&self, days: u64) -> Option<Self> {
        let start = self.start.checked_add_days(Days::new(days))?;
        let end = self.end.checked_add_days(Days::new(days))?;
        Some(Self { start, end })
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
