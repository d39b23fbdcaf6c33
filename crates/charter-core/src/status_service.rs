//! Lifecycle status derivation for trips.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use charter_domain::{Trip, TripStatus};

use crate::{dates::parse_iso_date, time::Clock, CoreResult};

/// Resolves a trip's lifecycle status from its date and the current day.
pub struct StatusResolver;

impl StatusResolver {
    /// Past days are `Completed`, the current day is `Ongoing` and later days are `Upcoming`.
    pub fn resolve(date: NaiveDate, today: NaiveDate) -> TripStatus {
        if date < today {
            TripStatus::Completed
        } else if date == today {
            TripStatus::Ongoing
        } else {
            TripStatus::Upcoming
        }
    }

    /// Same as [`StatusResolver::resolve`]; the time of day on `now` is ignored.
    pub fn resolve_at(date: NaiveDate, now: NaiveDateTime) -> TripStatus {
        Self::resolve(date, now.date())
    }

    /// Parses `raw` as an ISO date before resolving it.
    pub fn resolve_str(raw: &str, today: NaiveDate) -> CoreResult<TripStatus> {
        let date = parse_iso_date(raw)?;
        Ok(Self::resolve(date, today))
    }

    pub fn status_of(trip: &Trip, today: NaiveDate) -> TripStatus {
        Self::resolve(trip.date, today)
    }

    pub fn status_with_clock(trip: &Trip, clock: &dyn Clock) -> TripStatus {
        Self::status_of(trip, clock.today())
    }

    /// Pairs each trip with its status, preserving input order.
    pub fn annotate(trips: &[Trip], today: NaiveDate) -> Vec<TripRow<'_>> {
        trips
            .iter()
            .map(|trip| TripRow {
                trip,
                status: Self::status_of(trip, today),
            })
            .collect()
    }
}

/// A trip alongside the status it had on the query day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TripRow<'a> {
    #[serde(flatten)]
    pub trip: &'a Trip,
    pub status: TripStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{time::FixedClock, CoreError};
    use charter_domain::Revenue;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn resolve_compares_calendar_days() {
        let today = ymd(2025, 1, 5);
        assert_eq!(StatusResolver::resolve(ymd(2025, 1, 4), today), TripStatus::Completed);
        assert_eq!(StatusResolver::resolve(ymd(2025, 1, 5), today), TripStatus::Ongoing);
        assert_eq!(StatusResolver::resolve(ymd(2025, 1, 6), today), TripStatus::Upcoming);
    }

    #[test]
    fn same_day_is_ongoing_at_any_time_of_day() {
        let date = ymd(2025, 1, 5);
        for (h, m, s) in [(0, 0, 0), (12, 30, 0), (23, 59, 59)] {
            let now = date.and_hms_opt(h, m, s).unwrap();
            assert_eq!(StatusResolver::resolve_at(date, now), TripStatus::Ongoing);
        }
    }

    #[test]
    fn resolve_str_rejects_invalid_dates() {
        let err = StatusResolver::resolve_str("2025-02-29", ymd(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDate { .. }));
        assert_eq!(
            StatusResolver::resolve_str("2024-02-29", ymd(2025, 1, 1)).unwrap(),
            TripStatus::Completed
        );
    }

    #[test]
    fn status_with_clock_reads_the_injected_day() {
        let trip = Trip::new(1, "Half Day", "Sunset Tour", Revenue::from_major(1200), ymd(2025, 1, 8));
        let clock = FixedClock::on(ymd(2025, 1, 8));
        assert_eq!(StatusResolver::status_with_clock(&trip, &clock), TripStatus::Ongoing);
    }

    #[test]
    fn annotate_preserves_order() {
        let trips = vec![
            Trip::new(2, "Full Day", "B", Revenue::ZERO, ymd(2025, 3, 1)),
            Trip::new(1, "Full Day", "A", Revenue::ZERO, ymd(2025, 1, 1)),
        ];
        let rows = StatusResolver::annotate(&trips, ymd(2025, 2, 1));
        let ids: Vec<u64> = rows.iter().map(|row| row.trip.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(rows[0].status, TripStatus::Upcoming);
        assert_eq!(rows[1].status, TripStatus::Completed);
    }
}
