//! Chart-ready aggregates over the full trip collection.
//!
//! Every derivation ignores filter state: dashboards chart the whole collection while the
//! trips table shows the filtered subset.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use charter_domain::{CharterType, Revenue, Trip, TripStatus};

use crate::{
    chart::ChartSeries,
    dates::{month_label, weekday_label},
    error::{CoreError, CoreResult},
    status_service::StatusResolver,
};

/// Booking count for one day of the current week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub label: &'static str,
    pub count: usize,
}

/// Booking count for one month label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRevenue {
    pub charter_type: CharterType,
    pub revenue: Revenue,
}

/// Revenue summed per charter type, keyed in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RevenueByCharterType {
    entries: Vec<CategoryRevenue>,
}

impl RevenueByCharterType {
    pub fn get(&self, charter_type: &str) -> Option<Revenue> {
        self.entries
            .iter()
            .find(|entry| entry.charter_type.as_str() == charter_type)
            .map(|entry| entry.revenue)
    }

    pub fn entries(&self) -> &[CategoryRevenue] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> Revenue {
        self.entries.iter().map(|entry| entry.revenue).sum()
    }

    pub fn to_series(&self) -> ChartSeries<Revenue> {
        self.entries
            .iter()
            .map(|entry| (entry.charter_type.to_string(), entry.revenue))
            .collect()
    }
}

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    pub total_bookings: usize,
    pub upcoming: usize,
    pub ongoing: usize,
    pub completed: usize,
    pub total_revenue: Revenue,
}

/// Aggregates trip collections into dashboard chart data.
pub struct SummaryService;

impl SummaryService {
    /// The seven days of the Monday-first week containing `today`.
    ///
    /// Fails with [`CoreError::InvalidDate`] when the week runs past the representable calendar.
    pub fn week_of(today: NaiveDate) -> CoreResult<[NaiveDate; 7]> {
        let out_of_range = || CoreError::InvalidDate {
            value: today.to_string(),
            reason: "week extends beyond the supported calendar range".into(),
        };
        let back = u64::from(today.weekday().num_days_from_monday());
        let monday = today
            .checked_sub_days(Days::new(back))
            .ok_or_else(out_of_range)?;
        let week: Vec<NaiveDate> = monday.iter_days().take(7).collect();
        week.try_into().map_err(|_| out_of_range())
    }

    /// Per-day booking counts for the week containing `today`, Monday first.
    ///
    /// All seven days are present; days without trips carry a zero count.
    pub fn weekly_bookings(trips: &[Trip], today: NaiveDate) -> CoreResult<Vec<DayBucket>> {
        let week = Self::week_of(today)?;
        let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
        for trip in trips {
            if week[0] <= trip.date && trip.date <= week[6] {
                *counts.entry(trip.date).or_insert(0) += 1;
            }
        }

        let buckets: Vec<DayBucket> = week
            .into_iter()
            .map(|date| DayBucket {
                date,
                label: weekday_label(date.weekday()),
                count: counts.get(&date).copied().unwrap_or(0),
            })
            .collect();
        tracing::debug!(week_start = %week[0], trips = trips.len(), "built weekly buckets");
        Ok(buckets)
    }

    /// Booking counts per month label, emitted in `month_order`.
    ///
    /// Months without trips are omitted rather than zero-filled, as are months missing from
    /// `month_order`. A label repeated in `month_order` is emitted once, at its first position.
    pub fn monthly_bookings<S: AsRef<str>>(trips: &[Trip], month_order: &[S]) -> Vec<MonthBucket> {
        let mut counts: HashMap<&'static str, usize> = HashMap::new();
        for trip in trips {
            *counts.entry(month_label(trip.date)).or_insert(0) += 1;
        }

        let mut buckets: Vec<MonthBucket> = Vec::new();
        for label in month_order.iter().map(AsRef::as_ref) {
            if buckets.iter().any(|bucket| bucket.label == label) {
                continue;
            }
            if let Some(&count) = counts.get(label) {
                buckets.push(MonthBucket {
                    label: label.to_string(),
                    count,
                });
            }
        }
        tracing::debug!(months = buckets.len(), trips = trips.len(), "built monthly buckets");
        buckets
    }

    /// Sums revenue per charter type.
    pub fn revenue_by_charter_type(trips: &[Trip]) -> RevenueByCharterType {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<CategoryRevenue> = Vec::new();
        for trip in trips {
            let existing = index.get(trip.charter_type.as_str()).copied();
            match existing {
                Some(position) => entries[position].revenue += trip.revenue,
                None => {
                    index.insert(trip.charter_type.as_str(), entries.len());
                    entries.push(CategoryRevenue {
                        charter_type: trip.charter_type.clone(),
                        revenue: trip.revenue,
                    });
                }
            }
        }
        tracing::debug!(categories = entries.len(), "summed revenue by charter type");
        RevenueByCharterType { entries }
    }

    /// Counts trips per status and totals revenue as of `today`.
    pub fn overview(trips: &[Trip], today: NaiveDate) -> DashboardOverview {
        trips.iter().fold(
            DashboardOverview::default(),
            |mut overview, trip| {
                overview.total_bookings += 1;
                overview.total_revenue += trip.revenue;
                match StatusResolver::status_of(trip, today) {
                    TripStatus::Upcoming => overview.upcoming += 1,
                    TripStatus::Ongoing => overview.ongoing += 1,
                    TripStatus::Completed => overview.completed += 1,
                }
                overview
            },
        )
    }

    pub fn weekly_series(buckets: &[DayBucket]) -> ChartSeries<usize> {
        buckets.iter().map(|bucket| (bucket.label, bucket.count)).collect()
    }

    pub fn monthly_series(buckets: &[MonthBucket]) -> ChartSeries<usize> {
        buckets
            .iter()
            .map(|bucket| (bucket.label.clone(), bucket.count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trip(id: u64, charter_type: &str, cents: u64, date: NaiveDate) -> Trip {
        Trip::new(id, charter_type, format!("Trip {id}"), Revenue::from_cents(cents), date)
    }

    #[test]
    fn week_starts_on_monday_even_from_sunday() {
        // 2025-01-05 is a Sunday.
        let week = SummaryService::week_of(ymd(2025, 1, 5)).unwrap();
        assert_eq!(week[0], ymd(2024, 12, 30));
        assert_eq!(week[6], ymd(2025, 1, 5));
    }

    #[test]
    fn weekly_buckets_are_zero_filled_monday_to_sunday() {
        let trips = vec![
            trip(1, "Full Day", 0, ymd(2024, 12, 30)),
            trip(2, "Full Day", 0, ymd(2025, 1, 2)),
            trip(3, "Half Day", 0, ymd(2025, 1, 2)),
            trip(4, "Half Day", 0, ymd(2025, 1, 8)),
        ];
        let buckets = SummaryService::weekly_bookings(&trips, ymd(2025, 1, 1)).unwrap();
        let labels: Vec<&str> = buckets.iter().map(|bucket| bucket.label).collect();
        let counts: Vec<usize> = buckets.iter().map(|bucket| bucket.count).collect();
        assert_eq!(labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(counts, vec![1, 0, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn weekly_buckets_for_empty_collection_still_have_seven_days() {
        let buckets = SummaryService::weekly_bookings(&[], ymd(2025, 6, 15)).unwrap();
        assert_eq!(buckets.len(), 7);
        assert!(buckets.iter().all(|bucket| bucket.count == 0));
    }

    #[test]
    fn week_past_the_last_representable_day_is_an_error() {
        // NaiveDate::MAX falls on a Monday, so its Sunday does not exist.
        let err = SummaryService::weekly_bookings(&[], NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDate { .. }));
        assert!(SummaryService::week_of(NaiveDate::MAX).is_err());
    }

    #[test]
    fn week_ending_on_the_last_representable_day_is_built() {
        let sunday = NaiveDate::MAX - Days::new(1);
        let week = SummaryService::week_of(sunday).unwrap();
        assert_eq!(week[0], NaiveDate::MAX - Days::new(7));
        assert_eq!(week[6], sunday);
    }

    #[test]
    fn monthly_buckets_are_sparse_and_follow_the_given_order() {
        let trips = vec![
            trip(1, "Full Day", 0, ymd(2025, 1, 20)),
            trip(2, "Full Day", 0, ymd(2024, 12, 30)),
            trip(3, "Half Day", 0, ymd(2025, 1, 2)),
            trip(4, "Half Day", 0, ymd(2025, 3, 2)),
        ];
        let order = ["Dec", "Jan", "Feb", "Mar"];
        let series = SummaryService::monthly_series(&SummaryService::monthly_bookings(&trips, &order));
        assert_eq!(series.labels, vec!["Dec", "Jan", "Mar"]);
        assert_eq!(series.values, vec![1, 2, 1]);
    }

    #[test]
    fn monthly_buckets_skip_months_outside_the_order_and_duplicates() {
        let trips = vec![
            trip(1, "Full Day", 0, ymd(2025, 1, 20)),
            trip(2, "Full Day", 0, ymd(2025, 9, 1)),
        ];
        let buckets = SummaryService::monthly_bookings(&trips, &["Jan", "Jan", "Feb"]);
        assert_eq!(
            buckets,
            vec![MonthBucket {
                label: "Jan".into(),
                count: 1
            }]
        );
    }

    #[test]
    fn revenue_keeps_first_occurrence_order_and_exact_sums() {
        let trips = vec![
            trip(1, "VIP Transfer", 80_001, ymd(2025, 1, 2)),
            trip(2, "Half Day", 120_000, ymd(2025, 1, 8)),
            trip(3, "VIP Transfer", 9_999, ymd(2025, 1, 9)),
        ];
        let revenue = SummaryService::revenue_by_charter_type(&trips);
        let series = revenue.to_series();
        assert_eq!(series.labels, vec!["VIP Transfer", "Half Day"]);
        assert_eq!(
            series.values,
            vec![Revenue::from_cents(90_000), Revenue::from_cents(120_000)]
        );
        assert_eq!(revenue.get("Full Day"), None);
        assert_eq!(revenue.total(), trips.iter().map(|trip| trip.revenue).sum());
    }

    #[test]
    fn revenue_sums_beyond_u64_do_not_overflow() {
        let trips = vec![
            trip(1, "Full Day", u64::MAX, ymd(2025, 1, 2)),
            trip(2, "Full Day", 1, ymd(2025, 1, 3)),
        ];
        let revenue = SummaryService::revenue_by_charter_type(&trips);
        let expected = u128::from(u64::MAX) + 1;
        assert_eq!(revenue.get("Full Day").map(Revenue::cents), Some(expected));
        assert_eq!(revenue.total().cents(), expected);
        assert_eq!(
            SummaryService::overview(&trips, ymd(2025, 1, 5)).total_revenue.cents(),
            expected
        );
    }

    #[test]
    fn overview_counts_statuses_and_revenue() {
        let trips = vec![
            trip(1, "Full Day", 100, ymd(2025, 1, 4)),
            trip(2, "Full Day", 200, ymd(2025, 1, 5)),
            trip(3, "Half Day", 300, ymd(2025, 1, 6)),
            trip(4, "Half Day", 400, ymd(2025, 1, 7)),
        ];
        let overview = SummaryService::overview(&trips, ymd(2025, 1, 5));
        assert_eq!(
            overview,
            DashboardOverview {
                total_bookings: 4,
                upcoming: 2,
                ongoing: 1,
                completed: 1,
                total_revenue: Revenue::from_cents(1_000),
            }
        );
    }
}
