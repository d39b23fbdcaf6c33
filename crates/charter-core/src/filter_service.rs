//! Independent, AND-combined trip filters.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use charter_domain::{CharterType, Trip, TripStatus};

use crate::{dates::parse_iso_date, status_service::StatusResolver, CoreError, CoreResult};

/// Form value that stands for "no constraint" on status and charter type.
pub const ALL_OPTION: &str = "All";

/// Filter constraints; every `None` field is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TripStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charter_type: Option<CharterType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_status(mut self, status: TripStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_charter_type(mut self, charter_type: impl Into<CharterType>) -> Self {
        self.charter_type = Some(charter_type.into());
        self
    }

    #[must_use]
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Clears every constraint.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_unconstrained(&self) -> bool {
        self.status.is_none()
            && self.charter_type.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    fn date_matches(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            // A reversed range matches nothing; it is neither swapped nor rejected.
            (Some(start), Some(end)) => start <= date && date <= end,
            // A single bound selects exactly that day.
            (Some(day), None) | (None, Some(day)) => date == day,
            (None, None) => true,
        }
    }
}

/// Raw criteria as entered into a filter form.
///
/// Empty strings and [`ALL_OPTION`] leave a field unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaInput {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub charter_type: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl CriteriaInput {
    pub fn parse(&self) -> CoreResult<FilterCriteria> {
        let status = match selected(self.status.as_deref()) {
            Some(raw) => Some(TripStatus::from_label(raw).ok_or_else(|| {
                CoreError::InvalidCriteria {
                    field: "status",
                    value: raw.to_string(),
                    reason: "expected Upcoming, Ongoing or Completed".into(),
                }
            })?),
            None => None,
        };

        Ok(FilterCriteria {
            status,
            charter_type: selected(self.charter_type.as_deref()).map(CharterType::from),
            start_date: parse_bound("start_date", self.start_date.as_deref())?,
            end_date: parse_bound("end_date", self.end_date.as_deref())?,
        })
    }
}

impl TryFrom<&CriteriaInput> for FilterCriteria {
    type Error = CoreError;

    fn try_from(input: &CriteriaInput) -> CoreResult<Self> {
        input.parse()
    }
}

/// Blank and "All" mean unset; any other value is kept verbatim as the match key.
fn selected(value: Option<&str>) -> Option<&str> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_OPTION) {
        None
    } else {
        Some(value)
    }
}

fn parse_bound(field: &'static str, raw: Option<&str>) -> CoreResult<Option<NaiveDate>> {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return Ok(None);
    };
    parse_iso_date(raw)
        .map(Some)
        .map_err(|err| match err {
            CoreError::InvalidDate { value, reason } => CoreError::InvalidCriteria {
                field,
                value,
                reason,
            },
            other => other,
        })
}

/// Applies [`FilterCriteria`] to trips.
pub struct TripFilter;

impl TripFilter {
    /// True when the status, charter-type and date predicates all pass.
    pub fn matches(trip: &Trip, criteria: &FilterCriteria, today: NaiveDate) -> bool {
        let status_ok = criteria
            .status
            .map_or(true, |status| StatusResolver::status_of(trip, today) == status);
        let charter_type_ok = criteria
            .charter_type
            .as_ref()
            .map_or(true, |charter_type| &trip.charter_type == charter_type);
        let date_ok = criteria.date_matches(trip.date);
        status_ok && charter_type_ok && date_ok
    }

    /// Returns the matching trips in input order.
    pub fn apply(trips: &[Trip], criteria: &FilterCriteria, today: NaiveDate) -> Vec<Trip> {
        let filtered: Vec<Trip> = trips
            .iter()
            .filter(|trip| Self::matches(trip, criteria, today))
            .cloned()
            .collect();
        tracing::debug!(
            total = trips.len(),
            matched = filtered.len(),
            "applied trip filter"
        );
        filtered
    }

    /// Parses raw form input, then filters.
    pub fn apply_input(
        trips: &[Trip],
        input: &CriteriaInput,
        today: NaiveDate,
    ) -> CoreResult<Vec<Trip>> {
        let criteria = input.parse()?;
        Ok(Self::apply(trips, &criteria, today))
    }

    /// Distinct charter types in first-seen order, for populating a filter selector.
    pub fn charter_type_options(trips: &[Trip]) -> Vec<CharterType> {
        let mut seen = HashSet::new();
        let mut options = Vec::new();
        for trip in trips {
            if seen.insert(trip.charter_type.as_str()) {
                options.push(trip.charter_type.clone());
            }
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charter_domain::Revenue;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trip(id: u64, charter_type: &str, date: NaiveDate) -> Trip {
        Trip::new(id, charter_type, format!("Trip {id}"), Revenue::from_major(100), date)
    }

    fn sample() -> Vec<Trip> {
        vec![
            trip(1, "Full Day", ymd(2025, 1, 1)),
            trip(2, "Half Day", ymd(2025, 1, 5)),
            trip(3, "Full Day", ymd(2025, 1, 10)),
            trip(4, "VIP Transfer", ymd(2025, 1, 11)),
        ]
    }

    fn ids(trips: &[Trip]) -> Vec<u64> {
        trips.iter().map(|trip| trip.id.get()).collect()
    }

    #[test]
    fn empty_criteria_returns_input_unchanged() {
        let trips = sample();
        let today = ymd(2025, 1, 5);
        assert_eq!(TripFilter::apply(&trips, &FilterCriteria::new(), today), trips);
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let criteria = FilterCriteria::new()
            .with_start_date(ymd(2025, 1, 5))
            .with_end_date(ymd(2025, 1, 10));
        let result = TripFilter::apply(&sample(), &criteria, ymd(2025, 1, 1));
        assert_eq!(ids(&result), vec![2, 3]);
    }

    #[test]
    fn single_bound_is_an_exact_day_match() {
        let start_only = FilterCriteria::new().with_start_date(ymd(2025, 1, 10));
        assert_eq!(ids(&TripFilter::apply(&sample(), &start_only, ymd(2025, 1, 1))), vec![3]);

        let end_only = FilterCriteria::new().with_end_date(ymd(2025, 1, 5));
        assert_eq!(ids(&TripFilter::apply(&sample(), &end_only, ymd(2025, 1, 1))), vec![2]);
    }

    #[test]
    fn reversed_range_matches_nothing() {
        let criteria = FilterCriteria::new()
            .with_start_date(ymd(2025, 1, 10))
            .with_end_date(ymd(2025, 1, 1));
        assert!(TripFilter::apply(&sample(), &criteria, ymd(2025, 1, 1)).is_empty());
    }

    #[test]
    fn predicates_combine_with_and() {
        let criteria = FilterCriteria::new()
            .with_status(TripStatus::Upcoming)
            .with_charter_type("Full Day");
        let result = TripFilter::apply(&sample(), &criteria, ymd(2025, 1, 5));
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn charter_type_is_an_exact_match() {
        let criteria = FilterCriteria::new().with_charter_type("full day");
        assert!(TripFilter::apply(&sample(), &criteria, ymd(2025, 1, 5)).is_empty());
    }

    #[test]
    fn input_treats_all_and_blank_as_unset() {
        let input = CriteriaInput {
            status: Some("All".into()),
            charter_type: Some(String::new()),
            start_date: Some("  ".into()),
            end_date: None,
        };
        assert!(input.parse().unwrap().is_unconstrained());
    }

    #[test]
    fn input_keeps_charter_type_verbatim() {
        let input = CriteriaInput {
            charter_type: Some(" Half Day".into()),
            ..CriteriaInput::default()
        };
        let criteria = input.parse().unwrap();
        assert_eq!(criteria.charter_type, Some(CharterType::new(" Half Day")));
        assert!(TripFilter::apply(&sample(), &criteria, ymd(2025, 1, 5)).is_empty());

        let padded_all = CriteriaInput {
            charter_type: Some(" all ".into()),
            ..CriteriaInput::default()
        };
        assert!(padded_all.parse().unwrap().is_unconstrained());
    }

    #[test]
    fn input_rejects_unparseable_dates_as_invalid_criteria() {
        let input = CriteriaInput {
            end_date: Some("2025-02-31".into()),
            ..CriteriaInput::default()
        };
        let err = TripFilter::apply_input(&sample(), &input, ymd(2025, 1, 1)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidCriteria { field: "end_date", ref value, .. } if value == "2025-02-31"
        ));
    }

    #[test]
    fn input_rejects_unknown_status() {
        let input = CriteriaInput {
            status: Some("Cancelled".into()),
            ..CriteriaInput::default()
        };
        assert!(matches!(
            input.parse(),
            Err(CoreError::InvalidCriteria { field: "status", .. })
        ));
    }

    #[test]
    fn reset_clears_all_constraints() {
        let mut criteria = FilterCriteria::new()
            .with_status(TripStatus::Ongoing)
            .with_start_date(ymd(2025, 1, 1));
        criteria.reset();
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn charter_type_options_are_distinct_in_first_seen_order() {
        let options = TripFilter::charter_type_options(&sample());
        let labels: Vec<&str> = options.iter().map(CharterType::as_str).collect();
        assert_eq!(labels, vec!["Full Day", "Half Day", "VIP Transfer"]);
    }
}
