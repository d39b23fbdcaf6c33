//! charter-storage-json
//!
//! Read-only loading of trip fixtures stored as a JSON array.

use std::{collections::HashSet, fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use charter_core::{dates::parse_iso_date, CoreError};
use charter_domain::{CharterType, Identifiable, Revenue, Trip, TripId};

/// Largest accepted amount in major units; keeps the cent conversion exact in `u64`.
const MAX_MAJOR_AMOUNT: f64 = 1e13;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Trip id must be a positive integer, got {0}")]
    InvalidTripId(i64),
    #[error("Duplicate trip id {0}")]
    DuplicateTripId(u64),
    #[error("Trip {id} has invalid revenue {value}: expected a non-negative amount in whole cents")]
    InvalidRevenue { id: u64, value: f64 },
}

/// A trip as it appears in a fixture file.
///
/// Field names accept both snake_case and the camelCase used by dashboard fixtures.
/// Revenue is given in major currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub id: i64,
    #[serde(alias = "charterType")]
    pub charter_type: String,
    #[serde(alias = "itineraryName")]
    pub itinerary_name: String,
    pub revenue: f64,
    pub date: String,
}

impl TripRecord {
    /// Validates the record and converts it into a domain [`Trip`].
    pub fn into_trip(self) -> Result<Trip, StorageError> {
        let id = u64::try_from(self.id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or(StorageError::InvalidTripId(self.id))?;
        let revenue = revenue_from_major(id, self.revenue)?;
        let date = parse_iso_date(&self.date)?;
        Ok(Trip {
            id: TripId(id),
            charter_type: CharterType::new(self.charter_type),
            itinerary_name: self.itinerary_name,
            revenue,
            date,
        })
    }
}

fn revenue_from_major(id: u64, value: f64) -> Result<Revenue, StorageError> {
    let invalid = || StorageError::InvalidRevenue { id, value };
    if !value.is_finite() || value < 0.0 || value > MAX_MAJOR_AMOUNT {
        return Err(invalid());
    }
    let cents = (value * 100.0).round();
    if (value * 100.0 - cents).abs() > 1e-6 {
        return Err(invalid());
    }
    Ok(Revenue::from_cents(cents as u64))
}

/// Parses a JSON array of trip records, enforcing collection invariants.
pub fn parse_trips(json: &str) -> Result<Vec<Trip>, StorageError> {
    let records: Vec<TripRecord> =
        serde_json::from_str(json).map_err(|err| StorageError::Serde(err.to_string()))?;
    trips_from_records(records)
}

pub fn trips_from_records(records: Vec<TripRecord>) -> Result<Vec<Trip>, StorageError> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut trips = Vec::with_capacity(records.len());
    for record in records {
        let trip = record.into_trip()?;
        if !seen.insert(trip.id()) {
            return Err(StorageError::DuplicateTripId(trip.id().get()));
        }
        trips.push(trip);
    }
    Ok(trips)
}

pub fn load_trips_from_path(path: &Path) -> Result<Vec<Trip>, StorageError> {
    let data = fs::read_to_string(path)?;
    let trips = parse_trips(&data)?;
    tracing::info!(path = %path.display(), trips = trips.len(), "loaded trip fixture");
    Ok(trips)
}
