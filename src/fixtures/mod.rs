//! Built-in sample trips for demos and tests.

use charter_domain::Trip;
use charter_storage_json::{parse_trips, StorageError};

const SAMPLE_TRIPS_JSON: &str = include_str!("sample_trips.json");

/// Month order spanning the sample data, December 2024 through August 2025.
pub const SAMPLE_MONTH_ORDER: [&str; 9] = [
    "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug",
];

/// Twenty charter trips between 2024-12-30 and 2025-08-18.
pub fn sample_trips() -> Result<Vec<Trip>, StorageError> {
    parse_trips(SAMPLE_TRIPS_JSON)
}
