//! Domain model for a booked charter trip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::*;

/// One bookable or booked charter event.
///
/// Trips are supplied whole by callers; nothing in the analytics core mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub charter_type: CharterType,
    pub itinerary_name: String,
    pub revenue: Revenue,
    pub date: NaiveDate,
}

impl Trip {
    pub fn new(
        id: u64,
        charter_type: impl Into<CharterType>,
        itinerary_name: impl Into<String>,
        revenue: Revenue,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TripId(id),
            charter_type: charter_type.into(),
            itinerary_name: itinerary_name.into(),
            revenue,
            date,
        }
    }
}

impl Identifiable for Trip {
    fn id(&self) -> TripId {
        self.id
    }
}

impl NamedEntity for Trip {
    fn name(&self) -> &str {
        &self.itinerary_name
    }
}
