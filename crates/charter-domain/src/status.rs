use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Enumerates the lifecycle stage of a trip relative to the current day.
///
/// Derived from the trip date on every query; never stored on the trip.
pub enum TripStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl TripStatus {
    pub const ALL: [TripStatus; 3] = [
        TripStatus::Upcoming,
        TripStatus::Ongoing,
        TripStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TripStatus::Upcoming => "Upcoming",
            TripStatus::Ongoing => "Ongoing",
            TripStatus::Completed => "Completed",
        }
    }

    /// Matches a status label case-insensitively.
    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
