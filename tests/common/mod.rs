#![allow(dead_code)]

use charter_analytics::{
    domain::{Revenue, Trip},
    fixtures::sample_trips,
};
use chrono::NaiveDate;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub fn sample() -> Vec<Trip> {
    sample_trips().expect("embedded sample fixture")
}

pub fn trip(id: u64, charter_type: &str, major: u64, date: NaiveDate) -> Trip {
    Trip::new(id, charter_type, format!("Itinerary {id}"), Revenue::from_major(major), date)
}

pub fn ids(trips: &[Trip]) -> Vec<u64> {
    trips.iter().map(|trip| trip.id.get()).collect()
}
