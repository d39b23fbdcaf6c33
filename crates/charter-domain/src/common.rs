//! Shared traits and value types for trip primitives.

use std::{
    borrow::Borrow,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Exposes a stable identifier for entities in a trip collection.
pub trait Identifiable {
    fn id(&self) -> TripId;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Positive integer identity of a trip within its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(pub u64);

impl TripId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque charter category label such as "Full Day" or "VIP Transfer".
///
/// The set of categories is open: new labels may appear in data at any time,
/// so this is a newtype rather than an enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharterType(String);

impl CharterType {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CharterType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CharterType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for CharterType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Non-negative monetary amount in minor units (cents) of a single currency.
///
/// Single amounts fit in `u64`; the `u128` accumulator keeps sums of any trip collection
/// exact without overflowing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Revenue(u128);

impl Revenue {
    pub const ZERO: Revenue = Revenue(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents as u128)
    }

    /// Builds an amount from whole currency units.
    pub const fn from_major(units: u64) -> Self {
        Self(units as u128 * 100)
    }

    pub const fn cents(self) -> u128 {
        self.0
    }

    pub const fn whole_units(self) -> u128 {
        self.0 / 100
    }
}

impl Add for Revenue {
    type Output = Revenue;

    fn add(self, rhs: Revenue) -> Revenue {
        Revenue(self.0 + rhs.0)
    }
}

impl AddAssign for Revenue {
    fn add_assign(&mut self, rhs: Revenue) {
        self.0 += rhs.0;
    }
}

impl Sum for Revenue {
    fn sum<I: Iterator<Item = Revenue>>(iter: I) -> Self {
        iter.fold(Revenue::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Revenue> for Revenue {
    fn sum<I: Iterator<Item = &'a Revenue>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Revenue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
