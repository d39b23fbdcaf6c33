//! charter-domain
//!
//! Pure domain models (Trip, CharterType, Revenue, TripStatus).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod status;
pub mod trip;

pub use common::*;
pub use status::*;
pub use trip::*;
