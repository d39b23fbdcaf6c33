//! charter-core
//!
//! Trip analytics services: status resolution, filtering and chart aggregation.
//! Depends on charter-domain. No CLI, no terminal I/O, no storage.

pub mod chart;
pub mod dates;
pub mod error;
pub mod filter_service;
pub mod status_service;
pub mod summary_service;
pub mod time;


pub use chart::ChartSeries;
pub use error::{CoreError, CoreResult};
pub use filter_service::*;
pub use status_service::*;
pub use summary_service::*;
pub use time::{Clock, FixedClock};
