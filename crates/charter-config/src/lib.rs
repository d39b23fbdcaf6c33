//! charter-config
//!
//! Dashboard preferences: currency, month ordering for charts and the trip fixture location.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::{default_base_dir, ConfigManager, HOME_ENV_VAR};
pub use model::Config;
