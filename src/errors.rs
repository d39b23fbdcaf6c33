use std::io;

use charter_config::ConfigError;
use charter_core::CoreError;
use charter_storage_json::StorageError;
use thiserror::Error;

/// Unified error type for the analytics, storage and configuration layers.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Trip data error: {0}")]
    Storage(#[from] StorageError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Output failed: {0}")]
    Io(#[from] io::Error),
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::Dashboard(err.into())
    }
}

impl From<StorageError> for CliError {
    fn from(err: StorageError) -> Self {
        CliError::Dashboard(err.into())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Dashboard(err.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Dashboard(err.into())
    }
}
