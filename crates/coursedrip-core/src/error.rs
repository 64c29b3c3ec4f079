//! Core error types for coursedrip-core.
//!
//! This module defines the error hierarchy using thiserror. The drip filter
//! itself never fails -- missing or malformed data degrades to an empty
//! message or an unchanged post -- so these errors surface only from the
//! configuration, fixture and CLI layers.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for coursedrip-core.
#[derive(Error, Debug)]
pub enum DripError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Date parsing errors
    #[error("Date error: {0}")]
    Date(#[from] DateError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Drip date parsing errors.
#[derive(Error, Debug)]
pub enum DateError {
    /// The raw metadata value matched none of the accepted encodings
    #[error("Unrecognized drip date value: {0:?}")]
    Unrecognized(String),

    /// A unix timestamp outside the representable range
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
}

/// Result type alias for DripError
pub type Result<T, E = DripError> = std::result::Result<T, E>;
