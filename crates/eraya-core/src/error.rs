//! Core error types for eraya-core.
//!
//! This module defines the error hierarchy using thiserror. Nothing in the
//! directory flow is fatal: lookups of unknown providers are `None`, not
//! errors, and validation errors leave the open modal untouched.

use std::path::PathBuf;
use thiserror::Error;

use crate::directory::{BookingField, ProviderId};

/// Core error type for eraya-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Directory data errors
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Booking form validation errors
    #[error("Booking error: {0}")]
    Booking(#[from] BookingValidationError),

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

/// Errors raised while building or querying the provider directory.
#[derive(Error, Debug, PartialEq)]
pub enum DirectoryError {
    /// Two providers share the same identifier
    #[error("Duplicate provider id: {0}")]
    DuplicateProviderId(ProviderId),

    /// Rating outside of 0..=5
    #[error("Invalid rating {rating} for provider {id}: must be between 0 and 5")]
    InvalidRating { id: ProviderId, rating: f64 },

    /// Blank category filter string
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Provider file could not be read or parsed
    #[error("Failed to load providers from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },
}

/// Booking form validation errors.
///
/// The booking modal stays open with the draft intact when any of these
/// are returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingValidationError {
    /// One or more required fields are empty
    #[error("Missing required fields: {}", format_fields(.0))]
    MissingFields(Vec<BookingField>),

    /// Preferred date is before today
    #[error("Preferred date {date} is before {today}")]
    DateInPast {
        date: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },

    /// Submit called without an open booking modal
    #[error("No booking form is open")]
    NoBookingOpen,
}

fn format_fields(fields: &[BookingField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
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

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
