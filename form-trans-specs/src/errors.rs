//! Error types for the spec system.
//!
//! This module defines error types for fixture parsing and loading.

use thiserror::Error;

/// Errors that can occur during spec processing.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error parsing a fixture file.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Error loading a fixture file or one of the forms it names.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },
}

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;
