//! Error types for Tessera operations.
//!
//! This module provides the main error type [`TesseraError`] which wraps
//! construction errors from [`tessera_core`] together with lookup and
//! configuration failures.

use std::io;

use thiserror::Error;

use tessera_core::error::ShapeError;

/// The main error type for Tessera operations.
#[derive(Debug, Error)]
pub enum TesseraError {
    #[error("Invalid shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("No subdiagram named `{0}`")]
    NameNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
