//! Error types for opening a database handle
//!
//! Opening can fail on the filesystem, on a malformed `objectdb.toml`, or on
//! a set of declared object types that does not form a valid schema. Once a
//! handle is open, schema introspection is infallible.

use objectdb_core::SchemaError;
use std::io;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the engine
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (data directory, config file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Config file could not be parsed or names something invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// A registered type declares a schema under a different class name
    #[error("Type registered as '{declared}' declares schema for class '{actual}'")]
    ClassNameMismatch {
        /// `ObjectType::CLASS_NAME` of the registered type
        declared: String,
        /// Class name of the schema it returned
        actual: String,
    },

    /// Declared object types do not form a valid schema
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}
