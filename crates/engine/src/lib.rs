//! Database engine for objectdb
//!
//! This crate opens database handles:
//! - Database: Handle with open/ephemeral constructors
//! - TypeRegistry: Object types declared by the caller for one open
//! - ObjectDbConfig: Settings read from `objectdb.toml`
//!
//! Each handle owns an immutable schema snapshot built at open time.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod database;
pub mod error;

pub use database::{Database, ObjectDbConfig, TypeRegistry, CONFIG_FILE_NAME};
pub use error::{Error, Result};
