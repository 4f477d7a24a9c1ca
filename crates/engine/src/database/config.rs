//! Database configuration via `objectdb.toml`
//!
//! On first open, a default `objectdb.toml` is created in the data directory.
//! To change settings, edit the file and reopen the database.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name placed in the database data directory.
pub const CONFIG_FILE_NAME: &str = "objectdb.toml";

/// Database configuration loaded from `objectdb.toml`.
///
/// # Example
///
/// ```toml
/// schema_version = 3
/// read_only = false
///
/// # Only expose these registered types
/// object_types = ["Person", "Dog"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDbConfig {
    /// Version number of the declared schema. Recorded, never migrated.
    #[serde(default)]
    pub schema_version: u64,
    /// Open without writing anything to the data directory.
    #[serde(default)]
    pub read_only: bool,
    /// Restrict the schema to these registered classes.
    /// `None` exposes every registered class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_types: Option<Vec<String>>,
}

impl ObjectDbConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# objectdb configuration
#
# Version number of the declared schema (default: 0)
schema_version = 0

# Open without writing to the data directory (default: false)
read_only = false

# Restrict the schema to a subset of the registered object types.
# Omit to expose every registered type.
# object_types = ["Person", "Dog"]
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
