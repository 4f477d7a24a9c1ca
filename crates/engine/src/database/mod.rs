//! Database struct and open logic
//!
//! Opening a database:
//! - Creates the data directory and a default `objectdb.toml` if needed
//! - Reads the configuration
//! - Selects the registered object types the configuration allows
//! - Validates them into an immutable [`Schema`] snapshot
//!
//! The snapshot is owned by the handle and dropped with it. Nothing about the
//! schema is shared between handles.

pub mod config;
mod registry;

pub use config::{ObjectDbConfig, CONFIG_FILE_NAME};
pub use registry::TypeRegistry;

use crate::error::{Error, Result};
use objectdb_core::Schema;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

// ============================================================================
// Persistence Mode
// ============================================================================

/// Controls whether the handle is backed by a data directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PersistenceMode {
    /// No disk files at all
    Ephemeral,

    /// Data directory with `objectdb.toml`
    #[default]
    Disk,
}

// ============================================================================
// Database Struct
// ============================================================================

/// Open database handle
///
/// Create one with [`Database::open`], [`Database::open_with_config`] or
/// [`Database::ephemeral`].
///
/// # Example
///
/// ```text
/// use objectdb_engine::{Database, TypeRegistry};
///
/// let types = TypeRegistry::new().register::<Person>().register::<Dog>();
/// let db = Database::open("/path/to/data", &types)?;
///
/// let person = db.schema().lookup("Person").expect("registered");
/// println!("{}", person.describe());
/// ```
#[derive(Debug)]
pub struct Database {
    /// Data directory path (empty for ephemeral databases)
    data_dir: PathBuf,

    /// Persistence mode (ephemeral vs disk-backed)
    persistence_mode: PersistenceMode,

    /// Configuration the handle was opened with
    config: ObjectDbConfig,

    /// Validated schema, fixed for the lifetime of the handle
    schema: Arc<Schema>,
}

impl Database {
    /// Open database at given path
    ///
    /// Reads `objectdb.toml` from the data directory. If no config file
    /// exists, creates one with defaults.
    ///
    /// # Errors
    ///
    /// Fails if the directory or config file cannot be created or read, if
    /// the config is malformed, or if the registered types do not form a
    /// valid schema.
    pub fn open<P: AsRef<Path>>(path: P, types: &TypeRegistry) -> Result<Arc<Self>> {
        let data_dir = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        let config_path = data_dir.join(CONFIG_FILE_NAME);
        ObjectDbConfig::write_default_if_missing(&config_path)?;
        let cfg = ObjectDbConfig::from_file(&config_path)?;

        Self::open_at(data_dir, cfg, types)
    }

    /// Open database at the given path with an explicit configuration.
    ///
    /// The supplied config is written to `objectdb.toml` so that later
    /// [`Database::open`] calls pick up the same settings. A read-only config
    /// writes nothing and requires the directory to exist.
    pub fn open_with_config<P: AsRef<Path>>(
        path: P,
        cfg: ObjectDbConfig,
        types: &TypeRegistry,
    ) -> Result<Arc<Self>> {
        let data_dir = path.as_ref().to_path_buf();

        if cfg.read_only {
            if !data_dir.is_dir() {
                return Err(Error::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!(
                        "read-only database directory '{}' does not exist",
                        data_dir.display()
                    ),
                )));
            }
        } else {
            std::fs::create_dir_all(&data_dir)?;
            cfg.write_to_file(&data_dir.join(CONFIG_FILE_NAME))?;
        }

        Self::open_at(data_dir, cfg, types)
    }

    /// Open an in-memory handle with the default configuration
    ///
    /// No directories or files are created.
    pub fn ephemeral(types: &TypeRegistry) -> Result<Arc<Self>> {
        Self::ephemeral_with_config(ObjectDbConfig::default(), types)
    }

    /// Open an in-memory handle with an explicit configuration
    pub fn ephemeral_with_config(cfg: ObjectDbConfig, types: &TypeRegistry) -> Result<Arc<Self>> {
        let schema = Self::build_schema(&cfg, types)?;
        info!(
            target: "objectdb::db",
            classes = schema.len(),
            schema_version = cfg.schema_version,
            "Opened ephemeral database"
        );
        Ok(Arc::new(Self {
            data_dir: PathBuf::new(),
            persistence_mode: PersistenceMode::Ephemeral,
            config: cfg,
            schema: Arc::new(schema),
        }))
    }

    fn open_at(data_dir: PathBuf, cfg: ObjectDbConfig, types: &TypeRegistry) -> Result<Arc<Self>> {
        let schema = Self::build_schema(&cfg, types)?;
        info!(
            target: "objectdb::db",
            path = ?data_dir,
            classes = schema.len(),
            schema_version = cfg.schema_version,
            read_only = cfg.read_only,
            "Opened database"
        );
        Ok(Arc::new(Self {
            data_dir,
            persistence_mode: PersistenceMode::Disk,
            config: cfg,
            schema: Arc::new(schema),
        }))
    }

    fn build_schema(cfg: &ObjectDbConfig, types: &TypeRegistry) -> Result<Schema> {
        if let Some(only) = &cfg.object_types {
            warn!(
                target: "objectdb::db",
                registered = types.len(),
                exposed = only.len(),
                "object_types restricts the schema to a subset of registered types"
            );
        }
        let object_schemas = types.select(cfg.object_types.as_deref())?;
        let schema = Schema::new(object_schemas).map_err(|e| {
            warn!(target: "objectdb::schema", error = %e, "Schema validation failed");
            Error::from(e)
        })?;
        for object_schema in schema.iter() {
            debug!(
                target: "objectdb::schema",
                class = object_schema.class_name(),
                properties = object_schema.properties().len(),
                computed = object_schema.computed_properties().len(),
                "Validated object schema"
            );
        }
        Ok(schema)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Schema registry view of this handle
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Shared handle to the schema, usable after the database is dropped
    pub fn schema_snapshot(&self) -> Arc<Schema> {
        Arc::clone(&self.schema)
    }

    /// Configuration the handle was opened with
    pub fn config(&self) -> &ObjectDbConfig {
        &self.config
    }

    /// Declared schema version
    pub fn schema_version(&self) -> u64 {
        self.config.schema_version
    }

    /// Whether the handle was opened read-only
    pub fn is_read_only(&self) -> bool {
        self.config.read_only
    }

    /// Data directory (empty for ephemeral databases)
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Whether the handle has no data directory
    pub fn is_ephemeral(&self) -> bool {
        self.persistence_mode == PersistenceMode::Ephemeral
    }
}
