//! objectdb - Object schema introspection for an embedded object database
//!
//! An open [`Database`] handle exposes the schema of the object types it was
//! opened with: a registry of [`ObjectSchema`]s, each listing its
//! [`Property`] descriptors in declaration order.
//!
//! # Quick Start
//!
//! ```ignore
//! use objectdb::{Database, ObjectSchema, ObjectType, Property, TypeRegistry};
//!
//! struct Dog;
//!
//! impl ObjectType for Dog {
//!     const CLASS_NAME: &'static str = "Dog";
//!
//!     fn object_schema() -> ObjectSchema {
//!         ObjectSchema::new(Self::CLASS_NAME, vec![Property::of::<String>("name")])
//!     }
//! }
//!
//! let db = Database::ephemeral(&TypeRegistry::new().register::<Dog>())?;
//! let dog = db.schema().lookup("Dog").unwrap();
//! assert_eq!(dog.property_names(), vec!["name"]);
//! ```
//!
//! # Architecture
//!
//! The schema model lives in `objectdb-core`; opening handles and reading
//! configuration lives in `objectdb-engine`. Both are re-exported here.

pub use objectdb_core::*;
pub use objectdb_engine::{Database, Error, ObjectDbConfig, TypeRegistry, CONFIG_FILE_NAME};

/// Result type for opening a database
pub type OpenResult<T> = objectdb_engine::Result<T>;
