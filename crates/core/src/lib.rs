//! Core types for objectdb
//!
//! This crate defines the schema model exposed by an open database handle:
//! - PropertyType: The fixed set of value kinds
//! - Property: Descriptor of one field (kind, flags, link target)
//! - ObjectSchema: One object type with its properties in declaration order
//! - Schema: Validated, read-only registry of object schemas
//! - ObjectType / Persisted: Bindings from native Rust types to the model
//! - SchemaError: Validation failures when a schema is assembled

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod object_schema;
pub mod property;
pub mod schema;
pub mod traits;
pub mod value;

pub use error::{Result, SchemaError};
pub use object_schema::ObjectSchema;
pub use property::{Collection, Property, PropertyType};
pub use schema::Schema;
pub use traits::ObjectType;
pub use value::{Data, Decimal128, ObjectId, Persisted};
