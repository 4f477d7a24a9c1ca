//! Core trait definitions
//!
//! [`ObjectType`] is implemented by the Rust types that model stored objects.
//! It ties a native type to its class name and declared schema, so callers
//! can ask whether a schema found at runtime belongs to a given type instead
//! of comparing class identities.

use crate::object_schema::ObjectSchema;

/// A native type whose instances are stored as objects
///
/// # Example
///
/// ```
/// use objectdb_core::{ObjectSchema, ObjectType, Property};
///
/// struct Dog;
///
/// impl ObjectType for Dog {
///     const CLASS_NAME: &'static str = "Dog";
///
///     fn object_schema() -> ObjectSchema {
///         ObjectSchema::new(
///             Self::CLASS_NAME,
///             vec![Property::of::<String>("name").primary_key()],
///         )
///     }
/// }
///
/// assert!(Dog::object_schema().is_schema_of::<Dog>());
/// ```
pub trait ObjectType {
    /// Class name, unique within a schema
    const CLASS_NAME: &'static str;

    /// Declared schema; its class name must be [`Self::CLASS_NAME`]
    fn object_schema() -> ObjectSchema;
}
