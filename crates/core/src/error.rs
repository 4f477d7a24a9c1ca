//! Error types for schema validation
//!
//! Lookups never fail: an unknown class or property is reported as `None`.
//! The only fallible step is building a [`Schema`](crate::Schema) from a set of
//! declared object types, which happens once when a database handle is opened.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::property::PropertyType;
use thiserror::Error;

/// Result type alias for schema construction
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Reasons a set of declared object types cannot form a schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A class was declared with an empty name
    #[error("Class name cannot be empty")]
    EmptyClassName,

    /// Two object types share a class name
    #[error("Duplicate class '{class_name}'")]
    DuplicateClass {
        /// The repeated class name
        class_name: String,
    },

    /// A property was declared with an empty name
    #[error("Property name cannot be empty in class '{class_name}'")]
    EmptyPropertyName {
        /// Declaring class
        class_name: String,
    },

    /// Two properties of one class share a name
    #[error("Duplicate property '{property}' in class '{class_name}'")]
    DuplicateProperty {
        /// Declaring class
        class_name: String,
        /// The repeated property name
        property: String,
    },

    /// More than one property is flagged as the primary key
    #[error("Class '{class_name}' declares multiple primary keys: '{first}' and '{second}'")]
    MultiplePrimaryKeys {
        /// Declaring class
        class_name: String,
        /// First primary key property
        first: String,
        /// Second primary key property
        second: String,
    },

    /// The primary key has a kind or shape that cannot identify objects
    #[error("Property '{class_name}.{property}' of type '{property_type}' cannot be a primary key")]
    InvalidPrimaryKey {
        /// Declaring class
        class_name: String,
        /// Offending property
        property: String,
        /// Its kind
        property_type: PropertyType,
    },

    /// Embedded objects are owned by their parent and have no primary key
    #[error("Embedded class '{class_name}' cannot have a primary key")]
    PrimaryKeyOnEmbedded {
        /// Declaring class
        class_name: String,
    },

    /// The property kind or shape does not support a search index
    #[error("Property '{class_name}.{property}' of type '{property_type}' cannot be indexed")]
    UnindexableProperty {
        /// Declaring class
        class_name: String,
        /// Offending property
        property: String,
        /// Its kind
        property_type: PropertyType,
    },

    /// A link property does not say which class it points at
    #[error("Link property '{class_name}.{property}' has no object class")]
    MissingObjectClass {
        /// Declaring class
        class_name: String,
        /// Offending property
        property: String,
    },

    /// A link property points at a class that is not in the schema
    #[error("Property '{class_name}.{property}' links to unknown class '{target}'")]
    UnknownObjectClass {
        /// Declaring class
        class_name: String,
        /// Offending property
        property: String,
        /// The missing target class
        target: String,
    },

    /// The optional flag contradicts the property's link shape
    #[error("Property '{class_name}.{property}' {reason}")]
    InvalidOptionality {
        /// Declaring class
        class_name: String,
        /// Offending property
        property: String,
        /// Which rule was broken
        reason: &'static str,
    },

    /// A linking-objects property is not array-shaped
    #[error("Linking objects property '{class_name}.{property}' must be an array")]
    InvalidLinkingObjectsShape {
        /// Declaring class
        class_name: String,
        /// Offending property
        property: String,
    },

    /// A linking-objects property does not name a link back to its class
    #[error(
        "Linking objects property '{class_name}.{property}' has invalid origin '{target}.{origin}'"
    )]
    InvalidLinkOrigin {
        /// Declaring class
        class_name: String,
        /// Offending property
        property: String,
        /// Class holding the origin link
        target: String,
        /// Name of the origin link
        origin: String,
    },
}
