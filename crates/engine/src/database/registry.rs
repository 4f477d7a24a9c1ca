//! Declared object types for one open
//!
//! A [`TypeRegistry`] is built by the caller and handed to
//! [`Database::open`](super::Database::open). Each open validates its own
//! copy, so there is no process-wide class cache: two handles opened with
//! different registries see different schemas.

use crate::error::{Error, Result};
use objectdb_core::{ObjectSchema, ObjectType};

/// Ordered list of object types to expose through a database handle
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    /// Name the type was registered under
    declared: String,
    schema: ObjectSchema,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a native object type
    pub fn register<T: ObjectType>(mut self) -> Self {
        self.entries.push(Entry {
            declared: T::CLASS_NAME.to_string(),
            schema: T::object_schema(),
        });
        self
    }

    /// Register a schema with no native type behind it
    pub fn register_schema(mut self, schema: ObjectSchema) -> Self {
        self.entries.push(Entry {
            declared: schema.class_name().to_string(),
            schema,
        });
        self
    }

    /// Registered class names in registration order
    pub fn class_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.declared.as_str()).collect()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Object schemas to build a schema from, in registration order
    ///
    /// With `only = Some(names)`, keeps just the named classes. Every name
    /// must be registered.
    pub(crate) fn select(&self, only: Option<&[String]>) -> Result<Vec<ObjectSchema>> {
        for entry in &self.entries {
            if entry.schema.class_name() != entry.declared {
                return Err(Error::ClassNameMismatch {
                    declared: entry.declared.clone(),
                    actual: entry.schema.class_name().to_string(),
                });
            }
        }

        let Some(names) = only else {
            return Ok(self.entries.iter().map(|e| e.schema.clone()).collect());
        };
        if let Some(unknown) = names
            .iter()
            .find(|name| !self.entries.iter().any(|e| &e.declared == *name))
        {
            return Err(Error::config(format!(
                "object_types names unregistered class '{}'",
                unknown
            )));
        }
        Ok(self
            .entries
            .iter()
            .filter(|e| names.contains(&e.declared))
            .map(|e| e.schema.clone())
            .collect())
    }
}
