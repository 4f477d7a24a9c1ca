//! Schema registry view
//!
//! A [`Schema`] is the read-only set of object schemas known to an open
//! database handle. It is built once, validated as a whole (links must point
//! at classes in the same schema), and never mutated afterwards.
//!
//! Lookups return `Option`: an unknown class is the normal "not found" answer,
//! not an error.

use crate::error::{Result, SchemaError};
use crate::object_schema::ObjectSchema;
use crate::property::{Collection, Property, PropertyType};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Validated, immutable set of object schemas
///
/// Keeps declaration order for iteration and a name index for lookup.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    object_schemas: Vec<ObjectSchema>,
    by_name: HashMap<String, usize>,
}

impl Schema {
    /// Validate `object_schemas` and build the registry view
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found, checking classes in
    /// declaration order.
    pub fn new(object_schemas: Vec<ObjectSchema>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(object_schemas.len());
        for (i, object_schema) in object_schemas.iter().enumerate() {
            let class_name = object_schema.class_name();
            if class_name.is_empty() {
                return Err(SchemaError::EmptyClassName);
            }
            if by_name.insert(class_name.to_string(), i).is_some() {
                return Err(SchemaError::DuplicateClass {
                    class_name: class_name.to_string(),
                });
            }
        }

        let schema = Schema {
            object_schemas,
            by_name,
        };
        for object_schema in &schema.object_schemas {
            schema.validate_object_schema(object_schema)?;
        }
        Ok(schema)
    }

    /// Schema with no classes
    pub fn empty() -> Self {
        Schema::default()
    }

    /// Look up a class by exact name
    pub fn lookup(&self, class_name: &str) -> Option<&ObjectSchema> {
        self.by_name
            .get(class_name)
            .map(|&i| &self.object_schemas[i])
    }

    /// Whether a class with this name exists
    pub fn contains(&self, class_name: &str) -> bool {
        self.by_name.contains_key(class_name)
    }

    /// Object schemas in declaration order
    pub fn object_schemas(&self) -> &[ObjectSchema] {
        &self.object_schemas
    }

    /// Class names in declaration order
    pub fn class_names(&self) -> Vec<&str> {
        self.object_schemas
            .iter()
            .map(ObjectSchema::class_name)
            .collect()
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.object_schemas.len()
    }

    /// Whether there are no classes
    pub fn is_empty(&self) -> bool {
        self.object_schemas.is_empty()
    }

    /// Iterate object schemas in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, ObjectSchema> {
        self.object_schemas.iter()
    }

    // =========================================================================
    // Validation
    // =========================================================================

    fn validate_object_schema(&self, object_schema: &ObjectSchema) -> Result<()> {
        let class_name = object_schema.class_name();
        let mut seen = HashSet::new();
        let mut primary: Option<&Property> = None;

        for property in object_schema.all_properties() {
            if property.name().is_empty() {
                return Err(SchemaError::EmptyPropertyName {
                    class_name: class_name.to_string(),
                });
            }
            if !seen.insert(property.name()) {
                return Err(SchemaError::DuplicateProperty {
                    class_name: class_name.to_string(),
                    property: property.name().to_string(),
                });
            }

            if property.is_primary() {
                if let Some(first) = primary {
                    return Err(SchemaError::MultiplePrimaryKeys {
                        class_name: class_name.to_string(),
                        first: first.name().to_string(),
                        second: property.name().to_string(),
                    });
                }
                primary = Some(property);
                validate_primary_key(object_schema, property)?;
            }

            if property.is_indexed()
                && (!property.property_type().supports_index() || property.is_collection())
            {
                return Err(SchemaError::UnindexableProperty {
                    class_name: class_name.to_string(),
                    property: property.name().to_string(),
                    property_type: property.property_type(),
                });
            }

            if property.property_type().is_link() {
                self.validate_link(class_name, property)?;
            }
        }
        Ok(())
    }

    fn validate_link(&self, class_name: &str, property: &Property) -> Result<()> {
        let target = property
            .object_class_name()
            .ok_or_else(|| SchemaError::MissingObjectClass {
                class_name: class_name.to_string(),
                property: property.name().to_string(),
            })?;
        let target_schema = self
            .lookup(target)
            .ok_or_else(|| SchemaError::UnknownObjectClass {
                class_name: class_name.to_string(),
                property: property.name().to_string(),
                target: target.to_string(),
            })?;

        let optionality_error = |reason| SchemaError::InvalidOptionality {
            class_name: class_name.to_string(),
            property: property.name().to_string(),
            reason,
        };

        match property.property_type() {
            PropertyType::Object if property.is_collection() => {
                if property.is_optional() {
                    return Err(optionality_error("cannot be a collection of optional objects"));
                }
            }
            PropertyType::Object => {
                if !property.is_optional() {
                    return Err(optionality_error("must be optional to link a single object"));
                }
            }
            PropertyType::LinkingObjects => {
                if property.is_optional() {
                    return Err(optionality_error("cannot be optional as linking objects"));
                }
                if property.collection() != Collection::Array {
                    return Err(SchemaError::InvalidLinkingObjectsShape {
                        class_name: class_name.to_string(),
                        property: property.name().to_string(),
                    });
                }
                let origin = property.link_origin_property_name().unwrap_or_default();
                let links_back = target_schema.properties().iter().any(|p| {
                    p.name() == origin
                        && p.property_type() == PropertyType::Object
                        && p.object_class_name() == Some(class_name)
                });
                if !links_back {
                    return Err(SchemaError::InvalidLinkOrigin {
                        class_name: class_name.to_string(),
                        property: property.name().to_string(),
                        target: target.to_string(),
                        origin: origin.to_string(),
                    });
                }
            }
            _ => {}
        }
        Ok(())
    }
}

fn validate_primary_key(object_schema: &ObjectSchema, property: &Property) -> Result<()> {
    if object_schema.is_embedded() {
        return Err(SchemaError::PrimaryKeyOnEmbedded {
            class_name: object_schema.class_name().to_string(),
        });
    }
    if !property.property_type().supports_primary_key() || property.is_collection() {
        return Err(SchemaError::InvalidPrimaryKey {
            class_name: object_schema.class_name().to_string(),
            property: property.name().to_string(),
            property_type: property.property_type(),
        });
    }
    Ok(())
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        // by_name is derived from object_schemas
        self.object_schemas == other.object_schemas
    }
}

impl Eq for Schema {}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a ObjectSchema;
    type IntoIter = std::slice::Iter<'a, ObjectSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, object_schema) in self.object_schemas.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", object_schema)?;
        }
        Ok(())
    }
}
