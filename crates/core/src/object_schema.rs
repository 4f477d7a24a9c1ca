//! Object schemas
//!
//! An [`ObjectSchema`] describes one object type: its class name and its
//! properties in declaration order. Back-link (`linking objects`) properties
//! are not stored and are kept apart as computed properties.
//!
//! ## Description format
//!
//! [`ObjectSchema::describe`] renders a stable text block used for golden
//! output comparisons:
//!
//! ```text
//! Dog {
//! 	name {
//! 		type = string;
//! 		indexed = NO;
//! 		isPrimary = NO;
//! 		array = NO;
//! 		set = NO;
//! 		optional = NO;
//! 	}
//! }
//! ```
//!
//! Computed properties follow the persisted ones. Embedded types print
//! `(embedded) ` after the class name.

use crate::property::{Property, PropertyType};
use crate::traits::ObjectType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema of one object type
///
/// Equality compares the class name, the embedded flag and every property
/// descriptor in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectSchema {
    class_name: String,
    properties: Vec<Property>,
    computed_properties: Vec<Property>,
    embedded: bool,
}

impl ObjectSchema {
    /// Create a schema from properties in declaration order
    ///
    /// `linking objects` properties are moved to the computed list, keeping
    /// their relative order.
    pub fn new(class_name: impl Into<String>, properties: Vec<Property>) -> Self {
        let (computed_properties, properties): (Vec<Property>, Vec<Property>) = properties
            .into_iter()
            .partition(|p| p.property_type() == PropertyType::LinkingObjects);
        ObjectSchema {
            class_name: class_name.into(),
            properties,
            computed_properties,
            embedded: false,
        }
    }

    /// Mark as an embedded type, owned by the object that links to it
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Class name, unique within a schema
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Persisted properties in declaration order
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Back-link properties in declaration order
    pub fn computed_properties(&self) -> &[Property] {
        &self.computed_properties
    }

    /// Names of the persisted properties in declaration order
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(Property::name).collect()
    }

    /// Look up a property by exact name
    ///
    /// Searches persisted properties first, then computed ones. Returns
    /// `None` when no property has that name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .chain(self.computed_properties.iter())
            .find(|p| p.name() == name)
    }

    /// The primary key property, if the type declares one
    pub fn primary_key_property(&self) -> Option<&Property> {
        self.properties.iter().find(|p| p.is_primary())
    }

    /// Whether objects of this type only exist inside a parent object
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Whether this schema belongs to the native object type `T`
    pub fn is_schema_of<T: ObjectType>(&self) -> bool {
        self.class_name == T::CLASS_NAME
    }

    /// Every property, persisted then computed
    pub(crate) fn all_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().chain(self.computed_properties.iter())
    }

    /// Canonical multi-line description
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ObjectSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.embedded { "(embedded) " } else { "" };
        writeln!(f, "{} {}{{", self.class_name, marker)?;
        for property in self.all_properties() {
            writeln!(f, "\t{}", property.describe().replace('\n', "\n\t"))?;
        }
        write!(f, "}}")
    }
}
