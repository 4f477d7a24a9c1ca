//! Property descriptors
//!
//! A [`Property`] describes one field of an object type: its kind, its
//! collection shape, its flags, and for links the class it points at.
//!
//! ## Kinds
//!
//! | PropertyType | Name | Native type |
//! |--------------|------|-------------|
//! | Bool | `bool` | `bool` |
//! | Int | `int` | `i8`..`i64` |
//! | Float | `float` | `f32` |
//! | Double | `double` | `f64` |
//! | String | `string` | `String` |
//! | Data | `data` | [`Data`](crate::value::Data) |
//! | Date | `date` | `chrono::DateTime<Utc>` |
//! | Decimal128 | `decimal128` | [`Decimal128`](crate::value::Decimal128) |
//! | ObjectId | `object id` | [`ObjectId`](crate::value::ObjectId) |
//! | Object | `object` | another object type |
//! | Uuid | `uuid` | `uuid::Uuid` |
//! | LinkingObjects | `linking objects` | back-links, computed |

use crate::value::Persisted;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The fixed set of value kinds a property can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    /// Boolean
    Bool,
    /// Signed integer (stored as 64 bits)
    Int,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
    /// UTF-8 string
    String,
    /// Binary blob
    Data,
    /// Point in time
    Date,
    /// 128-bit decimal
    Decimal128,
    /// Opaque object identifier
    ObjectId,
    /// Link to another object
    Object,
    /// 16-byte UUID
    Uuid,
    /// Reverse of an `Object` link, computed from the linking side
    LinkingObjects,
}

impl PropertyType {
    /// All property types (for iteration)
    pub const ALL: [PropertyType; 12] = [
        PropertyType::Bool,
        PropertyType::Int,
        PropertyType::Float,
        PropertyType::Double,
        PropertyType::String,
        PropertyType::Data,
        PropertyType::Date,
        PropertyType::Decimal128,
        PropertyType::ObjectId,
        PropertyType::Object,
        PropertyType::Uuid,
        PropertyType::LinkingObjects,
    ];

    /// Name used in schema descriptions
    pub const fn name(&self) -> &'static str {
        match self {
            PropertyType::Bool => "bool",
            PropertyType::Int => "int",
            PropertyType::Float => "float",
            PropertyType::Double => "double",
            PropertyType::String => "string",
            PropertyType::Data => "data",
            PropertyType::Date => "date",
            PropertyType::Decimal128 => "decimal128",
            PropertyType::ObjectId => "object id",
            PropertyType::Object => "object",
            PropertyType::Uuid => "uuid",
            PropertyType::LinkingObjects => "linking objects",
        }
    }

    /// Parse from the description name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Whether values of this kind are links to other objects
    pub const fn is_link(&self) -> bool {
        matches!(self, PropertyType::Object | PropertyType::LinkingObjects)
    }

    /// Whether a property of this kind can be the primary key
    pub const fn supports_primary_key(&self) -> bool {
        matches!(
            self,
            PropertyType::Int | PropertyType::String | PropertyType::ObjectId | PropertyType::Uuid
        )
    }

    /// Whether a property of this kind can carry a search index
    pub const fn supports_index(&self) -> bool {
        matches!(
            self,
            PropertyType::Bool
                | PropertyType::Int
                | PropertyType::String
                | PropertyType::Date
                | PropertyType::ObjectId
                | PropertyType::Uuid
        )
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Collection shape of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Collection {
    /// A single value
    #[default]
    Single,
    /// Ordered list of values
    Array,
    /// Unordered set of distinct values
    Set,
}

/// Descriptor of one field of an object schema
///
/// Built with the constructors below and refined with the builder methods.
/// Validation of the combination of flags happens when the owning
/// [`Schema`](crate::Schema) is assembled, not here.
///
/// ```
/// use objectdb_core::{Property, PropertyType};
///
/// let name = Property::of::<String>("name").indexed();
/// assert_eq!(name.property_type(), PropertyType::String);
/// assert!(name.is_indexed());
///
/// let owner = Property::object("owner", "Person");
/// assert!(owner.is_optional());
/// assert_eq!(owner.object_class_name(), Some("Person"));
/// ```
///
/// Equality compares what the descriptor reports, so a primary key equals the
/// same primary key explicitly marked `indexed()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    name: String,
    property_type: PropertyType,
    collection: Collection,
    object_class_name: Option<String>,
    link_origin_property_name: Option<String>,
    indexed: bool,
    primary: bool,
    optional: bool,
}

impl Property {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a required, single-valued property of the given kind
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Property {
            name: name.into(),
            property_type,
            collection: Collection::Single,
            object_class_name: None,
            link_origin_property_name: None,
            indexed: false,
            primary: false,
            optional: false,
        }
    }

    /// Create a property from a native Rust type
    ///
    /// `Option<T>` yields an optional property of `T`'s kind.
    pub fn of<T: Persisted>(name: impl Into<String>) -> Self {
        let mut property = Property::new(name, T::PROPERTY_TYPE);
        property.optional = T::OPTIONAL;
        property
    }

    /// To-one link to `class_name`; always optional
    pub fn object(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        let mut property = Property::new(name, PropertyType::Object);
        property.object_class_name = Some(class_name.into());
        property.optional = true;
        property
    }

    /// Ordered to-many link to `class_name`
    pub fn object_array(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        let mut property = Property::new(name, PropertyType::Object);
        property.object_class_name = Some(class_name.into());
        property.collection = Collection::Array;
        property
    }

    /// Unordered to-many link to `class_name`
    pub fn object_set(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        let mut property = Property::new(name, PropertyType::Object);
        property.object_class_name = Some(class_name.into());
        property.collection = Collection::Set;
        property
    }

    /// Back-links from every `class_name` whose `origin_property` points here
    pub fn linking_objects(
        name: impl Into<String>,
        class_name: impl Into<String>,
        origin_property: impl Into<String>,
    ) -> Self {
        let mut property = Property::new(name, PropertyType::LinkingObjects);
        property.object_class_name = Some(class_name.into());
        property.link_origin_property_name = Some(origin_property.into());
        property.collection = Collection::Array;
        property
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Mark as indexed
    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    /// Mark as the primary key of its object type
    pub fn primary_key(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Mark as optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Turn into an ordered list of this kind
    pub fn array(mut self) -> Self {
        self.collection = Collection::Array;
        self
    }

    /// Turn into a set of this kind
    pub fn set(mut self) -> Self {
        self.collection = Collection::Set;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Property name, unique within its object schema
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value kind
    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    /// Collection shape
    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// Ordered list of values
    pub fn is_array(&self) -> bool {
        self.collection == Collection::Array
    }

    /// Set of values
    pub fn is_set(&self) -> bool {
        self.collection == Collection::Set
    }

    /// Array or set
    pub fn is_collection(&self) -> bool {
        self.collection != Collection::Single
    }

    /// Whether lookups on this property use an index
    ///
    /// Primary keys are always indexed.
    pub fn is_indexed(&self) -> bool {
        self.indexed || self.primary
    }

    /// Whether this is the primary key of its object type
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Whether the value may be absent
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Target class for `object` and `linking objects` properties
    pub fn object_class_name(&self) -> Option<&str> {
        self.object_class_name.as_deref()
    }

    /// Origin link for `linking objects` properties; `None` for forward links
    pub fn link_origin_property_name(&self) -> Option<&str> {
        self.link_origin_property_name.as_deref()
    }

    /// Whether this property stores values of the native type `T`
    ///
    /// Compares the kind and the optional flag.
    pub fn has_native_type<T: Persisted>(&self) -> bool {
        self.property_type == T::PROPERTY_TYPE && self.optional == T::OPTIONAL
    }

    /// Canonical multi-line description
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.property_type == other.property_type
            && self.collection == other.collection
            && self.object_class_name == other.object_class_name
            && self.link_origin_property_name == other.link_origin_property_name
            && self.is_indexed() == other.is_indexed()
            && self.primary == other.primary
            && self.optional == other.optional
    }
}

impl Eq for Property {}

impl Hash for Property {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.property_type.hash(state);
        self.collection.hash(state);
        self.object_class_name.hash(state);
        self.link_origin_property_name.hash(state);
        self.is_indexed().hash(state);
        self.primary.hash(state);
        self.optional.hash(state);
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "YES"
    } else {
        "NO"
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.name)?;
        writeln!(f, "\ttype = {};", self.property_type)?;
        if let Some(class_name) = &self.object_class_name {
            writeln!(f, "\tobjectClassName = {};", class_name)?;
            writeln!(
                f,
                "\tlinkOriginPropertyName = {};",
                self.link_origin_property_name.as_deref().unwrap_or("(null)")
            )?;
        }
        writeln!(f, "\tindexed = {};", yes_no(self.is_indexed()))?;
        writeln!(f, "\tisPrimary = {};", yes_no(self.primary))?;
        writeln!(f, "\tarray = {};", yes_no(self.is_array()))?;
        writeln!(f, "\tset = {};", yes_no(self.is_set()))?;
        writeln!(f, "\toptional = {};", yes_no(self.optional))?;
        write!(f, "}}")
    }
}
