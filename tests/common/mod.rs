//! Shared test utilities for all integration test suites.
//!
//! Fixture object types and helpers for opening databases over them.
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Arc;
use tempfile::TempDir;

pub use objectdb::{
    Data, Database, Decimal128, ObjectDbConfig, ObjectId, ObjectSchema, ObjectType, Persisted,
    Property, PropertyType, Schema, TypeRegistry,
};

use chrono::{DateTime, Utc};
use uuid::Uuid;

// ============================================================================
// Fixture object types
// ============================================================================

/// Integer-backed enum stored in an `int` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntEnum {
    Value1 = 1,
    Value2 = 3,
}

impl Persisted for IntEnum {
    const PROPERTY_TYPE: PropertyType = PropertyType::Int;
}

pub struct SwiftBoolObject {
    pub bool_col: bool,
}

impl ObjectType for SwiftBoolObject {
    const CLASS_NAME: &'static str = "SwiftBoolObject";

    fn object_schema() -> ObjectSchema {
        ObjectSchema::new(Self::CLASS_NAME, vec![Property::of::<bool>("boolCol")])
    }
}

/// One property of every kind.
pub struct SwiftObject {
    pub bool_col: bool,
    pub int_col: i64,
    pub int_enum_col: IntEnum,
    pub float_col: f32,
    pub double_col: f64,
    pub string_col: String,
    pub binary_col: Data,
    pub date_col: DateTime<Utc>,
    pub decimal_col: Decimal128,
    pub object_id_col: ObjectId,
    pub object_col: Option<SwiftBoolObject>,
    pub uuid_col: Uuid,
    pub array_col: Vec<SwiftBoolObject>,
    pub set_col: Vec<SwiftBoolObject>,
}

impl ObjectType for SwiftObject {
    const CLASS_NAME: &'static str = "SwiftObject";

    fn object_schema() -> ObjectSchema {
        ObjectSchema::new(
            Self::CLASS_NAME,
            vec![
                Property::of::<bool>("boolCol"),
                Property::of::<i64>("intCol"),
                Property::of::<IntEnum>("intEnumCol"),
                Property::of::<f32>("floatCol"),
                Property::of::<f64>("doubleCol"),
                Property::of::<String>("stringCol"),
                Property::of::<Data>("binaryCol"),
                Property::of::<DateTime<Utc>>("dateCol"),
                Property::of::<Decimal128>("decimalCol"),
                Property::of::<ObjectId>("objectIdCol"),
                Property::object("objectCol", SwiftBoolObject::CLASS_NAME),
                Property::of::<Uuid>("uuidCol"),
                Property::object_array("arrayCol", SwiftBoolObject::CLASS_NAME),
                Property::object_set("setCol", SwiftBoolObject::CLASS_NAME),
            ],
        )
    }
}

pub struct SwiftStringObject {
    pub string_col: String,
}

impl ObjectType for SwiftStringObject {
    const CLASS_NAME: &'static str = "SwiftStringObject";

    fn object_schema() -> ObjectSchema {
        ObjectSchema::new(Self::CLASS_NAME, vec![Property::of::<String>("stringCol")])
    }
}

pub struct SwiftPrimaryStringObject {
    pub string_col: String,
    pub int_col: i64,
}

impl ObjectType for SwiftPrimaryStringObject {
    const CLASS_NAME: &'static str = "SwiftPrimaryStringObject";

    fn object_schema() -> ObjectSchema {
        ObjectSchema::new(
            Self::CLASS_NAME,
            vec![
                Property::of::<String>("stringCol").primary_key(),
                Property::of::<i64>("intCol"),
            ],
        )
    }
}

/// Owner side of a back-link.
pub struct SwiftOwnerObject {
    pub name: String,
    pub dog: Option<SwiftDogObject>,
}

impl ObjectType for SwiftOwnerObject {
    const CLASS_NAME: &'static str = "SwiftOwnerObject";

    fn object_schema() -> ObjectSchema {
        ObjectSchema::new(
            Self::CLASS_NAME,
            vec![
                Property::of::<String>("name"),
                Property::object("dog", SwiftDogObject::CLASS_NAME),
            ],
        )
    }
}

/// Linked-to side of a back-link, with computed `owners`.
pub struct SwiftDogObject {
    pub dog_name: String,
}

impl ObjectType for SwiftDogObject {
    const CLASS_NAME: &'static str = "SwiftDogObject";

    fn object_schema() -> ObjectSchema {
        ObjectSchema::new(
            Self::CLASS_NAME,
            vec![
                Property::of::<String>("dogName"),
                Property::linking_objects("owners", SwiftOwnerObject::CLASS_NAME, "dog"),
            ],
        )
    }
}

/// Optional and indexed scalars, including a uuid primary key.
pub struct SwiftOptionalObject;

impl ObjectType for SwiftOptionalObject {
    const CLASS_NAME: &'static str = "SwiftOptionalObject";

    fn object_schema() -> ObjectSchema {
        ObjectSchema::new(
            Self::CLASS_NAME,
            vec![
                Property::of::<Uuid>("id").primary_key(),
                Property::of::<Option<String>>("optStringCol").indexed(),
                Property::of::<Option<i32>>("optIntCol"),
                Property::of::<Option<DateTime<Utc>>>("optDateCol"),
                Property::of::<i64>("intList").array(),
                Property::of::<Option<String>>("stringSet").set(),
            ],
        )
    }
}

/// Embedded type owned by its parent.
pub struct EmbeddedAddress;

impl ObjectType for EmbeddedAddress {
    const CLASS_NAME: &'static str = "EmbeddedAddress";

    fn object_schema() -> ObjectSchema {
        ObjectSchema::new(Self::CLASS_NAME, vec![Property::of::<String>("street")]).embedded()
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Every fixture type, in a fixed order.
pub fn fixture_types() -> TypeRegistry {
    TypeRegistry::new()
        .register::<SwiftBoolObject>()
        .register::<SwiftObject>()
        .register::<SwiftStringObject>()
        .register::<SwiftPrimaryStringObject>()
        .register::<SwiftOwnerObject>()
        .register::<SwiftDogObject>()
        .register::<SwiftOptionalObject>()
        .register::<EmbeddedAddress>()
}

/// Test database in a temporary directory.
pub struct TestDb {
    pub db: Arc<Database>,
    pub dir: TempDir,
}

impl TestDb {
    /// Open a disk-backed database over every fixture type.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db = Database::open(dir.path(), &fixture_types()).expect("Failed to open test database");
        TestDb { db, dir }
    }

    /// Open an in-memory database over every fixture type.
    pub fn ephemeral() -> Arc<Database> {
        Database::ephemeral(&fixture_types()).expect("Failed to open ephemeral database")
    }

    /// Reopen the same directory as a new handle.
    pub fn reopen(&self) -> Arc<Database> {
        Database::open(self.dir.path(), &fixture_types()).expect("Failed to reopen test database")
    }

    pub fn schema(&self) -> &Schema {
        self.db.schema()
    }
}

/// `SwiftObject` schema from a fresh in-memory database.
pub fn swift_object_schema() -> ObjectSchema {
    TestDb::ephemeral()
        .schema()
        .lookup(SwiftObject::CLASS_NAME)
        .cloned()
        .expect("SwiftObject is registered")
}
