//! Property descriptors as seen through an open handle

use crate::common::*;
use chrono::{DateTime, Utc};
use uuid::Uuid;

fn property(class_name: &str, name: &str) -> Property {
    TestDb::ephemeral()
        .schema()
        .lookup(class_name)
        .and_then(|s| s.property(name))
        .cloned()
        .unwrap()
}

#[test]
fn test_swift_object_kinds() {
    let object_schema = swift_object_schema();
    let kinds: Vec<PropertyType> = object_schema
        .properties()
        .iter()
        .map(Property::property_type)
        .collect();
    assert_eq!(
        kinds,
        vec![
            PropertyType::Bool,
            PropertyType::Int,
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
            PropertyType::Object,
            PropertyType::Object,
        ]
    );
}

#[test]
fn test_native_types() {
    let object_schema = swift_object_schema();
    let check = |name: &str| object_schema.property(name).unwrap().clone();

    assert!(check("boolCol").has_native_type::<bool>());
    assert!(check("intCol").has_native_type::<i64>());
    assert!(check("intEnumCol").has_native_type::<IntEnum>());
    assert!(check("floatCol").has_native_type::<f32>());
    assert!(check("doubleCol").has_native_type::<f64>());
    assert!(check("stringCol").has_native_type::<String>());
    assert!(check("binaryCol").has_native_type::<Data>());
    assert!(check("dateCol").has_native_type::<DateTime<Utc>>());
    assert!(check("decimalCol").has_native_type::<Decimal128>());
    assert!(check("objectIdCol").has_native_type::<ObjectId>());
    assert!(check("uuidCol").has_native_type::<Uuid>());

    assert!(!check("floatCol").has_native_type::<f64>());
    assert!(!check("stringCol").has_native_type::<Option<String>>());
}

#[test]
fn test_link_targets() {
    for name in ["objectCol", "arrayCol", "setCol"] {
        let p = property("SwiftObject", name);
        assert_eq!(p.object_class_name(), Some("SwiftBoolObject"));
        assert_eq!(p.link_origin_property_name(), None);
    }
    assert_eq!(property("SwiftObject", "boolCol").object_class_name(), None);
}

#[test]
fn test_collection_flags() {
    let object_col = property("SwiftObject", "objectCol");
    assert!(!object_col.is_array());
    assert!(!object_col.is_set());
    assert!(object_col.is_optional());

    let array_col = property("SwiftObject", "arrayCol");
    assert!(array_col.is_array());
    assert!(!array_col.is_set());
    assert!(!array_col.is_optional());

    let set_col = property("SwiftObject", "setCol");
    assert!(!set_col.is_array());
    assert!(set_col.is_set());
}

#[test]
fn test_back_link() {
    let owners = property("SwiftDogObject", "owners");
    assert_eq!(owners.property_type(), PropertyType::LinkingObjects);
    assert_eq!(owners.object_class_name(), Some("SwiftOwnerObject"));
    assert_eq!(owners.link_origin_property_name(), Some("dog"));
    assert!(owners.is_array());
}

#[test]
fn test_optional_and_indexed() {
    let id = property("SwiftOptionalObject", "id");
    assert!(id.is_primary());
    assert!(id.is_indexed());
    assert!(id.has_native_type::<Uuid>());

    let opt_string = property("SwiftOptionalObject", "optStringCol");
    assert!(opt_string.is_optional());
    assert!(opt_string.is_indexed());
    assert!(!opt_string.is_primary());

    assert!(property("SwiftOptionalObject", "optIntCol").has_native_type::<Option<i32>>());
    assert!(property("SwiftOptionalObject", "optDateCol").is_optional());

    let int_list = property("SwiftOptionalObject", "intList");
    assert!(int_list.is_array());
    assert_eq!(int_list.property_type(), PropertyType::Int);
    assert!(int_list.describe().contains("\tarray = YES;\n"));

    let string_set = property("SwiftOptionalObject", "stringSet");
    assert!(string_set.is_set());
    assert!(string_set.is_optional());
}

#[test]
fn test_optional_description() {
    let db = TestDb::ephemeral();
    let text = db.schema().lookup("SwiftOptionalObject").unwrap().describe();
    assert!(text.contains(
        "\tid {\n\t\ttype = uuid;\n\t\tindexed = YES;\n\t\tisPrimary = YES;\n\t\tarray = NO;\n\t\tset = NO;\n\t\toptional = NO;\n\t}\n"
    ));
    assert!(text.contains(
        "\toptStringCol {\n\t\ttype = string;\n\t\tindexed = YES;\n\t\tisPrimary = NO;\n\t\tarray = NO;\n\t\tset = NO;\n\t\toptional = YES;\n\t}\n"
    ));
}
