use crate::leaf::{LeafTable, LeafType};
use crate::model::TypeRef;

#[test]
fn every_leaf_spelling_round_trips() {
    for leaf in LeafType::ALL {
        for name in leaf.spellings() {
            assert_eq!(LeafType::from_name(name), Some(leaf), "spelling {name}");
        }
    }
}

#[test]
fn jvm_spellings_are_leaves() {
    let table = LeafTable::standard();
    for name in [
        "int", "Integer", "long", "Long", "byte", "Byte", "short", "Short", "char", "Character",
        "float", "Float", "double", "Double", "boolean", "Boolean", "String", "BigDecimal",
        "BigInteger", "Number", "Class", "Enum", "Date",
    ] {
        assert!(table.is_leaf(&TypeRef::named(name)), "{name} should be a leaf");
    }
}

#[test]
fn rust_spellings_are_leaves() {
    let table = LeafTable::standard();
    for name in ["i8", "i32", "u64", "usize", "f32", "f64", "bool", "char", "str", "String"] {
        assert!(table.is_leaf(&TypeRef::named(name)), "{name} should be a leaf");
    }
}

#[test]
fn user_types_are_composite() {
    let table = LeafTable::standard();
    assert!(!table.is_leaf(&TypeRef::named("User")));
    assert!(!table.is_leaf(&TypeRef::named("Address")));
    assert!(!table.is_leaf(&TypeRef::named("Map")));
}

#[test]
fn qualified_path_uses_last_segment() {
    let table = LeafTable::standard();
    assert!(table.is_leaf(&TypeRef::path(["java", "math", "BigDecimal"])));
    assert!(table.is_leaf(&TypeRef::path(["std", "string", "String"])));
    assert!(!table.is_leaf(&TypeRef::path(["com", "acme", "User"])));
}

#[test]
fn generic_containers_are_composite() {
    let table = LeafTable::standard();
    let list = TypeRef::named("List").with_args(vec![TypeRef::named("String")]);
    assert!(!table.is_leaf(&list));
}

#[test]
fn arrays_are_never_leaves() {
    let table = LeafTable::standard();
    let strings = TypeRef::named("String").array_of();
    assert!(!table.is_leaf(&strings));
    assert_eq!(table.classify(&strings), None);
}

#[test]
fn spelling_is_case_sensitive() {
    let table = LeafTable::standard();
    assert!(!table.is_leaf(&TypeRef::named("string")));
    assert!(!table.is_leaf(&TypeRef::named("INT")));
}

#[test]
fn extra_names_extend_the_table() {
    let table = LeafTable::with_extra(["Money", "Uuid"]);
    assert!(table.is_leaf(&TypeRef::named("Money")));
    assert!(table.is_leaf(&TypeRef::named("Uuid")));
    assert!(table.is_leaf(&TypeRef::named("int")));
    assert!(!LeafTable::standard().is_leaf(&TypeRef::named("Money")));
    assert_eq!(table.extra().collect::<Vec<_>>(), ["Money", "Uuid"]);
}

#[test]
fn classify_reports_leaf_kind() {
    let table = LeafTable::standard();
    assert_eq!(
        table.classify(&TypeRef::named("Integer")),
        Some(LeafType::Int)
    );
    assert_eq!(
        table.classify(&TypeRef::named("SystemTime")),
        Some(LeafType::DateTime)
    );
    assert_eq!(table.classify(&TypeRef::named("User")), None);
}
