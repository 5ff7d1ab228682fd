use crate::conflict::check_collision;
use crate::error::SchemaError;
use crate::model::{DeclKind, MemberField, MemberKind, MethodDecl, Modifiers, TypeDecl, TypeRef};

fn decl() -> TypeDecl<u32> {
    TypeDecl::new("User", DeclKind::Class, 0)
        .with_field(MemberField::new("name", TypeRef::named("String"), 10))
        .with_field(
            MemberField::new("_name", TypeRef::named("String"), 20)
                .with_modifiers(Modifiers::STATIC),
        )
        .with_field(MemberField::new("_age", TypeRef::named("int"), 30))
        .with_method(MethodDecl::new("_address", true))
        .with_method(MethodDecl::new("_phone", false))
}

#[test]
fn static_field_collides_with_constant() {
    let decl = decl();
    let field = &decl.fields[0];
    let hit = check_collision(&decl, field, "_name", MemberKind::Field).unwrap();

    assert_eq!(hit.location, 10);
    assert_eq!(
        hit.error,
        SchemaError::DuplicateDescriptor {
            field: "name".into(),
            name: "_name".into(),
            kind: MemberKind::Field,
        }
    );
    insta::assert_snapshot!(
        hit.to_string(),
        @"schema for field `name` already exists: static field `_name`"
    );
}

#[test]
fn instance_field_does_not_collide() {
    let decl = decl();
    let field = &decl.fields[0];
    assert!(check_collision(&decl, field, "_age", MemberKind::Field).is_none());
}

#[test]
fn static_method_collides_with_builder() {
    let decl = decl();
    let field = &decl.fields[0];
    let hit = check_collision(&decl, field, "_address", MemberKind::Function);
    assert!(hit.is_some());
}

#[test]
fn instance_method_does_not_collide() {
    let decl = decl();
    let field = &decl.fields[0];
    assert!(check_collision(&decl, field, "_phone", MemberKind::Function).is_none());
}

#[test]
fn kinds_are_checked_separately() {
    let decl = decl();
    let field = &decl.fields[0];
    // `_name` is a static field, not a static function.
    assert!(check_collision(&decl, field, "_name", MemberKind::Function).is_none());
    // `_address` is a static function, not a static field.
    assert!(check_collision(&decl, field, "_address", MemberKind::Field).is_none());
}
