use indoc::indoc;

use schemapath_core::{DeclKind, Modifiers, TypeRef};

use super::{ParseResult, parse};
use crate::diagnostics::DiagnosticKind;
use crate::source_map::SourceMap;

fn parse_str(text: &str) -> ParseResult {
    let map = SourceMap::inline(text);
    let source = map.iter().next().expect("one source");
    parse(source)
}

fn first_message(result: &ParseResult) -> String {
    result
        .diagnostics
        .iter()
        .next()
        .map(|d| d.message().to_string())
        .unwrap_or_default()
}

#[test]
fn parses_marked_class() {
    let result = parse_str(indoc! {r#"
        @Schema
        class Order {
            customer: User
            total: java.math.BigDecimal;
            final code: String
            static counter: long
            @Transient cache: Map<String, Object>
            static fn _customer(subpath: String): String
            fn describe(): String
        }
    "#});

    assert!(result.is_valid());
    let [decl] = result.declarations.as_slice() else {
        panic!("expected one declaration");
    };
    assert_eq!(decl.name, "Order");
    assert_eq!(decl.kind, DeclKind::Class);
    assert!(decl.has_attribute("Schema"));

    let names: Vec<&str> = decl.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["customer", "total", "code", "counter", "cache"]);

    assert_eq!(
        decl.fields[1].ty,
        TypeRef::path(["java", "math", "BigDecimal"])
    );
    assert_eq!(decl.fields[2].modifiers, Modifiers::FINAL);
    assert_eq!(decl.fields[3].modifiers, Modifiers::STATIC);
    assert_eq!(decl.fields[4].attributes, ["Transient"]);
    assert_eq!(decl.fields[4].ty.to_string(), "Map<String, Object>");

    assert_eq!(decl.methods.len(), 2);
    assert!(decl.methods[0].is_static);
    assert_eq!(decl.methods[0].name, "_customer");
    assert!(!decl.methods[1].is_static);
}

#[test]
fn parses_interface_and_qualified_marker() {
    let result = parse_str("@com.acme.Schema interface Named {}");
    assert!(result.is_valid());
    let decl = &result.declarations[0];
    assert_eq!(decl.kind, DeclKind::Interface);
    assert_eq!(decl.attributes, ["Schema"]);
}

#[test]
fn parses_arrays_and_nested_generics() {
    let result = parse_str("class A { tags: String[]; grid: int[][]; index: Map<String, List<Item>> }");
    assert!(result.is_valid());
    let fields = &result.declarations[0].fields;
    assert_eq!(fields[0].ty.array_depth, 1);
    assert_eq!(fields[1].ty.array_depth, 2);
    assert_eq!(fields[2].ty.to_string(), "Map<String, List<Item>>");
}

#[test]
fn field_location_points_at_name() {
    let text = "class A { id: int }";
    let map = SourceMap::inline(text);
    let result = parse(map.iter().next().unwrap());
    let field = &result.declarations[0].fields[0];
    let range = std::ops::Range::<usize>::from(field.location.range);
    assert_eq!(&text[range], "id");
}

#[test]
fn modifiers_apply_in_any_order() {
    let result = parse_str("class A { static final x: int; final static y: int }");
    assert!(result.is_valid());
    for field in &result.declarations[0].fields {
        assert!(field.modifiers.is_final);
        assert!(field.modifiers.is_static);
    }
}

#[test]
fn repeated_modifier_is_an_error() {
    let result = parse_str("class A { final final x: int }");
    assert_eq!(result.diagnostics.kinds(), [DiagnosticKind::DuplicateModifier]);
    insta::assert_snapshot!(first_message(&result), @"duplicate modifier `final`");
}

#[test]
fn missing_colon() {
    let result = parse_str("class A { id int }");
    assert_eq!(result.diagnostics.kinds(), [DiagnosticKind::ExpectedToken]);
    insta::assert_snapshot!(first_message(&result), @"expected `:`, found `int`");
}

#[test]
fn missing_declaration_keyword() {
    let result = parse_str("@Schema record A {}");
    assert_eq!(
        result.diagnostics.kinds(),
        [DiagnosticKind::ExpectedDeclaration]
    );
    insta::assert_snapshot!(first_message(&result), @"expected `class` or `interface`: found `record`");
}

#[test]
fn missing_type() {
    let result = parse_str("class A { id: ; }");
    assert_eq!(result.diagnostics.kinds(), [DiagnosticKind::ExpectedType]);
}

#[test]
fn unclosed_body() {
    let result = parse_str("class A { id: int");
    assert_eq!(result.diagnostics.kinds(), [DiagnosticKind::UnclosedBody]);
    assert!(result.declarations.is_empty());
}

#[test]
fn unexpected_character() {
    let result = parse_str("class A { id: int # }");
    assert_eq!(
        result.diagnostics.kinds(),
        [DiagnosticKind::UnexpectedCharacter]
    );
    insta::assert_snapshot!(first_message(&result), @"unexpected character: `#`");
}

#[test]
fn stops_at_first_error_but_keeps_earlier_declarations() {
    let result = parse_str(indoc! {"
        class Good { id: int }
        class Bad { id: }
        class Never { id: int }
    "});
    assert_eq!(result.diagnostics.len(), 1);
    let names: Vec<&str> = result
        .declarations
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, ["Good"]);
}

#[test]
fn empty_source_has_no_declarations() {
    let result = parse_str("  // nothing here\n");
    assert!(result.is_valid());
    assert!(result.declarations.is_empty());
}
