use indoc::indoc;

use schemapath_core::LeafTable;

use crate::dump::dump;
use crate::schema::SchemaCompiler;
use crate::source_map::SourceMap;

fn dump_str(input: &str) -> String {
    dump(&SchemaCompiler::new(SourceMap::inline(input)).compile())
}

#[test]
fn decision_table() {
    let input = indoc! {"
        @Schema
        class Order {
            name: String
            customer: User
            final code: String
            @Transient cache: Map<String, Object>
            tags: String[]
        }
    "};
    insta::assert_snapshot!(dump_str(input), @r"
    class Order
      name      String               leaf String      _name
      customer  User                 composite        _customer, _customer(subpath)
      code      String               skip: final
      cache     Map<String, Object>  skip: annotated
      tags      String[]             composite        _tags, _tags(subpath)
    ");
}

#[test]
fn interface_and_empty_class() {
    let input = "@Schema interface Named {} @Schema class Empty {}";
    insta::assert_snapshot!(dump_str(input), @r"
    interface Named
      (not a valid target)

    class Empty
      (no fields)
    ");
}

#[test]
fn extra_leaf_has_no_leaf_kind() {
    let compiled = SchemaCompiler::new(SourceMap::inline("@Schema class A { id: Uuid }"))
        .leaf_table(LeafTable::with_extra(["Uuid"]))
        .compile();
    insta::assert_snapshot!(dump(&compiled), @r"
    class A
      id  Uuid  leaf  _id
    ");
}

#[test]
fn unselected_types_are_not_dumped() {
    assert_eq!(dump_str("class Plain { a: int }"), "");
}
