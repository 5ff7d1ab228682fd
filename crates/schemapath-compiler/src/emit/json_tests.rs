use super::json::{JsonEmitConfig, emit};
use crate::schema::SchemaCompiler;
use crate::source_map::SourceMap;

fn emit_json(input: &str, pretty: bool) -> String {
    let compiled = SchemaCompiler::new(SourceMap::inline(input)).compile();
    emit(&compiled, &JsonEmitConfig { pretty }).expect("valid schema")
}

#[test]
fn compact_document() {
    let out = emit_json("@Schema class Order { name: String; customer: User }", false);
    insta::assert_snapshot!(out, @r#"{"types":[{"name":"Order","constants":[{"name":"_name","value":"name"},{"name":"_customer","value":"customer"}],"functions":[{"name":"_customer","param":"subpath","prefix":"customer."}]}]}"#);
}

#[test]
fn pretty_document() {
    let out = emit_json("@Schema class Point { x: int }", true);
    insta::assert_snapshot!(out, @r#"
    {
      "types": [
        {
          "name": "Point",
          "constants": [
            {
              "name": "_x",
              "value": "x"
            }
          ],
          "functions": []
        }
      ]
    }
    "#);
}

#[test]
fn document_parses_back() {
    let out = emit_json("@Schema class A { b: B } @Schema class C { d: int }", true);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let types = value["types"].as_array().unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(types[0]["functions"][0]["prefix"], "b.");
    assert_eq!(types[1]["functions"].as_array().unwrap().len(), 0);
}

#[test]
fn invalid_schema_is_refused() {
    let compiled = SchemaCompiler::new(SourceMap::inline("@Schema interface I {}")).compile();
    assert!(emit(&compiled, &JsonEmitConfig::default()).is_err());
}
