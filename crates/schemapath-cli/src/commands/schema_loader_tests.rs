use std::fs;
use std::path::PathBuf;

use schemapath_compiler::SourceKind;

use super::schema_loader::{LoadError, load_schema_sources};

#[test]
fn nothing_to_load() {
    let err = load_schema_sources(&[], None).unwrap_err();
    assert!(matches!(err, LoadError::NoInput));
}

#[test]
fn inline_text_only() {
    let map = load_schema_sources(&[], Some("class A {}")).unwrap();
    assert_eq!(map.len(), 1);
    let source = map.iter().next().unwrap();
    assert_eq!(source.kind, &SourceKind::Inline);
    assert_eq!(source.content, "class A {}");
}

#[test]
fn directory_loads_schema_files_sorted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.schema"), "class B {}").unwrap();
    fs::write(dir.path().join("a.schema"), "class A {}").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let map = load_schema_sources(&[dir.path().to_path_buf()], None).unwrap();
    let contents: Vec<&str> = map.iter().map(|s| s.content).collect();
    assert_eq!(contents, ["class A {}", "class B {}"]);
    assert!(map.iter().all(|s| matches!(s.kind, SourceKind::File(_))));
}

#[test]
fn directory_without_schemas() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let err = load_schema_sources(&[dir.path().to_path_buf()], None).unwrap_err();
    assert!(matches!(err, LoadError::EmptyDirectory(_)));
    assert!(err.to_string().starts_with("no .schema files found"));
}

#[test]
fn text_comes_before_files() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("order.schema");
    fs::write(&file, "class Order {}").unwrap();

    let map = load_schema_sources(&[file.clone()], Some("class Inline {}")).unwrap();
    let contents: Vec<&str> = map.iter().map(|s| s.content).collect();
    assert_eq!(contents, ["class Inline {}", "class Order {}"]);
    assert_eq!(
        map.iter().nth(1).and_then(|s| match s.kind {
            SourceKind::File(path) => Some(PathBuf::from(path)),
            _ => None,
        }),
        Some(file)
    );
}

#[test]
fn missing_file() {
    let err = load_schema_sources(&[PathBuf::from("does/not/exist.schema")], None).unwrap_err();
    insta::assert_snapshot!(
        err.to_string().split(':').next().unwrap_or_default(),
        @"failed to read 'does/not/exist.schema'"
    );
}
