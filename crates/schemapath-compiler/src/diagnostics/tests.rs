use rowan::TextRange;

use super::*;
use crate::source_map::{SourceMap, Span};

fn span(map: &SourceMap, start: u32, end: u32) -> Span {
    let id = map.iter().next().map(|s| s.id).unwrap_or_default();
    Span::new(id, TextRange::new(start.into(), end.into()))
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn empty_schema_is_a_warning() {
    assert_eq!(
        DiagnosticKind::EmptySchema.default_severity(),
        Severity::Warning
    );
    assert_eq!(
        DiagnosticKind::DuplicateDescriptor.default_severity(),
        Severity::Error
    );
}

#[test]
fn message_templates() {
    assert_eq!(
        DiagnosticKind::ExpectedTypeName.message(None),
        "expected type name"
    );
    assert_eq!(
        DiagnosticKind::DuplicateModifier.message(Some("final")),
        "duplicate modifier `final`"
    );
    assert_eq!(
        DiagnosticKind::ExpectedTypeName.message(Some("found `{`")),
        "expected type name: found `{`"
    );
}

#[test]
fn report_with_default_message() {
    let map = SourceMap::inline("class");
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedTypeName, span(&map, 0, 5))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    assert!(!diagnostics.has_warnings());
    let diag = diagnostics.iter().next().unwrap();
    assert_eq!(diag.message(), "expected type name");
}

#[test]
fn report_with_custom_message() {
    let map = SourceMap::inline("interface Named {}");
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::InvalidTarget, span(&map, 10, 15))
        .message("Named")
        .emit();

    let diag = diagnostics.iter().next().unwrap();
    assert_eq!(
        diag.message(),
        "`@Schema` cannot be applied to interface `Named`"
    );
    assert_eq!(
        diag.hints(),
        ["`@Schema` applies only to class declarations".to_string()]
    );
}

#[test]
fn counts_by_severity() {
    let map = SourceMap::inline("class A {}");
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::EmptySchema, span(&map, 6, 7))
        .message("A")
        .emit();
    diagnostics
        .report(DiagnosticKind::DuplicateDeclaration, span(&map, 6, 7))
        .message("A")
        .emit();

    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics.warning_count(), 1);
    assert_eq!(
        diagnostics.kinds(),
        vec![
            DiagnosticKind::EmptySchema,
            DiagnosticKind::DuplicateDeclaration
        ]
    );
}

#[test]
fn plain_rendering_without_sources() {
    let map = SourceMap::inline("class A { id: int id: int }");
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedToken, span(&map, 0, 5))
        .message("`;`")
        .related_to("declared here", span(&map, 6, 7))
        .emit();

    insta::assert_snapshot!(
        diagnostics.printer().render(),
        @"error at 0..5: expected `;` (related: declared here at 6..7)"
    );
}

#[test]
fn rendering_with_sources_shows_path_and_label() {
    let mut map = SourceMap::new();
    let id = map.add_file("order.schema", "class Order {\n  final final id: String\n}\n");
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::DuplicateModifier,
            Span::new(id, TextRange::new(22.into(), 27.into())),
        )
        .message("final")
        .fix("remove the repeated modifier", "")
        .emit();

    let out = diagnostics.printer().sources(&map).render();
    assert!(out.contains("error: duplicate modifier `final`"), "{out}");
    assert!(out.contains("order.schema"), "{out}");
    assert!(out.contains("remove the repeated modifier"), "{out}");
}

#[test]
fn rendering_includes_hints() {
    let map = SourceMap::inline("interface Named {}");
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::InvalidTarget, span(&map, 10, 15))
        .message("Named")
        .emit();

    let out = diagnostics.printer().sources(&map).render();
    assert!(out.contains("<schema>"), "{out}");
    assert!(
        out.contains("`@Schema` applies only to class declarations"),
        "{out}"
    );
}

#[test]
fn extend_merges_in_order() {
    let map = SourceMap::inline("x");
    let mut first = Diagnostics::new();
    first
        .report(DiagnosticKind::UnexpectedCharacter, span(&map, 0, 1))
        .emit();
    let mut second = Diagnostics::new();
    second
        .report(DiagnosticKind::ExpectedDeclaration, span(&map, 0, 1))
        .emit();

    first.extend(second);
    assert_eq!(
        first.kinds(),
        vec![
            DiagnosticKind::UnexpectedCharacter,
            DiagnosticKind::ExpectedDeclaration
        ]
    );
}
