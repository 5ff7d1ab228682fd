//! Human-readable view of the per-field decisions of a compilation.

use schemapath_core::{DeclKind, LeafTable, MemberField, TypeDecl, exclusion};

use crate::schema::{Compiled, TypeSchema};
use crate::source_map::Span;

/// Render the decision table of every selected type.
///
/// ```text
/// class Order
///   name      String  leaf String  _name
///   customer  User    composite    _customer, _customer(subpath)
/// ```
pub fn dump(compiled: &Compiled) -> String {
    compiled
        .types()
        .iter()
        .filter_map(|ty| {
            let decl = compiled.declaration(&ty.name)?;
            Some(dump_type(decl, ty, compiled.leaf_table()))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn dump_type(decl: &TypeDecl<Span>, ty: &TypeSchema, leaves: &LeafTable) -> String {
    let mut out = format!("{} {}", decl.kind, decl.name);

    if decl.kind == DeclKind::Interface {
        out.push_str("\n  (not a valid target)");
        return out;
    }
    if decl.fields.is_empty() {
        out.push_str("\n  (no fields)");
        return out;
    }

    let rows: Vec<[String; 4]> = decl
        .fields
        .iter()
        .map(|field| row(field, ty, leaves))
        .collect();

    let mut widths = [0usize; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    for [name, type_name, decision, members] in &rows {
        let line = format!(
            "  {name:<w0$}  {type_name:<w1$}  {decision:<w2$}  {members}",
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        );
        out.push('\n');
        out.push_str(line.trim_end());
    }
    out
}

fn row(field: &MemberField<Span>, ty: &TypeSchema, leaves: &LeafTable) -> [String; 4] {
    let name = field.name.clone();
    let type_name = field.ty.to_string();

    if let Some(reason) = exclusion(field) {
        return [name, type_name, format!("skip: {reason}"), String::new()];
    }

    let decision = match leaves.classify(&field.ty) {
        Some(leaf) => format!("leaf {leaf:?}"),
        None if leaves.is_leaf(&field.ty) => "leaf".to_string(),
        None => "composite".to_string(),
    };

    // Duplicate field names map to the same descriptor; the first is shown.
    let members = ty
        .descriptors
        .iter()
        .find(|d| d.field == field.name)
        .map(|d| {
            let mut members = d.constant.name.clone();
            if let Some(builder) = &d.builder {
                members.push_str(&format!(", {}({})", builder.name, builder.param));
            }
            members
        })
        .unwrap_or_default();

    [name, type_name, decision, members]
}
