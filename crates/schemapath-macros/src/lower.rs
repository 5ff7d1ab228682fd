//! Lowering of `syn` items into the core declaration model.

use proc_macro2::Span;
use syn::{Attribute, Fields, GenericArgument, ItemStruct, PathArguments, Type};

use schemapath_core::utils::unraw;
use schemapath_core::{DeclKind, MemberField, SCHEMA_MARKER, TypeDecl, TypeRef};

/// Field attribute that only exists to exclude a field. Removed from the output.
pub(crate) const TRANSIENT_ATTR: &str = "transient";

/// A struct with named fields is a class; a tuple struct is rejected like an interface.
pub(crate) fn lower_struct(item: &ItemStruct) -> TypeDecl<Span> {
    let name = unraw(&item.ident.to_string()).to_string();
    let fields = match &item.fields {
        Fields::Named(named) => &named.named,
        Fields::Unnamed(_) => return interface_like(&item.ident),
        Fields::Unit => {
            return TypeDecl::new(name, DeclKind::Class, item.ident.span())
                .with_attribute(SCHEMA_MARKER);
        }
    };

    let mut decl =
        TypeDecl::new(name, DeclKind::Class, item.ident.span()).with_attribute(SCHEMA_MARKER);
    for field in fields {
        let Some(ident) = &field.ident else {
            continue;
        };
        let mut member = MemberField::new(
            unraw(&ident.to_string()),
            lower_type(&field.ty),
            ident.span(),
        );
        member.attributes = attribute_names(&field.attrs);
        decl.fields.push(member);
    }
    decl
}

/// Declaration for an item that cannot carry descriptors (trait, enum, union, tuple struct).
pub(crate) fn interface_like(ident: &syn::Ident) -> TypeDecl<Span> {
    TypeDecl::new(
        unraw(&ident.to_string()),
        DeclKind::Interface,
        ident.span(),
    )
    .with_attribute(SCHEMA_MARKER)
}

/// Outer attribute names, doc comments excluded.
fn attribute_names(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| !attr.path().is_ident("doc"))
        .filter_map(|attr| attr.path().segments.last())
        .map(|segment| segment.ident.to_string())
        .collect()
}

/// Nominal view of a Rust type.
///
/// References and groupings are looked through; arrays and slices add an
/// array dimension. Types without a path keep their token text as name.
pub(crate) fn lower_type(ty: &Type) -> TypeRef {
    match ty {
        Type::Path(type_path) => {
            let segments: Vec<String> = type_path
                .path
                .segments
                .iter()
                .map(|s| unraw(&s.ident.to_string()).to_string())
                .collect();
            if segments.is_empty() {
                return opaque(ty);
            }
            let args = type_path
                .path
                .segments
                .last()
                .map(generic_types)
                .unwrap_or_default();
            TypeRef::path(segments).with_args(args)
        }
        Type::Reference(reference) => lower_type(&reference.elem),
        Type::Group(group) => lower_type(&group.elem),
        Type::Paren(paren) => lower_type(&paren.elem),
        Type::Array(array) => lower_type(&array.elem).array_of(),
        Type::Slice(slice) => lower_type(&slice.elem).array_of(),
        _ => opaque(ty),
    }
}

fn generic_types(segment: &syn::PathSegment) -> Vec<TypeRef> {
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return Vec::new();
    };
    args.args
        .iter()
        .filter_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(lower_type(ty)),
            _ => None,
        })
        .collect()
}

fn opaque(ty: &Type) -> TypeRef {
    TypeRef::named(quote::quote!(#ty).to_string())
}
