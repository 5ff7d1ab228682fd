//! Expansion of `#[schema]`.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{Fields, Ident, Item, ItemStruct};

use schemapath_core::utils::paths_type_name;
use schemapath_core::{LeafTable, SchemaError, Synthesis, TypeDecl, synthesize_schema};

use crate::lower::{TRANSIENT_ATTR, interface_like, lower_struct};

const DEFAULT_PATHS_SUFFIX: &str = "Paths";

#[derive(Default)]
struct SchemaArgs {
    paths: Option<Ident>,
    leaves: Vec<String>,
}

fn parse_args(attr: TokenStream) -> syn::Result<SchemaArgs> {
    let mut args = SchemaArgs::default();
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("paths") {
            args.paths = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("leaf") {
            let path: syn::Path = meta.value()?.parse()?;
            if let Some(segment) = path.segments.last() {
                args.leaves.push(segment.ident.to_string());
            }
            Ok(())
        } else {
            Err(meta.error("unsupported schema option, expected `paths` or `leaf`"))
        }
    });
    syn::parse::Parser::parse2(parser, attr)?;
    Ok(args)
}

pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let args = parse_args(attr)?;
    let leaves = LeafTable::with_extra(args.leaves);

    let mut item = match syn::parse2::<Item>(item)? {
        Item::Struct(item) => item,
        Item::Enum(item) => return Err(rejected(&interface_like(&item.ident), &leaves)),
        Item::Trait(item) => return Err(rejected(&interface_like(&item.ident), &leaves)),
        Item::Union(item) => return Err(rejected(&interface_like(&item.ident), &leaves)),
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "`#[schema]` can only be applied to structs",
            ));
        }
    };

    let decl = lower_struct(&item);
    let synthesis = synthesize_schema(&decl, &leaves);
    if let Some(error) = errors_of(&synthesis) {
        return Err(error);
    }

    strip_transient(&mut item);
    Ok(generate(&item, &decl, &synthesis, args.paths))
}

/// Run the pass on a declaration that is known to be rejected and return its error.
fn rejected(decl: &TypeDecl<Span>, leaves: &LeafTable) -> syn::Error {
    let synthesis = synthesize_schema(decl, leaves);
    errors_of(&synthesis)
        .unwrap_or_else(|| syn::Error::new(decl.location, "`#[schema]` cannot be applied here"))
}

fn errors_of(synthesis: &Synthesis<Span>) -> Option<syn::Error> {
    synthesis
        .errors
        .iter()
        .map(|located| {
            let message = match &located.error {
                SchemaError::InvalidTarget { type_name } => format!(
                    "`#[schema]` cannot be applied to `{type_name}`: expected a struct with named fields"
                ),
                error => error.to_string(),
            };
            syn::Error::new(located.location, message)
        })
        .reduce(|mut acc, error| {
            acc.combine(error);
            acc
        })
}

fn strip_transient(item: &mut ItemStruct) {
    if let Fields::Named(named) = &mut item.fields {
        for field in named.named.iter_mut() {
            field
                .attrs
                .retain(|attr| !attr.path().is_ident(TRANSIENT_ATTR));
        }
    }
}

fn generate(
    item: &ItemStruct,
    decl: &TypeDecl<Span>,
    synthesis: &Synthesis<Span>,
    paths: Option<Ident>,
) -> TokenStream {
    let name = &item.ident;
    let vis = &item.vis;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();

    let field_span = |field: &str| {
        decl.fields
            .iter()
            .find(|f| f.name == field)
            .map(|f| f.location)
            .unwrap_or_else(Span::call_site)
    };

    let mut out = quote! { #item };

    if !synthesis.descriptors.is_empty() {
        let constants = synthesis.descriptors.iter().map(|d| {
            let ident = Ident::new(&d.constant.name, field_span(&d.field));
            let value = &d.constant.value;
            let doc = format!("Schema path of `{value}`.");
            quote! {
                #[doc = #doc]
                pub const #ident: &'static str = #value;
            }
        });
        out.extend(quote! {
            #[allow(non_upper_case_globals)]
            impl #impl_generics #name #ty_generics #where_clause {
                #(#constants)*
            }
        });
    }

    let builders: Vec<TokenStream> = synthesis
        .builders()
        .map(|b| {
            let ident = Ident::new(&b.name, field_span(&b.field));
            let param = Ident::new(b.param, Span::call_site());
            let prefix = &b.prefix;
            let doc = format!("Schema path of `{}` nested under `{}`.", b.param, b.field);
            quote! {
                #[doc = #doc]
                pub fn #ident(#param: &str) -> ::std::string::String {
                    [#prefix, #param].concat()
                }
            }
        })
        .collect();

    if !builders.is_empty() {
        let paths = paths
            .unwrap_or_else(|| format_ident!("{}", paths_type_name(&decl.name, DEFAULT_PATHS_SUFFIX)));
        let doc = format!("Schema path builders for [`{}`].", decl.name);
        out.extend(quote! {
            #[doc = #doc]
            #vis struct #paths;

            #[allow(non_snake_case)]
            impl #paths {
                #(#builders)*
            }
        });
    }

    out
}
