#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! `#[schema]`: schema path descriptors for structs.
//!
//! ```
//! use schemapath_macros::schema;
//!
//! #[schema]
//! pub struct Order {
//!     pub id: u64,
//!     pub customer: Customer,
//! }
//!
//! #[schema]
//! pub struct Customer {
//!     pub city: String,
//! }
//!
//! assert_eq!(Order::_id, "id");
//! assert_eq!(OrderPaths::_customer(Customer::_city), "customer.city");
//! ```

mod expand;
mod lower;


use proc_macro::TokenStream;

/// Generate a descriptor constant for every eligible field and a path
/// builder for every eligible field of a non-leaf type.
///
/// Constants are associated consts of the struct (`Order::_customer`).
/// Path builders live on a companion unit struct (`OrderPaths::_customer`).
///
/// A field is skipped when it carries any attribute other than a doc
/// comment. `#[transient]` exists to skip a field and is removed from the
/// output.
///
/// Options:
/// - `paths = Name`: name of the companion struct (default `<Type>Paths`)
/// - `leaf = Name`: treat another type as terminal; may be repeated
#[proc_macro_attribute]
pub fn schema(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand::expand(attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
