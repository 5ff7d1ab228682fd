#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core descriptor synthesis for schemapath.
//!
//! Given a type declaration, decides which member fields get schema
//! descriptors and builds them:
//! - `leaf` - the fixed table of terminal value types
//! - `eligibility` - which fields qualify
//! - `synth` - descriptor constants and path builders
//! - `conflict` - collisions with pre-existing static members
//! - `pass` - the per-declaration driver tying the above together
//!
//! The model is generic over the source location `L` so the same pass serves
//! the schema-file compiler (byte ranges) and the proc macro (token spans).

pub mod conflict;
pub mod eligibility;
pub mod error;
pub mod leaf;
pub mod model;
pub mod pass;
pub mod synth;
pub mod utils;

#[cfg(test)]
mod conflict_tests;
#[cfg(test)]
mod leaf_tests;
#[cfg(test)]
mod utils_tests;

pub use conflict::check_collision;
pub use eligibility::{Exclusion, exclusion, is_eligible};
pub use error::{Located, SchemaError};
pub use leaf::{LeafTable, LeafType};
pub use model::{DeclKind, MemberField, MemberKind, MethodDecl, Modifiers, StaticMember, TypeDecl, TypeRef};
pub use pass::{Synthesis, synthesize_schema};
pub use synth::{Descriptor, DescriptorConstant, PathBuilder, synthesize};

/// Prefix prepended to a field name to form its descriptor name.
pub const DESCRIPTOR_PREFIX: &str = "_";

/// Separator between a field name and the caller-supplied subpath.
pub const PATH_SEPARATOR: &str = ".";

/// Name of the single parameter of every path builder.
pub const SUBPATH_PARAM: &str = "subpath";

/// Name of the type-level marker that opts a declaration into synthesis.
pub const SCHEMA_MARKER: &str = "Schema";
