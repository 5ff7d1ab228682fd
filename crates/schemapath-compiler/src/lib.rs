//! Schema file compiler for schemapath.
//!
//! Parses `*.schema` sources, selects declarations, runs the core synthesis
//! pass and emits the result as Rust source or JSON.
//!
//! # Example
//!
//! ```
//! use schemapath_compiler::{SchemaCompiler, SourceMap, emit::rust::RustEmitConfig};
//!
//! let source = r#"
//!     @Schema
//!     class Order { customer: User; total: BigDecimal }
//! "#;
//!
//! let compiled = SchemaCompiler::new(SourceMap::inline(source)).compile();
//! let code = schemapath_compiler::emit::rust::emit(&compiled, &RustEmitConfig::default())
//!     .expect("valid schema");
//! assert!(code.contains("pub struct OrderPaths;"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod dump;
pub mod emit;
pub mod parser;
pub mod schema;
pub mod select;
pub mod source_map;

#[cfg(test)]
mod dump_tests;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use schema::{Compiled, SchemaCompiler, TypeSchema};
pub use select::Selection;
pub use source_map::{Source, SourceId, SourceKind, SourceMap, Span};

/// Errors that stop output from being produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("schema compilation failed with {} errors", .0.error_count())]
    InvalidSchema(Diagnostics),

    #[error("no declaration matches `{0}`")]
    UnmatchedSelection(String),

    #[error("`{name}` in `{type_name}` is not a valid Rust identifier")]
    InvalidRustName { type_name: String, name: String },

    #[error("failed to serialize schema: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
