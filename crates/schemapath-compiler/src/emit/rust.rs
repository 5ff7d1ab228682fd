//! Rust code emitter for synthesized schemas.
//!
//! Per type, constants go into an inherent `impl` block on the type itself and
//! path builders into a companion unit struct (`OrderPaths`), since an
//! associated const and an associated fn cannot share a name. The output is
//! meant to be `include!`d next to the type definitions.

use schemapath_core::PATH_SEPARATOR;
use schemapath_core::utils::{is_rust_identifier, paths_type_name, rust_ident};

use crate::{Error, Result};
use crate::schema::{Compiled, TypeSchema};

/// Configuration for Rust emission.
#[derive(Debug, Clone)]
pub struct RustEmitConfig {
    /// Appended to the type name to form the companion struct name.
    pub paths_suffix: String,
    /// Whether to start the output with a "generated" comment.
    pub header: bool,
    /// Whether to silence naming lints on the generated items.
    pub allow_lints: bool,
}

impl Default for RustEmitConfig {
    fn default() -> Self {
        Self {
            paths_suffix: "Paths".to_string(),
            header: true,
            allow_lints: true,
        }
    }
}

const HEADER: &str = "// @generated by schemapath. Do not edit.";

/// Emit Rust code for every selected type of a valid compilation.
pub fn emit(compiled: &Compiled, config: &RustEmitConfig) -> Result<String> {
    emit_types(compiled.valid_types()?, config)
}

/// Emit Rust code for the given types. Types without descriptors are skipped.
///
/// Fails if a type, field or companion name cannot be written in Rust.
pub fn emit_types(types: &[TypeSchema], config: &RustEmitConfig) -> Result<String> {
    let mut blocks = Vec::new();
    if config.header {
        blocks.push(HEADER.to_string());
    }

    for ty in types.iter().filter(|t| !t.descriptors.is_empty()) {
        check_names(ty, config)?;
        blocks.push(emit_constants(ty, config));
        if ty.builders().next().is_some() {
            blocks.push(emit_paths(ty, config));
        }
    }

    Ok(blocks.join("\n\n"))
}

fn check_names(ty: &TypeSchema, config: &RustEmitConfig) -> Result<()> {
    let paths = ty
        .builders()
        .next()
        .map(|_| paths_type_name(&ty.name, &config.paths_suffix));
    let names = std::iter::once(ty.name.as_str())
        .chain(ty.descriptors.iter().map(|d| d.field.as_str()))
        .chain(paths.as_deref());

    for name in names {
        if !is_rust_identifier(name) {
            return Err(Error::InvalidRustName {
                type_name: ty.name.clone(),
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn emit_constants(ty: &TypeSchema, config: &RustEmitConfig) -> String {
    let mut out = String::new();
    if config.allow_lints {
        out.push_str("#[allow(non_upper_case_globals)]\n");
    }
    out.push_str(&format!("impl {} {{\n", rust_ident(&ty.name)));
    for constant in ty.constants() {
        tracing::trace!(decl = %ty.name, name = %constant.name, "emit constant");
        out.push_str(&format!(
            "    pub const {}: &'static str = {:?};\n",
            constant.name, constant.value
        ));
    }
    out.push('}');
    out
}

fn emit_paths(ty: &TypeSchema, config: &RustEmitConfig) -> String {
    let owner = rust_ident(&ty.name);
    let paths = paths_type_name(&ty.name, &config.paths_suffix);

    let mut out = format!("pub struct {};\n\n", paths);
    if config.allow_lints {
        out.push_str("#[allow(non_snake_case)]\n");
    }
    out.push_str(&format!("impl {} {{\n", paths));
    for (i, builder) in ty.builders().enumerate() {
        tracing::trace!(decl = %ty.name, name = %builder.name, "emit path builder");
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "    pub fn {name}({param}: &str) -> String {{\n        [{owner}::{name}, {sep:?}, {param}].concat()\n    }}\n",
            name = builder.name,
            param = builder.param,
            sep = PATH_SEPARATOR,
        ));
    }
    out.push('}');
    out
}
