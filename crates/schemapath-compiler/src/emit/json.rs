//! JSON emitter: the augmented schema as data.

use serde::Serialize;

use schemapath_core::DescriptorConstant;

use crate::Result;
use crate::schema::{Compiled, TypeSchema};

/// Configuration for JSON emission.
#[derive(Debug, Clone)]
pub struct JsonEmitConfig {
    pub pretty: bool,
}

impl Default for JsonEmitConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Serialize)]
struct SchemaDocument<'a> {
    types: Vec<TypeDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct TypeDocument<'a> {
    name: &'a str,
    constants: Vec<&'a DescriptorConstant>,
    functions: Vec<FunctionDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct FunctionDocument<'a> {
    name: &'a str,
    param: &'a str,
    prefix: &'a str,
}

impl<'a> From<&'a TypeSchema> for TypeDocument<'a> {
    fn from(ty: &'a TypeSchema) -> Self {
        Self {
            name: &ty.name,
            constants: ty.constants().collect(),
            functions: ty
                .builders()
                .map(|b| FunctionDocument {
                    name: &b.name,
                    param: b.param,
                    prefix: &b.prefix,
                })
                .collect(),
        }
    }
}

pub fn emit(compiled: &Compiled, config: &JsonEmitConfig) -> Result<String> {
    emit_types(compiled.valid_types()?, config)
}

pub fn emit_types(types: &[TypeSchema], config: &JsonEmitConfig) -> Result<String> {
    let document = SchemaDocument {
        types: types.iter().map(TypeDocument::from).collect(),
    };
    let json = if config.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}
