//! Compilation facade: sources in, synthesized schemas plus diagnostics out.

use indexmap::IndexMap;
use serde::Serialize;

use schemapath_core::{
    DeclKind, Descriptor, LeafTable, Located, SchemaError, TypeDecl, synthesize_schema,
};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::{Declaration, parse};
use crate::select::Selection;
use crate::source_map::{SourceMap, Span};
use crate::{Error, Result};

/// Builder for compiling a set of schema sources.
///
/// ```
/// use schemapath_compiler::{SchemaCompiler, SourceMap};
///
/// let compiled = SchemaCompiler::new(SourceMap::inline("@Schema class A { b: B }")).compile();
/// assert!(compiled.is_valid());
/// assert_eq!(compiled.types()[0].builders().count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SchemaCompiler {
    source_map: SourceMap,
    leaves: LeafTable,
    selection: Selection,
}

impl SchemaCompiler {
    pub fn new(source_map: SourceMap) -> Self {
        Self {
            source_map,
            leaves: LeafTable::standard(),
            selection: Selection::default(),
        }
    }

    pub fn leaf_table(mut self, leaves: LeafTable) -> Self {
        self.leaves = leaves;
        self
    }

    pub fn selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn compile(self) -> Compiled {
        let mut diagnostics = Diagnostics::new();
        let declarations = self.parse_all(&mut diagnostics);

        let types = declarations
            .iter()
            .filter(|decl| self.selection.selects(decl))
            .map(|decl| self.synthesize(decl, &mut diagnostics))
            .collect();

        let unmatched = self
            .selection
            .unmatched(&declarations)
            .into_iter()
            .map(str::to_string)
            .collect();

        Compiled {
            source_map: self.source_map,
            leaves: self.leaves,
            declarations,
            types,
            unmatched,
            diagnostics,
        }
    }

    /// Parse every source, dropping declarations whose name is already taken.
    fn parse_all(&self, diagnostics: &mut Diagnostics) -> Vec<Declaration> {
        let mut seen: IndexMap<String, Declaration> = IndexMap::new();

        for source in self.source_map.iter() {
            let result = parse(source);
            diagnostics.extend(result.diagnostics);

            for decl in result.declarations {
                if let Some(first) = seen.get(&decl.name) {
                    diagnostics
                        .report(DiagnosticKind::DuplicateDeclaration, decl.location)
                        .message(&decl.name)
                        .related_to("first declared here", first.location)
                        .hint("type names must be unique across all schema sources")
                        .emit();
                    continue;
                }
                seen.insert(decl.name.clone(), decl);
            }
        }

        seen.into_values().collect()
    }

    fn synthesize(&self, decl: &Declaration, diagnostics: &mut Diagnostics) -> TypeSchema {
        let synthesis = synthesize_schema(decl, &self.leaves);

        for located in &synthesis.errors {
            report_schema_error(located, diagnostics);
        }

        if synthesis.is_valid() && decl.kind == DeclKind::Class && synthesis.descriptors.is_empty()
        {
            diagnostics
                .report(DiagnosticKind::EmptySchema, decl.location)
                .message(&decl.name)
                .emit();
        }

        tracing::debug!(
            decl = %decl.name,
            descriptors = synthesis.descriptors.len(),
            valid = synthesis.is_valid(),
            "schema synthesized"
        );

        TypeSchema {
            name: synthesis.type_name.clone(),
            kind: decl.kind,
            location: decl.location,
            is_valid: synthesis.is_valid(),
            descriptors: synthesis.descriptors,
        }
    }
}

fn report_schema_error(located: &Located<Span>, diagnostics: &mut Diagnostics) {
    match &located.error {
        SchemaError::InvalidTarget { type_name } => diagnostics
            .report(DiagnosticKind::InvalidTarget, located.location)
            .message(type_name)
            .emit(),
        error @ SchemaError::DuplicateDescriptor { .. } => diagnostics
            .report(DiagnosticKind::DuplicateDescriptor, located.location)
            .message(error.to_string())
            .emit(),
    }
}

/// Synthesized members of one selected declaration.
#[derive(Debug, Clone, Serialize)]
pub struct TypeSchema {
    pub name: String,
    pub kind: DeclKind,
    #[serde(skip)]
    pub location: Span,
    /// False when synthesis reported an error for this declaration.
    pub is_valid: bool,
    /// In field declaration order.
    pub descriptors: Vec<Descriptor>,
}

impl TypeSchema {
    pub fn constants(&self) -> impl Iterator<Item = &schemapath_core::DescriptorConstant> {
        self.descriptors.iter().map(|d| &d.constant)
    }

    pub fn builders(&self) -> impl Iterator<Item = &schemapath_core::PathBuilder> {
        self.descriptors.iter().filter_map(|d| d.builder.as_ref())
    }
}

/// Result of [`SchemaCompiler::compile`].
#[derive(Debug, Clone)]
pub struct Compiled {
    source_map: SourceMap,
    leaves: LeafTable,
    declarations: Vec<Declaration>,
    types: Vec<TypeSchema>,
    unmatched: Vec<String>,
    diagnostics: Diagnostics,
}

impl Compiled {
    /// One entry per selected declaration, in source order.
    pub fn types(&self) -> &[TypeSchema] {
        &self.types
    }

    /// Every parsed declaration, selected or not.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn declaration(&self, name: &str) -> Option<&TypeDecl<Span>> {
        self.declarations.iter().find(|d| d.name == name)
    }

    pub fn leaf_table(&self) -> &LeafTable {
        &self.leaves
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Selection patterns that matched no declaration.
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// The synthesized types, or the diagnostics when anything failed.
    ///
    /// Emitters go through this so that an invalid schema is never written.
    pub fn valid_types(&self) -> Result<&[TypeSchema]> {
        if let Some(pattern) = self.unmatched.first() {
            return Err(Error::UnmatchedSelection(pattern.clone()));
        }
        if !self.is_valid() {
            return Err(Error::InvalidSchema(self.diagnostics.clone()));
        }
        Ok(&self.types)
    }
}
