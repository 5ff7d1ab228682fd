pub mod check;
pub mod dump;
pub mod generate;
pub mod schema_loader;

#[cfg(test)]
mod schema_loader_tests;

use std::path::PathBuf;

use schemapath_compiler::{Compiled, DiagnosticsPrinter, SchemaCompiler, Selection};
use schemapath_core::LeafTable;

use schema_loader::{LoadError, load_schema_sources};

/// Where schemas come from and which declarations to process.
#[derive(Debug, Clone, Default)]
pub struct SchemaInput {
    pub paths: Vec<PathBuf>,
    pub text: Option<String>,
    pub types: Vec<String>,
    pub leaves: Vec<String>,
}

impl SchemaInput {
    pub fn compile(&self) -> Result<Compiled, LoadError> {
        let source_map = load_schema_sources(&self.paths, self.text.as_deref())?;
        if source_map.is_blank() {
            return Err(LoadError::Empty);
        }

        let compiled = SchemaCompiler::new(source_map)
            .leaf_table(LeafTable::with_extra(self.leaves.iter().cloned()))
            .selection(Selection::from_patterns(self.types.clone()))
            .compile();
        tracing::info!(
            types = compiled.types().len(),
            errors = compiled.diagnostics().error_count(),
            warnings = compiled.diagnostics().warning_count(),
            "compiled schemas"
        );
        Ok(compiled)
    }
}

/// Compile or exit with `error: ...`.
pub fn compile_or_exit(input: &SchemaInput) -> Compiled {
    input.compile().unwrap_or_else(|e| fail(e))
}

/// Print diagnostics to stderr when there are any.
pub fn report_diagnostics(compiled: &Compiled, color: bool) {
    if compiled.diagnostics().is_empty() {
        return;
    }
    let rendered = DiagnosticsPrinter::new(compiled.diagnostics())
        .sources(compiled.source_map())
        .colored(color)
        .render();
    eprintln!("{}", rendered);
}

/// Report unmatched `--type` patterns and exit if there are any.
pub fn exit_on_unmatched(compiled: &Compiled) {
    if compiled.unmatched().is_empty() {
        return;
    }
    for pattern in compiled.unmatched() {
        eprintln!("error: no declaration matches `{}`", pattern);
    }
    std::process::exit(1);
}

pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    std::process::exit(1);
}
