use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use schemapath_compiler::emit::json::{self, JsonEmitConfig};
use schemapath_compiler::emit::rust::{self, RustEmitConfig};

use super::{SchemaInput, compile_or_exit, exit_on_unmatched, fail, report_diagnostics};
use crate::cli::OutputFormat;

pub struct GenArgs {
    pub input: SchemaInput,
    pub format: OutputFormat,
    pub paths_suffix: String,
    pub header: bool,
    pub pretty: bool,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: GenArgs) {
    let compiled = compile_or_exit(&args.input);
    exit_on_unmatched(&compiled);

    // Warnings are shown, errors stop generation.
    report_diagnostics(&compiled, args.color);
    if !compiled.is_valid() {
        std::process::exit(1);
    }

    let emitted = match args.format {
        OutputFormat::Rust => {
            let config = RustEmitConfig {
                paths_suffix: args.paths_suffix,
                header: args.header,
                ..RustEmitConfig::default()
            };
            rust::emit(&compiled, &config)
        }
        OutputFormat::Json => json::emit(&compiled, &JsonEmitConfig { pretty: args.pretty }),
    };
    let mut output = emitted.unwrap_or_else(|e| fail(e));
    output.push('\n');

    match &args.output {
        Some(path) => {
            fs::write(path, &output)
                .unwrap_or_else(|e| fail(format!("failed to write '{}': {}", path.display(), e)));
            tracing::info!(path = %path.display(), "wrote generated schema");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .unwrap_or_else(|e| fail(format!("failed to write output: {}", e)));
        }
    }
}
