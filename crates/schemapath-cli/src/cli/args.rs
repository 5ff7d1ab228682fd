//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ValueEnum, value_parser};

/// What `gen` writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rust source to `include!` next to the types.
    #[default]
    Rust,
    /// The synthesized members as JSON.
    Json,
}

/// Schema files or directories (positional, repeatable).
pub fn schema_paths_arg() -> Arg {
    Arg::new("schema_paths")
        .value_name("SCHEMA")
        .num_args(0..)
        .value_parser(value_parser!(PathBuf))
        .help("Schema files or directories of *.schema files (`-` for stdin)")
}

/// Inline schema text (-t/--text).
pub fn schema_text_arg() -> Arg {
    Arg::new("schema_text")
        .short('t')
        .long("text")
        .value_name("TEXT")
        .help("Inline schema text")
}

/// Explicit type selection (--type).
pub fn type_arg() -> Arg {
    Arg::new("types")
        .long("type")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Process this type instead of @Schema-marked ones (`*` wildcards allowed)")
}

/// Extra leaf type names (--leaf).
pub fn leaf_arg() -> Arg {
    Arg::new("leaves")
        .long("leaf")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Treat this type name as a leaf (no path builder)")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("rust")
        .value_parser(value_parser!(OutputFormat))
        .help("Output format")
}

/// Companion struct suffix (--paths-suffix).
pub fn paths_suffix_arg() -> Arg {
    Arg::new("paths_suffix")
        .long("paths-suffix")
        .value_name("SUFFIX")
        .default_value("Paths")
        .help("Suffix of the generated path-builder struct")
}

/// Omit the generated-file header (--no-header).
pub fn no_header_arg() -> Arg {
    Arg::new("no_header")
        .long("no-header")
        .action(ArgAction::SetTrue)
        .help("Don't emit the generated-file header")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Log verbosity (-v, repeatable). Global.
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides")
}
