//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Schema input and selection args shared by every command.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(schema_paths_arg())
        .arg(schema_text_arg())
        .arg(type_arg())
        .arg(leaf_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("schemapath")
        .about("Schema path descriptors for typed field references")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(gen_command())
        .subcommand(check_command())
        .subcommand(dump_command())
}

/// Generate descriptor code.
pub fn gen_command() -> Command {
    let cmd = Command::new("gen")
        .about("Generate schema descriptors")
        .override_usage(
            "\
  schemapath gen <SCHEMA>... [-o <FILE>]
  schemapath gen -t <TEXT> [--format json]",
        )
        .after_help(
            r#"EXAMPLES:
  schemapath gen order.schema                 # Rust to stdout
  schemapath gen schemas/ -o src/paths.rs     # every *.schema in a directory
  schemapath gen order.schema --format json   # augmented schema as JSON
  schemapath gen -t '@Schema class A { b: B }'
  schemapath gen model.schema --type 'Order*' # select by name"#,
        );

    with_input_args(cmd)
        .arg(format_arg())
        .arg(paths_suffix_arg())
        .arg(no_header_arg())
        .arg(compact_arg())
        .arg(output_file_arg())
        .arg(color_arg())
}

/// Validate schemas without generating anything.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate schemas")
        .override_usage(
            "\
  schemapath check <SCHEMA>...
  schemapath check -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  schemapath check order.schema               # silent on success
  schemapath check schemas/ --strict          # warnings fail too"#,
        );

    with_input_args(cmd).arg(strict_arg()).arg(color_arg())
}

/// Show the per-field decisions.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show which fields get descriptors and why")
        .override_usage(
            "\
  schemapath dump <SCHEMA>...
  schemapath dump -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  schemapath dump order.schema
  schemapath dump -t '@Schema class A { final b: B; c: int }'"#,
        );

    with_input_args(cmd).arg(color_arg())
}
