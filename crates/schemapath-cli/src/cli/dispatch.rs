//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the fields each command uses
//! - `Into<*Args>` impls bridge dispatch and command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use super::args::OutputFormat;
use crate::commands::SchemaInput;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::generate::GenArgs;

pub struct GenParams {
    pub input: SchemaInput,
    pub format: OutputFormat,
    pub paths_suffix: String,
    pub no_header: bool,
    pub compact: bool,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl GenParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            format: m.get_one::<OutputFormat>("format").copied().unwrap_or_default(),
            paths_suffix: m
                .get_one::<String>("paths_suffix")
                .cloned()
                .unwrap_or_else(|| "Paths".to_string()),
            no_header: m.get_flag("no_header"),
            compact: m.get_flag("compact"),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<GenParams> for GenArgs {
    fn from(p: GenParams) -> Self {
        Self {
            input: p.input,
            format: p.format,
            paths_suffix: p.paths_suffix,
            header: !p.no_header,
            pretty: !p.compact,
            output: p.output,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input: SchemaInput,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub input: SchemaInput,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: p.input,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_input(m: &ArgMatches) -> SchemaInput {
    SchemaInput {
        paths: m
            .get_many::<PathBuf>("schema_paths")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        text: m.get_one::<String>("schema_text").cloned(),
        types: strings(m, "types"),
        leaves: strings(m, "leaves"),
    }
}

fn strings(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
