use schemapath_compiler::dump::dump;

use super::{SchemaInput, compile_or_exit, report_diagnostics};

pub struct DumpArgs {
    pub input: SchemaInput,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let compiled = compile_or_exit(&args.input);

    for pattern in compiled.unmatched() {
        eprintln!("warning: no declaration matches `{}`", pattern);
    }
    report_diagnostics(&compiled, args.color);

    let table = dump(&compiled);
    if !table.is_empty() {
        println!("{}", table);
    }

    if !compiled.is_valid() {
        std::process::exit(1);
    }
}
