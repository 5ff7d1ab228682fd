use super::{SchemaInput, compile_or_exit, exit_on_unmatched, report_diagnostics};

pub struct CheckArgs {
    pub input: SchemaInput,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let compiled = compile_or_exit(&args.input);
    exit_on_unmatched(&compiled);

    let diagnostics = compiled.diagnostics();
    let is_valid = if args.strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        compiled.is_valid()
    };

    if !is_valid {
        report_diagnostics(&compiled, args.color);
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
