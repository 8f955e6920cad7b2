//! The `demo` command - replay the demonstration scripts step by step.

use kata::{ScriptKind, Trace, demos, run_script};

use crate::cli::{DemoArgs, DemoTarget};
use crate::common::CliResult;

/// Run the demo command.
pub fn run(args: DemoArgs) -> CliResult<()> {
    for (title, kind, source) in selected(args.target) {
        let trace = run_script(kind, source)?;
        print!("{}", format_trace(title, &trace));
    }
    Ok(())
}

fn selected(target: DemoTarget) -> Vec<(&'static str, ScriptKind, &'static str)> {
    let array = ("dynamic array", ScriptKind::Array, demos::ARRAY);
    let list = ("linked list", ScriptKind::List, demos::LIST);
    match target {
        DemoTarget::Array => vec![array],
        DemoTarget::List => vec![list],
        DemoTarget::All => vec![array, list],
    }
}

/// Format a titled `op -> output` listing.
pub fn format_trace(title: &str, trace: &Trace) -> String {
    let mut out = format!("# {title}\n");
    for step in &trace.steps {
        out.push_str(&format!("{} -> {}\n", step.op, step.output));
    }
    out
}
