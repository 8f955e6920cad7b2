//! The `array` and `list` commands - run an operation script.

use kata::{ScriptKind, run_script};

use crate::cli::ScriptArgs;
use crate::common::CliResult;
use crate::common::input::read_input;

/// Run a script of the given kind and print its outputs as JSON.
pub fn run(args: ScriptArgs, kind: ScriptKind) -> CliResult<()> {
    let (source, filename) = if args.file {
        let (content, display_name) = read_input(&args.script).map_err(kata::Error::Input)?;
        (content, Some(display_name))
    } else {
        (args.script, None)
    };

    tracing::debug!(?kind, bytes = source.len(), "running script");
    let trace = run_script(kind, &source).map_err(|e| e.with_filename_opt(filename.as_deref()))?;
    println!("{}", trace.to_json(args.pretty)?);
    Ok(())
}
