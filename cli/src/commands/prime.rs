//! The `prime` command - trial-division primality check.

use kata::Primality;

use crate::cli::PrimeArgs;
use crate::common::CliResult;

/// Run the prime command.
pub fn run(args: PrimeArgs) -> CliResult<()> {
    println!("{}", Primality::of(args.number));
    Ok(())
}
