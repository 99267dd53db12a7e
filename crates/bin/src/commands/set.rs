//! Set command - assigns values in memory and prints the result.
//!
//! The input file is never modified.

use tracing::info;

use crate::cli::{GlobalArgs, SetArgs};
use crate::commands::{delimiters, load, parse_value};
use crate::output::print_config;

/// Run the set command
pub fn run(args: &SetArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load(&args.file, false, global)?;

    for raw in &args.values {
        config.try_set(&args.path, parse_value(raw))?;
    }
    info!(path = %args.path, count = args.values.len(), "Applied assignments");

    if args.prepare {
        config.prepare(&delimiters(global))?;
    }
    print_config(&config, global.output);

    Ok(())
}
