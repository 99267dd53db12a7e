//! Get command - prints the value at a path.

use crate::cli::{GetArgs, GlobalArgs};
use crate::commands::{load, parse_value};
use crate::output::print_value;

/// Run the get command
pub fn run(args: &GetArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load(&args.file, args.prepare, global)?;

    let value = match &args.default {
        Some(default) => config.get_default(&args.path, parse_value(default)),
        None => config.get(&args.path)?.into_owned(),
    };
    print_value(&value, global.output);

    Ok(())
}
