//! Show command - prints the whole tree.

use crate::cli::{GlobalArgs, ShowArgs};
use crate::commands::load;
use crate::output::print_config;

/// Run the show command
pub fn run(args: &ShowArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load(&args.file, args.prepare, global)?;
    print_config(&config, global.output);
    Ok(())
}
