//! CLI argument definitions for the cfgtree binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Inspect and edit configuration files through dotted paths
#[derive(Parser, Debug)]
#[command(name = "cfgtree")]
#[command(about = "cfgtree: read and write configuration trees by path")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Input format (json, yaml, yml, xml); inferred from the file extension if omitted
    #[arg(short, long, global = true, env = "CFGTREE_FORMAT")]
    pub format: Option<String>,

    /// Left interpolation delimiter
    #[arg(long, global = true, default_value = "{{", env = "CFGTREE_LEFT_DELIM")]
    pub left: String,

    /// Right interpolation delimiter
    #[arg(long, global = true, default_value = "}}", env = "CFGTREE_RIGHT_DELIM")]
    pub right: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(GetArgs),
    /// Assign values in memory and print the resulting tree
    Set(SetArgs),
    /// Print the whole tree
    Show(ShowArgs),
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Configuration file to read
    pub file: PathBuf,

    /// Dotted path to resolve
    pub path: String,

    /// Value to print when nothing is found (parsed as JSON when valid)
    #[arg(short, long)]
    pub default: Option<String>,

    /// Substitute interpolation markers before reading
    #[arg(short, long)]
    pub prepare: bool,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Configuration file to read; it is never written back
    pub file: PathBuf,

    /// Dotted path to assign
    pub path: String,

    /// Values to assign in order (parsed as JSON when valid, otherwise strings)
    #[arg(required = true, num_args = 1..)]
    pub values: Vec<String>,

    /// Substitute interpolation markers after assigning
    #[arg(short, long)]
    pub prepare: bool,
}

/// Arguments for the show command
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Configuration file to read
    pub file: PathBuf,

    /// Substitute interpolation markers before printing
    #[arg(short, long)]
    pub prepare: bool,
}
