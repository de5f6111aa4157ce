//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mixtable")]
#[command(
    author,
    version,
    about = "Build and inspect containers of values and named fields",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log filter directive, e.g. "mixtable=trace"
    #[arg(long, global = true, env = "MIXTABLE_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Build a container from item literals and print it
    Build {
        /// Items: values (1, "text", :sym, [1, 2]) or fields (k=4, {a=>1, b=>2})
        #[arg(allow_negative_numbers = true)]
        items: Vec<String>,

        /// Print a single position or field instead of the whole container
        #[arg(long, value_name = "LOOKUP", allow_negative_numbers = true)]
        get: Option<String>,
    },

    /// Load a container from a JSON file written with --json
    Load {
        /// Path to the JSON file
        file: PathBuf,

        /// Print a single position or field instead of the whole container
        #[arg(long, value_name = "LOOKUP", allow_negative_numbers = true)]
        get: Option<String>,
    },

    /// Print the sequence values of a container in natural order
    Sort {
        /// Items, as for `build`
        #[arg(allow_negative_numbers = true)]
        items: Vec<String>,
    },
}
