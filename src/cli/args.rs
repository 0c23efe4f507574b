use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "campusroute",
    version,
    about = "Shortest walking routes between campus buildings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (default: ./campusroute.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Graph file, overriding the config
    #[arg(long, global = true, value_name = "FILE")]
    pub graph: Option<PathBuf>,
    /// Building mapping file, overriding the config
    #[arg(long, global = true, value_name = "FILE")]
    pub mappings: Option<PathBuf>,
    /// Print diagnostic logging to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest path between two buildings
    Route {
        /// Start building code
        start: String,
        /// Destination building code
        end: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known building codes
    Buildings {
        #[arg(long)]
        json: bool,
    },
    /// Write the campus as Graphviz DOT with the route highlighted
    Render {
        start: String,
        end: String,
        /// Output file (default: stdout)
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Pick start and end buildings interactively
    #[cfg(feature = "tui")]
    Pick,
    /// Write a default campusroute.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}
