//! CLI entry point for the `gwalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graphwalk::cli::commands;
use graphwalk::types::GraphError;

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "graphwalk CLI — graph traversal algorithms over edge-list files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency-list representation of a graph
    Print {
        /// Path to the edge-list file
        file: PathBuf,
        /// Treat edges as directed
        #[arg(long)]
        directed: bool,
    },
    /// Breadth-first traversal from a start vertex
    Bfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Starting vertex
        start: usize,
        /// Treat edges as directed
        #[arg(long)]
        directed: bool,
    },
    /// Depth-first traversal from a start vertex
    Dfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Starting vertex
        start: usize,
        /// Treat edges as directed
        #[arg(long)]
        directed: bool,
    },
    /// Fewest-edges path between two vertices
    Path {
        /// Path to the edge-list file
        file: PathBuf,
        /// Starting vertex
        start: usize,
        /// Destination vertex
        end: usize,
        /// Treat edges as directed
        #[arg(long)]
        directed: bool,
    },
    /// Label connected components
    Components {
        /// Path to the edge-list file
        file: PathBuf,
        /// Treat edges as directed
        #[arg(long)]
        directed: bool,
    },
    /// Find a cycle reachable from a start vertex
    Cycles {
        /// Path to the edge-list file
        file: PathBuf,
        /// Starting vertex
        start: usize,
        /// Treat edges as directed
        #[arg(long)]
        directed: bool,
    },
    /// Find articulation vertices reachable from a start vertex
    Articulation {
        /// Path to the edge-list file
        file: PathBuf,
        /// Starting vertex
        start: usize,
        /// Treat edges as directed
        #[arg(long)]
        directed: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Print { file, directed } => commands::cmd_print(&file, directed, json),
        Commands::Bfs {
            file,
            start,
            directed,
        } => commands::cmd_bfs(&file, start, directed, json),
        Commands::Dfs {
            file,
            start,
            directed,
        } => commands::cmd_dfs(&file, start, directed, json),
        Commands::Path {
            file,
            start,
            end,
            directed,
        } => commands::cmd_path(&file, start, end, directed, json),
        Commands::Components { file, directed } => commands::cmd_components(&file, directed, json),
        Commands::Cycles {
            file,
            start,
            directed,
        } => commands::cmd_cycles(&file, start, directed, json),
        Commands::Articulation {
            file,
            start,
            directed,
        } => commands::cmd_articulation(&file, start, directed, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::MalformedEdgeList { .. } => 2,
            GraphError::VertexNotFound(_)
            | GraphError::PathNotFound { .. }
            | GraphError::CycleNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
