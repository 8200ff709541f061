//! Workbench CLI - design-system documentation front-end.
//!
//! Provides commands for:
//! - `serve`: Start the documentation server
//! - `build`: Export a static copy of the site
//! - `list`: Print the documentation hierarchy
//! - `todos`: Print the backlog of items needing human input

mod commands;
mod error;
mod export;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, ListArgs, ServeArgs, TodosArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Workbench - design-system documentation front-end.
#[derive(Parser)]
#[command(name = "wb", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the documentation server.
    Serve(ServeArgs),
    /// Export the site as static HTML.
    Build(BuildArgs),
    /// Print the documentation hierarchy in sidebar order.
    List(ListArgs),
    /// Print documentation items that need human input.
    Todos(TodosArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Serve(args) => args.verbose,
            Self::Build(args) => args.verbose,
            Self::List(_) | Self::Todos(_) => false,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(args.execute(VERSION)),
            Err(e) => Err(e.into()),
        },
        Commands::Build(args) => args.execute(),
        Commands::List(args) => args.execute(),
        Commands::Todos(args) => {
            args.execute();
            Ok(())
        }
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}
