//! Tilegrid CLI - Command-line interface
//!
//! This binary provides a command-line interface to the tilegrid library.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};
use commands::config::ConfigCommands;
use commands::grid::GridArgs;
use commands::tile::{BoundsArgs, TileArgs};
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "tilegrid")]
#[command(version, about = "Web Mercator tile grids for geographic bounding boxes", long_about = None)]
struct Cli {
    /// Enable debug logging regardless of RUST_LOG
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the tile grid covering a bounding box as a GeoJSON layer
    Grid(GridArgs),

    /// Print the tile containing a latitude/longitude
    Tile(TileArgs),

    /// Print the geographic bounds of a tile
    Bounds(BoundsArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Grid(args) => {
            let runner = CliRunner::new(cli.debug)?;
            commands::grid::run(args, &runner)
        }
        Commands::Tile(args) => {
            let runner = CliRunner::new(cli.debug)?;
            runner.log_startup("tile");
            commands::tile::run_tile(args)
        }
        Commands::Bounds(args) => {
            let runner = CliRunner::new(cli.debug)?;
            runner.log_startup("bounds");
            commands::tile::run_bounds(args)
        }
        Commands::Config { command } => commands::config::run(command),
    }
}
