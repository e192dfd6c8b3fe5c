mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "areafilter", about = "Remove connected components from binary masks by area")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Keep components of at least a fixed pixel area
    Area(commands::filter::AreaArgs),
    /// Keep the largest components covering a share of the foreground
    Rel(commands::filter::RelArgs),
    /// Print component statistics without writing output
    Stats(commands::stats::StatsArgs),
    /// Run a filter described by a TOML file
    Run(commands::run::RunArgs),
    /// Print or save a default filter config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Area(args) => commands::filter::run_area(args),
        Commands::Rel(args) => commands::filter::run_rel(args),
        Commands::Stats(args) => commands::stats::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
