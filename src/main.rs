use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod build;
mod commands;
mod config;
mod sidenav;
mod tags;
mod util;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Log build progress (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// The command to execute
    #[command(subcommand)]
    command: SpyglassCommand,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the project in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,
}

#[derive(Parser)]
struct BuildArgs {
    /// The path to the configuration file
    #[arg(short, long, default_value = "spyglass.yaml")]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct CleanArgs {
    /// The path to the configuration file
    #[arg(short, long, default_value = "spyglass.yaml")]
    config_file: Option<PathBuf>,

    /// Print what would be deleted without deleting it
    #[arg(long)]
    dry_run: bool,
}

#[derive(Subcommand)]
enum SpyglassCommand {
    /// Initialize a new Spyglass project
    Init(InitArgs),

    /// Build the site
    Build(BuildArgs),

    /// Remove the generated site
    Clean(CleanArgs),
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        SpyglassCommand::Init(args) => {
            commands::init::run(&args).await?;
        }
        SpyglassCommand::Build(args) => {
            commands::build::run(&args).await?;
        }
        SpyglassCommand::Clean(args) => {
            commands::clean::run(&args).await?;
        }
    }

    Ok(())
}
