// RUST LEARNING: `use` statements bring items into scope from crates and modules
// - `tagsplice` refers to our own crate (defined in lib.rs)
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::env;
use tagsplice::{
    CompletionsCommand, Config, ResolveCommand, TargetKind, UpdateFileCommand, VERSION,
};

// RUST LEARNING: `#[derive(Parser)]` generates the argument parser from the struct
// - `#[command(...)]` attributes configure the top-level command
#[derive(Parser)]
#[command(name = "tagsplice")]
#[command(
    about = "Resolve the latest release tag of an upstream project and splice it into CI config files"
)]
#[command(version = VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short = 'd', long, global = true)]
    debug: bool,
}

// RUST LEARNING: Each enum variant is one subcommand holding its own `Args` struct
#[derive(Subcommand)]
enum Commands {
    /// Print the latest tag for --repo/--version as JSON and append it to $GITHUB_ENV
    Resolve(ResolveCommand),

    /// Write $FRAPPE_VERSION into example.env
    #[command(name = "update-env-file")]
    UpdateEnvFile(UpdateFileCommand),

    /// Write $FRAPPE_VERSION into the pwd.yml image tags
    #[command(name = "update-manifest")]
    UpdateManifest(UpdateFileCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

// RUST LEARNING: `anyhow::Result` erases the concrete error type at the binary boundary
// - Returning `Err` from main prints the error and exits with status 1
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "tagsplice=debug");
    }
    env_logger::init();

    let config = Config::new().context("Failed to locate configuration files")?;

    match cli.command {
        Commands::Resolve(cmd) => cmd.execute(&config)?,
        Commands::UpdateEnvFile(cmd) => cmd.execute(&config, TargetKind::EnvFile)?,
        Commands::UpdateManifest(cmd) => cmd.execute(&config, TargetKind::Manifest)?,
        Commands::Completions(cmd) => cmd.generate_completions::<Cli>(),
    }

    Ok(())
}
