mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gmx", version, about = "Deterministic guide-section variants for tool pages")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Rewrite every tool page of the active profile
    Apply(ApplyArgs),

    /// Show the headings and section spans found in one page
    Inspect(InspectArgs),

    /// Print one page rewritten into a variant (never writes)
    Render(RenderArgs),
}

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Report what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Page to inspect
    pub file: PathBuf,

    /// Heading vocabulary to look for (ko, en)
    #[arg(long)]
    pub locale: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Page to rewrite
    pub file: PathBuf,

    /// Variant key (A, B, C or D)
    #[arg(long)]
    pub variant: String,

    /// Heading vocabulary of the page (ko, en)
    #[arg(long)]
    pub locale: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
        Commands::Apply(args) => {
            cmd::apply::run(cli.config.as_deref(), cli.profile.as_deref(), &args)
        }
        Commands::Inspect(args) => {
            cmd::inspect::run(cli.config.as_deref(), cli.profile.as_deref(), &args)
        }
        Commands::Render(args) => {
            cmd::render::run(cli.config.as_deref(), cli.profile.as_deref(), &args)
        }
    }
}
