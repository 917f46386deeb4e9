mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{hooks::HooksSubcommand, quality::QualitySubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pantheon",
    about = "Quality-focused DEV/QA agents for Claude Code — install, integrate with Spec Kit, and manage quality gates",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .claude/ or .git/)
    #[arg(long, global = true, env = "PANTHEON_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install agents, slash commands, and quality gate hooks
    Init,

    /// Integrate DEV agent directives into Spec Kit command files
    Integrate {
        /// Path to plan.md with an explicit "## Quality Standards" section
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Coverage percentage threshold (0-100)
        #[arg(long, default_value = "80")]
        coverage_threshold: u32,
    },

    /// Restore command files from the latest integration backup
    Rollback,

    /// Validate integration, hook, and agent installation state
    Validate,

    /// Manage quality gate hooks
    Hooks {
        #[command(subcommand)]
        subcommand: HooksSubcommand,
    },

    /// Manage the quality config (.pantheon/quality-config.json)
    Quality {
        #[command(subcommand)]
        subcommand: QualitySubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Integrate {
            plan,
            coverage_threshold,
        } => cmd::integrate::run(&root, plan.as_deref(), coverage_threshold, cli.json),
        Commands::Rollback => cmd::rollback::run(&root, cli.json),
        Commands::Validate => cmd::validate::run(&root, cli.json),
        Commands::Hooks { subcommand } => cmd::hooks::run(&root, subcommand, cli.json),
        Commands::Quality { subcommand } => cmd::quality::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
