use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use pantheon_core::quality::{generate_quality_config, load_quality_config};
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum QualitySubcommand {
    /// Discover commands and (re)write .pantheon/quality-config.json
    Generate {
        /// Path to plan.md with an explicit "## Quality Standards" section
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Coverage percentage threshold (0-100)
        #[arg(long, default_value = "80")]
        coverage_threshold: u32,
    },

    /// Print the current quality config
    Show,
}

pub fn run(root: &Path, subcommand: QualitySubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        QualitySubcommand::Generate {
            plan,
            coverage_threshold,
        } => {
            let path = generate_quality_config(root, plan.as_deref(), coverage_threshold)
                .context("failed to generate quality config")?;
            if json {
                let config = load_quality_config(root)?;
                return print_json(&config);
            }
            println!("  generated: {}", path.display());
            Ok(())
        }
        QualitySubcommand::Show => {
            let config = load_quality_config(root).context("failed to load quality config")?;
            if json {
                return print_json(&config);
            }
            println!("Project type: {}", config.project_type);
            println!("Discovered via: {}", config.discovery_source);
            println!("Commands:");
            for (name, value) in [
                ("test", &config.commands.test),
                ("lint", &config.commands.lint),
                ("type_check", &config.commands.type_check),
                ("coverage", &config.commands.coverage),
                ("build", &config.commands.build),
            ] {
                let shown = if value.is_empty() { "(none)" } else { value };
                println!("  {name:<11} {shown}");
            }
            println!(
                "Thresholds: {}% branches, {}% statements",
                config.thresholds.coverage_branches, config.thresholds.coverage_statements
            );
            Ok(())
        }
    }
}
