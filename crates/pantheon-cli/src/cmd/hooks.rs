use crate::output::{print_json, print_status_map};
use anyhow::Context;
use clap::Subcommand;
use pantheon_core::hooks;
use std::path::Path;

#[derive(Subcommand)]
pub enum HooksSubcommand {
    /// Install hook scripts and wire them into .claude/settings.json
    Install,

    /// Remove hook declarations and delete .pantheon/hooks/
    Uninstall,

    /// Show installation status per hook
    Status,
}

pub fn run(root: &Path, subcommand: HooksSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        HooksSubcommand::Install => {
            let results = hooks::install_hooks(root).context("failed to install hooks")?;
            if json {
                return print_json(&results);
            }
            for (name, ok) in &results {
                let status = if *ok { "installed" } else { "failed" };
                println!("  {status}: {name}");
            }
            Ok(())
        }
        HooksSubcommand::Uninstall => {
            hooks::uninstall_hooks(root).context("failed to uninstall hooks")?;
            if !json {
                println!("Quality gate hooks removed.");
            }
            Ok(())
        }
        HooksSubcommand::Status => {
            let statuses = hooks::validate_hook_installation(root);
            if json {
                return print_json(&statuses);
            }
            print_status_map("Hooks", &statuses);
            Ok(())
        }
    }
}
