use crate::output::print_json;
use anyhow::Context;
use pantheon_core::quality::generate_quality_config;
use pantheon_core::spec_kit::{integrate_claude_md, integrate_spec_kit, IntegrationResult};
use pantheon_core::{hooks, paths};
use std::path::{Path, PathBuf};

#[derive(serde::Serialize)]
struct IntegrateOutput {
    #[serde(flatten)]
    integration: IntegrationResult,
    claude_md_integrated: bool,
    quality_config: Option<PathBuf>,
}

pub fn run(
    root: &Path,
    plan: Option<&Path>,
    coverage_threshold: u32,
    json: bool,
) -> anyhow::Result<()> {
    let integration = integrate_spec_kit(root);

    let mut claude_md_integrated = false;
    let mut quality_config = None;

    if integration.success {
        claude_md_integrated =
            integrate_claude_md(root).context("failed to update CLAUDE.md")?;
        hooks::install_hooks(root).context("failed to install quality gate hooks")?;

        // Default to the Spec Kit plan when none was given explicitly.
        let detected_plan = plan
            .map(Path::to_path_buf)
            .or_else(|| default_plan_path(root));
        quality_config = Some(
            generate_quality_config(root, detected_plan.as_deref(), coverage_threshold)
                .context("failed to generate quality config")?,
        );
    }

    let success = integration.success;
    let output = IntegrateOutput {
        integration,
        claude_md_integrated,
        quality_config,
    };

    if json {
        print_json(&output)?;
    } else {
        print_human(&output);
    }

    if !success {
        anyhow::bail!("integration failed");
    }
    Ok(())
}

/// `.specify/` projects keep plans under specs/<feature>/plan.md; fall back
/// to a root-level plan.md if present.
fn default_plan_path(root: &Path) -> Option<PathBuf> {
    let candidate = root.join("plan.md");
    candidate.exists().then_some(candidate)
}

fn print_human(output: &IntegrateOutput) {
    let integration = &output.integration;

    if let Some(backup) = &integration.backup_dir {
        println!("Backup: {}", backup.display());
    }
    for file in &integration.files_modified {
        println!("  integrated: {file}");
    }
    if output.claude_md_integrated {
        println!("  integrated: {}", paths::CLAUDE_MD);
    }
    if let Some(config) = &output.quality_config {
        println!("  generated:  {}", config.display());
    }

    if integration.success {
        println!("\nIntegration complete.");
    } else {
        println!("\nIntegration failed:");
        for error in &integration.errors {
            println!("  - {error}");
        }
        if integration.backup_dir.is_some() {
            println!("Run 'pantheon rollback' to restore the command files.");
        }
    }
}
