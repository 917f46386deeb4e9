use crate::output::print_json;
use anyhow::Context;
use pantheon_core::settings::SettingsDocument;
use pantheon_core::spec_kit::rollback_integration;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let result = rollback_integration(root);

    // Restoring the files also retires the hook declarations this tool
    // added; the user's own settings entries stay put.
    if result.success {
        let mut settings =
            SettingsDocument::load(root).context("failed to load .claude/settings.json")?;
        settings.remove_hook_entries();
        settings
            .save(root)
            .context("failed to save .claude/settings.json")?;
    }

    if json {
        print_json(&result)?;
    } else if result.success {
        if let Some(backup) = &result.backup_dir {
            println!("Restored from: {}", backup.display());
        }
        for file in &result.files_restored {
            println!("  restored: {file}");
        }
    } else {
        println!("Rollback failed:");
        for error in &result.errors {
            println!("  - {error}");
        }
    }

    if !result.success {
        anyhow::bail!("rollback failed");
    }
    Ok(())
}
