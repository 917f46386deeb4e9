use crate::error::Result;
use crate::io;
use crate::paths;
use crate::spec_kit::backup::{create_backup, restore_files};
use crate::spec_kit::detection::{
    command_files, detect_command_format, verify_agents_installed, verify_spec_kit,
};
use crate::spec_kit::directives::{ORCHESTRATION_MARKER, ORCHESTRATION_SECTION};
use crate::spec_kit::types::{CommandRole, IntegrationResult};
use crate::spec_kit::validation::validate_integration;
use std::path::Path;

// ---------------------------------------------------------------------------
// Directive insertion
// ---------------------------------------------------------------------------

/// Insert `directive` immediately after the YAML frontmatter block.
///
/// Positioning rule: if line 0 (stripped) is `---`, the insertion point is
/// the line after the next stripped `---`. No closing delimiter (malformed
/// or absent frontmatter) falls back to the top of the file — that is a
/// deliberate fallback, not an error. The directive is inserted as a single
/// line element prefixed with a blank line.
pub fn insert_after_frontmatter(content: &str, directive: &str) -> String {
    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();

    let mut insert_index = 0;
    if lines.first().is_some_and(|l| l.trim() == "---") {
        for (i, line) in lines.iter().enumerate().skip(1) {
            if line.trim() == "---" {
                insert_index = i + 1;
                break;
            }
        }
    }

    lines.insert(insert_index, format!("\n{directive}"));
    lines.join("\n")
}

/// Insert the directive for `role` into its command file.
///
/// Returns `Ok(true)` on insertion and on the idempotent no-op (marker
/// already present); `Ok(false)` when the target file does not exist — a
/// silent skip the caller interprets. Running twice produces byte-identical
/// output to running once.
pub fn integrate_command(project_root: &Path, role: CommandRole) -> Result<bool> {
    let Some(files) = command_files(project_root) else {
        return Ok(false);
    };
    let filepath = files.path(role);

    if !filepath.exists() {
        return Ok(false);
    }

    let content = std::fs::read_to_string(&filepath)?;

    if content.contains(role.marker()) {
        return Ok(true); // Already integrated
    }

    let updated = insert_after_frontmatter(&content, role.directive());
    io::atomic_write(&filepath, updated.as_bytes())?;
    Ok(true)
}

// ---------------------------------------------------------------------------
// Main integration flow
// ---------------------------------------------------------------------------

/// Full integration flow: verify prerequisites, back up, insert the three
/// directives, validate.
///
/// Prerequisite failures are collected as result errors before any mutation.
/// A failure while applying directives restores the files from the backup
/// created in this invocation; the backup directory itself is always kept
/// so the caller can still inspect or re-run rollback.
pub fn integrate_spec_kit(project_root: &Path) -> IntegrationResult {
    let mut result = IntegrationResult::failed();

    // Step 1: prerequisites — short-circuit before any mutation.
    if !verify_agents_installed(project_root) {
        result
            .errors
            .push("DEV agent not installed. Run 'pantheon init' first.".to_string());
        return result;
    }

    if !verify_spec_kit(project_root) {
        result
            .errors
            .push("Spec Kit not detected. Ensure .specify/ and .claude/commands/ exist.".to_string());
        return result;
    }

    if detect_command_format(project_root).is_none() {
        result.errors.push(
            "Spec Kit command files not found. Expected either speckit.*.md (v0.0.57+) \
             or *.md (pre-v0.0.57) format."
                .to_string(),
        );
        return result;
    }

    // Step 2: backup.
    let backup_dir = match create_backup(project_root) {
        Ok(dir) => dir,
        Err(e) => {
            result.errors.push(format!("Failed to create backup: {e}"));
            return result;
        }
    };
    result.backup_dir = Some(backup_dir.clone());

    // Step 3: apply directives in fixed order. On failure, restore the
    // files just backed up instead of leaving a half-applied state.
    for role in CommandRole::ALL {
        match integrate_command(project_root, role) {
            Ok(true) => {
                if let Some(files) = command_files(project_root) {
                    result
                        .files_modified
                        .push(role.filename(files.format).to_string());
                }
            }
            Ok(false) => {}
            Err(e) => {
                result.errors.push(format!("Integration failed: {e}"));
                let restore = restore_files(&backup_dir, project_root);
                if restore.success {
                    // The restore reverted everything applied so far, so
                    // those files are no longer modified.
                    result.files_modified.clear();
                } else {
                    result.errors.extend(restore.errors);
                }
                return result;
            }
        }
    }

    // Step 4: validate.
    let validation = validate_integration(project_root);
    if validation.valid {
        result.success = true;
    } else {
        result.errors.extend(validation.errors.iter().cloned());
    }
    result.validation = validation;

    result
}

// ---------------------------------------------------------------------------
// CLAUDE.md orchestration section
// ---------------------------------------------------------------------------

/// Append the multi-agent orchestration section to the project's CLAUDE.md,
/// creating the file if absent. Guarded by the same marker rule as the
/// command-file directives.
pub fn integrate_claude_md(project_root: &Path) -> Result<bool> {
    let claude_md = paths::claude_md_path(project_root);

    let content = if claude_md.exists() {
        let existing = std::fs::read_to_string(&claude_md)?;
        if existing.contains(ORCHESTRATION_MARKER) {
            return Ok(true); // Already integrated
        }
        existing
    } else {
        "# Claude Instructions\n\n".to_string()
    };

    let updated = format!("{}\n{}", content.trim_end(), ORCHESTRATION_SECTION);
    io::atomic_write(&claude_md, updated.as_bytes())?;
    Ok(true)
}
