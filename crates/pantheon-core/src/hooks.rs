//! Installs the quality-gate hook scripts and wires them into
//! `.claude/settings.json`. Script bodies are opaque — this module only
//! places them and manages their declarations.

use crate::error::{PantheonError, Result};
use crate::io;
use crate::paths;
use crate::settings::{SettingsDocument, OWNED_HOOKS};
use crate::templates;
use std::collections::BTreeMap;
use std::path::Path;

const HOOK_SCRIPTS: &[(&str, &str, &str)] = &[
    ("phase-gate.sh", "QualityGate", templates::PHASE_GATE_HOOK),
    (
        "orchestrator-code-gate.sh",
        "OrchestratorCodeGate",
        templates::ORCHESTRATOR_CODE_GATE_HOOK,
    ),
];

/// Hook checks for validation: (script, logical name, event, matcher).
const HOOK_CHECKS: &[(&str, &str, &str, &str)] = &[
    ("phase-gate.sh", "QualityGate-SubagentStop", "SubagentStop", ""),
    ("phase-gate.sh", "QualityGate-Task", "PreToolUse", "Task"),
    (
        "phase-gate.sh",
        "QualityGate-PreCommit",
        "PreToolUse",
        "Bash(git commit*)",
    ),
    (
        "orchestrator-code-gate.sh",
        "OrchestratorCodeGate",
        "PreToolUse",
        "Write(*) | Edit(*)",
    ),
];

/// Install the hook scripts into `.pantheon/hooks/` and merge their
/// declarations into settings. Scripts are refreshed on every install —
/// they are managed content, unlike agent files.
pub fn install_hooks(project_root: &Path) -> Result<BTreeMap<String, bool>> {
    let claude_dir = paths::claude_dir(project_root);
    if !claude_dir.exists() {
        return Err(PantheonError::ClaudeDirMissing(project_root.to_path_buf()));
    }

    let hooks_dir = paths::hooks_dir(project_root);
    io::ensure_dir(&hooks_dir)?;

    let mut results = BTreeMap::new();
    for (filename, hook_name, body) in HOOK_SCRIPTS {
        let dest = hooks_dir.join(filename);
        let ok = io::atomic_write(&dest, body.as_bytes())
            .and_then(|()| mark_executable(&dest))
            .is_ok();
        results.insert(hook_name.to_string(), ok);
    }

    let mut settings = SettingsDocument::load(project_root)?;
    settings.merge_hook_entries();
    settings.save(project_root)?;

    Ok(results)
}

/// Remove owned hook declarations from settings and delete
/// `.pantheon/hooks/`. The quality config is preserved.
pub fn uninstall_hooks(project_root: &Path) -> Result<()> {
    let claude_dir = paths::claude_dir(project_root);
    if !claude_dir.exists() {
        return Err(PantheonError::ClaudeDirMissing(project_root.to_path_buf()));
    }

    if paths::settings_path(project_root).exists() {
        let mut settings = SettingsDocument::load(project_root)?;
        settings.remove_hook_entries();
        settings.save(project_root)?;
    }

    let hooks_dir = paths::hooks_dir(project_root);
    if hooks_dir.exists() {
        std::fs::remove_dir_all(&hooks_dir)?;
    }

    Ok(())
}

/// Check script presence, executable bit, and settings wiring for every
/// owned declaration. Returns a status string per logical hook name.
pub fn validate_hook_installation(project_root: &Path) -> BTreeMap<String, String> {
    let hooks_dir = paths::hooks_dir(project_root);
    // Validation tolerates an unreadable settings file: every wiring check
    // then reports "not configured" rather than aborting.
    let settings = SettingsDocument::load(project_root).unwrap_or_default();

    let mut results = BTreeMap::new();
    for (filename, hook_name, event, matcher) in HOOK_CHECKS {
        let script_path = hooks_dir.join(filename);

        if !script_path.exists() {
            results.insert(
                hook_name.to_string(),
                format!("Missing: {filename} not found"),
            );
            continue;
        }

        if !is_executable(&script_path) {
            results.insert(
                hook_name.to_string(),
                format!("Missing executable permission on {filename}"),
            );
            continue;
        }

        let Some(entries) = settings.hooks.get(*event) else {
            results.insert(
                hook_name.to_string(),
                "Not configured in .claude/settings.json".to_string(),
            );
            continue;
        };

        let Some(entry) = entries.iter().find(|e| e.matcher == *matcher) else {
            let matcher_desc = if matcher.is_empty() {
                "empty matcher".to_string()
            } else {
                format!("matcher '{matcher}'")
            };
            results.insert(
                hook_name.to_string(),
                format!("Hook with {matcher_desc} not found in {event}"),
            );
            continue;
        };

        let has_correct_path = entry.hooks.iter().any(|h| h.command.contains(filename));
        if !has_correct_path {
            results.insert(
                hook_name.to_string(),
                format!("Incorrect path in {event} hook"),
            );
            continue;
        }

        results.insert(hook_name.to_string(), "OK".to_string());
    }

    results
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_claude(dir: &TempDir) {
        std::fs::create_dir(paths::claude_dir(dir.path())).unwrap();
    }

    #[test]
    fn install_requires_claude_dir() {
        let dir = TempDir::new().unwrap();
        assert!(install_hooks(dir.path()).is_err());
    }

    #[test]
    fn install_writes_scripts_and_settings() {
        let dir = TempDir::new().unwrap();
        init_claude(&dir);

        let results = install_hooks(dir.path()).unwrap();
        assert!(results["QualityGate"]);
        assert!(results["OrchestratorCodeGate"]);

        let hooks_dir = paths::hooks_dir(dir.path());
        assert!(hooks_dir.join("phase-gate.sh").exists());
        assert!(hooks_dir.join("orchestrator-code-gate.sh").exists());

        let settings = SettingsDocument::load(dir.path()).unwrap();
        for owned in OWNED_HOOKS {
            assert!(settings.has_owned_entry(owned.event, owned.matcher));
        }
    }

    #[test]
    fn validation_all_ok_after_install() {
        let dir = TempDir::new().unwrap();
        init_claude(&dir);
        install_hooks(dir.path()).unwrap();

        let statuses = validate_hook_installation(dir.path());
        assert_eq!(statuses.len(), 4);
        for (name, status) in statuses {
            assert_eq!(status, "OK", "{name}: {status}");
        }
    }

    #[test]
    fn validation_reports_missing_scripts() {
        let dir = TempDir::new().unwrap();
        let statuses = validate_hook_installation(dir.path());
        assert!(statuses["QualityGate-SubagentStop"].starts_with("Missing"));
    }

    #[test]
    fn validation_reports_unconfigured_settings() {
        let dir = TempDir::new().unwrap();
        init_claude(&dir);
        install_hooks(dir.path()).unwrap();

        // Wipe the declarations but keep the scripts on disk.
        let mut settings = SettingsDocument::load(dir.path()).unwrap();
        settings.remove_hook_entries();
        settings.save(dir.path()).unwrap();

        let statuses = validate_hook_installation(dir.path());
        assert!(statuses["QualityGate-Task"].contains("Not configured")
            || statuses["QualityGate-Task"].contains("not found in"));
    }

    #[test]
    fn uninstall_removes_scripts_and_entries_keeps_quality_config() {
        let dir = TempDir::new().unwrap();
        init_claude(&dir);
        install_hooks(dir.path()).unwrap();

        let config = paths::quality_config_path(dir.path());
        std::fs::create_dir_all(config.parent().unwrap()).unwrap();
        std::fs::write(&config, "{}").unwrap();

        uninstall_hooks(dir.path()).unwrap();
        assert!(!paths::hooks_dir(dir.path()).exists());
        assert!(config.exists());

        let settings = SettingsDocument::load(dir.path()).unwrap();
        assert!(settings.hooks.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn installed_scripts_are_executable() {
        let dir = TempDir::new().unwrap();
        init_claude(&dir);
        install_hooks(dir.path()).unwrap();
        assert!(is_executable(
            &paths::hooks_dir(dir.path()).join("phase-gate.sh")
        ));
    }
}
