use crate::paths;
use crate::spec_kit::types::{CommandFiles, CommandFormat, CommandRole};
use std::path::Path;

/// Detect which Spec Kit command format a project uses.
///
/// The new format is a strict all-three check and wins even when old-named
/// files are also present; the old format needs only one of its files.
/// Returns `None` when the commands directory is missing or holds neither
/// format.
pub fn detect_command_format(project_root: &Path) -> Option<CommandFormat> {
    let commands_dir = paths::commands_dir(project_root);

    if !commands_dir.exists() {
        return None;
    }

    let all_new = CommandRole::ALL
        .iter()
        .all(|role| commands_dir.join(role.filename(CommandFormat::New)).exists());
    if all_new {
        return Some(CommandFormat::New);
    }

    let any_old = CommandRole::ALL
        .iter()
        .any(|role| commands_dir.join(role.filename(CommandFormat::Old)).exists());
    if any_old {
        return Some(CommandFormat::Old);
    }

    None
}

/// Resolve the command file paths for the detected format.
/// `None` when no format is detected.
pub fn command_files(project_root: &Path) -> Option<CommandFiles> {
    let format = detect_command_format(project_root)?;
    Some(CommandFiles::new(paths::commands_dir(project_root), format))
}

/// The DEV agent must exist in `.claude/agents/` before integration.
pub fn verify_agents_installed(project_root: &Path) -> bool {
    paths::agents_dir(project_root).join("dev.md").exists()
}

/// Spec Kit itself is present when both `.specify/` and `.claude/commands/`
/// exist.
pub fn verify_spec_kit(project_root: &Path) -> bool {
    paths::specify_dir(project_root).exists() && paths::commands_dir(project_root).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), "x").unwrap();
    }

    #[test]
    fn no_commands_dir_is_undetected() {
        let dir = TempDir::new().unwrap();
        assert_eq!(detect_command_format(dir.path()), None);
        assert!(command_files(dir.path()).is_none());
    }

    #[test]
    fn old_format_needs_any_one_file() {
        let dir = TempDir::new().unwrap();
        let commands = paths::commands_dir(dir.path());
        std::fs::create_dir_all(&commands).unwrap();
        touch(&commands, "plan.md");
        assert_eq!(detect_command_format(dir.path()), Some(CommandFormat::Old));
    }

    #[test]
    fn new_format_needs_all_three_files() {
        let dir = TempDir::new().unwrap();
        let commands = paths::commands_dir(dir.path());
        std::fs::create_dir_all(&commands).unwrap();
        touch(&commands, "speckit.implement.md");
        touch(&commands, "speckit.plan.md");
        // Only two of three new files: falls through to undetected.
        assert_eq!(detect_command_format(dir.path()), None);

        touch(&commands, "speckit.tasks.md");
        assert_eq!(detect_command_format(dir.path()), Some(CommandFormat::New));
    }

    #[test]
    fn new_format_wins_over_old() {
        let dir = TempDir::new().unwrap();
        let commands = paths::commands_dir(dir.path());
        std::fs::create_dir_all(&commands).unwrap();
        for name in [
            "implement.md",
            "plan.md",
            "tasks.md",
            "speckit.implement.md",
            "speckit.plan.md",
            "speckit.tasks.md",
        ] {
            touch(&commands, name);
        }
        assert_eq!(detect_command_format(dir.path()), Some(CommandFormat::New));
    }

    #[test]
    fn verify_spec_kit_needs_both_dirs() {
        let dir = TempDir::new().unwrap();
        assert!(!verify_spec_kit(dir.path()));
        std::fs::create_dir_all(paths::commands_dir(dir.path())).unwrap();
        assert!(!verify_spec_kit(dir.path()));
        std::fs::create_dir_all(paths::specify_dir(dir.path())).unwrap();
        assert!(verify_spec_kit(dir.path()));
    }

    #[test]
    fn verify_agents_checks_dev_agent() {
        let dir = TempDir::new().unwrap();
        assert!(!verify_agents_installed(dir.path()));
        let agents = paths::agents_dir(dir.path());
        std::fs::create_dir_all(&agents).unwrap();
        touch(&agents, "dev.md");
        assert!(verify_agents_installed(dir.path()));
    }
}
