use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const CLAUDE_DIR: &str = ".claude";
pub const CLAUDE_AGENTS_DIR: &str = ".claude/agents";
pub const CLAUDE_COMMANDS_DIR: &str = ".claude/commands";
pub const CLAUDE_SETTINGS_FILE: &str = ".claude/settings.json";

pub const SPECIFY_DIR: &str = ".specify";

pub const PANTHEON_DIR: &str = ".pantheon";
pub const PANTHEON_HOOKS_DIR: &str = ".pantheon/hooks";
pub const QUALITY_CONFIG_FILE: &str = ".pantheon/quality-config.json";

pub const CLAUDE_MD: &str = "CLAUDE.md";

/// Prefix shared by all integration backup directories. The suffix is a
/// `%Y%m%d-%H%M%S` timestamp, so lexicographic order equals chronological
/// order.
pub const BACKUP_PREFIX: &str = ".integration-backup-";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn claude_dir(root: &Path) -> PathBuf {
    root.join(CLAUDE_DIR)
}

pub fn agents_dir(root: &Path) -> PathBuf {
    root.join(CLAUDE_AGENTS_DIR)
}

pub fn commands_dir(root: &Path) -> PathBuf {
    root.join(CLAUDE_COMMANDS_DIR)
}

pub fn settings_path(root: &Path) -> PathBuf {
    root.join(CLAUDE_SETTINGS_FILE)
}

pub fn specify_dir(root: &Path) -> PathBuf {
    root.join(SPECIFY_DIR)
}

pub fn pantheon_dir(root: &Path) -> PathBuf {
    root.join(PANTHEON_DIR)
}

pub fn hooks_dir(root: &Path) -> PathBuf {
    root.join(PANTHEON_HOOKS_DIR)
}

pub fn quality_config_path(root: &Path) -> PathBuf {
    root.join(QUALITY_CONFIG_FILE)
}

pub fn claude_md_path(root: &Path) -> PathBuf {
    root.join(CLAUDE_MD)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(
            settings_path(root),
            PathBuf::from("/tmp/proj/.claude/settings.json")
        );
        assert_eq!(
            commands_dir(root),
            PathBuf::from("/tmp/proj/.claude/commands")
        );
        assert_eq!(
            quality_config_path(root),
            PathBuf::from("/tmp/proj/.pantheon/quality-config.json")
        );
    }
}
