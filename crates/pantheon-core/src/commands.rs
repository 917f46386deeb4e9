//! Installs pantheon slash commands into `.claude/commands/pantheon/`.

use crate::error::{PantheonError, Result};
use crate::io;
use crate::paths;
use crate::templates;
use std::collections::BTreeMap;
use std::path::Path;

const COMMANDS: &[(&str, &str)] = &[("contextualize", templates::CONTEXTUALIZE_COMMAND)];

/// Copy the embedded slash commands into `.claude/commands/pantheon/`.
/// An already-present command counts as success.
pub fn install_commands(project_root: &Path) -> Result<BTreeMap<String, bool>> {
    let claude_dir = paths::claude_dir(project_root);
    if !claude_dir.exists() {
        return Err(PantheonError::ClaudeDirMissing(project_root.to_path_buf()));
    }

    let commands_dir = paths::commands_dir(project_root).join("pantheon");
    io::ensure_dir(&commands_dir)?;

    let mut results = BTreeMap::new();
    for (name, body) in COMMANDS {
        let dest = commands_dir.join(format!("{name}.md"));
        let ok = dest.exists() || io::atomic_write(&dest, body.as_bytes()).is_ok();
        results.insert(name.to_string(), ok);
    }

    Ok(results)
}

/// Check that each command file exists and is non-empty.
pub fn validate_command_installation(project_root: &Path) -> BTreeMap<String, String> {
    let commands_dir = paths::commands_dir(project_root).join("pantheon");
    let mut results = BTreeMap::new();

    for (name, _) in COMMANDS {
        let filename = format!("{name}.md");
        let path = commands_dir.join(&filename);

        let status = if !path.exists() {
            format!("Missing: {filename} not found")
        } else if path.metadata().map(|m| m.len()).unwrap_or(0) == 0 {
            format!("Empty: {filename} has no content")
        } else {
            "OK".to_string()
        };
        results.insert(name.to_string(), status);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn install_requires_claude_dir() {
        let dir = TempDir::new().unwrap();
        assert!(install_commands(dir.path()).is_err());
    }

    #[test]
    fn install_writes_contextualize() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(paths::claude_dir(dir.path())).unwrap();

        let results = install_commands(dir.path()).unwrap();
        assert!(results["contextualize"]);

        let dest = paths::commands_dir(dir.path()).join("pantheon/contextualize.md");
        assert!(dest.exists());
        assert_eq!(validate_command_installation(dir.path())["contextualize"], "OK");
    }

    #[test]
    fn existing_command_counts_as_success() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(paths::claude_dir(dir.path())).unwrap();
        let pantheon_dir = paths::commands_dir(dir.path()).join("pantheon");
        std::fs::create_dir_all(&pantheon_dir).unwrap();
        std::fs::write(pantheon_dir.join("contextualize.md"), "customized").unwrap();

        let results = install_commands(dir.path()).unwrap();
        assert!(results["contextualize"]);
        assert_eq!(
            std::fs::read_to_string(pantheon_dir.join("contextualize.md")).unwrap(),
            "customized"
        );
    }
}
