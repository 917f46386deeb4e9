//! Installs the DEV and QA agent definitions into `.claude/agents/`.

use crate::error::{PantheonError, Result};
use crate::io;
use crate::paths;
use crate::templates;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallStatus {
    Copied,
    Skipped,
    Failed,
}

impl fmt::Display for InstallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InstallStatus::Copied => "copied",
            InstallStatus::Skipped => "skipped",
            InstallStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

const AGENTS: &[(&str, &str)] = &[
    ("dev", templates::DEV_AGENT),
    ("qa", templates::QA_AGENT),
];

/// Copy the embedded agent files into `.claude/agents/`.
///
/// Existing files are never overwritten — user edits to an installed agent
/// survive re-running init. Requires `.claude/` to already exist.
pub fn install_agents(project_root: &Path) -> Result<BTreeMap<String, InstallStatus>> {
    let claude_dir = paths::claude_dir(project_root);
    if !claude_dir.exists() {
        return Err(PantheonError::ClaudeDirMissing(project_root.to_path_buf()));
    }

    let agents_dir = paths::agents_dir(project_root);
    io::ensure_dir(&agents_dir)?;

    let mut results = BTreeMap::new();
    for (name, body) in AGENTS {
        let dest = agents_dir.join(format!("{name}.md"));
        let status = if dest.exists() {
            InstallStatus::Skipped
        } else {
            match io::atomic_write(&dest, body.as_bytes()) {
                Ok(()) => InstallStatus::Copied,
                Err(_) => InstallStatus::Failed,
            }
        };
        results.insert(name.to_string(), status);
    }

    Ok(results)
}

/// Check that each agent file exists and is non-empty.
pub fn validate_agent_installation(project_root: &Path) -> BTreeMap<String, String> {
    let agents_dir = paths::agents_dir(project_root);
    let mut results = BTreeMap::new();

    for (name, _) in AGENTS {
        let filename = format!("{name}.md");
        let path = agents_dir.join(&filename);

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
