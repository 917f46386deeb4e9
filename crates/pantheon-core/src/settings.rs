//! Typed view of `.claude/settings.json`.
//!
//! Only the `hooks` key is interpreted; every other top-level key passes
//! through a load/save round-trip untouched (modulo JSON formatting — key
//! order and whitespace are not a contract). Within an event array, at most
//! one entry exists per distinct `matcher` after a merge.

use crate::error::{PantheonError, Result};
use crate::io;
use crate::paths;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// Owned hook declarations
// ---------------------------------------------------------------------------

/// A hook declaration this tool manages: lifecycle event, matcher
/// discriminator, and the script under `.pantheon/hooks/` it points at.
pub struct OwnedHook {
    pub event: &'static str,
    pub matcher: &'static str,
    pub script: &'static str,
}

/// The fixed set of (event, matcher, script) triples pantheon owns. Entries
/// with any other matcher belong to the user and survive merges and removals.
pub const OWNED_HOOKS: &[OwnedHook] = &[
    OwnedHook {
        event: "SubagentStop",
        matcher: "",
        script: "phase-gate.sh",
    },
    OwnedHook {
        event: "PreToolUse",
        matcher: "Task",
        script: "phase-gate.sh",
    },
    OwnedHook {
        event: "PreToolUse",
        matcher: "Bash(git commit*)",
        script: "phase-gate.sh",
    },
    OwnedHook {
        event: "PreToolUse",
        matcher: "Write(*) | Edit(*)",
        script: "orchestrator-code-gate.sh",
    },
];

// ---------------------------------------------------------------------------
// Document types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookCommand {
    #[serde(rename = "type")]
    pub kind: String,
    pub command: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl HookCommand {
    pub fn command(script_rel_path: String) -> Self {
        Self {
            kind: "command".to_string(),
            command: script_rel_path,
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookEntry {
    #[serde(default)]
    pub matcher: String,
    #[serde(default)]
    pub hooks: Vec<HookCommand>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub hooks: BTreeMap<String, Vec<HookEntry>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl SettingsDocument {
    /// Load the settings document for a project. A missing file is the
    /// empty document; invalid JSON or a shape mismatch is a hard error
    /// naming the file.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = paths::settings_path(project_root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|source| PantheonError::InvalidSettings { path, source })
    }

    /// Persist pretty-printed with 2-space indent.
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = paths::settings_path(project_root);
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        io::atomic_write(&path, json.as_bytes())?;
        Ok(())
    }

    /// Ensure every owned hook declaration is present, keyed by `matcher`.
    /// An event array gains at most one entry per owned matcher; existing
    /// entries — ours or the user's — are left untouched.
    pub fn merge_hook_entries(&mut self) {
        for owned in OWNED_HOOKS {
            let entries = self.hooks.entry(owned.event.to_string()).or_default();
            if entries.iter().any(|e| e.matcher == owned.matcher) {
                continue;
            }
            entries.push(HookEntry {
                matcher: owned.matcher.to_string(),
                hooks: vec![HookCommand::command(format!(
                    "{}/{}",
                    paths::PANTHEON_HOOKS_DIR,
                    owned.script
                ))],
                extra: serde_json::Map::new(),
            });
        }
    }

    /// Delete owned entries from the owned event arrays. Event arrays that
    /// become empty are removed; the `hooks` key disappears entirely once
    /// no event arrays remain. Unrelated entries and keys are untouched.
    pub fn remove_hook_entries(&mut self) {
        for owned in OWNED_HOOKS {
            if let Some(entries) = self.hooks.get_mut(owned.event) {
                entries.retain(|e| e.matcher != owned.matcher);
            }
        }
        self.hooks.retain(|_, entries| !entries.is_empty());
    }

    /// Whether an owned hook entry is currently declared.
    pub fn has_owned_entry(&self, event: &str, matcher: &str) -> bool {
        self.hooks
            .get(event)
            .is_some_and(|entries| entries.iter().any(|e| e.matcher == matcher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_settings(dir: &TempDir, content: &str) {
        let path = paths::settings_path(dir.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
    }

    #[test]
    fn missing_file_loads_as_empty_document() {
        let dir = TempDir::new().unwrap();
        let doc = SettingsDocument::load(dir.path()).unwrap();
        assert!(doc.hooks.is_empty());
        assert!(doc.extra.is_empty());
    }

    #[test]
    fn invalid_json_is_a_hard_error() {
        let dir = TempDir::new().unwrap();
        write_settings(&dir, "{not json");
        let err = SettingsDocument::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("settings.json"));
    }

    #[test]
    fn merge_adds_all_owned_entries() {
        let mut doc = SettingsDocument::default();
        doc.merge_hook_entries();

        assert_eq!(doc.hooks["SubagentStop"].len(), 1);
        assert_eq!(doc.hooks["PreToolUse"].len(), 3);
        assert_eq!(
            doc.hooks["SubagentStop"][0].hooks[0].command,
            ".pantheon/hooks/phase-gate.sh"
        );
    }

    #[test]
    fn merge_twice_does_not_duplicate() {
        let mut doc = SettingsDocument::default();
        doc.merge_hook_entries();
        doc.merge_hook_entries();

        assert_eq!(doc.hooks["SubagentStop"].len(), 1);
        assert_eq!(doc.hooks["PreToolUse"].len(), 3);
    }

    #[test]
    fn merge_preserves_unrelated_keys_and_entries() {
        let dir = TempDir::new().unwrap();
        write_settings(
            &dir,
            r#"{
  "theme": "dark",
  "hooks": {
    "PreToolUse": [
      {"matcher": "WebFetch", "hooks": [{"type": "command", "command": "scripts/audit.sh"}]}
    ],
    "Stop": [
      {"matcher": "", "hooks": [{"type": "command", "command": "scripts/bye.sh"}]}
    ]
  }
}"#,
        );

        let mut doc = SettingsDocument::load(dir.path()).unwrap();
        doc.merge_hook_entries();
        doc.save(dir.path()).unwrap();

        let reloaded = SettingsDocument::load(dir.path()).unwrap();
        assert_eq!(reloaded.extra["theme"], "dark");
        assert_eq!(reloaded.hooks["Stop"].len(), 1);
        // Foreign matcher + 3 owned entries.
        assert_eq!(reloaded.hooks["PreToolUse"].len(), 4);
        assert!(reloaded
            .hooks["PreToolUse"]
            .iter()
            .any(|e| e.matcher == "WebFetch"));
    }

    #[test]
    fn remove_prunes_empty_arrays_and_hooks_key() {
        let mut doc = SettingsDocument::default();
        doc.merge_hook_entries();
        doc.remove_hook_entries();
        assert!(doc.hooks.is_empty());

        let json = serde_json::to_string(&doc).unwrap();
        assert!(!json.contains("hooks"), "empty hooks key must be dropped");
    }

    #[test]
    fn remove_keeps_foreign_entries() {
        let dir = TempDir::new().unwrap();
        write_settings(
            &dir,
            r#"{
  "hooks": {
    "PreToolUse": [
      {"matcher": "WebFetch", "hooks": [{"type": "command", "command": "scripts/audit.sh"}]},
      {"matcher": "Task", "hooks": [{"type": "command", "command": ".pantheon/hooks/phase-gate.sh"}]}
    ]
  }
}"#,
        );

        let mut doc = SettingsDocument::load(dir.path()).unwrap();
        doc.remove_hook_entries();

        let entries = &doc.hooks["PreToolUse"];
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].matcher, "WebFetch");
    }

    #[test]
    fn save_is_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let mut doc = SettingsDocument::default();
        doc.extra
            .insert("theme".to_string(), Value::String("dark".to_string()));
        doc.merge_hook_entries();
        doc.save(dir.path()).unwrap();

        let raw = std::fs::read_to_string(paths::settings_path(dir.path())).unwrap();
        assert!(raw.contains("\n  \"hooks\""), "expected 2-space indent");
    }

    #[test]
    fn unknown_fields_on_entries_round_trip() {
        let dir = TempDir::new().unwrap();
        write_settings(
            &dir,
            r#"{
  "hooks": {
    "SubagentStop": [
      {"matcher": "", "timeout": 30, "hooks": [{"type": "command", "command": "x.sh", "env": {"A": "1"}}]}
    ]
  }
}"#,
        );

        let doc = SettingsDocument::load(dir.path()).unwrap();
        doc.save(dir.path()).unwrap();

        let raw = std::fs::read_to_string(paths::settings_path(dir.path())).unwrap();
        assert!(raw.contains("\"timeout\""));
        assert!(raw.contains("\"env\""));
    }
}
