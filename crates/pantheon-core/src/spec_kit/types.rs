use serde::Serialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// CommandFormat / CommandRole
// ---------------------------------------------------------------------------

/// Which Spec Kit command-file naming convention a project uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandFormat {
    /// Pre-v0.0.57: `implement.md`, `plan.md`, `tasks.md`.
    Old,
    /// v0.0.57+: `speckit.implement.md`, `speckit.plan.md`, `speckit.tasks.md`.
    New,
}

/// Logical role of a Spec Kit workflow command file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandRole {
    Implement,
    Plan,
    Tasks,
}

impl CommandRole {
    /// Fixed integration order: implement, plan, tasks.
    pub const ALL: [CommandRole; 3] = [CommandRole::Implement, CommandRole::Plan, CommandRole::Tasks];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandRole::Implement => "implement",
            CommandRole::Plan => "plan",
            CommandRole::Tasks => "tasks",
        }
    }

    pub fn filename(self, format: CommandFormat) -> &'static str {
        match (format, self) {
            (CommandFormat::Old, CommandRole::Implement) => "implement.md",
            (CommandFormat::Old, CommandRole::Plan) => "plan.md",
            (CommandFormat::Old, CommandRole::Tasks) => "tasks.md",
            (CommandFormat::New, CommandRole::Implement) => "speckit.implement.md",
            (CommandFormat::New, CommandRole::Plan) => "speckit.plan.md",
            (CommandFormat::New, CommandRole::Tasks) => "speckit.tasks.md",
        }
    }
}

// ---------------------------------------------------------------------------
// CommandFiles
// ---------------------------------------------------------------------------

/// Resolved paths of the three command files for a detected format.
/// Recomputed on every operation, never cached.
#[derive(Debug, Clone)]
pub struct CommandFiles {
    pub format: CommandFormat,
    commands_dir: PathBuf,
}

impl CommandFiles {
    pub fn new(commands_dir: PathBuf, format: CommandFormat) -> Self {
        Self {
            format,
            commands_dir,
        }
    }

    pub fn path(&self, role: CommandRole) -> PathBuf {
        self.commands_dir.join(role.filename(self.format))
    }

    pub fn commands_dir(&self) -> &Path {
        &self.commands_dir
    }

    /// Paths in fixed role order (implement, plan, tasks).
    pub fn iter(&self) -> impl Iterator<Item = (CommandRole, PathBuf)> + '_ {
        CommandRole::ALL.into_iter().map(|role| (role, self.path(role)))
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub files_checked: Vec<String>,
}

impl ValidationResult {
    pub fn invalid() -> Self {
        Self {
            valid: false,
            errors: Vec::new(),
            files_checked: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IntegrationResult {
    pub success: bool,
    pub backup_dir: Option<PathBuf>,
    pub files_modified: Vec<String>,
    pub errors: Vec<String>,
    pub validation: ValidationResult,
}

impl IntegrationResult {
    pub fn failed() -> Self {
        Self {
            success: false,
            backup_dir: None,
            files_modified: Vec::new(),
            errors: Vec::new(),
            validation: ValidationResult::invalid(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RestoreResult {
    pub success: bool,
    pub files_restored: Vec<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RollbackResult {
    pub success: bool,
    pub backup_dir: Option<PathBuf>,
    pub files_restored: Vec<String>,
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_per_format() {
        assert_eq!(CommandRole::Plan.filename(CommandFormat::Old), "plan.md");
        assert_eq!(
            CommandRole::Plan.filename(CommandFormat::New),
            "speckit.plan.md"
        );
    }

    #[test]
    fn command_files_iter_order_is_fixed() {
        let files = CommandFiles::new(PathBuf::from("/p/.claude/commands"), CommandFormat::Old);
        let names: Vec<String> = files
            .iter()
            .map(|(_, p)| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["implement.md", "plan.md", "tasks.md"]);
    }
}
