//! Spec Kit integration: detect the installed command format, back up the
//! command files, insert workflow directives after their YAML frontmatter,
//! and validate or roll back the result.

pub mod backup;
pub mod detection;
pub mod directives;
pub mod integrate;
pub mod types;
pub mod validation;

pub use backup::{create_backup, find_latest_backup, restore_files, rollback_integration};
pub use detection::{command_files, detect_command_format, verify_agents_installed, verify_spec_kit};
pub use integrate::{integrate_claude_md, integrate_command, integrate_spec_kit};
pub use types::{
    CommandFiles, CommandFormat, CommandRole, IntegrationResult, RestoreResult, RollbackResult,
    ValidationResult,
};
pub use validation::validate_integration;
