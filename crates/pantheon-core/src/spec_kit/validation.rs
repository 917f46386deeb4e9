use crate::spec_kit::detection::command_files;
use crate::spec_kit::types::{CommandRole, ValidationResult};
use std::path::Path;

/// Re-read the command files and confirm each contains its directive marker.
///
/// `files_checked` lists every role's filename regardless of outcome so the
/// caller can report coverage. `valid` holds only when every file exists and
/// carries its marker.
pub fn validate_integration(project_root: &Path) -> ValidationResult {
    let mut result = ValidationResult {
        valid: true,
        errors: Vec::new(),
        files_checked: Vec::new(),
    };

    let Some(files) = command_files(project_root) else {
        result.valid = false;
        result
            .errors
            .push("No Spec Kit command files detected".to_string());
        return result;
    };

    for role in CommandRole::ALL {
        let filepath = files.path(role);
        let filename = role.filename(files.format);
        result.files_checked.push(filename.to_string());

        if !filepath.exists() {
            result.valid = false;
            result.errors.push(format!("{filename} not found"));
            continue;
        }

        match std::fs::read_to_string(&filepath) {
            Ok(content) => {
                if !content.contains(role.marker()) {
                    result.valid = false;
                    result.errors.push(format!(
                        "{filename} missing integration section: {}",
                        role.marker()
                    ));
                }
            }
            Err(e) => {
                result.valid = false;
                result.errors.push(format!("Error reading {filename}: {e}"));
            }
        }
    }

    result
}
