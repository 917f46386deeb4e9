use crate::error::{PantheonError, Result};
use crate::io;
use crate::paths;
use crate::quality::discovery::{
    detect_project_type, discover_quality_commands, ProjectType, QualityCommands,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_VERSION: &str = "1.0";
pub const DEFAULT_COVERAGE_THRESHOLD: u32 = 80;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub coverage_branches: u32,
    pub coverage_statements: u32,
}

/// Schema of `.pantheon/quality-config.json`. The file is rewritten
/// wholesale on every generation — there is no incremental merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityConfigFile {
    pub version: String,
    pub project_type: ProjectType,
    pub commands: QualityCommands,
    pub thresholds: Thresholds,
    pub discovery_source: String,
}

/// Discover commands and write the quality config for a project.
/// `discovery_source` records whether an existing plan file drove the
/// discovery (`"plan.md"`) or it was fully automatic (`"auto"`).
pub fn generate_quality_config(
    project_root: &Path,
    plan_path: Option<&Path>,
    coverage_threshold: u32,
) -> Result<PathBuf> {
    if !project_root.is_dir() {
        return Err(PantheonError::InvalidProjectRoot(
            project_root.to_path_buf(),
        ));
    }
    if coverage_threshold > 100 {
        return Err(PantheonError::ThresholdOutOfRange(coverage_threshold));
    }

    let commands = discover_quality_commands(project_root, plan_path)?;
    let discovery_source = match plan_path {
        Some(plan) if plan.exists() => "plan.md",
        _ => "auto",
    };

    let config = QualityConfigFile {
        version: CONFIG_VERSION.to_string(),
        project_type: detect_project_type(project_root),
        commands,
        thresholds: Thresholds {
            coverage_branches: coverage_threshold,
            coverage_statements: coverage_threshold,
        },
        discovery_source: discovery_source.to_string(),
    };

    let config_path = paths::quality_config_path(project_root);
    let mut json = serde_json::to_string_pretty(&config)?;
    json.push('\n');
    io::atomic_write(&config_path, json.as_bytes())?;

    Ok(config_path)
}

/// Load the quality config back. Missing file, invalid JSON, a missing
/// required field, or an out-of-range threshold are all hard errors.
pub fn load_quality_config(project_root: &Path) -> Result<QualityConfigFile> {
    let config_path = paths::quality_config_path(project_root);

    if !config_path.exists() {
        return Err(PantheonError::QualityConfigMissing(config_path));
    }

    let content = std::fs::read_to_string(&config_path)?;
    let config: QualityConfigFile =
        serde_json::from_str(&content).map_err(|e| PantheonError::InvalidQualityConfig {
            path: config_path.clone(),
            reason: e.to_string(),
        })?;

    for (name, value) in [
        ("coverage_branches", config.thresholds.coverage_branches),
        ("coverage_statements", config.thresholds.coverage_statements),
    ] {
        if value > 100 {
            return Err(PantheonError::InvalidQualityConfig {
                path: config_path,
                reason: format!("{name} must be between 0 and 100, got {value}"),
            });
        }
    }

    Ok(config)
}
