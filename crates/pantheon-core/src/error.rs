use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PantheonError {
    #[error(".claude/ directory not found in {0}: this project is not initialized for Claude Code")]
    ClaudeDirMissing(PathBuf),

    #[error("project root does not exist or is not a directory: {0}")]
    InvalidProjectRoot(PathBuf),

    #[error("invalid settings document {path}: {source}")]
    InvalidSettings {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("quality config not found: {0}\nRun 'pantheon integrate' or 'pantheon quality generate' first")]
    QualityConfigMissing(PathBuf),

    #[error("invalid quality config {path}: {reason}")]
    InvalidQualityConfig { path: PathBuf, reason: String },

    #[error("coverage threshold must be between 0 and 100, got {0}")]
    ThresholdOutOfRange(u32),

    #[error("plan file not found: {0}")]
    PlanNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PantheonError>;
