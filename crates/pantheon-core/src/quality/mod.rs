//! Project-type detection, quality-command discovery, and the generated
//! `.pantheon/quality-config.json`.

pub mod config;
pub mod discovery;

pub use config::{generate_quality_config, load_quality_config, QualityConfigFile, Thresholds};
pub use discovery::{
    detect_project_type, discover_quality_commands, parse_plan_quality_commands, ProjectType,
    QualityCommands,
};
