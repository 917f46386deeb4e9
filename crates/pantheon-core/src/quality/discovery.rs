use crate::error::{PantheonError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// ProjectType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Node,
    Python,
    Go,
    Ruby,
    Other,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectType::Node => "node",
            ProjectType::Python => "python",
            ProjectType::Go => "go",
            ProjectType::Ruby => "ruby",
            ProjectType::Other => "other",
        };
        f.write_str(s)
    }
}

/// Classify the project ecosystem by marker-file presence, first match wins:
/// `package.json` → node, `pyproject.toml`/`setup.py` → python, `go.mod` →
/// go, `Gemfile` → ruby, else other. No content inspection at this stage.
pub fn detect_project_type(project_root: &Path) -> ProjectType {
    if project_root.join("package.json").exists() {
        ProjectType::Node
    } else if project_root.join("pyproject.toml").exists()
        || project_root.join("setup.py").exists()
    {
        ProjectType::Python
    } else if project_root.join("go.mod").exists() {
        ProjectType::Go
    } else if project_root.join("Gemfile").exists() {
        ProjectType::Ruby
    } else {
        ProjectType::Other
    }
}

// ---------------------------------------------------------------------------
// QualityCommands
// ---------------------------------------------------------------------------

/// The five named quality commands. Empty string means "not discovered".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityCommands {
    pub test: String,
    pub lint: String,
    pub type_check: String,
    pub coverage: String,
    pub build: String,
}

impl QualityCommands {
    /// Copy `other`'s value into every key that is still empty. Existing
    /// (plan-supplied) values are never overwritten.
    fn fill_missing_from(&mut self, other: QualityCommands) {
        if self.test.is_empty() {
            self.test = other.test;
        }
        if self.lint.is_empty() {
            self.lint = other.lint;
        }
        if self.type_check.is_empty() {
            self.type_check = other.type_check;
        }
        if self.coverage.is_empty() {
            self.coverage = other.coverage;
        }
        if self.build.is_empty() {
            self.build = other.build;
        }
    }
}

/// Discover quality commands for a project.
///
/// Explicit commands in the plan's `## Quality Standards` section win;
/// ecosystem auto-discovery fills in whatever the plan left blank. All five
/// keys are always present in the result.
pub fn discover_quality_commands(
    project_root: &Path,
    plan_path: Option<&Path>,
) -> Result<QualityCommands> {
    if !project_root.is_dir() {
        return Err(PantheonError::InvalidProjectRoot(
            project_root.to_path_buf(),
        ));
    }

    let mut commands = QualityCommands::default();

    if let Some(plan) = plan_path {
        if plan.exists() {
            commands = parse_plan_quality_commands(plan)?;
        }
    }

    let auto = match detect_project_type(project_root) {
        ProjectType::Node => discover_node_commands(project_root),
        ProjectType::Python => discover_python_commands(project_root),
        ProjectType::Go => go_commands(),
        ProjectType::Ruby => ruby_commands(),
        ProjectType::Other => QualityCommands::default(),
    };
    commands.fill_missing_from(auto);

    Ok(commands)
}

// ---------------------------------------------------------------------------
// plan.md parsing
// ---------------------------------------------------------------------------

static HEADING_RE: OnceLock<Regex> = OnceLock::new();
static LABEL_RES: OnceLock<[Regex; 5]> = OnceLock::new();

fn heading_re() -> &'static Regex {
    HEADING_RE.get_or_init(|| Regex::new(r"(?im)^##\s+Quality Standards").unwrap())
}

/// One regex per recognized label, in `QualityCommands` field order.
fn label_res() -> &'static [Regex; 5] {
    LABEL_RES.get_or_init(|| {
        let build = |label: &str| {
            Regex::new(&format!(r"(?im)^\s*-\s+{label} command:[ \t]*(.+)$")).unwrap()
        };
        [
            build("Test"),
            build("Lint"),
            build("Type"),
            build("Coverage"),
            build("Build"),
        ]
    })
}

/// Extract explicit quality commands from a plan file's
/// `## Quality Standards` section (up to the next `##` heading or EOF).
/// Labels are matched case-insensitively; unrecognized lines are ignored.
pub fn parse_plan_quality_commands(plan_path: &Path) -> Result<QualityCommands> {
    if !plan_path.exists() {
        return Err(PantheonError::PlanNotFound(plan_path.to_path_buf()));
    }

    let content = std::fs::read_to_string(plan_path)?;
    let mut commands = QualityCommands::default();

    let Some(m) = heading_re().find(&content) else {
        return Ok(commands);
    };
    let rest = &content[m.start()..];
    let section_end = rest[m.len()..]
        .find("\n##")
        .map(|i| i + m.len())
        .unwrap_or(rest.len());
    let section = &rest[..section_end];

    let res = label_res();
    let capture = |re: &Regex| {
        re.captures(section)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default()
    };
    commands.test = capture(&res[0]);
    commands.lint = capture(&res[1]);
    commands.type_check = capture(&res[2]);
    commands.coverage = capture(&res[3]);
    commands.build = capture(&res[4]);

    Ok(commands)
}

// ---------------------------------------------------------------------------
// Ecosystem tables
// ---------------------------------------------------------------------------

/// Map known `package.json` script names to npm invocations. A parse
/// failure yields no commands rather than an error — discovery is
/// best-effort.
fn discover_node_commands(project_root: &Path) -> QualityCommands {
    let mut commands = QualityCommands::default();

    let Ok(raw) = std::fs::read_to_string(project_root.join("package.json")) else {
        return commands;
    };
    let Ok(package) = serde_json::from_str::<serde_json::Value>(&raw) else {
        return commands;
    };
    let Some(scripts) = package.get("scripts").and_then(|s| s.as_object()) else {
        return commands;
    };

    if scripts.contains_key("test") {
        commands.test = "npm test".to_string();
    }
    if scripts.contains_key("lint") {
        commands.lint = "npm run lint".to_string();
    }
    if scripts.contains_key("type-check") {
        commands.type_check = "npm run type-check".to_string();
    } else if scripts.contains_key("typecheck") {
        commands.type_check = "npm run typecheck".to_string();
    }
    if scripts.contains_key("coverage") {
        commands.coverage = "npm run coverage".to_string();
    }
    if scripts.contains_key("build") {
        commands.build = "npm run build".to_string();
    }

    commands
}

/// Substring scan of pyproject.toml for tool markers; fixed command strings
/// are synthesized per detected tool.
fn discover_python_commands(project_root: &Path) -> QualityCommands {
    let mut commands = QualityCommands::default();

    let Ok(content) = std::fs::read_to_string(project_root.join("pyproject.toml")) else {
        return commands;
    };

    if content.contains("pytest") {
        commands.test = "pytest tests/".to_string();
        commands.coverage = "pytest tests/ --cov".to_string();
    }
    if content.contains("ruff") {
        commands.lint = "ruff check src/ tests/".to_string();
    }
    if content.contains("mypy") {
        commands.type_check = "mypy src/".to_string();
    }
    commands.build = "python -m build".to_string();

    commands
}

fn go_commands() -> QualityCommands {
    QualityCommands {
        test: "go test ./...".to_string(),
        lint: "golangci-lint run".to_string(),
        type_check: String::new(), // statically typed, covered by build
        coverage: "go test -cover ./...".to_string(),
        build: "go build".to_string(),
    }
}

fn ruby_commands() -> QualityCommands {
    QualityCommands {
        test: "bundle exec rspec".to_string(),
        lint: "bundle exec rubocop".to_string(),
        type_check: String::new(),
        coverage: "bundle exec rspec --format documentation".to_string(),
        build: "bundle install".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn detect_priority_node_over_go() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        std::fs::write(dir.path().join("go.mod"), "module m").unwrap();
        assert_eq!(detect_project_type(dir.path()), ProjectType::Node);
    }

    #[test]
    fn detect_python_from_setup_py() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("setup.py"), "").unwrap();
        assert_eq!(detect_project_type(dir.path()), ProjectType::Python);
    }

    #[test]
    fn detect_other_when_no_markers() {
        let dir = TempDir::new().unwrap();
        assert_eq!(detect_project_type(dir.path()), ProjectType::Other);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("nope");
        assert!(discover_quality_commands(&gone, None).is_err());
    }

    #[test]
    fn node_scripts_map_to_npm_commands() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"scripts": {"test": "jest", "lint": "eslint .", "typecheck": "tsc", "build": "tsc -b"}}"#,
        )
        .unwrap();

        let commands = discover_quality_commands(dir.path(), None).unwrap();
        assert_eq!(commands.test, "npm test");
        assert_eq!(commands.lint, "npm run lint");
        assert_eq!(commands.type_check, "npm run typecheck");
        assert_eq!(commands.coverage, "");
        assert_eq!(commands.build, "npm run build");
    }

    #[test]
    fn malformed_package_json_discovers_nothing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("package.json"), "{oops").unwrap();
        let commands = discover_quality_commands(dir.path(), None).unwrap();
        assert_eq!(commands, QualityCommands::default());
    }

    #[test]
    fn python_markers_synthesize_commands() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("pyproject.toml"),
            "[tool.pytest.ini_options]\n[tool.ruff]\n[tool.mypy]\n",
        )
        .unwrap();

        let commands = discover_quality_commands(dir.path(), None).unwrap();
        assert_eq!(commands.test, "pytest tests/");
        assert_eq!(commands.coverage, "pytest tests/ --cov");
        assert_eq!(commands.lint, "ruff check src/ tests/");
        assert_eq!(commands.type_check, "mypy src/");
        assert_eq!(commands.build, "python -m build");
    }

    #[test]
    fn go_and_ruby_use_fixed_tables() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("go.mod"), "module m").unwrap();
        let commands = discover_quality_commands(dir.path(), None).unwrap();
        assert_eq!(commands.test, "go test ./...");
        assert_eq!(commands.type_check, "");

        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Gemfile"), "").unwrap();
        let commands = discover_quality_commands(dir.path(), None).unwrap();
        assert_eq!(commands.test, "bundle exec rspec");
        assert_eq!(commands.build, "bundle install");
    }

    #[test]
    fn plan_section_parses_labeled_commands() {
        let dir = TempDir::new().unwrap();
        let plan = dir.path().join("plan.md");
        std::fs::write(
            &plan,
            "# Plan\n\n## Quality Standards\n\n- Test command: pytest -x\n- lint command: ruff check .\n- Type command: mypy .\n\n## Next Section\n\n- Test command: should-not-be-seen\n",
        )
        .unwrap();

        let commands = parse_plan_quality_commands(&plan).unwrap();
        assert_eq!(commands.test, "pytest -x");
        assert_eq!(commands.lint, "ruff check .");
        assert_eq!(commands.type_check, "mypy .");
        assert_eq!(commands.coverage, "");
    }

    #[test]
    fn plan_without_section_yields_empty() {
        let dir = TempDir::new().unwrap();
        let plan = dir.path().join("plan.md");
        std::fs::write(&plan, "# Plan\n\nNothing here.\n").unwrap();
        let commands = parse_plan_quality_commands(&plan).unwrap();
        assert_eq!(commands, QualityCommands::default());
    }

    #[test]
    fn missing_plan_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(parse_plan_quality_commands(&dir.path().join("plan.md")).is_err());
    }

    #[test]
    fn plan_values_beat_auto_discovery() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"scripts": {"test": "jest", "build": "tsc -b"}}"#,
        )
        .unwrap();
        let plan = dir.path().join("plan.md");
        std::fs::write(
            &plan,
            "## Quality Standards\n- Test command: vitest run\n",
        )
        .unwrap();

        let commands = discover_quality_commands(dir.path(), Some(&plan)).unwrap();
        assert_eq!(commands.test, "vitest run", "plan wins over package.json");
        assert_eq!(commands.build, "npm run build", "auto fills the blanks");
    }
}
