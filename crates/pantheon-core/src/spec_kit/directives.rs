//! Fixed directive blocks inserted into Spec Kit command files, plus the
//! orchestration section appended to CLAUDE.md. Each block carries a unique
//! heading used both as the idempotence marker and for post-integration
//! validation. Marker detection is a plain substring search: editing the
//! heading text in a target file breaks re-detection, and that is the
//! documented behavior.

use crate::spec_kit::types::CommandRole;

pub const IMPLEMENT_MARKER: &str = "## Agent Integration";
pub const PLAN_MARKER: &str = "## Quality Standards (Required for DEV Integration)";
pub const TASKS_MARKER: &str = "## Task Format (Required for DEV Integration)";
pub const ORCHESTRATION_MARKER: &str = "## Multi-Agent Workflow Orchestration";

impl CommandRole {
    /// The directive block inserted into this role's command file.
    pub fn directive(self) -> &'static str {
        match self {
            CommandRole::Implement => IMPLEMENT_DIRECTIVE,
            CommandRole::Plan => PLAN_DIRECTIVE,
            CommandRole::Tasks => TASKS_DIRECTIVE,
        }
    }

    /// The marker substring proving the directive is present.
    pub fn marker(self) -> &'static str {
        match self {
            CommandRole::Implement => IMPLEMENT_MARKER,
            CommandRole::Plan => PLAN_MARKER,
            CommandRole::Tasks => TASKS_MARKER,
        }
    }
}

pub const IMPLEMENT_DIRECTIVE: &str = r#"## Agent Integration

**Multi-Agent Workflow**: Task execution uses DEV and QA agents with quality gates.

### DEV Agent Delegation

When executing tasks:
1. For each task in tasks.md, prepare a context package containing:
   - Task ID, description, and file paths
   - Relevant spec requirements (FR-XXX references)
   - Quality standards from plan.md (lint/type/test commands)
   - Subtasks as acceptance criteria
   - Tech stack constraints

2. Invoke DEV sub-agent using Task tool:
   ```
   Use Task tool:
     subagent_type: "dev"
     description: "Implement [Task ID]"
     prompt: [context package from above]
   ```

3. Process DEV results:
   - If success: mark task complete, log decisions, continue
   - If failure: halt, report status, wait for user

### Parallel Execution

For tasks marked [P] in tasks.md (parallel-safe):
- Invoke up to 3 DEV agents simultaneously in a SINGLE message
- Use multiple Task tool calls in one message
- Wait for all agents to complete before proceeding

### QA Validation

After completing a batch of related tasks:
1. Prepare QA context package containing:
   - List of completed task IDs
   - Quality standards from plan.md
   - Definition of Done checklist
   - Manual testing requirements (if functional changes)

2. Invoke QA sub-agent using Task tool:
   ```
   Use Task tool:
     subagent_type: "qa"
     description: "Validate batch: [Task IDs]"
     prompt: [QA context package from above]
   ```

3. Process QA report:
   - If PASS: create commits for validated tasks
   - If FAIL: reinvoke DEV agents to fix issues, then re-validate

### Commit Strategy

- Commits created ONLY after QA PASS
- Orchestrator creates commits (DEV/QA agents do NOT commit)
- Atomic commits per task or logical batch
- Include task IDs and quality metrics in commit message

See `.claude/agents/dev.md` and `.claude/agents/qa.md` for agent workflows.

---
"#;

pub const PLAN_DIRECTIVE: &str = r#"## Quality Standards (Required for DEV Integration)

Include in plan.md output:
- Lint command (e.g., `npm run lint`)
- Type check command (e.g., `tsc --noEmit`)
- Test command (e.g., `npm test`)
- Coverage requirement (e.g., 80%)

If commands cannot be auto-discovered, mark as "CLARIFICATION REQUIRED".

---
"#;

pub const TASKS_DIRECTIVE: &str = r#"## Task Format (Required for DEV Integration)

Each task should include subtasks as acceptance criteria:

**T001** [Task Description] (`path/to/file.ext`)
- [ ] Subtask 1: [Specific acceptance criterion]
- [ ] Subtask 2: [Specific acceptance criterion]
- Dependencies: [Task IDs or "None"]
- Implements: [FR-XXX references]

---
"#;

/// Appended to the project's CLAUDE.md. Starts with a newline so it can be
/// appended directly after `content.trim_end()`.
pub const ORCHESTRATION_SECTION: &str = r#"
## Multi-Agent Workflow Orchestration

### Overview

Pantheon uses a multi-agent architecture with DEV and QA agents for
quality-first development. As the orchestrator, you coordinate task execution,
quality validation, and commits.

### Parallel Execution Strategy

**When to use parallel execution**:
- Tasks marked `[P]` in tasks.md (parallel-safe)
- Tasks affecting different files with no shared state
- Maximum 3 DEV agents running simultaneously

**Important**: ALL parallel invocations MUST be in a SINGLE message.
Do NOT send separate messages.

### DEV Agent Context Package

When invoking a DEV agent, provide complete context: task ID, description,
file paths, acceptance criteria from tasks.md subtasks, quality standards
from plan.md (test/lint/type commands and coverage threshold), related
FR-XXX requirements, and tech stack constraints.

### QA Validation Workflow

Invoke the QA agent after completing a batch of related tasks, before
creating commits, and at phase boundaries. The QA context package lists the
tasks to validate, the quality standards, and the Definition of Done:

- [ ] All tests pass (0 failures)
- [ ] Coverage meets the configured branch threshold
- [ ] No linting errors
- [ ] No type errors
- [ ] No code smells (console.log, TODO, unused imports)
- [ ] Manual testing passed (if functional changes)

**Processing the QA report**:
- If `Status: PASS`: create commits for validated tasks
- If `Status: FAIL`: reinvoke DEV agents to fix issues, then re-validate
- Maximum 2-3 rework cycles before escalating to the user

### Phase Gate Checkpoints

At phase boundaries, generate a completion report (tasks done, quality
metrics, commits created) and wait for user approval before proceeding.

### Commit Strategy

**CRITICAL**: Commits are created ONLY by the orchestrator, NEVER by agents.

Commit only after QA PASS, atomically per task or logical batch, and include
task IDs and quality metrics in the commit message.
"#;
