//! Static content shipped with the installer: agent definitions, slash
//! commands, and hook script bodies. Hook scripts are opaque executables as
//! far as the rest of the crate is concerned — only their filenames matter.

pub const DEV_AGENT: &str = r#"---
name: dev
description: Implementation agent. Executes a single task with its context package and reports results.
tools: Read, Write, Edit, Bash, Glob, Grep
---

# DEV Agent

You implement exactly one task from the context package you receive.

## Workflow

1. Read the task ID, description, file paths, and acceptance criteria.
2. Implement the change, honoring the quality standards in the package
   (lint, type-check, and test commands).
3. Run the test command and fix failures before reporting.
4. Report: files touched, decisions made, and test results.

## Rules

- Do NOT create commits. The orchestrator commits after QA passes.
- Do NOT touch files outside the task's scope.
- If an acceptance criterion cannot be met, stop and report why.
"#;

pub const QA_AGENT: &str = r#"---
name: qa
description: Validation agent. Verifies a batch of completed tasks against the Definition of Done.
tools: Read, Bash, Glob, Grep
---

# QA Agent

You validate a batch of completed tasks and return a PASS/FAIL report.

## Checklist

- All tests pass (0 failures)
- Coverage meets the threshold from the quality standards
- No linting errors, no type errors
- No leftover debug output or unused imports
- Manual testing performed when the batch includes functional changes

## Report format

```
Status: PASS | FAIL
Tasks: [IDs validated]
Findings: [one bullet per issue, empty on PASS]
```

Do NOT fix issues yourself and do NOT create commits — report only.
"#;

pub const CONTEXTUALIZE_COMMAND: &str = r#"---
description: Discover project quality commands and generate .pantheon/quality-config.json
---

# /pantheon:contextualize

Inspect this project and generate its quality configuration.

1. Run `pantheon quality generate` (pass `--plan <path>` if a Spec Kit
   plan.md with a Quality Standards section exists).
2. Review `.pantheon/quality-config.json` and fill in any empty command
   strings the discovery could not infer.
3. Report the final command set back to the user.
"#;

pub const PHASE_GATE_HOOK: &str = "#!/bin/bash
# Quality gate: blocks phase transitions and commits until the current
# batch passes the commands in .pantheon/quality-config.json.
set -euo pipefail

CONFIG=\".pantheon/quality-config.json\"
[ -f \"$CONFIG\" ] || exit 0

for key in lint type_check test; do
  cmd=$(python3 -c \"import json,sys; print(json.load(open('$CONFIG'))['commands'].get('$key',''))\" 2>/dev/null || true)
  if [ -n \"$cmd\" ]; then
    echo \"[phase-gate] running: $cmd\" >&2
    eval \"$cmd\" || { echo \"[phase-gate] blocked: '$cmd' failed\" >&2; exit 2; }
  fi
done
exit 0
";

pub const ORCHESTRATOR_CODE_GATE_HOOK: &str = "#!/bin/bash
# Blocks the orchestrator from editing source files directly — code changes
# must go through DEV agents. Non-source paths pass through.
set -euo pipefail

INPUT=$(cat)
FILE=$(echo \"$INPUT\" | python3 -c \"import json,sys; print(json.load(sys.stdin).get('tool_input',{}).get('file_path',''))\" 2>/dev/null || true)

case \"$FILE\" in
  *.md|*.json|*.yaml|*.yml|\"\") exit 0 ;;
  *) echo \"[code-gate] blocked: delegate source edits to the DEV agent\" >&2; exit 2 ;;
esac
";
