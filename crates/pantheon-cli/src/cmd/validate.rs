use crate::output::{print_json, print_status_map};
use pantheon_core::spec_kit::{validate_integration, ValidationResult};
use pantheon_core::{agents, commands, hooks};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(serde::Serialize)]
struct ValidateOutput {
    integration: ValidationResult,
    agents: BTreeMap<String, String>,
    commands: BTreeMap<String, String>,
    hooks: BTreeMap<String, String>,
}

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let output = ValidateOutput {
        integration: validate_integration(root),
        agents: agents::validate_agent_installation(root),
        commands: commands::validate_command_installation(root),
        hooks: hooks::validate_hook_installation(root),
    };

    if json {
        return print_json(&output);
    }

    if output.integration.valid {
        println!("Spec Kit integration: OK");
    } else {
        println!("Spec Kit integration: INVALID");
        for error in &output.integration.errors {
            println!("  - {error}");
        }
    }
    println!();
    print_status_map("Agents", &output.agents);
    print_status_map("Commands", &output.commands);
    print_status_map("Hooks", &output.hooks);

    Ok(())
}
