use anyhow::Context;
use pantheon_core::{agents, commands, hooks, io, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing pantheon in: {}", root.display());

    // 1. Ensure .claude/ exists
    let claude_dir = paths::claude_dir(root);
    if claude_dir.exists() {
        println!("  exists:  .claude/");
    } else {
        io::ensure_dir(&claude_dir).context("failed to create .claude/")?;
        println!("  created: .claude/");
    }

    // 2. Agents
    println!("\nInstalling agents:");
    let agent_results = agents::install_agents(root).context("failed to install agents")?;
    for (name, status) in &agent_results {
        println!("  {status}: .claude/agents/{name}.md");
    }

    // 3. Slash commands
    println!("\nInstalling commands:");
    let command_results = commands::install_commands(root).context("failed to install commands")?;
    for (name, ok) in &command_results {
        if *ok {
            println!("  installed: /pantheon:{name}");
        } else {
            println!("  failed:    /pantheon:{name}");
        }
    }

    // 4. Quality gate hooks
    println!("\nInstalling quality gate hooks:");
    hooks::install_hooks(root).context("failed to install hooks")?;
    let validation = hooks::validate_hook_installation(root);
    if validation.values().all(|s| s == "OK") {
        println!("  quality hooks installed");
    } else {
        println!("  quality hooks installed with warnings:");
        for (name, status) in validation.iter().filter(|(_, s)| *s != "OK") {
            println!("    {name}: {status}");
        }
    }

    println!("\nInitialization complete.");
    println!("Next: pantheon integrate (with Spec Kit) or pantheon quality generate");

    Ok(())
}
