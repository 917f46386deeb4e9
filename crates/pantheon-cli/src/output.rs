use serde::Serialize;
use std::collections::BTreeMap;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a name → status map, flagging anything that isn't "OK".
pub fn print_status_map(title: &str, statuses: &BTreeMap<String, String>) {
    println!("{title}:");
    for (name, status) in statuses {
        let mark = if status == "OK" { "ok" } else { "!!" };
        println!("  {mark} {name}: {status}");
    }
}
