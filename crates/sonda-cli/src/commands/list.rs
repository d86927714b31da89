//! List command - archive of analyzed machines.

use super::get_database;
use anyhow::Result;
use colored::Colorize;

pub fn run() -> Result<()> {
    let db = get_database()?;
    let machines = db.list_machines()?;

    if machines.is_empty() {
        println!(
            "{} No machines in the archive. Run 'sonda analyze <pdf> --name <machine>' first.",
            "Note:".yellow()
        );
        return Ok(());
    }

    println!("{}", "Machine Archive".cyan().bold());
    println!("{}", "─".repeat(70));

    for machine in &machines {
        println!(
            "{} {} {}",
            format!("[{}]", machine.id).dimmed(),
            machine.name.white().bold(),
            machine.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
        println!(
            "    {}: {}   {}: {}   {} variables",
            "Protocol".cyan(),
            if machine.protocol.is_empty() { "-" } else { &machine.protocol },
            "Endpoint".cyan(),
            if machine.endpoint.is_empty() { "-" } else { &machine.endpoint },
            machine.variables.len()
        );
    }

    println!();
    println!(
        "{}",
        format!(
            "{} machines. Use 'sonda show <id>' for the full variable table.",
            machines.len()
        )
        .dimmed()
    );

    Ok(())
}
