//! Show command - display one machine with its variable table.

use super::{get_database, print_variable_table};
use anyhow::Result;
use colored::Colorize;
use sonda_core::MachineId;

pub fn run(id: MachineId) -> Result<()> {
    let db = get_database()?;
    let machine = db.get_machine(id)?;

    println!("{}", machine.name.white().bold());
    println!("{}", "─".repeat(70));

    println!("  {}: {}", "Id".cyan(), machine.id);
    println!(
        "  {}: {}",
        "Protocol".cyan(),
        if machine.protocol.is_empty() { "-" } else { &machine.protocol }
    );
    println!(
        "  {}: {}",
        "Endpoint".cyan(),
        if machine.endpoint.is_empty() { "-" } else { &machine.endpoint }
    );
    println!(
        "  {}: {}",
        "Analyzed".cyan(),
        machine.created_at.format("%Y-%m-%d %H:%M:%S")
    );

    println!();
    println!(
        "{} ({} variables)",
        "Variable Table".white().bold(),
        machine.variables.len()
    );
    println!("{}", "─".repeat(70));
    print_variable_table(&machine.variables);

    Ok(())
}
