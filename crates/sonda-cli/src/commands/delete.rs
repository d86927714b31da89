//! Delete command - remove a machine from the archive.

use super::get_database;
use anyhow::Result;
use colored::Colorize;
use sonda_core::MachineId;

pub fn run(id: MachineId) -> Result<()> {
    let db = get_database()?;

    // Fetch first so the message can name the machine
    let machine = db.get_machine(id)?;
    db.delete_machine(id)?;

    println!(
        "{} Deleted machine '{}' (id {}) and its {} variables.",
        "✓".green(),
        machine.name,
        id,
        machine.variables.len()
    );

    Ok(())
}
