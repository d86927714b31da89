//! Export command - write a machine's variable table as CSV.

use super::get_database;
use anyhow::{Context, Result};
use colored::Colorize;
use sonda_core::{MachineId, Variable};
use std::path::PathBuf;

pub fn run(id: MachineId, output: Option<PathBuf>) -> Result<()> {
    let db = get_database()?;
    let machine = db.get_machine(id)?;

    let csv = variables_to_csv(&machine.variables);

    match output {
        Some(path) => {
            std::fs::write(&path, csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} Exported {} variables of '{}' to {}",
                "✓".green(),
                machine.variables.len(),
                machine.name,
                path.display()
            );
        }
        None => print!("{}", csv),
    }

    Ok(())
}

/// Render the variable table as CSV with a header row.
fn variables_to_csv(variables: &[Variable]) -> String {
    let mut out = String::from("name,address,data_type,access,description\n");

    for var in variables {
        let row = [
            &var.name,
            &var.address,
            &var.data_type,
            &var.access,
            &var.description,
        ]
        .map(|field| csv_field(field))
        .join(",");
        out.push_str(&row);
        out.push('\n');
    }

    out
}

/// Quote a field when it contains a comma, quote or newline.
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str, description: &str) -> Variable {
        Variable {
            name: name.into(),
            address: "40010".into(),
            data_type: "Float".into(),
            access: "RW".into(),
            description: description.into(),
        }
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let csv = variables_to_csv(&[var("Pressione", "bar")]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "name,address,data_type,access,description");
        assert_eq!(lines[1], "Pressione,40010,Float,RW,bar");
    }

    #[test]
    fn test_fields_with_commas_and_quotes_are_escaped() {
        let csv = variables_to_csv(&[var("Portata, max", "il valore \"nominale\"")]);
        assert!(csv.contains("\"Portata, max\""));
        assert!(csv.contains("\"il valore \"\"nominale\"\"\""));
    }

    #[test]
    fn test_empty_table_is_header_only() {
        assert_eq!(
            variables_to_csv(&[]),
            "name,address,data_type,access,description\n"
        );
    }
}
