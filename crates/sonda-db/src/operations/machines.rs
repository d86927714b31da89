//! Machine CRUD operations.

use crate::database::Database;
use crate::error::{DbError, DbResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use sonda_core::{ExtractedRecord, Machine, MachineId, Variable};
use tracing::debug;

impl Database {
    /// Persist one aggregated extraction result under the given machine name.
    ///
    /// The machine row and all its variable rows are written in a single
    /// transaction, so a failure mid-insert leaves no orphaned machine.
    /// Returns the id assigned to the new machine.
    pub fn save_machine(&self, name: &str, record: &ExtractedRecord) -> DbResult<MachineId> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO machines (name, protocol, endpoint, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![name, record.protocol, record.endpoint, Utc::now().to_rfc3339()],
        )?;
        let machine_id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(
                "INSERT INTO variables (machine_id, name, address, data_type, access, description)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for var in &record.variables {
                stmt.execute(params![
                    machine_id,
                    var.name,
                    var.address,
                    var.data_type,
                    var.access,
                    var.description,
                ])?;
            }
        }

        tx.commit()?;
        debug!(
            "Saved machine '{}' as id {} with {} variables",
            name,
            machine_id,
            record.variables.len()
        );

        Ok(machine_id)
    }

    /// Get a machine and its full variable table by id.
    pub fn get_machine(&self, id: MachineId) -> DbResult<Machine> {
        let conn = self.conn()?;

        let mut machine = conn
            .query_row(
                "SELECT id, name, protocol, endpoint, created_at FROM machines WHERE id = ?1",
                params![id],
                row_to_machine,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => {
                    DbError::NotFound(format!("Machine not found: {}", id))
                }
                _ => DbError::from(e),
            })?;

        machine.variables = load_variables(&conn, id)?;
        Ok(machine)
    }

    /// List all machines (newest first), each with its variable table.
    pub fn list_machines(&self) -> DbResult<Vec<Machine>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, protocol, endpoint, created_at FROM machines ORDER BY id DESC",
        )?;
        let mut machines = stmt
            .query_map([], row_to_machine)?
            .collect::<Result<Vec<_>, _>>()?;

        for machine in &mut machines {
            machine.variables = load_variables(&conn, machine.id)?;
        }

        Ok(machines)
    }

    /// Delete a machine by id. Variable rows go with it (cascade).
    pub fn delete_machine(&self, id: MachineId) -> DbResult<()> {
        let conn = self.conn()?;
        let rows = conn.execute("DELETE FROM machines WHERE id = ?1", params![id])?;

        if rows == 0 {
            return Err(DbError::NotFound(format!("Machine not found: {}", id)));
        }

        Ok(())
    }
}

fn row_to_machine(row: &rusqlite::Row<'_>) -> rusqlite::Result<Machine> {
    let created_at_str: String = row.get(4)?;

    Ok(Machine {
        id: row.get(0)?,
        name: row.get(1)?,
        protocol: row.get(2)?,
        endpoint: row.get(3)?,
        variables: Vec::new(),
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

/// Variable rows in insertion order for one machine.
fn load_variables(conn: &Connection, machine_id: MachineId) -> DbResult<Vec<Variable>> {
    let mut stmt = conn.prepare(
        "SELECT name, address, data_type, access, description
         FROM variables WHERE machine_id = ?1 ORDER BY id",
    )?;

    let variables = stmt
        .query_map(params![machine_id], |row| {
            Ok(Variable {
                name: row.get(0)?,
                address: row.get(1)?,
                data_type: row.get(2)?,
                access: row.get(3)?,
                description: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(variables)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ExtractedRecord {
        ExtractedRecord {
            protocol: "Modbus TCP".into(),
            endpoint: "192.168.1.10:502".into(),
            variables: vec![
                Variable {
                    name: "Pressione di iniezione".into(),
                    address: "Registro 40010".into(),
                    data_type: "Float".into(),
                    access: "R".into(),
                    description: "bar, 0-250".into(),
                },
                Variable {
                    name: "Temperatura ugello".into(),
                    address: "Registro 40012".into(),
                    data_type: "Integer".into(),
                    access: "RW".into(),
                    description: "Gradi C".into(),
                },
                Variable {
                    name: "Stato ciclo".into(),
                    address: "Coil 12".into(),
                    data_type: "Boolean".into(),
                    access: "R".into(),
                    description: String::new(),
                },
            ],
        }
    }

    #[test]
    fn test_save_and_get_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let record = sample_record();

        let id = db.save_machine("Pressa 01", &record).unwrap();
        let machine = db.get_machine(id).unwrap();

        assert_eq!(machine.id, id);
        assert_eq!(machine.name, "Pressa 01");
        assert_eq!(machine.protocol, "Modbus TCP");
        assert_eq!(machine.endpoint, "192.168.1.10:502");
        // Same variables, field for field, in insertion order
        assert_eq!(machine.variables, record.variables);
    }

    #[test]
    fn test_ids_are_assigned_once_and_unique() {
        let db = Database::open_in_memory().unwrap();
        let record = sample_record();

        let first = db.save_machine("Pressa 01", &record).unwrap();
        let second = db.save_machine("Pressa 02", &record).unwrap();

        assert_ne!(first, second);
        assert_eq!(db.list_machines().unwrap().len(), 2);
    }

    #[test]
    fn test_list_is_newest_first() {
        let db = Database::open_in_memory().unwrap();
        let record = sample_record();

        db.save_machine("alpha", &record).unwrap();
        db.save_machine("beta", &record).unwrap();

        let machines = db.list_machines().unwrap();
        assert_eq!(machines[0].name, "beta");
        assert_eq!(machines[1].name, "alpha");
    }

    #[test]
    fn test_get_missing_machine_is_not_found() {
        let db = Database::open_in_memory().unwrap();
        let err = db.get_machine(999).unwrap_err();
        assert!(matches!(err, DbError::NotFound(_)));
    }

    #[test]
    fn test_delete_cascades_to_variables() {
        let db = Database::open_in_memory().unwrap();
        let id = db.save_machine("Pressa 01", &sample_record()).unwrap();

        db.delete_machine(id).unwrap();

        assert!(matches!(db.get_machine(id), Err(DbError::NotFound(_))));

        // No orphaned variable rows
        let conn = db.conn().unwrap();
        let orphans: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM variables WHERE machine_id = ?1",
                params![id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[test]
    fn test_machine_with_no_variables() {
        let db = Database::open_in_memory().unwrap();
        let record = ExtractedRecord {
            protocol: "OPC UA".into(),
            endpoint: "opc.tcp://10.0.0.5:4840".into(),
            variables: vec![],
        };

        let id = db.save_machine("Tornio 7", &record).unwrap();
        let machine = db.get_machine(id).unwrap();
        assert!(machine.variables.is_empty());
    }
}
