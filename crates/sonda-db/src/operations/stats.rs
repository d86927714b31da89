//! Archive statistics.

use crate::database::Database;
use crate::error::DbResult;

/// Counts shown by the stats command.
#[derive(Debug, Clone, Default)]
pub struct ArchiveStats {
    pub total_machines: i64,
    pub total_variables: i64,
}

impl Database {
    /// Gather archive statistics.
    pub fn get_stats(&self) -> DbResult<ArchiveStats> {
        let conn = self.conn()?;

        let total_machines: i64 =
            conn.query_row("SELECT COUNT(*) FROM machines", [], |row| row.get(0))?;
        let total_variables: i64 =
            conn.query_row("SELECT COUNT(*) FROM variables", [], |row| row.get(0))?;

        Ok(ArchiveStats {
            total_machines,
            total_variables,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonda_core::{ExtractedRecord, Variable};

    #[test]
    fn test_stats_count_machines_and_variables() {
        let db = Database::open_in_memory().unwrap();

        let record = ExtractedRecord {
            protocol: "Profinet".into(),
            endpoint: String::new(),
            variables: vec![Variable {
                name: "Velocita".into(),
                address: "DB1.DBD0".into(),
                data_type: "Real".into(),
                access: "R".into(),
                description: "rpm".into(),
            }],
        };

        db.save_machine("m1", &record).unwrap();
        db.save_machine("m2", &record).unwrap();

        let stats = db.get_stats().unwrap();
        assert_eq!(stats.total_machines, 2);
        assert_eq!(stats.total_variables, 2);
    }
}
