//! Core domain types for Sonda.
//!
//! The wire format spoken with the model keeps the Italian key names the
//! extraction prompt asks for (`protocollo`, `variabili`, ...); the Rust
//! field names are English.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for persisted machines (SQLite rowid).
pub type MachineId = i64;

/// One row of a machine's communication variable table.
///
/// All fields are free-form strings in the model's own vocabulary; there is
/// no canonicalization. Two variables are equal only when all five fields
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    #[serde(rename = "nome", default)]
    pub name: String,

    #[serde(rename = "indirizzo", default)]
    pub address: String,

    #[serde(rename = "tipo_dato", default)]
    pub data_type: String,

    #[serde(rename = "accesso", default)]
    pub access: String,

    #[serde(rename = "descrizione", default)]
    pub description: String,
}

/// Structured extraction result for one text chunk (or one whole run, once
/// aggregated). Transient; never persisted as-is.
///
/// Keys missing from the model's JSON deserialize to empty values rather
/// than failing the chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    #[serde(rename = "protocollo", default)]
    pub protocol: String,

    #[serde(default)]
    pub endpoint: String,

    #[serde(rename = "variabili", default)]
    pub variables: Vec<Variable>,
}

impl ExtractedRecord {
    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.protocol.is_empty() && self.endpoint.is_empty() && self.variables.is_empty()
    }
}

/// A machine stored in the archive: one aggregated extraction result plus
/// the caller-supplied name. The id is assigned by the store at first save
/// and the record is immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    pub id: MachineId,
    pub name: String,
    pub protocol: String,
    pub endpoint: String,
    pub variables: Vec<Variable>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_round_trips_with_italian_keys() {
        let json = r#"{"nome":"Pressione","indirizzo":"40010","tipo_dato":"Float","accesso":"RW","descrizione":"bar"}"#;
        let var: Variable = serde_json::from_str(json).unwrap();
        assert_eq!(var.name, "Pressione");
        assert_eq!(var.data_type, "Float");

        let back = serde_json::to_value(&var).unwrap();
        assert_eq!(back["tipo_dato"], "Float");
        assert_eq!(back["descrizione"], "bar");
    }

    #[test]
    fn missing_keys_become_empty_values() {
        let record: ExtractedRecord = serde_json::from_str(r#"{"protocollo":"Modbus"}"#).unwrap();
        assert_eq!(record.protocol, "Modbus");
        assert_eq!(record.endpoint, "");
        assert!(record.variables.is_empty());

        let var: Variable = serde_json::from_str(r#"{"nome":"Temp"}"#).unwrap();
        assert_eq!(var.address, "");
    }

    #[test]
    fn variable_equality_is_full_field() {
        let a = Variable {
            name: "Pressione".into(),
            address: "40010".into(),
            data_type: "Float".into(),
            access: "RW".into(),
            description: "bar".into(),
        };
        let mut b = a.clone();
        assert_eq!(a, b);

        b.description = "mbar".into();
        assert_ne!(a, b);
    }
}
