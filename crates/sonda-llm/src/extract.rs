//! Best-effort JSON extraction from free-form model output.

use sonda_core::ExtractedRecord;
use tracing::debug;

/// Scrape the first parseable JSON object out of a raw model response.
///
/// Scans from the first `{` and tries each following `}` until a slice
/// parses as JSON; the first success wins. Returns `None` when the response
/// holds no such object, which the pipeline treats as a skipped chunk.
///
/// Deliberately best-effort: model output is not contractually well-formed,
/// and a response whose leading brace opens something that never parses
/// (explanatory braces, truncated JSON) fails the whole chunk rather than
/// hunting for later objects.
pub fn extract_record(raw: &str) -> Option<ExtractedRecord> {
    let start = raw.find('{')?;
    let tail = &raw[start..];

    for (idx, ch) in tail.char_indices() {
        if ch != '}' {
            continue;
        }
        let candidate = &tail[..idx + 1];
        match serde_json::from_str::<ExtractedRecord>(candidate) {
            Ok(record) => return Some(record),
            Err(_) => continue,
        }
    }

    debug!("No parseable JSON object in a {} character response", raw.chars().count());
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_json_at_all() {
        assert!(extract_record("not json at all").is_none());
        assert!(extract_record("").is_none());
    }

    #[test]
    fn test_object_with_surrounding_noise() {
        let raw = r#"prefix {"protocollo":"Modbus","endpoint":"","variabili":[]} suffix"#;
        let record = extract_record(raw).unwrap();
        assert_eq!(record.protocol, "Modbus");
        assert_eq!(record.endpoint, "");
        assert!(record.variables.is_empty());
    }

    #[test]
    fn test_nested_variable_objects_parse() {
        let raw = r#"Ecco il risultato:
{"protocollo":"OPC UA","endpoint":"opc.tcp://192.168.0.5:4840","variabili":[
  {"nome":"Pressione","indirizzo":"NodeID 102","tipo_dato":"Float","accesso":"R","descrizione":"bar"},
  {"nome":"Stato","indirizzo":"NodeID 103","tipo_dato":"Boolean","accesso":"R","descrizione":""}
]}"#;
        let record = extract_record(raw).unwrap();
        assert_eq!(record.protocol, "OPC UA");
        assert_eq!(record.variables.len(), 2);
        assert_eq!(record.variables[0].address, "NodeID 102");
    }

    #[test]
    fn test_missing_keys_are_accepted() {
        let record = extract_record(r#"{"protocollo":"Modbus RTU"}"#).unwrap();
        assert_eq!(record.protocol, "Modbus RTU");
        assert_eq!(record.endpoint, "");
        assert!(record.variables.is_empty());
    }

    #[test]
    fn test_markdown_fenced_json() {
        let raw = "```json\n{\"protocollo\":\"Euromap 63\",\"endpoint\":\"\",\"variabili\":[]}\n```";
        let record = extract_record(raw).unwrap();
        assert_eq!(record.protocol, "Euromap 63");
    }

    #[test]
    fn test_leading_unparseable_brace_fails_the_chunk() {
        // The scan never moves past the first `{`; a response opening with a
        // brace that closes into nothing parseable yields nothing.
        let raw = r#"{questo non è JSON} {"protocollo":"Modbus","endpoint":"","variabili":[]}"#;
        assert!(extract_record(raw).is_none());
    }

    #[test]
    fn test_truncated_json_yields_nothing() {
        let raw = r#"{"protocollo":"Modbus","variabili":[{"nome":"Pres"#;
        assert!(extract_record(raw).is_none());
    }
}
