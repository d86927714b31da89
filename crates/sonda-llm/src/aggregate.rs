//! Merging of per-chunk extraction results.

use sonda_core::{ExtractedRecord, Variable};

/// Merge an ordered list of per-chunk results into one record.
///
/// Protocol and endpoint are chosen independently by frequency vote over the
/// non-empty values, ties broken by the first-encountered value among the
/// tied maximum. Variables are concatenated in encounter order, dropping any
/// variable structurally equal (all five fields) to one already kept.
pub fn aggregate(records: &[ExtractedRecord]) -> ExtractedRecord {
    ExtractedRecord {
        protocol: most_frequent(records.iter().map(|r| r.protocol.as_str())),
        endpoint: most_frequent(records.iter().map(|r| r.endpoint.as_str())),
        variables: merge_variables(records),
    }
}

/// Most frequent non-empty value, first-encountered winning ties. Empty
/// string when no record supplies a value.
fn most_frequent<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for value in values.filter(|v| !v.is_empty()) {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    // counts is in encounter order, so a strict comparison keeps the first
    // of any tied maximum
    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value.to_string()).unwrap_or_default()
}

fn merge_variables(records: &[ExtractedRecord]) -> Vec<Variable> {
    let mut merged: Vec<Variable> = Vec::new();

    for record in records {
        for var in &record.variables {
            if !merged.contains(var) {
                merged.push(var.clone());
            }
        }
    }

    merged
}
