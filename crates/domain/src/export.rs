//! Flat CSV export of workflow records.

use serde_json::Value;

/// One record flattened to `(dotted key, text)` columns.
pub type FlatRecord = Vec<(String, String)>;

/// Nested objects become dotted keys; arrays are joined with `", "`.
pub fn flatten_object(record: &Value) -> FlatRecord {
    let mut flat = FlatRecord::new();
    flatten_into(record, "", &mut flat);
    flat
}

fn flatten_into(value: &Value, prefix: &str, out: &mut FlatRecord) {
    let Value::Object(map) = value else {
        out.push((prefix.to_string(), cell_text(value)));
        return;
    };
    for (key, child) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match child {
            Value::Object(_) => flatten_into(child, &path, out),
            other => out.push((path, cell_text(other))),
        }
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// Header from the first record's keys, every cell quoted.
pub fn to_csv(records: &[FlatRecord]) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };
    let headers: Vec<&str> = first.iter().map(|(key, _)| key.as_str()).collect();
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(headers.iter().map(|h| quote(h)).collect::<Vec<_>>().join(","));
    for record in records {
        let row = headers
            .iter()
            .map(|header| {
                let cell = record
                    .iter()
                    .find(|(key, _)| key == header)
                    .map(|(_, text)| text.as_str())
                    .unwrap_or_default();
                quote(cell)
            })
            .collect::<Vec<_>>();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}
