//! Common utilities for output formatters

use log::error;
use serde::Serialize;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize JSON output: {}", e),
    }
}

/// Output the "data" member of a raw API document as JSON
pub fn output_raw(raw: &serde_json::Value) {
    print_json(&raw["data"]);
}
