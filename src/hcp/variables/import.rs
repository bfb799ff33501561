//! Variable file formats
//!
//! The flat variable file starts with a header line, followed by one
//! `name,value,category,sensitive` line per variable. Blank lines and lines
//! starting with `#` are ignored.

use crate::config::variables;
use crate::error::{Result, TfeError};

use super::models::{VariableCategory, VariableInput};

fn parse_error(line_no: usize, message: impl std::fmt::Display) -> TfeError {
    TfeError::Config(format!("variable file line {}: {}", line_no, message))
}

fn parse_line(line_no: usize, line: &str) -> Result<VariableInput> {
    // Commas may appear in the value: name is up to the first comma,
    // category and sensitive are the last two fields
    let (name, rest) = line
        .split_once(',')
        .ok_or_else(|| parse_error(line_no, "expected name,value,category,sensitive"))?;
    let mut tail = rest.rsplitn(3, ',');
    let (sensitive, category, value) = match (tail.next(), tail.next(), tail.next()) {
        (Some(s), Some(c), Some(v)) => (s, c, v),
        _ => {
            return Err(parse_error(
                line_no,
                "expected name,value,category,sensitive",
            ))
        }
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(parse_error(line_no, "empty variable name"));
    }
    let category: VariableCategory = category.parse().map_err(|e| parse_error(line_no, e))?;
    let sensitive = match sensitive.trim().to_lowercase().as_str() {
        "true" => true,
        "false" => false,
        other => {
            return Err(parse_error(
                line_no,
                format!("invalid sensitive flag '{}' (expected true or false)", other),
            ))
        }
    };

    Ok(VariableInput {
        key: name.to_string(),
        value: value.to_string(),
        category,
        sensitive,
        hcl: false,
        description: None,
    })
}

/// Parse a flat variable file
pub fn parse_var_file(content: &str) -> Result<Vec<VariableInput>> {
    content
        .lines()
        .enumerate()
        .skip(1)
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| parse_line(line_no, line))
        .collect()
}

/// Convert `key = "value"` tfvars lines into a flat variable file
///
/// Spaces and double quotes are removed; every variable becomes a
/// non-sensitive terraform variable.
pub fn convert_tfvars(content: &str) -> Result<String> {
    let mut out = String::from(variables::FILE_HEADER);
    out.push('\n');

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }
        let cleaned: String = line.chars().filter(|c| *c != ' ' && *c != '"').collect();
        let (key, value) = cleaned
            .split_once('=')
            .ok_or_else(|| TfeError::Config(format!("tfvars line {}: expected key = value", idx + 1)))?;
        if key.is_empty() {
            return Err(TfeError::Config(format!("tfvars line {}: empty key", idx + 1)));
        }
        out.push_str(&format!(
            "{},{},{},false\n",
            key,
            value,
            VariableCategory::Terraform
        ));
    }

    Ok(out)
}

/// Build the sensitive `GOOGLE_CREDENTIALS` env variable from a service account key
///
/// The key is re-serialized as compact JSON.
pub fn gcp_credentials_input(key_json: &str) -> Result<VariableInput> {
    let key: serde_json::Value = serde_json::from_str(key_json)
        .map_err(|e| TfeError::Config(format!("Invalid GCP credentials file: {}", e)))?;
    if !key.is_object() {
        return Err(TfeError::Config(
            "Invalid GCP credentials file: expected a JSON object".to_string(),
        ));
    }

    Ok(VariableInput {
        key: variables::GCP_CREDENTIALS_KEY.to_string(),
        value: serde_json::to_string(&key)?,
        category: VariableCategory::Env,
        sensitive: true,
        hcl: false,
        description: None,
    })
}
