//! Variable output formatter

use super::common::{escape_csv, print_json};
use crate::cli::OutputFormat;
use crate::hcp::variables::Variable;
use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

/// Variable as shown to the operator; sensitive values are masked
#[derive(Debug, Clone, Serialize)]
pub struct VariableRow {
    pub key: String,
    pub value: String,
    pub category: String,
    pub sensitive: bool,
    pub hcl: bool,
    pub id: String,
}

impl VariableRow {
    pub fn new(var: &Variable) -> Self {
        Self {
            key: var.key().to_string(),
            value: var.display_value().to_string(),
            category: var.attributes.category.to_string(),
            sensitive: var.attributes.sensitive,
            hcl: var.attributes.hcl,
            id: var.id.clone(),
        }
    }
}

/// Output variables in the specified format, sorted by key
pub fn output_variables(vars: &[Variable], format: &OutputFormat) {
    let mut rows: Vec<VariableRow> = vars.iter().map(VariableRow::new).collect();
    rows.sort_by(|a, b| a.key.cmp(&b.key));

    match format {
        OutputFormat::Table => output_table(&rows),
        OutputFormat::Csv => output_csv(&rows),
        OutputFormat::Json => print_json(&rows),
    }
}

fn output_table(rows: &[VariableRow]) {
    if rows.is_empty() {
        println!("\nNo variables.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["Key", "Value", "Category", "Sensitive", "HCL", "ID"]);
    for var in rows {
        table.add_row(vec![
            var.key.clone(),
            var.value.clone(),
            var.category.clone(),
            var.sensitive.to_string(),
            var.hcl.to_string(),
            var.id.clone(),
        ]);
    }

    println!();
    println!("{table}");
    println!("\nTotal: {} variables", rows.len());
}

fn output_csv(rows: &[VariableRow]) {
    println!("key,value,category,sensitive,hcl,id");
    for var in rows {
        println!(
            "{},{},{},{},{},{}",
            escape_csv(&var.key),
            escape_csv(&var.value),
            var.category,
            var.sensitive,
            var.hcl,
            var.id
        );
    }
}
