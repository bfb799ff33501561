//! Workspace output formatter

use super::common::{escape_csv, print_json};
use crate::cli::OutputFormat;
use crate::hcp::{TfeResource, Workspace};
use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

/// Flattened workspace data for output
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceRow {
    #[serde(rename = "workspace_name")]
    pub name: String,
    #[serde(rename = "workspace_id")]
    pub id: String,
    pub execution_mode: String,
    pub auto_apply: bool,
    pub locked: bool,
    pub terraform_version: String,
    pub updated_at: String,
}

impl WorkspaceRow {
    /// Create a new workspace row
    pub fn new(workspace: &Workspace) -> Self {
        Self {
            name: workspace.name().to_string(),
            id: workspace.id.clone(),
            execution_mode: workspace.execution_mode().to_string(),
            auto_apply: workspace.auto_apply(),
            locked: workspace.is_locked(),
            terraform_version: workspace.terraform_version().to_string(),
            updated_at: workspace.updated_at().to_string(),
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Output workspaces in the specified format
pub fn output_workspaces(workspaces: &[Workspace], format: &OutputFormat) {
    let rows: Vec<WorkspaceRow> = workspaces.iter().map(WorkspaceRow::new).collect();
    match format {
        OutputFormat::Table => output_table(&rows),
        OutputFormat::Csv => output_csv(&rows),
        OutputFormat::Json => print_json(&rows),
    }
}

fn output_table(rows: &[WorkspaceRow]) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec![
        "Workspace Name",
        "Workspace ID",
        "Execution Mode",
        "Auto Apply",
        "Locked",
        "TF Version",
        "Updated At",
    ]);

    for ws in rows {
        table.add_row(vec![
            ws.name.clone(),
            ws.id.clone(),
            ws.execution_mode.clone(),
            yes_no(ws.auto_apply).to_string(),
            yes_no(ws.locked).to_string(),
            ws.terraform_version.clone(),
            ws.updated_at.clone(),
        ]);
    }

    println!();
    println!("{table}");
    println!("\nTotal: {} workspaces", rows.len());
}

fn output_csv(rows: &[WorkspaceRow]) {
    println!("workspace_name,workspace_id,execution_mode,auto_apply,locked,terraform_version,updated_at");
    for ws in rows {
        println!(
            "{},{},{},{},{},{},{}",
            escape_csv(&ws.name),
            escape_csv(&ws.id),
            escape_csv(&ws.execution_mode),
            ws.auto_apply,
            ws.locked,
            escape_csv(&ws.terraform_version),
            escape_csv(&ws.updated_at)
        );
    }
}
