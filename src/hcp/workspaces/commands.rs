//! Workspace command handlers

use log::debug;

use super::api::workspace_create_payload;
use super::resolver::resolve_workspace;
use crate::cli::{OutputFormat, WsCreateArgs, WsDeleteArgs, WsListArgs};
use crate::error::TfeError;
use crate::hcp::TfeClient;
use crate::output::{output_raw, output_variables, output_workspaces};
use crate::ui::{confirm_action, create_spinner, finish_spinner};

/// List workspaces of an organization, or show one with its variables
pub async fn run_ws_list_command(
    client: &TfeClient,
    args: &WsListArgs,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(name) = &args.name {
        let resolved = resolve_workspace(client, &args.org, name, batch).await?;
        let spinner = create_spinner("Fetching variables...", batch);
        let vars = client.get_variables(resolved.id()).await;
        finish_spinner(spinner);
        let vars = vars?;

        match args.output {
            OutputFormat::Json => {
                let mut doc = resolved.raw.clone();
                doc["data"]["variables"] = serde_json::to_value(
                    vars.iter()
                        .map(|v| {
                            serde_json::json!({
                                "key": v.key(),
                                "value": v.display_value(),
                                "category": v.attributes.category,
                                "sensitive": v.attributes.sensitive
                            })
                        })
                        .collect::<Vec<_>>(),
                )?;
                output_raw(&doc);
            }
            format => {
                output_workspaces(std::slice::from_ref(&resolved.workspace), &format);
                output_variables(&vars, &format);
            }
        }
        return Ok(());
    }

    let spinner = create_spinner(
        &format!("Fetching workspaces for '{}'...", args.org),
        batch,
    );
    let workspaces = client.get_workspaces(&args.org).await;
    finish_spinner(spinner);
    let mut workspaces = workspaces?;
    debug!("Found {} workspaces in '{}'", workspaces.len(), args.org);

    workspaces.sort_by(|a, b| a.attributes.name.cmp(&b.attributes.name));
    output_workspaces(&workspaces, &args.output);
    Ok(())
}

/// Create a workspace by name or from a JSON:API payload file
pub async fn run_ws_create_command(
    client: &TfeClient,
    args: &WsCreateArgs,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload: serde_json::Value = match (&args.json, &args.name) {
        (Some(file), _) => {
            let content = std::fs::read_to_string(file).map_err(|e| TfeError::Io {
                message: format!("Failed to read '{}': {}", file.display(), e),
            })?;
            serde_json::from_str(&content).map_err(|e| {
                TfeError::Config(format!("Invalid payload in '{}': {}", file.display(), e))
            })?
        }
        (None, Some(name)) => workspace_create_payload(name),
        (None, None) => {
            return Err(TfeError::Config(
                "A workspace name or --json payload file is required".to_string(),
            )
            .into())
        }
    };

    let spinner = create_spinner("Creating workspace...", batch);
    let created = client.create_workspace(&args.org, &payload).await;
    finish_spinner(spinner);
    let created = created?;

    println!(
        "Created workspace '{}' ({}) in '{}'",
        created["data"]["attributes"]["name"].as_str().unwrap_or(""),
        created["data"]["id"].as_str().unwrap_or(""),
        args.org
    );
    Ok(())
}

/// Delete a workspace after confirmation
pub async fn run_ws_delete_command(
    client: &TfeClient,
    args: &WsDeleteArgs,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = resolve_workspace(client, &args.org, &args.name, batch).await?;

    let prompt = format!(
        "Delete workspace '{}/{}' ({})? This cannot be undone",
        args.org,
        args.name,
        resolved.id()
    );
    if !confirm_action(&prompt, args.yes || batch)? {
        return Err(TfeError::UserCancelled.into());
    }

    client.delete_workspace(resolved.id()).await?;
    println!("Deleted workspace '{}/{}'", args.org, args.name);
    Ok(())
}
