//! Variable command handlers

use log::{debug, warn};

use crate::cli::{
    VarConvertArgs, VarCopyArgs, VarDeleteArgs, VarGcpArgs, VarImportArgs, VarListArgs,
    VarSetArgs,
};
use crate::error::TfeError;
use crate::hcp::reconcile::reconcile;
use crate::hcp::workspaces::resolve_workspace;
use crate::hcp::TfeClient;
use crate::output::output_variables;
use crate::ui::{create_spinner, finish_spinner};

use super::import::{convert_tfvars, gcp_credentials_input, parse_var_file};
use super::models::{VariableCategory, VariableInput};

fn read_file(path: &std::path::Path) -> Result<String, TfeError> {
    std::fs::read_to_string(path).map_err(|e| TfeError::Io {
        message: format!("Failed to read '{}': {}", path.display(), e),
    })
}

/// Create or update each input in the workspace
///
/// The current variables are listed once up front.
async fn apply_variables(
    client: &TfeClient,
    workspace_id: &str,
    inputs: &[VariableInput],
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let existing = client.get_variables(workspace_id).await?;
    debug!(
        "Applying {} variables to {} ({} existing)",
        inputs.len(),
        workspace_id,
        existing.len()
    );

    for input in inputs {
        let spinner = create_spinner(&format!("Setting '{}'...", input.key), batch);
        let outcome = client.upsert_variable(workspace_id, &existing, input).await;
        finish_spinner(spinner);
        let outcome = outcome?;
        println!("{} variable '{}'", outcome.verb(), outcome.variable().key());
    }

    Ok(())
}

/// List the variables of a workspace
pub async fn run_var_list_command(
    client: &TfeClient,
    args: &VarListArgs,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = resolve_workspace(client, &args.org, &args.workspace, batch).await?;

    let spinner = create_spinner("Fetching variables...", batch);
    let vars = client.get_variables(resolved.id()).await;
    finish_spinner(spinner);

    output_variables(&vars?, &args.output);
    Ok(())
}

/// Set one or more `KEY VALUE` pairs
pub async fn run_var_set_command(
    client: &TfeClient,
    args: &VarSetArgs,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let category = if args.env {
        VariableCategory::Env
    } else {
        VariableCategory::Terraform
    };
    let inputs: Vec<VariableInput> = args
        .vars
        .chunks_exact(2)
        .map(|pair| VariableInput {
            key: pair[0].clone(),
            value: pair[1].clone(),
            category,
            sensitive: args.sensitive,
            hcl: args.hcl,
            description: args.description.clone(),
        })
        .collect();

    let resolved = resolve_workspace(client, &args.org, &args.workspace, batch).await?;
    apply_variables(client, resolved.id(), &inputs, batch).await
}

/// Delete variables by key; unknown keys are skipped
pub async fn run_var_delete_command(
    client: &TfeClient,
    args: &VarDeleteArgs,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = resolve_workspace(client, &args.org, &args.workspace, batch).await?;
    let existing = client.get_variables(resolved.id()).await?;

    for key in &args.keys {
        match reconcile(&existing, key).existing() {
            Some(var) => {
                client.delete_variable(resolved.id(), &var.id).await?;
                println!("Deleted variable '{}'", key);
            }
            None => warn!(
                "Variable '{}' not found in workspace '{}', skipping",
                key, args.workspace
            ),
        }
    }

    Ok(())
}

/// Import variables from a flat variable file
pub async fn run_var_import_command(
    client: &TfeClient,
    args: &VarImportArgs,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Parse fully before touching the workspace
    let inputs = parse_var_file(&read_file(&args.file)?)?;
    if inputs.is_empty() {
        println!("No variables found in {}", args.file.display());
        return Ok(());
    }

    let resolved = resolve_workspace(client, &args.org, &args.workspace, batch).await?;
    apply_variables(client, resolved.id(), &inputs, batch).await
}

/// Store a GCP service account key as `GOOGLE_CREDENTIALS`
pub async fn run_var_gcp_command(
    client: &TfeClient,
    args: &VarGcpArgs,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = gcp_credentials_input(&read_file(&args.key_file)?)?;
    let resolved = resolve_workspace(client, &args.org, &args.workspace, batch).await?;
    apply_variables(client, resolved.id(), &[input], batch).await
}

/// Copy all readable variables from one workspace to another
pub async fn run_var_copy_command(
    client: &TfeClient,
    args: &VarCopyArgs,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let target_org = args.target_org.as_deref().unwrap_or(&args.org);
    let source = resolve_workspace(client, &args.org, &args.source, batch).await?;
    let target = resolve_workspace(client, target_org, &args.target, batch).await?;

    let vars = client.get_variables(source.id()).await?;
    let mut inputs = Vec::with_capacity(vars.len());
    for var in &vars {
        match var.to_input() {
            Some(input) => inputs.push(input),
            None => warn!("Skipping sensitive variable '{}'", var.key()),
        }
    }

    apply_variables(client, target.id(), &inputs, batch).await?;
    println!(
        "Copied {} of {} variables from {}/{} to {}/{}",
        inputs.len(),
        vars.len(),
        args.org,
        args.source,
        target_org,
        args.target
    );
    Ok(())
}

/// Convert a tfvars file into a flat variable file
pub fn run_var_convert_command(args: &VarConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let converted = convert_tfvars(&read_file(&args.input)?)?;
    std::fs::write(&args.output, converted).map_err(|e| TfeError::Io {
        message: format!("Failed to write '{}': {}", args.output.display(), e),
    })?;
    println!("Wrote {}", args.output.display());
    Ok(())
}
