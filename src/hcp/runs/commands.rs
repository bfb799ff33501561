//! Run command handler

use log::debug;

use crate::cli::RunArgs;
use crate::config::defaults;
use crate::hcp::runs::{plan_api_url, run_ui_url, RunRequest};
use crate::hcp::workspaces::resolve_workspace;
use crate::hcp::TfeClient;
use crate::ui::{create_spinner, finish_spinner};

/// Run the run command: queue a run and print where to follow it
pub async fn run_run_command(
    client: &TfeClient,
    args: &RunArgs,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = resolve_workspace(client, &args.org, &args.workspace, batch).await?;

    let request = RunRequest {
        message: args
            .message
            .clone()
            .unwrap_or_else(|| defaults::RUN_MESSAGE.to_string()),
        is_destroy: args.destroy,
        auto_apply: args.auto_apply,
    };
    debug!("Queuing run {:?} in {}", request, resolved.id());

    let spinner = create_spinner("Queuing run...", batch);
    let result = client.create_run(resolved.id(), &request).await;
    finish_spinner(spinner);
    let result = result?;

    let origin = client.web_origin();
    println!(
        "Run {} queued ({}): {}",
        result.id,
        result.status,
        request.message()
    );
    println!(
        "Run URL: {}",
        run_ui_url(&origin, &args.org, &args.workspace, &result.id)
    );
    if let Some(related) = &result.plan_related_url {
        println!("Plan API URL: {}", plan_api_url(&origin, related));
    }

    Ok(())
}
