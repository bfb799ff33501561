//! Workspace resolution utilities
//!
//! Every workspace-scoped command starts by turning `(organization, name)`
//! into the workspace ID. The lookup is done fresh on each invocation.

use log::debug;

use super::Workspace;
use crate::error::{Result, TfeError};
use crate::hcp::TfeClient;
use crate::ui::{create_spinner, finish_spinner};

/// Resolved workspace information
#[derive(Debug)]
pub struct ResolvedWorkspace {
    /// The workspace model
    pub workspace: Workspace,
    /// Raw JSON response for structured output
    pub raw: serde_json::Value,
    /// Organization name
    pub org: String,
}

impl ResolvedWorkspace {
    pub fn id(&self) -> &str {
        &self.workspace.id
    }
}

/// Resolve a workspace by name in an organization
///
/// A missing workspace is reported as a 404 API error.
pub async fn resolve_workspace(
    client: &TfeClient,
    org: &str,
    name: &str,
    batch: bool,
) -> Result<ResolvedWorkspace> {
    let spinner = create_spinner(&format!("Resolving workspace '{}'...", name), batch);
    let result = client.get_workspace_by_name(org, name).await;
    finish_spinner(spinner);

    match result? {
        Some((workspace, raw)) => {
            debug!("Resolved workspace {}/{} to {}", org, name, workspace.id);
            Ok(ResolvedWorkspace {
                workspace,
                raw,
                org: org.to_string(),
            })
        }
        None => Err(TfeError::Api {
            status: 404,
            message: format!("Workspace '{}' not found in organization '{}'", name, org),
        }),
    }
}
