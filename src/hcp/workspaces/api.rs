//! Workspace API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::Workspace;

/// Default creation payload for a workspace with only a name
pub fn workspace_create_payload(name: &str) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "type": "workspaces",
            "attributes": {
                "name": name
            }
        }
    })
}

impl TfeClient {
    /// Get all workspaces of an organization
    pub async fn get_workspaces(&self, org: &str) -> Result<Vec<Workspace>> {
        let path = format!(
            "/{}/{}/{}",
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES
        );
        let error_context = format!("list workspaces for organization '{}'", org);

        self.fetch_all_pages::<Workspace, ApiListResponse<Workspace>>(&path, &error_context)
            .await
    }

    /// Get a single workspace by name (requires org)
    /// Returns both the typed model and raw JSON for flexible output
    pub async fn get_workspace_by_name(
        &self,
        org: &str,
        name: &str,
    ) -> Result<Option<(Workspace, serde_json::Value)>> {
        let path = format!(
            "/{}/{}/{}/{}",
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES,
            urlencoding::encode(name)
        );
        self.fetch_resource_by_path::<Workspace>(&path, &format!("workspace '{}'", name))
            .await
    }

    /// Create a workspace from a JSON:API payload
    ///
    /// Returns the raw response document.
    pub async fn create_workspace(
        &self,
        org: &str,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES
        );
        debug!("Creating workspace in organization '{}'", org);

        let response = self.post_json(&url, payload).send().await?;
        self.parse_api_response(response, &format!("create workspace in '{}'", org))
            .await
    }

    /// Delete a workspace by ID
    pub async fn delete_workspace(&self, workspace_id: &str) -> Result<()> {
        let url = format!("{}/{}/{}", self.base_url(), api::WORKSPACES, workspace_id);
        debug!("Deleting workspace: {}", url);

        let response = self.delete(&url).send().await?;
        self.ensure_success(response, &format!("delete workspace '{}'", workspace_id))
            .await?;
        Ok(())
    }
}
