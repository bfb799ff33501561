//! Configuration versions API operations

use log::debug;
use std::path::Path;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::{ApiListResponse, ApiResponse};
use crate::hcp::TfeClient;

use super::models::ConfigurationVersion;

/// Creation payload for a configuration version
pub fn configuration_version_payload(auto_queue_runs: bool) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "type": "configuration-versions",
            "attributes": {
                "auto-queue-runs": auto_queue_runs
            }
        }
    })
}

impl TfeClient {
    fn configuration_versions_path(workspace_id: &str) -> String {
        format!(
            "/{}/{}/{}",
            api::WORKSPACES,
            workspace_id,
            api::CONFIGURATION_VERSIONS
        )
    }

    /// Get configuration versions for a workspace
    ///
    /// # Arguments
    /// * `workspace_id` - The workspace ID (e.g., "ws-abc123")
    pub async fn get_configuration_versions(
        &self,
        workspace_id: &str,
    ) -> Result<Vec<ConfigurationVersion>> {
        let path = Self::configuration_versions_path(workspace_id);
        let error_context = format!(
            "list configuration versions for workspace '{}'",
            workspace_id
        );

        self.fetch_all_pages::<ConfigurationVersion, ApiListResponse<ConfigurationVersion>>(
            &path,
            &error_context,
        )
        .await
    }

    /// Create a new configuration version, returning it with its upload URL
    pub async fn create_configuration_version(
        &self,
        workspace_id: &str,
        auto_queue_runs: bool,
    ) -> Result<ConfigurationVersion> {
        let url = format!(
            "{}{}",
            self.base_url(),
            Self::configuration_versions_path(workspace_id)
        );
        debug!(
            "Creating configuration version (auto-queue-runs={}): {}",
            auto_queue_runs, url
        );

        let body = configuration_version_payload(auto_queue_runs);
        let response = self.post_json(&url, &body).send().await?;
        let created: ApiResponse<ConfigurationVersion> = self
            .parse_api_response(
                response,
                &format!(
                    "create configuration version for workspace '{}'",
                    workspace_id
                ),
            )
            .await?;

        debug!(
            "Created configuration version {} (status {}, auto-queue-runs={})",
            created.data.id,
            created.data.attributes.status,
            created.data.attributes.auto_queue_runs
        );
        Ok(created.data)
    }

    /// Upload an archive to a one-time upload URL
    ///
    /// The request carries only `Content-Type: application/octet-stream`;
    /// the URL itself authorizes the upload.
    pub async fn upload_configuration(
        &self,
        artifact_path: &Path,
        upload_url: &str,
    ) -> Result<String> {
        let read_error = |e: std::io::Error| TfeError::Io {
            message: format!(
                "Failed to read archive '{}': {}",
                artifact_path.display(),
                e
            ),
        };
        let file = tokio::fs::File::open(artifact_path)
            .await
            .map_err(read_error)?;
        let len = file.metadata().await.map_err(read_error)?.len();
        debug!(
            "Uploading {} bytes from {} to {}",
            len,
            artifact_path.display(),
            upload_url
        );

        let response = self
            .put_octet_stream(upload_url, reqwest::Body::from(file), len, artifact_path)
            .send()
            .await?;
        let response = self
            .ensure_success(response, "upload configuration archive")
            .await?;
        Ok(response.text().await?)
    }
}
