//! Run API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::ApiResponse;
use crate::hcp::TfeClient;

use super::models::{Run, RunRequest, RunResult};

/// JSON:API body for queuing a run in a workspace
pub fn run_request_body(workspace_id: &str, request: &RunRequest) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "type": "runs",
            "attributes": {
                "message": request.message(),
                "is-destroy": request.is_destroy,
                "auto-apply": request.auto_apply
            },
            "relationships": {
                "workspace": {
                    "data": {
                        "type": "workspaces",
                        "id": workspace_id
                    }
                }
            }
        }
    })
}

impl TfeClient {
    /// Queue a run in a workspace
    pub async fn create_run(&self, workspace_id: &str, request: &RunRequest) -> Result<RunResult> {
        let url = format!("{}/{}", self.base_url(), api::RUNS);
        debug!(
            "Creating run for workspace {} (destroy={}, auto-apply={})",
            workspace_id, request.is_destroy, request.auto_apply
        );

        let body = run_request_body(workspace_id, request);
        let response = self.post_json(&url, &body).send().await?;
        let created: ApiResponse<Run> = self
            .parse_api_response(
                response,
                &format!("create run for workspace '{}'", workspace_id),
            )
            .await?;

        debug!(
            "Created run {} with status {}",
            created.data.id,
            created.data.status()
        );
        Ok(RunResult::from(&created.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TfeError;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn destroy_request() -> RunRequest {
        RunRequest {
            message: "M".to_string(),
            is_destroy: true,
            auto_apply: false,
        }
    }

    #[test]
    fn test_run_request_body() {
        let body = run_request_body("ws-1", &destroy_request());
        assert_eq!(body["data"]["type"], "runs");
        assert_eq!(body["data"]["attributes"]["message"], "Destroying... M");
        assert_eq!(body["data"]["attributes"]["is-destroy"], true);
        assert_eq!(body["data"]["attributes"]["auto-apply"], false);
        assert_eq!(
            body["data"]["relationships"]["workspace"]["data"],
            serde_json::json!({"type": "workspaces", "id": "ws-1"})
        );
    }

    #[tokio::test]
    async fn test_create_run_success() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/runs"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(run_request_body("ws-1", &destroy_request())))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": {
                    "id": "run-new",
                    "type": "runs",
                    "attributes": {"status": "pending", "is-destroy": true},
                    "relationships": {
                        "plan": {
                            "data": {"id": "plan-1", "type": "plans"},
                            "links": {"related": "/api/v2/runs/run-new/plan"}
                        }
                    }
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client.create_run("ws-1", &destroy_request()).await.unwrap();

        assert_eq!(result.id, "run-new");
        assert_eq!(result.status, "pending");
        assert_eq!(
            result.plan_related_url.as_deref(),
            Some("/api/v2/runs/run-new/plan")
        );
    }

    #[tokio::test]
    async fn test_create_run_rejected() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/runs"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_string(r#"{"errors":[{"detail":"no configuration"}]}"#),
            )
            .mount(&mock_server)
            .await;

        match client
            .create_run("ws-1", &destroy_request())
            .await
            .unwrap_err()
        {
            TfeError::Api { status, message } => {
                assert_eq!(status, 422);
                assert!(message.contains("no configuration"));
            }
            other => panic!("Expected TfeError::Api, got {:?}", other),
        }
    }
}
