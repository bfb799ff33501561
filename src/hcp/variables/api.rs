//! Workspace variable API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::reconcile::{reconcile, Reconcile};
use crate::hcp::traits::{ApiListResponse, ApiResponse};
use crate::hcp::TfeClient;

use super::models::{Variable, VariableInput};

/// What `upsert_variable` did
#[derive(Debug)]
pub enum UpsertOutcome {
    Created(Variable),
    Updated(Variable),
}

impl UpsertOutcome {
    pub fn variable(&self) -> &Variable {
        match self {
            UpsertOutcome::Created(v) | UpsertOutcome::Updated(v) => v,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            UpsertOutcome::Created(_) => "Created",
            UpsertOutcome::Updated(_) => "Updated",
        }
    }
}

impl TfeClient {
    fn vars_url(&self, workspace_id: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::WORKSPACES,
            workspace_id,
            api::VARS
        )
    }

    /// Get all variables of a workspace
    pub async fn get_variables(&self, workspace_id: &str) -> Result<Vec<Variable>> {
        let path = format!("/{}/{}/{}", api::WORKSPACES, workspace_id, api::VARS);
        let error_context = format!("list variables for workspace '{}'", workspace_id);

        self.fetch_all_pages::<Variable, ApiListResponse<Variable>>(&path, &error_context)
            .await
    }

    /// Create a variable in a workspace
    pub async fn create_variable(
        &self,
        workspace_id: &str,
        input: &VariableInput,
    ) -> Result<Variable> {
        let url = self.vars_url(workspace_id);
        debug!("Creating variable '{}': {}", input.key, url);

        let response = self.post_json(&url, &input.create_payload()).send().await?;
        let created: ApiResponse<Variable> = self
            .parse_api_response(response, &format!("create variable '{}'", input.key))
            .await?;
        Ok(created.data)
    }

    /// Update an existing variable
    pub async fn update_variable(
        &self,
        workspace_id: &str,
        variable_id: &str,
        input: &VariableInput,
    ) -> Result<Variable> {
        let url = format!("{}/{}", self.vars_url(workspace_id), variable_id);
        debug!("Updating variable '{}': {}", input.key, url);

        let response = self
            .patch_json(&url, &input.update_payload(variable_id))
            .send()
            .await?;
        let updated: ApiResponse<Variable> = self
            .parse_api_response(response, &format!("update variable '{}'", input.key))
            .await?;
        Ok(updated.data)
    }

    /// Delete a variable by ID
    pub async fn delete_variable(&self, workspace_id: &str, variable_id: &str) -> Result<()> {
        let url = format!("{}/{}", self.vars_url(workspace_id), variable_id);
        debug!("Deleting variable: {}", url);

        let response = self.delete(&url).send().await?;
        self.ensure_success(response, &format!("delete variable '{}'", variable_id))
            .await?;
        Ok(())
    }

    /// Create the variable, or update it when its key already exists
    ///
    /// `existing` is the workspace's current variable list.
    pub async fn upsert_variable(
        &self,
        workspace_id: &str,
        existing: &[Variable],
        input: &VariableInput,
    ) -> Result<UpsertOutcome> {
        match reconcile(existing, &input.key) {
            Reconcile::Existing(var) => self
                .update_variable(workspace_id, &var.id, input)
                .await
                .map(UpsertOutcome::Updated),
            Reconcile::Create => self
                .create_variable(workspace_id, input)
                .await
                .map(UpsertOutcome::Created),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TfeError;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn var_json(id: &str, key: &str, value: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "vars",
            "attributes": {
                "key": key,
                "value": value,
                "category": "terraform",
                "sensitive": false,
                "hcl": false
            }
        })
    }

    fn existing() -> Vec<Variable> {
        vec![serde_json::from_value(var_json("var-1", "region", "us-east-1")).unwrap()]
    }

    #[tokio::test]
    async fn test_get_variables() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/workspaces/ws-1/vars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [var_json("var-1", "region", "us-east-1"), var_json("var-2", "size", "2")]
            })))
            .mount(&mock_server)
            .await;

        let vars = client.get_variables("ws-1").await.unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[1].key(), "size");
    }

    #[tokio::test]
    async fn test_upsert_updates_existing_key() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        let input = VariableInput::terraform("region", "eu-west-1");

        Mock::given(method("PATCH"))
            .and(path("/workspaces/ws-1/vars/var-1"))
            .and(body_json(input.update_payload("var-1")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": var_json("var-1", "region", "eu-west-1")
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock_server)
            .await;

        let outcome = client
            .upsert_variable("ws-1", &existing(), &input)
            .await
            .unwrap();
        assert!(matches!(outcome, UpsertOutcome::Updated(_)));
        assert_eq!(outcome.variable().display_value(), "eu-west-1");
    }

    #[tokio::test]
    async fn test_upsert_creates_missing_key() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        let input = VariableInput::terraform("size", "3");

        Mock::given(method("POST"))
            .and(path("/workspaces/ws-1/vars"))
            .and(body_json(input.create_payload()))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": var_json("var-9", "size", "3")
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let outcome = client
            .upsert_variable("ws-1", &existing(), &input)
            .await
            .unwrap();
        assert_eq!(outcome.verb(), "Created");
        assert_eq!(outcome.variable().id, "var-9");
    }

    #[tokio::test]
    async fn test_create_variable_rejected_carries_body() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/workspaces/ws-1/vars"))
            .respond_with(
                ResponseTemplate::new(422).set_body_string(r#"{"errors":[{"detail":"Key has already been taken"}]}"#),
            )
            .mount(&mock_server)
            .await;

        match client
            .create_variable("ws-1", &VariableInput::terraform("region", "x"))
            .await
            .unwrap_err()
        {
            TfeError::Api { status, message } => {
                assert_eq!(status, 422);
                assert!(message.contains("already been taken"));
            }
            other => panic!("Expected TfeError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_variable() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/workspaces/ws-1/vars/var-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        client.delete_variable("ws-1", "var-1").await.unwrap();
    }
}
