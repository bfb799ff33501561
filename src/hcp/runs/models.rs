//! Run data models

use serde::Deserialize;

use crate::config::defaults;
use crate::hcp::workspaces::RelationshipData;

/// Parameters of a run to queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub message: String,
    pub is_destroy: bool,
    pub auto_apply: bool,
}

impl RunRequest {
    /// Message sent to the service; destroy runs get a marker prefix
    pub fn message(&self) -> String {
        if self.is_destroy {
            format!("{}{}", defaults::DESTROY_MESSAGE_PREFIX, self.message)
        } else {
            self.message.clone()
        }
    }
}

/// Run data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Run {
    pub id: String,
    pub attributes: RunAttributes,
    pub relationships: Option<RunRelationships>,
}

/// Run attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct RunAttributes {
    pub status: Option<String>,
}

/// Run relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct RunRelationships {
    pub plan: Option<RelationshipData>,
}

impl Run {
    /// API path of the run's plan (`relationships.plan.links.related`)
    pub fn plan_related_link(&self) -> Option<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.plan.as_ref())
            .and_then(|p| p.links.as_ref())
            .and_then(|l| l.related.as_deref())
    }

    pub fn status(&self) -> &str {
        self.attributes.status.as_deref().unwrap_or("unknown")
    }
}

/// Outcome of queuing a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub id: String,
    pub status: String,
    /// API path of the plan, when the service returned one
    pub plan_related_url: Option<String>,
}

impl From<&Run> for RunResult {
    fn from(run: &Run) -> Self {
        Self {
            id: run.id.clone(),
            status: run.status().to_string(),
            plan_related_url: run.plan_related_link().map(str::to_string),
        }
    }
}

/// Plan API URL from the related link returned with the run
pub fn plan_api_url(origin: &str, related: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), related)
}

/// Web UI URL of a run
pub fn run_ui_url(origin: &str, org: &str, workspace: &str, run_id: &str) -> String {
    format!(
        "{}/app/{}/workspaces/{}/runs/{}",
        origin.trim_end_matches('/'),
        urlencoding::encode(org),
        urlencoding::encode(workspace),
        urlencoding::encode(run_id)
    )
}
