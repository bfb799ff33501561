//! Workspace data models

use serde::Deserialize;

use crate::hcp::traits::TfeResource;

/// Workspace data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    pub attributes: WorkspaceAttributes,
    pub relationships: Option<WorkspaceRelationships>,
}

/// Workspace relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceRelationships {
    pub project: Option<RelationshipData>,
    pub organization: Option<RelationshipData>,
}

/// Generic relationship data
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipData {
    pub data: Option<RelationshipId>,
    pub links: Option<RelationshipLinks>,
}

/// Links attached to a relationship
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipLinks {
    pub related: Option<String>,
}

/// Relationship ID reference
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipId {
    pub id: String,
    #[serde(rename = "type")]
    pub rel_type: Option<String>,
}

/// Workspace attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceAttributes {
    pub name: String,

    #[serde(rename = "execution-mode")]
    pub execution_mode: Option<String>,

    #[serde(rename = "auto-apply")]
    pub auto_apply: Option<bool>,

    pub locked: Option<bool>,

    #[serde(rename = "terraform-version")]
    pub terraform_version: Option<String>,

    #[serde(rename = "updated-at")]
    pub updated_at: Option<String>,
}

impl TfeResource for Workspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl Workspace {
    /// Get execution mode, defaulting to "unknown" if not available
    pub fn execution_mode(&self) -> &str {
        self.attributes
            .execution_mode
            .as_deref()
            .unwrap_or("unknown")
    }

    pub fn is_locked(&self) -> bool {
        self.attributes.locked.unwrap_or(false)
    }

    pub fn auto_apply(&self) -> bool {
        self.attributes.auto_apply.unwrap_or(false)
    }

    /// Get terraform version, defaulting to "unknown" if not available
    pub fn terraform_version(&self) -> &str {
        self.attributes
            .terraform_version
            .as_deref()
            .unwrap_or("unknown")
    }

    pub fn updated_at(&self) -> &str {
        self.attributes.updated_at.as_deref().unwrap_or("")
    }

    /// Get organization name if available (from relationships)
    pub fn organization_name(&self) -> Option<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.organization.as_ref())
            .and_then(|o| o.data.as_ref())
            .map(|d| d.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_workspace(name: &str, locked: bool) -> Workspace {
        Workspace {
            id: format!("ws-{}", name),
            attributes: WorkspaceAttributes {
                name: name.to_string(),
                execution_mode: Some("remote".to_string()),
                auto_apply: None,
                locked: Some(locked),
                terraform_version: Some("1.5.0".to_string()),
                updated_at: None,
            },
            relationships: None,
        }
    }

    #[test]
    fn test_workspace_name() {
        let ws = create_test_workspace("web", false);
        assert_eq!(ws.name(), "web");
        assert_eq!(ws.id(), "ws-web");
    }

    #[test]
    fn test_workspace_is_locked() {
        assert!(create_test_workspace("locked", true).is_locked());
        assert!(!create_test_workspace("unlocked", false).is_locked());
    }

    #[test]
    fn test_workspace_defaults() {
        let ws: Workspace = serde_json::from_str(r#"{"id": "ws-1", "attributes": {"name": "x"}}"#)
            .unwrap();
        assert_eq!(ws.execution_mode(), "unknown");
        assert_eq!(ws.terraform_version(), "unknown");
        assert_eq!(ws.updated_at(), "");
        assert!(!ws.auto_apply());
        assert_eq!(ws.organization_name(), None);
    }

    #[test]
    fn test_workspace_deserialization_with_relationships() {
        let json = r#"{
            "id": "ws-abc123",
            "type": "workspaces",
            "attributes": {
                "name": "web",
                "execution-mode": "remote",
                "auto-apply": true,
                "locked": false,
                "terraform-version": "1.6.0"
            },
            "relationships": {
                "organization": {
                    "data": {"id": "acme", "type": "organizations"}
                }
            }
        }"#;

        let ws: Workspace = serde_json::from_str(json).unwrap();
        assert_eq!(ws.id, "ws-abc123");
        assert_eq!(ws.organization_name(), Some("acme"));
        assert!(ws.auto_apply());
    }
}
