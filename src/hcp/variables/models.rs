//! Workspace variable data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::hcp::traits::TfeResource;

/// Variable category
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VariableCategory {
    /// Terraform input variable
    Terraform,
    /// Environment variable of the run
    Env,
}

impl fmt::Display for VariableCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableCategory::Terraform => write!(f, "terraform"),
            VariableCategory::Env => write!(f, "env"),
        }
    }
}

impl FromStr for VariableCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "terraform" => Ok(VariableCategory::Terraform),
            "env" => Ok(VariableCategory::Env),
            other => Err(format!(
                "Invalid variable category '{}' (expected 'terraform' or 'env')",
                other
            )),
        }
    }
}

/// Variable data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Variable {
    pub id: String,
    pub attributes: VariableAttributes,
}

/// Variable attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct VariableAttributes {
    pub key: String,
    /// Always null for sensitive variables
    pub value: Option<String>,
    pub description: Option<String>,
    pub category: VariableCategory,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub hcl: bool,
}

impl TfeResource for Variable {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.key
    }
}

impl Variable {
    pub fn key(&self) -> &str {
        &self.attributes.key
    }

    /// Value for display; sensitive values are masked
    pub fn display_value(&self) -> &str {
        if self.attributes.sensitive {
            "<sensitive>"
        } else {
            self.attributes.value.as_deref().unwrap_or("")
        }
    }

    /// Input that recreates this variable elsewhere
    ///
    /// `None` for sensitive variables, whose value the API never returns.
    pub fn to_input(&self) -> Option<VariableInput> {
        if self.attributes.sensitive {
            return None;
        }
        Some(VariableInput {
            key: self.attributes.key.clone(),
            value: self.attributes.value.clone().unwrap_or_default(),
            category: self.attributes.category,
            sensitive: false,
            hcl: self.attributes.hcl,
            description: self.attributes.description.clone(),
        })
    }
}

/// Desired state of a variable, used for create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableInput {
    pub key: String,
    pub value: String,
    pub category: VariableCategory,
    pub sensitive: bool,
    pub hcl: bool,
    pub description: Option<String>,
}

impl VariableInput {
    /// Plain terraform variable
    pub fn terraform(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            category: VariableCategory::Terraform,
            sensitive: false,
            hcl: false,
            description: None,
        }
    }

    fn attributes(&self) -> serde_json::Value {
        let mut attributes = serde_json::json!({
            "key": self.key,
            "value": self.value,
            "category": self.category,
            "sensitive": self.sensitive,
            "hcl": self.hcl
        });
        if let Some(description) = &self.description {
            attributes["description"] = serde_json::Value::String(description.clone());
        }
        attributes
    }

    /// JSON:API body for creating the variable
    pub fn create_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "type": "vars",
                "attributes": self.attributes()
            }
        })
    }

    /// JSON:API body for updating the variable with the given ID
    pub fn update_payload(&self, variable_id: &str) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "id": variable_id,
                "type": "vars",
                "attributes": self.attributes()
            }
        })
    }
}
