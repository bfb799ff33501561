//! TFE API client module
//!
//! This module provides functionality to interact with the HCP Terraform /
//! Terraform Enterprise API.

mod client;
pub mod configuration_versions;
mod credentials;
pub mod explain;
pub mod reconcile;
pub mod runs;
pub mod traits;
pub mod variables;
pub mod workspaces;

use serde::Deserialize;

pub use client::{AuthContext, TfeClient};
pub use configuration_versions::{
    run_upload_command, select_pending, ConfigurationVersion, PendingPrompt, PendingUpload,
    UploadTarget,
};
pub use credentials::TokenResolver;
pub use reconcile::{reconcile, Reconcile};
pub use runs::{run_run_command, RunRequest, RunResult};
pub use traits::{PaginatedResponse, TfeResource};
pub use variables::{
    run_var_convert_command, run_var_copy_command, run_var_delete_command, run_var_gcp_command,
    run_var_import_command, run_var_list_command, run_var_set_command, Variable,
    VariableCategory, VariableInput,
};
pub use workspaces::{
    resolve_workspace, run_ws_create_command, run_ws_delete_command, run_ws_list_command,
    ResolvedWorkspace, Workspace, WorkspaceAttributes,
};

/// Pagination metadata from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    #[serde(rename = "current-page")]
    pub current_page: u32,
    #[serde(rename = "total-pages")]
    pub total_pages: u32,
    #[serde(rename = "total-count")]
    pub total_count: u32,
}
