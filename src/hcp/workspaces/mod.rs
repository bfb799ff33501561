//! Workspace module

mod api;
mod commands;
mod models;
pub mod resolver;

pub use commands::{run_ws_create_command, run_ws_delete_command, run_ws_list_command};
pub use models::{
    RelationshipData, RelationshipId, RelationshipLinks, Workspace, WorkspaceAttributes,
};
pub use resolver::{resolve_workspace, ResolvedWorkspace};
