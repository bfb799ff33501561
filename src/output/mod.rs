//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON

mod common;
mod variables;
mod workspaces;

pub use common::{escape_csv, output_raw, print_json};
pub use variables::{output_variables, VariableRow};
pub use workspaces::{output_workspaces, WorkspaceRow};
