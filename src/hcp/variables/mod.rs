//! Workspace variables module

mod api;
mod commands;
mod import;
mod models;

pub use api::UpsertOutcome;
pub use commands::{
    run_var_convert_command, run_var_copy_command, run_var_delete_command, run_var_gcp_command,
    run_var_import_command, run_var_list_command, run_var_set_command,
};
pub use import::{convert_tfvars, gcp_credentials_input, parse_var_file};
pub use models::{Variable, VariableAttributes, VariableCategory, VariableInput};
