//! Runs module

mod api;
mod commands;
mod models;

pub use api::run_request_body;
pub use commands::run_run_command;
pub use models::{
    plan_api_url, run_ui_url, Run, RunAttributes, RunRelationships, RunRequest, RunResult,
};
