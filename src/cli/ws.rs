//! Workspace command definitions and arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::common::OutputFormat;

/// Actions for the 'ws' command
#[derive(Subcommand, Debug)]
pub enum WsAction {
    /// List workspaces of an organization, or show one with its variables
    #[command(visible_alias = "ls")]
    List(WsListArgs),

    /// Create a workspace
    Create(WsCreateArgs),

    /// Delete a workspace
    #[command(visible_alias = "rm")]
    Delete(WsDeleteArgs),
}

/// Arguments for 'ws list'
#[derive(Parser, Debug)]
pub struct WsListArgs {
    /// Organization name
    pub org: String,

    /// Show a single workspace and its variables
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'ws create'
#[derive(Parser, Debug)]
pub struct WsCreateArgs {
    /// Organization name
    pub org: String,

    /// Workspace name
    #[arg(required_unless_present = "json")]
    pub name: Option<String>,

    /// Create from a JSON:API payload file instead of a bare name
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,
}

/// Arguments for 'ws delete'
#[derive(Parser, Debug)]
pub struct WsDeleteArgs {
    /// Organization name
    pub org: String,

    /// Workspace name
    pub name: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
