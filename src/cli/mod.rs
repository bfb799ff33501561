//! CLI argument parsing

mod common;
mod run;
mod upload;
mod var;
mod ws;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use run::RunArgs;
pub use upload::UploadArgs;
pub use var::{
    VarAction, VarConvertArgs, VarCopyArgs, VarDeleteArgs, VarGcpArgs, VarImportArgs,
    VarListArgs, VarSetArgs,
};
pub use ws::{WsAction, WsCreateArgs, WsDeleteArgs, WsListArgs};

/// HCP Terraform workspace CLI
#[derive(Parser, Debug)]
#[command(name = "tfcctl")]
#[command(version)]
#[command(
    about = "Manage HCP Terraform workspaces, variables, configuration uploads and runs",
    long_about = None
)]
pub struct Cli {
    /// TFE host
    #[arg(short = 'H', long, global = true, env = defaults::HOST_ENV_VAR, default_value = defaults::HOST)]
    pub host: String,

    /// API token (overrides env vars and credentials file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Never prompt; pending configuration versions are not reused and
    /// confirmations are accepted
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Print an equivalent curl command to stderr before each request
    #[arg(long, global = true, default_value_t = false)]
    pub explain: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage workspaces
    #[command(visible_alias = "workspace")]
    Ws {
        #[command(subcommand)]
        action: WsAction,
    },

    /// Manage workspace variables
    #[command(visible_alias = "vars")]
    Var {
        #[command(subcommand)]
        action: VarAction,
    },

    /// Package a directory and upload it as a new configuration
    Upload(UploadArgs),

    /// Queue a run in a workspace
    Run(RunArgs),
}
