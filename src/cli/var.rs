//! Variable command definitions and arguments

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::common::OutputFormat;

/// Actions for the 'var' command
#[derive(Subcommand, Debug)]
pub enum VarAction {
    /// List the variables of a workspace
    #[command(visible_alias = "ls")]
    List(VarListArgs),

    /// Create or update variables
    Set(VarSetArgs),

    /// Delete variables by key
    #[command(visible_alias = "rm")]
    Delete(VarDeleteArgs),

    /// Import variables from a flat file
    ///
    /// The first line is a header; every following line is
    /// name,value,category,sensitive (category: terraform or env).
    #[command(verbatim_doc_comment)]
    Import(VarImportArgs),

    /// Store a GCP service account key as the sensitive GOOGLE_CREDENTIALS env variable
    Gcp(VarGcpArgs),

    /// Copy variables between workspaces (sensitive ones are skipped)
    Copy(VarCopyArgs),

    /// Convert a .tfvars file into a flat variable file for 'var import'
    Convert(VarConvertArgs),
}

/// Arguments for 'var list'
#[derive(Parser, Debug)]
pub struct VarListArgs {
    /// Organization name
    pub org: String,

    /// Workspace name
    pub workspace: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'var set'
#[derive(Parser, Debug)]
pub struct VarSetArgs {
    /// Organization name
    pub org: String,

    /// Workspace name
    pub workspace: String,

    /// Variable to set (repeatable)
    #[arg(
        short = 'v',
        long = "var",
        num_args = 2,
        value_names = ["KEY", "VALUE"],
        action = ArgAction::Append,
        required = true
    )]
    pub vars: Vec<String>,

    /// Environment variable instead of a Terraform variable
    #[arg(long, default_value_t = false)]
    pub env: bool,

    /// Mark the variables sensitive (write-only)
    #[arg(long, default_value_t = false)]
    pub sensitive: bool,

    /// Parse the values as HCL
    #[arg(long, default_value_t = false)]
    pub hcl: bool,

    /// Description for the variables
    #[arg(short, long)]
    pub description: Option<String>,
}

/// Arguments for 'var delete'
#[derive(Parser, Debug)]
pub struct VarDeleteArgs {
    /// Organization name
    pub org: String,

    /// Workspace name
    pub workspace: String,

    /// Keys of the variables to delete
    #[arg(required = true)]
    pub keys: Vec<String>,
}

/// Arguments for 'var import'
#[derive(Parser, Debug)]
pub struct VarImportArgs {
    /// Organization name
    pub org: String,

    /// Workspace name
    pub workspace: String,

    /// Flat variable file
    pub file: PathBuf,
}

/// Arguments for 'var gcp'
#[derive(Parser, Debug)]
pub struct VarGcpArgs {
    /// Organization name
    pub org: String,

    /// Workspace name
    pub workspace: String,

    /// Service account key file (JSON)
    pub key_file: PathBuf,
}

/// Arguments for 'var copy'
#[derive(Parser, Debug)]
pub struct VarCopyArgs {
    /// Organization of the source workspace
    pub org: String,

    /// Source workspace name
    pub source: String,

    /// Target workspace name
    pub target: String,

    /// Organization of the target workspace (defaults to the source organization)
    #[arg(long)]
    pub target_org: Option<String>,
}

/// Arguments for 'var convert'
#[derive(Parser, Debug)]
pub struct VarConvertArgs {
    /// Input .tfvars file
    pub input: PathBuf,

    /// Output flat variable file
    pub output: PathBuf,
}
