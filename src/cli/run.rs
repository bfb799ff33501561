//! Run command arguments

use clap::Parser;

/// Arguments for 'run'
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Organization name
    pub org: String,

    /// Workspace name
    pub workspace: String,

    /// Run message
    #[arg(short, long)]
    pub message: Option<String>,

    /// Queue a destroy run
    #[arg(long, default_value_t = false)]
    pub destroy: bool,

    /// Apply automatically after a successful plan
    #[arg(long, default_value_t = false)]
    pub auto_apply: bool,
}
