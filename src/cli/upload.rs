//! Upload command arguments

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Arguments for 'upload'
#[derive(Parser, Debug)]
pub struct UploadArgs {
    /// Organization name
    pub org: String,

    /// Workspace name
    pub workspace: String,

    /// Directory to package (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Archive file to write (defaults to tfc-upload.tar.gz)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Queue a run automatically once the configuration is uploaded
    #[arg(long, action = ArgAction::Set, default_value_t = true, value_name = "BOOL")]
    pub run: bool,
}
