//! tfcctl - Manage HCP Terraform workspaces from the command line
//!
//! A CLI tool to manage workspaces and their variables, upload
//! configuration content and queue runs.
//!
//! # Features
//!
//! - List, create and delete workspaces
//! - Set, import, copy and delete workspace variables
//! - Package a directory and upload it as a configuration version
//! - Queue plan/apply and destroy runs
//! - Automatic pagination handling
//!
//! # Example
//!
//! ```bash
//! # List workspaces
//! tfcctl ws list my-org
//!
//! # Upload the current directory and let the upload queue a run
//! tfcctl upload my-org my-workspace
//!
//! # Queue a destroy run
//! tfcctl run my-org my-workspace --destroy -m "tear down"
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod hcp;
pub mod output;
pub mod ui;

pub use archive::{pack, ArchiveArtifact};
pub use cli::{Cli, Command, OutputFormat, VarAction, WsAction};
pub use error::{Result, TfeError};
pub use hcp::{TfeClient, TfeResource, TokenResolver, Variable, Workspace};
