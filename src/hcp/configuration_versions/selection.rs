//! Upload target selection
//!
//! Decides whether an upload goes to an existing pending configuration
//! version or to a freshly created one. The decision itself is a pure
//! function; asking the operator is delegated to a [`PendingPrompt`].

use std::cell::RefCell;
use std::io::BufRead;

use log::{debug, info, warn};

use super::models::{pending_uploads, PendingUpload};
use crate::error::{Result, TfeError};
use crate::hcp::reconcile::reconcile;
use crate::hcp::TfeClient;
use crate::ui::{prompt_text, read_line_answer};

/// Where the archive will be uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadTarget {
    /// Reuse this pending version's upload URL
    Existing(PendingUpload),
    /// Provision a new configuration version
    CreateNew,
}

/// Decide the upload target from the pending versions and the operator's choice
///
/// An empty or unknown choice means a new version is created.
pub fn select_pending(pending: &[PendingUpload], choice: &str) -> UploadTarget {
    match reconcile(pending, choice.trim()).existing() {
        Some(p) => UploadTarget::Existing(p.clone()),
        None => UploadTarget::CreateNew,
    }
}

/// Source of the operator's choice among pending configuration versions
pub trait PendingPrompt {
    /// Return the chosen version ID, or an empty string to create a new one
    fn choose(&self, pending: &[PendingUpload]) -> Result<String>;
}

const CHOICE_PROMPT: &str =
    "Type the id of a pending configuration version, or press Enter to create a new one";

fn list_pending(pending: &[PendingUpload]) {
    println!("Pending configuration versions:");
    for p in pending {
        match &p.self_url {
            Some(link) => println!("  {}  {}", p.id, link),
            None => println!("  {}", p.id),
        }
    }
}

/// Lists the pending versions and reads an ID from the terminal
pub struct InteractivePrompt;

impl PendingPrompt for InteractivePrompt {
    fn choose(&self, pending: &[PendingUpload]) -> Result<String> {
        list_pending(pending);
        prompt_text(CHOICE_PROMPT)
    }
}

/// Lists the pending versions and reads an ID as one line of piped input
///
/// End of input answers "" (create new).
pub struct LinePrompt<R> {
    reader: RefCell<R>,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: RefCell::new(reader),
        }
    }
}

impl<R: BufRead> PendingPrompt for LinePrompt<R> {
    fn choose(&self, pending: &[PendingUpload]) -> Result<String> {
        list_pending(pending);
        eprintln!("{}:", CHOICE_PROMPT);
        read_line_answer(&mut *self.reader.borrow_mut())
    }
}

/// Never reuses a pending version (batch mode)
pub struct CreateNewPrompt;

impl PendingPrompt for CreateNewPrompt {
    fn choose(&self, _pending: &[PendingUpload]) -> Result<String> {
        Ok(String::new())
    }
}

impl TfeClient {
    /// Find the upload URL for the next configuration upload
    ///
    /// Lists the workspace's configuration versions on every call. When some
    /// are pending, `prompt` picks one; otherwise (or on an empty or unknown
    /// answer) a new version is created with `auto_queue_runs`.
    pub async fn resolve_upload_target(
        &self,
        workspace_id: &str,
        auto_queue_runs: bool,
        prompt: &dyn PendingPrompt,
    ) -> Result<String> {
        let versions = self.get_configuration_versions(workspace_id).await?;
        let pending = pending_uploads(&versions);
        debug!(
            "Workspace {} has {} configuration versions, {} pending",
            workspace_id,
            versions.len(),
            pending.len()
        );

        if !pending.is_empty() {
            let choice = prompt.choose(&pending)?;
            match select_pending(&pending, &choice) {
                UploadTarget::Existing(p) => {
                    info!("Reusing pending configuration version {}", p.id);
                    return Ok(p.upload_url);
                }
                UploadTarget::CreateNew if !choice.trim().is_empty() => {
                    warn!(
                        "'{}' is not a pending configuration version, creating a new one",
                        choice.trim()
                    );
                }
                UploadTarget::CreateNew => {}
            }
        }

        let created = self
            .create_configuration_version(workspace_id, auto_queue_runs)
            .await?;
        info!("Created configuration version {}", created.id);
        created
            .upload_url()
            .map(str::to_string)
            .ok_or_else(|| TfeError::Api {
                status: 201,
                message: format!(
                    "Configuration version '{}' was created without an upload URL",
                    created.id
                ),
            })
    }
}
