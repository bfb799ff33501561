//! Configuration versions module - pending version discovery, creation and upload

mod api;
mod commands;
mod models;
mod selection;

pub use commands::run_upload_command;
pub use models::{pending_uploads, ConfigurationVersion, ConfigurationVersionLinks, PendingUpload};
pub use selection::{
    select_pending, CreateNewPrompt, InteractivePrompt, LinePrompt, PendingPrompt, UploadTarget,
};
