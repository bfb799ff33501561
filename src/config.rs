/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Workspace variables endpoint
    pub const VARS: &str = "vars";

    /// Configuration versions endpoint
    pub const CONFIGURATION_VERSIONS: &str = "configuration-versions";

    /// Runs endpoint
    pub const RUNS: &str = "runs";

    /// Default page size for API requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// JSON:API media type used for every authenticated request
    pub const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

    /// Media type for the raw configuration upload
    pub const OCTET_STREAM_CONTENT_TYPE: &str = "application/octet-stream";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file name
    pub const FILE_NAME: &str = "terraform.d/credentials.tfrc.json";

    /// Path to Terraform credentials file on Unix (relative to HOME)
    pub const FILE_PATH_UNIX: &str = ".terraform.d/credentials.tfrc.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["TOKEN", "TFE_TOKEN"];
}

/// Default values for CLI
pub mod defaults {
    /// Default TFE host
    pub const HOST: &str = "app.terraform.io";

    /// Environment variable that can override the host
    pub const HOST_ENV_VAR: &str = "TFE_HOSTNAME";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default archive file name for configuration uploads
    pub const ARCHIVE_NAME: &str = "tfc-upload.tar.gz";

    /// Default run message
    pub const RUN_MESSAGE: &str = "Queued via tfcctl";

    /// Prefix added to the message of destroy runs
    pub const DESTROY_MESSAGE_PREFIX: &str = "Destroying... ";
}

/// Archive filter rules
pub mod archive {
    /// Extension of Terraform state files, never uploaded
    pub const STATE_EXTENSION: &str = "tfstate";

    /// Terraform's local cache directory, never uploaded
    pub const CACHE_DIR: &str = ".terraform";
}

/// Variable import constants
pub mod variables {
    /// Name of the environment variable holding GCP credentials
    pub const GCP_CREDENTIALS_KEY: &str = "GOOGLE_CREDENTIALS";

    /// Header line written to converted variable files
    pub const FILE_HEADER: &str = "#[var name],[var value],[var type],[var is sensitive]";
}
