//! Configuration version data models

use log::warn;
use serde::Deserialize;

use crate::hcp::traits::TfeResource;

/// Configuration version data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct ConfigurationVersion {
    pub id: String,
    pub attributes: ConfigurationVersionAttributes,
    pub links: Option<ConfigurationVersionLinks>,
}

/// Configuration version attributes
#[derive(Deserialize, Debug, Clone)]
pub struct ConfigurationVersionAttributes {
    /// Status: pending, fetching, uploaded, archived, errored
    pub status: String,
    /// One-time upload URL, only present while pending
    #[serde(rename = "upload-url")]
    pub upload_url: Option<String>,
    #[serde(rename = "auto-queue-runs", default)]
    pub auto_queue_runs: bool,
}

/// Configuration version links
#[derive(Deserialize, Debug, Clone)]
pub struct ConfigurationVersionLinks {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
}

impl ConfigurationVersion {
    /// Still waiting for its configuration upload
    pub fn is_pending(&self) -> bool {
        self.attributes.status == "pending"
    }

    pub fn upload_url(&self) -> Option<&str> {
        self.attributes.upload_url.as_deref()
    }

    pub fn self_link(&self) -> Option<&str> {
        self.links.as_ref().and_then(|l| l.self_link.as_deref())
    }
}

/// A pending configuration version that can still receive an upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub id: String,
    pub upload_url: String,
    pub self_url: Option<String>,
}

impl TfeResource for PendingUpload {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.id
    }
}

/// Project pending configuration versions into upload candidates
///
/// Keeps the service's order. Pending versions without an upload URL cannot
/// be targeted and are skipped.
pub fn pending_uploads(versions: &[ConfigurationVersion]) -> Vec<PendingUpload> {
    versions
        .iter()
        .filter(|cv| cv.is_pending())
        .filter_map(|cv| match cv.upload_url() {
            Some(url) => Some(PendingUpload {
                id: cv.id.clone(),
                upload_url: url.to_string(),
                self_url: cv.self_link().map(str::to_string),
            }),
            None => {
                warn!("Pending configuration version {} has no upload URL", cv.id);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cv(id: &str, status: &str, upload_url: Option<&str>) -> ConfigurationVersion {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "type": "configuration-versions",
            "attributes": {
                "source": "tfe-api",
                "status": status,
                "upload-url": upload_url,
                "auto-queue-runs": true
            },
            "links": {"self": format!("/api/v2/configuration-versions/{}", id)}
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_pending_configuration_version() {
        let version = cv("cv-1", "pending", Some("https://archivist/v1/object/abc"));
        assert!(version.is_pending());
        assert!(version.attributes.auto_queue_runs);
        assert_eq!(version.upload_url(), Some("https://archivist/v1/object/abc"));
        assert_eq!(version.self_link(), Some("/api/v2/configuration-versions/cv-1"));
    }

    #[test]
    fn test_pending_uploads_keeps_only_pending_in_order() {
        let versions = vec![
            cv("cv-a", "pending", Some("https://u/a")),
            cv("cv-b", "uploaded", None),
            cv("cv-c", "errored", None),
            cv("cv-d", "pending", Some("https://u/d")),
        ];

        let pending = pending_uploads(&versions);
        let ids: Vec<&str> = pending.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["cv-a", "cv-d"]);
        assert_eq!(pending[1].upload_url, "https://u/d");
        assert_eq!(
            pending[0].self_url.as_deref(),
            Some("/api/v2/configuration-versions/cv-a")
        );
    }

    #[test]
    fn test_pending_without_upload_url_is_skipped() {
        let versions = vec![cv("cv-a", "pending", None)];
        assert!(pending_uploads(&versions).is_empty());
    }

    #[test]
    fn test_pending_upload_is_keyed_by_id() {
        let pending = pending_uploads(&[cv("cv-x", "pending", Some("https://u/x"))]);
        assert_eq!(pending[0].name(), "cv-x");
    }
}
