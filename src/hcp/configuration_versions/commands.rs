//! Upload configuration command handler

use std::path::PathBuf;

use log::debug;

use super::selection::{CreateNewPrompt, InteractivePrompt, LinePrompt, PendingPrompt};
use crate::archive;
use crate::cli::UploadArgs;
use crate::config::defaults;
use crate::hcp::workspaces::resolve_workspace;
use crate::hcp::TfeClient;
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_message, is_interactive};

/// Run the upload command
///
/// Packs the source directory, picks or creates a configuration version and
/// uploads the archive to its one-time URL.
pub async fn run_upload_command(
    client: &TfeClient,
    args: &UploadArgs,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source_dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let archive_path = args
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(defaults::ARCHIVE_NAME));

    // Pack before any network call so a bad directory fails fast
    let spinner = create_spinner(
        &format!("Packing {}...", source_dir.display()),
        batch,
    );
    let artifact = archive::pack(&source_dir, &archive_path);
    finish_spinner(spinner);
    let artifact = artifact?;
    println!(
        "Archive created: {} ({} bytes)",
        artifact.path.display(),
        artifact.size
    );

    let resolved = resolve_workspace(client, &args.org, &args.workspace, batch).await?;
    debug!(
        "Uploading to workspace {} ({}), auto-queue-runs={}",
        resolved.workspace.attributes.name,
        resolved.id(),
        args.run
    );

    let prompt: Box<dyn PendingPrompt> = if batch {
        Box::new(CreateNewPrompt)
    } else if is_interactive() {
        Box::new(InteractivePrompt)
    } else {
        Box::new(LinePrompt::new(std::io::stdin().lock()))
    };
    let upload_url = client
        .resolve_upload_target(resolved.id(), args.run, prompt.as_ref())
        .await?;
    println!("The url to upload configuration is:\n{}", upload_url);

    let spinner = create_spinner("Uploading configuration...", batch);
    match client.upload_configuration(&artifact.path, &upload_url).await {
        Ok(_) => finish_spinner_with_message(spinner, "Uploaded"),
        Err(e) => {
            finish_spinner(spinner);
            return Err(e.into());
        }
    }

    println!(
        "Configuration uploaded to workspace '{}/{}'",
        resolved.org, resolved.workspace.attributes.name
    );
    if args.run {
        println!("A run will be queued automatically once the upload is processed.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::collections::BTreeSet;
    use std::fs;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn upload_args(dir: PathBuf, file: PathBuf) -> UploadArgs {
        UploadArgs {
            org: "acme".to_string(),
            workspace: "web".to_string(),
            dir: Some(dir),
            file: Some(file),
            run: true,
        }
    }

    #[tokio::test]
    async fn test_upload_end_to_end_creates_version_and_puts_archive() {
        let server = MockServer::start().await;
        let client = TfeClient::test_client(&server.uri());

        let src = tempfile::tempdir().unwrap();
        fs::write(src.path().join("main.tf"), "terraform {}").unwrap();
        fs::write(src.path().join("terraform.tfstate"), "{}").unwrap();
        fs::create_dir_all(src.path().join(".terraform/providers/x")).unwrap();
        fs::write(src.path().join(".terraform/providers/x/bin"), "bin").unwrap();
        let out = tempfile::tempdir().unwrap();
        let archive_path = out.path().join("tfc-upload.tar.gz");

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces/web"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": "ws-web1", "type": "workspaces", "attributes": {"name": "web"}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/workspaces/ws-web1/configuration-versions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [],
                "meta": {"pagination": {"current-page": 1, "total-pages": 1, "total-count": 0}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let upload_url = format!("{}/upload/one-time", server.uri());
        Mock::given(method("POST"))
            .and(path("/workspaces/ws-web1/configuration-versions"))
            .and(body_json(serde_json::json!({
                "data": {
                    "type": "configuration-versions",
                    "attributes": {"auto-queue-runs": true}
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": {
                    "id": "cv-new",
                    "type": "configuration-versions",
                    "attributes": {"status": "pending", "upload-url": upload_url}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/upload/one-time"))
            .and(header("content-type", "application/octet-stream"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        run_upload_command(
            &client,
            &upload_args(src.path().to_path_buf(), archive_path.clone()),
            true,
        )
        .await
        .unwrap();

        let requests = server.received_requests().await.unwrap();
        let put = requests
            .iter()
            .find(|r| r.method.as_str() == "PUT")
            .unwrap();
        assert!(put.headers.get("authorization").is_none());

        let uploaded = tar::Archive::new(GzDecoder::new(put.body.as_slice()))
            .entries()
            .unwrap()
            .map(|e| {
                let e = e.unwrap();
                let name = e.path().unwrap().to_string_lossy().into_owned();
                name.trim_start_matches("./").trim_end_matches('/').to_string()
            })
            .filter(|n| !n.is_empty() && n != ".")
            .collect::<BTreeSet<_>>();
        assert_eq!(uploaded, BTreeSet::from(["main.tf".to_string()]));
        assert!(archive_path.exists());
    }

    #[tokio::test]
    async fn test_upload_bad_source_dir_fails_before_any_request() {
        let server = MockServer::start().await;
        let client = TfeClient::test_client(&server.uri());
        let out = tempfile::tempdir().unwrap();

        let err = run_upload_command(
            &client,
            &upload_args(out.path().join("missing"), out.path().join("a.tar.gz")),
            true,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("missing"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
