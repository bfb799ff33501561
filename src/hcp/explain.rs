//! Request explanation for `--explain`
//!
//! Renders an equivalent `curl` command line for a request so operators can
//! replay or debug it by hand. The bearer token is never printed; it is
//! rendered as `$TOKEN`.

use std::path::Path;

/// Request payload as it would be passed to curl
#[derive(Debug, Clone, Copy)]
pub enum CurlData<'a> {
    /// Inline JSON document (`-d '...'`)
    Json(&'a str),
    /// Raw file contents (`--data-binary @path`)
    File(&'a Path),
}

/// Build a curl command equivalent to the given request
pub fn curl_command(
    method: &str,
    url: &str,
    headers: &[(&str, &str)],
    data: Option<CurlData<'_>>,
) -> String {
    let mut parts = vec!["curl".to_string(), "-X".to_string(), method.to_string()];

    for (name, value) in headers {
        parts.push("-H".to_string());
        parts.push(shell_quote(&format!("{}: {}", name, value)));
    }

    match data {
        Some(CurlData::Json(body)) => {
            parts.push("-d".to_string());
            parts.push(shell_quote(body));
        }
        Some(CurlData::File(path)) => {
            parts.push("--data-binary".to_string());
            parts.push(shell_quote(&format!("@{}", path.display())));
        }
        None => {}
    }

    parts.push(shell_quote(url));
    parts.join(" ")
}

/// Quote a value for POSIX shells, keeping `$TOKEN` expandable
fn shell_quote(value: &str) -> String {
    if value.contains("$TOKEN") {
        return format!("\"{}\"", value.replace('"', "\\\""));
    }
    format!("'{}'", value.replace('\'', "'\\''"))
}
