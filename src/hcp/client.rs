//! TFE HTTP client for API interactions

use log::debug;
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::explain::{curl_command, CurlData};
use crate::hcp::traits::PaginatedResponse;

/// Credentials applied to every authenticated API request
///
/// Built once from the resolved token and never modified afterwards.
/// The configuration upload deliberately does not use it: the one-time
/// upload URL is its own capability.
#[derive(Debug, Clone)]
pub struct AuthContext {
    token: String,
}

impl AuthContext {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    /// Attach bearer token and JSON:API content type
    fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, api::JSON_API_CONTENT_TYPE)
    }

    /// Headers as shown by `--explain` (token redacted)
    fn explained_headers() -> [(&'static str, &'static str); 2] {
        [
            ("Authorization", "Bearer $TOKEN"),
            ("Content-Type", api::JSON_API_CONTENT_TYPE),
        ]
    }
}

/// TFE API client
pub struct TfeClient {
    client: Client,
    auth: AuthContext,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
    /// Print an equivalent curl command before each request
    explain: bool,
}

impl TfeClient {
    /// Create a new TFE client
    ///
    /// Only connecting is bounded in time; archive uploads may take as long
    /// as the link needs.
    pub fn new(token: String, host: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            auth: AuthContext::new(token),
            host,
            base_url_override: None,
            explain: false,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, host: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            auth: AuthContext::new(token),
            host,
            base_url_override: Some(base_url),
            explain: false,
        }
    }

    /// Enable or disable request explanation on stderr
    pub fn set_explain(&mut self, explain: bool) {
        self.explain = explain;
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    /// Web origin of the service, used for human-facing links
    pub fn web_origin(&self) -> String {
        format!("https://{}", self.host)
    }

    fn explain_request(&self, method: &str, url: &str, body: Option<&serde_json::Value>) {
        if !self.explain {
            return;
        }
        let body = body.map(|b| b.to_string());
        let data = body.as_deref().map(CurlData::Json);
        eprintln!(
            "{}",
            curl_command(method, url, &AuthContext::explained_headers(), data)
        );
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.explain_request("GET", url, None);
        self.auth.apply(self.client.get(url))
    }

    /// Create a POST request with standard headers and a JSON:API body
    pub(crate) fn post_json(&self, url: &str, body: &serde_json::Value) -> reqwest::RequestBuilder {
        self.explain_request("POST", url, Some(body));
        self.auth.apply(self.client.post(url)).json(body)
    }

    /// Create a PATCH request with standard headers and a JSON:API body
    pub(crate) fn patch_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> reqwest::RequestBuilder {
        self.explain_request("PATCH", url, Some(body));
        self.auth.apply(self.client.patch(url)).json(body)
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.explain_request("DELETE", url, None);
        self.auth.apply(self.client.delete(url))
    }

    /// Create a raw PUT of binary content, without the authentication context
    ///
    /// `len` is sent as `Content-Length` so the body can be streamed.
    /// `source` is only used to render the request in explain mode.
    pub(crate) fn put_octet_stream(
        &self,
        url: &str,
        body: reqwest::Body,
        len: u64,
        source: &Path,
    ) -> reqwest::RequestBuilder {
        if self.explain {
            eprintln!("{}", Self::upload_explanation(url, source));
        }
        self.client
            .put(url)
            .header(CONTENT_TYPE, api::OCTET_STREAM_CONTENT_TYPE)
            .header(CONTENT_LENGTH, len)
            .body(body)
    }

    /// Curl rendering of the upload PUT
    fn upload_explanation(url: &str, source: &Path) -> String {
        curl_command(
            "PUT",
            url,
            &[("Content-Type", api::OCTET_STREAM_CONTENT_TYPE)],
            Some(CurlData::File(source)),
        )
    }

    /// Turn a non-success response into an API error carrying the remote body
    pub(crate) async fn api_error(response: reqwest::Response, error_context: &str) -> TfeError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        debug!("API error {} for {}: {}", status, error_context, body);
        TfeError::Api {
            status,
            message: if body.is_empty() {
                format!("Failed to {}", error_context)
            } else {
                format!("Failed to {}: {}", error_context, body)
            },
        }
    }

    /// Return the response unchanged if successful, otherwise an API error
    pub(crate) async fn ensure_success(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::api_error(response, error_context).await)
        }
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.ensure_success(response, error_context).await?;
        Ok(response.json().await?)
    }

    /// Fetch all pages from a paginated API endpoint
    ///
    /// Fetches page 1 to learn `total-pages`, then requests the remaining
    /// pages one after another and appends them in page order.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/organizations/my-org/workspaces")
    /// * `error_context` - Context for error messages (e.g., "list workspaces in 'my-org'")
    pub async fn fetch_all_pages<T, R>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let first_resp: R = self.fetch_page(path, 1, error_context).await?;
        let meta = first_resp.meta().cloned();
        let mut all_items = first_resp.into_data();

        let total_pages = match meta.and_then(|m| m.pagination) {
            Some(p) => {
                debug!("Page 1/{}, total items: {}", p.total_pages, p.total_count);
                p.total_pages
            }
            None => return Ok(all_items),
        };

        for page in 2..=total_pages {
            let page_context = format!("{} (page {})", error_context, page);
            let resp: R = self.fetch_page(path, page, &page_context).await?;
            let items = resp.into_data();
            debug!("Page {} returned {} items", page, items.len());
            all_items.extend(items);
        }

        debug!("Fetched {} total items for {}", all_items.len(), error_context);
        Ok(all_items)
    }

    async fn fetch_page<R>(&self, path: &str, page: u32, error_context: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let url = format!(
            "{}{}{}page[size]={}&page[number]={}",
            self.base_url(),
            path,
            separator,
            api::DEFAULT_PAGE_SIZE,
            page
        );

        debug!("Fetching page {} from: {}", page, url);
        let response = self.get(&url).send().await?;
        self.parse_api_response(response, error_context).await
    }

    /// Fetch a single resource by API path
    ///
    /// Returns `None` for 404 and an error for other non-success codes.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/organizations/acme/workspaces/web")
    /// * `resource_label` - Human-readable label for error messages (e.g., "workspace 'web'")
    pub async fn fetch_resource_by_path<T>(
        &self,
        path: &str,
        resource_label: &str,
    ) -> Result<Option<(T, serde_json::Value)>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            404 => Ok(None),
            200 => {
                let raw: serde_json::Value = response.json().await?;
                let item: T =
                    serde_json::from_value(raw["data"].clone()).map_err(|e| TfeError::Api {
                        status: 200,
                        message: format!("Failed to parse {}: {}", resource_label, e),
                    })?;
                Ok(Some((item, raw)))
            }
            _ => Err(Self::api_error(response, &format!("fetch {}", resource_label)).await),
        }
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            "test-token".to_string(),
            "mock.terraform.io".to_string(),
            base_url.to_string(),
        )
    }
}
