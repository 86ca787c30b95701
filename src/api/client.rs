use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use super::encoder::{self, RequestBody};
use super::envelope;
use super::error::{Error, Result};
use super::export::ExportOptions;
use super::import::ImportOptions;
use super::types::{Bundle, ExportPayload, ImportPayload, ImportResult, ListPayload, Project};
use crate::fs::atomic_write;

pub const DEFAULT_BASE_URL: &str = "https://api.lokalise.co/api/";
pub const DEFAULT_ASSET_URL: &str = "https://s3-eu-west-1.amazonaws.com/lokalise-assets/";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the project list/export/import endpoints.
///
/// Holds no per-call state: every operation builds its own body, sends one
/// request and returns. Clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    asset_url: String,
}

impl Client {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::Transport)?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            asset_url: DEFAULT_ASSET_URL.to_string(),
        })
    }

    /// Points the client at another API root, e.g. a local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = with_trailing_slash(base_url.into());
        self
    }

    /// Changes the host export bundles are downloaded from.
    #[must_use]
    pub fn with_asset_url(mut self, asset_url: impl Into<String>) -> Self {
        self.asset_url = with_trailing_slash(asset_url.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn asset_url(&self) -> &str {
        &self.asset_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Lists the projects available to `token`.
    pub async fn list(&self, token: &str) -> Result<Vec<Project>> {
        require("api_token", token)?;

        let request = self
            .http
            .get(self.endpoint("project/list"))
            .query(&[("api_token", token)]);

        let payload: ListPayload = self.send("project/list", request).await?;
        Ok(payload.projects)
    }

    /// Requests an export of `project_id` as `file_type`.
    ///
    /// Without a webhook, `full_file` points at the bundle on the asset host.
    /// With one, the server delivers the location to the webhook later and
    /// `full_file` is left empty.
    pub async fn export(
        &self,
        token: &str,
        project_id: &str,
        file_type: &str,
        options: &ExportOptions,
    ) -> Result<Bundle> {
        require("api_token", token)?;
        require("id", project_id)?;
        require("type", file_type)?;

        let body = encoder::encode_form(
            &[("api_token", token), ("id", project_id), ("type", file_type)],
            options.as_set(),
        );
        let request = self
            .http
            .post(self.endpoint("project/export"))
            .form(body.fields());

        let payload: ExportPayload = self.send("project/export", request).await?;
        let mut bundle = payload.bundle;
        bundle.full_file = if options.webhook_url().is_some() || bundle.file.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.asset_url, bundle.file)
        };
        Ok(bundle)
    }

    /// Uploads the translations for `lang_iso` in the file at `path`.
    ///
    /// The file is read before anything is sent; a missing file fails with
    /// [`Error::Io`] without touching the network.
    pub async fn import(
        &self,
        token: &str,
        project_id: &str,
        path: &Path,
        lang_iso: &str,
        options: &ImportOptions,
    ) -> Result<ImportResult> {
        require("api_token", token)?;
        require("id", project_id)?;
        require("lang_iso", lang_iso)?;

        let body = encoder::encode_multipart(
            &[("api_token", token), ("id", project_id), ("lang_iso", lang_iso)],
            options.as_set(),
            path,
        )?;
        debug!(
            file = %path.display(),
            bytes = body.file().map_or(0, |file| file.bytes.len()),
            "encoded import body"
        );
        let request = self
            .http
            .post(self.endpoint("project/import"))
            .multipart(RequestBody::into_multipart(body));

        let payload: ImportPayload = self.send("project/import", request).await?;
        Ok(payload.result)
    }

    /// Downloads a bundle into `dest_dir`, named after the last URL segment.
    pub async fn download(&self, url: &str, dest_dir: &Path) -> Result<PathBuf> {
        require("url", url)?;
        let filename = url
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .ok_or_else(|| Error::invalid("url", format!("no file name in '{url}'")))?;
        let target = dest_dir.join(filename);

        debug!(url, target = %target.display(), "downloading bundle");
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        if status != 200 {
            warn!(url, status, "bundle download failed");
            return Err(Error::unexpected_status(status));
        }
        let bytes = response.bytes().await.map_err(transport_error)?;

        atomic_write(&target, &bytes).map_err(|source| Error::Io {
            path: target.clone(),
            source,
        })?;
        Ok(target)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        debug!(operation, "sending request");
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        debug!(operation, status, bytes = body.len(), "received response");

        envelope::decode(status, &body).inspect_err(|err| {
            warn!(operation, status, error = ?err, "request failed");
        })
    }
}

/// Wraps a transport failure. The URL is stripped because `list` sends the
/// token in the query string.
fn transport_error(err: reqwest::Error) -> Error {
    let err = err.without_url();
    let error_kind = if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connect"
    } else if err.is_request() {
        "request"
    } else {
        "unknown"
    };
    warn!(error = %err, error_kind, "transport failure");
    Error::Transport(err)
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid(field, "must not be empty"));
    }
    Ok(())
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let client = Client::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.asset_url(), DEFAULT_ASSET_URL);
        assert_eq!(client.endpoint("project/list"), "https://api.lokalise.co/api/project/list");
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = Client::new()
            .unwrap()
            .with_base_url("http://127.0.0.1:8080/api")
            .with_asset_url("http://127.0.0.1:8080/assets/");
        assert_eq!(client.endpoint("project/export"), "http://127.0.0.1:8080/api/project/export");
        assert_eq!(client.asset_url(), "http://127.0.0.1:8080/assets/");
    }

    #[tokio::test]
    async fn test_empty_token_is_rejected_before_sending() {
        let client = Client::new().unwrap().with_base_url("http://127.0.0.1:9/");
        let err = client.list("  ").await.unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("api_token"));
    }

    #[tokio::test]
    async fn test_empty_project_is_rejected_before_sending() {
        let client = Client::new().unwrap().with_base_url("http://127.0.0.1:9/");
        let err = client
            .export("t", "", "json", &ExportOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref field, .. } if field == "id"));
    }

    #[tokio::test]
    async fn test_download_needs_a_file_name() {
        let client = Client::new().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let err = client.download("///", dir.path()).await.unwrap_err();
        assert!(err.is_validation());
    }
}
