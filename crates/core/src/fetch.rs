//! Remote fetcher: one authenticated GET against the Figma files endpoint.
//!
//! No retry and no timeout. The first failure is returned.

use figsync_common::DesignDocument;
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::SyncError;

/// Header carrying the personal access token
pub const FIGMA_TOKEN_HEADER: &str = "X-Figma-Token";

/// Longest slice of an unparsable error body echoed into the error message
const ERROR_BODY_PREVIEW: usize = 200;

/// Error body returned by the Figma API, e.g. `{"status":403,"err":"Invalid token"}`
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    err: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// `{api_base}/v1/files/{file_key}`, with the key percent-encoded as one segment.
pub fn file_url(api_base: &Url, file_key: &str) -> Url {
    let mut url = api_base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend(["v1", "files", file_key]);
    }
    url
}

/// Fetch and parse the file document named by `config.file_key`.
pub async fn fetch_document(
    client: &reqwest::Client,
    config: &Config,
) -> Result<DesignDocument, SyncError> {
    let url = file_url(&config.api_base, &config.file_key);
    let remote_error = |status: Option<u16>, reason: String| SyncError::RemoteFetch {
        file_key: config.file_key.clone(),
        status,
        reason,
    };

    debug!(url = %url, "Fetching Figma file");

    let response = client
        .get(url)
        .header(FIGMA_TOKEN_HEADER, config.access_token.expose_secret())
        .send()
        .await
        .map_err(|e| remote_error(None, format!("request failed: {e}")))?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        remote_error(
            Some(status.as_u16()),
            format!("failed to read response body: {e}"),
        )
    })?;

    if !status.is_success() {
        debug!(status = status.as_u16(), "Figma API returned an error");
        return Err(remote_error(
            Some(status.as_u16()),
            format!("API returned {status}: {}", describe_error_body(&body)),
        ));
    }

    debug!(bytes = body.len(), "Received Figma file");

    DesignDocument::from_json(&body).map_err(|e| {
        remote_error(
            Some(status.as_u16()),
            format!("malformed file document: {e}"),
        )
    })
}

fn describe_error_body(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body)
        && let Some(message) = parsed.err.or(parsed.message)
    {
        return message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    trimmed.chars().take(ERROR_BODY_PREVIEW).collect()
}
