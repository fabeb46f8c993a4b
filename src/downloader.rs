use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use reqwest::Client;
use tracing::debug;

use crate::error::{IconError, Result};

/// Callback type for reporting download progress.
/// Arguments: source URL, bytes downloaded, total bytes (0 if unknown), is_complete
pub type ProgressFn = Arc<dyn Fn(&str, u64, u64, bool) + Send + Sync>;

/// Thin HTTP layer shared by version discovery and icon downloads.
#[derive(Clone)]
pub struct Downloader {
    client: Client,
    /// Optional progress callback.
    pub progress: Option<ProgressFn>,
}

impl Downloader {
    /// Create a downloader with the client defaults.
    pub fn new() -> Result<Self> {
        Self::with_config(None, None)
    }

    /// Create a downloader with an explicit timeout and progress callback.
    pub fn with_config(timeout: Option<Duration>, progress: Option<ProgressFn>) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            progress,
        })
    }

    /// GET `url` and return the body as text. Non-2xx responses are errors.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let resp = self.get(url).await?;
        resp.text().await.map_err(|e| IconError::network(url, e))
    }

    /// GET `url` into memory, reporting progress per chunk.
    pub async fn download_bytes(&self, url: &str) -> Result<Bytes> {
        let resp = self.get(url).await?;

        let total = resp.content_length().unwrap_or(0);
        let mut downloaded: u64 = 0;
        let mut body = BytesMut::with_capacity(total.min(1 << 20) as usize);
        let mut stream = resp.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| IconError::network(url, e))?;
            downloaded += chunk.len() as u64;
            body.extend_from_slice(&chunk);

            if let Some(progress) = &self.progress {
                progress(url, downloaded, total, false);
            }
        }

        if let Some(progress) = &self.progress {
            progress(url, downloaded, total, true);
        }

        Ok(body.freeze())
    }

    /// Download `url` and write the body verbatim to `dest`, overwriting it.
    ///
    /// Nothing is written unless the whole body arrived with a 2xx status.
    pub async fn download_to(&self, url: &str, dest: &Path) -> Result<u64> {
        let body = self.download_bytes(url).await?;
        tokio::fs::write(dest, &body)
            .await
            .map_err(|e| IconError::io(dest, e))?;
        Ok(body.len() as u64)
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!(url, "GET");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| IconError::network(url, e))?;

        let status = resp.status();
        debug!(url, %status, "response");
        if !status.is_success() {
            return Err(IconError::HttpStatus {
                url: url.to_owned(),
                status,
            });
        }
        Ok(resp)
    }
}

impl std::fmt::Debug for Downloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Downloader")
            .field("progress", &self.progress.is_some())
            .finish_non_exhaustive()
    }
}

/// Build the HTTP client. Without an explicit timeout the client default applies.
fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder =
        Client::builder().user_agent(concat!("fafetch/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(IconError::Client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_progress_reports_completion() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/icon.svg"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<svg/>"))
            .mount(&server)
            .await;

        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let progress: ProgressFn = Arc::new(move |_url: &str, current: u64, _total: u64, complete: bool| {
            sink.lock().unwrap().push((current, complete));
        });

        let downloader = Downloader::with_config(None, Some(progress)).unwrap();
        let body = downloader
            .download_bytes(&format!("{}/icon.svg", server.uri()))
            .await
            .unwrap();

        assert_eq!(&body[..], b"<svg/>");
        let calls = calls.lock().unwrap();
        assert_eq!(calls.last(), Some(&(6, true)));
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let downloader = Downloader::new().unwrap();
        let err = downloader
            .fetch_text(&format!("{}/missing", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            IconError::HttpStatus { status, .. } if status == reqwest::StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn test_multi_chunk_body_is_kept_intact() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        let svg: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(svg.clone()))
            .mount(&server)
            .await;

        let body = Downloader::new()
            .unwrap()
            .download_bytes(&format!("{}/big.svg", server.uri()))
            .await
            .unwrap();
        assert_eq!(&body[..], &svg[..]);
    }

    #[tokio::test]
    async fn test_client_error_names_no_url() {
        // Any reqwest error will do to exercise the message.
        let source = reqwest::get("http://127.0.0.1:9/").await.unwrap_err();
        let message = IconError::Client(source).to_string();
        assert!(message.starts_with("failed to build HTTP client"), "{message}");
        assert!(!message.contains("<client builder>"));
    }
}
