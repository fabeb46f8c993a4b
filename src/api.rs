use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{error, info};

use crate::downloader::{Downloader, ProgressFn};
use crate::error::{IconError, Result};
use crate::icon::{resolve_style, Family, IconRequest, Style};
use crate::progress::default_progress_fn;
use crate::url::{build_svg_url_on, ASSET_HOST};
use crate::version::{resolve_version, HOMEPAGE_URL};

// ──────────────────────────────────────────────────────────────────────────────
// Api
// ──────────────────────────────────────────────────────────────────────────────

/// Top-level entry-point with a chainable builder API.
///
/// # Example
/// ```rust,no_run
/// use fafetch::{Api, Family, IconRequest, Style};
///
/// #[tokio::main]
/// async fn main() -> fafetch::Result<()> {
///     let session = Api::new().set_output_dir("./icons").connect().await?;
///     let request = IconRequest::new("house", Family::Classic, Some(Style::Solid))?;
///     session.fetch_icon(&request).await?;
///     Ok(())
/// }
/// ```
pub struct Api {
    output_dir: PathBuf,
    homepage_url: String,
    asset_host: String,
    timeout: Option<Duration>,
    progress: Option<ProgressFn>,
}

impl Api {
    /// Create a new `Api` pointing at the public provider, saving into
    /// `output/` next to the running executable.
    pub fn new() -> Self {
        Self {
            output_dir: default_output_dir(),
            homepage_url: HOMEPAGE_URL.to_owned(),
            asset_host: ASSET_HOST.to_owned(),
            timeout: None,
            progress: Some(default_progress_fn()),
        }
    }

    /// Set the root directory icons are saved under (builder).
    pub fn set_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Override the page scraped for the release version (builder).
    pub fn set_homepage_url(mut self, url: &str) -> Self {
        self.homepage_url = url.to_owned();
        self
    }

    /// Override the host serving release assets (builder).
    pub fn set_asset_host(mut self, host: &str) -> Self {
        self.asset_host = host.to_owned();
        self
    }

    /// Set a request timeout; by default the client's own default applies (builder).
    pub fn set_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the progress callback (builder).
    pub fn set_progress(mut self, progress: ProgressFn) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Disable progress output (builder).
    pub fn no_progress(mut self) -> Self {
        self.progress = None;
        self
    }

    /// Resolve the current release version and open a [`Session`].
    pub async fn connect(self) -> Result<Session> {
        let downloader = Downloader::with_config(self.timeout, self.progress.clone())?;
        let version = resolve_version(&downloader, &self.homepage_url).await?;
        self.into_session(downloader, version)
    }

    /// Open a [`Session`] for a known release version without scraping.
    pub fn with_version(self, version: &str) -> Result<Session> {
        let downloader = Downloader::with_config(self.timeout, self.progress.clone())?;
        self.into_session(downloader, version.to_owned())
    }

    fn into_session(self, downloader: Downloader, version: String) -> Result<Session> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| IconError::io(&self.output_dir, e))?;

        Ok(Session {
            version,
            output_dir: self.output_dir,
            asset_host: self.asset_host,
            downloader,
        })
    }
}

impl Default for Api {
    fn default() -> Self {
        Self::new()
    }
}

/// `output/` beside the executable, or under the working directory when the
/// executable path is unavailable.
pub fn default_output_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join("output")
}

// ──────────────────────────────────────────────────────────────────────────────
// Session
// ──────────────────────────────────────────────────────────────────────────────

/// A resolved release version plus the directory icons are written to.
#[derive(Debug)]
pub struct Session {
    version: String,
    output_dir: PathBuf,
    asset_host: String,
    downloader: Downloader,
}

impl Session {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<output_dir>/<family>` or `<output_dir>/<family>-<style>`.
    pub fn icon_dir(&self, family: Family, style: Option<Style>) -> PathBuf {
        let folder = match style {
            Some(style) => format!("{family}-{style}"),
            None => family.to_string(),
        };
        self.output_dir.join(folder)
    }

    /// Fetch the requested icon, falling back once to the `brands` family when
    /// a styled family has no such icon.
    pub async fn fetch_icon(&self, request: &IconRequest) -> Result<PathBuf> {
        let family = request.family();
        let style = resolve_style(family, request.style());

        match self.download_svg(family, style, request.name()).await {
            Ok(path) => Ok(path),
            Err(_) if family.uses_style() => {
                info!("Attempting to fetch with 'brands' family. Ignoring style.");
                self.download_svg(Family::Brands, None, request.name()).await
            }
            Err(err) => Err(err),
        }
    }

    /// A single download attempt with an already resolved style.
    pub async fn download_svg(
        &self,
        family: Family,
        style: Option<Style>,
        name: &str,
    ) -> Result<PathBuf> {
        let dir = self.icon_dir(family, style);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| IconError::io(&dir, e))
            .inspect_err(|err| error!("{err}"))?;

        let url = build_svg_url_on(&self.asset_host, &self.version, family, style, name);
        info!("Requesting SVG from URL: {url}");

        let dest = dir.join(format!("{name}.svg"));
        match self.downloader.download_to(&url, &dest).await {
            Ok(_) => {
                info!("SVG successfully saved to '{}'.", dest.display());
                Ok(dest)
            }
            Err(err @ IconError::HttpStatus { .. }) => {
                error!("Failed to retrieve the SVG from '{url}'. Error: {err}");
                Err(err)
            }
            Err(err) => {
                error!("An error occurred while downloading the SVG: {err}");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_dir_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let session = Api::new()
            .set_output_dir(tmp.path())
            .set_timeout(Duration::from_secs(5))
            .set_progress(default_progress_fn())
            .with_version("6.5.1")
            .unwrap();

        assert_eq!(session.version(), "6.5.1");
        assert_eq!(
            session.icon_dir(Family::Sharp, Some(Style::Thin)),
            tmp.path().join("sharp-thin")
        );
        assert_eq!(session.icon_dir(Family::Brands, None), tmp.path().join("brands"));
    }

    #[test]
    fn test_with_version_creates_output_dir_idempotently() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("nested").join("output");

        for _ in 0..2 {
            let session = Api::new()
                .set_output_dir(&out)
                .no_progress()
                .with_version("v")
                .unwrap();
            assert!(session.output_dir().is_dir());
        }
    }

    #[test]
    fn test_default_output_dir_name() {
        assert!(default_output_dir().ends_with("output"));
    }
}
