//! Release version discovery.
//!
//! The provider does not publish its current release through an API. The
//! homepage links a stylesheet under `/releases/<version>/...`, and that path
//! segment is the version used to build asset URLs.

use scraper::{Html, Selector};
use tracing::{error, info};

use crate::downloader::Downloader;
use crate::error::{IconError, Result};

/// Provider homepage scraped for the release identifier.
pub const HOMEPAGE_URL: &str = "https://fontawesome.com/";

/// Stylesheet links whose target mentions a release folder.
const RELEASE_STYLESHEET: &str = r#"link[rel~="stylesheet"][href*="releases"]"#;

/// Fetch `homepage_url` and extract the release version from it.
pub async fn resolve_version(downloader: &Downloader, homepage_url: &str) -> Result<String> {
    let html = downloader.fetch_text(homepage_url).await.inspect_err(|e| {
        error!("Failed to fetch the FontAwesome version: {e}");
    })?;

    match extract_version(&html) {
        Some(version) => {
            info!("FontAwesome version extracted: {version}");
            Ok(version)
        }
        None => {
            error!("Error: Version link not found in the response.");
            Err(IconError::VersionNotFound {
                url: homepage_url.to_owned(),
            })
        }
    }
}

/// Find the first stylesheet link whose `href` mentions `releases` and return
/// the path segment following `/releases/`.
pub fn extract_version(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(RELEASE_STYLESHEET).ok()?;

    let href = document.select(&selector).next()?.value().attr("href")?;
    let (_, rest) = href.split_once("/releases/")?;
    let version = rest.split('/').next()?;
    (!version.is_empty()).then(|| version.to_owned())
}
