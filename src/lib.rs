//! # fafetch
//!
//! Download a single Font Awesome SVG icon for the currently published
//! release. The release is discovered from the provider's homepage, the asset
//! URL is built from the family/style naming rules, and the file is saved
//! under `<output>/<family>[-<style>]/<name>.svg`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fafetch::{Api, Family, IconRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let session = Api::new().connect().await.unwrap();
//!     let request = IconRequest::new("github", Family::Brands, None).unwrap();
//!     session.fetch_icon(&request).await.unwrap();
//! }
//! ```

pub mod api;
pub mod downloader;
pub mod error;
pub mod icon;
pub mod input;
pub mod progress;
pub mod url;
pub mod version;

pub use api::{Api, Session};
pub use downloader::Downloader;
pub use error::{IconError, Result};
pub use icon::{resolve_style, Family, IconRequest, Style};
pub use input::{resolve_request, IconArgs, Prompt, TerminalPrompt};
pub use progress::default_progress_fn;
pub use url::{build_svg_url, build_svg_url_on, SvgPath};
pub use version::{extract_version, resolve_version};
