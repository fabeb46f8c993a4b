//! Asset URL construction.
//!
//! The provider's path scheme is not a single template: `classic` drops the
//! family from the path, `sharp-duotone` always lives under one fixed folder,
//! and `brands`/`duotone` have a bare family folder when no style is given.
//! Each shape is one [`SvgPath`] variant.

use tracing::info;

use crate::icon::{Family, Style};

/// Default host serving release assets.
pub const ASSET_HOST: &str = "https://site-assets.fontawesome.com";

const SHARP_DUOTONE_FOLDER: &str = "sharp-duotone-solid";

/// Folder shape under `<host>/releases/<version>/svgs/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgPath {
    /// `<style>/`, used by `classic`.
    StyleOnly(Style),
    /// A fixed folder that ignores the style entirely.
    Fixed(&'static str),
    /// `<family>/`
    FamilyOnly(Family),
    /// `<family>-<style>/`
    FamilyStyle(Family, Style),
}

impl SvgPath {
    /// Pick the path shape for a family and an already resolved style.
    pub fn select(family: Family, style: Option<Style>) -> Self {
        match (family, style) {
            (Family::Classic, style) => SvgPath::StyleOnly(style.unwrap_or_else(default_style)),
            (Family::SharpDuotone, _) => SvgPath::Fixed(SHARP_DUOTONE_FOLDER),
            (Family::Brands | Family::Duotone, None) => SvgPath::FamilyOnly(family),
            (family, style) => SvgPath::FamilyStyle(family, style.unwrap_or_else(default_style)),
        }
    }

    pub fn folder(&self) -> String {
        match self {
            SvgPath::StyleOnly(style) => style.to_string(),
            SvgPath::Fixed(folder) => (*folder).to_owned(),
            SvgPath::FamilyOnly(family) => family.to_string(),
            SvgPath::FamilyStyle(family, style) => format!("{family}-{style}"),
        }
    }
}

fn default_style() -> Style {
    info!("No style selected, defaulting to 'solid'.");
    Style::Solid
}

/// Build the asset URL on the default provider host.
pub fn build_svg_url(version: &str, family: Family, style: Option<Style>, name: &str) -> String {
    build_svg_url_on(ASSET_HOST, version, family, style, name)
}

/// Build the asset URL on an explicit host (no trailing slash expected).
pub fn build_svg_url_on(
    host: &str,
    version: &str,
    family: Family,
    style: Option<Style>,
    name: &str,
) -> String {
    let folder = SvgPath::select(family, style).folder();
    format!(
        "{}/releases/{version}/svgs/{folder}/{name}.svg",
        host.trim_end_matches('/')
    )
}
