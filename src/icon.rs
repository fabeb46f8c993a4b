//! Icon families, styles and validated requests.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use tracing::info;

use crate::error::{IconError, Result};

/// Top-level visual variant line of the icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Family {
    Classic,
    Duotone,
    Sharp,
    SharpDuotone,
    Brands,
}

impl Family {
    pub const ALL: [Family; 5] = [
        Family::Classic,
        Family::Duotone,
        Family::Sharp,
        Family::SharpDuotone,
        Family::Brands,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Family::Classic => "classic",
            Family::Duotone => "duotone",
            Family::Sharp => "sharp",
            Family::SharpDuotone => "sharp-duotone",
            Family::Brands => "brands",
        }
    }

    /// Only `classic` and `sharp` honour a requested style.
    pub fn uses_style(self) -> bool {
        matches!(self, Family::Classic | Family::Sharp)
    }

    /// Comma separated list of every family, for messages and prompts.
    pub fn names() -> String {
        Self::ALL.map(Family::as_str).join(", ")
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == value)
            .ok_or_else(|| IconError::InvalidFamily {
                value: value.to_owned(),
            })
    }
}

/// Weight/fill variant within a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Style {
    Solid,
    Regular,
    Light,
    Thin,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Solid, Style::Regular, Style::Light, Style::Thin];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Solid => "solid",
            Style::Regular => "regular",
            Style::Light => "light",
            Style::Thin => "thin",
        }
    }

    pub fn names() -> String {
        Self::ALL.map(Style::as_str).join(", ")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == value)
            .ok_or_else(|| IconError::InvalidStyle {
                value: value.to_owned(),
            })
    }
}

/// Apply the family rules to a requested style.
///
/// Families other than `classic` and `sharp` have no style variants, so the
/// request is dropped for them.
pub fn resolve_style(family: Family, requested: Option<Style>) -> Option<Style> {
    match family {
        Family::Duotone | Family::SharpDuotone => {
            info!("Selected '{family}' family. Ignoring style.");
            None
        }
        Family::Classic | Family::Sharp => requested,
        Family::Brands => {
            info!("Selected icon family '{family}'. Ignoring style.");
            None
        }
    }
}

/// A validated `(name, family, style)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    name: String,
    family: Family,
    style: Option<Style>,
}

impl IconRequest {
    /// Build a request, dropping `style` when `family` has no style variants.
    pub fn new(name: &str, family: Family, style: Option<Style>) -> Result<Self> {
        let name = validate_name(name)?;
        Ok(Self {
            name,
            family,
            style: style.filter(|_| family.uses_style()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn style(&self) -> Option<Style> {
        self.style
    }
}

/// The name ends up both in a URL path segment and a file name.
pub fn validate_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    let reason = if name.is_empty() {
        Some("name must not be empty")
    } else if name.contains(['/', '\\']) {
        Some("name must not contain path separators")
    } else if name == "." || name == ".." {
        Some("name must not be a relative path component")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(IconError::InvalidName {
            value: raw.to_owned(),
            reason,
        }),
        None => Ok(name.to_owned()),
    }
}
