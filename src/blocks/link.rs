// src/blocks/link.rs
use serde::{Deserialize, Deserializer, Serialize};

use crate::pages::{PageId, PageIndex};

/// Where a link points: an internal page, an external URL, or nothing.
///
/// Mirrors the CMS link field pair. When both are set the page wins;
/// an empty `external_url` counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTarget {
    #[serde(default)]
    pub page: Option<PageId>,
    #[serde(default)]
    pub external_url: Option<String>,
}

/// A link target resolved against the page index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub href: String,
    pub external: bool,
}

impl LinkTarget {
    pub fn page(id: PageId) -> Self {
        Self {
            page: Some(id),
            external_url: None,
        }
    }

    pub fn external(url: impl Into<String>) -> Self {
        Self {
            page: None,
            external_url: Some(url.into()),
        }
    }

    /// The external URL, if one is set and non-blank
    pub fn url(&self) -> Option<&str> {
        self.external_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }

    /// True when neither a page nor a URL is set
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.url().is_none()
    }

    pub fn resolve(&self, pages: &PageIndex) -> Option<ResolvedLink> {
        if let Some(id) = self.page {
            match pages.url_for(id) {
                Some(href) => {
                    return Some(ResolvedLink {
                        href,
                        external: false,
                    })
                }
                None => {
                    tracing::warn!(page = id, "link points to an unknown page");
                }
            }
        }

        self.url().map(|u| ResolvedLink {
            href: u.to_string(),
            // Site-relative URLs stay in the current tab
            external: !u.starts_with('/'),
        })
    }
}

/// Accept either a bare URL string or a `{page, external_url}` object
pub fn deserialize_target<'de, D>(deserializer: D) -> Result<Option<LinkTarget>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTarget {
        Url(String),
        Fields(LinkTarget),
    }

    let raw = Option::<RawTarget>::deserialize(deserializer)?;
    let target = match raw {
        None => None,
        Some(RawTarget::Url(url)) => Some(LinkTarget::external(url)),
        Some(RawTarget::Fields(target)) => Some(target),
    };
    Ok(target.filter(|t| !t.is_empty()))
}

/// A call-to-action link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkItem {
    #[serde(flatten)]
    pub target: LinkTarget,
    pub text: String,
}

/// A call-to-action button; `button_type` holds the button classes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonItem {
    #[serde(flatten)]
    pub target: LinkTarget,
    pub text: String,
    #[serde(default)]
    pub button_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum LinkEntry {
    Link(LinkItem),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ButtonEntry {
    Button(ButtonItem),
}

/// A homogeneous group of call-to-action items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CtaGroup {
    Links(Vec<LinkEntry>),
    Buttons(Vec<ButtonEntry>),
}

impl CtaGroup {
    pub fn links(items: Vec<LinkItem>) -> Self {
        CtaGroup::Links(items.into_iter().map(LinkEntry::Link).collect())
    }

    pub fn buttons(items: Vec<ButtonItem>) -> Self {
        CtaGroup::Buttons(items.into_iter().map(ButtonEntry::Button).collect())
    }
}
