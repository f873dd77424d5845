// src/blocks/card.rs
use serde::{Deserialize, Serialize};

use super::link::{deserialize_target, CtaGroup, LinkTarget};
use super::tag::TagGroup;
use super::RichText;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

impl std::str::FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(format!("Invalid orientation: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default)]
    pub description: Option<RichText>,
    #[serde(default, deserialize_with = "deserialize_target")]
    pub url: Option<LinkTarget>,
    #[serde(default)]
    pub call_to_action: Vec<CtaGroup>,
    #[serde(default)]
    pub top_detail_badges_tags: Vec<TagGroup>,

    /// "h2" to "h6"; defaults to "h3"
    #[serde(default)]
    pub heading_tag: Option<String>,
    /// Left unset, the container decides
    #[serde(default)]
    pub orientation: Option<Orientation>,
    #[serde(default)]
    pub image: Option<CardImage>,
    #[serde(default)]
    pub top_detail_text: Option<String>,
    #[serde(default)]
    pub bottom_detail_text: Option<String>,
    #[serde(default)]
    pub bottom_detail_icon: Option<String>,

    #[serde(default)]
    pub grey_background: bool,
    #[serde(default)]
    pub no_background: bool,
    #[serde(default)]
    pub no_border: bool,
    #[serde(default)]
    pub shadow: bool,
}

pub const DEFAULT_HEADING_TAG: &str = "h3";
pub const HEADING_TAGS: [&str; 5] = ["h2", "h3", "h4", "h5", "h6"];

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// The heading element; anything outside h2..h6 falls back to h3
    pub fn heading_tag(&self) -> &str {
        self.heading_tag
            .as_deref()
            .filter(|t| HEADING_TAGS.contains(t))
            .unwrap_or(DEFAULT_HEADING_TAG)
    }
}
