// src/blocks/tag.rs
use serde::{Deserialize, Serialize};

use super::link::{deserialize_target, LinkTarget};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    #[serde(default, deserialize_with = "deserialize_target")]
    pub link: Option<LinkTarget>,
    /// Color suffix, e.g. "purple-glycine"
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub is_small: bool,
    #[serde(default)]
    pub icon_class: Option<String>,
}

impl Tag {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Badge {
    pub text: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub hide_icon: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum TagEntry {
    Tag(Tag),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum BadgeEntry {
    Badge(Badge),
}

/// Top-of-card detail group: either tags or badges
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum TagGroup {
    Tags(Vec<TagEntry>),
    Badges(Vec<BadgeEntry>),
}

impl TagGroup {
    pub fn tags(tags: Vec<Tag>) -> Self {
        TagGroup::Tags(tags.into_iter().map(TagEntry::Tag).collect())
    }

    pub fn badges(badges: Vec<Badge>) -> Self {
        TagGroup::Badges(badges.into_iter().map(BadgeEntry::Badge).collect())
    }

    /// Link targets carried by the group's tags (badges never link)
    pub fn link_targets(&self) -> Vec<&LinkTarget> {
        match self {
            TagGroup::Tags(entries) => entries
                .iter()
                .filter_map(|TagEntry::Tag(tag)| tag.link.as_ref())
                .collect(),
            TagGroup::Badges(_) => Vec::new(),
        }
    }
}
