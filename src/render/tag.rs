// src/render/tag.rs
//! Tag and badge group rendering

use crate::blocks::{Badge, BadgeEntry, Tag, TagEntry, TagGroup};
use crate::pages::PageIndex;

use super::utils::{class_list, escape_html};

/// Classes of a single tag: size, color, then icon
pub fn tag_classes(tag: &Tag) -> String {
    let color = tag
        .color
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(|c| format!("fr-tag--{}", c.trim()));
    let icon = tag.icon_class.as_deref().filter(|i| !i.trim().is_empty());

    let mut classes = vec!["fr-tag"];
    if tag.is_small {
        classes.push("fr-tag--sm");
    }
    if let Some(color) = color.as_deref() {
        classes.push(color);
    }
    if let Some(icon) = icon {
        classes.push(icon);
        classes.push("fr-tag--icon-left");
    }
    class_list(classes)
}

pub fn render_tag(tag: &Tag, pages: &PageIndex) -> String {
    let classes = escape_html(&tag_classes(tag));
    let label = escape_html(&tag.label);

    match tag.link.as_ref().and_then(|t| t.resolve(pages)) {
        Some(link) => format!(
            r#"<a href="{}" class="{}">{}</a>"#,
            escape_html(&link.href),
            classes,
            label
        ),
        None => format!(r#"<p class="{}">{}</p>"#, classes, label),
    }
}

pub fn render_badge(badge: &Badge) -> String {
    let color = badge
        .color
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(|c| format!("fr-badge--{}", c.trim()));

    let mut classes = vec!["fr-badge"];
    if let Some(color) = color.as_deref() {
        classes.push(color);
    }
    if badge.hide_icon {
        classes.push("fr-badge--no-icon");
    }

    format!(
        r#"<p class="{}">{}</p>"#,
        escape_html(&class_list(classes)),
        escape_html(&badge.text)
    )
}

/// Render a tag or badge group as a list; empty groups render nothing
pub fn render_tag_group(group: &TagGroup, pages: &PageIndex) -> String {
    let (list_class, items): (&str, Vec<String>) = match group {
        TagGroup::Tags(entries) => (
            "fr-tags-group",
            entries
                .iter()
                .map(|TagEntry::Tag(tag)| render_tag(tag, pages))
                .collect(),
        ),
        TagGroup::Badges(entries) => (
            "fr-badges-group",
            entries
                .iter()
                .map(|BadgeEntry::Badge(badge)| render_badge(badge))
                .collect(),
        ),
    };

    if items.is_empty() {
        return String::new();
    }

    let mut html = format!(r#"<ul class="{}">"#, list_class);
    for item in items {
        html.push_str(&format!("<li>{}</li>", item));
    }
    html.push_str("</ul>");
    html
}
