// src/render/cta.rs
//! Call-to-action groups: lists of links or of buttons

use crate::blocks::{ButtonEntry, ButtonItem, CtaGroup, LinkEntry, LinkItem};
use crate::pages::PageIndex;

use super::utils::{escape_html, external_attrs};

pub const LINKS_GROUP_CLASS: &str = "fr-links-group";
pub const BUTTONS_GROUP_CLASS: &str =
    "fr-btns-group fr-btns-group--inline-reverse fr-btns-group--inline-lg";
pub const DEFAULT_BUTTON_CLASS: &str = "fr-btn";

/// Render a link item, or None when its target does not resolve
pub fn render_link(item: &LinkItem, pages: &PageIndex) -> Option<String> {
    let Some(link) = item.target.resolve(pages) else {
        tracing::warn!(text = %item.text, "skipping call-to-action link without target");
        return None;
    };

    Some(format!(
        r#"<a href="{}"{}>{}</a>"#,
        escape_html(&link.href),
        external_attrs(&link),
        escape_html(&item.text)
    ))
}

/// Render a button item, or None when its target does not resolve
pub fn render_button(item: &ButtonItem, pages: &PageIndex) -> Option<String> {
    let Some(link) = item.target.resolve(pages) else {
        tracing::warn!(text = %item.text, "skipping call-to-action button without target");
        return None;
    };

    let class = item
        .button_type
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_BUTTON_CLASS);

    Some(format!(
        r#"<a class="{}" href="{}"{}>{}</a>"#,
        escape_html(class),
        escape_html(&link.href),
        external_attrs(&link),
        escape_html(&item.text)
    ))
}

/// Render a CTA group as a list; renders nothing when no item resolves
pub fn render_cta_group(group: &CtaGroup, pages: &PageIndex) -> String {
    let (list_class, items): (&str, Vec<String>) = match group {
        CtaGroup::Links(entries) => (
            LINKS_GROUP_CLASS,
            entries
                .iter()
                .filter_map(|LinkEntry::Link(item)| render_link(item, pages))
                .collect(),
        ),
        CtaGroup::Buttons(entries) => (
            BUTTONS_GROUP_CLASS,
            entries
                .iter()
                .filter_map(|ButtonEntry::Button(item)| render_button(item, pages))
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
