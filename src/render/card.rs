// src/render/card.rs
//! Card rendering

use crate::blocks::{Card, Orientation, RichText};
use crate::pages::PageIndex;

use super::cta::render_cta_group;
use super::tag::render_tag_group;
use super::utils::{add_class_to_paragraphs, class_list, escape_html};

pub const ENLARGE_CLASS: &str = "fr-enlarge-link";

/// Whether the whole card should act as its title link.
///
/// Only a card whose url resolves and that carries no other action
/// (no CTA group, no linked tag) gets the enlarge affordance.
pub fn is_enlarged(card: &Card, pages: &PageIndex) -> bool {
    if !card.call_to_action.is_empty() {
        return false;
    }
    if card.url.as_ref().and_then(|u| u.resolve(pages)).is_none() {
        return false;
    }
    !card
        .top_detail_badges_tags
        .iter()
        .flat_map(|g| g.link_targets())
        .any(|t| t.resolve(pages).is_some())
}

fn render_description(description: &RichText) -> String {
    if description.is_html() {
        add_class_to_paragraphs(description.as_str(), "fr-card__desc")
    } else {
        format!(
            r#"<p class="fr-card__desc">{}</p>"#,
            escape_html(description.as_str().trim())
        )
    }
}

/// Render a top-level card; horizontal unless the card says otherwise
pub fn render_card(card: &Card, pages: &PageIndex) -> String {
    render_card_with(card, pages, Orientation::Horizontal)
}

/// Render a card, using `default_orientation` when the card sets none
pub fn render_card_with(card: &Card, pages: &PageIndex, default_orientation: Orientation) -> String {
    let enlarged = is_enlarged(card, pages);
    let orientation = card.orientation.unwrap_or(default_orientation);
    let orientation_class = format!("fr-card--{}", orientation);

    let wrapper_classes = class_list([
        "fr-card",
        orientation_class.as_str(),
        if card.grey_background { "fr-card--grey" } else { "" },
        if card.no_background { "fr-card--no-background" } else { "" },
        if card.no_border { "fr-card--no-border" } else { "" },
        if card.shadow { "fr-card--shadow" } else { "" },
        if enlarged { ENLARGE_CLASS } else { "" },
    ]);

    tracing::debug!(title = %card.title, enlarged, %orientation, "rendering card");

    let mut html = format!(r#"<div class="{}">"#, wrapper_classes);
    html.push_str(r#"<div class="fr-card__body">"#);
    html.push_str(r#"<div class="fr-card__content">"#);

    // Title
    let heading = card.heading_tag();
    let title = escape_html(&card.title);
    match card.url.as_ref().and_then(|u| u.resolve(pages)) {
        Some(link) => html.push_str(&format!(
            r#"<{h} class="fr-card__title"><a href="{}">{}</a></{h}>"#,
            escape_html(&link.href),
            title,
            h = heading
        )),
        None => html.push_str(&format!(
            r#"<{h} class="fr-card__title">{}</{h}>"#,
            title,
            h = heading
        )),
    }

    if let Some(description) = card.description.as_ref().filter(|d| !d.is_empty()) {
        html.push_str(&render_description(description));
    }

    // Top details: tag and badge groups, then the detail line
    let groups: String = card
        .top_detail_badges_tags
        .iter()
        .map(|g| render_tag_group(g, pages))
        .collect();
    let top_detail = card.top_detail_text.as_deref().filter(|t| !t.trim().is_empty());
    if !groups.is_empty() || top_detail.is_some() {
        html.push_str(r#"<div class="fr-card__start">"#);
        html.push_str(&groups);
        if let Some(text) = top_detail {
            html.push_str(&format!(
                r#"<p class="fr-card__detail">{}</p>"#,
                escape_html(text)
            ));
        }
        html.push_str("</div>");
    }

    if let Some(text) = card.bottom_detail_text.as_deref().filter(|t| !t.trim().is_empty()) {
        let icon = card.bottom_detail_icon.as_deref().unwrap_or("");
        html.push_str(&format!(
            r#"<div class="fr-card__end"><p class="{}">{}</p></div>"#,
            escape_html(&class_list(["fr-card__detail", icon])),
            escape_html(text)
        ));
    }

    html.push_str("</div>");

    // Explicit actions
    let actions: String = card
        .call_to_action
        .iter()
        .map(|g| render_cta_group(g, pages))
        .collect();
    if !actions.is_empty() {
        html.push_str(r#"<div class="fr-card__footer">"#);
        html.push_str(&actions);
        html.push_str("</div>");
    }

    html.push_str("</div>");

    if let Some(image) = card.image.as_ref().filter(|i| !i.src.trim().is_empty()) {
        html.push_str(&format!(
            r#"<div class="fr-card__header"><div class="fr-card__img"><img class="fr-responsive-img" src="{}" alt="{}"></div></div>"#,
            escape_html(&image.src),
            escape_html(&image.alt)
        ));
    }

    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{ButtonItem, CardImage, CtaGroup, LinkItem, LinkTarget, Tag, TagGroup};
    use crate::pages::PageEntry;

    fn sample_card() -> Card {
        let mut card = Card::new("Sample card");
        card.description = Some(RichText::new(
            r#"<p data-block-key="test">This is a sample card.</p>"#,
        ));
        card
    }

    fn linked_card() -> Card {
        let mut card = Card::new("Sample card");
        card.description = Some(RichText::new("This is a sample card."));
        card.url = Some(LinkTarget::external("https://www.info.gouv.fr"));
        card
    }

    fn pages() -> PageIndex {
        PageIndex::new(vec![
            PageEntry::new(1, "Home", "home", None),
            PageEntry::new(7, "Démarches", "demarches", Some(1)),
        ])
    }

    #[test]
    fn test_basic_card_structure() {
        let html = render_card(&sample_card(), &pages());
        assert!(html.starts_with(r#"<div class="fr-card fr-card--horizontal">"#));
        assert!(html.contains(r#"<h3 class="fr-card__title">Sample card</h3>"#));
        assert!(html.contains(
            r#"<p class="fr-card__desc" data-block-key="test">This is a sample card.</p>"#
        ));
        assert!(!html.contains(ENLARGE_CLASS));
        assert!(!html.contains("fr-card__footer"));
    }

    #[test]
    fn test_card_with_url_is_enlarged() {
        let html = render_card(&linked_card(), &pages());
        assert!(html.starts_with(r#"<div class="fr-card fr-card--horizontal fr-enlarge-link">"#));
        assert!(html.contains(r#"<a href="https://www.info.gouv.fr">Sample card</a>"#));
        assert!(html.contains(r#"<p class="fr-card__desc">This is a sample card.</p>"#));
    }

    #[test]
    fn test_card_linked_to_page() {
        let mut card = Card::new("Démarches");
        card.url = Some(LinkTarget::page(7));
        let html = render_card(&card, &pages());
        assert!(html.contains(ENLARGE_CLASS));
        assert!(html.contains(r#"<a href="/demarches/">Démarches</a>"#));
    }

    #[test]
    fn test_card_linked_to_unknown_page_is_plain() {
        let mut card = Card::new("Lost");
        card.url = Some(LinkTarget::page(404));
        let html = render_card(&card, &pages());
        assert!(!html.contains(ENLARGE_CLASS));
        assert!(html.contains(r#"<h3 class="fr-card__title">Lost</h3>"#));
    }

    #[test]
    fn test_cta_links_suppress_enlarge() {
        let mut card = linked_card();
        card.call_to_action = vec![CtaGroup::links(vec![LinkItem {
            target: LinkTarget::external("https://numerique.gouv.fr"),
            text: "Lien externe".to_string(),
        }])];
        let html = render_card(&card, &pages());
        assert!(!html.contains(ENLARGE_CLASS));
        assert!(html.contains(r#"<a href="https://www.info.gouv.fr">Sample card</a>"#));
        assert!(html.contains(concat!(
            r#"<div class="fr-card__footer"><ul class="fr-links-group"><li>"#,
            r#"<a href="https://numerique.gouv.fr" target="_blank" rel="noopener external">Lien externe</a>"#,
            "</li></ul></div>"
        )));
    }

    #[test]
    fn test_cta_buttons_suppress_enlarge() {
        let mut card = linked_card();
        card.call_to_action = vec![CtaGroup::buttons(vec![ButtonItem {
            target: LinkTarget::external("https://numerique.gouv.fr"),
            text: "Label".to_string(),
            button_type: Some("fr-btn fr-btn--secondary".to_string()),
        }])];
        let html = render_card(&card, &pages());
        assert!(!html.contains(ENLARGE_CLASS));
        assert!(html.contains(
            r#"<ul class="fr-btns-group fr-btns-group--inline-reverse fr-btns-group--inline-lg"><li><a class="fr-btn fr-btn--secondary" href="https://numerique.gouv.fr" target="_blank" rel="noopener external">Label</a></li></ul>"#
        ));
    }

    #[test]
    fn test_cta_group_suppresses_enlarge_without_url() {
        let mut card = Card::new("No url");
        card.call_to_action = vec![CtaGroup::links(vec![LinkItem {
            target: LinkTarget::external("https://numerique.gouv.fr"),
            text: "Seul lien".to_string(),
        }])];
        assert!(!is_enlarged(&card, &pages()));
    }

    #[test]
    fn test_plain_tag_keeps_enlarge() {
        let mut card = linked_card();
        card.top_detail_badges_tags = vec![TagGroup::tags(vec![Tag {
            label: "Tag 1".to_string(),
            link: None,
            color: Some("purple-glycine".to_string()),
            is_small: false,
            icon_class: Some("fr-icon-community-fill".to_string()),
        }])];
        let html = render_card(&card, &pages());
        assert!(html.contains(ENLARGE_CLASS));
        assert!(html.contains(concat!(
            r#"<div class="fr-card__start"><ul class="fr-tags-group"><li>"#,
            r#"<p class="fr-tag fr-tag--purple-glycine fr-icon-community-fill fr-tag--icon-left">Tag 1</p>"#,
            "</li></ul></div>"
        )));
    }

    #[test]
    fn test_linked_tag_suppresses_enlarge() {
        let mut card = linked_card();
        let mut tag = Tag::new("Tag 1");
        tag.link = Some(LinkTarget::external("https://numerique.gouv.fr"));
        card.top_detail_badges_tags = vec![TagGroup::tags(vec![tag])];
        let html = render_card(&card, &pages());
        assert!(!html.contains(ENLARGE_CLASS));
        assert!(html.contains(r#"<a href="https://numerique.gouv.fr" class="fr-tag">Tag 1</a>"#));
    }

    #[test]
    fn test_default_orientation_and_override() {
        let card = sample_card();
        let html = render_card_with(&card, &pages(), Orientation::Vertical);
        assert!(html.starts_with(r#"<div class="fr-card fr-card--vertical">"#));

        let mut horizontal = sample_card();
        horizontal.orientation = Some(Orientation::Horizontal);
        let html = render_card_with(&horizontal, &pages(), Orientation::Vertical);
        assert!(html.starts_with(r#"<div class="fr-card fr-card--horizontal">"#));
    }

    #[test]
    fn test_presentation_options() {
        let mut card = sample_card();
        card.heading_tag = Some("h2".to_string());
        card.grey_background = true;
        card.shadow = true;
        card.image = Some(CardImage {
            src: "/media/card.png".to_string(),
            alt: "".to_string(),
        });
        card.top_detail_text = Some("Publié le 3 mars".to_string());
        card.bottom_detail_text = Some("5 min".to_string());
        card.bottom_detail_icon = Some("fr-icon-time-line".to_string());

        let html = render_card(&card, &pages());
        assert!(html.starts_with(
            r#"<div class="fr-card fr-card--horizontal fr-card--grey fr-card--shadow">"#
        ));
        assert!(html.contains(r#"<h2 class="fr-card__title">Sample card</h2>"#));
        assert!(html.contains(
            r#"<div class="fr-card__start"><p class="fr-card__detail">Publié le 3 mars</p></div>"#
        ));
        assert!(html.contains(
            r#"<div class="fr-card__end"><p class="fr-card__detail fr-icon-time-line">5 min</p></div>"#
        ));
        assert!(html.ends_with(
            r#"<div class="fr-card__header"><div class="fr-card__img"><img class="fr-responsive-img" src="/media/card.png" alt=""></div></div></div>"#
        ));
    }

    #[test]
    fn test_bottom_detail_icon_is_escaped() {
        let mut card = Card::new("Card");
        card.bottom_detail_text = Some("5 min".to_string());
        card.bottom_detail_icon = Some(r#"x" onclick="y"#.to_string());
        let html = render_card(&card, &pages());
        assert!(html.contains(r#"<p class="fr-card__detail x&quot; onclick=&quot;y">5 min</p>"#));
    }

    #[test]
    fn test_invalid_heading_tag_falls_back_to_h3() {
        let mut card = Card::new("T");
        card.heading_tag = Some("h1 onclick=x".to_string());
        let html = render_card(&card, &pages());
        assert!(html.contains(r#"<h3 class="fr-card__title">T</h3>"#));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render_card(&Card::new("Q&A <draft>"), &pages());
        assert!(html.contains("Q&amp;A &lt;draft&gt;"));
    }
}
