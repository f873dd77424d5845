// src/render/page.rs
//! Full page layout: header, main content, footer

use crate::blocks::Page;
use crate::config::SiteConfig;
use crate::pages::PageIndex;

use super::card::ENLARGE_CLASS;
use super::render_body;
use super::utils::escape_html;

/// Institutional brand block; the brand link makes the whole block clickable
fn brand_block(area: &str, config: &SiteConfig) -> String {
    let label = config
        .brand_label
        .lines()
        .map(escape_html)
        .collect::<Vec<_>>()
        .join("<br>");

    format!(
        concat!(
            r#"<div class="fr-{area}__brand {enlarge}">"#,
            r#"<div class="fr-{area}__brand-top"><div class="fr-logo">{label}</div></div>"#,
            r#"<a href="/" title="Accueil - {site}">{site}</a>"#,
            "</div>"
        ),
        area = area,
        enlarge = ENLARGE_CLASS,
        label = label,
        site = escape_html(&config.site_name),
    )
}

fn render_header(config: &SiteConfig) -> String {
    let mut html = String::from(r#"<header role="banner" class="fr-header">"#);
    html.push_str(&brand_block("header", config));
    if !config.tagline.is_empty() {
        html.push_str(&format!(
            r#"<p class="fr-header__service-tagline">{}</p>"#,
            escape_html(&config.tagline)
        ));
    }
    html.push_str("</header>");
    html
}

fn render_footer(config: &SiteConfig) -> String {
    let mut html = String::from(r#"<footer class="fr-footer" role="contentinfo">"#);
    html.push_str(&brand_block("footer", config));
    if !config.footer_description.is_empty() {
        html.push_str(&format!(
            r#"<p class="fr-footer__content-desc">{}</p>"#,
            escape_html(&config.footer_description)
        ));
    }
    html.push_str("</footer>");
    html
}

/// Render a complete HTML document for a page
pub fn render_page(page: &Page, pages: &PageIndex, config: &SiteConfig) -> String {
    tracing::debug!(title = %page.title, blocks = page.body.len(), "rendering page");

    let mut html = String::from("<!DOCTYPE html>\n");
    html.push_str(&format!(r#"<html lang="{}">"#, escape_html(&config.language)));
    html.push_str(&format!(
        r#"<head><meta charset="utf-8"><title>{} - {}</title></head>"#,
        escape_html(&page.title),
        escape_html(&config.site_name)
    ));
    html.push_str("<body>");
    html.push_str(&render_header(config));
    html.push_str(r#"<main id="content" role="main"><div class="fr-container fr-my-6w">"#);
    html.push_str(&format!("<h1>{}</h1>", escape_html(&page.title)));
    html.push_str(&render_body(&page.body, pages));
    html.push_str("</div></main>");
    html.push_str(&render_footer(config));
    html.push_str("</body></html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_footer_carry_enlarge_class() {
        let page = Page {
            title: "Empty".to_string(),
            slug: None,
            body: vec![],
        };
        let html = render_page(&page, &PageIndex::default(), &SiteConfig::default());
        assert_eq!(html.matches(ENLARGE_CLASS).count(), 2);
        assert!(html.contains(r#"<div class="fr-header__brand fr-enlarge-link">"#));
        assert!(html.contains(r#"<div class="fr-footer__brand fr-enlarge-link">"#));
    }

    #[test]
    fn test_brand_label_lines() {
        let html = brand_block("header", &SiteConfig::default());
        assert!(html.contains(r#"<div class="fr-logo">République<br>Française</div>"#));
    }

    #[test]
    fn test_page_title_and_language() {
        let page = Page {
            title: "Sample cards page".to_string(),
            slug: Some("content-page".to_string()),
            body: vec![],
        };
        let config = SiteConfig {
            site_name: "Mon site".to_string(),
            footer_description: "Un site de test".to_string(),
            ..Default::default()
        };
        let html = render_page(&page, &PageIndex::default(), &config);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"fr\">"));
        assert!(html.contains("<title>Sample cards page - Mon site</title>"));
        assert!(html.contains("<h1>Sample cards page</h1>"));
        assert!(html.contains(r#"<p class="fr-footer__content-desc">Un site de test</p>"#));
    }
}
