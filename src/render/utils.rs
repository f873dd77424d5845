// src/render/utils.rs
//! Markup helpers shared by the block renderers

use crate::blocks::ResolvedLink;

/// Escape text for use in element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Join class names, skipping empty ones
pub fn class_list<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `target`/`rel` attributes for links leaving the site, with a leading space
pub fn external_attrs(link: &ResolvedLink) -> &'static str {
    if link.external {
        r#" target="_blank" rel="noopener external""#
    } else {
        ""
    }
}

/// Byte offset of a standalone `class="` attribute in a tag's attribute text.
///
/// Only matches at the start or after whitespace, so `data-class="..."` is
/// left alone.
fn find_class_attr(attrs: &str) -> Option<usize> {
    attrs.match_indices("class=\"").map(|(pos, _)| pos).find(|&pos| {
        pos == 0
            || attrs[..pos]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace)
    })
}

/// Add `class` to every `<p>` opening tag of an HTML fragment.
///
/// All other attributes are kept verbatim; an existing class attribute is
/// extended rather than duplicated.
pub fn add_class_to_paragraphs(html: &str, class: &str) -> String {
    let mut out = String::with_capacity(html.len() + class.len() * 2);
    let mut rest = html;

    while let Some(pos) = rest.find("<p") {
        let after = &rest[pos + 2..];
        let is_paragraph = matches!(after.chars().next(), Some(c) if c == '>' || c.is_whitespace());
        let tag_end = after.find('>');

        match (is_paragraph, tag_end) {
            (true, Some(end)) => {
                let attrs = &after[..end];
                out.push_str(&rest[..pos]);
                if let Some(class_pos) = find_class_attr(attrs) {
                    let split = class_pos + "class=\"".len();
                    out.push_str("<p");
                    out.push_str(&attrs[..split]);
                    out.push_str(class);
                    out.push(' ');
                    out.push_str(&attrs[split..]);
                } else {
                    out.push_str("<p class=\"");
                    out.push_str(class);
                    out.push('"');
                    out.push_str(attrs);
                }
                out.push('>');
                rest = &after[end + 1..];
            }
            _ => {
                out.push_str(&rest[..pos + 2]);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
