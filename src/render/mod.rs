// src/render/mod.rs
//! HTML rendering of content blocks
//!
//! Every renderer is a pure function from block data (plus the read-only
//! page index) to an HTML fragment.

mod card;
mod cta;
mod page;
mod tag;
pub mod utils;

pub use self::card::{is_enlarged, render_card, render_card_with, ENLARGE_CLASS};
pub use self::cta::{render_button, render_cta_group, render_link};
pub use self::page::render_page;
pub use self::tag::{render_badge, render_tag, render_tag_group, tag_classes};
pub use self::utils::{add_class_to_paragraphs, escape_html};

use crate::blocks::{Block, Orientation, RichText};
use crate::pages::PageIndex;

const GRID_COLUMNS: usize = 12;

fn render_paragraph(text: &RichText) -> String {
    if text.is_html() {
        text.as_str().to_string()
    } else {
        format!("<p>{}</p>", escape_html(text.as_str().trim()))
    }
}

fn render_columns(columns: &[Block], pages: &PageIndex) -> String {
    if columns.is_empty() {
        return String::new();
    }

    let width = (GRID_COLUMNS / columns.len()).max(1);
    let mut html = String::from(r#"<div class="fr-grid-row fr-grid-row--gutters">"#);
    for column in columns {
        html.push_str(&format!(r#"<div class="fr-col-12 fr-col-md-{}">"#, width));
        html.push_str(&render_block_in(column, pages, Orientation::Vertical));
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn render_block_in(block: &Block, pages: &PageIndex, orientation: Orientation) -> String {
    match block {
        Block::Card(card) => render_card_with(card, pages, orientation),
        Block::Paragraph(text) => render_paragraph(text),
        Block::Multicolumns(columns) => render_columns(columns, pages),
    }
}

/// Render one top-level block
pub fn render_block(block: &Block, pages: &PageIndex) -> String {
    render_block_in(block, pages, Orientation::Horizontal)
}

/// Render a body stream, one block per line
pub fn render_body(blocks: &[Block], pages: &PageIndex) -> String {
    blocks
        .iter()
        .map(|b| render_block(b, pages))
        .collect::<Vec<_>>()
        .join("\n")
}
