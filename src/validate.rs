//! Content validation run before rendering.
//!
//! Collects every problem in a body stream so authors can fix them in one
//! pass. Rendering assumes content that passed these checks.

use crate::blocks::{Block, ButtonEntry, Card, CtaGroup, LinkEntry, LinkTarget, TagEntry, TagGroup, HEADING_TAGS};
use crate::error::{BlockError, Result};
use crate::pages::PageIndex;

const URL_PREFIXES: [&str; 5] = ["http://", "https://", "mailto:", "tel:", "/"];

fn is_valid_url(url: &str) -> bool {
    URL_PREFIXES.iter().any(|p| url.starts_with(p)) && !url.contains(char::is_whitespace)
}

struct Validator<'a> {
    pages: &'a PageIndex,
    problems: Vec<String>,
}

impl<'a> Validator<'a> {
    fn report(&mut self, path: &str, message: impl AsRef<str>) {
        self.problems.push(format!("{}: {}", path, message.as_ref()));
    }

    /// Check a target; `required` targets must point somewhere
    fn check_target(&mut self, path: &str, target: &LinkTarget, required: bool) {
        if required && target.is_empty() {
            self.report(path, "link needs a page or an external URL");
        }
        if let Some(url) = target.url() {
            if !is_valid_url(url) {
                self.report(path, format!("invalid URL '{}'", url));
            }
        }
        if let Some(id) = target.page {
            // An empty index means pages are not known; skip the lookup
            if !self.pages.is_empty() && self.pages.get(id).is_none() {
                self.report(path, format!("unknown page {}", id));
            }
        }
    }

    fn check_card(&mut self, path: &str, card: &Card) {
        if card.title.trim().is_empty() {
            self.report(path, "title is empty");
        }
        if let Some(tag) = card.heading_tag.as_deref() {
            if !HEADING_TAGS.contains(&tag) {
                self.report(path, format!("invalid heading tag '{}'", tag));
            }
        }
        if let Some(url) = &card.url {
            self.check_target(&format!("{}.url", path), url, false);
        }

        for (i, group) in card.top_detail_badges_tags.iter().enumerate() {
            let group_path = format!("{}.top_detail_badges_tags[{}]", path, i);
            match group {
                TagGroup::Tags(entries) => {
                    for (j, TagEntry::Tag(tag)) in entries.iter().enumerate() {
                        let tag_path = format!("{}[{}]", group_path, j);
                        if tag.label.trim().is_empty() {
                            self.report(&tag_path, "tag label is empty");
                        }
                        if let Some(link) = &tag.link {
                            self.check_target(&tag_path, link, false);
                        }
                    }
                }
                TagGroup::Badges(_) => {}
            }
        }

        for (i, group) in card.call_to_action.iter().enumerate() {
            let group_path = format!("{}.call_to_action[{}]", path, i);
            match group {
                CtaGroup::Links(entries) => {
                    for (j, LinkEntry::Link(item)) in entries.iter().enumerate() {
                        let item_path = format!("{}[{}]", group_path, j);
                        if item.text.trim().is_empty() {
                            self.report(&item_path, "link text is empty");
                        }
                        self.check_target(&item_path, &item.target, true);
                    }
                }
                CtaGroup::Buttons(entries) => {
                    for (j, ButtonEntry::Button(item)) in entries.iter().enumerate() {
                        let item_path = format!("{}[{}]", group_path, j);
                        if item.text.trim().is_empty() {
                            self.report(&item_path, "button text is empty");
                        }
                        self.check_target(&item_path, &item.target, true);
                    }
                }
            }
        }
    }

    fn check_block(&mut self, path: &str, block: &Block) {
        match block {
            Block::Card(card) => self.check_card(path, card),
            Block::Paragraph(_) => {}
            Block::Multicolumns(columns) => {
                if columns.is_empty() {
                    self.report(path, "multicolumns block has no column");
                }
                for (i, column) in columns.iter().enumerate() {
                    self.check_block(&format!("{}[{}]", path, i), column);
                }
            }
        }
    }
}

/// Return every problem found in the body stream
pub fn validate_blocks(blocks: &[Block], pages: &PageIndex) -> Vec<String> {
    let mut validator = Validator {
        pages,
        problems: Vec::new(),
    };
    for (i, block) in blocks.iter().enumerate() {
        validator.check_block(&format!("body[{}] ({})", i, block.kind()), block);
    }
    validator.problems
}

/// Fail with `InvalidContent` when the body stream has problems
pub fn ensure_valid(blocks: &[Block], pages: &PageIndex) -> Result<()> {
    let problems = validate_blocks(blocks, pages);
    if problems.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = problems.len(), "content failed validation");
        Err(BlockError::InvalidContent(problems))
    }
}
