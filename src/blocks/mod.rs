//! Block content model
//!
//! Blocks arrive in the CMS stream-field shape: every block and every
//! grouped child is an object `{"type": ..., "value": ...}`.

mod card;
mod link;
mod tag;

pub use card::{Card, CardImage, Orientation, DEFAULT_HEADING_TAG, HEADING_TAGS};
pub use link::{
    deserialize_target, ButtonEntry, ButtonItem, CtaGroup, LinkEntry, LinkItem, LinkTarget,
    ResolvedLink,
};
pub use tag::{Badge, BadgeEntry, Tag, TagEntry, TagGroup};

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{BlockError, Result};

/// Rich text as stored by the editor, or a plain string.
///
/// Content starting with a tag is treated as HTML and passed through;
/// anything else is plain text and gets escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub String);

impl RichText {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn is_html(&self) -> bool {
        self.0.trim_start().starts_with('<')
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RichText {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Block {
    Card(Card),
    Paragraph(RichText),
    Multicolumns(Vec<Block>),
}

impl Block {
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Card(_) => "card",
            Block::Paragraph(_) => "paragraph",
            Block::Multicolumns(_) => "multicolumns",
        }
    }
}

/// A content page: a title plus its body blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub body: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick the format from the file extension; no extension means JSON
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(InputFormat::Json),
            Some(ext) => match ext.to_lowercase().as_str() {
                "json" => Ok(InputFormat::Json),
                "yaml" | "yml" => Ok(InputFormat::Yaml),
                other => Err(BlockError::UnsupportedFormat(other.to_string())),
            },
        }
    }
}

/// Parse content of the given format
pub fn parse<T: DeserializeOwned>(content: &str, format: InputFormat) -> Result<T> {
    match format {
        InputFormat::Json => Ok(serde_json::from_str(content)?),
        InputFormat::Yaml => Ok(serde_yaml::from_str(content)?),
    }
}

/// Read and parse a JSON or YAML file
pub fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = InputFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), ?format, "reading input");
    parse(&content, format)
}

/// Load a stream of body blocks
pub fn load_blocks(path: &Path) -> Result<Vec<Block>> {
    read_file(path)
}

/// Load a page (title, slug, body)
pub fn load_page(path: &Path) -> Result<Page> {
    read_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rich_text_detection() {
        assert!(RichText::from(r#"<p data-block-key="test">Hi</p>"#).is_html());
        assert!(RichText::from("  <p>Hi</p>").is_html());
        assert!(!RichText::from("This is a sample card.").is_html());
    }

    #[test]
    fn test_body_stream_from_json() {
        let json = r#"[
            {"type": "card", "value": {"title": "Sample card", "description": "<p data-block-key=\"test\">This is a sample card.</p>"}},
            {"type": "paragraph", "value": "<p>Intro</p>"},
            {"type": "multicolumns", "value": [{"type": "card", "value": {"title": "Inner"}}]}
        ]"#;
        let blocks: Vec<Block> = parse(json, InputFormat::Json).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].kind(), "card");
        assert_eq!(blocks[1].kind(), "paragraph");
        match &blocks[2] {
            Block::Multicolumns(columns) => assert_eq!(columns.len(), 1),
            other => panic!("Expected multicolumns, got {}", other.kind()),
        }
    }

    #[test]
    fn test_body_stream_from_yaml() {
        let yaml = r#"
- type: card
  value:
    title: Sample card
    url: https://www.info.gouv.fr
    call_to_action:
      - type: links
        value:
          - type: link
            value:
              page: null
              text: Lien externe
              external_url: https://numerique.gouv.fr
"#;
        let blocks: Vec<Block> = parse(yaml, InputFormat::Yaml).unwrap();
        match &blocks[0] {
            Block::Card(card) => {
                assert_eq!(card.title, "Sample card");
                assert_eq!(card.call_to_action.len(), 1);
            }
            other => panic!("Expected card, got {}", other.kind()),
        }
    }

    #[test]
    fn test_unknown_block_type_is_rejected() {
        let json = r#"[{"type": "carousel", "value": {}}]"#;
        let result: Result<Vec<Block>> = parse(json, InputFormat::Json);
        assert!(matches!(result, Err(BlockError::Json(_))));
    }

    #[test]
    fn test_input_format_from_path() {
        assert_eq!(
            InputFormat::from_path(Path::new("body.yml")).unwrap(),
            InputFormat::Yaml
        );
        assert_eq!(
            InputFormat::from_path(Path::new("body.JSON")).unwrap(),
            InputFormat::Json
        );
        assert_eq!(
            InputFormat::from_path(Path::new("body")).unwrap(),
            InputFormat::Json
        );
        assert!(matches!(
            InputFormat::from_path(Path::new("body.toml")),
            Err(BlockError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_page_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("page.json");
        std::fs::write(
            &path,
            r#"{"title": "Sample cards page", "slug": "content-page", "body": [{"type": "card", "value": {"title": "Sample card"}}]}"#,
        )
        .unwrap();

        let page = load_page(&path).unwrap();
        assert_eq!(page.title, "Sample cards page");
        assert_eq!(page.slug.as_deref(), Some("content-page"));
        assert_eq!(page.body.len(), 1);
    }
}
