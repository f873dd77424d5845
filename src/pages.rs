//! Read-only page index used to resolve internal page links.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

pub type PageId = u32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEntry {
    pub id: PageId,
    pub title: String,
    pub slug: String,
    /// None for the site root
    #[serde(default)]
    pub parent: Option<PageId>,
}

impl PageEntry {
    pub fn new(id: PageId, title: &str, slug: &str, parent: Option<PageId>) -> Self {
        Self {
            id,
            title: title.to_string(),
            slug: slug.to_string(),
            parent,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    pages: HashMap<PageId, PageEntry>,
}

impl PageIndex {
    pub fn new(entries: Vec<PageEntry>) -> Self {
        let pages = entries.into_iter().map(|p| (p.id, p)).collect();
        Self { pages }
    }

    /// Load the index from a JSON or YAML list of entries
    pub fn load(path: &Path) -> Result<Self> {
        let entries: Vec<PageEntry> = crate::blocks::read_file(path)?;
        tracing::debug!(count = entries.len(), "loaded page index");
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, id: PageId) -> Option<&PageEntry> {
        self.pages.get(&id)
    }

    /// Site-relative URL of a page: "/" for the root, "/a/b/" below it.
    ///
    /// Returns None for unknown pages and for broken or cyclic parent chains.
    pub fn url_for(&self, id: PageId) -> Option<String> {
        let mut slugs = Vec::new();
        let mut current = self.pages.get(&id)?;

        while let Some(parent) = current.parent {
            if slugs.len() > self.pages.len() {
                tracing::warn!(page = id, "cycle in page parents");
                return None;
            }
            slugs.push(current.slug.as_str());
            current = self.pages.get(&parent)?;
        }

        if slugs.is_empty() {
            return Some("/".to_string());
        }

        slugs.reverse();
        Some(format!("/{}/", slugs.join("/")))
    }
}
