use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Site-wide settings used by the page layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Service title shown next to the brand block
    pub site_name: String,
    pub tagline: String,
    /// Institutional block text; lines are separated by "\n"
    pub brand_label: String,
    pub footer_description: String,
    /// `lang` attribute of the document
    pub language: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Sites Faciles".to_string(),
            tagline: "Créez facilement un site conforme au DSFR".to_string(),
            brand_label: "République\nFrançaise".to_string(),
            footer_description: String::new(),
            language: "fr".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load settings from a YAML file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
