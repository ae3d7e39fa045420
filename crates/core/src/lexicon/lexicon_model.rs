//! Lexicon domain models and loading.

use std::collections::HashSet;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// A stored FAQ record with its matching keywords.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub category: String,
    pub answer: String,
    pub keywords: Vec<String>,
}

/// A stored navigation target with its matching keywords.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    pub url: String,
    pub intent: String,
    pub keywords: Vec<String>,
}

/// Wire shape of the FAQ table document.
#[derive(Debug, Deserialize)]
struct FaqTable {
    faqs: Vec<FaqEntry>,
}

/// Immutable, process-lifetime table of FAQ and navigation entries.
///
/// Constructed once at startup; all accessors take `&self` and the store is
/// never mutated afterwards. Navigation URLs are unique and serve as the
/// validation key for fallback model answers.
#[derive(Debug, Clone)]
pub struct Lexicon {
    navigation: Vec<NavigationEntry>,
    faqs: Vec<FaqEntry>,
}

impl Lexicon {
    /// Build a lexicon from already-parsed tables, enforcing invariants.
    pub fn new(navigation: Vec<NavigationEntry>, faqs: Vec<FaqEntry>) -> Result<Self> {
        let lexicon = Self { navigation, faqs };
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Parse a lexicon from the two JSON documents: the navigation table
    /// (array of entries) and the FAQ table (`{"faqs": [...]}`).
    pub fn from_json(site_map_json: &str, faq_json: &str) -> Result<Self> {
        let navigation: Vec<NavigationEntry> = serde_json::from_str(site_map_json)?;
        let faq_table: FaqTable = serde_json::from_str(faq_json)?;
        Self::new(navigation, faq_table.faqs)
    }

    /// Load a lexicon from the two JSON files on disk.
    pub fn from_files(site_map_path: &Path, faq_path: &Path) -> Result<Self> {
        let site_map_json = std::fs::read_to_string(site_map_path)
            .map_err(|e| Error::LexiconIO(format!("{}: {}", site_map_path.display(), e)))?;
        let faq_json = std::fs::read_to_string(faq_path)
            .map_err(|e| Error::LexiconIO(format!("{}: {}", faq_path.display(), e)))?;
        let lexicon = Self::from_json(&site_map_json, &faq_json)?;
        info!(
            "Lexicon loaded: {} navigation entries, {} FAQs",
            lexicon.navigation.len(),
            lexicon.faqs.len()
        );
        Ok(lexicon)
    }

    /// Build the lexicon bundled with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(
            include_str!("site_map.json"),
            include_str!("faq.json"),
        )
    }

    /// Navigation entries in lexicon order.
    pub fn navigation(&self) -> &[NavigationEntry] {
        &self.navigation
    }

    /// FAQ entries in lexicon order.
    pub fn faqs(&self) -> &[FaqEntry] {
        &self.faqs
    }

    /// Look up a navigation entry by its exact URL.
    pub fn navigation_by_url(&self, url: &str) -> Option<&NavigationEntry> {
        self.navigation.iter().find(|entry| entry.url == url)
    }

    fn validate(&self) -> Result<()> {
        if self.navigation.is_empty() {
            return Err(Error::InvalidLexicon(
                "navigation table is empty".to_string(),
            ));
        }
        if self.faqs.is_empty() {
            return Err(Error::InvalidLexicon("FAQ table is empty".to_string()));
        }

        let mut seen_urls = HashSet::new();
        for entry in &self.navigation {
            if !seen_urls.insert(entry.url.as_str()) {
                return Err(Error::InvalidLexicon(format!(
                    "duplicate navigation URL: {}",
                    entry.url
                )));
            }
            validate_keywords(&entry.keywords, &entry.url)?;
        }

        let mut seen_ids = HashSet::new();
        for faq in &self.faqs {
            if !seen_ids.insert(faq.id.as_str()) {
                return Err(Error::InvalidLexicon(format!("duplicate FAQ id: {}", faq.id)));
            }
            validate_keywords(&faq.keywords, &faq.id)?;
        }

        Ok(())
    }
}

fn validate_keywords(keywords: &[String], owner: &str) -> Result<()> {
    if keywords.is_empty() {
        return Err(Error::InvalidLexicon(format!(
            "entry {} has no keywords",
            owner
        )));
    }
    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(Error::InvalidLexicon(format!(
            "entry {} has a blank keyword",
            owner
        )));
    }
    Ok(())
}
