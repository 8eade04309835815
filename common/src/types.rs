//! Portfolio data types
//!
//! Shared between the CLI and any presentation layer:
//! - ProjectRecord: one portfolio entry
//! - Category: selectable labels of the projects filter bar
//! - SuggestionResult: structured output of one generation call

use serde::{Deserialize, Serialize};

/// Selectable category labels
///
/// `All` is a filter-only value meaning "no filter" and is never stored on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    Web,
    Mobile,
    Design,
    Writing,
    Other,
}

impl Category {
    /// Filter bar order
    pub const VALUES: [Category; 6] = [
        Category::All,
        Category::Web,
        Category::Mobile,
        Category::Design,
        Category::Writing,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "Semua",
            Category::Web => "Web Dev",
            Category::Mobile => "Mobile App",
            Category::Design => "UI/UX Design",
            Category::Writing => "Writing",
            Category::Other => "Lainnya",
        }
    }

    /// Exact, case-sensitive label lookup
    pub fn from_label(label: &str) -> Option<Category> {
        Self::VALUES.into_iter().find(|c| c.label() == label)
    }

    /// Labels a record may carry (everything except `All`)
    pub fn record_labels() -> impl Iterator<Item = &'static str> {
        Self::VALUES
            .into_iter()
            .filter(|c| *c != Category::All)
            .map(|c| c.label())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One portfolio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description: String,

    /// Free text so unknown labels survive without a schema change
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Primary image
    #[serde(default)]
    pub image_url: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_urls: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ProjectRecord {
    /// Ordered images of the card, never empty
    pub fn gallery(&self) -> &[String] {
        if self.image_urls.is_empty() {
            std::slice::from_ref(&self.image_url)
        } else {
            &self.image_urls
        }
    }
}

/// Structured output of one generation call
///
/// `description` is asked to stay under ~200 characters; nothing here enforces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
}
