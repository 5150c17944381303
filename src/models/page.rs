//! Page record and SEO element kind definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed set of SEO elements extracted from every page.
///
/// Each kind carries its display label, its keyword for the prefix
/// index, its ranking weight, and its missing-value placeholder.
/// Adding a new kind means adding a variant and extending the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Title,
    MetaDescription,
    OgTitle,
}

impl ElementKind {
    /// All element kinds, in presentation order.
    pub const ALL: [ElementKind; 3] = [
        ElementKind::Title,
        ElementKind::MetaDescription,
        ElementKind::OgTitle,
    ];

    /// Display label used in hierarchy and ranking views.
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Title => "Title",
            ElementKind::MetaDescription => "Meta Description",
            ElementKind::OgTitle => "Open Graph Title",
        }
    }

    /// Keyword inserted into the prefix index.
    pub fn keyword(self) -> &'static str {
        match self {
            ElementKind::Title => "title",
            ElementKind::MetaDescription => "meta description",
            ElementKind::OgTitle => "og title",
        }
    }

    /// Fixed ranking weight. Policy constant, not derived from content.
    pub fn relevance(self) -> u32 {
        match self {
            ElementKind::Title => 10,
            ElementKind::MetaDescription => 8,
            ElementKind::OgTitle => 6,
        }
    }

    /// Placeholder stored when the element is absent from the page.
    pub fn placeholder(self) -> &'static str {
        match self {
            ElementKind::Title => "No title tag found",
            ElementKind::MetaDescription => "No meta description found",
            ElementKind::OgTitle => "No Open Graph title found",
        }
    }

    /// Project this kind's field out of a page record.
    pub fn content(self, record: &PageRecord) -> &str {
        match self {
            ElementKind::Title => &record.title,
            ElementKind::MetaDescription => &record.meta_description,
            ElementKind::OgTitle => &record.og_title,
        }
    }
}

/// One page's extracted SEO field snapshot.
///
/// Absent elements are stored as the kind's placeholder string, never
/// as an error; the fetch layer applies that rule via [`PageRecord::new`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRecord {
    /// Page URL as fetched
    pub url: String,

    /// Contents of the `<title>` tag
    pub title: String,

    /// Contents of `<meta name="description">`
    pub meta_description: String,

    /// Contents of `<meta property="og:title">`
    pub og_title: String,

    /// When the page was fetched
    pub fetched_at: DateTime<Utc>,
}

impl PageRecord {
    /// Build a record from extracted fields, filling absent elements
    /// with their placeholders.
    pub fn new(
        url: impl Into<String>,
        title: Option<String>,
        meta_description: Option<String>,
        og_title: Option<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.unwrap_or_else(|| ElementKind::Title.placeholder().to_string()),
            meta_description: meta_description
                .unwrap_or_else(|| ElementKind::MetaDescription.placeholder().to_string()),
            og_title: og_title.unwrap_or_else(|| ElementKind::OgTitle.placeholder().to_string()),
            fetched_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_fill_missing_fields() {
        let record = PageRecord::new(
            "https://example.com",
            Some("Example".to_string()),
            None,
            None,
        );
        assert_eq!(record.title, "Example");
        assert_eq!(record.meta_description, "No meta description found");
        assert_eq!(record.og_title, "No Open Graph title found");
    }

    #[test]
    fn content_projects_record_fields() {
        let record = PageRecord::new(
            "https://example.com",
            Some("T".to_string()),
            Some("D".to_string()),
            Some("O".to_string()),
        );
        assert_eq!(ElementKind::Title.content(&record), "T");
        assert_eq!(ElementKind::MetaDescription.content(&record), "D");
        assert_eq!(ElementKind::OgTitle.content(&record), "O");
    }

    #[test]
    fn weights_match_policy() {
        let weights: Vec<u32> = ElementKind::ALL.iter().map(|k| k.relevance()).collect();
        assert_eq!(weights, vec![10, 8, 6]);
    }
}
