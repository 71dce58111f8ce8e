use serde::{Deserialize, Serialize};

use crate::engine::Record;

/// A blog post as it appears in the page's embedded JSON data block.
/// Every field is optional in the source; absent fields deserialize to
/// their empty defaults so one sparse entry never sinks the whole set.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Post {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub author: String,
}

impl Post {
    /// Load the post set from the page, trying each source in order.
    pub fn load_embedded(sources: &[Option<&str>]) -> Vec<Post> {
        super::load_embedded(sources)
    }

    /// The text shown under the title on a card: the explicit excerpt
    /// when one exists, otherwise the leading words of the content.
    pub fn display_excerpt(&self, max_words: usize) -> String {
        if self.excerpt.is_empty() {
            crate::render::truncate_words(&self.content, max_words)
        } else {
            self.excerpt.clone()
        }
    }
}

impl Record for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> &str {
        &self.date
    }

    /// A post matches when the query is a substring of the concatenated
    /// title, content, category, tags, and author. `q` arrives lowercased.
    fn matches_query(&self, q: &str) -> bool {
        let haystack = format!(
            "{} {} {} {} {}",
            self.title,
            self.content,
            self.category,
            self.tags.join(" "),
            self.author
        );
        haystack.to_lowercase().contains(q)
    }

    /// Posts carry a single category; the filter is an exact match
    /// (case-insensitive, matching the page's lowercased data attributes).
    fn matches_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}
