use serde::{Deserialize, Serialize};

use crate::engine::{Record, DEFAULT_ORDER};

/// A portfolio project from the page's embedded JSON data block.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Explicit display position; entries without one sort last.
    #[serde(default)]
    pub order: Option<i64>,
}

impl Project {
    /// Load the project set from the page, trying each source in order.
    pub fn load_embedded(sources: &[Option<&str>]) -> Vec<Project> {
        super::load_embedded(sources)
    }
}

impl Record for Project {
    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn sort_order(&self) -> i64 {
        self.order.unwrap_or(DEFAULT_ORDER)
    }

    /// A project matches when the query is a substring of the title or
    /// description, or of any technology or category entry.
    fn matches_query(&self, q: &str) -> bool {
        self.title.to_lowercase().contains(q)
            || self.description.to_lowercase().contains(q)
            || self.technologies.iter().any(|t| t.to_lowercase().contains(q))
            || self.categories.iter().any(|c| c.to_lowercase().contains(q))
    }

    /// Projects can sit in several categories; the filter checks membership.
    fn matches_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.eq_ignore_ascii_case(category))
    }
}
