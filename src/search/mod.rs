pub mod blog;
pub mod project;

pub use blog::BlogSearch;
pub use project::ProjectSearch;

use std::time::{Duration, Instant};

use url::Url;

/// How long typing must stay quiet before a keystroke-triggered search fires.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Keystroke quiescence tracker. Each keystroke reschedules the pending
/// search; `ready` reports (once) when the window has elapsed. Explicit
/// submits call `flush` and bypass the window entirely.
#[derive(Debug, Default)]
pub struct Debouncer {
    last_input: Option<Instant>,
}

impl Debouncer {
    pub fn new() -> Self {
        Debouncer { last_input: None }
    }

    /// Record a keystroke at `now`, rescheduling the pending search.
    pub fn input(&mut self, now: Instant) {
        self.last_input = Some(now);
    }

    /// True once the quiescence window has passed since the last keystroke.
    /// Consumes the pending input so the search fires exactly once.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_input {
            Some(t) if now.duration_since(t) >= DEBOUNCE_WINDOW => {
                self.last_input = None;
                true
            }
            _ => false,
        }
    }

    /// Discard any pending keystroke; returns whether one was pending.
    pub fn flush(&mut self) -> bool {
        self.last_input.take().is_some()
    }
}

/// The `q` / `category` pair carried in the page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlState {
    pub q: Option<String>,
    pub category: Option<String>,
}

impl UrlState {
    /// Read `q` and `category` from a page URL. Unparseable URLs and empty
    /// values are treated as absent.
    pub fn from_url(url: &str) -> UrlState {
        let parsed = match Url::parse(url) {
            Ok(u) => u,
            Err(_) => return UrlState::default(),
        };
        let mut state = UrlState::default();
        for (k, v) in parsed.query_pairs() {
            match k.as_ref() {
                "q" if !v.is_empty() => state.q = Some(v.into_owned()),
                "category" if !v.is_empty() => state.category = Some(v.into_owned()),
                _ => {}
            }
        }
        state
    }

    /// Rewrite `url` so its query string reflects this state, leaving every
    /// other parameter intact. Clearing passes both fields as None, which
    /// strips `q` and `category` without a navigation.
    pub fn apply_to(&self, url: &str) -> String {
        let mut parsed = match Url::parse(url) {
            Ok(u) => u,
            Err(_) => return url.to_string(),
        };
        let kept: Vec<(String, String)> = parsed
            .query_pairs()
            .filter(|(k, _)| k != "q" && k != "category")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let had_pairs = !kept.is_empty() || self.q.is_some() || self.category.is_some();
        parsed.set_query(None);
        if had_pairs {
            let mut pairs = parsed.query_pairs_mut();
            for (k, v) in &kept {
                pairs.append_pair(k, v);
            }
            if let Some(q) = &self.q {
                pairs.append_pair("q", q);
            }
            if let Some(c) = &self.category {
                pairs.append_pair("category", c);
            }
        }
        parsed.to_string()
    }
}

/// Which optional page elements exist. Each missing element silently
/// disables its corresponding update instead of failing.
#[derive(Debug, Clone, Copy)]
pub struct SearchUi {
    pub count_label: bool,
    pub clear_button: bool,
    pub suggestions: bool,
    pub sort_select: bool,
}

impl Default for SearchUi {
    fn default() -> Self {
        SearchUi {
            count_label: true,
            clear_button: true,
            suggestions: true,
            sort_select: true,
        }
    }
}

/// The DOM writes one controller operation produced. Fields are None when
/// the corresponding page element is absent and nothing should change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewUpdate {
    /// Replacement markup for the results container.
    pub html: String,
    /// New text for the results-count label.
    pub count_message: Option<String>,
    /// Whether the clear affordance should be visible.
    pub show_clear: Option<bool>,
    /// The page URL reflecting the current `q` / `category` state.
    pub url: Option<String>,
}

/// The four results-count messages, chosen by which inputs are active.
pub(crate) fn count_message(
    noun: &str,
    shown: usize,
    query: &str,
    category: Option<&str>,
) -> String {
    let q = query.trim();
    let plural = if shown == 1 { "" } else { "s" };
    match (q.is_empty(), category) {
        (false, Some(c)) => format!(
            "{} result{} for \u{201c}{}\u{201d} in {}",
            shown, plural, q, c
        ),
        (false, None) => format!("{} result{} for \u{201c}{}\u{201d}", shown, plural, q),
        (true, Some(c)) => format!("{} {} in {}", shown, noun, c),
        (true, None) => format!("Showing all {} {}", shown, noun),
    }
}
