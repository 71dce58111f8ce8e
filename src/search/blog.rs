use std::time::Instant;

use crate::engine::{self, SortKey};
use crate::models::Post;
use crate::render;

use super::{count_message, Debouncer, SearchUi, UrlState, ViewUpdate};

/// Search controller for the blog page. Owns the loaded posts and the
/// current view state; every operation recomputes the visible subset from
/// the full source and returns the DOM writes for the page glue to apply.
pub struct BlogSearch {
    posts: Vec<Post>,
    query: String,
    category: Option<String>,
    sort: SortKey,
    /// Indices into `posts`, already filtered and sorted.
    current: Vec<usize>,
    ui: SearchUi,
    debounce: Debouncer,
    pending_query: Option<String>,
    page_url: Option<String>,
    reveal_hook: Option<Box<dyn Fn()>>,
}

impl BlogSearch {
    pub fn new(posts: Vec<Post>) -> Self {
        Self::with_ui(posts, SearchUi::default())
    }

    /// Construct with explicit element presence; a page missing, say, the
    /// count label passes `count_label: false` and never receives count
    /// messages.
    pub fn with_ui(posts: Vec<Post>, ui: SearchUi) -> Self {
        let mut search = BlogSearch {
            posts,
            query: String::new(),
            category: None,
            sort: SortKey::DateDesc,
            current: Vec::new(),
            ui,
            debounce: Debouncer::new(),
            pending_query: None,
            page_url: None,
            reveal_hook: None,
        };
        search.current = engine::select(&search.posts, "", None, search.sort);
        search
    }

    /// Install a callback run after every redraw so a scroll-reveal
    /// collaborator can pick up the new elements.
    pub fn on_render(&mut self, hook: impl Fn() + 'static) {
        self.reveal_hook = Some(Box::new(hook));
    }

    /// Replay `q` and `category` from the page URL on load.
    pub fn init_from_url(&mut self, url: &str) -> ViewUpdate {
        self.page_url = Some(url.to_string());
        let state = UrlState::from_url(url);
        if let Some(c) = state.category {
            self.category = Some(c);
        }
        if let Some(q) = state.q {
            self.query = q.trim().to_string();
        }
        self.refresh()
    }

    /// A keystroke in the search box. The search itself is deferred until
    /// the debounce window passes; observe it through `poll`.
    pub fn input(&mut self, query: &str, now: Instant) {
        self.pending_query = Some(query.to_string());
        self.debounce.input(now);
    }

    /// Fire the pending debounced search once the window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<ViewUpdate> {
        if self.debounce.ready(now) {
            let query = self.pending_query.take().unwrap_or_default();
            Some(self.search(&query))
        } else {
            None
        }
    }

    /// Explicit submit (button click or Enter): search immediately,
    /// discarding any pending debounced keystroke.
    pub fn submit(&mut self, query: &str) -> ViewUpdate {
        self.debounce.flush();
        self.pending_query = None;
        self.search(query)
    }

    /// Recompute the subset for `query` against the full source, keeping
    /// any active category filter. An empty query restores the full set.
    pub fn search(&mut self, query: &str) -> ViewUpdate {
        self.query = query.trim().to_string();
        self.refresh()
    }

    /// Apply a category filter, then re-apply any active query. "all" and
    /// the empty string drop the filter.
    pub fn filter_by_category(&mut self, category: &str) -> ViewUpdate {
        let c = category.trim();
        self.category = if c.is_empty() || c.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(c.to_string())
        };
        self.refresh()
    }

    /// Re-sort the current subset in place; membership never changes.
    /// Without a sort dropdown on the page the sort stays at its default.
    pub fn change_sort(&mut self, sort: SortKey) -> ViewUpdate {
        if self.ui.sort_select {
            self.sort = sort;
            engine::resort(&self.posts, &mut self.current, sort);
        }
        self.view_update()
    }

    /// Reset query, category, and sort, restoring the default-ordered full
    /// set and stripping `q` / `category` from the page URL.
    pub fn clear(&mut self) -> ViewUpdate {
        self.query.clear();
        self.category = None;
        self.sort = SortKey::DateDesc;
        self.pending_query = None;
        self.debounce.flush();
        self.refresh()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// The visible subset, in display order.
    pub fn results(&self) -> Vec<&Post> {
        self.current.iter().map(|&i| &self.posts[i]).collect()
    }

    fn refresh(&mut self) -> ViewUpdate {
        self.current = engine::select(
            &self.posts,
            &self.query,
            self.category.as_deref(),
            self.sort,
        );
        self.view_update()
    }

    fn view_update(&self) -> ViewUpdate {
        let shown = self.results();
        let suggest = self.ui.suggestions && !self.posts.is_empty();
        let html = render::render_posts(&shown, &self.query, suggest);

        let count = if self.ui.count_label {
            Some(count_message(
                "posts",
                shown.len(),
                &self.query,
                self.category.as_deref(),
            ))
        } else {
            None
        };
        let show_clear = if self.ui.clear_button {
            Some(!self.query.is_empty())
        } else {
            None
        };
        let url = self.page_url.as_deref().map(|page| {
            UrlState {
                q: (!self.query.is_empty()).then(|| self.query.clone()),
                category: self.category.clone(),
            }
            .apply_to(page)
        });

        if let Some(hook) = &self.reveal_hook {
            hook();
        }

        ViewUpdate {
            html,
            count_message: count,
            show_clear,
            url,
        }
    }
}
