use std::time::Instant;

use crate::engine::{self, SortKey};
use crate::models::Project;
use crate::render;

use super::{count_message, Debouncer, SearchUi, UrlState, ViewUpdate};

/// Search controller for the projects page. Same life as the blog
/// controller, with project matching rules and the explicit-order default
/// sort (entries without an `order` land last).
pub struct ProjectSearch {
    projects: Vec<Project>,
    query: String,
    category: Option<String>,
    sort: SortKey,
    /// Indices into `projects`, already filtered and sorted.
    current: Vec<usize>,
    ui: SearchUi,
    debounce: Debouncer,
    pending_query: Option<String>,
    page_url: Option<String>,
    reveal_hook: Option<Box<dyn Fn()>>,
}

impl ProjectSearch {
    pub fn new(projects: Vec<Project>) -> Self {
        Self::with_ui(projects, SearchUi::default())
    }

    pub fn with_ui(projects: Vec<Project>, ui: SearchUi) -> Self {
        let mut search = ProjectSearch {
            projects,
            query: String::new(),
            category: None,
            sort: SortKey::OrderAsc,
            current: Vec::new(),
            ui,
            debounce: Debouncer::new(),
            pending_query: None,
            page_url: None,
            reveal_hook: None,
        };
        search.current = engine::select(&search.projects, "", None, search.sort);
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

    /// A keystroke in the search box; the search fires via `poll` once the
    /// debounce window passes.
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

    /// Explicit submit: search immediately, discarding any pending
    /// debounced keystroke.
    pub fn submit(&mut self, query: &str) -> ViewUpdate {
        self.debounce.flush();
        self.pending_query = None;
        self.search(query)
    }

    /// Recompute the subset for `query` against the full source, keeping
    /// any active category filter.
    pub fn search(&mut self, query: &str) -> ViewUpdate {
        self.query = query.trim().to_string();
        self.refresh()
    }

    /// Apply a category filter (membership in the project's category list),
    /// then re-apply any active query. "all" and the empty string drop it.
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
            engine::resort(&self.projects, &mut self.current, sort);
        }
        self.view_update()
    }

    /// Reset query, category, and sort, restoring the default-ordered full
    /// set and stripping `q` / `category` from the page URL.
    pub fn clear(&mut self) -> ViewUpdate {
        self.query.clear();
        self.category = None;
        self.sort = SortKey::OrderAsc;
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
    pub fn results(&self) -> Vec<&Project> {
        self.current.iter().map(|&i| &self.projects[i]).collect()
    }

    fn refresh(&mut self) -> ViewUpdate {
        self.current = engine::select(
            &self.projects,
            &self.query,
            self.category.as_deref(),
            self.sort,
        );
        self.view_update()
    }

    fn view_update(&self) -> ViewUpdate {
        let shown = self.results();
        let suggest = self.ui.suggestions && !self.projects.is_empty();
        let html = render::render_projects(&shown, &self.query, suggest);

        let count = if self.ui.count_label {
            Some(count_message(
                "projects",
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
