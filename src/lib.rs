//! Page logic for a static portfolio/blog site, held out of the page glue
//! so it can be tested headlessly: record models loaded from embedded JSON,
//! a pure filter/sort engine, an HTML renderer with query highlighting,
//! search controllers with URL state sync, a theme preference store, and
//! the page chrome view state.

pub mod engine;
pub mod models;
pub mod page;
pub mod render;
pub mod search;
pub mod theme;
