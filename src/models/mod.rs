pub mod post;
pub mod project;

pub use post::Post;
pub use project::Project;

use serde::de::DeserializeOwned;

/// Parse an embedded JSON data block into a record set, falling back
/// through `sources` in order (embedded block, then global payload).
/// A malformed or absent source is skipped with a warning; if nothing
/// parses, the record set is empty and the page simply shows no entries.
pub fn load_embedded<T: DeserializeOwned>(sources: &[Option<&str>]) -> Vec<T> {
    for src in sources.iter().flatten() {
        match serde_json::from_str::<Vec<T>>(src) {
            Ok(records) => return records,
            Err(e) => log::warn!("Skipping malformed embedded data block: {}", e),
        }
    }
    Vec::new()
}
