use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Display position assigned to records without an explicit `order`,
/// pushing them after every explicitly ordered entry.
pub const DEFAULT_ORDER: i64 = 999;

/// What the filter/sort engine needs to know about a record. Implemented
/// by both post and project models; the query string arrives trimmed and
/// lowercased.
pub trait Record {
    fn title(&self) -> &str;
    fn date(&self) -> &str;
    fn sort_order(&self) -> i64 {
        DEFAULT_ORDER
    }
    fn matches_query(&self, q: &str) -> bool;
    fn matches_category(&self, category: &str) -> bool;
}

/// Sort key for the results list, mirroring the page's sort dropdown values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
    OrderAsc,
}

impl SortKey {
    /// Parse a dropdown value; unknown values are treated as absent so the
    /// controller keeps its current sort.
    pub fn parse(s: &str) -> Option<SortKey> {
        match s {
            "date-desc" => Some(SortKey::DateDesc),
            "date-asc" => Some(SortKey::DateAsc),
            "title-asc" => Some(SortKey::TitleAsc),
            "title-desc" => Some(SortKey::TitleDesc),
            "order-asc" => Some(SortKey::OrderAsc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::OrderAsc => "order-asc",
        }
    }
}

/// Compute the visible subset from the full source: category filter first,
/// then the free-text query, then sort. Returns indices into `records` so
/// the caller can re-sort later without recomputing membership. The filter
/// always starts from the full source, never from a previous subset.
pub fn select<R: Record>(
    records: &[R],
    query: &str,
    category: Option<&str>,
    sort: SortKey,
) -> Vec<usize> {
    let q = query.trim().to_lowercase();
    let mut subset: Vec<usize> = (0..records.len())
        .filter(|&i| category.map_or(true, |c| records[i].matches_category(c)))
        .filter(|&i| q.is_empty() || records[i].matches_query(&q))
        .collect();
    resort(records, &mut subset, sort);
    subset
}

/// Re-order an existing subset in place. Membership is untouched; the sort
/// is stable, so ties keep their source order.
pub fn resort<R: Record>(records: &[R], subset: &mut [usize], sort: SortKey) {
    match sort {
        SortKey::DateDesc => {
            subset.sort_by(|&a, &b| cmp_dates(records[b].date(), records[a].date()))
        }
        SortKey::DateAsc => {
            subset.sort_by(|&a, &b| cmp_dates(records[a].date(), records[b].date()))
        }
        SortKey::TitleAsc => {
            subset.sort_by(|&a, &b| cmp_titles(records[a].title(), records[b].title()))
        }
        SortKey::TitleDesc => {
            subset.sort_by(|&a, &b| cmp_titles(records[b].title(), records[a].title()))
        }
        SortKey::OrderAsc => {
            subset.sort_by_key(|&i| records[i].sort_order());
        }
    }
}

/// Try the date formats the data blocks actually use: plain dates,
/// SQL-style timestamps, and RFC 3339.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Calendar comparison when both sides parse; otherwise fall back to the
/// raw strings so malformed dates order deterministically without erroring.
fn cmp_dates(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(da), Some(db)) => da.cmp(&db),
        _ => a.cmp(b),
    }
}

/// Case-folded title comparison. Missing titles are empty strings and
/// simply sort first.
fn cmp_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
