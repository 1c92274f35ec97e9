//! Serialization of [`FilterState`] into the list endpoint query string.

use crate::domain::filter::FilterState;

/// Builds `?key=value&...` for the given state, or `""` when nothing is set.
///
/// Keys are always emitted in the same order so identical states produce
/// byte-identical queries.
pub fn build_query(state: &FilterState) -> String {
    let pairs = query_pairs(state);
    if pairs.is_empty() {
        return String::new();
    }

    match serde_html_form::to_string(&pairs) {
        Ok(encoded) => format!("?{encoded}"),
        // Plain string pairs always serialize.
        Err(_) => String::new(),
    }
}

/// Ordered key/value pairs for every populated field of the state.
pub fn query_pairs(state: &FilterState) -> Vec<(&'static str, String)> {
    let candidates = [
        ("page", Some(state.page().to_string())),
        ("page_size", Some(state.page_size().to_string())),
        ("status", state.status.as_ref().map(|s| s.as_str().to_string())),
        ("category", state.category.as_ref().map(|v| v.to_string())),
        (
            "assigned_officer",
            state.assigned_officer.as_ref().map(|v| v.to_string()),
        ),
        (
            "date_from",
            state.date_from.map(|d| d.format("%Y-%m-%d").to_string()),
        ),
        (
            "date_to",
            state.date_to.map(|d| d.format("%Y-%m-%d").to_string()),
        ),
        ("search", state.search.as_ref().map(|v| v.to_string())),
        ("ordering", state.ordering.map(|o| o.as_str().to_string())),
    ];

    candidates
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .filter(|value| !value.trim().is_empty())
                .map(|value| (key, value))
        })
        .collect()
}
