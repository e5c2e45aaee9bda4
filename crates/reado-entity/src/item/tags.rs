//! Tag input parsing and matching.
//!
//! Tags are entered as one comma-separated string. Both the ASCII comma and
//! the full-width comma `，` separate tags. Matching is case-insensitive but
//! the stored tags keep the case they were typed in.

/// Split raw tag input into tags.
///
/// Empty or whitespace-only input yields no tags.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split([',', '，'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether any search term is a case-insensitive substring of any tag.
///
/// An empty search matches nothing; callers skip filtering instead.
pub fn matches_any_tag(tags: &[String], search: &[String]) -> bool {
    search.iter().any(|term| {
        let term = term.to_lowercase();
        tags.iter().any(|tag| tag.to_lowercase().contains(&term))
    })
}
