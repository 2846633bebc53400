use once_cell::sync::Lazy;
use regex::Regex;

static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("word regex is valid"));

/// Maximum number of synthetic tags derived from a query.
pub const MAX_FALLBACK_TAGS: usize = 10;

pub fn tokenize_query(query: &str) -> Vec<String> {
    WORD_REGEX
        .find_iter(&query.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|word| word.len() > 2)
        .collect()
}

/// Builds `#word` tags from the query itself, preserving query order.
pub fn fallback_tags(query: &str) -> Vec<String> {
    tokenize_query(query)
        .into_iter()
        .take(MAX_FALLBACK_TAGS)
        .map(|word| format!("#{}", word))
        .collect()
}
