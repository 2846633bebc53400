use once_cell::sync::Lazy;
use regex::Regex;

/// `#` followed by one or more ASCII word characters.
static HASHTAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)#([A-Za-z0-9_]+)").expect("hashtag regex is valid"));

/// Generic tags that say nothing about the topic being searched.
pub const BLOCKLIST: [&str; 4] = ["#shorts", "shorts", "#viral", "#subscribe"];

/// Shortest accepted tag, `#` included.
pub const MIN_TAG_LEN: usize = 2;
/// Longest accepted tag, `#` included.
pub const MAX_TAG_LEN: usize = 40;

/// Scans free text (titles, descriptions) for inline hashtags.
///
/// Every match is lowercased and re-prefixed with `#`. Matches are returned in
/// scan order and duplicates are kept.
pub fn extract_from_text(text: &str) -> Vec<String> {
    HASHTAG_REGEX
        .captures_iter(text)
        .map(|cap| format!("#{}", cap[1].to_lowercase()))
        .collect()
}

/// Converts the platform's explicit tag list into `#`-prefixed tags.
///
/// Tags are stored without a `#` by the platform, but uploaders sometimes add
/// one anyway, so any leading `#` is stripped before re-prefixing.
pub fn extract_from_tag_list<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| {
            let lowered = tag.as_ref().to_lowercase();
            format!("#{}", lowered.trim().trim_start_matches('#'))
        })
        .collect()
}

/// Normalizes a single candidate, returning `None` when it is rejected.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let prefixed = if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{}", trimmed)
    };
    let tag = prefixed.to_lowercase();

    if BLOCKLIST.contains(&tag.as_str()) {
        return None;
    }

    let len = tag.chars().count();
    if !(MIN_TAG_LEN..=MAX_TAG_LEN).contains(&len) {
        return None;
    }

    Some(tag)
}

/// Normalizes a sequence of candidates, dropping rejected ones.
///
/// Output order follows input order. Duplicates are left in place; the
/// aggregator deduplicates per video.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| normalize_tag(tag.as_ref()))
        .collect()
}

/// Returns true when `tag` is already in canonical form.
#[cfg(test)]
pub fn is_canonical(tag: &str) -> bool {
    normalize_tag(tag).as_deref() == Some(tag)
}
