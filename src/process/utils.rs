/// Header clean-up: strip outer whitespace and drop embedded line breaks.
pub fn clean_header(raw: &str) -> String {
    raw.trim().chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// Trim + lower-case, the form all keyword matching runs on.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True if `haystack` contains any of `needles` as a plain substring.
pub fn contains_any<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_ref()))
}
