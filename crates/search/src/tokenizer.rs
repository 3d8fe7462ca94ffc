//! Basic tokenizer shared by indexing and query execution
//!
//! Field values and query terms go through the same normalization so that
//! a term written in a query matches the tokens produced at index time.

/// Tokenize text into searchable terms
///
/// - Lowercase
/// - Split on non-alphanumeric characters
/// - Filter tokens shorter than 2 characters
///
/// # Example
///
/// ```
/// use phonecat_search::tokenizer::tokenize;
///
/// let tokens = tokenize("Acme Corp.");
/// assert_eq!(tokens, vec!["acme", "corp"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.len() >= 2)
        .map(String::from)
        .collect()
}

/// Tokenize and deduplicate for query processing
///
/// # Example
///
/// ```
/// use phonecat_search::tokenizer::tokenize_unique;
///
/// let tokens = tokenize_unique("acme Acme ACME");
/// assert_eq!(tokens, vec!["acme"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
