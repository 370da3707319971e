// src/index.rs
// =============================================================================
// This module holds the crawl's output: the mapping from page URL to the
// text that was extracted from it, plus keyword search over that mapping.
//
// The index remembers insertion order (the order pages were crawled), and
// search results come back in that same order. A Vec of (url, text) pairs
// gives us that for free; the engine's visited set already guarantees each
// URL is inserted at most once, so we don't need a map.
//
// Rust concepts:
// - Vec of tuples: A simple insertion-ordered mapping
// - Iterators: For scanning the index
// =============================================================================

// The in-memory full-text index for one crawl session
//
// Only pages whose fetch and extraction succeeded are in here; failed
// URLs are tracked separately by the engine.
#[derive(Debug, Default)]
pub struct SearchIndex {
    // (url, extracted page text), in crawl order
    entries: Vec<(String, String)>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    // Records the text for a crawled page
    //
    // The caller is responsible for not inserting the same URL twice
    // (the engine's visited set enforces this).
    pub fn insert(&mut self, url: String, text: String) {
        self.entries.push((url, text));
    }

    /// Number of indexed pages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a URL was indexed
    pub fn contains(&self, url: &str) -> bool {
        self.entries.iter().any(|(u, _)| u == url)
    }

    /// The stored text for a URL, if it was indexed
    pub fn get(&self, url: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, text)| text.as_str())
    }

    /// Iterates (url, text) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(url, text)| (url.as_str(), text.as_str()))
    }

    // Finds every page whose text contains the keyword
    //
    // Matching is a case-insensitive substring test, and results come
    // back in the order the pages were indexed. An empty keyword matches
    // every page (the empty string is a substring of everything).
    pub fn search(&self, keyword: &str) -> Vec<String> {
        let needle = keyword.to_lowercase();

        self.entries
            .iter()
            .filter(|(_, text)| text.to_lowercase().contains(&needle))
            .map(|(url, _)| url.clone())
            .collect()
    }
}

// Formats search results for the terminal
//
// Matches:
//   Search results:
//   - https://example.com/page
//
// No matches:
//   No results found.
pub fn format_results(results: &[String]) -> String {
    if results.is_empty() {
        return "No results found.".to_string();
    }

    let mut output = String::from("Search results:");
    for url in results {
        output.push_str("\n- ");
        output.push_str(url);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> SearchIndex {
        let mut index = SearchIndex::new();
        index.insert(
            "https://example.com/page1".to_string(),
            "This is some test content".to_string(),
        );
        index.insert(
            "https://example.com/page2".to_string(),
            "Unrelated content".to_string(),
        );
        index
    }

    #[test]
    fn search_keyword_found() {
        let index = sample_index();
        assert_eq!(index.search("test"), vec!["https://example.com/page1"]);
    }

    #[test]
    fn search_keyword_not_found() {
        let index = sample_index();
        assert!(index.search("missing").is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let index = sample_index();
        assert_eq!(index.search("TEST"), vec!["https://example.com/page1"]);
        assert_eq!(index.search("unRELated"), vec!["https://example.com/page2"]);
    }

    #[test]
    fn search_returns_insertion_order() {
        let index = sample_index();
        assert_eq!(
            index.search("content"),
            vec!["https://example.com/page1", "https://example.com/page2"]
        );
    }

    #[test]
    fn empty_keyword_matches_every_page() {
        let index = sample_index();
        assert_eq!(index.search("").len(), 2);
    }

    #[test]
    fn get_and_contains() {
        let index = sample_index();
        assert!(index.contains("https://example.com/page1"));
        assert!(!index.contains("https://example.com/nope"));
        assert_eq!(index.get("https://example.com/page2"), Some("Unrelated content"));
        assert_eq!(index.get("https://example.com/nope"), None);
    }

    #[test]
    fn format_results_with_matches() {
        let results = vec!["https://example.com/found".to_string()];
        let output = format_results(&results);
        assert_eq!(output, "Search results:\n- https://example.com/found");
    }

    #[test]
    fn format_results_no_matches() {
        let output = format_results(&[]);
        assert_eq!(output, "No results found.");
    }
}
