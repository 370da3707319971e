// src/extract/html.rs
// =============================================================================
// This module extracts page text and links from HTML.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Two things come out of a page:
// - text: every visible text node, markup stripped (what search indexes)
// - hrefs: every <a href="..."> value, in document order (what the
//   crawler follows)
//
// Rust concepts:
// - Iterators: For walking the DOM tree
// - Pattern matching: To pick out text nodes
// =============================================================================

use scraper::{Html, Selector};

// Everything the crawler needs from one fetched page
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Visible text of the page with markup stripped
    pub text: String,
    /// Raw href attribute values, in document order
    pub hrefs: Vec<String>,
}

// Extracts text and links from HTML content
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: PageContent with the page text and raw hrefs
//
// Example:
//   html = "<h1>Hi</h1><a href='/docs'>Docs</a>"
//   -> text = "Hi Docs", hrefs = ["/docs"]
//
// Note the hrefs are returned exactly as written - resolving them against
// the page URL and deciding whether to follow them is the engine's job.
pub fn extract_page(html: &str) -> PageContent {
    let document = Html::parse_document(html);

    PageContent {
        text: visible_text(&document),
        hrefs: anchor_hrefs(&document),
    }
}

// Collects the visible text of the document
//
// Walks every text node in the tree, skipping the contents of <script>
// and <style> elements (code, not prose). Each chunk is trimmed and the
// chunks are joined with single spaces, so "<h1>A</h1><p>B</p>" becomes
// "A B" rather than "AB".
fn visible_text(document: &Html) -> String {
    let mut chunks: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        if let Some(text) = node.value().as_text() {
            // Skip text that lives inside a script or style element
            let skip = node
                .parent()
                .and_then(|parent| parent.value().as_element())
                .map(|element| matches!(element.name(), "script" | "style"))
                .unwrap_or(false);
            if skip {
                continue;
            }

            let trimmed = text.trim();
            if !trimmed.is_empty() {
                chunks.push(trimmed);
            }
        }
    }

    chunks.join(" ")
}

// Collects every anchor href value, in document order
//
// An <a> without an href is never selected, and an href="" is filtered
// out - there is nothing to resolve.
fn anchor_hrefs(document: &Html) -> Vec<String> {
    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(|href| href.to_string())
        .collect()
}
