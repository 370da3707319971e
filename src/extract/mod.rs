// src/extract/mod.rs
// =============================================================================
// This module turns raw HTML into the two things the crawler cares about:
// the human-visible text of the page, and the links it contains.
//
// Submodules:
// - html: scraper-based text and href extraction
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod html;

// Re-export public items from the submodule
pub use html::{extract_page, PageContent};
