// src/crawl/mod.rs
// =============================================================================
// This module is the heart of the tool: the crawl engine.
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Respects same-origin restriction (doesn't crawl external sites)
// - Never fetches the same URL twice, even on cyclic link graphs
// - One page failing never stops the rest of the crawl
// - Populates the search index as it goes
//
// Rust concepts:
// - Generics: The engine works with any Fetcher implementation
// - Collections: HashSet for tracking visited URLs, VecDeque for the queue
// =============================================================================

mod engine;

// Re-export the engine types
pub use engine::{CrawlFailure, CrawlFailureCause, Crawler, DEFAULT_CONCURRENCY};
