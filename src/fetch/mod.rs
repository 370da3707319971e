// src/fetch/mod.rs
// =============================================================================
// This module is the crawler's view of the network.
//
// Submodules:
// - http: The real reqwest-backed page fetcher and the error taxonomy
//
// The important export is the Fetcher trait. The crawl engine only knows
// "give me the body for this URL, or tell me why you couldn't" - it never
// touches reqwest directly. That seam is what lets the engine tests run
// against an in-memory mock instead of the network.
//
// Rust concepts:
// - Traits: Define shared behavior that multiple types implement
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod http;

// Re-export public items from the submodule
// This lets users write `fetch::HttpFetcher` instead of
// `fetch::http::HttpFetcher`
pub use http::{Fetcher, FetchError, HttpFetcher};
