// src/crawl/engine.rs
// =============================================================================
// This module implements the crawl traversal with a breadth-first approach.
//
// How it works:
// 1. Start with the seed URL in a queue (claimed in the visited set first)
// 2. Drain the queue into a frontier and fetch those pages concurrently
// 3. Extract each page's text into the index and its links for the queue
// 4. Add same-origin links to the queue, but only if never seen before
// 5. Repeat until the queue is empty
//
// Invariants the engine maintains:
// - A URL enters the visited set exactly once, BEFORE it is fetched.
//   That one rule breaks cycles, self-links, and duplicate discoveries.
// - The index only holds pages whose fetch and extraction succeeded.
//   Failed URLs stay visited (so they are never retried) but unindexed.
// - No failure escapes crawl(): a bad seed, a dead page, or a malformed
//   href is recorded or skipped, and the traversal carries on.
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first crawling
// - Streams: .buffered() fetches a frontier concurrently, results in order
// =============================================================================

use futures::stream::{self, StreamExt};
use std::collections::{HashSet, VecDeque};
use thiserror::Error;
use url::Url;

use crate::extract;
use crate::fetch::{FetchError, Fetcher};
use crate::index::SearchIndex;
use crate::urls::{self, MalformedUrl};

/// How many pages are fetched concurrently unless the caller says otherwise
///
/// High enough to hide network latency across a frontier, low enough not
/// to hammer a single origin (every request in a crawl hits one site).
pub const DEFAULT_CONCURRENCY: usize = 8;

// Why one URL produced no index entry
//
// Either we never managed to turn the input into a fetchable URL, or the
// fetch itself failed.
#[derive(Debug, Error)]
pub enum CrawlFailureCause {
    #[error(transparent)]
    MalformedUrl(#[from] MalformedUrl),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

// The operator-visible record of a page that could not be crawled
//
// These are kept on the session so the final report can list them;
// a warning is also printed the moment the failure happens.
#[derive(Debug)]
pub struct CrawlFailure {
    /// The URL that failed (visited, but never indexed)
    pub url: String,
    /// What went wrong
    pub cause: CrawlFailureCause,
}

// One crawl session: the engine plus all of its state
//
// Owns the visited set, the index, and the failure list, so independent
// sessions never interfere with each other. Generic over the Fetcher so
// tests can drive the engine with canned pages instead of the network.
pub struct Crawler<F> {
    fetcher: F,
    max_pages: Option<usize>,
    concurrency: usize,
    visited: HashSet<String>,
    index: SearchIndex,
    failures: Vec<CrawlFailure>,
}

impl<F: Fetcher> Crawler<F> {
    /// Creates a session with no page limit and the default concurrency
    pub fn new(fetcher: F) -> Self {
        Self::with_limits(fetcher, None, DEFAULT_CONCURRENCY)
    }

    // Creates a session with explicit limits
    //
    // max_pages caps how many URLs the session will ever claim for
    // fetching (the seed counts); None means unlimited. concurrency is
    // clamped to at least 1.
    pub fn with_limits(fetcher: F, max_pages: Option<usize>, concurrency: usize) -> Self {
        Self {
            fetcher,
            max_pages,
            concurrency: concurrency.max(1),
            visited: HashSet::new(),
            index: SearchIndex::new(),
            failures: Vec::new(),
        }
    }

    // Crawls everything reachable from the seed on the seed's origin
    //
    // Traversal is breadth-first in discovery order: the seed, then every
    // link from the seed in document order, then their links, and so on.
    // For a given fetcher the traversal is deterministic.
    //
    // This never returns an error. A seed that cannot be parsed or
    // fetched becomes a recorded failure, just like any other page.
    pub async fn crawl(&mut self, seed_url: &str) {
        // The seed must already be absolute; garbage surfaces as a
        // failure of the seed itself, not a crash
        let seed = match urls::parse_absolute(seed_url) {
            Ok(url) => url,
            Err(cause) => {
                if self.visited.insert(seed_url.to_string()) {
                    self.fail(seed_url.to_string(), cause.into());
                }
                return;
            }
        };

        // Re-crawling a URL this session already claimed is a no-op
        if !self.visited.insert(seed.to_string()) {
            return;
        }

        let mut queue: VecDeque<Url> = VecDeque::new();
        queue.push_back(seed);

        // Process the queue one breadth-first level at a time
        while !queue.is_empty() {
            let frontier: Vec<Url> = queue.drain(..).collect();
            let outcomes = self.fetch_frontier(&frontier).await;

            for (page_url, outcome) in frontier.into_iter().zip(outcomes) {
                match outcome {
                    Ok(body) => {
                        let page = extract::extract_page(&body);
                        self.index.insert(page_url.to_string(), page.text);

                        // Queue this page's links, in document order
                        for href in &page.hrefs {
                            if let Some(next) = self.admit(href, &page_url) {
                                queue.push_back(next);
                            }
                        }
                    }
                    Err(cause) => {
                        // The page stays visited-but-unindexed; siblings
                        // and other branches are unaffected
                        self.fail(page_url.to_string(), cause.into());
                    }
                }
            }
        }
    }

    // Fetches a whole frontier concurrently
    //
    // .buffered(n) runs up to n fetches at once but yields results in
    // input order, so the traversal stays deterministic no matter which
    // response arrives first.
    //
    // Progress goes to stderr, like the warnings - stdout is reserved
    // for the final output (which may be JSON).
    async fn fetch_frontier(&self, frontier: &[Url]) -> Vec<Result<String, FetchError>> {
        for url in frontier {
            eprintln!("  Crawling: {}", url);
        }

        stream::iter(frontier.iter().map(|url| self.fetcher.fetch(url.as_str())))
            .buffered(self.concurrency)
            .collect()
            .await
    }

    // Decides whether a discovered href becomes a new crawl target
    //
    // Returns the resolved URL if it was admitted (and claims it in the
    // visited set), or None if the href is skipped. Skips are:
    // - hrefs that don't resolve (malformed links are ignored silently)
    // - cross-origin links (discovered but never followed)
    // - URLs already visited
    // - anything past the max_pages limit
    fn admit(&mut self, href: &str, page_url: &Url) -> Option<Url> {
        let resolved = urls::resolve(href, page_url).ok()?;

        if !urls::same_origin(&resolved, page_url) {
            return None;
        }

        if let Some(max) = self.max_pages {
            if self.visited.len() >= max {
                return None;
            }
        }

        // Claim before fetch: insert() returns false if the URL was
        // already in the set, which is exactly the "seen before" signal
        if !self.visited.insert(resolved.to_string()) {
            return None;
        }

        Some(resolved)
    }

    // Records one page's failure and warns the operator
    fn fail(&mut self, url: String, cause: CrawlFailureCause) {
        eprintln!("  Warning: Failed to crawl {}: {}", url, cause);
        self.failures.push(CrawlFailure { url, cause });
    }

    /// Searches the index for a keyword (case-insensitive substring)
    pub fn search(&self, keyword: &str) -> Vec<String> {
        self.index.search(keyword)
    }

    /// The index built by this session
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Every URL this session has claimed (fetched or attempted)
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    /// Pages that were claimed but could not be crawled
    pub fn failures(&self) -> &[CrawlFailure] {
        &self.failures
    }
}
