// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "site-seeker",
    version = "0.1.0",
    about = "A CLI tool to crawl a website and search its pages for keywords",
    long_about = "site-seeker crawls every page reachable from a seed URL (staying on the \
                  seed's origin), builds an in-memory index of page text, and searches \
                  that index for a keyword."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (search, crawl)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website and search the crawled pages for a keyword
    ///
    /// Example: site-seeker search https://example.com rust
    Search {
        /// Seed URL to start crawling from (e.g., https://example.com)
        ///
        /// This is a positional argument (required, no flag needed)
        seed_url: String,

        /// Keyword to search for in the crawled page text
        ///
        /// Matching is a case-insensitive substring test
        keyword: String,

        /// Output results in JSON format instead of plain text
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,

        /// Maximum number of pages to fetch (unlimited if omitted)
        ///
        /// A safety bound for large sites: once this many URLs have been
        /// claimed for fetching, newly discovered links are ignored
        #[arg(long)]
        max_pages: Option<usize>,

        /// How many pages to fetch concurrently (default: 8)
        ///
        /// #[arg(long, default_value_t = 8)] creates --concurrency with a default
        #[arg(long, default_value_t = 8)]
        concurrency: usize,
    },

    /// Crawl a website and report every page that was indexed
    ///
    /// Example: site-seeker crawl https://example.com --max-pages 100
    Crawl {
        /// Seed URL to start crawling from (e.g., https://example.com)
        seed_url: String,

        /// Output the crawl report in JSON format instead of plain text
        #[arg(long)]
        json: bool,

        /// Maximum number of pages to fetch (unlimited if omitted)
        #[arg(long)]
        max_pages: Option<usize>,

        /// How many pages to fetch concurrently (default: 8)
        #[arg(long, default_value_t = 8)]
        concurrency: usize,
    },
}
