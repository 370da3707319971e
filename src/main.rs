// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Crawl the site (every subcommand starts with a crawl)
// 3. Search the index / report the crawl, print the outcome
// 4. Exit with proper code (0 = success, 1 = no matches or failed pages,
//    2 = error)
//
// Rust concepts:
// - async/await: Because we need to make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - the crawl engine
mod extract;       // src/extract/ - HTML text and link extraction
mod fetch;         // src/fetch/ - the HTTP fetcher boundary
mod index;         // src/index.rs - the full-text index and search
mod urls;          // src/urls.rs - URL resolution and origin checks

// Import items we need from our modules
use cli::{Cli, Commands};
use clap::Parser;  // Parser trait enables the parse() method
use crawl::{CrawlFailure, Crawler};
use fetch::HttpFetcher;
use serde::Serialize;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = success (matches found / clean crawl)
//   Ok(1) = no matches (search) or some pages failed (crawl)
//   Err = unexpected error (becomes exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Search {
            seed_url,
            keyword,
            json,
            max_pages,
            concurrency,
        } => handle_search(&seed_url, &keyword, json, max_pages, concurrency).await,
        Commands::Crawl {
            seed_url,
            json,
            max_pages,
            concurrency,
        } => handle_crawl(&seed_url, json, max_pages, concurrency).await,
    }
}

// One failed page, in a form we can serialize
#[derive(Serialize)]
struct FailureReport {
    url: String,
    error: String,
}

impl FailureReport {
    fn from_failures(failures: &[CrawlFailure]) -> Vec<Self> {
        failures
            .iter()
            .map(|f| FailureReport {
                url: f.url.clone(),
                error: f.cause.to_string(),
            })
            .collect()
    }
}

// JSON output for the 'search' subcommand
#[derive(Serialize)]
struct SearchReport {
    seed_url: String,
    keyword: String,
    pages_indexed: usize,
    results: Vec<String>,
    failures: Vec<FailureReport>,
}

// JSON output for the 'crawl' subcommand
#[derive(Serialize)]
struct CrawlReport {
    seed_url: String,
    pages: Vec<PageReport>,
    failures: Vec<FailureReport>,
}

#[derive(Serialize)]
struct PageReport {
    url: String,
    text_chars: usize,
}

// Handles the 'search' subcommand: crawl the site, then query the index
async fn handle_search(
    seed_url: &str,
    keyword: &str,
    json: bool,
    max_pages: Option<usize>,
    concurrency: usize,
) -> Result<i32> {
    if !json {
        println!("🔍 Crawling site: {}", seed_url);
    }

    let mut crawler = new_crawler(max_pages, concurrency)?;
    crawler.crawl(seed_url).await;

    let results = crawler.search(keyword);

    if json {
        let report = SearchReport {
            seed_url: seed_url.to_string(),
            keyword: keyword.to_string(),
            pages_indexed: crawler.index().len(),
            results: results.clone(),
            failures: FailureReport::from_failures(crawler.failures()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_crawl_summary(
            crawler.index().len(),
            crawler.visited().len(),
            crawler.failures().len(),
        );
        println!();
        println!("{}", index::format_results(&results));
    }

    // Exit code 1 when the keyword was found nowhere
    if results.is_empty() {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Handles the 'crawl' subcommand: crawl the site and report what was indexed
async fn handle_crawl(
    seed_url: &str,
    json: bool,
    max_pages: Option<usize>,
    concurrency: usize,
) -> Result<i32> {
    if !json {
        println!("🔍 Crawling site: {}", seed_url);
    }

    let mut crawler = new_crawler(max_pages, concurrency)?;
    crawler.crawl(seed_url).await;

    if json {
        let report = CrawlReport {
            seed_url: seed_url.to_string(),
            pages: crawler
                .index()
                .iter()
                .map(|(url, text)| PageReport {
                    url: url.to_string(),
                    text_chars: text.chars().count(),
                })
                .collect(),
            failures: FailureReport::from_failures(crawler.failures()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_crawl_summary(
            crawler.index().len(),
            crawler.visited().len(),
            crawler.failures().len(),
        );
        println!();
        println!("Indexed pages:");
        for (url, _) in crawler.index().iter() {
            println!("- {}", url);
        }
    }

    // Exit code 1 when any page failed to crawl
    if crawler.failures().is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

// Builds the crawler with the real HTTP fetcher behind it
fn new_crawler(
    max_pages: Option<usize>,
    concurrency: usize,
) -> Result<Crawler<HttpFetcher>> {
    let fetcher = HttpFetcher::new()?;
    Ok(Crawler::with_limits(fetcher, max_pages, concurrency))
}

// Prints the post-crawl summary in the terminal
//
// "Visited" counts every URL the crawl claimed, including the ones that
// failed; "Indexed" counts only pages whose text made it into the index.
fn print_crawl_summary(indexed: usize, visited: usize, failed: usize) {
    println!();
    println!("📊 Summary:");
    println!("   📄 Indexed: {}", indexed);
    println!("   🔗 Visited: {}", visited);
    if failed > 0 {
        println!("   ⚠️  Failed: {}", failed);
    }
}
