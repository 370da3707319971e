// src/fetch/http.rs
// =============================================================================
// This module fetches page bodies over HTTP.
//
// Key functionality:
// - The Fetcher trait: the one capability the crawl engine needs
// - HttpFetcher: the real implementation backed by reqwest
// - FetchError: typed failure causes (timeout, DNS, bad status, ...)
//
// Policy: any non-success outcome is a failure. Non-2xx statuses, bodies
// that aren't text, timeouts and transport errors all land in the same
// FetchError taxonomy, and the crawler treats them all the same way -
// record, warn, move on.
//
// Rust concepts:
// - async/await: For network I/O
// - Enums: To represent the different failure causes
// - Traits + async_trait: So tests can swap in a mock fetcher
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

// Why a fetcher can fail to produce a page body
//
// This is deliberately coarse: the crawler does not branch on the cause,
// it only records and reports it. The variants exist so the report can
// say something more useful than "error".
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request exceeded the client timeout
    #[error("request timed out")]
    Timeout,
    /// Could not resolve the hostname
    #[error("could not resolve hostname")]
    Dns,
    /// TCP/TLS connection failed
    #[error("connection failed: {0}")]
    Connect(String),
    /// Redirect chain exceeded the client limit
    #[error("too many redirects")]
    TooManyRedirects,
    /// Server answered with a non-success status code
    #[error("HTTP {0}")]
    Status(u16),
    /// Response body is not text (e.g. an image or a zip)
    #[error("unsupported content type: {0}")]
    NotText(String),
    /// Anything else reqwest can report
    #[error("{0}")]
    Other(String),
}

// The one capability the crawl engine needs from the outside world
//
// #[async_trait] lets us write async fn in a trait. The engine is generic
// over this trait, so production code plugs in HttpFetcher while tests
// plug in a mock with canned responses.
#[async_trait]
pub trait Fetcher {
    /// Fetches the body text for an absolute URL
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// The real fetcher, backed by a pooled reqwest client
//
// Cloning is cheap (the client is reference-counted internally), and one
// client reuses connections across all requests to the same host.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds a fetcher with reasonable settings
    //
    // - 10 second timeout per request
    // - Follow up to 5 redirects
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(categorize_error)?;

        // Non-2xx means we have nothing worth indexing
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // Skip bodies that aren't text - there is no page text to index
        // and no HTML to pull links from
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !is_text_content(&content_type) {
            return Err(FetchError::NotText(content_type));
        }

        response.text().await.map_err(categorize_error)
    }
}

// Decides whether a Content-Type header names something we can index
//
// A missing header is accepted (we assume text, like a browser would for
// a plain response). Otherwise we want text/* or an html/xml flavour
// such as application/xhtml+xml.
fn is_text_content(content_type: &str) -> bool {
    if content_type.is_empty() {
        return true;
    }
    let content_type = content_type.to_ascii_lowercase();
    content_type.starts_with("text/")
        || content_type.contains("html")
        || content_type.contains("xml")
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - Too many redirects
// - etc.
fn categorize_error(error: reqwest::Error) -> FetchError {
    // Convert error to string once to avoid lifetime issues
    let error_string = error.to_string();

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            FetchError::Dns
        } else {
            FetchError::Connect(error_string)
        }
    } else {
        FetchError::Other(error_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_types_accepted() {
        assert!(is_text_content(""));
        assert!(is_text_content("text/html; charset=utf-8"));
        assert!(is_text_content("text/plain"));
        assert!(is_text_content("application/xhtml+xml"));
        assert!(is_text_content("TEXT/HTML"));
    }

    #[test]
    fn binary_content_types_rejected() {
        assert!(!is_text_content("image/png"));
        assert!(!is_text_content("application/zip"));
        assert!(!is_text_content("application/pdf"));
    }

    #[test]
    fn fetch_error_messages_name_the_cause() {
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
        assert_eq!(FetchError::Status(404).to_string(), "HTTP 404");
        assert_eq!(
            FetchError::NotText("image/png".to_string()).to_string(),
            "unsupported content type: image/png"
        );
    }
}
