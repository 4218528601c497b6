// src/extractor/html.rs
// =============================================================================
// This module extracts links from an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser), so it degrades
//   gracefully on unclosed tags, missing quotes, and other broken
//   markup instead of rejecting the document
//
// We also use the `url` crate to:
// - Resolve relative hrefs against the page's own URL
//
// Dedup happens right here: the result is a HashSet, so a href that
// appears five times (or five spellings that resolve to the same URL)
// contributes exactly one entry. The set is unordered - callers that
// want stable output have to sort it themselves.
//
// Rust concepts:
// - HashSet: A collection of unique values with O(1) lookup
// - Iterators: For processing collections
// - if let: Concise handling of Option values
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

// Extracts all unique links from HTML content
//
// Parameters:
//   base_url: the URL of the page itself (for resolving relative links)
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: HashSet<String> of absolute URLs
//
// Example:
//   base_url = "https://example.com/page"
//   html = "<a href='/docs'>Docs</a><a href='#top'>Top</a>"
//   result = {"https://example.com/docs", "https://example.com/page#top"}
//
// This function never fails: malformed HTML just yields fewer links,
// and a page with no anchors yields an empty set.
pub fn extract_links(base_url: &str, html: &str) -> HashSet<String> {
    let mut links = HashSet::new();

    // Parse the HTML into a document (lenient - never errors)
    let document = Html::parse_document(html);

    // Create a CSS selector to find all <a> tags that carry an href.
    // Anchors without an href contribute nothing, and the selector
    // skips them for us. The selector is a constant known to be valid,
    // so unwrap() here can't fire at runtime.
    let selector = Selector::parse("a[href]").unwrap();

    // Parse the base URL once; we need it for every resolution below
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(_) => {
            // Without a valid base we can't resolve anything
            eprintln!("Warning: Invalid base URL: {}", base_url);
            return links;
        }
    };

    // Select all <a> elements with href attributes
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            // Url::join implements standard URL-resolution rules:
            //   "https://other.com"  -> passes through (re-serialized)
            //   "//cdn.example.com"  -> inherits the base's scheme
            //   "../img/x.png"       -> resolves against the base path
            //   "#section"           -> becomes base_url#section
            //   ""                   -> the base URL itself
            // Hrefs that can't resolve at all are skipped silently.
            //
            // Note we keep mailto:, tel:, javascript: and friends -
            // extraction is purely syntactic, no filtering happens here.
            if let Ok(resolved) = base.join(href) {
                links.insert(resolved.to_string());
            }
        }
    }

    links
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why HashSet instead of Vec?
//    - The contract is "the unique set of links" - a set type says that
//      in the signature instead of relying on the caller to dedup
//    - insert() on a value that's already present is simply a no-op
//
// 2. What does base.join(href) do?
//    - Exactly what a browser does with a relative link
//    - It handles ".." segments, fragments, query strings, and
//      scheme-relative "//host/path" forms per the URL standard
//    - If href is already absolute, join just re-serializes it
//      (which is why "https://a.com" comes out as "https://a.com/")
//
// 3. Why compare links as strings?
//    - Uniqueness is by exact serialized form:
//      "https://a.com/x" and "https://a.com/x/" stay distinct
//
// 4. Why does this function never return an error?
//    - html5ever implements the same error recovery browsers use, so
//      there's no such thing as "unparseable" HTML - just HTML with
//      fewer recognizable anchors in it
// -----------------------------------------------------------------------------
