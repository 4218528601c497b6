// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch the target page (one GET request)
// 3. Extract the unique set of absolute links from it
// 4. Print the links (and optionally write them to a file)
// 5. Exit with proper code (0 = completed, 2 = internal error)
//
// The pipeline is strictly sequential: fetch, then extract, then
// render. A fetch failure doesn't abort the run - we print the
// diagnostic to stderr and carry on with an empty set, so the output
// shape is the same whether the page had no links or never arrived.
//
// Rust concepts used:
// - async/await: reqwest's client is async, so main is too
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching on the fetch outcome
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod extractor; // src/extractor/ - anchor collection and URL resolution
mod fetcher;   // src/fetcher/ - page download

// Import items we need from our modules
use cli::Cli;
use clap::Parser; // Parser trait enables the parse() method

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
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
//   Ok(0) = completed (even if the fetch failed or zero links were found)
//   Ok/Err(2) = unexpected internal error (e.g., the output file
//               couldn't be written)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Make sure the target carries a scheme ("example.com" -> "https://...")
    // The normalized form is also the base every relative link resolves
    // against, so everything downstream uses it, not the raw argument.
    let url = fetcher::normalize_target(&cli.url);

    if !cli.json {
        println!("🔍 Scraping links from: {}", url);
    }

    // Fetch, then extract. A fetch failure is not fatal: we log the
    // diagnostic and continue with an empty set, so the program always
    // completes and still prints its count line.
    let links = match fetcher::fetch_page(&url, cli.timeout).await {
        Ok(html) => extractor::extract_links(&url, &html),
        Err(e) => {
            eprintln!("Error fetching the URL: {}", e);
            HashSet::new()
        }
    };

    // The extractor hands us an unordered set. Sort lexicographically
    // so console, file, and JSON output are all deterministic.
    let links = sorted_links(links);

    if cli.json {
        print_json(&url, &links)?;
    } else {
        print_links(&links);
    }

    // Save links to file if --output was specified
    if let Some(path) = &cli.output {
        save_links(path, &links)?;
        if !cli.json {
            println!("💾 Links saved to {}", path.display());
        }
    }

    Ok(0)
}

// Consumes the set and returns its contents as a sorted Vec
fn sorted_links(links: HashSet<String>) -> Vec<String> {
    let mut links: Vec<String> = links.into_iter().collect();
    links.sort();
    links
}

// Prints the numbered human-readable list
//
// Format: a count line, then one line per link with 1-based indexing
fn print_links(links: &[String]) {
    println!("Found {} unique links:", links.len());
    for (i, link) in links.iter().enumerate() {
        println!("{}. {}", i + 1, link);
    }
}

// The machine-readable report for --json
//
// #[derive(Serialize)] lets serde_json turn this into JSON for us
#[derive(Debug, Serialize)]
struct ScrapeReport<'a> {
    /// The (normalized) URL that was scraped
    url: &'a str,
    /// Number of unique links found
    count: usize,
    /// The links themselves, lexicographically sorted
    links: &'a [String],
}

// Serializes the report to pretty JSON and prints it to stdout
fn print_json(url: &str, links: &[String]) -> Result<()> {
    let report = ScrapeReport {
        url,
        count: links.len(),
        links,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

// Writes the links to a file, one URL per line, newline-terminated
//
// Overwrites any existing file at that path. No header or footer -
// the format is meant to be fed straight into other tools.
fn save_links(path: &Path, links: &[String]) -> Result<()> {
    let mut contents = String::new();
    for link in links {
        contents.push_str(link);
        contents.push('\n');
    }
    std::fs::write(path, contents)?;
    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why doesn't a fetch failure exit non-zero?
//    - A failed fetch still prints the diagnostic and "Found 0 unique
//      links:", so scripts wrapping this tool always see the same shape
//    - Exit code 2 is reserved for errors in the tool itself (like a
//      file write failing), surfaced through the Err arm in main
//
// 2. Why sort the links before printing?
//    - HashSet iteration order is arbitrary and changes run to run
//    - Sorting makes output diffable and the file dump reproducible
//
// 3. What is the 'a lifetime on ScrapeReport?
//    - The struct borrows the url and links instead of cloning them
//    - 'a says "this struct can't outlive the data it points at"
//    - Fine here, because we build it, print it, and drop it
//
// 4. Why String::new() + push_str instead of writing line by line?
//    - One fs::write call either fully succeeds or fails with one error
//    - For a few hundred links the intermediate String costs nothing
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_links_is_lexicographic() {
        let mut set = HashSet::new();
        set.insert("https://example.com/b".to_string());
        set.insert("https://example.com/a".to_string());
        set.insert("https://example.com/c".to_string());

        let sorted = sorted_links(set);
        assert_eq!(
            sorted,
            vec![
                "https://example.com/a".to_string(),
                "https://example.com/b".to_string(),
                "https://example.com/c".to_string(),
            ]
        );
    }

    #[test]
    fn test_save_links_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.txt");

        let links = vec![
            "https://example.com/a".to_string(),
            "https://example.com/b".to_string(),
        ];
        save_links(&path, &links).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "https://example.com/a\nhttps://example.com/b\n");
    }

    #[test]
    fn test_save_links_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.txt");

        std::fs::write(&path, "stale contents\n").unwrap();
        save_links(&path, &["https://example.com/".to_string()]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "https://example.com/\n");
    }

    #[test]
    fn test_save_zero_links_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.txt");

        save_links(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
