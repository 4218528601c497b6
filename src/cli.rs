// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The target URL is a positional argument, with flags for the output
// file and the request timeout. Nothing is hardcoded - the same binary
// works against any page.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: A value that may or may not be present (the output file)
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
//
// There's only one thing this tool does, so there are no subcommands:
// the fields below are the arguments themselves
#[derive(Parser, Debug)]
#[command(
    name = "link-harvest",
    version = "0.1.0",
    about = "Extract every hyperlink from a single web page",
    long_about = "link-harvest fetches one web page, collects every anchor's href, \
                  resolves relative links against the page URL, and prints the \
                  deduplicated set of absolute URLs."
)]
pub struct Cli {
    /// URL of the page to scrape (e.g., https://example.com/page)
    ///
    /// A bare host like "example.com" works too - we'll assume https://
    ///
    /// This is a positional argument (required, no flag needed)
    pub url: String,

    /// Also write the links to this file, one URL per line
    ///
    /// The file is overwritten if it already exists
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds
    ///
    /// #[arg(long, default_value_t = 10)] creates --timeout with a default
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Output a JSON report instead of the numbered list
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no subcommand enum?
//    - Tools that do several things (scan a repo OR a site) use subcommands
//    - This tool does exactly one thing, so the arguments live directly
//      on the Cli struct and `link-harvest <URL>` just works
//
// 2. Why PathBuf instead of String for the output file?
//    - PathBuf is Rust's owned filesystem-path type
//    - clap parses the argument straight into it for us
//    - It handles platform differences (slashes, etc.) correctly
//
// 3. Why u64 for the timeout?
//    - Duration::from_secs() takes a u64, so this avoids a cast later
//
// 4. What does Option<PathBuf> mean?
//    - Some(path) if the user passed --output, None if they didn't
//    - The driver only writes a file when it's Some
// -----------------------------------------------------------------------------
