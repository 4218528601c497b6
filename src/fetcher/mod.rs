// src/fetcher/mod.rs
// =============================================================================
// This module downloads the target page.
//
// Submodules:
// - http: Normalizes the target URL and performs the single GET request
//
// This file (mod.rs) is the module root - it re-exports the public API
// so callers can write `fetcher::fetch_page()` instead of
// `fetcher::http::fetch_page()`.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod http;

// Re-export public items from submodules
pub use http::{fetch_page, normalize_target};
