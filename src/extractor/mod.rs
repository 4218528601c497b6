// src/extractor/mod.rs
// =============================================================================
// This module turns raw HTML into a set of absolute URLs.
//
// Submodules:
// - html: Parses the document and resolves every anchor's href
//
// This file (mod.rs) is the module root - it re-exports the public API
// so callers can write `extractor::extract_links()`.
// =============================================================================

mod html;

pub use html::extract_links;
