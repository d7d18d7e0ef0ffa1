// src/extract/mod.rs
// =============================================================================
// This module turns document text into the list of links it contains.
//
// Submodules:
// - markdown: Extracts labelled links from markdown text
//
// The traversal in follow/ only ever needs `extract_links` and the `Link`
// type, so that is all we export.
// =============================================================================

mod markdown;

pub use markdown::{extract_links, Link};
