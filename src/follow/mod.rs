// src/follow/mod.rs
// =============================================================================
// This module follows local links from a set of seed documents and collects
// every file they transitively reach.
//
// Submodules:
// - paths: Path normalization and destination helpers
// - classify: Decides what a single link destination is
// - traverse: The recursive walk over the link graph
//
// Rust concepts:
// - pub use: Re-export items so callers write `follow::Traversal`
// =============================================================================

mod classify;
mod paths;
mod traverse;

pub use classify::{Classifier, Disposition, SkipReason};
pub use traverse::{follow_all_local_links, Traversal};
