// src/extract/markdown.rs
// =============================================================================
// This module extracts links from Markdown text.
//
// We use the `pulldown-cmark` crate which:
// - Parses Markdown into events (heading, paragraph, link, etc.)
// - Follows the CommonMark specification
// - Never fails: malformed markup just degrades to plain text
//
// A link is recorded only when the event right after `Start(Link)` is a
// non-empty `Text` event; that text becomes the label. Anything else
// (inline code, emphasis, an image...) drops the pending link.
//
// Rust concepts:
// - Iterators: For processing sequences of events
// - Pattern matching: To identify link and code block events
// - HashSet: To keep each destination only once per document
// =============================================================================

use pulldown_cmark::{Event, Options, Parser, Tag};
use serde::Serialize;
use std::collections::HashSet;

/// A link found in a document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Destination exactly as written (relative path, absolute path, URL...)
    pub destination: String,
    /// Visible text of the link
    pub label: String,
}

// Extracts every labelled link from Markdown text
//
// Parameters:
//   markdown: the markdown text to parse (borrowed as &str)
//
// Returns: Vec<Link> in first-occurrence order, one entry per destination
//
// Example input:
//   "See [B](b.md) and [the B doc](b.md)"
//
// Example output:
//   vec![Link { destination: "b.md", label: "B" }]
pub fn extract_links(markdown: &str) -> Vec<Link> {
    let mut links = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    // Tables and friends are on so links inside them are found too
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    // Destination of the link we just entered, waiting for its label
    let mut pending: Option<String> = None;
    let mut in_code_block = false;

    for event in parser {
        if in_code_block {
            if let Event::End(Tag::CodeBlock(_)) = event {
                in_code_block = false;
            }
            continue;
        }

        match event {
            Event::Start(Tag::CodeBlock(_)) => {
                pending = None;
                in_code_block = true;
            }

            // In pulldown-cmark 0.9, Link is Tag::Link(link_type, dest_url, title)
            Event::Start(Tag::Link(_link_type, dest_url, _title)) => {
                pending = Some(dest_url.to_string());
            }

            Event::Text(text) => {
                if let Some(destination) = pending.take() {
                    if !text.is_empty() && seen.insert(destination.clone()) {
                        links.push(Link {
                            destination,
                            label: text.to_string(),
                        });
                    }
                }
            }

            _ => pending = None,
        }
    }

    links
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an event stream instead of a tree?
//    - pulldown-cmark yields Start/End pairs instead of building nodes
//    - "entering a node" is Event::Start, "leaving it" is Event::End
//    - Skipping a subtree means ignoring events until the matching End
//
// 2. What does HashSet::insert return?
//    - true if the value was new, false if it was already there
//    - So `seen.insert(x)` both checks and records in one call
//
// 3. What does .take() do?
//    - Takes the value out of an Option and replaces it with None
//    - The pending link is cleared whatever happens to the next event
// -----------------------------------------------------------------------------
