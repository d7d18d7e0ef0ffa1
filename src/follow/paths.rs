// src/follow/paths.rs
// =============================================================================
// Small path helpers shared by the classifier and the traversal.
//
// Every path that goes into the visited/processed sets must be absolute and
// normalized, otherwise "docs/a.md" and "./docs/../docs/a.md" would be
// treated as two different documents.
// =============================================================================

use std::io;
use std::path::{Component, Path, PathBuf};

/// Delimiter GitHub-style line anchors use, as in `file.md#L42`.
const LINE_ANCHOR: &str = "#L";

/// Makes `path` absolute (against the current directory) and normalizes it.
pub fn to_absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&std::env::current_dir()?.join(path)))
    }
}

/// Lexically cleans a path: drops `.` components and resolves `..`
/// against the previous component. Does not touch the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `/..` stays `/`; a leading `..` on a relative path is kept
                match out.components().next_back() {
                    Some(Component::Normal(_)) => {
                        out.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => out.push(".."),
                }
            }
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// True when the text after the last `#L` is a plain integer, meaning the
/// destination points at a line inside a file rather than at a document.
pub fn is_line_anchor(candidate: &str) -> bool {
    match candidate.rsplit_once(LINE_ANCHOR) {
        Some((_, line)) => line.parse::<i64>().is_ok(),
        None => false,
    }
}

/// Remote references are anything starting with `http` (http and https).
pub fn is_remote(destination: &str) -> bool {
    destination.starts_with("http")
}
