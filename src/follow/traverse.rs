// src/follow/traverse.rs
// =============================================================================
// This module walks the local link graph starting from a set of seed files.
//
// How it works, for each document:
// 1. Skip it if it was already scanned (the visited set)
// 2. Extract its links and classify each one
// 3. Sibling files are emitted right away
// 4. Deferred files are then handled in this order:
//      - representatives of linked directories (README.md, or every file)
//      - files in other directories
//      - the siblings from step 3
//    each one is emitted if new, then scanned recursively
//
// Two sets keep this finite and duplicate-free:
// - visited:   documents whose links were already extracted
// - processed: files already appended to the results
//
// Rust concepts:
// - &mut self: the traversal state is owned by one run and threaded
//   through the recursion
// - HashSet::insert returns false when the value was already present
// =============================================================================

use crate::config::Aliases;
use crate::error::FollowError;
use crate::extract::{extract_links, Link};
use crate::follow::classify::{Classifier, Disposition};
use crate::follow::paths::to_absolute;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A linked directory containing this file expands to it alone.
const README: &str = "README.md";

/// State of one traversal run.
#[derive(Debug, Default)]
pub struct Traversal {
    aliases: Aliases,
    visited: HashSet<PathBuf>,
    processed: HashSet<PathBuf>,
    results: Vec<PathBuf>,
}

// Follows every local link reachable from `seeds`
//
// Parameters:
//   seeds: files (or directories) to start from, relative or absolute
//   aliases: prefix rewrites applied to every link destination
//
// Returns: absolute paths of every reached file, in discovery order.
// On error the partial results are dropped; use `Traversal` to keep them.
pub fn follow_all_local_links<P: AsRef<Path>>(
    seeds: &[P],
    aliases: Aliases,
) -> Result<Vec<PathBuf>, FollowError> {
    let mut traversal = Traversal::new(aliases);
    traversal.follow(seeds)?;
    Ok(traversal.into_results())
}

impl Traversal {
    pub fn new(aliases: Aliases) -> Self {
        Traversal {
            aliases,
            ..Default::default()
        }
    }

    /// Results collected so far (also meaningful after an error).
    pub fn results(&self) -> &[PathBuf] {
        &self.results
    }

    pub fn into_results(self) -> Vec<PathBuf> {
        self.results
    }

    pub fn follow<P: AsRef<Path>>(&mut self, seeds: &[P]) -> Result<(), FollowError> {
        for seed in seeds {
            let seed = seed.as_ref();
            let abs = to_absolute(seed).map_err(|e| FollowError::io(seed, e))?;

            if abs.is_dir() {
                info!("Scan directory {}", abs.display());
                let files = representatives(&abs)?;
                self.expand_deferred(files)?;
            } else {
                self.expand(&abs)?;
            }
        }
        Ok(())
    }

    // Scans one document and recursively everything it links to
    fn expand(&mut self, document: &Path) -> Result<(), FollowError> {
        if !self.visited.insert(document.to_path_buf()) {
            debug!("Skip {} (already scanned)", document.display());
            return Ok(());
        }

        let text = read_document(document)?;
        let links = document_links(document, &text);
        let dir = document.parent().unwrap_or(document);

        let mut direct = Vec::new();
        let mut directories = Vec::new();
        let mut distant = Vec::new();

        let classifier = Classifier {
            document,
            dir,
            aliases: &self.aliases,
            processed: &self.processed,
        };
        for link in &links {
            match classifier.classify(&link.destination)? {
                Disposition::Skip(reason) => {
                    debug!("Skip {} ({:?})", link.destination, reason);
                }
                Disposition::Direct(path) => direct.push(path),
                Disposition::Directory(path) => directories.push(path),
                Disposition::Distant(path) => distant.push(path),
            }
        }

        for file in &direct {
            self.emit(file);
        }

        let mut deferred = Vec::new();
        for directory in &directories {
            info!("Scan directory link {}", directory.display());
            deferred.extend(representatives(directory)?);
        }
        deferred.extend(distant);
        deferred.extend(direct);
        // A link to the document's own directory lists the document too
        deferred.retain(|file| file != document);

        self.expand_deferred(deferred)
    }

    fn expand_deferred(&mut self, files: Vec<PathBuf>) -> Result<(), FollowError> {
        for file in files {
            self.emit(&file);
            if !self.visited.contains(&file) {
                self.expand(&file)?;
            }
        }
        Ok(())
    }

    // Appends `file` to the results unless it is already there
    fn emit(&mut self, file: &Path) {
        if self.processed.insert(file.to_path_buf()) {
            info!("Add {}", file.display());
            self.results.push(file.to_path_buf());
        }
    }
}

// Reads a document as text; invalid UTF-8 is replaced, never fatal
fn read_document(path: &Path) -> Result<String, FollowError> {
    let bytes = fs::read(path).map_err(|source| FollowError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// The document's own file name always comes first, so a link back to
// itself is recognised and never treated as a new file
fn document_links(document: &Path, text: &str) -> Vec<Link> {
    let own = document
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut links = vec![Link {
        destination: own.clone(),
        label: String::new(),
    }];
    links.extend(
        extract_links(text)
            .into_iter()
            .filter(|link| link.destination != own),
    );
    links
}

// Files a directory link stands for: its README.md if there is one,
// otherwise every non-directory entry, sorted by name
fn representatives(dir: &Path) -> Result<Vec<PathBuf>, FollowError> {
    let readme = dir.join(README);
    match fs::metadata(&readme) {
        Ok(metadata) if metadata.is_file() => {
            debug!("Found {}", readme.display());
            return Ok(vec![readme]);
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(FollowError::io(readme, e)),
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| FollowError::io(dir, e))? {
        let entry = entry.map_err(|e| FollowError::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| FollowError::io(entry.path(), e))?;
        if file_type.is_dir() {
            continue;
        }
        files.push(entry.path());
    }
    files.sort();

    for file in &files {
        debug!("Listed {}", file.display());
    }
    Ok(files)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why recursion and not a queue like a web crawler?
//    - Results must come out depth-first: everything a document leads to
//      is listed before moving on to the next deferred file
//    - Recursion depth is bounded by the longest chain of new documents
//
// 2. Why does the classifier only borrow the processed set?
//    - `Classifier` holds `&self.processed` while the links are sorted
//    - The borrow ends with the loop, so `self.emit` can mutate afterwards
// -----------------------------------------------------------------------------
