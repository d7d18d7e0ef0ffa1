// src/follow/classify.rs
// =============================================================================
// Decides what a single link destination means for the traversal.
//
// Steps, in order:
// 1. Apply the alias rules (first matching prefix wins)
// 2. Drop remote references (anything starting with "http")
// 3. Resolve against the document's directory unless already absolute
// 4. Drop line anchors like "file.md#L42"
// 5. Normalize; drop the document itself and anything already emitted
// 6. Stat the path: missing -> drop, directory -> Directory,
//    file next to the document -> Direct, any other file -> Distant
//
// Only step 6 can fail, and only for errors other than "not found".
// =============================================================================

use crate::config::Aliases;
use crate::error::FollowError;
use crate::follow::paths::{is_line_anchor, is_remote, normalize};
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Why a destination was dropped. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Remote,
    LineAnchor,
    SelfReference,
    AlreadyProcessed,
    NotFound,
}

/// The outcome of classifying one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    Skip(SkipReason),
    /// A file in the same directory as the document
    Direct(PathBuf),
    /// A directory that needs expanding into representative files
    Directory(PathBuf),
    /// A file somewhere else on the filesystem
    Distant(PathBuf),
}

/// Everything the classifier needs to know about the document being scanned.
pub struct Classifier<'a> {
    /// Absolute, normalized path of the document
    pub document: &'a Path,
    /// Absolute, normalized directory of the document
    pub dir: &'a Path,
    pub aliases: &'a Aliases,
    /// Files already emitted as results
    pub processed: &'a HashSet<PathBuf>,
}

impl Classifier<'_> {
    pub fn classify(&self, destination: &str) -> Result<Disposition, FollowError> {
        let destination = self.aliases.apply(destination);

        if is_remote(&destination) {
            return Ok(Disposition::Skip(SkipReason::Remote));
        }

        let candidate = Path::new(&destination);
        let candidate = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.dir.join(candidate)
        };

        if is_line_anchor(&candidate.to_string_lossy()) {
            return Ok(Disposition::Skip(SkipReason::LineAnchor));
        }

        // `dir` is already absolute so this never needs the current directory
        let abs = normalize(&candidate);

        if abs == self.document {
            return Ok(Disposition::Skip(SkipReason::SelfReference));
        }
        if self.processed.contains(&abs) {
            return Ok(Disposition::Skip(SkipReason::AlreadyProcessed));
        }

        let metadata = match std::fs::metadata(&abs) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(Disposition::Skip(SkipReason::NotFound));
            }
            Err(e) => return Err(FollowError::io(abs, e)),
        };

        if metadata.is_dir() {
            Ok(Disposition::Directory(abs))
        } else if abs.parent() == Some(self.dir) {
            Ok(Disposition::Direct(abs))
        } else {
            Ok(Disposition::Distant(abs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AliasRule;
    use std::fs;
    use tempfile::TempDir;

    // Lays out:
    //   root/a.md
    //   root/b.md
    //   root/sub/x.md
    fn fixture() -> TempDir {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.md"), "# A").unwrap();
        fs::write(tmp.path().join("b.md"), "# B").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/x.md"), "# X").unwrap();
        tmp
    }

    fn classify_with(
        tmp: &TempDir,
        aliases: &Aliases,
        processed: &HashSet<PathBuf>,
        destination: &str,
    ) -> Disposition {
        let document = tmp.path().join("a.md");
        let classifier = Classifier {
            document: &document,
            dir: tmp.path(),
            aliases,
            processed,
        };
        classifier.classify(destination).unwrap()
    }

    fn classify(tmp: &TempDir, destination: &str) -> Disposition {
        classify_with(tmp, &Aliases::default(), &HashSet::new(), destination)
    }

    #[test]
    fn test_sibling_is_direct() {
        let tmp = fixture();
        assert_eq!(
            classify(&tmp, "b.md"),
            Disposition::Direct(tmp.path().join("b.md"))
        );
        assert_eq!(
            classify(&tmp, "./b.md"),
            Disposition::Direct(tmp.path().join("b.md"))
        );
    }

    #[test]
    fn test_file_in_subdirectory_is_distant() {
        let tmp = fixture();
        assert_eq!(
            classify(&tmp, "sub/x.md"),
            Disposition::Distant(tmp.path().join("sub/x.md"))
        );
    }

    #[test]
    fn test_directory() {
        let tmp = fixture();
        assert_eq!(
            classify(&tmp, "sub/"),
            Disposition::Directory(tmp.path().join("sub"))
        );
    }

    #[test]
    fn test_absolute_destination_used_verbatim() {
        let tmp = fixture();
        let target = tmp.path().join("sub/x.md");
        assert_eq!(
            classify(&tmp, &target.to_string_lossy()),
            Disposition::Distant(target)
        );
    }

    #[test]
    fn test_parent_dir_back_to_sibling() {
        let tmp = fixture();
        assert_eq!(
            classify(&tmp, "sub/../b.md"),
            Disposition::Direct(tmp.path().join("b.md"))
        );
    }

    #[test]
    fn test_skips() {
        let tmp = fixture();
        assert_eq!(
            classify(&tmp, "https://example.com/b.md"),
            Disposition::Skip(SkipReason::Remote)
        );
        assert_eq!(
            classify(&tmp, "b.md#L42"),
            Disposition::Skip(SkipReason::LineAnchor)
        );
        assert_eq!(
            classify(&tmp, "missing.md"),
            Disposition::Skip(SkipReason::NotFound)
        );
        assert_eq!(
            classify(&tmp, "a.md"),
            Disposition::Skip(SkipReason::SelfReference)
        );
    }

    #[test]
    fn test_line_anchor_on_missing_file_never_stats() {
        let tmp = fixture();
        assert_eq!(
            classify(&tmp, "nowhere/gone.md#L7"),
            Disposition::Skip(SkipReason::LineAnchor)
        );
    }

    #[test]
    fn test_already_processed() {
        let tmp = fixture();
        let processed: HashSet<PathBuf> = [tmp.path().join("b.md")].into_iter().collect();
        assert_eq!(
            classify_with(&tmp, &Aliases::default(), &processed, "b.md"),
            Disposition::Skip(SkipReason::AlreadyProcessed)
        );
    }

    #[test]
    fn test_alias_applied_before_resolution() {
        let tmp = fixture();
        let aliases = Aliases::new(vec![AliasRule::parse("old/=sub/").unwrap()]);
        assert_eq!(
            classify_with(&tmp, &aliases, &HashSet::new(), "old/x.md"),
            Disposition::Distant(tmp.path().join("sub/x.md"))
        );
    }

    #[test]
    fn test_alias_can_turn_url_into_local_path() {
        let tmp = fixture();
        let rule = AliasRule {
            from: "https://github.com/me/repo/blob/main/".to_string(),
            to: format!("{}/", tmp.path().display()),
        };
        let aliases = Aliases::new(vec![rule]);
        assert_eq!(
            classify_with(
                &tmp,
                &aliases,
                &HashSet::new(),
                "https://github.com/me/repo/blob/main/b.md"
            ),
            Disposition::Direct(tmp.path().join("b.md"))
        );
    }
}
