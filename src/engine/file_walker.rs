#![forbid(unsafe_code)]

//! Recursive collection of files to format
//!
//! Each root is descended depth-first, one root at a time, in the order
//! given. Nothing is filtered except by extension: hidden files and
//! `.gitignore`d paths are visited like any other. Entries come back in
//! whatever order the filesystem yields them.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Walks root directories and keeps files whose extension is allowed
pub struct FileWalker<'a> {
    extensions: &'a [String],
}

impl<'a> FileWalker<'a> {
    /// Creates a walker accepting the given extensions (leading dot included)
    pub fn new(extensions: &'a [String]) -> Self {
        FileWalker { extensions }
    }

    /// Collect every matching file under `roots`
    ///
    /// A root that does not exist, or a directory that cannot be read,
    /// contributes no files and is not an error.
    pub fn collect<P: AsRef<Path>>(&self, roots: &[P]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for root in roots {
            let root = root.as_ref();
            let walker = WalkBuilder::new(root)
                .standard_filters(false)
                .follow_links(false)
                .build();

            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        tracing::debug!(root = %root.display(), error = %err, "skipping unreadable entry");
                        continue;
                    }
                };

                if Self::is_candidate(&entry) && self.matches(entry.path()) {
                    tracing::debug!(path = %entry.path().display(), "collected");
                    files.push(entry.into_path());
                }
            }
        }

        files
    }

    /// Anything that is not a directory, including symlinks to files
    ///
    /// Symlinked directories are never descended into.
    fn is_candidate(entry: &ignore::DirEntry) -> bool {
        match entry.file_type() {
            Some(ft) if ft.is_dir() => false,
            Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
            Some(_) => true,
            None => false,
        }
    }

    /// Whether the file's extension is in the allow-set
    pub fn matches(&self, path: &Path) -> bool {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self
                .extensions
                .iter()
                .any(|allowed| allowed.strip_prefix('.') == Some(ext)),
            None => false,
        }
    }
}
