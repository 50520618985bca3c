//! Recursive filesystem path matching
//!
//! Enumerates files and/or directories under a root directory that match a
//! glob pattern. The walk includes dot entries, never follows symlinks, and
//! ignores no files (gitignore handling is off).
//!
//! Individual entries that cannot be read during the walk (permission
//! denied, broken symlink) are skipped rather than aborting the whole
//! enumeration. Only an unreadable root or an invalid pattern is an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use thiserror::Error;

/// Errors that can occur during path enumeration
#[derive(Debug, Error)]
pub enum PathsError {
    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(#[from] globset::Error),

    #[error("Cannot read root directory '{root}': {source}")]
    UnreadableRoot {
        root: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What kind of entries an enumeration returns
///
/// # Example
/// ```
/// use util_belt_core_rs::PathSelection;
///
/// assert_eq!(PathSelection::default(), PathSelection::Files);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathSelection {
    /// Files only (the default)
    #[default]
    Files,
    /// Files and directories
    FilesAndDirectories,
    /// Directories only
    DirectoriesOnly,
}

/// Configuration for a path enumeration
///
/// # Example
/// ```
/// use util_belt_core_rs::{PathQuery, PathSelection};
///
/// let query = PathQuery::new()
///     .pattern("**/*.rs")
///     .selection(PathSelection::Files)
///     .absolute(false);
/// ```
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Glob pattern matched against the path relative to the root
    pub pattern: String,
    /// Which entry kinds to return
    pub selection: PathSelection,
    /// Return absolute paths (true) or paths relative to the root (false)
    pub absolute: bool,
}

impl Default for PathQuery {
    fn default() -> Self {
        Self {
            pattern: "**/*".to_string(),
            selection: PathSelection::Files,
            absolute: true,
        }
    }
}

impl PathQuery {
    /// Create a query with the defaults: pattern `**/*`, files only,
    /// absolute paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glob pattern.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Set which entry kinds to return.
    pub fn selection(mut self, selection: PathSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Set whether returned paths are absolute or root-relative.
    pub fn absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }
}

/// Enumerate paths under `root` matching `query`.
///
/// The root itself is never part of the result. Matching is performed
/// against the path relative to `root`, so a pattern like `**/*.txt`
/// behaves the same regardless of where `root` lives.
///
/// # Example
/// ```no_run
/// use util_belt_core_rs::{get_paths, PathQuery};
///
/// let paths = get_paths("/tmp/data".as_ref(), &PathQuery::new()).unwrap();
/// for path in paths {
///     println!("{}", path.display());
/// }
/// ```
pub fn get_paths(root: &Path, query: &PathQuery) -> Result<Vec<PathBuf>, PathsError> {
    // Verify the root is readable before walking. The walker itself reports
    // an unreadable root as a single skippable entry error, which would
    // silently produce an empty result instead.
    let _ = fs::read_dir(root).map_err(|e| PathsError::UnreadableRoot {
        root: root.to_path_buf(),
        source: e,
    })?;

    // literal_separator keeps `*` from crossing `/`; `**` still does.
    let matcher: GlobMatcher = GlobBuilder::new(&query.pattern)
        .literal_separator(true)
        .build()?
        .compile_matcher();

    let walker = ignore::WalkBuilder::new(root)
        .hidden(false)
        .follow_links(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .build();

    let mut paths = Vec::new();

    for entry in walker {
        // Skip individual entry errors rather than aborting the walk.
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        // Depth 0 is the root itself.
        if entry.depth() == 0 {
            continue;
        }

        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        let keep = match query.selection {
            PathSelection::Files => !is_dir,
            PathSelection::DirectoriesOnly => is_dir,
            PathSelection::FilesAndDirectories => true,
        };
        if !keep {
            continue;
        }

        // The walker yields paths prefixed with the root as given.
        let relative = match entry.path().strip_prefix(root) {
            Ok(rel) => rel,
            Err(_) => continue,
        };

        if !matcher.is_match(relative) {
            continue;
        }

        if query.absolute {
            paths.push(entry.into_path());
        } else {
            paths.push(relative.to_path_buf());
        }
    }

    Ok(paths)
}

/// Enumerate only file paths under `root` matching `pattern`.
///
/// # Example
/// ```no_run
/// use util_belt_core_rs::get_file_paths;
///
/// let files = get_file_paths("/tmp/data".as_ref(), "**/*.json", true).unwrap();
/// ```
pub fn get_file_paths(
    root: &Path,
    pattern: &str,
    absolute: bool,
) -> Result<Vec<PathBuf>, PathsError> {
    get_paths(
        root,
        &PathQuery::new()
            .pattern(pattern)
            .selection(PathSelection::Files)
            .absolute(absolute),
    )
}

/// Enumerate only directory paths under `root` matching `pattern`.
///
/// # Example
/// ```no_run
/// use util_belt_core_rs::get_directory_paths;
///
/// let dirs = get_directory_paths("/tmp/data".as_ref(), "**/*", false).unwrap();
/// ```
pub fn get_directory_paths(
    root: &Path,
    pattern: &str,
    absolute: bool,
) -> Result<Vec<PathBuf>, PathsError> {
    get_paths(
        root,
        &PathQuery::new()
            .pattern(pattern)
            .selection(PathSelection::DirectoriesOnly)
            .absolute(absolute),
    )
}
