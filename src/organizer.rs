/// File organization: classify direct directory entries and move them into
/// category subdirectories.
///
/// This module provides the core organize operation. It handles category
/// directory creation, collision-safe destination naming, file movement,
/// and per-file failure isolation. A dry-run mode records intended moves
/// without touching the filesystem.
use crate::category::CategoryTable;
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound on the `_1`, `_2`, … collision counter per file.
const MAX_COLLISION_ATTEMPTS: u32 = 10_000;

/// Errors raised by organize operations.
///
/// Only the directory-level variants abort a run; the per-file variants are
/// caught in the organize loop and recorded as [`MoveOutcome::Failed`].
#[derive(Debug)]
pub enum OrganizeError {
    /// The target directory does not exist.
    DirectoryNotFound { path: PathBuf },
    /// The target directory could not be enumerated.
    DirectoryReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create a category directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move a file to its category directory.
    FileMoveFailed {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
    /// Every candidate name up to the collision cap was taken.
    CollisionRetriesExhausted { destination: PathBuf },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryNotFound { path } => {
                write!(f, "Directory {} does not exist", path.display())
            }
            Self::DirectoryReadFailed { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailed {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
            Self::CollisionRetriesExhausted { destination } => {
                write!(
                    f,
                    "No free name for {} after {} attempts",
                    destination.display(),
                    MAX_COLLISION_ATTEMPTS
                )
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// Result type for organize operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Per-file result of an organize run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The file was moved; `to` is the final (possibly renamed) destination.
    Moved {
        from: PathBuf,
        to: PathBuf,
        category: String,
    },
    /// Dry run: the file would be moved into `category`.
    WouldMove { from: PathBuf, category: String },
    /// The move failed; the run continued with the remaining files.
    Failed { from: PathBuf, reason: String },
}

impl MoveOutcome {
    /// The name of the file this outcome refers to.
    pub fn file_name(&self) -> String {
        let from = match self {
            Self::Moved { from, .. } | Self::WouldMove { from, .. } | Self::Failed { from, .. } => {
                from
            }
        };
        from.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Summary of an organize run: the per-file outcomes in processing order.
#[derive(Debug, Default)]
pub struct OrganizeSummary {
    pub outcomes: Vec<MoveOutcome>,
}

impl OrganizeSummary {
    fn new() -> Self {
        Self::default()
    }

    /// Number of files actually moved.
    pub fn moved_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, MoveOutcome::Moved { .. }))
            .count()
    }

    /// Number of files that would be moved (dry run).
    pub fn would_move_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, MoveOutcome::WouldMove { .. }))
            .count()
    }

    /// Number of files whose move failed.
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, MoveOutcome::Failed { .. }))
            .count()
    }
}

/// Sorts the files of one directory into category subdirectories.
///
/// The organizer owns its [`CategoryTable`], so independent instances with
/// different tables can coexist in one process.
///
/// # Examples
///
/// ```no_run
/// use dirsort::organizer::Organizer;
/// use std::path::Path;
///
/// let organizer = Organizer::default();
/// match organizer.organize(Path::new("/path/to/downloads"), false) {
///     Ok(summary) => println!("{} files moved", summary.moved_count()),
///     Err(e) => eprintln!("Organization failed: {}", e),
/// }
/// ```
pub struct Organizer {
    table: CategoryTable,
}

impl Organizer {
    /// Creates an organizer over the given category table.
    pub fn new(table: CategoryTable) -> Self {
        Self { table }
    }

    /// The category table in use.
    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Returns the category name for an extension. See [`CategoryTable::classify`].
    pub fn classify(&self, extension: &str) -> &str {
        self.table.classify(extension)
    }

    /// Adds or overwrites a category for subsequent classify calls.
    pub fn register_category(&mut self, name: &str, extensions: &[&str]) {
        self.table.register(name, extensions);
    }

    /// Organizes every direct file entry of `directory` into category
    /// subdirectories.
    ///
    /// Subdirectories are skipped, hidden files are included, and entries
    /// are processed in file-name order. With `dry_run` set, intended moves
    /// are recorded and the filesystem is left untouched. A per-file move
    /// failure is recorded in the summary and does not abort the run; only
    /// a missing or unreadable target directory does.
    pub fn organize(&self, directory: &Path, dry_run: bool) -> OrganizeResult<OrganizeSummary> {
        self.organize_with(directory, dry_run, |_| {})
    }

    /// Like [`Organizer::organize`], but invokes `on_outcome` for each file
    /// as its outcome is decided, for progress reporting.
    pub fn organize_with<F>(
        &self,
        directory: &Path,
        dry_run: bool,
        mut on_outcome: F,
    ) -> OrganizeResult<OrganizeSummary>
    where
        F: FnMut(&MoveOutcome),
    {
        let files = Self::direct_files(directory)?;
        let mut summary = OrganizeSummary::new();

        for file_path in files {
            let category = self.table.classify_path(&file_path).to_string();

            let outcome = if dry_run {
                MoveOutcome::WouldMove {
                    from: file_path,
                    category,
                }
            } else {
                match Self::move_into_category(directory, &file_path, &category) {
                    Ok(destination) => MoveOutcome::Moved {
                        from: file_path,
                        to: destination,
                        category,
                    },
                    Err(e) => MoveOutcome::Failed {
                        from: file_path,
                        reason: e.to_string(),
                    },
                }
            };

            on_outcome(&outcome);
            summary.outcomes.push(outcome);
        }

        Ok(summary)
    }

    /// Moves one file into `base_path/<category>`, creating the category
    /// directory if absent and renaming on collision.
    ///
    /// Returns the final destination path.
    pub fn move_into_category(
        base_path: &Path,
        file_path: &Path,
        category: &str,
    ) -> OrganizeResult<PathBuf> {
        let category_dir = base_path.join(category);

        fs::create_dir_all(&category_dir).map_err(|e| OrganizeError::DirectoryCreationFailed {
            path: category_dir.clone(),
            source: e,
        })?;

        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::FileMoveFailed {
                source: file_path.to_path_buf(),
                destination: category_dir.clone(),
                source_error: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "file has no name component",
                ),
            })?;

        let destination = Self::collision_free_destination(&category_dir, Path::new(file_name))?;

        fs::rename(file_path, &destination).map_err(|e| OrganizeError::FileMoveFailed {
            source: file_path.to_path_buf(),
            destination: destination.clone(),
            source_error: e,
        })?;

        Ok(destination)
    }

    /// Lists the direct file entries of `directory`, sorted by name.
    ///
    /// Enumeration order is platform-dependent, so callers must not rely on
    /// it; sorting keeps outcome and report order deterministic.
    pub(crate) fn direct_files(directory: &Path) -> OrganizeResult<Vec<PathBuf>> {
        if !directory.exists() {
            return Err(OrganizeError::DirectoryNotFound {
                path: directory.to_path_buf(),
            });
        }

        let entries = fs::read_dir(directory).map_err(|e| OrganizeError::DirectoryReadFailed {
            path: directory.to_path_buf(),
            source: e,
        })?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries.flatten() {
            if let Ok(file_type) = entry.file_type()
                && file_type.is_file()
            {
                files.push(entry.path());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Finds a destination name that does not collide with an existing file.
    ///
    /// The first free of `name.ext`, `name_1.ext`, `name_2.ext`, … is
    /// returned; the extension is preserved and the counter is appended to
    /// the stem. Extensionless names become `name_1`, `name_2`, ….
    fn collision_free_destination(
        category_dir: &Path,
        file_name: &Path,
    ) -> OrganizeResult<PathBuf> {
        let destination = category_dir.join(file_name);
        if !destination.exists() {
            return Ok(destination);
        }

        let stem = file_name
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let suffix = file_name
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        for counter in 1..=MAX_COLLISION_ATTEMPTS {
            let candidate = category_dir.join(format!("{stem}_{counter}{suffix}"));
            if !candidate.exists() {
                return Ok(candidate);
            }
        }

        Err(OrganizeError::CollisionRetriesExhausted { destination })
    }
}

impl Default for Organizer {
    fn default() -> Self {
        Self::new(CategoryTable::new())
    }
}
