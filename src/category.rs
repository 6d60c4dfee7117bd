/// Extension-based file categorization.
///
/// This module maps file extensions to named categories (e.g. "Images",
/// "Documents") through an insertion-ordered table. Lookup is
/// first-match-wins over insertion order, so the same extension may appear
/// in several categories and the earliest registered one takes effect.
///
/// # Examples
///
/// ```
/// use dirsort::category::CategoryTable;
///
/// let table = CategoryTable::new();
/// assert_eq!(table.classify(".png"), "Images");
/// assert_eq!(table.classify(".pdf"), "Documents");
/// assert_eq!(table.classify(".xyz"), "Other");
/// ```
use std::path::Path;

/// Sentinel category for extensions with no table entry.
pub const OTHER_CATEGORY: &str = "Other";

/// The default category table: extension sets keyed by category name.
const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Images",
        &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".webp"],
    ),
    (
        "Documents",
        &[
            ".pdf", ".doc", ".docx", ".txt", ".rtf", ".xls", ".xlsx", ".ppt", ".pptx",
        ],
    ),
    ("Audio", &[".mp3", ".wav", ".flac", ".aac", ".ogg"]),
    ("Video", &[".mp4", ".avi", ".mov", ".wmv", ".flv", ".webm"]),
    ("Archives", &[".zip", ".rar", ".7z", ".tar", ".gz"]),
    (
        "Code",
        &[
            ".py", ".js", ".html", ".css", ".java", ".cpp", ".c", ".php", ".json", ".xml",
        ],
    ),
    ("Executables", &[".exe", ".msi", ".dmg", ".pkg", ".deb"]),
];

/// A single category with its recognized extensions.
#[derive(Debug, Clone)]
struct CategoryEntry {
    name: String,
    extensions: Vec<String>,
}

/// Insertion-ordered mapping from category name to extension set.
///
/// The table is mutable: new categories can be registered at runtime and
/// existing ones overwritten. Nothing is persisted beyond the process.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    entries: Vec<CategoryEntry>,
}

impl CategoryTable {
    /// Creates a table populated with the standard categories.
    pub fn new() -> Self {
        let mut table = Self::empty();
        for (name, extensions) in DEFAULT_CATEGORIES {
            table.register(name, extensions);
        }
        table
    }

    /// Creates a table with no categories; everything classifies as "Other".
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a category, or overwrites the extension set of an existing one.
    ///
    /// An overwritten entry keeps its original table position, so
    /// first-match-wins ordering stays stable; new names are appended.
    /// Extensions are normalized to lowercase with a leading dot, but not
    /// otherwise validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::category::CategoryTable;
    ///
    /// let mut table = CategoryTable::new();
    /// table.register("Notes", &[".note"]);
    /// assert_eq!(table.classify(".note"), "Notes");
    /// ```
    pub fn register(&mut self, name: &str, extensions: &[&str]) {
        let normalized: Vec<String> = extensions
            .iter()
            .map(|ext| Self::normalize_extension(ext))
            .collect();

        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) {
            entry.extensions = normalized;
        } else {
            self.entries.push(CategoryEntry {
                name: name.to_string(),
                extensions: normalized,
            });
        }
    }

    /// Returns the category name for an extension.
    ///
    /// The extension carries its leading dot (`".jpg"`); extensionless files
    /// are represented by the empty string. Matching is case-insensitive.
    /// Returns the first category whose set contains the extension, or
    /// `"Other"` when none does. Pure and total.
    pub fn classify(&self, extension: &str) -> &str {
        let ext = extension.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.extensions.iter().any(|known| *known == ext))
            .map(|entry| entry.name.as_str())
            .unwrap_or(OTHER_CATEGORY)
    }

    /// Classifies a path by its (normalized) extension.
    pub fn classify_path(&self, path: &Path) -> &str {
        self.classify(&Self::extension_of(path))
    }

    /// Extracts the normalized extension of a path.
    ///
    /// Only the component after the last dot counts (`archive.tar.gz`
    /// yields `".gz"`); names without an extension yield `""`.
    pub fn extension_of(path: &Path) -> String {
        match path.extension() {
            Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
            None => String::new(),
        }
    }

    /// Iterates over category names in table order. "Other" is not listed;
    /// it is the fallback, not an entry.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    fn normalize_extension(ext: &str) -> String {
        let lower = ext.to_lowercase();
        if lower.is_empty() || lower.starts_with('.') {
            lower
        } else {
            format!(".{lower}")
        }
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new()
    }
}
