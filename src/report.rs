/// Grouped listing of a directory's files by category.
///
/// This is the read-only companion to the organize operation: it classifies
/// every direct file entry and groups the names by category without
/// touching the filesystem.
use crate::category::{CategoryTable, OTHER_CATEGORY};
use crate::organizer::{Organizer, OrganizeResult};
use std::path::Path;

/// One category and the file names classified into it, sorted
/// lexicographically.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub name: String,
    pub files: Vec<String>,
}

/// Files of a directory grouped by category.
///
/// Every configured category plus "Other" gets a group, even when empty,
/// in table order.
#[derive(Debug)]
pub struct CategoryReport {
    pub groups: Vec<CategoryGroup>,
}

impl CategoryReport {
    /// Builds the grouped report for the direct file entries of `directory`.
    ///
    /// Fails only when the directory is missing or unreadable.
    pub fn scan(table: &CategoryTable, directory: &Path) -> OrganizeResult<Self> {
        let mut groups: Vec<CategoryGroup> = table
            .category_names()
            .chain(std::iter::once(OTHER_CATEGORY))
            .map(|name| CategoryGroup {
                name: name.to_string(),
                files: Vec::new(),
            })
            .collect();

        for file_path in Organizer::direct_files(directory)? {
            let category = table.classify_path(&file_path);
            let file_name = file_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            if let Some(group) = groups.iter_mut().find(|group| group.name == category) {
                group.files.push(file_name);
            }
        }

        for group in &mut groups {
            group.files.sort();
        }

        Ok(Self { groups })
    }

    /// Total number of files across all groups.
    pub fn total_files(&self) -> usize {
        self.groups.iter().map(|group| group.files.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_report_groups_by_category() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::write(base_path.join("a.png"), "png").expect("Failed to write file");
        fs::write(base_path.join("b.jpg"), "jpg").expect("Failed to write file");
        fs::write(base_path.join("c.txt"), "txt").expect("Failed to write file");
        fs::write(base_path.join("d.xyz"), "xyz").expect("Failed to write file");

        let table = CategoryTable::new();
        let report = CategoryReport::scan(&table, base_path).expect("Scan failed");

        let images = report
            .groups
            .iter()
            .find(|group| group.name == "Images")
            .expect("Images group missing");
        assert_eq!(images.files, vec!["a.png", "b.jpg"]);

        let other = report
            .groups
            .iter()
            .find(|group| group.name == "Other")
            .expect("Other group missing");
        assert_eq!(other.files, vec!["d.xyz"]);

        assert_eq!(report.total_files(), 4);
    }

    #[test]
    fn test_report_includes_empty_groups() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let table = CategoryTable::new();
        let report = CategoryReport::scan(&table, temp_dir.path()).expect("Scan failed");

        // Every configured category plus "Other", in table order.
        let names: Vec<_> = report.groups.iter().map(|group| group.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Images",
                "Documents",
                "Audio",
                "Video",
                "Archives",
                "Code",
                "Executables",
                "Other"
            ]
        );
        assert!(report.groups.iter().all(|group| group.files.is_empty()));
        assert_eq!(report.total_files(), 0);
    }

    #[test]
    fn test_report_sorts_files_lexicographically() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::write(base_path.join("zoo.txt"), "z").expect("Failed to write file");
        fs::write(base_path.join("ant.txt"), "a").expect("Failed to write file");
        fs::write(base_path.join("bee.txt"), "b").expect("Failed to write file");

        let table = CategoryTable::new();
        let report = CategoryReport::scan(&table, base_path).expect("Scan failed");

        let documents = report
            .groups
            .iter()
            .find(|group| group.name == "Documents")
            .expect("Documents group missing");
        assert_eq!(documents.files, vec!["ant.txt", "bee.txt", "zoo.txt"]);
    }

    #[test]
    fn test_report_is_read_only() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::write(base_path.join("a.png"), "png").expect("Failed to write file");

        let table = CategoryTable::new();
        CategoryReport::scan(&table, base_path).expect("Scan failed");

        assert!(base_path.join("a.png").exists());
        assert!(!base_path.join("Images").exists());
    }

    #[test]
    fn test_report_ignores_subdirectories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::create_dir(base_path.join("Images")).expect("Failed to create subdirectory");
        fs::write(base_path.join("Images").join("old.png"), "png")
            .expect("Failed to write file");
        fs::write(base_path.join("new.png"), "png").expect("Failed to write file");

        let table = CategoryTable::new();
        let report = CategoryReport::scan(&table, base_path).expect("Scan failed");

        let images = report
            .groups
            .iter()
            .find(|group| group.name == "Images")
            .expect("Images group missing");
        assert_eq!(images.files, vec!["new.png"]);
        assert_eq!(report.total_files(), 1);
    }

    #[test]
    fn test_report_nonexistent_directory() {
        let table = CategoryTable::new();
        let result = CategoryReport::scan(&table, Path::new("/non/existent/path"));
        assert!(result.is_err());
    }
}
