//! Command-line interface module for dirsort.
//!
//! This module handles all CLI-related functionality including:
//! - Argument parsing and validation
//! - Organization orchestration
//! - Dry-run previews
//! - Grouped category listings

use crate::organizer::{MoveOutcome, Organizer};
use crate::output::OutputFormatter;
use crate::report::CategoryReport;
use clap::Parser;
use colored::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Sort the files of a directory into category subfolders by extension.
#[derive(Parser, Debug)]
#[command(name = "dirsort")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory to organize (default: current directory)
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Show what would be moved without actually moving
    #[arg(long)]
    pub dry_run: bool,

    /// List files by category without organizing
    #[arg(long)]
    pub list: bool,
}

/// Runs the CLI application with the given arguments.
///
/// This is the main entry point for CLI operations. A missing target
/// directory is reported as a message and treated as a normal return, not
/// an error; any other failure is surfaced to the caller.
///
/// # Examples
///
/// ```no_run
/// use dirsort::cli::{Cli, run_cli};
/// use clap::Parser;
///
/// let cli = Cli::parse_from(["dirsort", "/path/to/directory", "--dry-run"]);
/// match run_cli(&cli) {
///     Ok(()) => println!("Operation completed successfully"),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(cli: &Cli) -> Result<(), String> {
    let organizer = Organizer::default();

    if !cli.directory.exists() {
        OutputFormatter::error(&format!(
            "Directory {} does not exist",
            cli.directory.display()
        ));
        return Ok(());
    }

    // --list takes precedence when combined with --dry-run.
    if cli.list {
        list_directory(&organizer, &cli.directory)
    } else {
        organize_directory(&organizer, &cli.directory, cli.dry_run)
    }
}

/// Organizes the direct file entries of `directory` into category
/// subdirectories, reporting each outcome and a final summary.
fn organize_directory(organizer: &Organizer, directory: &Path, dry_run: bool) -> Result<(), String> {
    if dry_run {
        OutputFormatter::dry_run_notice(&format!(
            "Analyzing contents of: {}",
            directory.display()
        ));
    } else {
        OutputFormatter::info(&format!("Organizing contents of: {}", directory.display()));
    }

    let categories: Vec<&str> = organizer.table().category_names().collect();
    OutputFormatter::plain(&format!("Categories: {}", categories.join(", ")));

    let summary = if dry_run {
        organizer
            .organize_with(directory, true, |outcome| {
                OutputFormatter::plain(&outcome_line(outcome));
            })
            .map_err(|e| e.to_string())?
    } else {
        let total = Organizer::direct_files(directory)
            .map_err(|e| e.to_string())?
            .len();
        let pb = OutputFormatter::create_progress_bar(total as u64);
        let result = organizer.organize_with(directory, false, |outcome| {
            pb.println(outcome_line(outcome));
            pb.inc(1);
        });
        pb.finish_and_clear();
        result.map_err(|e| e.to_string())?
    };

    let mut category_counts: HashMap<String, usize> = HashMap::new();
    for outcome in &summary.outcomes {
        match outcome {
            MoveOutcome::Moved { category, .. } | MoveOutcome::WouldMove { category, .. } => {
                *category_counts.entry(category.clone()).or_insert(0) += 1;
            }
            MoveOutcome::Failed { .. } => {}
        }
    }

    if dry_run {
        let count = summary.would_move_count();
        if count > 0 {
            OutputFormatter::summary_table(&category_counts, count);
        }
        OutputFormatter::dry_run_notice(&format!(
            "Dry run complete. {} {} would be moved.",
            count,
            if count == 1 { "file" } else { "files" }
        ));
    } else {
        let count = summary.moved_count();
        if count > 0 {
            OutputFormatter::summary_table(&category_counts, count);
        }
        OutputFormatter::success(&format!(
            "Organization complete! {} {} moved.",
            count,
            if count == 1 { "file" } else { "files" }
        ));
        if summary.failed_count() > 0 {
            OutputFormatter::warning(&format!(
                "{} file(s) could not be organized. Please review errors above.",
                summary.failed_count()
            ));
        }
    }

    Ok(())
}

/// Prints the grouped category report for `directory` without organizing.
fn list_directory(organizer: &Organizer, directory: &Path) -> Result<(), String> {
    OutputFormatter::info(&format!("Files in {}:", directory.display()));

    let report =
        CategoryReport::scan(organizer.table(), directory).map_err(|e| e.to_string())?;
    OutputFormatter::category_report(&report);

    Ok(())
}

/// Formats a single per-file outcome line.
fn outcome_line(outcome: &MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Moved { category, .. } => {
            format!(
                "{} Moved: {} -> {}/",
                "✓".green(),
                outcome.file_name(),
                category
            )
        }
        MoveOutcome::WouldMove { category, .. } => {
            format!(
                "{} Would move: {} -> {}/",
                "→".yellow(),
                outcome.file_name(),
                category
            )
        }
        MoveOutcome::Failed { reason, .. } => {
            format!("{} Error moving {}: {}", "✗".red(), outcome.file_name(), reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_defaults_to_current_directory() {
        let cli = Cli::parse_from(["dirsort"]);
        assert_eq!(cli.directory, PathBuf::from("."));
        assert!(!cli.dry_run);
        assert!(!cli.list);
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["dirsort", "/tmp/stuff", "--dry-run"]);
        assert_eq!(cli.directory, PathBuf::from("/tmp/stuff"));
        assert!(cli.dry_run);

        let cli = Cli::parse_from(["dirsort", "--list"]);
        assert!(cli.list);
    }

    #[test]
    fn test_run_cli_missing_directory_is_not_an_error() {
        let cli = Cli::parse_from(["dirsort", "/non/existent/path"]);
        assert!(run_cli(&cli).is_ok());
    }

    #[test]
    fn test_run_cli_organizes() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("photo.png"), "png").expect("Failed to write file");

        let cli = Cli::parse_from(["dirsort", temp_dir.path().to_str().unwrap()]);
        run_cli(&cli).expect("run_cli failed");

        assert!(temp_dir.path().join("Images").join("photo.png").exists());
    }

    #[test]
    fn test_run_cli_list_takes_precedence_over_dry_run() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("photo.png"), "png").expect("Failed to write file");

        let cli = Cli::parse_from([
            "dirsort",
            temp_dir.path().to_str().unwrap(),
            "--dry-run",
            "--list",
        ]);
        run_cli(&cli).expect("run_cli failed");

        // Listing only; nothing moved, nothing created.
        assert!(temp_dir.path().join("photo.png").exists());
        assert!(!temp_dir.path().join("Images").exists());
    }

    #[test]
    fn test_outcome_line_mentions_category() {
        let outcome = MoveOutcome::WouldMove {
            from: PathBuf::from("/tmp/photo.png"),
            category: "Images".to_string(),
        };
        let line = outcome_line(&outcome);
        assert!(line.contains("photo.png"));
        assert!(line.contains("Images/"));
    }
}
