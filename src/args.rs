//! These structs provide the CLI interface for the courses CLI.

use crate::model::Level;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// courses: A command-line tool for an online course catalog.
///
/// The catalog is loaded from a colon-delimited text file where every line
/// describes one course as `category : name : dd/mm/yyyy : level`. Categories
/// are matched case-insensitively and are always reported in uppercase, in
/// alphabetical order.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the full catalog report, grouped by category in key order.
    Report,

    /// Print the name of the earliest-published course in the catalog.
    Oldest,

    /// Count the courses filed under a category.
    Count(CountArgs),

    /// List every category key in ascending alphabetical order.
    Categories,

    /// Delete all courses of a category and difficulty level, printing the
    /// removed names in alphabetical order.
    ///
    /// The catalog lives in memory only, so the deletion is reported but not
    /// written back to the course file.
    Delete(DeleteArgs),

    /// Run the demonstration sequence: report, oldest course, two scripted
    /// deletions, report again.
    Demo,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The course file to read. If not supplied, input is taken from stdin.
    #[arg(long, short = 'f', env = "COURSES_FILE")]
    file: Option<PathBuf>,
}

impl Common {
    pub fn new(log_level: LevelFilter, file: Option<PathBuf>) -> Self {
        Self { log_level, file }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

/// Args for the `courses count` command.
#[derive(Debug, Parser, Clone)]
pub struct CountArgs {
    /// The category to count, matched case-insensitively.
    #[arg(long)]
    category: String,
}

impl CountArgs {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Args for the `courses delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// The category to delete from, matched case-insensitively. The category
    /// must exist in the catalog.
    #[arg(long)]
    category: String,

    /// The difficulty level to delete: beginner, intermediate or advanced.
    #[arg(long)]
    level: Level,
}

impl DeleteArgs {
    pub fn new(category: impl Into<String>, level: Level) -> Self {
        Self {
            category: category.into(),
            level,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn level(&self) -> Level {
        self.level
    }
}
