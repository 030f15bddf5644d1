//! Command-line parsing for the GPA tracker.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the engine code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::StandardId;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "gpat",
    version,
    about = "GPA tracker: per-course grades, term and cumulative GPA, target planning"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a course (numeric score or letter grade) to the course file.
    Add(AddArgs),
    /// Remove a course by the id shown in the report.
    Remove(RemoveArgs),
    /// Delete every stored course.
    Clear(StoreArgs),
    /// Print the course table, term GPAs, and cumulative GPA.
    Report(ReportArgs),
    /// Compute the average needed next term to reach a target cumulative GPA.
    Target(TargetArgs),
}

/// Options shared by every subcommand that touches the course file.
#[derive(Debug, Parser, Clone)]
pub struct StoreArgs {
    /// Course data file (default: $GPA_TRACK_FILE, else ./courses.json).
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl StoreArgs {
    /// Resolve the course-file path, consulting the environment when no
    /// explicit flag was given.
    pub fn path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(crate::io::store::default_store_path)
    }
}

/// Arguments for `gpat add`.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Grading standard used to interpret letter grades.
    #[arg(short = 's', long, value_enum, default_value_t = StandardId::Ng)]
    pub standard: StandardId,

    /// Term key in "year.term" form (e.g. 1.2).
    #[arg(long)]
    pub term: String,

    /// Course code (stored uppercase).
    #[arg(long)]
    pub code: String,

    /// Score 0-100, or a letter grade accepted by the standard (A, B+, 2:1, ...).
    #[arg(long)]
    pub score: String,

    /// Credit units (positive).
    #[arg(long)]
    pub units: u32,

    /// Program length in years (bounds the valid term keys).
    #[arg(long, default_value_t = 4)]
    pub years: u32,

    /// Terms per academic year.
    #[arg(long, default_value_t = 2)]
    pub terms_per_year: u32,
}

/// Arguments for `gpat remove`.
#[derive(Debug, Parser, Clone)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Id of the course to delete.
    pub id: i64,
}

/// Arguments for `gpat report`.
#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Grading standard to classify under.
    #[arg(short = 's', long, value_enum, default_value_t = StandardId::Ng)]
    pub standard: StandardId,

    /// Only include courses from this term (exact key match, e.g. 1.2).
    #[arg(long)]
    pub term: Option<String>,

    /// Export per-course results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Arguments for `gpat target`.
#[derive(Debug, Parser, Clone)]
pub struct TargetArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Grading standard to classify under.
    #[arg(short = 's', long, value_enum, default_value_t = StandardId::Ng)]
    pub standard: StandardId,

    /// Desired cumulative GPA.
    #[arg(long)]
    pub goal: f64,

    /// Units planned for next term.
    #[arg(long)]
    pub next_units: u32,
}
