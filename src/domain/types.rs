//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during classification and aggregation
//! - persisted to the course JSON file
//! - exported to CSV for spreadsheets

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Identifier of a built-in grading standard.
///
/// The set is fixed at compile time; there is no support for user-defined
/// standards at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StandardId {
    /// Nigerian universities, 5-point scale.
    Ng,
    /// Nigerian postgraduate/special 7-point scale.
    #[value(name = "ui_special")]
    UiSpecial,
    /// Nigerian polytechnics, 4-point scale.
    Poly,
    /// United Kingdom honours classification mapped onto a 4-point scale.
    Uk,
    /// United States 4-point scale.
    Us,
    /// Indian universities, 10-point scale.
    In,
}

impl StandardId {
    /// The registry key for this standard (matches the serialized form).
    pub fn key(self) -> &'static str {
        match self {
            StandardId::Ng => "ng",
            StandardId::UiSpecial => "ui_special",
            StandardId::Poly => "poly",
            StandardId::Uk => "uk",
            StandardId::Us => "us",
            StandardId::In => "in",
        }
    }
}

/// A course as entered by the user.
///
/// Records are owned, persisted, and mutated by the caller; the engine treats
/// them as read-only input on every call and never retains a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Creation-time millisecond timestamp, unique within one course file.
    pub id: i64,
    /// Term key in "year.term" form (e.g. "1.2"). Used for grouping and
    /// sorting only, never interpreted arithmetically.
    pub term: String,
    /// Course code, uppercased at entry (e.g. "MTH101").
    pub code: String,
    /// Raw score in 0..=100. Letter inputs are converted before storage.
    pub score: u8,
    /// Positive credit-unit weight.
    pub units: u32,
}

/// The persisted course list.
///
/// This is the on-disk schema; `io::store` reads and writes it as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseFile {
    pub tool: String,
    pub courses: Vec<CourseRecord>,
}

impl Default for CourseFile {
    fn default() -> Self {
        Self {
            tool: "gpat".to_string(),
            courses: Vec::new(),
        }
    }
}

/// The (label, points) pair a score earns under a standard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: &'static str,
    pub points: f64,
}

/// A course together with its computed classification (for table rows and
/// exports).
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedCourse {
    pub course: CourseRecord,
    pub class: Classification,
    /// `units * points`.
    pub quality_points: f64,
}

/// Weighted GPA totals for a group of courses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GpaSummary {
    pub total_units: u32,
    pub quality_points: f64,
    /// `quality_points / total_units`, or 0 when there are no units.
    pub gpa: f64,
}

/// Three-way outcome of the target-GPA solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetOutcome {
    /// The required average exceeds the scale ceiling.
    Unreachable { required: f64, max: f64 },
    /// Current totals already put the cumulative GPA past the target.
    AlreadyExceeded,
    /// The target is attainable; `required` is the average quality points per
    /// unit needed over the next term's load.
    Achievable { required: f64 },
}

/// Enumerate the valid "year.term" keys for a program.
///
/// Mirrors the semester dropdown of the original tracker: `years` program
/// years, each with `terms_per_year` terms.
pub fn term_catalog(years: u32, terms_per_year: u32) -> Vec<String> {
    let mut keys = Vec::with_capacity((years * terms_per_year) as usize);
    for year in 1..=years {
        for term in 1..=terms_per_year {
            keys.push(format!("{year}.{term}"));
        }
    }
    keys
}
