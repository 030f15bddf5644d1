//! Shared pipeline logic used by the CLI subcommands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load -> resolve standard -> classify -> aggregate -> format
//!
//! The CLI layer then focuses on argument parsing and printing.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::domain::{ClassifiedCourse, CourseFile, CourseRecord, GpaSummary};
use crate::engine::{aggregate, aggregate_by_term, clamp_score, score_from_letter};
use crate::error::AppError;
use crate::report::classify_courses;
use crate::standards::GradingStandard;

/// All computed outputs of one report run.
#[derive(Debug, Clone)]
pub struct ReportOutput {
    pub rows: Vec<ClassifiedCourse>,
    pub by_term: BTreeMap<String, GpaSummary>,
    pub overall: GpaSummary,
}

/// User input for the add workflow, before validation.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub term: String,
    pub code: String,
    /// Raw score field: a number or a letter grade.
    pub raw_score: String,
    pub units: u32,
}

/// Classify and aggregate the (optionally filtered) course list.
pub fn build_report(
    courses: &[CourseRecord],
    standard: &GradingStandard,
    term_filter: Option<&str>,
) -> Result<ReportOutput, AppError> {
    let mut selected: Vec<CourseRecord> = match term_filter {
        Some(term) => courses.iter().filter(|c| c.term == term).cloned().collect(),
        None => courses.to_vec(),
    };

    // Table rows sort numerically by term key ("2.1" before "10.1"); grouped
    // summaries keep lexicographic key order.
    selected.sort_by(|a, b| {
        let ka = a.term.parse::<f64>().unwrap_or(0.0);
        let kb = b.term.parse::<f64>().unwrap_or(0.0);
        ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal)
    });

    let rows = classify_courses(&selected, standard)?;
    let by_term = aggregate_by_term(&selected, standard)?;
    let overall = aggregate(&selected, standard)?;

    Ok(ReportOutput {
        rows,
        by_term,
        overall,
    })
}

/// Validate and append a course, returning the stored record.
///
/// The raw score is either numeric (rounded, then clamped to 0..=100) or a
/// letter grade converted through the standard's inverse table. Duplicate
/// (code, term) pairs are rejected.
pub fn add_course(
    book: &mut CourseFile,
    input: &NewCourse,
    standard: &GradingStandard,
    valid_terms: &[String],
) -> Result<CourseRecord, AppError> {
    let code = input.code.trim().to_uppercase();
    if code.is_empty() {
        return Err(AppError::new(2, "Course code must not be empty."));
    }
    if input.units == 0 {
        return Err(AppError::new(2, "Units must be positive."));
    }
    if !valid_terms.iter().any(|t| *t == input.term) {
        return Err(AppError::new(
            2,
            format!(
                "Term '{}' is outside the program (expected a year.term key like {}).",
                input.term,
                valid_terms.first().map(String::as_str).unwrap_or("1.1")
            ),
        ));
    }
    if book
        .courses
        .iter()
        .any(|c| c.code == code && c.term == input.term)
    {
        return Err(AppError::new(
            2,
            format!("{code} is already recorded for term {}.", input.term),
        ));
    }

    let score = parse_score(&input.raw_score, standard)?;

    let record = CourseRecord {
        id: Utc::now().timestamp_millis(),
        term: input.term.clone(),
        code,
        score,
        units: input.units,
    };
    book.courses.push(record.clone());
    Ok(record)
}

/// Remove a course by id, returning the deleted record.
pub fn remove_course(book: &mut CourseFile, id: i64) -> Result<CourseRecord, AppError> {
    let index = book
        .courses
        .iter()
        .position(|c| c.id == id)
        .ok_or_else(|| AppError::new(3, format!("No course with id {id}.")))?;
    Ok(book.courses.remove(index))
}

fn parse_score(raw: &str, standard: &GradingStandard) -> Result<u8, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::new(2, "Score must not be empty."));
    }

    if let Ok(value) = raw.parse::<f64>() {
        if value.is_finite() {
            return Ok(clamp_score(value));
        }
    }

    score_from_letter(raw, standard).map_err(|err| {
        let tokens: Vec<&str> = standard.letter_tokens().collect();
        AppError::new(2, format!("{err} Accepted grades: {}.", tokens.join(", ")))
    })
}
