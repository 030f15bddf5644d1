//! Reporting utilities: classified rows and formatted terminal output.

use crate::domain::{ClassifiedCourse, CourseRecord};
use crate::engine::classify;
use crate::error::AppError;
use crate::standards::GradingStandard;

pub mod format;

pub use format::*;

/// Classify each course and compute its quality points (for table rows and
/// exports).
pub fn classify_courses(
    records: &[CourseRecord],
    standard: &GradingStandard,
) -> Result<Vec<ClassifiedCourse>, AppError> {
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        let class = classify(record.score, standard)?;
        out.push(ClassifiedCourse {
            course: record.clone(),
            class,
            quality_points: record.units as f64 * class.points,
        });
    }
    Ok(out)
}
