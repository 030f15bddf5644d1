//! Export per-course results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::ClassifiedCourse;
use crate::error::AppError;
use crate::standards::GradingStandard;

/// Write classified course rows to a CSV file.
pub fn write_results_csv(
    path: &Path,
    rows: &[ClassifiedCourse],
    standard: &GradingStandard,
) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(4, format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    // Header
    writeln!(file, "id,term,code,units,score,grade,points,quality_points,standard")
        .map_err(|e| AppError::new(4, format!("Failed to write export CSV header: {e}")))?;

    for row in rows {
        let c = &row.course;
        writeln!(
            file,
            "{},{},{},{},{},{},{:.2},{:.2},{}",
            c.id,
            c.term,
            c.code,
            c.units,
            c.score,
            row.class.label,
            row.class.points,
            row.quality_points,
            standard.id.key(),
        )
        .map_err(|e| AppError::new(4, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Classification, CourseRecord, StandardId};
    use crate::standards::by_id;

    #[test]
    fn export_writes_header_and_one_row_per_course() {
        let rows = vec![ClassifiedCourse {
            course: CourseRecord {
                id: 42,
                term: "1.1".to_string(),
                code: "MTH101".to_string(),
                score: 72,
                units: 3,
            },
            class: Classification {
                label: "A",
                points: 5.0,
            },
            quality_points: 15.0,
        }];

        let path = std::env::temp_dir().join(format!("gpat-export-test-{}.csv", std::process::id()));
        write_results_csv(&path, &rows, by_id(StandardId::Ng)).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("id,term,code"));
        assert_eq!(lines[1], "42,1.1,MTH101,3,72,A,5.00,15.00,ng");
    }
}
