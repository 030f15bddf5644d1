//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the engine stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use std::collections::BTreeMap;

use crate::domain::{ClassifiedCourse, GpaSummary, TargetOutcome};
use crate::standards::GradingStandard;

/// Format the full run summary (course table + per-term GPAs + cumulative).
pub fn format_report(
    rows: &[ClassifiedCourse],
    by_term: &BTreeMap<String, GpaSummary>,
    overall: &GpaSummary,
    standard: &GradingStandard,
) -> String {
    let mut out = String::new();

    out.push_str("=== gpat - GPA Report ===\n");
    out.push_str(&format!(
        "Standard: {} [{}]\n",
        standard.display_name,
        standard.id.key()
    ));
    out.push_str(&format!("Scale max: {:.2}\n", standard.max_points));

    if rows.is_empty() {
        out.push_str("\nNo courses added yet.\n");
        return out;
    }

    out.push_str(&format!(
        "Courses: n={} | units={}\n\n",
        rows.len(),
        overall.total_units
    ));
    out.push_str(&format_table(rows));

    out.push_str("\nTerm GPA:\n");
    for (term, summary) in by_term {
        out.push_str(&format!(
            "- {term}: {:.2} (units={}, qp={:.2})\n",
            summary.gpa, summary.total_units, summary.quality_points
        ));
    }

    out.push_str(&format!(
        "\nCumulative GPA: {:.2} / {:.2}\n",
        overall.gpa, standard.max_points
    ));

    out
}

fn format_table(rows: &[ClassifiedCourse]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<12} {:>5} {:>5} {:<5} {:>6} {:>8}\n",
        "term", "code", "units", "score", "grade", "points", "qp"
    ));
    out.push_str(&format!(
        "{:-<6} {:-<12} {:-<5} {:-<5} {:-<5} {:-<6} {:-<8}\n",
        "", "", "", "", "", "", ""
    ));

    for row in rows {
        let c = &row.course;
        out.push_str(&format!(
            "{:<6} {:<12} {:>5} {:>5} {:<5} {:>6.2} {:>8.2}\n",
            c.term,
            truncate(&c.code, 12),
            c.units,
            c.score,
            row.class.label,
            row.class.points,
            row.quality_points,
        ));
    }

    out
}

/// Format the three-way target-solver outcome.
pub fn format_target(outcome: &TargetOutcome) -> String {
    match outcome {
        TargetOutcome::Unreachable { required, max } => format!(
            "Impossible: you would need {required:.2} next term, but the scale maxes out at {max:.2}."
        ),
        TargetOutcome::AlreadyExceeded => "You're already above this target.".to_string(),
        TargetOutcome::Achievable { required } => {
            format!("Aim for {required:.2} next term.")
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Classification, CourseRecord, StandardId};
    use crate::standards::by_id;

    fn row(term: &str, code: &str, score: u8, units: u32, label: &'static str, points: f64) -> ClassifiedCourse {
        ClassifiedCourse {
            course: CourseRecord {
                id: 0,
                term: term.to_string(),
                code: code.to_string(),
                score,
                units,
            },
            class: Classification { label, points },
            quality_points: units as f64 * points,
        }
    }

    #[test]
    fn report_lists_each_course_and_the_cumulative_gpa() {
        let rows = vec![
            row("1.1", "MTH101", 72, 3, "A", 5.0),
            row("1.1", "PHY101", 55, 2, "C", 3.0),
        ];
        let mut by_term = BTreeMap::new();
        by_term.insert(
            "1.1".to_string(),
            GpaSummary {
                total_units: 5,
                quality_points: 21.0,
                gpa: 4.2,
            },
        );
        let overall = GpaSummary {
            total_units: 5,
            quality_points: 21.0,
            gpa: 4.2,
        };

        let text = format_report(&rows, &by_term, &overall, by_id(StandardId::Ng));
        assert!(text.contains("Nigeria (5.0)"), "{text}");
        assert!(text.contains("MTH101"), "{text}");
        assert!(text.contains("PHY101"), "{text}");
        assert!(text.contains("- 1.1: 4.20"), "{text}");
        assert!(text.contains("Cumulative GPA: 4.20 / 5.00"), "{text}");
    }

    #[test]
    fn empty_report_has_an_empty_state_line() {
        let text = format_report(
            &[],
            &BTreeMap::new(),
            &GpaSummary {
                total_units: 0,
                quality_points: 0.0,
                gpa: 0.0,
            },
            by_id(StandardId::Us),
        );
        assert!(text.contains("No courses added yet."), "{text}");
    }

    #[test]
    fn target_messages_report_the_literal_requirement() {
        let unreachable = format_target(&TargetOutcome::Unreachable {
            required: 6.333333,
            max: 5.0,
        });
        assert!(unreachable.contains("6.33"), "{unreachable}");
        assert!(unreachable.contains("5.00"), "{unreachable}");

        assert_eq!(
            format_target(&TargetOutcome::AlreadyExceeded),
            "You're already above this target."
        );

        let achievable = format_target(&TargetOutcome::Achievable { required: 4.5 });
        assert!(achievable.contains("4.50"), "{achievable}");
    }

    #[test]
    fn long_course_codes_are_truncated() {
        assert_eq!(truncate("ABCDEFGHIJKLMNOP", 12), "ABCDEFGHIJK.");
        assert_eq!(truncate("SHORT", 12), "SHORT");
    }
}
