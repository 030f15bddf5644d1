//! Target-GPA solver.
//!
//! Inverts the aggregation: given current totals and a desired cumulative
//! GPA, solve for the average quality points per unit needed over the next
//! `next_units`. The solver result is deliberately unclamped;
//! [`classify_target`] turns it into the three-way outcome the caller
//! reports.

use crate::domain::TargetOutcome;
use crate::error::EngineError;

/// Average quality points per unit needed over `next_units` to reach
/// `target_gpa` cumulatively.
///
/// `required = (target * (current_units + next_units) - current_qp) / next_units`
pub fn required_average(
    current_units: u32,
    current_quality_points: f64,
    target_gpa: f64,
    next_units: u32,
) -> Result<f64, EngineError> {
    if next_units == 0 {
        return Err(EngineError::InvalidInput(
            "Next-term units must be positive.".to_string(),
        ));
    }
    if !target_gpa.is_finite() {
        return Err(EngineError::InvalidInput(
            "Target GPA must be a number.".to_string(),
        ));
    }

    let combined_units = (current_units + next_units) as f64;
    Ok((target_gpa * combined_units - current_quality_points) / next_units as f64)
}

/// Classify an unclamped required average against the scale ceiling.
pub fn classify_target(required: f64, max_points: f64) -> TargetOutcome {
    if required > max_points {
        TargetOutcome::Unreachable {
            required,
            max: max_points,
        }
    } else if required < 0.0 {
        TargetOutcome::AlreadyExceeded
    } else {
        TargetOutcome::Achievable { required }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_average_matches_formula() {
        // ((5.0 * 8) - 21) / 3 = 19/3
        let required = required_average(5, 21.0, 5.0, 3).unwrap();
        assert!((required - 19.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn overshooting_the_scale_is_unreachable() {
        let required = required_average(5, 21.0, 5.0, 3).unwrap();
        match classify_target(required, 5.0) {
            TargetOutcome::Unreachable { required: r, max } => {
                assert!((r - 6.333333333333333).abs() < 1e-9);
                assert_eq!(max, 5.0);
            }
            other => panic!("expected Unreachable, got {other:?}"),
        }
    }

    #[test]
    fn negative_requirement_means_already_exceeded() {
        // ((3.0 * 12) - 40) / 2 = -2
        let required = required_average(10, 40.0, 3.0, 2).unwrap();
        assert!((required - (-2.0)).abs() < 1e-12);
        assert_eq!(classify_target(required, 4.0), TargetOutcome::AlreadyExceeded);
    }

    #[test]
    fn achievable_reports_the_literal_requirement() {
        // ((4.5 * 8) - 21) / 3 = 5.0, exactly the ng ceiling: still achievable.
        let required = required_average(5, 21.0, 4.5, 3).unwrap();
        assert!((required - 5.0).abs() < 1e-12);
        match classify_target(required, 5.0) {
            TargetOutcome::Achievable { required: r } => {
                assert!((r - 5.0).abs() < 1e-12);
            }
            other => panic!("expected Achievable, got {other:?}"),
        }
    }

    #[test]
    fn zero_requirement_is_achievable() {
        assert_eq!(
            classify_target(0.0, 4.0),
            TargetOutcome::Achievable { required: 0.0 }
        );
    }

    #[test]
    fn zero_next_units_is_invalid() {
        let err = required_average(5, 21.0, 4.0, 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn non_finite_target_is_invalid() {
        assert!(required_average(5, 21.0, f64::NAN, 3).is_err());
        assert!(required_average(5, 21.0, f64::INFINITY, 3).is_err());
    }

    #[test]
    fn solver_works_from_a_clean_slate() {
        let required = required_average(0, 0.0, 3.5, 5).unwrap();
        assert!((required - 3.5).abs() < 1e-12);
        assert_eq!(
            classify_target(required, 4.0),
            TargetOutcome::Achievable { required: 3.5 }
        );
    }
}
