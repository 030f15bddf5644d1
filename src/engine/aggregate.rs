//! Weighted GPA aggregation.
//!
//! Quality points for a course are `units * points`; totals accumulate
//! globally or per term key. Grouped results come back in a `BTreeMap`, i.e.
//! in ascending lexicographic key order, so "10.1" sorts before "2.1". The
//! table view sorts rows numerically instead (see `report`), but grouped
//! summaries keep the string order.

use std::collections::BTreeMap;

use crate::domain::{CourseRecord, GpaSummary};
use crate::engine::classify::classify;
use crate::error::EngineError;
use crate::standards::GradingStandard;

fn summary(total_units: u32, quality_points: f64) -> GpaSummary {
    let gpa = if total_units > 0 {
        quality_points / total_units as f64
    } else {
        0.0
    };
    GpaSummary {
        total_units,
        quality_points,
        gpa,
    }
}

/// Aggregate all records into one cumulative summary.
///
/// Zero records yield `total_units = 0, gpa = 0`; there is no division by
/// zero case.
pub fn aggregate(
    records: &[CourseRecord],
    standard: &GradingStandard,
) -> Result<GpaSummary, EngineError> {
    let mut total_units = 0u32;
    let mut quality_points = 0.0;

    for record in records {
        let class = classify(record.score, standard)?;
        total_units += record.units;
        quality_points += record.units as f64 * class.points;
    }

    Ok(summary(total_units, quality_points))
}

/// Aggregate records per term key (exact string match).
pub fn aggregate_by_term(
    records: &[CourseRecord],
    standard: &GradingStandard,
) -> Result<BTreeMap<String, GpaSummary>, EngineError> {
    let mut totals: BTreeMap<String, (u32, f64)> = BTreeMap::new();

    for record in records {
        let class = classify(record.score, standard)?;
        let entry = totals.entry(record.term.clone()).or_insert((0, 0.0));
        entry.0 += record.units;
        entry.1 += record.units as f64 * class.points;
    }

    Ok(totals
        .into_iter()
        .map(|(term, (units, qp))| (term, summary(units, qp)))
        .collect())
}
