//! The grading-standard registry.
//!
//! A fixed catalog of national grading standards, each an ordered set of
//! (threshold, points, label) bands plus an inverse letter table. The catalog
//! is defined at compile time in [`tables`]; this module exposes lookups over
//! it. One generic band scan in `engine::classify` replaces any per-standard
//! branching.

use crate::domain::StandardId;
use crate::error::EngineError;

pub mod tables;

/// One classification band: scores at or above `min_score` earn `points` and
/// `label`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    /// Inclusive lower score bound, 0..=100.
    pub min_score: u8,
    pub points: f64,
    pub label: &'static str,
}

/// A national grading standard.
///
/// Invariants (checked by tests, relied on by the engine):
///
/// - `bands` is sorted by strictly decreasing `min_score`
/// - the last band has `min_score == 0`, so every score in 0..=100 matches
///   exactly one band when scanned high-to-low
///
/// The inverse `letters` table is an independent, literal mapping. Its scores
/// are representative midpoints and deliberately do not always coincide with
/// the band thresholds (notably for `uk`), so it must not be re-derived from
/// `bands`.
#[derive(Debug, Clone, Copy)]
pub struct GradingStandard {
    pub id: StandardId,
    pub display_name: &'static str,
    /// Ceiling of the point scale (e.g. 4, 5, 7, 10).
    pub max_points: f64,
    pub bands: &'static [GradeBand],
    /// Uppercase letter token -> representative score.
    pub letters: &'static [(&'static str, u8)],
}

impl GradingStandard {
    /// The letter tokens this standard accepts, in table order.
    pub fn letter_tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.letters.iter().map(|(token, _)| *token)
    }
}

/// All registered standards, in catalog order.
pub fn all() -> &'static [GradingStandard] {
    &tables::ALL
}

/// Look up a standard by its enum identifier.
pub fn by_id(id: StandardId) -> &'static GradingStandard {
    all()
        .iter()
        .find(|s| s.id == id)
        .expect("every StandardId has a catalog entry")
}

/// Resolve a string key (e.g. from a saved profile) to a standard.
pub fn resolve(key: &str) -> Result<&'static GradingStandard, EngineError> {
    all()
        .iter()
        .find(|s| s.id.key() == key)
        .ok_or_else(|| EngineError::UnknownStandard(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_knows_every_fixed_key() {
        for key in ["ng", "ui_special", "poly", "uk", "us", "in"] {
            let standard = resolve(key).unwrap();
            assert_eq!(standard.id.key(), key);
        }
        assert_eq!(all().len(), 6);
    }

    #[test]
    fn resolve_rejects_unknown_keys() {
        let err = resolve("de").unwrap_err();
        assert_eq!(err, EngineError::UnknownStandard("de".to_string()));
        assert!(resolve("").is_err());
        assert!(resolve("NG").is_err(), "keys are case-sensitive");
    }

    #[test]
    fn bands_are_strictly_decreasing_and_cover_zero() {
        for standard in all() {
            let id = standard.id.key();
            assert!(!standard.bands.is_empty(), "{id}: no bands");
            for pair in standard.bands.windows(2) {
                assert!(
                    pair[0].min_score > pair[1].min_score,
                    "{id}: thresholds not strictly decreasing"
                );
            }
            let bottom = standard.bands.last().unwrap();
            assert_eq!(bottom.min_score, 0, "{id}: lowest band must start at 0");
            assert_eq!(bottom.points, 0.0, "{id}: lowest band must award 0 points");
        }
    }

    #[test]
    fn top_band_points_equal_scale_max() {
        for standard in all() {
            assert_eq!(
                standard.bands[0].points,
                standard.max_points,
                "{}: top band should award the scale ceiling",
                standard.id.key()
            );
        }
    }

    #[test]
    fn letter_scores_stay_in_range() {
        for standard in all() {
            for (token, score) in standard.letters {
                assert!(
                    *score <= 100,
                    "{}: letter {token} maps outside 0..=100",
                    standard.id.key()
                );
                assert_eq!(
                    *token,
                    token.trim().to_uppercase(),
                    "{}: letter tokens are stored trimmed and uppercase",
                    standard.id.key()
                );
            }
        }
    }

    #[test]
    fn uk_inverse_table_diverges_from_band_thresholds() {
        // The uk inverse scores (75, 65, 55, 45, 0) are midpoints, not the
        // forward thresholds (70, 60, 50, 40, 0). The divergence is part of
        // the table contract.
        let uk = by_id(StandardId::Uk);
        assert_eq!(
            uk.letters,
            &[("1ST", 75), ("2:1", 65), ("2:2", 55), ("3RD", 45), ("FAIL", 0)]
        );
        assert_eq!(uk.bands[0].min_score, 70);
    }
}
