//! Score classification and letter-grade conversion.
//!
//! Classification scans a standard's bands in descending threshold order and
//! takes the first band whose `min_score` the score meets. Letter input is
//! converted to a representative score first, then classified like any other
//! score.

use crate::domain::Classification;
use crate::error::EngineError;
use crate::standards::GradingStandard;

/// Classify a pre-clamped score under a standard.
///
/// Callers are responsible for clamping raw input via [`clamp_score`];
/// anything above 100 here is rejected with `InvalidScore`.
pub fn classify(score: u8, standard: &GradingStandard) -> Result<Classification, EngineError> {
    if score > 100 {
        return Err(EngineError::InvalidScore(score));
    }

    let band = standard
        .bands
        .iter()
        .find(|band| band.min_score <= score)
        .expect("band tables cover the full 0..=100 range");

    Ok(Classification {
        label: band.label,
        points: band.points,
    })
}

/// Convert a letter token to its representative score under a standard.
///
/// The token is trimmed and uppercased before lookup, so `" b+ "` and `"B+"`
/// are equivalent.
pub fn score_from_letter(token: &str, standard: &GradingStandard) -> Result<u8, EngineError> {
    let normalized = token.trim().to_uppercase();
    standard
        .letters
        .iter()
        .find(|(letter, _)| *letter == normalized)
        .map(|(_, score)| *score)
        .ok_or_else(|| EngineError::UnknownGrade {
            token: token.trim().to_string(),
            standard: standard.id.key(),
        })
}

/// Clamp raw numeric input to a valid score: `<0 -> 0`, `>100 -> 100`,
/// rounded to the nearest integer.
pub fn clamp_score(raw: f64) -> u8 {
    let rounded = raw.round();
    if rounded < 0.0 {
        0
    } else if rounded > 100.0 {
        100
    } else {
        rounded as u8
    }
}
